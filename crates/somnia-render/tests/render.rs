use uuid::Uuid;

use somnia_core::models::result::{RiskTier, ScreeningResult};
use somnia_render::error::RenderError;
use somnia_render::render::ResultRenderer;
use somnia_render::view::ResultView;

fn result_with(score: u8, tier: RiskTier) -> ScreeningResult {
    ScreeningResult {
        id: Uuid::new_v4(),
        respondent_name: "Jane Doe".to_string(),
        score,
        risk_tier: tier,
        submitted_at: jiff::Timestamp::now(),
    }
}

#[test]
fn view_carries_greeting_score_and_tier_wording() {
    let view = ResultView::from_result(&result_with(5, RiskTier::High));
    assert!(view.greeting.contains("Jane Doe"));
    assert_eq!(view.score, 5);
    assert_eq!(view.score_display, "5/8");
    assert_eq!(view.tier_label, "High Risk");
    assert!(view.tier_text.contains("high risk"));
}

#[test]
fn each_tier_gets_its_own_explanation() {
    let tiers = [
        RiskTier::Low,
        RiskTier::Intermediate,
        RiskTier::High,
        RiskTier::Unknown,
    ];
    let texts: Vec<String> = tiers
        .iter()
        .map(|&tier| ResultView::from_result(&result_with(0, tier)).tier_text)
        .collect();

    for (i, a) in texts.iter().enumerate() {
        for b in texts.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn default_template_renders_for_every_tier() {
    let renderer = ResultRenderer::new().unwrap();
    for (score, tier) in [
        (0, RiskTier::Low),
        (4, RiskTier::Intermediate),
        (8, RiskTier::High),
        (0, RiskTier::Unknown),
    ] {
        let view = ResultView::from_result(&result_with(score, tier));
        let rendered = renderer.render_default(&view).unwrap();
        assert!(rendered.contains(&view.greeting));
        assert!(rendered.contains(&format!("{score}/8")));
        assert!(rendered.contains(&view.tier_label));
        assert!(rendered.contains(&view.tier_text));
    }
}

#[test]
fn custom_templates_see_the_view_fields() {
    let mut renderer = ResultRenderer::new().unwrap();
    renderer
        .add_template("banner", "{{ tier_label }}: {{ score }} points")
        .unwrap();

    let view = ResultView::from_result(&result_with(3, RiskTier::Intermediate));
    let rendered = renderer.render("banner", &view).unwrap();
    assert_eq!(rendered, "Intermediate Risk: 3 points");
}

#[test]
fn malformed_template_is_a_parse_error() {
    let mut renderer = ResultRenderer::new().unwrap();
    let err = renderer.add_template("broken", "{{ unclosed").unwrap_err();
    assert!(matches!(err, RenderError::TemplateParse(_)));
}

#[test]
fn unknown_variable_is_a_render_error() {
    let mut renderer = ResultRenderer::new().unwrap();
    renderer.add_template("bad_var", "{{ no_such_field }}").unwrap();

    let view = ResultView::from_result(&result_with(2, RiskTier::Low));
    let err = renderer.render("bad_var", &view).unwrap_err();
    assert!(matches!(err, RenderError::TemplateRender(_)));
}

#[test]
fn unregistered_template_names_are_a_render_error() {
    let renderer = ResultRenderer::new().unwrap();
    let view = ResultView::from_result(&result_with(2, RiskTier::Low));
    let err = renderer.render("no_such_template", &view).unwrap_err();
    assert!(matches!(err, RenderError::TemplateRender(_)));
}
