use somnia_core::models::answer::{Answer, AnswerField, ScreeningAnswers};
use somnia_core::models::result::RiskTier;
use somnia_screening::error::ScreeningError;
use somnia_screening::scoring::{classify_risk, compute_score};

/// Build a fully-answered set with exactly `yes_count` Yes answers.
fn answers_with_yes(yes_count: usize) -> ScreeningAnswers {
    let mut answers = ScreeningAnswers::default();
    let ids: Vec<&'static str> = answers.fields().iter().map(|(id, _)| *id).collect();
    for (i, id) in ids.iter().enumerate() {
        let value = if i < yes_count { Answer::Yes } else { Answer::No };
        *answers.field_mut(id).unwrap() = AnswerField::respondent(value);
    }
    answers
}

#[test]
fn score_counts_yes_answers_for_every_k() {
    for k in 0..=8 {
        let answers = answers_with_yes(k);
        assert_eq!(compute_score(&answers).unwrap(), k as u8);
    }
}

#[test]
fn score_is_undefined_while_any_question_is_unanswered() {
    let mut answers = answers_with_yes(8);
    answers.hypertension = AnswerField::default();

    match compute_score(&answers) {
        Err(ScreeningError::Unanswered(missing)) => {
            assert_eq!(missing, vec!["hypertension".to_string()]);
        }
        other => panic!("expected Unanswered error, got {other:?}"),
    }
}

#[test]
fn fully_blank_survey_reports_all_eight_questions() {
    let answers = ScreeningAnswers::default();
    match compute_score(&answers) {
        Err(ScreeningError::Unanswered(missing)) => assert_eq!(missing.len(), 8),
        other => panic!("expected Unanswered error, got {other:?}"),
    }
}

#[test]
fn risk_tiers_match_the_published_cutoffs() {
    assert_eq!(classify_risk(0), RiskTier::Low);
    assert_eq!(classify_risk(2), RiskTier::Low);
    assert_eq!(classify_risk(3), RiskTier::Intermediate);
    assert_eq!(classify_risk(4), RiskTier::Intermediate);
    assert_eq!(classify_risk(5), RiskTier::High);
    assert_eq!(classify_risk(8), RiskTier::High);
}

#[test]
fn out_of_range_score_falls_through_to_unknown() {
    assert_eq!(classify_risk(9), RiskTier::Unknown);
    assert_eq!(classify_risk(255), RiskTier::Unknown);
}

#[test]
fn risk_never_decreases_as_the_score_rises() {
    fn rank(tier: RiskTier) -> u8 {
        match tier {
            RiskTier::Low => 0,
            RiskTier::Intermediate => 1,
            RiskTier::High => 2,
            RiskTier::Unknown => panic!("unexpected tier in 0..=8"),
        }
    }

    let mut previous = rank(classify_risk(0));
    for score in 1..=8 {
        let current = rank(classify_risk(score));
        assert!(current >= previous, "tier dropped at score {score}");
        previous = current;
    }
}
