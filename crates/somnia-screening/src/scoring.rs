use somnia_core::models::answer::ScreeningAnswers;
use somnia_core::models::result::RiskTier;

use crate::error::ScreeningError;

/// Count the Yes answers across all eight STOP-BANG items.
///
/// Defined only when every item has been answered; otherwise returns
/// `ScreeningError::Unanswered` naming the missing items.
pub fn compute_score(answers: &ScreeningAnswers) -> Result<u8, ScreeningError> {
    let unanswered = answers.unanswered_ids();
    if !unanswered.is_empty() {
        return Err(ScreeningError::Unanswered(
            unanswered.into_iter().map(String::from).collect(),
        ));
    }

    Ok(answers
        .fields()
        .iter()
        .filter(|(_, f)| f.value.is_yes())
        .count() as u8)
}

/// Map a total score onto its risk tier.
///
/// 0–2 low, 3–4 intermediate, 5–8 high. Anything else falls through to
/// `Unknown`, which is unreachable for scores produced by `compute_score`.
pub fn classify_risk(score: u8) -> RiskTier {
    match score {
        0..=2 => RiskTier::Low,
        3..=4 => RiskTier::Intermediate,
        5..=8 => RiskTier::High,
        _ => RiskTier::Unknown,
    }
}
