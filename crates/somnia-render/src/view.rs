use serde::{Deserialize, Serialize};
use ts_rs::TS;

use somnia_core::models::result::{RiskTier, ScreeningResult};

/// The display payload for the result screen. Every field is addressable
/// by name in a result template.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResultView {
    pub greeting: String,
    pub score: u8,
    /// "N/8", as shown on the result screen.
    pub score_display: String,
    pub tier_label: String,
    pub tier_text: String,
}

impl ResultView {
    pub fn from_result(result: &ScreeningResult) -> Self {
        Self {
            greeting: format!(
                "Thank you for completing the screening, {}.",
                result.respondent_name
            ),
            score: result.score,
            score_display: format!("{}/8", result.score),
            tier_label: result.risk_tier.label().to_string(),
            tier_text: tier_text(result.risk_tier).to_string(),
        }
    }
}

fn tier_text(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::Low => {
            "Your answers place you at low risk for obstructive sleep apnea. \
             No follow-up is usually needed, but talk to your provider if \
             your sleep changes."
        }
        RiskTier::Intermediate => {
            "Your answers place you at intermediate risk for obstructive \
             sleep apnea. Consider discussing these results with your \
             healthcare provider."
        }
        RiskTier::High => {
            "Your answers place you at high risk for obstructive sleep \
             apnea. We recommend a follow-up evaluation with a sleep \
             specialist."
        }
        RiskTier::Unknown => {
            "We could not determine your risk from the answers provided. \
             Please review your responses with your healthcare provider."
        }
    }
}
