use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Risk stratum derived from the total STOP-BANG score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskTier {
    Low,
    Intermediate,
    High,
    /// Defensive default for scores outside 0–8; unreachable from the
    /// scoring engine.
    Unknown,
}

impl RiskTier {
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low Risk",
            RiskTier::Intermediate => "Intermediate Risk",
            RiskTier::High => "High Risk",
            RiskTier::Unknown => "Unknown Risk",
        }
    }
}

/// The immutable outcome of a submitted screening. Created once per
/// submission and discarded on restart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningResult {
    pub id: Uuid,
    pub respondent_name: String,
    /// Count of Yes answers, 0–8.
    pub score: u8,
    pub risk_tier: RiskTier,
    pub submitted_at: jiff::Timestamp,
}
