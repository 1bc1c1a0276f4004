use thiserror::Error;

use crate::calculators::InvalidMeasurement;

#[derive(Debug, Error)]
pub enum ScreeningError {
    #[error("unanswered questions: {}", .0.join(", "))]
    Unanswered(Vec<String>),

    #[error(transparent)]
    Measurement(#[from] InvalidMeasurement),
}
