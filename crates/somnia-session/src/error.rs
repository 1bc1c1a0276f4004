use thiserror::Error;

use somnia_core::models::contact::ContactField;
use somnia_screening::calculators::InvalidMeasurement;
use somnia_screening::error::ScreeningError;

#[derive(Debug, Error)]
pub enum SessionError {
    /// Submit was invoked before the completion gate allows it. Nothing
    /// was mutated and no result was produced.
    #[error("survey is incomplete: {} unanswered question(s), {} missing contact field(s)",
        .unanswered.len(), .missing_contact.len())]
    Incomplete {
        unanswered: Vec<String>,
        missing_contact: Vec<ContactField>,
    },

    #[error("survey was already submitted; restart to make changes")]
    AlreadySubmitted,

    #[error("unknown question: {0}")]
    UnknownQuestion(String),

    /// The question's answer is owned by a calculator while its
    /// measurement is present; clear the measurement to answer directly.
    #[error("question '{question_id}' is derived from a measurement")]
    CalculatorOwned { question_id: String },

    #[error(transparent)]
    Measurement(#[from] InvalidMeasurement),

    #[error(transparent)]
    Screening(#[from] ScreeningError),
}
