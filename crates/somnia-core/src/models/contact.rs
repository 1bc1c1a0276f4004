use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Respondent contact details collected alongside the survey.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContactInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

/// Names the three contact fields, for per-field error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ContactField {
    FullName,
    Email,
    Phone,
}

impl ContactInfo {
    /// The completion gate checks non-emptiness only; syntactic validity is
    /// the field validators' concern.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn missing_fields(&self) -> Vec<ContactField> {
        let mut missing = Vec::new();
        if self.full_name.trim().is_empty() {
            missing.push(ContactField::FullName);
        }
        if self.email.trim().is_empty() {
            missing.push(ContactField::Email);
        }
        if self.phone.trim().is_empty() {
            missing.push(ContactField::Phone);
        }
        missing
    }
}
