use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;
use uuid::Uuid;

use somnia_core::models::answer::{Answer, AnswerField, ScreeningAnswers};
use somnia_core::models::contact::ContactInfo;
use somnia_core::models::measurement::{BodyMetrics, NeckAge};
use somnia_core::models::result::ScreeningResult;
use somnia_screening::calculators::{self, Bmi};
use somnia_screening::scoring;
use somnia_screening::validators::{self, ContactFieldError};

use crate::error::SessionError;
use crate::events::SessionEvent;

/// Where the session is in its lifecycle. `Complete` means the completion
/// gate is open: all eight questions answered and all three contact fields
/// non-empty. Syntactic validity of the contact fields is not part of the
/// gate; the inline validators handle that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SessionStatus {
    InProgress,
    Complete,
    Submitted,
}

/// One respondent's in-memory survey session.
///
/// Plain owned value: the embedding view holds exactly one and serializes
/// access, so every transition is atomic from the UI's point of view.
#[derive(Debug, Clone, Default)]
pub struct SurveySession {
    answers: ScreeningAnswers,
    body_metrics: Option<BodyMetrics>,
    neck_age: Option<NeckAge>,
    contact: ContactInfo,
    result: Option<ScreeningResult>,
}

impl SurveySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SessionStatus {
        if self.result.is_some() {
            SessionStatus::Submitted
        } else if self.answers.all_answered() && self.contact.is_complete() {
            SessionStatus::Complete
        } else {
            SessionStatus::InProgress
        }
    }

    pub fn answers(&self) -> &ScreeningAnswers {
        &self.answers
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    pub fn body_metrics(&self) -> Option<&BodyMetrics> {
        self.body_metrics.as_ref()
    }

    pub fn neck_age(&self) -> Option<&NeckAge> {
        self.neck_age.as_ref()
    }

    pub fn result(&self) -> Option<&ScreeningResult> {
        self.result.as_ref()
    }

    /// Record a respondent-supplied answer by question id.
    ///
    /// Calculator-backed questions refuse direct answers while their
    /// measurement is present; the calculator owns them until it is cleared.
    pub fn answer(&mut self, question_id: &str, value: Answer) -> Result<(), SessionError> {
        self.ensure_not_submitted()?;

        let calculator_owned = match question_id {
            "bmi_over_35" => self.body_metrics.is_some(),
            "neck_over_16" | "age_over_50" => self.neck_age.is_some(),
            _ => false,
        };
        if calculator_owned {
            return Err(SessionError::CalculatorOwned {
                question_id: question_id.to_string(),
            });
        }

        let field = self
            .answers
            .field_mut(question_id)
            .ok_or_else(|| SessionError::UnknownQuestion(question_id.to_string()))?;
        *field = AnswerField::respondent(value);
        Ok(())
    }

    pub fn set_contact(&mut self, contact: ContactInfo) -> Result<(), SessionError> {
        self.ensure_not_submitted()?;
        self.contact = contact;
        Ok(())
    }

    /// Run the inline validators over the current contact details.
    pub fn validate_contact(&self) -> Vec<ContactFieldError> {
        validators::validate_contact(&self.contact)
    }

    /// Store a height/weight measurement and derive the BMI answer from it.
    ///
    /// On an invalid measurement nothing changes: the previous metrics and
    /// the previous answer stay in place.
    pub fn set_body_metrics(&mut self, metrics: BodyMetrics) -> Result<Bmi, SessionError> {
        self.ensure_not_submitted()?;

        let bmi = calculators::compute_bmi(
            metrics.height,
            metrics.height_unit,
            metrics.weight,
            metrics.weight_unit,
        )?;

        self.body_metrics = Some(metrics);
        self.answers.bmi_over_35 = AnswerField::calculator(Answer::from_bool(bmi.over_35));
        debug!(kind = "body_metrics", bmi = bmi.value, "measurement updated");
        Ok(bmi)
    }

    /// Drop the height/weight measurement; the BMI answer returns to
    /// unanswered, not to No.
    pub fn clear_body_metrics(&mut self) -> Result<(), SessionError> {
        self.ensure_not_submitted()?;
        if self.body_metrics.take().is_some() {
            self.answers.bmi_over_35 = AnswerField::default();
            debug!(kind = "body_metrics", "measurement cleared");
        }
        Ok(())
    }

    /// Store a neck/age measurement and derive both of its answers.
    /// Both inputs are checked before either answer is touched.
    pub fn set_neck_age(&mut self, input: NeckAge) -> Result<(), SessionError> {
        self.ensure_not_submitted()?;

        let neck_over_16 = calculators::compute_neck_over_16(input.neck_size, input.neck_unit)?;
        let age_over_50 = calculators::compute_age_over_50(input.age)?;

        self.neck_age = Some(input);
        self.answers.neck_over_16 = AnswerField::calculator(Answer::from_bool(neck_over_16));
        self.answers.age_over_50 = AnswerField::calculator(Answer::from_bool(age_over_50));
        debug!(kind = "neck_age", "measurement updated");
        Ok(())
    }

    pub fn clear_neck_age(&mut self) -> Result<(), SessionError> {
        self.ensure_not_submitted()?;
        if self.neck_age.take().is_some() {
            self.answers.neck_over_16 = AnswerField::default();
            self.answers.age_over_50 = AnswerField::default();
            debug!(kind = "neck_age", "measurement cleared");
        }
        Ok(())
    }

    /// Score the survey and transition to `Submitted`.
    ///
    /// Fails with `Incomplete` while the gate is closed, producing no
    /// result and mutating nothing. Terminal once it succeeds: every later
    /// mutation fails with `AlreadySubmitted` until `restart`.
    pub fn submit(&mut self) -> Result<ScreeningResult, SessionError> {
        self.ensure_not_submitted()?;

        let unanswered = self.answers.unanswered_ids();
        let missing_contact = self.contact.missing_fields();
        if !unanswered.is_empty() || !missing_contact.is_empty() {
            return Err(SessionError::Incomplete {
                unanswered: unanswered.into_iter().map(String::from).collect(),
                missing_contact,
            });
        }

        let score = scoring::compute_score(&self.answers)?;
        let result = ScreeningResult {
            id: Uuid::new_v4(),
            respondent_name: self.contact.full_name.trim().to_string(),
            score,
            risk_tier: scoring::classify_risk(score),
            submitted_at: jiff::Timestamp::now(),
        };

        SessionEvent::new("survey_submitted")
            .with_details(serde_json::json!({
                "result_id": result.id,
                "score": result.score,
                "risk_tier": result.risk_tier.label(),
            }))
            .emit();

        self.result = Some(result.clone());
        Ok(result)
    }

    /// Reset to a fresh session: answers unanswered, contact empty,
    /// measurements gone, result discarded. Safe to call repeatedly.
    pub fn restart(&mut self) {
        *self = Self::default();
        SessionEvent::new("survey_restarted").emit();
    }

    fn ensure_not_submitted(&self) -> Result<(), SessionError> {
        if self.result.is_some() {
            return Err(SessionError::AlreadySubmitted);
        }
        Ok(())
    }
}
