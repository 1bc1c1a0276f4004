use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single survey question's response.
///
/// Modeled as an explicit three-value enumeration so "answered No" is never
/// conflated with "not answered yet."
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Answer {
    #[default]
    Unanswered,
    Yes,
    No,
}

impl Answer {
    pub fn is_answered(self) -> bool {
        self != Answer::Unanswered
    }

    pub fn is_yes(self) -> bool {
        self == Answer::Yes
    }

    /// Lift a computed boolean into a definite answer.
    pub fn from_bool(value: bool) -> Self {
        if value { Answer::Yes } else { Answer::No }
    }
}

/// Who supplied an answer: the respondent directly, or one of the
/// measurement calculators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AnswerSource {
    #[default]
    Respondent,
    Calculator,
}

/// An answer together with its provenance. Each question keeps a single
/// source of truth; calculator-backed questions are tagged `Calculator`
/// whenever a measurement produced their value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerField {
    pub value: Answer,
    pub source: AnswerSource,
}

impl AnswerField {
    pub fn respondent(value: Answer) -> Self {
        Self {
            value,
            source: AnswerSource::Respondent,
        }
    }

    pub fn calculator(value: Answer) -> Self {
        Self {
            value,
            source: AnswerSource::Calculator,
        }
    }
}

/// The eight STOP-BANG responses.
///
/// Field names double as the stable question ids used by the questionnaire
/// definition and the by-id accessors below.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningAnswers {
    pub snoring: AnswerField,
    pub tiredness: AnswerField,
    pub observed_apnea: AnswerField,
    pub hypertension: AnswerField,
    pub bmi_over_35: AnswerField,
    pub age_over_50: AnswerField,
    pub neck_over_16: AnswerField,
    pub male_gender: AnswerField,
}

impl ScreeningAnswers {
    /// All eight fields in questionnaire order, paired with their ids.
    pub fn fields(&self) -> [(&'static str, AnswerField); 8] {
        [
            ("snoring", self.snoring),
            ("tiredness", self.tiredness),
            ("observed_apnea", self.observed_apnea),
            ("hypertension", self.hypertension),
            ("bmi_over_35", self.bmi_over_35),
            ("age_over_50", self.age_over_50),
            ("neck_over_16", self.neck_over_16),
            ("male_gender", self.male_gender),
        ]
    }

    pub fn get(&self, question_id: &str) -> Option<AnswerField> {
        self.fields()
            .into_iter()
            .find(|(id, _)| *id == question_id)
            .map(|(_, field)| field)
    }

    pub fn field_mut(&mut self, question_id: &str) -> Option<&mut AnswerField> {
        match question_id {
            "snoring" => Some(&mut self.snoring),
            "tiredness" => Some(&mut self.tiredness),
            "observed_apnea" => Some(&mut self.observed_apnea),
            "hypertension" => Some(&mut self.hypertension),
            "bmi_over_35" => Some(&mut self.bmi_over_35),
            "age_over_50" => Some(&mut self.age_over_50),
            "neck_over_16" => Some(&mut self.neck_over_16),
            "male_gender" => Some(&mut self.male_gender),
            _ => None,
        }
    }

    pub fn all_answered(&self) -> bool {
        self.fields().iter().all(|(_, f)| f.value.is_answered())
    }

    /// Ids of the questions still waiting for a response.
    pub fn unanswered_ids(&self) -> Vec<&'static str> {
        self.fields()
            .into_iter()
            .filter(|(_, f)| !f.value.is_answered())
            .map(|(id, _)| id)
            .collect()
    }
}
