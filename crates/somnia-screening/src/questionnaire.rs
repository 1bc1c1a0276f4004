use serde::Serialize;
use ts_rs::TS;

/// Which half of the acronym an item belongs to. STOP items are symptom
/// questions; BANG items are demographic/anthropometric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionCategory {
    Stop,
    Bang,
}

/// One STOP-BANG questionnaire item.
///
/// `id` matches the field names on `ScreeningAnswers`, so front ends can
/// render the survey from this definition and answer by id.
#[derive(Debug, Clone, Copy, Serialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub category: QuestionCategory,
    /// True when the answer is normally produced by a measurement
    /// calculator rather than ticked directly.
    pub calculator_backed: bool,
}

/// The eight items, in presentation order.
pub const STOP_BANG_QUESTIONS: [Question; 8] = [
    Question {
        id: "snoring",
        prompt: "Do you snore loudly (louder than talking or loud enough to be heard through closed doors)?",
        category: QuestionCategory::Stop,
        calculator_backed: false,
    },
    Question {
        id: "tiredness",
        prompt: "Do you often feel tired, fatigued, or sleepy during the daytime?",
        category: QuestionCategory::Stop,
        calculator_backed: false,
    },
    Question {
        id: "observed_apnea",
        prompt: "Has anyone observed you stop breathing during your sleep?",
        category: QuestionCategory::Stop,
        calculator_backed: false,
    },
    Question {
        id: "hypertension",
        prompt: "Do you have, or are you being treated for, high blood pressure?",
        category: QuestionCategory::Stop,
        calculator_backed: false,
    },
    Question {
        id: "bmi_over_35",
        prompt: "Is your body mass index greater than 35?",
        category: QuestionCategory::Bang,
        calculator_backed: true,
    },
    Question {
        id: "age_over_50",
        prompt: "Are you older than 50?",
        category: QuestionCategory::Bang,
        calculator_backed: true,
    },
    Question {
        id: "neck_over_16",
        prompt: "Is your neck circumference greater than 16 inches?",
        category: QuestionCategory::Bang,
        calculator_backed: true,
    },
    Question {
        id: "male_gender",
        prompt: "Are you male?",
        category: QuestionCategory::Bang,
        calculator_backed: false,
    },
];

/// Look up an item by its stable id.
pub fn get_question(id: &str) -> Option<&'static Question> {
    STOP_BANG_QUESTIONS.iter().find(|q| q.id == id)
}
