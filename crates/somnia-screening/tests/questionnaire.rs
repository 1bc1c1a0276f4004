use std::collections::HashSet;

use somnia_core::models::answer::ScreeningAnswers;
use somnia_screening::questionnaire::{get_question, QuestionCategory, STOP_BANG_QUESTIONS};

#[test]
fn eight_items_with_unique_ids() {
    assert_eq!(STOP_BANG_QUESTIONS.len(), 8);
    let ids: HashSet<&str> = STOP_BANG_QUESTIONS.iter().map(|q| q.id).collect();
    assert_eq!(ids.len(), 8);
}

#[test]
fn four_stop_items_then_four_bang_items() {
    let stop = STOP_BANG_QUESTIONS
        .iter()
        .filter(|q| q.category == QuestionCategory::Stop)
        .count();
    assert_eq!(stop, 4);
    assert!(STOP_BANG_QUESTIONS[..4]
        .iter()
        .all(|q| q.category == QuestionCategory::Stop));
    assert!(STOP_BANG_QUESTIONS[4..]
        .iter()
        .all(|q| q.category == QuestionCategory::Bang));
}

#[test]
fn calculator_backed_items_are_the_derived_three() {
    let backed: HashSet<&str> = STOP_BANG_QUESTIONS
        .iter()
        .filter(|q| q.calculator_backed)
        .map(|q| q.id)
        .collect();
    assert_eq!(
        backed,
        HashSet::from(["bmi_over_35", "age_over_50", "neck_over_16"])
    );
}

#[test]
fn every_item_id_resolves_to_an_answer_field() {
    let answers = ScreeningAnswers::default();
    for question in &STOP_BANG_QUESTIONS {
        assert!(
            answers.get(question.id).is_some(),
            "no answer field for {}",
            question.id
        );
    }
}

#[test]
fn lookup_by_id() {
    assert_eq!(get_question("snoring").map(|q| q.id), Some("snoring"));
    assert!(get_question("shoe_size").is_none());
}
