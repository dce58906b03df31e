use super::*;

#[test]
fn table_class_defaults_to_top_alignment() {
    let class = table_class(CellAlignment::Top, false, TextLength::Concise);
    assert_eq!(class, "review-table review-table--align-top");
}

#[test]
fn table_class_adds_wrap_and_extend_modifiers() {
    let class = table_class(CellAlignment::Bottom, true, TextLength::Extend);
    assert_eq!(class, "review-table review-table--align-bottom review-table--wrap review-table--extend");
}

#[test]
fn every_suggestion_has_a_prompt() {
    assert_eq!(SUGGESTION_LABELS.len(), ZERO_STATE_PROMPTS.len());
    assert!(REVIEW_PLACEHOLDERS.iter().all(|p| !p.is_empty()));
}
