use super::*;

fn generated_form() -> BatchColumnsForm {
    let mut form = BatchColumnsForm::new();
    form.prompt = "Merger agreement terms".to_owned();
    let due = form.generate(1_000).expect("generation starts");
    assert!(form.advance(due));
    form
}

#[test]
fn blank_prompt_does_not_generate() {
    let mut form = BatchColumnsForm::new();
    form.prompt = "   ".to_owned();
    assert_eq!(form.generate(0), None);
    assert!(!form.is_generating());
}

#[test]
fn generation_completes_after_delay() {
    let mut form = BatchColumnsForm::new();
    form.prompt = "Merger agreement terms".to_owned();
    assert_eq!(form.generate(1_000), Some(2_500));
    assert!(form.is_generating());
    assert_eq!(form.generate(1_100), None);

    assert!(!form.advance(2_499));
    assert!(form.columns().is_empty());
    assert!(form.advance(2_500));

    let titles: Vec<_> = form.columns().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Effective Date", "Acquiror", "Target", "Other Parties", "Simultaneous Sign and Close?"]);
    assert_eq!(form.columns()[0].column_type, ColumnType::Date);
    assert_eq!(form.selection_state(), SelectionState::All);
    assert!(!form.is_generating());
}

#[test]
fn toggle_all_flips_between_all_and_none() {
    let mut form = generated_form();
    let first = form.columns()[0].id.clone();
    form.toggle(&first);
    assert_eq!(form.selection_state(), SelectionState::Some);

    form.toggle_all();
    assert_eq!(form.selection_state(), SelectionState::All);
    form.toggle_all();
    assert_eq!(form.selection_state(), SelectionState::None);
    assert!(!form.can_submit());
}

#[test]
fn submit_skips_unselected_and_untitled_columns() {
    let mut form = generated_form();
    let ids: Vec<_> = form.columns().iter().map(|c| c.id.clone()).collect();
    form.toggle(&ids[1]);
    form.update(&ids[2], ColumnEdit::Title("  ".to_owned()));
    form.update(&ids[3], ColumnEdit::Type(ColumnType::Number));
    form.remove(&ids[4]);
    let blank = form.add_empty();
    assert_eq!(form.columns().len(), 5);
    assert!(form.columns().iter().any(|c| c.id == blank && c.selected));

    let specs = form.submit().expect("columns submitted");
    let titles: Vec<_> = specs.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Effective Date", "Other Parties"]);
    assert_eq!(specs[1].column_type, ColumnType::Number);
    assert_eq!(form, BatchColumnsForm { next_id: form.next_id, ..BatchColumnsForm::default() });
}

#[test]
fn empty_submit_is_a_no_op() {
    let mut form = BatchColumnsForm::new();
    form.add_empty();
    assert_eq!(form.submit(), None);
    assert_eq!(form.columns().len(), 1);
}

#[test]
fn reset_drops_pending_generation() {
    let mut form = BatchColumnsForm::new();
    form.prompt = "terms".to_owned();
    form.generate(0);
    form.reset();
    assert!(!form.advance(10_000));
    assert!(form.columns().is_empty());
    assert!(form.prompt.is_empty());
}

#[test]
fn column_type_ids() {
    for column_type in ColumnType::ALL {
        assert_eq!(ColumnType::from_id(column_type.id()), column_type);
    }
    assert_eq!(ColumnType::from_id("rating"), ColumnType::FreeResponse);
    let json = serde_json::to_string(&ColumnType::FreeResponse).expect("serialize");
    assert_eq!(json, "\"free-response\"");
}
