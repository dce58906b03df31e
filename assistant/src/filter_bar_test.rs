use super::*;

fn columns() -> Vec<FilterableColumn> {
    vec![
        FilterableColumn { id: "file".to_owned(), header: "File".to_owned(), column_type: FilterColumnType::File },
        FilterableColumn { id: "date".to_owned(), header: "Effective Date".to_owned(), column_type: FilterColumnType::Text },
    ]
}

fn display(id: &str, fixed: bool) -> DisplayColumn {
    DisplayColumn { id: id.to_owned(), header: id.to_uppercase(), visible: true, fixed }
}

#[test]
fn one_filter_per_column() {
    let cols = columns();
    let mut bar = FilterBar::default();
    assert!(bar.add(&cols[0]));
    assert!(!bar.add(&cols[0]));
    assert_eq!(bar.filters().len(), 1);
    assert_eq!(bar.filters()[0].value_label(), ALL_VALUES);
    assert_eq!(bar.filters()[0].condition, FilterCondition::IsAnyOf);

    let available: Vec<_> = bar.available(&cols).iter().map(|c| c.id.as_str()).collect();
    assert_eq!(available, vec!["date"]);
}

#[test]
fn condition_remove_and_clear() {
    let cols = columns();
    let mut bar = FilterBar::default();
    bar.add(&cols[0]);
    bar.add(&cols[1]);
    bar.set_condition("date", FilterCondition::IsNoneOf);
    assert_eq!(bar.filters()[1].condition.label(), "is none of");

    bar.remove("file");
    assert_eq!(bar.filters().len(), 1);
    assert!(bar.has_filters());
    bar.clear();
    assert!(!bar.has_filters());
}

#[test]
fn fixed_columns_lead_and_stay_put() {
    let mut cols = DisplayColumns::new(vec![display("a", false), display("file", true), display("b", false), display("c", false)]);
    let order = |cols: &DisplayColumns| cols.all().iter().map(|c| c.id.clone()).collect::<Vec<_>>();
    assert_eq!(order(&cols), vec!["file", "a", "b", "c"]);

    assert!(cols.reorder("c", "a"));
    assert_eq!(order(&cols), vec!["file", "c", "a", "b"]);
    assert!(!cols.reorder("file", "b"));
    assert!(!cols.reorder("a", "a"));
    assert_eq!(order(&cols), vec!["file", "c", "a", "b"]);
}

#[test]
fn visibility_toggle() {
    let mut cols = DisplayColumns::new(vec![display("file", true), display("a", false), display("b", false)]);
    cols.toggle_visibility("a");
    assert_eq!(cols.visible_ids(), vec!["file", "b"]);
    assert_eq!(cols.sortable().count(), 2);
    assert_eq!(cols.fixed().count(), 1);
}

#[test]
fn array_move_shifts_between() {
    let mut items = vec![1, 2, 3, 4, 5];
    array_move(&mut items, 0, 3);
    assert_eq!(items, vec![2, 3, 4, 1, 5]);
    array_move(&mut items, 4, 1);
    assert_eq!(items, vec![2, 5, 3, 4, 1]);
    array_move(&mut items, 9, 1);
    assert_eq!(items, vec![2, 5, 3, 4, 1]);
}
