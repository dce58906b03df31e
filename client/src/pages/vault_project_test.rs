use super::*;

#[test]
fn project_name_defaults_to_untitled() {
    assert_eq!(project_name(None), "Untitled");
    assert_eq!(project_name(Some("  ".to_owned())), "Untitled");
}

#[test]
fn project_name_keeps_query_value() {
    assert_eq!(project_name(Some("Amend v Delta IP Litigation".to_owned())), "Amend v Delta IP Litigation");
}
