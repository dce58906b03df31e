use super::*;

#[test]
fn parses_workflows_with_type_tags() {
    let json = r#"[
        {"id": "nda", "title": "Draft an NDA", "description": "Mutual NDA", "type": "Draft", "steps": 3},
        {"id": "grid", "title": "Review contracts", "description": "Extract terms", "type": "Review", "steps": 2}
    ]"#;
    let workflows = parse_workflows(json).expect("parse");
    assert_eq!(workflows.len(), 2);
    assert_eq!(workflows[1].kind, WorkflowKind::Review);
    assert_eq!(workflows[0].steps, 3);
}

#[test]
fn rejects_unknown_workflow_type() {
    let json = r#"[{"id": "x", "title": "X", "description": "", "type": "Memo", "steps": 1}]"#;
    assert!(matches!(parse_workflows(json), Err(AssistantError::Dataset(_))));
}

#[test]
fn rejects_blank_title_and_duplicate_ids() {
    let blank = r#"[{"id": "x", "title": "  ", "description": "", "type": "Draft", "steps": 1}]"#;
    assert!(matches!(parse_workflows(blank), Err(AssistantError::InvalidRecord { record: "workflow", .. })));

    let dup = r#"[
        {"id": "x", "title": "A", "description": "", "type": "Draft", "steps": 1},
        {"id": "x", "title": "B", "description": "", "type": "Draft", "steps": 1}
    ]"#;
    assert!(matches!(parse_workflows(dup), Err(AssistantError::InvalidRecord { .. })));
}

#[test]
fn parses_vault_listing() {
    let json = r#"[
        {"id": "1", "name": "Legal Documents", "type": "folder", "modifiedDate": "2026-01-18", "path": "StubHub IPO/Legal Documents"},
        {"id": "9", "name": "Bylaws.pdf", "type": "file", "modifiedDate": "2026-01-16", "size": "345 KB", "path": "StubHub IPO/Legal Documents"}
    ]"#;
    let files = parse_vault_files(json).expect("parse");
    assert_eq!(files[0].kind, VaultEntryKind::Folder);
    assert_eq!(files[1].size.as_deref(), Some("345 KB"));
    assert_eq!(files[1].modified_date, "2026-01-16");
}

#[test]
fn rejects_sized_folder() {
    let json = r#"[{"id": "1", "name": "F", "type": "folder", "modifiedDate": "", "size": "1 KB", "path": ""}]"#;
    assert!(matches!(parse_vault_files(json), Err(AssistantError::InvalidRecord { .. })));
}

#[test]
fn folder_ids_are_unique_across_depths() {
    let ok = r#"[{"id": "1", "name": "Root", "children": [{"id": "1-1", "name": "Child"}]}]"#;
    let roots = parse_folders(ok).expect("parse");
    assert_eq!(roots[0].children.len(), 1);

    let dup = r#"[{"id": "1", "name": "Root", "children": [{"id": "1", "name": "Child"}]}]"#;
    assert!(parse_folders(dup).is_err());
}

#[test]
fn bundled_style_json_errors_are_reported() {
    assert!(matches!(parse_folders("{"), Err(AssistantError::Dataset(_))));
}
