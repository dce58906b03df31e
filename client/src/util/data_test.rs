use super::*;
use assistant::catalog::WorkflowKind;
use assistant::filter::{WorkflowTab, filter_workflows};
use assistant::vault::VaultEntryKind;

#[test]
fn bundled_workflows_parse() {
    let items = workflows();
    assert_eq!(items.len(), 20);
    assert_eq!(items.iter().filter(|w| w.kind == WorkflowKind::Draft).count(), 3);
}

#[test]
fn draft_nda_search_finds_one_card() {
    let shown = filter_workflows(workflows(), WorkflowTab::Kind(WorkflowKind::Draft), "nda");
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].title, "Draft an NDA");
}

#[test]
fn bundled_vault_files_parse() {
    let files = vault_files();
    assert_eq!(files.len(), 20);
    assert_eq!(files.iter().filter(|f| f.kind == VaultEntryKind::Folder).count(), 3);
    assert!(files.iter().filter(|f| f.kind == VaultEntryKind::File).all(|f| f.size.is_some()));
}

#[test]
fn bundled_folder_tree_parses() {
    let roots = folders();
    assert_eq!(roots.len(), 4);
    assert_eq!(roots[0].children.len(), 2);
    assert_eq!(roots[0].children[1].children.len(), 6);
}
