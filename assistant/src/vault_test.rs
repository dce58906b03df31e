use super::*;

fn file(id: &str, name: &str, size: Option<&str>) -> VaultFile {
    VaultFile {
        id: id.to_owned(),
        name: name.to_owned(),
        kind: if size.is_some() { VaultEntryKind::File } else { VaultEntryKind::Folder },
        modified_date: "2026-01-20".to_owned(),
        size: size.map(str::to_owned),
        path: "StubHub IPO".to_owned(),
    }
}

fn sample() -> Vec<VaultFile> {
    vec![
        file("1", "Financial Statements", None),
        file("4", "StubHub_10K_2025.pdf", Some("4.8 MB")),
        file("5", "StubHub_Quarterly_Revenue_Q4_2025.xlsx", Some("2.1 MB")),
        file("7", "StubHub_Cash_Flow_Statement.xlsx", Some("890 KB")),
        file("10", "StubHub_Board_Resolutions_2025.docx", Some("234 KB")),
    ]
}

#[test]
fn icons_follow_extension() {
    assert_eq!(FileIcon::for_name("a.PDF"), FileIcon::Pdf);
    assert_eq!(FileIcon::for_name("a.doc"), FileIcon::Document);
    assert_eq!(FileIcon::for_name("a.xls"), FileIcon::Spreadsheet);
    assert_eq!(FileIcon::for_name("notes.txt"), FileIcon::Generic);
    assert_eq!(FileIcon::for_name("README"), FileIcon::Generic);
    assert_eq!(sample()[0].icon(), FileIcon::Folder);
    assert_eq!(sample()[0].size_label(), "-");
}

#[test]
fn filter_matches_name_or_size() {
    let files = sample();
    let names: Vec<_> = filter_files(&files, "QUARTERLY").iter().map(|f| f.id.as_str()).collect();
    assert_eq!(names, vec!["5"]);
    let by_size: Vec<_> = filter_files(&files, "kb").iter().map(|f| f.id.as_str()).collect();
    assert_eq!(by_size, vec!["7", "10"]);
    assert_eq!(filter_files(&files, "  ").len(), files.len());
    assert!(filter_files(&files, "[").is_empty());
}

#[test]
fn toggle_all_covers_visible_rows_only() {
    let files = sample();
    let mut selection = FileSelection::new();
    selection.toggle("4");

    let visible = filter_files(&files, "xlsx");
    assert!(!selection.all_selected(&visible));
    selection.toggle_all(&visible);
    assert!(selection.all_selected(&visible));
    assert_eq!(selection.len(), 3);

    selection.toggle_all(&visible);
    assert_eq!(selection.len(), 1);
    assert!(selection.is_selected("4"));
}

#[test]
fn selected_files_keep_source_order() {
    let files = sample();
    let mut selection = FileSelection::new();
    selection.toggle("10");
    selection.toggle("1");
    selection.toggle("5");
    selection.toggle("5");
    let ids: Vec<_> = selection.selected_files(&files).into_iter().map(|f| f.id).collect();
    assert_eq!(ids, vec!["1", "10"]);
    assert_eq!(selection.summary(), "2 files selected");
}

#[test]
fn picker_reset_clears_query_and_selection() {
    let mut picker = VaultPicker::default();
    picker.query.push_str("pdf");
    picker.selection.toggle("4");
    picker.reset();
    assert_eq!(picker, VaultPicker::default());
    assert_eq!(file_count_label(1), "1 file");
    assert_eq!(file_count_label(0), "0 files");
}
