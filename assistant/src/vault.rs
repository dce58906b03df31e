//! Vault file listing: records, icon mapping, search and row selection.

#[cfg(test)]
#[path = "vault_test.rs"]
mod vault_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VaultEntryKind {
    Folder,
    File,
}

/// One row of the vault picker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultFile {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: VaultEntryKind,
    pub modified_date: String,
    #[serde(default)]
    pub size: Option<String>,
    pub path: String,
}

impl VaultFile {
    #[must_use]
    pub fn icon(&self) -> FileIcon {
        match self.kind {
            VaultEntryKind::Folder => FileIcon::Folder,
            VaultEntryKind::File => FileIcon::for_name(&self.name),
        }
    }

    /// Size cell text; folders and unsized files show a dash.
    #[must_use]
    pub fn size_label(&self) -> &str {
        self.size.as_deref().unwrap_or("-")
    }
}

/// Icon family for a vault row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileIcon {
    Folder,
    Pdf,
    Document,
    Spreadsheet,
    Generic,
}

impl FileIcon {
    /// Icon by file extension, case-insensitive.
    #[must_use]
    pub fn for_name(name: &str) -> Self {
        let extension = name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("pdf") => Self::Pdf,
            Some("docx" | "doc") => Self::Document,
            Some("xlsx" | "xls") => Self::Spreadsheet,
            _ => Self::Generic,
        }
    }

    #[must_use]
    pub fn asset(self) -> &'static str {
        match self {
            Self::Folder => "/folderIcon.svg",
            Self::Pdf => "/pdf-icon.svg",
            Self::Document => "/docx-icon.svg",
            Self::Spreadsheet => "/xlsx-icon.svg",
            Self::Generic => "/file.svg",
        }
    }
}

/// Rows whose name or size contains `query`, case-insensitively. A blank
/// query keeps every row.
#[must_use]
pub fn filter_files<'a>(files: &'a [VaultFile], query: &str) -> Vec<&'a VaultFile> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return files.iter().collect();
    }
    files
        .iter()
        .filter(|f| {
            f.name.to_lowercase().contains(&needle)
                || f.size.as_deref().is_some_and(|s| s.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Selected row ids of the picker table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileSelection {
    selected: HashSet<String>,
}

impl FileSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_owned());
        }
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// True when every visible row is selected and at least one is visible.
    #[must_use]
    pub fn all_selected(&self, visible: &[&VaultFile]) -> bool {
        !visible.is_empty() && visible.iter().all(|f| self.is_selected(&f.id))
    }

    /// Header checkbox: select all visible rows, or clear them when all are
    /// already selected. Hidden selections are kept.
    pub fn toggle_all(&mut self, visible: &[&VaultFile]) {
        if self.all_selected(visible) {
            for file in visible {
                self.selected.remove(&file.id);
            }
        } else {
            self.selected.extend(visible.iter().map(|f| f.id.clone()));
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Selected rows in source order.
    #[must_use]
    pub fn selected_files(&self, files: &[VaultFile]) -> Vec<VaultFile> {
        files.iter().filter(|f| self.is_selected(&f.id)).cloned().collect()
    }

    /// Footer text such as "1 file selected".
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} selected", file_count_label(self.len()))
    }
}

/// Picker dialog state; reset every time the dialog opens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VaultPicker {
    pub query: String,
    pub selection: FileSelection,
}

impl VaultPicker {
    pub fn reset(&mut self) {
        self.query.clear();
        self.selection.clear();
    }
}

/// "1 file" / "N files".
#[must_use]
pub fn file_count_label(count: usize) -> String {
    if count == 1 { "1 file".to_owned() } else { format!("{count} files") }
}
