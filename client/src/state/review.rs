//! Review grid workspace state.
//!
//! DESIGN
//! ======
//! Composes the artifact header, table settings, filter chips and the
//! column set produced by the batch columns dialog. The first table column
//! is always the fixed file column; generated columns follow in insertion
//! order and can be hidden or reordered from display options.

#[cfg(test)]
#[path = "review_test.rs"]
mod review_test;

use assistant::columns::ColumnSpec;
use assistant::filter_bar::{DisplayColumn, DisplayColumns, FilterBar, FilterColumnType, FilterableColumn};
use assistant::monitoring::Monitor;
use assistant::review::{Artifact, TableSettings};
use assistant::vault::VaultFile;

pub const FILE_COLUMN_ID: &str = "file";
pub const FILE_COLUMN_HEADER: &str = "File";

/// Which modal, if any, is open over the review grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReviewDialog {
    #[default]
    None,
    VaultPicker,
    BatchColumns,
    Monitoring,
}

/// A generated table column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewColumn {
    pub id: String,
    pub spec: ColumnSpec,
}

#[derive(Clone, Debug)]
pub struct ReviewState {
    pub artifact: Artifact,
    pub settings: TableSettings,
    pub chat_open: bool,
    pub dialog: ReviewDialog,
    pub filters: FilterBar,
    pub display: DisplayColumns,
    pub monitor: Monitor,
    columns: Vec<ReviewColumn>,
    next_column: u64,
}

impl Default for ReviewState {
    fn default() -> Self {
        Self {
            artifact: Artifact::default(),
            settings: TableSettings::default(),
            chat_open: false,
            dialog: ReviewDialog::None,
            filters: FilterBar::default(),
            display: DisplayColumns::new(vec![file_display_column()]),
            monitor: Monitor::default(),
            columns: Vec::new(),
            next_column: 0,
        }
    }
}

impl ReviewState {
    pub fn columns(&self) -> &[ReviewColumn] {
        &self.columns
    }

    pub fn files(&self) -> &[VaultFile] {
        self.artifact.files()
    }

    pub fn set_files(&mut self, files: Vec<VaultFile>) {
        self.artifact.set_files(files);
    }

    pub fn toggle_chat(&mut self) {
        self.chat_open = !self.chat_open;
    }

    pub fn open(&mut self, dialog: ReviewDialog) {
        self.dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.dialog = ReviewDialog::None;
    }

    /// Append columns submitted from the batch dialog.
    pub fn add_columns(&mut self, specs: Vec<ColumnSpec>) {
        let mut display = self.display.all().to_vec();
        for spec in specs {
            self.next_column += 1;
            let id = format!("column-{}", self.next_column);
            display.push(DisplayColumn { id: id.clone(), header: spec.title.clone(), visible: true, fixed: false });
            self.columns.push(ReviewColumn { id, spec });
        }
        self.display = DisplayColumns::new(display);
    }

    /// Columns offered in the filter menu.
    pub fn filterable_columns(&self) -> Vec<FilterableColumn> {
        let file = FilterableColumn {
            id: FILE_COLUMN_ID.to_owned(),
            header: FILE_COLUMN_HEADER.to_owned(),
            column_type: FilterColumnType::File,
        };
        std::iter::once(file)
            .chain(self.columns.iter().map(|c| FilterableColumn {
                id: c.id.clone(),
                header: c.spec.title.clone(),
                column_type: FilterColumnType::Text,
            }))
            .collect()
    }

    /// Generated columns in display order, skipping hidden ones.
    pub fn visible_columns(&self) -> Vec<&ReviewColumn> {
        self.display
            .visible_ids()
            .into_iter()
            .filter_map(|id| self.columns.iter().find(|c| c.id == id))
            .collect()
    }

    pub fn is_file_column_visible(&self) -> bool {
        self.display.visible_ids().contains(&FILE_COLUMN_ID)
    }
}

fn file_display_column() -> DisplayColumn {
    DisplayColumn { id: FILE_COLUMN_ID.to_owned(), header: FILE_COLUMN_HEADER.to_owned(), visible: true, fixed: true }
}
