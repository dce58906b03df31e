//! Batch column builder: prompt, simulated generation and column editing.
//!
//! DESIGN
//! ======
//! Generation is a single delayed step, modelled like the reply pipeline:
//! [`BatchColumnsForm::generate`] records a due time and
//! [`BatchColumnsForm::advance`] fills in the canned columns once it passes.
//! Closing the dialog resets the form and drops a pending generation.

#[cfg(test)]
#[path = "columns_test.rs"]
mod columns_test;

use serde::{Deserialize, Serialize};

/// Delay before generated columns appear.
pub const GENERATION_DELAY_MS: u64 = 1_500;

/// Answer format of a review column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnType {
    #[default]
    FreeResponse,
    Verbatim,
    Date,
    Number,
}

impl ColumnType {
    pub const ALL: [Self; 4] = [Self::FreeResponse, Self::Verbatim, Self::Date, Self::Number];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::FreeResponse => "free-response",
            Self::Verbatim => "verbatim",
            Self::Date => "date",
            Self::Number => "number",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FreeResponse => "Free response",
            Self::Verbatim => "Verbatim",
            Self::Date => "Date",
            Self::Number => "Number",
        }
    }

    /// Unknown ids map to free response.
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        Self::ALL.into_iter().find(|t| t.id() == id).unwrap_or_default()
    }
}

/// An editable row of the batch dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchColumn {
    pub id: String,
    pub title: String,
    pub query: String,
    pub column_type: ColumnType,
    pub selected: bool,
}

/// A column accepted into the review grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub title: String,
    pub query: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

/// Editable field of a [`BatchColumn`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColumnEdit {
    Title(String),
    Query(String),
    Type(ColumnType),
}

/// Tri-state of the header checkbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionState {
    None,
    Some,
    All,
}

const GENERATED: [(&str, &str, ColumnType); 5] = [
    ("Effective Date", "What is the effective date of the merger agreement?", ColumnType::Date),
    ("Acquiror", "Who is the acquiror?", ColumnType::Verbatim),
    ("Target", "Who is being acquired?", ColumnType::Verbatim),
    ("Other Parties", "What other parties are involved in the transaction?", ColumnType::FreeResponse),
    (
        "Simultaneous Sign and Close?",
        "Does the agreement provide for a simultaneous or bifurcated signing and closing?",
        ColumnType::FreeResponse,
    ),
];

/// Form state of the batch columns dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchColumnsForm {
    pub prompt: String,
    columns: Vec<BatchColumn>,
    generating_until: Option<u64>,
    next_id: u64,
}

impl BatchColumnsForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn columns(&self) -> &[BatchColumn] {
        &self.columns
    }

    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.generating_until.is_some()
    }

    #[must_use]
    pub fn can_generate(&self) -> bool {
        !self.prompt.trim().is_empty() && !self.is_generating()
    }

    /// Start generating columns from the prompt. Returns the due time, or
    /// `None` when the prompt is blank or a generation is already running.
    pub fn generate(&mut self, now_ms: u64) -> Option<u64> {
        if !self.can_generate() {
            return None;
        }
        let due = now_ms.saturating_add(GENERATION_DELAY_MS);
        self.generating_until = Some(due);
        Some(due)
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.generating_until
    }

    /// Finish a due generation, replacing the rows. Returns `true` when the
    /// rows changed.
    pub fn advance(&mut self, now_ms: u64) -> bool {
        match self.generating_until {
            Some(due) if due <= now_ms => {
                self.generating_until = None;
                let generated: Vec<BatchColumn> = GENERATED
                    .iter()
                    .map(|(title, query, column_type)| BatchColumn {
                        id: self.allocate_id(),
                        title: (*title).to_owned(),
                        query: (*query).to_owned(),
                        column_type: *column_type,
                        selected: true,
                    })
                    .collect();
                self.columns = generated;
                tracing::debug!(columns = self.columns.len(), "batch columns generated");
                true
            }
            _ => false,
        }
    }

    pub fn toggle(&mut self, id: &str) {
        if let Some(column) = self.find_mut(id) {
            column.selected = !column.selected;
        }
    }

    /// Select every row, or clear all when every row is already selected.
    pub fn toggle_all(&mut self) {
        let all = self.columns.iter().all(|c| c.selected);
        for column in &mut self.columns {
            column.selected = !all;
        }
    }

    #[must_use]
    pub fn selection_state(&self) -> SelectionState {
        let selected = self.columns.iter().filter(|c| c.selected).count();
        match selected {
            0 => SelectionState::None,
            n if n == self.columns.len() => SelectionState::All,
            _ => SelectionState::Some,
        }
    }

    pub fn update(&mut self, id: &str, edit: ColumnEdit) {
        let Some(column) = self.find_mut(id) else {
            return;
        };
        match edit {
            ColumnEdit::Title(title) => column.title = title,
            ColumnEdit::Query(query) => column.query = query,
            ColumnEdit::Type(column_type) => column.column_type = column_type,
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.columns.retain(|c| c.id != id);
    }

    /// Append a blank, selected free-response row.
    pub fn add_empty(&mut self) -> String {
        let id = self.allocate_id();
        self.columns.push(BatchColumn {
            id: id.clone(),
            title: String::new(),
            query: String::new(),
            column_type: ColumnType::FreeResponse,
            selected: true,
        });
        id
    }

    /// Columns that would be submitted: selected with a non-blank title.
    #[must_use]
    pub fn submittable(&self) -> Vec<ColumnSpec> {
        self.columns
            .iter()
            .filter(|c| c.selected && !c.title.trim().is_empty())
            .map(|c| ColumnSpec { title: c.title.clone(), query: c.query.clone(), column_type: c.column_type })
            .collect()
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.columns.iter().any(|c| c.selected && !c.title.trim().is_empty())
    }

    /// Take the submittable columns and reset the form. `None` leaves the
    /// form untouched.
    pub fn submit(&mut self) -> Option<Vec<ColumnSpec>> {
        let specs = self.submittable();
        if specs.is_empty() {
            return None;
        }
        self.reset();
        Some(specs)
    }

    /// Clear prompt, rows and any pending generation.
    pub fn reset(&mut self) {
        self.prompt.clear();
        self.columns.clear();
        self.generating_until = None;
    }

    fn allocate_id(&mut self) -> String {
        self.next_id += 1;
        format!("col-{}", self.next_id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut BatchColumn> {
        self.columns.iter_mut().find(|c| c.id == id)
    }
}
