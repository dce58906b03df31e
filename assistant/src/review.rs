//! Review grid workspace: artifact header, inline title editing and table
//! toolbar settings.

#[cfg(test)]
#[path = "review_test.rs"]
mod review_test;

use serde::{Deserialize, Serialize};

use crate::vault::{VaultFile, file_count_label};

pub const DEFAULT_ARTIFACT_TITLE: &str = "New review table";
pub const TITLE_UPDATED_NOTICE: &str = "Review grid title updated";

/// Suggestions shown in the empty chat panel.
pub const ZERO_STATE_PROMPTS: [&str; 3] = [
    "Add columns for key terms, effective date, and parties",
    "Extract key clauses from all uploaded documents",
    "Compare terms across all documents and highlight differences",
];

/// Outcome of finishing a title edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TitleCommit {
    /// The title changed; the caller shows [`TITLE_UPDATED_NOTICE`].
    Updated(String),
    Unchanged,
    /// The draft was blank and the previous title was restored.
    Reverted,
}

/// Title and subtitle of the open review artifact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    pub title: String,
    pub subtitle: String,
    files: Vec<VaultFile>,
    editor: Option<String>,
}

impl Default for Artifact {
    fn default() -> Self {
        Self { title: DEFAULT_ARTIFACT_TITLE.to_owned(), subtitle: String::new(), files: Vec::new(), editor: None }
    }
}

impl Artifact {
    #[must_use]
    pub fn files(&self) -> &[VaultFile] {
        &self.files
    }

    /// No files picked yet; the grid shows its empty state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Replace the files under review and refresh the subtitle.
    pub fn set_files(&mut self, files: Vec<VaultFile>) {
        self.subtitle = file_count_label(files.len());
        self.files = files;
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    /// Current draft while editing.
    #[must_use]
    pub fn draft(&self) -> Option<&str> {
        self.editor.as_deref()
    }

    /// Begin editing, seeding the draft with the current title.
    pub fn start_editing(&mut self) {
        self.editor = Some(self.title.clone());
    }

    pub fn set_draft(&mut self, value: &str) {
        if let Some(draft) = &mut self.editor {
            value.clone_into(draft);
        }
    }

    /// Finish editing. Blank drafts revert; a changed draft is kept as typed.
    pub fn commit_title(&mut self) -> TitleCommit {
        let Some(draft) = self.editor.take() else {
            return TitleCommit::Unchanged;
        };
        if draft.trim().is_empty() {
            return TitleCommit::Reverted;
        }
        if draft == self.title {
            return TitleCommit::Unchanged;
        }
        self.title.clone_from(&draft);
        TitleCommit::Updated(draft)
    }

    pub fn cancel_editing(&mut self) {
        self.editor = None;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellAlignment {
    Top,
    #[default]
    Center,
    Bottom,
}

impl CellAlignment {
    pub const ALL: [Self; 3] = [Self::Top, Self::Center, Self::Bottom];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::Center => "Center",
            Self::Bottom => "Bottom",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextLength {
    #[default]
    Concise,
    Extend,
}

/// Table display settings controlled from the toolbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TableSettings {
    pub alignment: CellAlignment,
    pub text_wrap: bool,
    pub text_length: TextLength,
}
