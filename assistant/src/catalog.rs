//! Static reference datasets: workflow catalog, vault listing, folder tree.
//!
//! Datasets ship as JSON assets. Parsing rejects unknown type tags through
//! serde and then validates required fields, so the UI only ever sees
//! well-formed records.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{AssistantError, Result};
use crate::tree::FolderItem;
use crate::vault::{VaultEntryKind, VaultFile};

/// Category tag of a workflow card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkflowKind {
    Draft,
    Output,
    Review,
}

impl WorkflowKind {
    pub const ALL: [Self; 3] = [Self::Draft, Self::Output, Self::Review];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Output => "Output",
            Self::Review => "Review",
        }
    }
}

/// A launchable workflow shown on the assistant homepage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: WorkflowKind,
    pub steps: u32,
}

impl Workflow {
    /// # Errors
    ///
    /// Returns [`AssistantError::InvalidRecord`] for a blank id or title.
    pub fn validate(&self) -> Result<()> {
        require("workflow", "id", &self.id)?;
        require("workflow", "title", &self.title)
    }
}

/// Parse and validate the workflow catalog.
///
/// # Errors
///
/// Fails on malformed JSON, unknown type tags, blank fields or duplicate ids.
pub fn parse_workflows(json: &str) -> Result<Vec<Workflow>> {
    let workflows: Vec<Workflow> = serde_json::from_str(json)?;
    let mut seen = HashSet::new();
    for workflow in &workflows {
        workflow.validate()?;
        unique("workflow", &mut seen, &workflow.id)?;
    }
    Ok(workflows)
}

/// Parse and validate the mock vault listing.
///
/// # Errors
///
/// Fails on malformed JSON, unknown kinds, blank fields, duplicate ids or a
/// folder carrying a size.
pub fn parse_vault_files(json: &str) -> Result<Vec<VaultFile>> {
    let files: Vec<VaultFile> = serde_json::from_str(json)?;
    let mut seen = HashSet::new();
    for file in &files {
        require("vault file", "id", &file.id)?;
        require("vault file", "name", &file.name)?;
        unique("vault file", &mut seen, &file.id)?;
        if file.kind == VaultEntryKind::Folder && file.size.is_some() {
            return Err(AssistantError::invalid("vault file", format!("folder {} has a size", file.id)));
        }
    }
    Ok(files)
}

/// Parse and validate a folder tree.
///
/// # Errors
///
/// Fails on malformed JSON, blank fields or ids repeated anywhere in the tree.
pub fn parse_folders(json: &str) -> Result<Vec<FolderItem>> {
    let roots: Vec<FolderItem> = serde_json::from_str(json)?;
    let mut seen = HashSet::new();
    let mut stack: Vec<&FolderItem> = roots.iter().collect();
    while let Some(item) = stack.pop() {
        require("folder", "id", &item.id)?;
        require("folder", "name", &item.name)?;
        unique("folder", &mut seen, &item.id)?;
        stack.extend(item.children.iter());
    }
    Ok(roots)
}

fn require(record: &'static str, field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AssistantError::invalid(record, format!("{field} is empty")));
    }
    Ok(())
}

fn unique<'a>(record: &'static str, seen: &mut HashSet<&'a str>, id: &'a str) -> Result<()> {
    if !seen.insert(id) {
        return Err(AssistantError::invalid(record, format!("duplicate id {id}")));
    }
    Ok(())
}
