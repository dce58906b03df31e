//! Bundled mock datasets.
//!
//! DESIGN
//! ======
//! The JSON files under `client/data` are compiled into the binary and
//! parsed once. A dataset that fails validation renders as an empty list
//! and logs the reason in the browser console.

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

use std::sync::LazyLock;

use assistant::catalog::{Workflow, parse_folders, parse_vault_files, parse_workflows};
use assistant::tree::FolderItem;
use assistant::vault::VaultFile;

const WORKFLOWS_JSON: &str = include_str!("../../data/workflows.json");
const VAULT_FILES_JSON: &str = include_str!("../../data/vault_files.json");
const FOLDERS_JSON: &str = include_str!("../../data/folders.json");

static WORKFLOWS: LazyLock<Vec<Workflow>> = LazyLock::new(|| or_empty("workflows", parse_workflows(WORKFLOWS_JSON)));
static VAULT_FILES: LazyLock<Vec<VaultFile>> =
    LazyLock::new(|| or_empty("vault files", parse_vault_files(VAULT_FILES_JSON)));
static FOLDERS: LazyLock<Vec<FolderItem>> = LazyLock::new(|| or_empty("folders", parse_folders(FOLDERS_JSON)));

pub fn workflows() -> &'static [Workflow] {
    &WORKFLOWS
}

pub fn vault_files() -> &'static [VaultFile] {
    &VAULT_FILES
}

pub fn folders() -> &'static [FolderItem] {
    &FOLDERS
}

fn or_empty<T>(dataset: &str, parsed: assistant::Result<Vec<T>>) -> Vec<T> {
    match parsed {
        Ok(items) => items,
        Err(err) => {
            #[cfg(feature = "hydrate")]
            log::error!("{dataset} dataset rejected: {err}");
            #[cfg(not(feature = "hydrate"))]
            let _ = (dataset, err);
            Vec::new()
        }
    }
}
