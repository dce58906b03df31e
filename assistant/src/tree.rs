//! Expandable folder tree flattened into rows with connector trails.
//!
//! The view renders a flat list; each row carries the trail segments drawn
//! to its left. Root rows have no trail. A child of a root gets only its own
//! curved connector; deeper rows add one pass-through segment per ancestor
//! below the root level, drawn when that ancestor has later siblings.

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Folders expanded when a tree first renders.
pub const DEFAULT_EXPANDED_IDS: [&str; 2] = ["1", "1-2"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderKind {
    Folder,
    File,
}

/// One node of a folder tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: Option<FolderKind>,
    #[serde(default)]
    pub children: Vec<FolderItem>,
}

impl FolderItem {
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Nodes with children are folders even without an explicit tag.
    #[must_use]
    pub fn is_folder(&self) -> bool {
        self.kind == Some(FolderKind::Folder) || self.has_children()
    }
}

/// Connector drawn in one trail cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrailSegment {
    /// Curved connector into this row; the line continues to a later sibling.
    Branch,
    /// Curved connector into the last row of a level.
    Corner,
    /// Vertical line passing an ancestor level that has more siblings.
    Pass,
    Blank,
}

impl TrailSegment {
    #[must_use]
    pub fn new(go_below: bool, go_right: bool) -> Self {
        match (go_below, go_right) {
            (true, true) => Self::Branch,
            (false, true) => Self::Corner,
            (true, false) => Self::Pass,
            (false, false) => Self::Blank,
        }
    }
}

/// A visible row of the flattened tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeRow {
    pub id: String,
    pub name: String,
    pub depth: usize,
    pub trail: Vec<TrailSegment>,
    pub has_children: bool,
    pub is_expanded: bool,
    pub is_folder: bool,
}

/// What a row click resolves to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeClick {
    Folder(String),
    File(String),
}

/// Expansion state of a tree view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileTree {
    expanded: HashSet<String>,
}

impl Default for FileTree {
    fn default() -> Self {
        Self::with_expanded(DEFAULT_EXPANDED_IDS)
    }
}

impl FileTree {
    #[must_use]
    pub fn with_expanded<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { expanded: ids.into_iter().map(Into::into).collect() }
    }

    #[must_use]
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_owned());
        }
    }

    /// Toggle a node with children, then report whether a folder or a file
    /// was clicked.
    pub fn click(&mut self, item: &FolderItem) -> TreeClick {
        if item.has_children() {
            self.toggle(&item.id);
        }
        if item.is_folder() { TreeClick::Folder(item.id.clone()) } else { TreeClick::File(item.id.clone()) }
    }

    /// Depth-first lookup of a node by id.
    #[must_use]
    pub fn find<'a>(roots: &'a [FolderItem], id: &str) -> Option<&'a FolderItem> {
        roots.iter().find_map(|item| {
            if item.id == id { Some(item) } else { Self::find(&item.children, id) }
        })
    }

    /// Visible rows in display order.
    #[must_use]
    pub fn rows(&self, roots: &[FolderItem]) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        self.flatten(roots, 0, &[], &mut rows);
        rows
    }

    fn flatten(&self, items: &[FolderItem], depth: usize, ancestors_continue: &[bool], out: &mut Vec<TreeRow>) {
        for (index, item) in items.iter().enumerate() {
            let is_last = index + 1 == items.len();
            let is_expanded = self.is_expanded(&item.id);
            let trail = if depth == 0 {
                Vec::new()
            } else {
                ancestors_continue
                    .iter()
                    .map(|more| TrailSegment::new(*more, false))
                    .chain(std::iter::once(TrailSegment::new(!is_last, true)))
                    .collect()
            };
            out.push(TreeRow {
                id: item.id.clone(),
                name: item.name.clone(),
                depth,
                trail,
                has_children: item.has_children(),
                is_expanded,
                is_folder: item.is_folder(),
            });
            if item.has_children() && is_expanded {
                let next: Vec<bool> = if depth == 0 {
                    Vec::new()
                } else {
                    ancestors_continue.iter().copied().chain(std::iter::once(!is_last)).collect()
                };
                self.flatten(&item.children, depth + 1, &next, out);
            }
        }
    }
}
