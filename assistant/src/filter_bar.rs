//! Review table filter chips and column display options.

#[cfg(test)]
#[path = "filter_bar_test.rs"]
mod filter_bar_test;

use serde::{Deserialize, Serialize};

/// Placeholder value shown on a fresh filter chip.
pub const ALL_VALUES: &str = "All values";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterColumnType {
    File,
    Text,
    Selection,
}

/// A review column that can carry a filter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterableColumn {
    pub id: String,
    pub header: String,
    #[serde(rename = "type")]
    pub column_type: FilterColumnType,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterCondition {
    #[default]
    IsAnyOf,
    IsNoneOf,
}

impl FilterCondition {
    pub const ALL: [Self; 2] = [Self::IsAnyOf, Self::IsNoneOf];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::IsAnyOf => "is any of",
            Self::IsNoneOf => "is none of",
        }
    }
}

/// A filter chip in the bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveFilter {
    pub column_id: String,
    pub column_header: String,
    pub column_type: FilterColumnType,
    pub condition: FilterCondition,
    pub value: String,
}

impl ActiveFilter {
    #[must_use]
    pub fn value_label(&self) -> &str {
        if self.value.is_empty() { ALL_VALUES } else { &self.value }
    }
}

/// Filter chips, at most one per column, in the order they were added.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterBar {
    filters: Vec<ActiveFilter>,
}

impl FilterBar {
    #[must_use]
    pub fn filters(&self) -> &[ActiveFilter] {
        &self.filters
    }

    #[must_use]
    pub fn has_filters(&self) -> bool {
        !self.filters.is_empty()
    }

    #[must_use]
    pub fn is_filtered(&self, column_id: &str) -> bool {
        self.filters.iter().any(|f| f.column_id == column_id)
    }

    /// Columns that can still receive a filter.
    #[must_use]
    pub fn available<'a>(&self, columns: &'a [FilterableColumn]) -> Vec<&'a FilterableColumn> {
        columns.iter().filter(|c| !self.is_filtered(&c.id)).collect()
    }

    /// Add a filter for `column`. Returns `false` if one already exists.
    pub fn add(&mut self, column: &FilterableColumn) -> bool {
        if self.is_filtered(&column.id) {
            return false;
        }
        self.filters.push(ActiveFilter {
            column_id: column.id.clone(),
            column_header: column.header.clone(),
            column_type: column.column_type,
            condition: FilterCondition::default(),
            value: ALL_VALUES.to_owned(),
        });
        true
    }

    pub fn set_condition(&mut self, column_id: &str, condition: FilterCondition) {
        if let Some(filter) = self.filters.iter_mut().find(|f| f.column_id == column_id) {
            filter.condition = condition;
        }
    }

    pub fn remove(&mut self, column_id: &str) {
        self.filters.retain(|f| f.column_id != column_id);
    }

    pub fn clear(&mut self) {
        self.filters.clear();
    }
}

/// A column in the display options menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayColumn {
    pub id: String,
    pub header: String,
    pub visible: bool,
    #[serde(default)]
    pub fixed: bool,
}

/// Column order and visibility for the review table. Fixed columns always
/// lead; only the rest can be reordered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayColumns {
    columns: Vec<DisplayColumn>,
}

impl DisplayColumns {
    #[must_use]
    pub fn new(columns: Vec<DisplayColumn>) -> Self {
        let (mut fixed, sortable): (Vec<_>, Vec<_>) = columns.into_iter().partition(|c| c.fixed);
        fixed.extend(sortable);
        Self { columns: fixed }
    }

    #[must_use]
    pub fn all(&self) -> &[DisplayColumn] {
        &self.columns
    }

    pub fn fixed(&self) -> impl Iterator<Item = &DisplayColumn> {
        self.columns.iter().filter(|c| c.fixed)
    }

    pub fn sortable(&self) -> impl Iterator<Item = &DisplayColumn> {
        self.columns.iter().filter(|c| !c.fixed)
    }

    /// Ids of visible columns in display order.
    #[must_use]
    pub fn visible_ids(&self) -> Vec<&str> {
        self.columns.iter().filter(|c| c.visible).map(|c| c.id.as_str()).collect()
    }

    pub fn toggle_visibility(&mut self, id: &str) {
        if let Some(column) = self.columns.iter_mut().find(|c| c.id == id) {
            column.visible = !column.visible;
        }
    }

    /// Move the sortable column `active` to the slot of `over`. Fixed or
    /// unknown ids leave the order unchanged.
    pub fn reorder(&mut self, active: &str, over: &str) -> bool {
        if active == over {
            return false;
        }
        let fixed_count = self.fixed().count();
        let sortable = &mut self.columns[fixed_count..];
        let from = sortable.iter().position(|c| c.id == active);
        let to = sortable.iter().position(|c| c.id == over);
        let (Some(from), Some(to)) = (from, to) else {
            return false;
        };
        array_move(sortable, from, to);
        true
    }
}

/// Move the element at `from` to `to`, shifting the elements between.
pub fn array_move<T>(items: &mut [T], from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    if from < to {
        items[from..=to].rotate_left(1);
    } else {
        items[to..=from].rotate_right(1);
    }
}
