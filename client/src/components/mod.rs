//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render chat, dialog and review-table surfaces. Page-scoped
//! state arrives as signals in props; app-wide state (toasts) comes from
//! Leptos context.

pub mod batch_columns_dialog;
pub mod chat_thread;
pub mod file_tree_view;
pub mod manage_grouped_files_popover;
pub mod monitoring_dialog;
pub mod review_filter_bar;
pub mod review_table_toolbar;
pub mod standard_dialog;
pub mod text_loop;
pub mod thinking_state;
pub mod toast;
pub mod vault_file_picker_dialog;
pub mod workflow_grid;
