//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod assistant_home;
pub mod assistant_thread;
pub mod review_grid;
pub mod vault_project;
