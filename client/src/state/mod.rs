//! Reactive state containers shared through Leptos context.
//!
//! DESIGN
//! ======
//! Each state struct is plain data wrapped in an `RwSignal` by `app::App`.
//! Domain rules live in the `assistant` crate; these structs hold the page
//! level composition of those models plus presentation flags.

pub mod chat;
pub mod home;
pub mod review;
pub mod ui;
