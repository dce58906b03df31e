//! Core models and state machines for the legal assistant client.
//!
//! This crate is UI-framework agnostic: it owns chat threads, the simulated
//! response pipeline, scroll-driven reveal math, list filtering and the
//! dialog form models. The `client` crate renders these with Leptos and
//! drives the timers; everything here takes time as an explicit input so it
//! can be tested deterministically.

pub mod catalog;
pub mod clock;
pub mod columns;
pub mod conversation;
pub mod error;
pub mod filter;
pub mod filter_bar;
pub mod message;
pub mod monitoring;
pub mod nav;
pub mod pipeline;
pub mod responses;
pub mod review;
pub mod scroll;
pub mod store;
pub mod text_loop;
pub mod thread;
pub mod tree;
pub mod vault;

pub use error::{AssistantError, Result};
