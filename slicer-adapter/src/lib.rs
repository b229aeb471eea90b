//! Controller utilities for the `slicer` crate.
//!
//! The `slicer` crate is UI-agnostic and focuses on selection and windowing
//! state. This crate provides the framework-neutral pieces a host
//! integration typically needs on top:
//!
//! - a concrete [`Item`] display payload (text, value, color, segments)
//! - [`SlicerController`]: wires the selection manager to the windowed list,
//!   emits host-facing events, runs local search filtering and the
//!   single-in-flight "load more data" workflow
//! - persisted [`SlicerState`] snapshots and passthrough [`SlicerSettings`]
//!
//! This crate is intentionally framework-agnostic (no DOM/TUI bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod events;
mod item;
mod settings;
mod state;

#[cfg(test)]
mod tests;

pub use controller::SlicerController;
pub use events::{
    CanLoadMoreCallback, LoadError, LoadRequest, ScrollCallback, SearchPerformedCallback,
    SelectionChangedCallback,
};
pub use item::{Item, ValueSegment};
pub use settings::SlicerSettings;
pub use state::SlicerState;
