//! A headless core for attribute-slicer style list controls.
//!
//! For controller-level utilities (concrete items, search/load workflows,
//! persisted snapshots), see the `slicer-adapter` crate.
//!
//! This crate implements the two stateful subsystems such a control actually
//! needs: a selection state machine that reconciles click, shift-range,
//! ctrl-toggle and drag ("brush") gestures into one consistent multi-select
//! model, and a windowed renderer that materializes only a bounded slice of a
//! large ordered collection around the current scroll offset.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - the ordered item collection and viewport geometry
//! - abstract gesture events (clicks, hovers, drag start/end, modifier keys)
//! - `now_ms` timestamps and periodic `tick` calls for debounce/cleanup
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod list;
mod options;
mod selection;
mod types;


pub use list::VirtualList;
pub use options::{RenderCallback, SelectionChangedCallback, VirtualListOptions};
pub use selection::SelectionManager;
pub use types::{HoverDelta, KeyModifiers, Orientation, SlicerItem, WindowItem, WindowRange};
