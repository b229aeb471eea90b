use alloc::string::String;
use alloc::sync::Arc;

use crate::Item;

/// Fired when the committed selection's id set changes.
pub type SelectionChangedCallback = Arc<dyn Fn(&[Item]) + Send + Sync>;

/// Fired whenever a new search text is applied.
pub type SearchPerformedCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Asks the host whether more data can be fetched.
///
/// The argument distinguishes a new-search fetch from a scroll fetch.
/// Without a registered callback the controller assumes `false`.
pub type CanLoadMoreCallback = Arc<dyn Fn(bool) -> bool + Send + Sync>;

/// Fired on every scroll event with the `[top, left]` position pair.
pub type ScrollCallback = Arc<dyn Fn([u64; 2]) + Send + Sync>;

/// A data fetch handed to the host.
///
/// The host fulfils it by calling
/// [`crate::SlicerController::complete_load`] with the same `generation`.
/// Only the most recently issued generation is honored; completions for
/// superseded requests are silently ignored, so a later-requested search
/// always wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadRequest {
    pub generation: u64,
    pub is_search: bool,
    /// Search text current at request time.
    pub search: String,
}

/// A failed host fetch.
///
/// Completion with an error only clears the in-flight flag; existing data is
/// left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadError {
    pub message: String,
}

impl LoadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl core::fmt::Display for LoadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "load failed: {}", self.message)
    }
}
