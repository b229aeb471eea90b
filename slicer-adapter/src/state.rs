use alloc::string::String;
use alloc::vec::Vec;

/// A flat, host-persistable snapshot of a slicer's restorable state.
///
/// Hosts write this to their own persistence channel (visual state, document
/// properties) and hand it back to
/// [`crate::SlicerController::restore`]. Writing the object and reading it
/// back reproduces an equivalent configuration; selection equality is by id
/// set, not object identity.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlicerState {
    pub search: String,
    pub selected_ids: Vec<String>,
    pub text_size: f32,
    pub item_text_color: Option<String>,
    pub left_text_align: bool,
    pub show_options: bool,
    pub show_search: bool,
    pub show_values: bool,
    pub show_selections: bool,
    pub value_column_width_percent: f32,
    pub horizontal: bool,
    pub single_select: bool,
    pub brush_mode: bool,
    /// `[top, left]` pair, axis-mapped from the scroll offset.
    pub scroll_position: [u64; 2],
    pub display_value_labels: bool,
    pub overflow_value_labels: bool,
}
