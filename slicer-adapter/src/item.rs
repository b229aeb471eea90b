use alloc::string::String;
use alloc::vec::Vec;

use slicer::SlicerItem;

/// One segment of an item's stacked value breakdown.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueSegment {
    pub value: f64,
    pub color: Option<String>,
}

/// A concrete slicer item: a stable id plus the display payload consumed by
/// host renderers.
///
/// Identity is the `id` alone; the payload never participates in selection
/// equality. Two `Item`s with the same id are the same item.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: String,
    pub text: String,
    pub value: f64,
    pub color: Option<String>,
    pub segments: Vec<ValueSegment>,
}

impl Item {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    /// An item carrying only an identity.
    ///
    /// Used when restoring a selection whose items are not present in the
    /// current data page; selection survives filtering and paging.
    pub fn from_id(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            text: id.clone(),
            id,
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_segments(mut self, segments: Vec<ValueSegment>) -> Self {
        self.segments = segments;
        self
    }

    /// Substring match used by local search.
    pub fn matches(&self, needle: &str, case_insensitive: bool) -> bool {
        if needle.is_empty() {
            return true;
        }
        if case_insensitive {
            self.text.to_lowercase().contains(&needle.to_lowercase())
        } else {
            self.text.contains(needle)
        }
    }
}

impl SlicerItem for Item {
    fn id(&self) -> &str {
        &self.id
    }
}
