use alloc::string::String;

/// Passthrough display and behavior configuration.
///
/// `case_insensitive` and `server_side_search` gate the controller's search
/// behavior; the remaining fields carry host rendering options so they can be
/// persisted and round-tripped alongside the interaction state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlicerSettings {
    /// Local search ignores case.
    pub case_insensitive: bool,
    /// Search is fulfilled by the host data source instead of local
    /// filtering.
    pub server_side_search: bool,
    pub show_options: bool,
    pub show_search: bool,
    pub show_values: bool,
    pub show_selections: bool,
    pub left_text_align: bool,
    pub text_size: f32,
    pub item_text_color: Option<String>,
    pub value_column_width_percent: f32,
    pub display_value_labels: bool,
    pub overflow_value_labels: bool,
}

impl Default for SlicerSettings {
    fn default() -> Self {
        Self {
            case_insensitive: true,
            server_side_search: false,
            show_options: true,
            show_search: true,
            show_values: false,
            show_selections: true,
            left_text_align: false,
            text_size: 12.0,
            item_text_color: None,
            value_column_width_percent: 66.0,
            display_value_labels: false,
            overflow_value_labels: false,
        }
    }
}

impl SlicerSettings {
    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    pub fn with_server_side_search(mut self, server_side_search: bool) -> Self {
        self.server_side_search = server_side_search;
        self
    }

    pub fn with_show_options(mut self, show_options: bool) -> Self {
        self.show_options = show_options;
        self
    }

    pub fn with_show_search(mut self, show_search: bool) -> Self {
        self.show_search = show_search;
        self
    }

    pub fn with_show_values(mut self, show_values: bool) -> Self {
        self.show_values = show_values;
        self
    }

    pub fn with_show_selections(mut self, show_selections: bool) -> Self {
        self.show_selections = show_selections;
        self
    }

    pub fn with_left_text_align(mut self, left_text_align: bool) -> Self {
        self.left_text_align = left_text_align;
        self
    }

    pub fn with_text_size(mut self, text_size: f32) -> Self {
        self.text_size = text_size;
        self
    }

    pub fn with_item_text_color(mut self, item_text_color: Option<String>) -> Self {
        self.item_text_color = item_text_color;
        self
    }

    pub fn with_value_column_width_percent(mut self, percent: f32) -> Self {
        self.value_column_width_percent = percent;
        self
    }

    pub fn with_display_value_labels(mut self, display_value_labels: bool) -> Self {
        self.display_value_labels = display_value_labels;
        self
    }

    pub fn with_overflow_value_labels(mut self, overflow_value_labels: bool) -> Self {
        self.overflow_value_labels = overflow_value_labels;
        self
    }
}
