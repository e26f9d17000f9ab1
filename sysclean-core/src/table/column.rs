//! Column Definition
//!
//! Presentational description of a table column plus table-wide options.

/// Horizontal alignment of a column's cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Column width specification
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(f32),
    /// Takes the remaining space
    #[default]
    Flex,
}

/// Column definition for a data table
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Field name looked up on the record
    pub key: &'static str,
    /// Header label
    pub label: &'static str,
    pub align: Align,
    pub sortable: bool,
    pub width: ColumnWidth,
}

impl Column {
    /// Create a new left-aligned, flexible, unsortable column
    pub fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            align: Align::Left,
            sortable: false,
            width: ColumnWidth::Flex,
        }
    }

    /// Make the column sortable
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Right-align the column
    pub fn align_right(mut self) -> Self {
        self.align = Align::Right;
        self
    }

    /// Center the column
    pub fn align_center(mut self) -> Self {
        self.align = Align::Center;
        self
    }

    /// Set fixed width
    pub fn fixed_width(mut self, width: f32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }
}

/// Table-wide display options
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    pub show_header: bool,
    pub show_checkbox: bool,
    pub hoverable: bool,
    pub show_reload_button: bool,
    pub show_selected_actions: bool,
    pub selected_action_text: String,
    pub show_preview_button: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            show_header: true,
            show_checkbox: false,
            hoverable: false,
            show_reload_button: false,
            show_selected_actions: false,
            selected_action_text: "Action".to_string(),
            show_preview_button: false,
        }
    }
}

impl TableOptions {
    /// Checkbox table with reload and a bulk action button, as used by every list view
    pub fn selectable(action_text: impl Into<String>) -> Self {
        Self {
            show_header: true,
            show_checkbox: true,
            hoverable: true,
            show_reload_button: true,
            show_selected_actions: true,
            selected_action_text: action_text.into(),
            show_preview_button: false,
        }
    }

    /// Enable the per-row preview button
    pub fn with_preview(mut self) -> Self {
        self.show_preview_button = true;
        self
    }
}
