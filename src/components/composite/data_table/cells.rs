//! Cell Renderers
//!
//! A table turns each `(row, column)` pair into an element through a
//! [`CellRenderer`]. Pages pick one of the renderers below or supply their own.

use std::rc::Rc;

use gpui::{AnyElement, App, IntoElement, Styled};
use gpui_component::{ActiveTheme, label::Label};
use sysclean_core::format::format_size;
use sysclean_core::table::{Column, FieldValue, Record};

/// Renders the cell of `row` under `column`
pub type CellRenderer<R> = Rc<dyn Fn(&R, &Column, &App) -> AnyElement>;

/// Field value as plain text
pub fn text_cell<R: Record>() -> CellRenderer<R> {
    Rc::new(|row: &R, column: &Column, _cx: &App| {
        text(row.field(column.key).to_display_string()).into_any_element()
    })
}

/// Sizes in human units, paths muted, everything else as text
pub fn file_cell<R: Record>() -> CellRenderer<R> {
    Rc::new(|row: &R, column: &Column, cx: &App| {
        match (column.key, row.field(column.key)) {
            ("size", FieldValue::Number(bytes)) => text(format_size(bytes as u64)).into_any_element(),
            ("path", value) => text(value.to_display_string())
                .text_color(cx.theme().muted_foreground)
                .into_any_element(),
            (_, value) => text(value.to_display_string()).into_any_element(),
        }
    })
}

fn text(value: String) -> Label {
    Label::new(value).text_sm().text_ellipsis()
}
