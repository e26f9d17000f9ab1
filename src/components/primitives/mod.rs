//! Primitive Components
//!
//! Basic building blocks not covered by gpui-component.

pub mod checkbox;

pub use checkbox::Checkbox;
