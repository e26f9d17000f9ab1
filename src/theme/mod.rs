//! Theme helpers on top of the gpui-component theme

pub mod colors;
