//! Large Files - files above the size threshold

pub mod controller;
pub mod page;
