//! Cleaner - cache, trash and log tabs

pub mod controller;
pub mod page;
