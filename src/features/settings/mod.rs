//! Settings - preferences, product info and update check

pub mod controller;
pub mod page;
