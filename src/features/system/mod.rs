//! System - service list with start and stop

pub mod controller;
pub mod page;
