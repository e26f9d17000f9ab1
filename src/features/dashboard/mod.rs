//! Dashboard - junk overview, scan and clean all

pub mod controller;
pub mod page;
