//! SysClean Desktop Library
//!
//! The window side of SysClean: application setup, shared components and one
//! feature slice per sidebar route. Everything that does not need a window
//! lives in `sysclean-core`.

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod features;
pub mod theme;
