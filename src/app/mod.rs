//! Application Layer
//!
//! App initialization, window management, the global store and the workspace.

pub mod actions;
pub mod application;
pub mod store;
pub mod tasks;
pub mod workspace;
