//! sysclean-core
//!
//! Everything behind the sysclean window that does not need one: the data
//! table model, pagination, search, file preview state, page controllers,
//! backend services, settings and logging.

pub mod domain;
pub mod error;
pub mod format;
pub mod fs;
pub mod logging;
pub mod navigation;
pub mod preview;
pub mod search;
pub mod services;
pub mod settings;
pub mod table;
pub mod views;

pub use error::{Error, Result};
