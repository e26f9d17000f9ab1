//! View Controllers
//!
//! Window-free state behind each page. Asynchronous work is split into a
//! `begin_*` step that hands out a [`LoadTicket`], a service call that can
//! run on any executor, and a `finish_*` step that applies the result only
//! when the ticket is still current.

pub mod cleaner;
pub mod dashboard;
pub mod large_files;
mod list;
mod load;
mod preview;
mod prompt;
pub mod settings;
pub mod system;

pub use cleaner::{CleanerView, Tab};
pub use dashboard::{DashboardView, SystemStatus};
pub use large_files::LargeFilesView;
pub use list::ListState;
pub use load::{LoadTicket, LoadTracker};
pub use preview::{PreviewSession, open_failure, open_file};
pub use prompt::Confirmation;
pub use settings::SettingsView;
pub use system::{SystemAction, SystemView};
