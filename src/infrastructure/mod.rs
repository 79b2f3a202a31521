//! Infrastructure layer for the plugin sandbox and host commands.
//!
//! - [`paths`]: sandbox and host path translation, data directory
//! - [`command`]: viewer and opener command templates

pub mod command;
pub mod paths;

pub use command::{CommandTemplate, PATH_PLACEHOLDER};
pub use paths::{get_data_dir, host_path, TRACE_FILE_NAME};
