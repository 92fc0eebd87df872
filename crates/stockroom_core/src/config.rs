//! Runtime configuration for the inventory application.
//!
//! # Responsibility
//! - Resolve the data file and log directory from one base directory.
//! - Keep file names in one place so tests can point at a temp directory.

use crate::logging::default_log_level;
use std::path::{Path, PathBuf};

/// Fixed file name of the persisted inventory.
pub const DATA_FILE_NAME: &str = "inventory.dat";
/// Directory name for rolling log files.
pub const LOG_DIR_NAME: &str = "logs";

/// Resolved application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Inventory file, overwritten after every mutation.
    pub data_file: PathBuf,
    /// Absolute directory for log files.
    pub log_dir: PathBuf,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: &'static str,
}

impl AppConfig {
    /// Places the data file and logs under `base`.
    pub fn in_dir(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        Self {
            data_file: base.join(DATA_FILE_NAME),
            log_dir: base.join(LOG_DIR_NAME),
            log_level: default_log_level(),
        }
    }
}
