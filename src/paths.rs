//! Centralized path definitions for wellog
//!
//! Single source of truth for the filesystem paths used by wellog.
//!
//! ## Storage Layout
//!
//! ### Per-directory data file
//!
//! ```text
//! ./wellness_entries.csv        # The persisted entry table
//! ```
//!
//! The data file lives in the working directory unless overridden with
//! `--file` or the `data_file` config key.
//!
//! ### Global (User-Level)
//!
//! ```text
//! ~/.wellog/
//! └── config.toml               # User preferences (data file, UI port)
//! ```

use std::path::PathBuf;

// =============================================================================
// Data file
// =============================================================================

/// Default filename of the persisted entry table
pub const DATA_FILE: &str = "wellness_entries.csv";

/// Get the default data file path (relative to the working directory).
#[must_use]
pub fn default_data_file() -> PathBuf {
    PathBuf::from(DATA_FILE)
}

// =============================================================================
// Global paths (user-level)
// =============================================================================

/// Global config directory name
const GLOBAL_DIR: &str = ".wellog";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global wellog directory.
///
/// Returns `~/.wellog/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.wellog/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
