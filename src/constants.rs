//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// GitHub account whose repositories are listed when no config overrides it
pub const DEFAULT_GITHUB_USER: &str = "sirjudge";

/// Base URL of the public GitHub REST API
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// GitHub rejects API requests without a User-Agent
pub const USER_AGENT: &str = concat!("folio-tui/", env!("CARGO_PKG_VERSION"));

/// Number of records kept by the latest-first list variant
pub const LATEST_COUNT: usize = 5;

/// Number of dice rolls kept in the roll log
pub const MAX_ROLL_LOG: usize = 10;

/// Directory (under the home directory) holding the config file
pub const CONFIG_DIR_NAME: &str = ".folio";

/// Config file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Log file written next to the working directory
pub const LOG_FILE_NAME: &str = "folio.log";

/// Application name
pub const APP_NAME: &str = "Folio";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
