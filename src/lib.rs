//! # Folio TUI
//!
//! A personal portfolio page for the terminal.
//!
//! ## Features
//! - Profile header (name, location, links, bio)
//! - GitHub repository table, fetched once per mount
//! - Dice roller behind a two-panel switcher
//! - Config file at `~/.folio/config.yaml`
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod constants;
pub mod models;
pub mod config;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use models::{DiceKind, ListVariant, Profile, RepositoryRecord};
pub use config::Config;
pub use messages::{NetworkCommand, NetworkResponse, Panel, RenderState, RepoListView, UiEvent};
pub use app::{AppActor, AppState, FetchState, PanelSwitcher, RepoListController};
pub use network::{FetchError, GitHubFetcher, NetworkActor, RepositoryFetcher};
