//! App layer - central state management and command processing
//!
//! The App actor receives UI events and network responses,
//! updates state, and emits network commands and render state.

pub mod state;
pub mod actor;
pub mod commands;
pub mod repo_list;
pub mod switcher;
pub mod dice;

pub use state::AppState;
pub use actor::AppActor;
pub use repo_list::{FetchState, RepoListController};
pub use switcher::PanelSwitcher;
