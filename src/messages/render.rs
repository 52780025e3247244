//! Render state - data structure sent from App layer to UI for rendering

use crate::app::dice::DiceRoll;
use crate::messages::ui_events::Panel;
use crate::models::{Profile, RepositoryRecord};

/// What the repository panel shows
#[derive(Debug, Clone, PartialEq)]
pub enum RepoListView {
    Loading,
    Empty,
    Rows {
        records: Vec<RepositoryRecord>,
        selected: usize,
    },
    Error(String),
}

/// A switcher panel's content plus its visibility flag
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView<T> {
    pub hidden: bool,
    pub content: T,
}

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    pub profile: Profile,
    pub active_panel: Panel,

    // Panels
    pub repositories: PanelView<RepoListView>,
    pub dice: PanelView<Vec<DiceRoll>>,

    // Status
    pub address: String,
    pub is_loading: bool,
    pub selected_url: Option<String>,
    pub last_fetch_ms: Option<u64>,

    // Popups
    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            profile: Profile::default(),
            active_panel: Panel::Repositories,
            repositories: PanelView {
                hidden: false,
                content: RepoListView::Loading,
            },
            dice: PanelView {
                hidden: true,
                content: Vec::new(),
            },
            address: String::new(),
            is_loading: true,
            selected_url: None,
            last_fetch_ms: None,
            show_help: false,
        }
    }
}
