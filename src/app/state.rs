//! App state - pure data structure with no I/O logic

use crate::app::dice::DiceRoller;
use crate::app::repo_list::RepoListController;
use crate::app::switcher::PanelSwitcher;
use crate::config::Config;
use crate::messages::render::PanelView;
use crate::messages::ui_events::Panel;
use crate::messages::RenderState;
use crate::models::Profile;

/// Main application state - pure data, no I/O
pub struct AppState {
    pub profile: Profile,

    // Panels
    pub switcher: PanelSwitcher,
    pub repo_list: RepoListController,
    pub dice: DiceRoller,

    // Requests
    pub next_request_id: u64,
    pub last_fetch_ms: Option<u64>,

    // Popups
    pub show_help: bool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        AppState {
            profile: config.profile.clone(),
            switcher: PanelSwitcher::new(),
            repo_list: RepoListController::new(config.address(), config.variant),
            dice: DiceRoller::new(),
            next_request_id: 1,
            last_fetch_ms: None,
            show_help: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            profile: self.profile.clone(),
            active_panel: self.switcher.selected(),
            repositories: PanelView {
                hidden: self.switcher.is_hidden(Panel::Repositories),
                content: self.repo_list.view(),
            },
            dice: PanelView {
                hidden: self.switcher.is_hidden(Panel::DiceRoller),
                content: self.dice.rolls(),
            },
            address: self.repo_list.address().to_string(),
            is_loading: self.repo_list.is_loading(),
            selected_url: self.repo_list.selected_record().map(|r| r.url.clone()),
            last_fetch_ms: self.last_fetch_ms,
            show_help: self.show_help,
        }
    }
}
