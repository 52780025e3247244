//! Command handlers - business logic for processing UI events and responses

use crate::app::repo_list::FetchState;
use crate::app::AppState;
use crate::messages::ui_events::Panel;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::DiceKind;

impl AppState {
    // ========================
    // Lifecycle
    // ========================

    /// Mount the repository list; yields the fetch command the first time only
    pub fn mount(&mut self) -> Option<NetworkCommand> {
        if self.repo_list.state() != &FetchState::NotRequested {
            return None;
        }
        let id = self.next_id();
        self.repo_list.mount(id)
    }

    /// Throw away the current list and fetch it again
    pub fn reload(&mut self) -> Option<NetworkCommand> {
        if !self.repo_list.state().is_terminal() {
            return None;
        }
        self.repo_list.unmount();
        self.last_fetch_ms = None;
        self.mount()
    }

    pub fn unmount(&mut self) {
        self.repo_list.unmount();
    }

    pub fn handle_response(&mut self, response: NetworkResponse) {
        match response {
            NetworkResponse::Repositories { id, result, time_ms } => {
                if self.repo_list.handle_result(id, result) {
                    self.last_fetch_ms = Some(time_ms);
                }
            }
        }
    }

    // ========================
    // Panel switcher
    // ========================

    pub fn select_panel(&mut self, panel: Panel) {
        self.switcher.select(panel);
    }

    pub fn toggle_panel(&mut self) {
        self.switcher.toggle();
    }

    // ========================
    // Repository table
    // ========================

    pub fn scroll_up(&mut self) {
        self.repo_list.select_prev();
    }

    pub fn scroll_down(&mut self) {
        self.repo_list.select_next();
    }

    // ========================
    // Dice roller
    // ========================

    pub fn roll_dice(&mut self, kind: DiceKind) {
        let value = self.dice.roll(kind);
        tracing::debug!(die = kind.as_str(), value, "Rolled");
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}
