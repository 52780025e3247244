//! Panel switcher - which of the two panels is visible
//!
//! Both panels stay alive regardless of the selection; only visibility
//! changes.

use crate::messages::ui_events::Panel;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanelSwitcher {
    selected: Panel,
}

impl PanelSwitcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Panel {
        self.selected
    }

    pub fn select(&mut self, panel: Panel) {
        self.selected = panel;
    }

    pub fn toggle(&mut self) {
        self.selected = self.selected.other();
    }

    pub fn is_hidden(&self, panel: Panel) -> bool {
        self.selected != panel
    }
}
