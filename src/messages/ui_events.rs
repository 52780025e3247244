//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::models::DiceKind;

/// The two panels behind the switcher
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Panel {
    #[default]
    Repositories,
    DiceRoller,
}

impl Panel {
    pub fn other(&self) -> Panel {
        match self {
            Panel::Repositories => Panel::DiceRoller,
            Panel::DiceRoller => Panel::Repositories,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Panel::Repositories => "Repositories",
            Panel::DiceRoller => "Dice Roller",
        }
    }
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Panel switcher
    SelectPanel(Panel),
    TogglePanel,

    // Repository table
    ScrollUp,
    ScrollDown,
    Reload,

    // Dice roller
    RollDice(DiceKind),

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, active_panel: Panel, show_help: bool) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match key.code {
        KeyCode::Char('q') => return Some(UiEvent::Quit),
        KeyCode::Char('?') => return Some(UiEvent::ToggleHelp),
        KeyCode::Char('1') => return Some(UiEvent::SelectPanel(Panel::Repositories)),
        KeyCode::Char('2') => return Some(UiEvent::SelectPanel(Panel::DiceRoller)),
        KeyCode::Tab | KeyCode::BackTab => return Some(UiEvent::TogglePanel),
        _ => {}
    }

    match active_panel {
        Panel::Repositories => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::ScrollUp),
            KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::ScrollDown),
            KeyCode::Char('r') => Some(UiEvent::Reload),
            _ => None,
        },
        Panel::DiceRoller => match key.code {
            KeyCode::Char(c) => DiceKind::from_key(c).map(UiEvent::RollDice),
            _ => None,
        },
    }
}
