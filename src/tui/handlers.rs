use crate::recipes::Mode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyHandler;

impl KeyHandler {
    pub fn handle_list_key(key_event: KeyEvent, mode: Mode) -> ListAction {
        match key_event.code {
            KeyCode::Char('q') => ListAction::Quit,
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                ListAction::Quit
            }
            KeyCode::Up | KeyCode::Char('k') => ListAction::MoveCursorUp,
            KeyCode::Down | KeyCode::Char('j') => ListAction::MoveCursorDown,
            KeyCode::Enter => ListAction::Activate,
            KeyCode::Char(' ') | KeyCode::Char('v') => ListAction::LongPress,
            KeyCode::Char('a') => ListAction::ToggleSelectAll,
            KeyCode::Char('?') => ListAction::ToggleHelpMode,
            KeyCode::Char('n') if mode == Mode::Browsing => ListAction::NewRecipe,
            KeyCode::Char('d') if mode == Mode::Selecting => ListAction::DeleteSelected,
            KeyCode::Esc if mode == Mode::Selecting => ListAction::ExitSelectionMode,
            _ => ListAction::None,
        }
    }

    pub fn handle_help_mode_key(key_event: KeyEvent) -> HelpModeAction {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => {
                HelpModeAction::ExitHelpMode
            }
            _ => HelpModeAction::None,
        }
    }

    pub fn handle_edit_mode_key(key_event: KeyEvent) -> EditModeAction {
        match key_event.code {
            KeyCode::Esc => EditModeAction::CancelEdit,
            KeyCode::Enter => EditModeAction::ConfirmEdit,
            KeyCode::Tab => EditModeAction::SwitchField,
            KeyCode::Backspace => EditModeAction::Backspace,
            KeyCode::Delete => EditModeAction::Delete,
            KeyCode::Left => EditModeAction::MoveCursorLeft,
            KeyCode::Right => EditModeAction::MoveCursorRight,
            KeyCode::Home => EditModeAction::MoveCursorHome,
            KeyCode::End => EditModeAction::MoveCursorEnd,
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                EditModeAction::CancelEdit
            }
            KeyCode::Char(c) => EditModeAction::InsertChar(c),
            _ => EditModeAction::None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum ListAction {
    None,
    Quit,
    MoveCursorUp,
    MoveCursorDown,
    Activate,
    LongPress,
    ToggleSelectAll,
    NewRecipe,
    DeleteSelected,
    ExitSelectionMode,
    ToggleHelpMode,
}

#[derive(Debug, PartialEq)]
pub enum HelpModeAction {
    None,
    ExitHelpMode,
}

#[derive(Debug, PartialEq)]
pub enum EditModeAction {
    None,
    CancelEdit,
    ConfirmEdit,
    SwitchField,
    Backspace,
    Delete,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorHome,
    MoveCursorEnd,
    InsertChar(char),
}
