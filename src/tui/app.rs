use super::chrome::{ActionChrome, EditRequests};
use super::edit::RecipeEditor;
use super::handlers::{EditModeAction, HelpModeAction, KeyHandler, ListAction};
use crate::recipes::{
    EventResponse, ListConfig, ListError, Mode, SelectableListController, SelectionSnapshot,
};
use crate::store::RecipeStore;
use anyhow::{Context, Result};
use crossterm::event::KeyEvent;
use tracing::{info, warn};

pub const EMPTY_MESSAGE: &str = "No recipes yet. Press n to create one.";

pub type RecipeList<S> = SelectableListController<S, EditRequests, ActionChrome>;

pub struct App<S: RecipeStore> {
    pub list: RecipeList<S>,
    pub cursor: usize,
    pub should_quit: bool,
    pub help_mode: bool,
    pub editor: RecipeEditor,
    pub notification: Option<String>,
}

impl<S: RecipeStore> App<S> {
    pub fn new(store: S, config: ListConfig, saved: Option<SelectionSnapshot>) -> Result<Self> {
        let list = SelectableListController::initialize(
            store,
            EditRequests::default(),
            ActionChrome::default(),
            config,
            saved,
        )
        .context("Failed to load recipes")?;

        Ok(Self {
            list,
            cursor: 0,
            should_quit: false,
            help_mode: false,
            editor: RecipeEditor::new(),
            notification: None,
        })
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        // Notifications last until the next key press.
        self.notification = None;

        if self.help_mode {
            self.handle_help_mode_key(key_event);
        } else if self.editor.is_active() {
            self.handle_edit_mode_key(key_event);
        } else {
            self.handle_list_key(key_event);
        }

        self.open_requested_editor();
        Ok(())
    }

    pub fn snapshot(&self) -> SelectionSnapshot {
        self.list.snapshot()
    }

    fn handle_help_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_help_mode_key(key_event) {
            HelpModeAction::ExitHelpMode => self.help_mode = false,
            HelpModeAction::None => {}
        }
    }

    fn handle_list_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_list_key(key_event, self.list.mode()) {
            ListAction::Quit => self.should_quit = true,
            ListAction::MoveCursorUp => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            ListAction::MoveCursorDown => {
                if self.cursor + 1 < self.list.len() {
                    self.cursor += 1;
                }
            }
            ListAction::Activate => self.activate(),
            ListAction::LongPress => self.long_press(),
            ListAction::ToggleSelectAll => {
                if !self.list.is_empty() {
                    self.list.toggle_select_all();
                }
            }
            ListAction::NewRecipe => self.create_recipe(),
            ListAction::DeleteSelected => self.delete_selected(),
            ListAction::ExitSelectionMode => self.list.exit_selection_mode(),
            ListAction::ToggleHelpMode => self.help_mode = true,
            ListAction::None => {}
        }
    }

    fn handle_edit_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_edit_mode_key(key_event) {
            EditModeAction::CancelEdit => self.editor.cancel(),
            EditModeAction::ConfirmEdit => self.save_edit(),
            EditModeAction::SwitchField => self.editor.switch_field(),
            EditModeAction::Backspace => self.editor.backspace(),
            EditModeAction::Delete => self.editor.delete(),
            EditModeAction::MoveCursorLeft => self.editor.move_cursor_left(),
            EditModeAction::MoveCursorRight => self.editor.move_cursor_right(),
            EditModeAction::MoveCursorHome => self.editor.move_cursor_home(),
            EditModeAction::MoveCursorEnd => self.editor.move_cursor_end(),
            EditModeAction::InsertChar(c) => self.editor.insert_char(c),
            EditModeAction::None => {}
        }
    }

    fn activate(&mut self) {
        if self.list.is_empty() {
            return;
        }
        if let Err(error) = self.list.on_item_activate(self.cursor) {
            self.report(error);
        }
    }

    fn long_press(&mut self) {
        if self.list.is_empty() {
            return;
        }
        match self.list.on_item_long_press(self.cursor) {
            Ok(EventResponse::Handled) => {}
            // Already selecting: fall back to a plain tap, which toggles the row.
            Ok(EventResponse::NotHandled) => self.activate(),
            Err(error) => self.report(error),
        }
    }

    fn create_recipe(&mut self) {
        match self.list.request_create() {
            Ok(_) => self.cursor = self.list.len().saturating_sub(1),
            Err(error) => self.report(error),
        }
    }

    fn delete_selected(&mut self) {
        if !self.list.action_bar().delete_visible {
            return;
        }
        match self.list.delete_selected() {
            Ok(count) => self.notification = Some(deleted_message(count)),
            Err(error) => self.report(error),
        }
        self.clamp_cursor();
    }

    fn open_requested_editor(&mut self) {
        let Some(summary) = self.list.launcher_mut().take() else {
            return;
        };
        match self.list.store().load(summary.id) {
            Ok(recipe) => {
                info!(recipe_id = recipe.id.0, "editing recipe");
                self.editor.begin(recipe);
            }
            Err(error) => self.report(error.into()),
        }
    }

    fn save_edit(&mut self) {
        let Some(recipe) = self.editor.pending() else {
            return;
        };
        // The editor stays open on failure so the typed changes survive.
        if let Err(error) = self.list.store_mut().save(&recipe) {
            self.report(error.into());
            return;
        }
        self.editor.commit();
        if let Err(error) = self.list.reload() {
            self.report(error);
            return;
        }
        self.clamp_cursor();
        self.notification = Some(format!("Saved {}", recipe.display_label()));
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.list.len().saturating_sub(1));
    }

    fn report(&mut self, error: ListError) {
        warn!(%error, mode = ?self.list.mode(), "recipe list action failed");
        self.notification = Some(error.to_string());
    }

    pub fn is_selecting(&self) -> bool {
        self.list.mode() == Mode::Selecting
    }
}

pub fn deleted_message(count: usize) -> String {
    match count {
        0 => "Recipes were already deleted".to_string(),
        1 => "Deleted recipe".to_string(),
        _ => format!("Deleted {count} recipes"),
    }
}
