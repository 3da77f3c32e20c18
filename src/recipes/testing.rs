use super::host::{ActionBarState, HostShell, RecipeEditorLauncher};
use crate::store::RecipeSummary;

#[derive(Debug, Default)]
pub struct RecordingLauncher {
    pub edited: Vec<RecipeSummary>,
}

impl RecipeEditorLauncher for RecordingLauncher {
    fn edit(&mut self, recipe: &RecipeSummary) {
        self.edited.push(recipe.clone());
    }
}

#[derive(Debug, Default)]
pub struct RecordingHost {
    pub action_mode: bool,
    pub starts: usize,
    pub finishes: usize,
    pub refreshes: Vec<ActionBarState>,
}

impl RecordingHost {
    pub fn last_action_bar(&self) -> Option<ActionBarState> {
        self.refreshes.last().copied()
    }
}

impl HostShell for RecordingHost {
    fn start_action_mode(&mut self, state: &ActionBarState) {
        self.action_mode = true;
        self.starts += 1;
        self.refreshes.push(*state);
    }

    fn refresh_action_bar(&mut self, state: &ActionBarState) {
        self.refreshes.push(*state);
    }

    fn finish_action_mode(&mut self) {
        self.action_mode = false;
        self.finishes += 1;
    }
}
