use crate::recipes::{ActionBarState, HostShell, RecipeEditorLauncher};
use crate::store::RecipeSummary;

/// Header state for the terminal: either the plain title or the bulk
/// selection bar with its count.
#[derive(Debug, Default)]
pub struct ActionChrome {
    pub active: bool,
    pub action_bar: ActionBarState,
}

impl ActionChrome {
    pub fn title(&self) -> &'static str {
        if self.active {
            "Select recipes"
        } else {
            "Homebrew Recipes"
        }
    }

    pub fn subtitle(&self) -> Option<String> {
        self.active
            .then(|| format!("{} selected", self.action_bar.selected_count))
    }
}

impl HostShell for ActionChrome {
    fn start_action_mode(&mut self, state: &ActionBarState) {
        self.active = true;
        self.action_bar = *state;
    }

    fn refresh_action_bar(&mut self, state: &ActionBarState) {
        self.action_bar = *state;
    }

    fn finish_action_mode(&mut self) {
        self.active = false;
        self.action_bar = ActionBarState::default();
    }
}

#[derive(Debug, Default)]
pub struct EditRequests {
    pending: Option<RecipeSummary>,
}

impl EditRequests {
    pub fn take(&mut self) -> Option<RecipeSummary> {
        self.pending.take()
    }
}

impl RecipeEditorLauncher for EditRequests {
    fn edit(&mut self, recipe: &RecipeSummary) {
        self.pending = Some(recipe.clone());
    }
}
