use crate::store::RecipeSummary;

pub trait RecipeEditorLauncher {
    fn edit(&mut self, recipe: &RecipeSummary);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionBarState {
    pub selected_count: usize,
    pub total_count: usize,
    pub delete_visible: bool,
}

impl ActionBarState {
    pub fn all_selected(&self) -> bool {
        self.total_count > 0 && self.selected_count == self.total_count
    }
}

/// The UI shell around the list. It owns the bulk-selection chrome; the
/// controller only asks for it to be shown, refreshed, or torn down.
pub trait HostShell {
    fn start_action_mode(&mut self, state: &ActionBarState);
    fn refresh_action_bar(&mut self, state: &ActionBarState);
    fn finish_action_mode(&mut self);
}
