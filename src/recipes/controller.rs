use super::error::ListError;
use super::host::{ActionBarState, HostShell, RecipeEditorLauncher};
use super::selection::{SelectionSnapshot, SelectionState};
use crate::store::{Recipe, RecipeId, RecipeStore, RecipeSummary};
use std::collections::HashSet;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListConfig {
    pub max_recipes: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    Selecting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Handled,
    NotHandled,
}

/// The recipe list screen, minus rendering. Taps open the editor while
/// browsing and toggle rows while selecting.
pub struct SelectableListController<S, L, H> {
    store: S,
    launcher: L,
    host: H,
    items: Vec<RecipeSummary>,
    selection: SelectionState,
    max_recipes: usize,
}

impl<S, L, H> SelectableListController<S, L, H>
where
    S: RecipeStore,
    L: RecipeEditorLauncher,
    H: HostShell,
{
    /// Loads every recipe from `store` and, when `saved` asks for it, resumes
    /// selection mode. Saved indices past the end of the reloaded list are
    /// dropped.
    pub fn initialize(
        store: S,
        launcher: L,
        host: H,
        config: ListConfig,
        saved: Option<SelectionSnapshot>,
    ) -> Result<Self, ListError> {
        let items = store.list_all().inspect_err(|error| {
            warn!(%error, "failed to load recipe list");
        })?;
        info!(count = items.len(), max_recipes = config.max_recipes, "loaded recipe list");

        let mut controller = Self {
            store,
            launcher,
            host,
            items,
            selection: SelectionState::new(),
            max_recipes: config.max_recipes,
        };

        if let Some(snapshot) = saved {
            controller.restore(snapshot);
        }

        Ok(controller)
    }

    fn restore(&mut self, snapshot: SelectionSnapshot) {
        if !snapshot.is_supported() {
            warn!(version = snapshot.version, "ignoring selection snapshot with unknown version");
            return;
        }
        if !snapshot.wants_selection_mode() {
            return;
        }

        let len = self.items.len();
        let (valid, stale): (Vec<usize>, Vec<usize>) =
            snapshot.selected_indices.into_iter().partition(|&index| index < len);
        if !stale.is_empty() {
            warn!(?stale, len, "dropping saved selection indices past the end of the list");
        }

        debug!(selected = valid.len(), "resuming selection mode");
        self.start_action_mode(valid);
    }

    pub fn on_item_activate(&mut self, index: usize) -> Result<(), ListError> {
        let summary = self.summary_at(index)?;

        if self.selection.is_active() {
            self.selection.toggle_item_selection(index);
            self.update_action_bar();
        } else {
            debug!(recipe_id = summary.id.0, "opening recipe editor");
            let summary = summary.clone();
            self.launcher.edit(&summary);
        }
        Ok(())
    }

    pub fn on_item_long_press(&mut self, index: usize) -> Result<EventResponse, ListError> {
        if self.selection.is_active() {
            self.update_action_bar();
            return Ok(EventResponse::NotHandled);
        }

        self.summary_at(index)?;
        self.start_action_mode([index]);
        Ok(EventResponse::Handled)
    }

    pub fn request_create(&mut self) -> Result<Recipe, ListError> {
        if self.items.len() >= self.max_recipes {
            info!(max_recipes = self.max_recipes, "recipe limit reached");
            return Err(ListError::CapacityExceeded(self.max_recipes));
        }

        let recipe = self.store.create().inspect_err(|error| {
            warn!(%error, "failed to create recipe");
        })?;
        let summary = recipe.summary();
        self.items.push(summary.clone());
        info!(recipe_id = recipe.id.0, "created recipe");

        self.update_action_bar();
        self.launcher.edit(&summary);
        Ok(recipe)
    }

    pub fn toggle_select_all(&mut self) {
        let len = self.items.len();
        let select = !self.selection.are_all_selected(len);

        if !self.selection.is_active() {
            self.start_action_mode(std::iter::empty::<usize>());
        }
        self.selection.set_all_selected(len, select);
        self.update_action_bar();
    }

    /// When nothing could be deleted the list and selection are left untouched.
    pub fn delete_selected(&mut self) -> Result<usize, ListError> {
        let targets: Vec<RecipeId> = self
            .selection
            .selected_indices()
            .filter_map(|index| self.items.get(index).map(|summary| summary.id))
            .collect();

        let mut deleted = HashSet::new();
        let mut removed = 0;
        let mut last_error = None;
        for id in &targets {
            match self.store.delete(&[*id]) {
                // A recipe already gone from the store still leaves the list,
                // but only rows the store removed are counted.
                Ok(count) => {
                    removed += count;
                    deleted.insert(*id);
                }
                Err(error) => {
                    warn!(recipe_id = id.0, %error, "failed to delete recipe");
                    last_error = Some(error);
                }
            }
        }

        let failed = targets.len() - deleted.len();
        if deleted.is_empty() {
            if let Some(error) = last_error {
                return Err(ListError::StoreUnavailable(error));
            }
        }

        self.items.retain(|summary| !deleted.contains(&summary.id));
        self.exit_selection_mode();
        info!(removed, failed, remaining = self.items.len(), "deleted selected recipes");

        if failed > 0 {
            return Err(ListError::PartialDelete {
                deleted: removed,
                failed,
            });
        }
        Ok(removed)
    }

    pub fn exit_selection_mode(&mut self) {
        if !self.selection.is_active() {
            return;
        }
        self.selection.deactivate();
        self.host.finish_action_mode();
    }

    pub fn reload(&mut self) -> Result<(), ListError> {
        self.items = self.store.list_all()?;

        let stale = self.selection.retain_in_bounds(self.items.len());
        if !stale.is_empty() {
            debug!(?stale, "dropped selection past the end of the reloaded list");
        }
        self.update_action_bar();
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[RecipeSummary] {
        &self.items
    }

    pub fn mode(&self) -> Mode {
        if self.selection.is_active() {
            Mode::Selecting
        } else {
            Mode::Browsing
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.is_item_selected(index)
    }

    pub fn selected_indices(&self) -> Vec<usize> {
        self.selection.selected_indices().collect()
    }

    pub fn max_recipes(&self) -> usize {
        self.max_recipes
    }

    pub fn action_bar(&self) -> ActionBarState {
        ActionBarState {
            selected_count: self.selection.selection_count(),
            total_count: self.items.len(),
            delete_visible: self.selection.has_selection(),
        }
    }

    pub fn snapshot(&self) -> SelectionSnapshot {
        self.selection.snapshot()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn launcher_mut(&mut self) -> &mut L {
        &mut self.launcher
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    fn summary_at(&self, index: usize) -> Result<&RecipeSummary, ListError> {
        self.items.get(index).ok_or(ListError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    fn start_action_mode(&mut self, selected: impl IntoIterator<Item = usize>) {
        self.selection.activate();
        for index in selected {
            self.selection.set_selected(index, true);
        }
        let state = self.action_bar();
        self.host.start_action_mode(&state);
    }

    fn update_action_bar(&mut self) {
        if self.selection.is_active() {
            let state = self.action_bar();
            self.host.refresh_action_bar(&state);
        }
    }
}
