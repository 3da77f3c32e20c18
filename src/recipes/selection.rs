use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const SNAPSHOT_VERSION: u32 = 1;

// `active` can be true with no marked rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    active: bool,
    selected_items: BTreeSet<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        self.selected_items.clear();
    }

    pub fn set_selected(&mut self, index: usize, selected: bool) {
        if selected {
            self.selected_items.insert(index);
        } else {
            self.selected_items.remove(&index);
        }
    }

    pub fn toggle_item_selection(&mut self, index: usize) -> bool {
        let selected = !self.selected_items.contains(&index);
        self.set_selected(index, selected);
        selected
    }

    pub fn set_all_selected(&mut self, item_count: usize, selected: bool) {
        if selected {
            self.selected_items = (0..item_count).collect();
        } else {
            self.selected_items.clear();
        }
    }

    pub fn are_all_selected(&self, item_count: usize) -> bool {
        self.selected_items.len() == item_count && self.selected_items.iter().all(|&i| i < item_count)
    }

    pub fn has_selection(&self) -> bool {
        !self.selected_items.is_empty()
    }

    pub fn selection_count(&self) -> usize {
        self.selected_items.len()
    }

    pub fn is_item_selected(&self, index: usize) -> bool {
        self.selected_items.contains(&index)
    }

    pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected_items.iter().copied()
    }

    pub fn retain_in_bounds(&mut self, item_count: usize) -> Vec<usize> {
        let stale = self.selected_items.split_off(&item_count);
        stale.into_iter().collect()
    }

    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            version: SNAPSHOT_VERSION,
            selection_mode_active: self.active,
            selected_indices: self.selected_indices().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSnapshot {
    pub version: u32,
    pub selection_mode_active: bool,
    #[serde(default)]
    pub selected_indices: Vec<usize>,
}

impl SelectionSnapshot {
    pub fn is_supported(&self) -> bool {
        self.version == SNAPSHOT_VERSION
    }

    pub fn wants_selection_mode(&self) -> bool {
        self.selection_mode_active || !self.selected_indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_state_new() {
        let state = SelectionState::new();
        assert!(!state.is_active());
        assert!(!state.has_selection());
        assert_eq!(state.selection_count(), 0);
    }

    #[test]
    fn test_toggle_item_selection() {
        let mut state = SelectionState::new();

        assert!(state.toggle_item_selection(3));
        assert!(state.is_item_selected(3));
        assert_eq!(state.selection_count(), 1);

        assert!(!state.toggle_item_selection(3));
        assert!(!state.is_item_selected(3));
        assert_eq!(state.selection_count(), 0);
    }

    #[test]
    fn test_deactivate_clears_marks() {
        let mut state = SelectionState::new();
        state.activate();
        state.set_selected(0, true);
        state.set_selected(2, true);

        state.deactivate();

        assert!(!state.is_active());
        assert!(!state.has_selection());
    }

    #[test]
    fn test_are_all_selected() {
        let mut state = SelectionState::new();
        state.set_all_selected(4, true);
        assert!(state.are_all_selected(4));
        assert!(!state.are_all_selected(5));

        state.set_selected(1, false);
        assert!(!state.are_all_selected(4));

        state.set_all_selected(4, false);
        assert!(!state.has_selection());
        assert!(state.are_all_selected(0));
    }

    #[test]
    fn test_retain_in_bounds() {
        let mut state = SelectionState::new();
        for i in [1, 4, 7, 9] {
            state.set_selected(i, true);
        }

        let dropped = state.retain_in_bounds(5);

        assert_eq!(dropped, vec![7, 9]);
        assert_eq!(state.selected_indices().collect::<Vec<_>>(), vec![1, 4]);
    }

    #[test]
    fn test_snapshot_is_sorted_and_versioned() {
        let mut state = SelectionState::new();
        state.activate();
        state.set_selected(2, true);
        state.set_selected(0, true);

        let snapshot = state.snapshot();

        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
        assert!(snapshot.selection_mode_active);
        assert_eq!(snapshot.selected_indices, vec![0, 2]);
        assert!(snapshot.is_supported());
    }

    #[test]
    fn test_snapshot_json_shape() {
        let snapshot = SelectionSnapshot {
            version: 1,
            selection_mode_active: true,
            selected_indices: vec![0, 2],
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(json, r#"{"version":1,"selection_mode_active":true,"selected_indices":[0,2]}"#);

        let parsed: SelectionSnapshot = serde_json::from_str(r#"{"version":1,"selection_mode_active":false}"#).unwrap();
        assert!(parsed.selected_indices.is_empty());
        assert!(!parsed.wants_selection_mode());
    }
}
