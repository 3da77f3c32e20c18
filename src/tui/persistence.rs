use crate::recipes::SelectionSnapshot;
use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

// An unreadable snapshot is discarded.
pub fn take_snapshot(path: &Path) -> Option<SelectionSnapshot> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return None,
        Err(error) => {
            warn!(path = %path.display(), %error, "could not read saved selection");
            return None;
        }
    };

    if let Err(error) = fs::remove_file(path) {
        warn!(path = %path.display(), %error, "could not remove saved selection");
    }

    match serde_json::from_str(&content) {
        Ok(snapshot) => {
            debug!(path = %path.display(), "restored saved selection");
            Some(snapshot)
        }
        Err(error) => {
            warn!(path = %path.display(), %error, "discarding malformed saved selection");
            None
        }
    }
}

// Nothing is written while browsing.
pub fn save_snapshot(path: &Path, snapshot: &SelectionSnapshot) -> Result<()> {
    if !snapshot.wants_selection_mode() {
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let content = serde_json::to_string(snapshot)?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write saved selection: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_snapshot() -> SelectionSnapshot {
        SelectionSnapshot {
            version: 1,
            selection_mode_active: true,
            selected_indices: vec![0, 2],
        }
    }

    #[test]
    fn test_save_then_take() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("selection.json");

        save_snapshot(&path, &active_snapshot()).unwrap();

        assert_eq!(take_snapshot(&path), Some(active_snapshot()));
        assert!(!path.exists());
        assert_eq!(take_snapshot(&path), None);
    }

    #[test]
    fn test_browsing_snapshot_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selection.json");
        let snapshot = SelectionSnapshot {
            version: 1,
            selection_mode_active: false,
            selected_indices: Vec::new(),
        };

        save_snapshot(&path, &snapshot).unwrap();

        assert!(!path.exists());
    }

    #[test]
    fn test_malformed_snapshot_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selection.json");
        fs::write(&path, "[1, 2").unwrap();

        assert_eq!(take_snapshot(&path), None);
        assert!(!path.exists());
    }
}
