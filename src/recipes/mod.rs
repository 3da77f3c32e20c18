pub mod controller;
pub mod error;
pub mod host;
pub mod selection;
#[cfg(test)]
pub mod testing;

pub use controller::{EventResponse, ListConfig, Mode, SelectableListController};
pub use error::ListError;
pub use host::{ActionBarState, HostShell, RecipeEditorLauncher};
pub use selection::SelectionSnapshot;
