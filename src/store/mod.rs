pub mod file;
#[cfg(test)]
pub mod memory;
pub mod models;

pub use file::FileStore;
pub use models::{Recipe, RecipeId, RecipeSummary};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access recipe file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("recipe file {path} is corrupt: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("recipe {0} does not exist")]
    NotFound(RecipeId),
}

/// Persistent recipe storage the list screen reads from and deletes through.
pub trait RecipeStore {
    fn list_all(&self) -> Result<Vec<RecipeSummary>, StoreError>;

    fn create(&mut self) -> Result<Recipe, StoreError>;

    /// Removes the given recipes, returning how many existed. Unknown ids are skipped.
    fn delete(&mut self, ids: &[RecipeId]) -> Result<usize, StoreError>;

    fn load(&self, id: RecipeId) -> Result<Recipe, StoreError>;

    fn save(&mut self, recipe: &Recipe) -> Result<(), StoreError>;
}
