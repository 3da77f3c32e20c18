use super::models::{Recipe, RecipeId, RecipeSummary};
use super::{RecipeStore, StoreError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Default, Serialize, Deserialize)]
struct RecipeDocument {
    next_id: u64,
    recipes: Vec<Recipe>,
}

/// Recipes kept in a single JSON document. Every mutation rewrites the file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn path_string(&self) -> String {
        self.path.display().to_string()
    }

    fn read_document(&self) -> Result<RecipeDocument, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(RecipeDocument::default()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path_string(),
                    source,
                });
            }
        };

        if content.trim().is_empty() {
            return Ok(RecipeDocument::default());
        }

        serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
            path: self.path_string(),
            source,
        })
    }

    fn write_document(&self, document: &RecipeDocument) -> Result<(), StoreError> {
        let io_error = |source| StoreError::Io {
            path: self.path_string(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_error)?;
            }
        }

        let content = serde_json::to_string_pretty(document).map_err(|source| StoreError::Corrupt {
            path: self.path_string(),
            source,
        })?;
        fs::write(&self.path, content).map_err(io_error)
    }
}

impl RecipeStore for FileStore {
    fn list_all(&self) -> Result<Vec<RecipeSummary>, StoreError> {
        let document = self.read_document()?;
        Ok(document.recipes.iter().map(Recipe::summary).collect())
    }

    fn create(&mut self) -> Result<Recipe, StoreError> {
        let mut document = self.read_document()?;

        // Ids are never reused, even after the highest one is deleted.
        let highest = document.recipes.iter().map(|r| r.id.0 + 1).max().unwrap_or(0);
        let id = RecipeId(document.next_id.max(highest));
        document.next_id = id.0 + 1;

        let recipe = Recipe::new(id);
        document.recipes.push(recipe.clone());
        self.write_document(&document)?;

        debug!(recipe_id = id.0, path = %self.path.display(), "created recipe");
        Ok(recipe)
    }

    fn delete(&mut self, ids: &[RecipeId]) -> Result<usize, StoreError> {
        let mut document = self.read_document()?;
        let before = document.recipes.len();
        document.recipes.retain(|recipe| !ids.contains(&recipe.id));
        let removed = before - document.recipes.len();

        if removed > 0 {
            self.write_document(&document)?;
        }

        debug!(requested = ids.len(), removed, "deleted recipes");
        Ok(removed)
    }

    fn load(&self, id: RecipeId) -> Result<Recipe, StoreError> {
        self.read_document()?
            .recipes
            .into_iter()
            .find(|recipe| recipe.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    fn save(&mut self, recipe: &Recipe) -> Result<(), StoreError> {
        let mut document = self.read_document()?;
        let slot = document
            .recipes
            .iter_mut()
            .find(|existing| existing.id == recipe.id)
            .ok_or(StoreError::NotFound(recipe.id))?;
        *slot = recipe.clone();
        self.write_document(&document)
    }
}
