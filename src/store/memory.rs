use super::models::{Recipe, RecipeId, RecipeSummary};
use super::{RecipeStore, StoreError};
use std::collections::HashSet;
use std::io;

#[derive(Debug, Default)]
pub struct MemoryStore {
    pub recipes: Vec<Recipe>,
    pub next_id: u64,
    pub create_calls: usize,
    pub unavailable: bool,
    pub failing_deletes: HashSet<RecipeId>,
}

impl MemoryStore {
    pub fn with_names(names: &[&str]) -> Self {
        let mut store = Self::default();
        for name in names {
            let mut recipe = Recipe::new(RecipeId(store.next_id));
            recipe.name = name.to_string();
            store.next_id += 1;
            store.recipes.push(recipe);
        }
        store
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable {
            return Err(StoreError::Io {
                path: "memory".to_string(),
                source: io::Error::other("store offline"),
            });
        }
        Ok(())
    }
}

impl RecipeStore for MemoryStore {
    fn list_all(&self) -> Result<Vec<RecipeSummary>, StoreError> {
        self.check_available()?;
        Ok(self.recipes.iter().map(Recipe::summary).collect())
    }

    fn create(&mut self) -> Result<Recipe, StoreError> {
        self.create_calls += 1;
        self.check_available()?;
        let recipe = Recipe::new(RecipeId(self.next_id));
        self.next_id += 1;
        self.recipes.push(recipe.clone());
        Ok(recipe)
    }

    fn delete(&mut self, ids: &[RecipeId]) -> Result<usize, StoreError> {
        self.check_available()?;
        if let Some(id) = ids.iter().find(|id| self.failing_deletes.contains(id)) {
            return Err(StoreError::NotFound(*id));
        }
        let before = self.recipes.len();
        self.recipes.retain(|recipe| !ids.contains(&recipe.id));
        Ok(before - self.recipes.len())
    }

    fn load(&self, id: RecipeId) -> Result<Recipe, StoreError> {
        self.check_available()?;
        self.recipes
            .iter()
            .find(|recipe| recipe.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn save(&mut self, recipe: &Recipe) -> Result<(), StoreError> {
        self.check_available()?;
        let slot = self
            .recipes
            .iter_mut()
            .find(|existing| existing.id == recipe.id)
            .ok_or(StoreError::NotFound(recipe.id))?;
        *slot = recipe.clone();
        Ok(())
    }
}
