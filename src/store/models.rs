use serde::{Deserialize, Serialize};
use std::fmt;

pub const NEW_RECIPE_NAME: &str = "New Recipe";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub u64);

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    #[serde(default)]
    pub style: String,
}

impl Recipe {
    pub fn new(id: RecipeId) -> Self {
        Self {
            id,
            name: NEW_RECIPE_NAME.to_string(),
            style: String::new(),
        }
    }

    pub fn display_label(&self) -> String {
        if self.style.trim().is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.style)
        }
    }

    pub fn summary(&self) -> RecipeSummary {
        RecipeSummary {
            id: self.id,
            display_label: self.display_label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSummary {
    pub id: RecipeId,
    pub display_label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_recipe_defaults() {
        let recipe = Recipe::new(RecipeId(7));
        assert_eq!(recipe.id, RecipeId(7));
        assert_eq!(recipe.name, "New Recipe");
        assert!(recipe.style.is_empty());
    }

    #[test]
    fn test_display_label_without_style() {
        let recipe = Recipe::new(RecipeId(1));
        assert_eq!(recipe.display_label(), "New Recipe");
    }

    #[test]
    fn test_display_label_with_style() {
        let mut recipe = Recipe::new(RecipeId(1));
        recipe.name = "Porch Pounder".to_string();
        recipe.style = "Pale Ale".to_string();

        let summary = recipe.summary();
        assert_eq!(summary.id, RecipeId(1));
        assert_eq!(summary.display_label, "Porch Pounder (Pale Ale)");
    }
}
