use crate::store::Recipe;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Name,
    Style,
}

impl EditField {
    pub fn label(&self) -> &'static str {
        match self {
            EditField::Name => "Name",
            EditField::Style => "Style",
        }
    }
}

// `cursor` is a byte offset that always sits on a char boundary.
#[derive(Debug)]
pub struct RecipeEditor {
    recipe: Option<Recipe>,
    pub field: EditField,
    pub buffer: String,
    pub cursor: usize,
}

impl RecipeEditor {
    pub fn new() -> Self {
        Self {
            recipe: None,
            field: EditField::Name,
            buffer: String::new(),
            cursor: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.recipe.is_some()
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }

    pub fn begin(&mut self, recipe: Recipe) {
        self.field = EditField::Name;
        self.load_field(&recipe);
        self.recipe = Some(recipe);
    }

    pub fn switch_field(&mut self) {
        let Some(mut recipe) = self.recipe.take() else {
            return;
        };
        self.store_field(&mut recipe);
        self.field = match self.field {
            EditField::Name => EditField::Style,
            EditField::Style => EditField::Name,
        };
        self.load_field(&recipe);
        self.recipe = Some(recipe);
    }

    pub fn pending(&self) -> Option<Recipe> {
        let mut recipe = self.recipe.clone()?;
        self.store_field(&mut recipe);
        Some(recipe)
    }

    pub fn commit(&mut self) -> Option<Recipe> {
        let mut recipe = self.recipe.take()?;
        self.store_field(&mut recipe);
        self.reset();
        Some(recipe)
    }

    pub fn cancel(&mut self) {
        self.recipe = None;
        self.reset();
    }

    fn reset(&mut self) {
        self.field = EditField::Name;
        self.buffer.clear();
        self.cursor = 0;
    }

    fn load_field(&mut self, recipe: &Recipe) {
        self.buffer = match self.field {
            EditField::Name => recipe.name.clone(),
            EditField::Style => recipe.style.clone(),
        };
        self.cursor = self.buffer.len();
    }

    fn store_field(&self, recipe: &mut Recipe) {
        let value = self.buffer.trim().to_string();
        match self.field {
            // An empty name would leave an invisible row in the list.
            EditField::Name if value.is_empty() => {}
            EditField::Name => recipe.name = value,
            EditField::Style => recipe.style = value,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
            self.buffer.remove(self.cursor);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(next) = self.buffer[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.buffer.len();
    }
}
