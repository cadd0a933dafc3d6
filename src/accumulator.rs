use crate::model::Recipe;

/// Growing list of results across pages, in arrival order.
///
/// Duplicates are kept: overlapping pages from the API show up twice.
#[derive(Debug, Clone, Default)]
pub struct ResultAccumulator {
    recipes: Vec<Recipe>,
}

impl ResultAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, recipes: Vec<Recipe>) {
        self.recipes.extend(recipes);
    }

    pub fn reset(&mut self) {
        self.recipes.clear();
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn as_slice(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }
}
