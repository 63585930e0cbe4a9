//! Recipe catalog
//!
//! The catalog is the fixed, ordered collection of recipes the page draws from.
//! It is built once at start-up, either from the bundled sample list or from a
//! catalog file, and is read-only afterwards: nothing in this crate hands out
//! mutable access to its records.
//!
//! # File formats
//!
//! - `.json`: a bare array of recipes, or the `{"recipes": [...]}` envelope
//! - `.toml`: one `[[recipes]]` table per recipe
//!
//! Field names are camelCase on disk (`cookTime`).

pub mod error;
mod sample;

pub use error::CatalogError;
pub use sample::sample_recipes;

use crate::category::Category;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// A single recipe record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    /// Energy in kcal
    pub calories: u32,
    /// Grams
    pub protein: u32,
    /// Grams
    pub carbs: u32,
    /// Grams
    pub fat: u32,
    /// Free-form duration label, e.g. "25 мин"
    pub cook_time: String,
    /// One of the concrete [`Category`] labels
    pub category: String,
    /// Display order matters
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Steps in execution order
    #[serde(default)]
    pub instructions: Vec<String>,
}

/// On-disk catalog shapes
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Envelope { recipes: Vec<Recipe> },
    Bare(Vec<Recipe>),
}

impl CatalogFile {
    fn into_recipes(self) -> Vec<Recipe> {
        match self {
            Self::Envelope { recipes } | Self::Bare(recipes) => recipes,
        }
    }
}

/// Read-only ordered recipe collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Build a catalog, validating its records
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if two recipes share an id, or
    /// `CatalogError::UnknownCategory` if a recipe category is not one of the
    /// selector labels.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(recipes.len());
        for recipe in &recipes {
            if !seen.insert(recipe.id) {
                return Err(CatalogError::DuplicateId(recipe.id));
            }
            if Category::from_recipe_label(&recipe.category).is_none() {
                return Err(CatalogError::UnknownCategory {
                    id: recipe.id,
                    category: recipe.category.clone(),
                });
            }
        }
        Ok(Self { recipes })
    }

    /// The bundled sample catalog
    #[must_use]
    pub fn sample() -> Self {
        Self {
            recipes: sample_recipes(),
        }
    }

    /// Load a catalog file, picking the parser from the file extension
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read, has an unknown
    /// extension, cannot be parsed, or fails validation.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let recipes = match extension.as_str() {
            "json" => {
                let content = fs::read_to_string(path)?;
                serde_json::from_str::<CatalogFile>(&content)?.into_recipes()
            }
            "toml" => {
                let content = fs::read_to_string(path)?;
                toml::from_str::<CatalogFile>(&content)?.into_recipes()
            }
            other => {
                let shown = if other.is_empty() {
                    path.display().to_string()
                } else {
                    other.to_string()
                };
                return Err(CatalogError::UnsupportedFormat(shown));
            }
        };

        let catalog = Self::new(recipes)?;
        tracing::info!(path = %path.display(), recipes = catalog.len(), "loaded catalog file");
        Ok(catalog)
    }

    /// Load from `path` when given, otherwise use the bundled samples
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Catalog::from_path`].
    pub fn load_or_sample(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Ok(Self::sample()),
        }
    }

    /// All recipes in catalog order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Linear search by id
    #[must_use]
    pub fn find(&self, id: u32) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Number of recipes a category choice admits
    #[must_use]
    pub fn count_by_category(&self, category: Category) -> usize {
        self.recipes
            .iter()
            .filter(|r| category.admits(&r.category))
            .count()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::recipe;
    use std::io::Write;

    fn write_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_sample_catalog() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.len(), 3);
        let ids: Vec<u32> = catalog.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(catalog.recipes()[2].name, "Ниндзя салат");
        assert_eq!(catalog.recipes()[1].category, "Обед");
        // samples pass validation
        assert!(Catalog::new(sample_recipes()).is_ok());
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.count_by_category(Category::All), 0);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::new(vec![
            recipe(1, "Омлет", "Завтрак"),
            recipe(1, "Суп", "Обед"),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(1))));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let result = Catalog::new(vec![recipe(5, "Торт", "Десерт")]);
        match result {
            Err(CatalogError::UnknownCategory { id, category }) => {
                assert_eq!(id, 5);
                assert_eq!(category, "Десерт");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_sentinel_label_is_not_a_recipe_category() {
        let result = Catalog::new(vec![recipe(1, "Что угодно", "Все")]);
        assert!(matches!(result, Err(CatalogError::UnknownCategory { .. })));
    }

    #[test]
    fn test_find_and_counts() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.find(2).map(|r| r.name.as_str()), Some("Черепашка пицца"));
        assert!(catalog.find(42).is_none());
        assert_eq!(catalog.count_by_category(Category::All), 3);
        assert_eq!(catalog.count_by_category(Category::Dinner), 1);
        assert_eq!(catalog.count_by_category(Category::Snack), 0);
    }

    #[test]
    fn test_load_json_envelope() {
        let file = write_file(
            ".json",
            r#"{"recipes": [{"id": 9, "name": "Овсянка", "calories": 150, "protein": 6,
                "carbs": 27, "fat": 3, "cookTime": "7 мин", "category": "Завтрак",
                "ingredients": ["Овсяные хлопья", "Вода"], "instructions": ["Сварить"]}]}"#,
        );
        let catalog = Catalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        let r = &catalog.recipes()[0];
        assert_eq!(r.cook_time, "7 мин");
        assert_eq!(r.ingredients, vec!["Овсяные хлопья", "Вода"]);
    }

    #[test]
    fn test_load_json_bare_array() {
        let file = write_file(
            ".json",
            r#"[{"id": 1, "name": "Орехи", "calories": 200, "protein": 7, "carbs": 6,
                "fat": 17, "cookTime": "1 мин", "category": "Перекус"}]"#,
        );
        let catalog = Catalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.recipes()[0].category, "Перекус");
        assert!(catalog.recipes()[0].instructions.is_empty());
    }

    #[test]
    fn test_load_toml() {
        let file = write_file(
            ".toml",
            r#"
[[recipes]]
id = 1
name = "Гречка"
calories = 300
protein = 12
carbs = 60
fat = 3
cookTime = "20 мин"
category = "Обед"
ingredients = ["Гречка", "Соль"]
instructions = ["Промыть", "Варить 20 минут"]
"#,
        );
        let catalog = Catalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.recipes()[0].instructions.len(), 2);
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let file = write_file(".yaml", "recipes: []");
        assert!(matches!(
            Catalog::from_path(file.path()),
            Err(CatalogError::UnsupportedFormat(ext)) if ext == "yaml"
        ));
    }

    #[test]
    fn test_load_reports_parse_error() {
        let file = write_file(".json", "{\"recipes\": 3}");
        assert!(matches!(
            Catalog::from_path(file.path()),
            Err(CatalogError::ParseError(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Catalog::from_path("/nonexistent/ninja/catalog.json");
        assert!(matches!(result, Err(CatalogError::IoError(_))));
    }

    #[test]
    fn test_load_or_sample() {
        assert_eq!(Catalog::load_or_sample(None).unwrap(), Catalog::sample());
    }
}
