//! Testing utilities for ninja-nutrition
//!
//! Recipe builders and small catalogs for unit tests.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{Catalog, Recipe};

/// Build a minimal recipe with the given id, name and category label
///
/// Nutrition values are derived from the id so records stay distinguishable.
#[must_use]
pub fn recipe(id: u32, name: &str, category: &str) -> Recipe {
    Recipe {
        id,
        name: name.to_string(),
        calories: 100 + id,
        protein: id,
        carbs: id * 2,
        fat: id / 2,
        cook_time: format!("{id} мин"),
        category: category.to_string(),
        ingredients: vec![format!("Ингредиент {id}")],
        instructions: vec!["Шаг 1".to_string(), "Шаг 2".to_string()],
    }
}

/// Catalog of five recipes covering every concrete category
///
/// # Panics
/// Panics if the fixture fails validation, which would be a bug in the fixture.
#[must_use]
pub fn mixed_catalog() -> Catalog {
    Catalog::new(vec![
        recipe(10, "Зелёный смузи", "Завтрак"),
        recipe(11, "Суп ниндзя", "Обед"),
        recipe(12, "Смузи из ягод", "Перекус"),
        recipe(13, "Рыба на пару", "Ужин"),
        recipe(14, "СМУЗИ протеиновый", "Завтрак"),
    ])
    .expect("fixture catalog is valid")
}

/// Ids of a recipe slice, for compact assertions
#[must_use]
pub fn ids(recipes: &[&Recipe]) -> Vec<u32> {
    recipes.iter().map(|r| r.id).collect()
}
