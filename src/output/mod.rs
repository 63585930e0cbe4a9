//! Output formatting for CLI display
//!
//! Renders recipes for the non-interactive commands: a colored table, the
//! `{"recipes": [...]}` JSON envelope, flat CSV rows and the full detail view
//! printed by `show`.

use crate::NinjaError;
use crate::catalog::{Catalog, Recipe};
use crate::category::Category;
use crate::page::content::detail;
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use std::fmt::Write as _;

/// Separator used when lists are flattened into one CSV cell
pub const CSV_LIST_SEPARATOR: &str = "; ";

/// CSV column names, written even when no recipe matches
const CSV_HEADER: [&str; 10] = [
    "id",
    "name",
    "calories",
    "protein",
    "carbs",
    "fat",
    "cookTime",
    "category",
    "ingredients",
    "instructions",
];

/// Output format for recipe listings
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecipeFormat {
    /// Human-readable table
    #[default]
    Table,
    /// `{"recipes": [...]}` envelope
    Json,
    /// One row per recipe with a header
    Csv,
}

#[derive(Serialize)]
struct RecipeEnvelope<'a> {
    recipes: &'a [&'a Recipe],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow<'a> {
    id: u32,
    name: &'a str,
    calories: u32,
    protein: u32,
    carbs: u32,
    fat: u32,
    cook_time: &'a str,
    category: &'a str,
    ingredients: String,
    instructions: String,
}

impl<'a> From<&'a Recipe> for CsvRow<'a> {
    fn from(recipe: &'a Recipe) -> Self {
        Self {
            id: recipe.id,
            name: &recipe.name,
            calories: recipe.calories,
            protein: recipe.protein,
            carbs: recipe.carbs,
            fat: recipe.fat,
            cook_time: &recipe.cook_time,
            category: &recipe.category,
            ingredients: recipe.ingredients.join(CSV_LIST_SEPARATOR),
            instructions: recipe.instructions.join(CSV_LIST_SEPARATOR),
        }
    }
}

/// Format recipes in the requested format
///
/// # Errors
///
/// Returns `NinjaError` if JSON or CSV serialization fails.
pub fn format_recipes(
    recipes: &[&Recipe],
    format: RecipeFormat,
    quiet: bool,
) -> Result<String, NinjaError> {
    match format {
        RecipeFormat::Table => Ok(recipes_table(recipes, quiet)),
        RecipeFormat::Json => recipes_json(recipes),
        RecipeFormat::Csv => recipes_csv(recipes),
    }
}

/// JSON envelope with camelCase fields, newline terminated
///
/// # Errors
///
/// Returns `NinjaError::JsonError` if serialization fails.
pub fn recipes_json(recipes: &[&Recipe]) -> Result<String, NinjaError> {
    let mut json = serde_json::to_string_pretty(&RecipeEnvelope { recipes })?;
    json.push('\n');
    Ok(json)
}

/// CSV with a header row; list fields are joined with [`CSV_LIST_SEPARATOR`]
///
/// # Errors
///
/// Returns `NinjaError` if a row cannot be written.
pub fn recipes_csv(recipes: &[&Recipe]) -> Result<String, NinjaError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for recipe in recipes {
        writer.serialize(CsvRow::from(*recipe))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| NinjaError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| NinjaError::InvalidInput(e.to_string()))
}

/// Table with one line per recipe; bare names in quiet mode
#[must_use]
pub fn recipes_table(recipes: &[&Recipe], quiet: bool) -> String {
    let mut out = String::new();
    for recipe in recipes {
        if quiet {
            let _ = writeln!(out, "{}", recipe.name);
        } else {
            let _ = writeln!(out, "{}", recipe_line(recipe));
        }
    }
    out
}

/// One table line
#[must_use]
pub fn recipe_line(recipe: &Recipe) -> String {
    format!(
        "  {:>3}  {}  {}  {}  {} {}  {}",
        recipe.id.to_string().dimmed(),
        recipe.name.bold(),
        format!("[{}]", recipe.category).yellow(),
        recipe.cook_time,
        recipe.calories.to_string().green().bold(),
        detail::CALORIES,
        format!("Б{} Ж{} У{}", recipe.protein, recipe.fat, recipe.carbs).cyan(),
    )
}

/// Full recipe text for `show`
#[must_use]
pub fn recipe_detail(recipe: &Recipe) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}",
        recipe.name.green().bold(),
        format!("[{}]", recipe.category).yellow()
    );
    let _ = writeln!(out, "{}", recipe.cook_time.dimmed());
    let _ = writeln!(
        out,
        "{} {} | {}{} {} | {}{} {} | {}{} {}",
        recipe.calories.to_string().green().bold(),
        detail::CALORIES,
        recipe.protein,
        detail::GRAMS,
        detail::PROTEIN,
        recipe.carbs,
        detail::GRAMS,
        detail::CARBS,
        recipe.fat,
        detail::GRAMS,
        detail::FAT,
    );

    let _ = writeln!(out, "\n{}", detail::INGREDIENTS.bold());
    for ingredient in &recipe.ingredients {
        let _ = writeln!(out, "  • {ingredient}");
    }

    let _ = writeln!(out, "\n{}", detail::INSTRUCTIONS.bold());
    for (step, instruction) in recipe.instructions.iter().enumerate() {
        let _ = writeln!(out, "  {}. {instruction}", step + 1);
    }
    out
}

/// Category labels in selector order with recipe counts
#[must_use]
pub fn categories_listing(catalog: &Catalog, quiet: bool) -> String {
    let mut out = String::new();
    for category in Category::ALL {
        if quiet {
            let _ = writeln!(out, "{}", category.label());
        } else {
            let _ = writeln!(
                out,
                "  {} ({})",
                category.label(),
                catalog.count_by_category(category)
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_refs(catalog: &Catalog) -> Vec<&Recipe> {
        catalog.iter().collect()
    }

    #[test]
    fn test_json_envelope() {
        let catalog = Catalog::sample();
        let json = recipes_json(&sample_refs(&catalog)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let recipes = value["recipes"].as_array().unwrap();
        assert_eq!(recipes.len(), 3);
        assert_eq!(recipes[0]["name"], "Супергеройский смузи");
        assert_eq!(recipes[1]["cookTime"], "25 мин");
        assert!(recipes[1].get("cook_time").is_none());
        assert_eq!(recipes[2]["ingredients"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_json_empty() {
        let json = recipes_json(&[]).unwrap();
        assert!(json.ends_with("}\n"));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["recipes"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_csv_flattens_lists() {
        let catalog = Catalog::sample();
        let pizza = catalog.find(2).unwrap();
        let csv = recipes_csv(&[pizza]).unwrap();
        let mut lines = csv.lines();

        assert_eq!(
            lines.next(),
            Some("id,name,calories,protein,carbs,fat,cookTime,category,ingredients,instructions")
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("2,Черепашка пицца,320,18,28,12,25 мин,Обед,"));
        assert!(row.contains("Цельнозерновая основа; Томатный соус; Моцарелла"));
        assert!(row.contains("Раскатать тесто; Добавить соус и топпинги; Запечь 15 минут"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_csv_empty_has_header() {
        let csv = recipes_csv(&[]).unwrap();
        assert_eq!(
            csv,
            "id,name,calories,protein,carbs,fat,cookTime,category,ingredients,instructions\n"
        );
    }

    #[test]
    fn test_table_quiet_prints_names() {
        let catalog = Catalog::sample();
        let table = recipes_table(&sample_refs(&catalog), true);
        assert_eq!(
            table,
            "Супергеройский смузи\nЧерепашка пицца\nНиндзя салат\n"
        );
    }

    #[test]
    fn test_table_line_contents() {
        let catalog = Catalog::sample();
        let line = recipe_line(catalog.find(3).unwrap());
        assert!(line.contains("Ниндзя салат"));
        assert!(line.contains("[Ужин]"));
        assert!(line.contains("10 мин"));
        assert!(line.contains("180"));
        assert!(line.contains("Б12 Ж9 У15"));
    }

    #[test]
    fn test_recipe_detail() {
        let catalog = Catalog::sample();
        let text = recipe_detail(catalog.find(2).unwrap());
        assert!(text.contains("Черепашка пицца"));
        assert!(text.contains("18г белки"));
        assert!(text.contains("  • Базилик\n"));
        assert!(text.contains("  1. Раскатать тесто\n"));
        assert!(text.contains("  3. Запечь 15 минут\n"));
    }

    #[test]
    fn test_categories_listing() {
        let catalog = Catalog::sample();
        let listing = categories_listing(&catalog, false);
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(
            lines,
            vec![
                "  Все (3)",
                "  Завтрак (1)",
                "  Обед (1)",
                "  Ужин (1)",
                "  Перекус (0)",
            ]
        );
        assert_eq!(
            categories_listing(&catalog, true),
            "Все\nЗавтрак\nОбед\nУжин\nПерекус\n"
        );
    }

    #[test]
    fn test_format_dispatch() {
        let catalog = Catalog::sample();
        let refs = sample_refs(&catalog);
        assert!(
            format_recipes(&refs, RecipeFormat::Json, false)
                .unwrap()
                .starts_with('{')
        );
        assert!(
            format_recipes(&refs, RecipeFormat::Csv, false)
                .unwrap()
                .starts_with("id,")
        );
        assert_eq!(
            format_recipes(&refs, RecipeFormat::Table, true).unwrap().lines().count(),
            3
        );
    }
}
