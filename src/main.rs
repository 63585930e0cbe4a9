//! Ninja Nutrition CLI application entry point
//!
//! Opens the interactive landing page by default and offers plain-text
//! commands for scripting.
//!
//! # Usage
//!
//! ```bash
//! # Open the landing page (default command)
//! ninja-nutrition
//! ninja-nutrition browse --category Завтрак
//!
//! # List recipes
//! ninja-nutrition recipes --search смузи
//! ninja-nutrition ls -c lunch --sort name --format json
//!
//! # Show one recipe
//! ninja-nutrition show 2
//!
//! # Use a custom catalog file
//! ninja-nutrition --catalog recipes.toml ls
//!
//! # Quiet mode (only output results)
//! ninja-nutrition -q ls
//! ```
//!
//! # Configuration
//!
//! Settings are read from the user's config directory
//! (`~/.config/ninja-nutrition/config.toml` on Linux) and from `NINJA_*`
//! environment variables.

use clap::CommandFactory;
use ninja_nutrition::{
    Catalog, FilterState, NinjaError,
    cli::{Cli, Commands, ConfigCommands},
    completions,
    config::NinjaConfig,
    filter::SortOrder,
    icons::IconStyle,
    logging, output,
    ui::{BrowseConfig, LandingApp, OutputWriter, PageBrowser, StdoutWriter},
};
use std::io;

type Result<T> = std::result::Result<T, NinjaError>;

/// Run the interactive page until the user quits
fn handle_browse_command(
    catalog: &Catalog,
    filter: FilterState,
    mouse: bool,
    icons: IconStyle,
    writer: &dyn OutputWriter,
) -> Result<()> {
    tracing::info!(
        search = filter.search_term.as_str(),
        category = %filter.category,
        mouse,
        "opening landing page"
    );

    let app = LandingApp::new().with_icons(icons);
    let result = app.run(catalog, BrowseConfig::new(filter).with_mouse(mouse))?;

    if let Some(recipe) = result.last_viewed.and_then(|id| catalog.find(id)) {
        writer.info(&format!("Последний рецепт: {}", recipe.name));
    }
    Ok(())
}

/// Print the recipes matching `filter`
fn handle_recipes_command(
    catalog: &Catalog,
    filter: &FilterState,
    sort: SortOrder,
    format: output::RecipeFormat,
    quiet: bool,
    writer: &dyn OutputWriter,
) -> Result<()> {
    let mut visible = filter.apply(catalog.recipes());
    sort.sort(&mut visible);
    tracing::debug!(matches = visible.len(), ?sort, ?format, "listing recipes");

    if visible.is_empty() && format == output::RecipeFormat::Table {
        writer.info("Рецепты не найдены");
        return Ok(());
    }

    print!("{}", output::format_recipes(&visible, format, quiet)?);
    Ok(())
}

/// Print one recipe in full
fn handle_show_command(catalog: &Catalog, id: u32) -> Result<()> {
    let recipe = catalog.find(id).ok_or(NinjaError::RecipeNotFound(id))?;
    print!("{}", output::recipe_detail(recipe));
    Ok(())
}

fn handle_config_command(
    mut config: NinjaConfig,
    command: &ConfigCommands,
    writer: &dyn OutputWriter,
) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let text = toml::to_string_pretty(&config)
                .map_err(|e| NinjaError::InvalidInput(format!("Failed to render config: {e}")))?;
            print!("{text}");
        }
        ConfigCommands::Path => {
            writer.write(&NinjaConfig::config_path()?.display().to_string());
        }
        ConfigCommands::Get { key } => {
            writer.write(&config.get(key)?);
        }
        ConfigCommands::Set { setting } => {
            let (key, value) = config.apply_setting(setting)?;
            config.save()?;
            writer.success(&format!("Set {key} = {value}"));
        }
    }
    Ok(())
}

/// Main entry point for the ninja-nutrition application
///
/// Loads configuration, parses command-line arguments, and dispatches to the
/// appropriate command handler.
///
/// # Errors
///
/// Returns `NinjaError` if configuration or the catalog cannot be loaded, or
/// any command handler returns an error.
fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let config = NinjaConfig::load()?;

    let quiet = cli.quiet || config.quiet;
    let writer = StdoutWriter::new().quiet(quiet);
    let command = cli.get_command();

    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    let log_file = config.log_file.as_deref();
    let level = if matches!(command, Commands::Browse { .. }) {
        logging::tui_level(level, log_file)
    } else {
        level
    };
    logging::init(level, log_file)?;

    // Commands that never touch the catalog
    match &command {
        Commands::Config { command } => return handle_config_command(config, command, &writer),
        Commands::Completions { shell } => {
            completions::generate_static(*shell, &mut Cli::command(), &mut io::stdout());
            return Ok(());
        }
        _ => {}
    }

    let catalog_path = cli.catalog.as_deref().or(config.catalog_path.as_deref());
    let catalog = Catalog::load_or_sample(catalog_path)?;

    match command {
        Commands::Browse {
            filter,
            no_mouse,
            ascii,
        } => {
            let icons = if ascii { IconStyle::Ascii } else { config.icons };
            handle_browse_command(
                &catalog,
                filter.to_filter(config.default_category),
                config.mouse && !no_mouse,
                icons,
                &writer,
            )?;
        }
        Commands::Recipes {
            filter,
            sort,
            format,
        } => {
            handle_recipes_command(
                &catalog,
                &filter.to_filter(config.default_category),
                sort,
                format,
                quiet,
                &writer,
            )?;
        }
        Commands::Show { id } => handle_show_command(&catalog, id)?,
        Commands::Categories => print!("{}", output::categories_listing(&catalog, quiet)),
        Commands::Config { .. } | Commands::Completions { .. } => unreachable!(),
    }

    Ok(())
}
