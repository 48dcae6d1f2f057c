use crate::prelude::{println, *};
use colored::Colorize;
use pokedex_core::model::{capitalize, StatName};
use pokedex_core::view::{
    transform_catalog_page, validate_type, ListEntry, ListOutput, SortKey, StatFilter, ViewParams,
};

use super::{fetch_catalog, MAX_FETCH};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
#[command(after_help = "EXAMPLES:
  # Search by name:
  pokedex list --search char

  # Fire types with attack above 50, strongest first:
  pokedex list --type fire --stat attack --min 50 --sort attack

  # Second page, ten items per page:
  pokedex list --page 2 --limit 10

NOTES:
  - Search is a case-insensitive substring match against item names
  - --min keeps items whose stat is strictly greater than the value; 0 disables it
  - Sorting by name is ascending; sorting by a stat is descending
  - At most 100 records are fetched per invocation; use --fetch to lower the cap")]
pub struct ListOptions {
    /// Search text matched against item names
    #[arg(short, long, env = "POKEDEX_SEARCH", default_value = "")]
    pub search: String,

    /// Only show items carrying this type tag
    #[arg(short = 't', long = "type")]
    pub type_filter: Option<String>,

    /// Stat targeted by --min and stat sorting
    #[arg(long, default_value = "attack")]
    pub stat: String,

    /// Keep items whose stat is strictly greater than this value (0 disables)
    #[arg(short, long, default_value = "0")]
    pub min: u32,

    /// Sort key: name, hp, attack, defense, special-attack, special-defense, speed
    #[arg(long, default_value = "name")]
    pub sort: String,

    /// Page number (1-indexed)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Number of items per page
    #[arg(short, long, env = "POKEDEX_LIMIT", default_value = "20")]
    pub limit: usize,

    /// Number of records fetched from the API (capped at 100)
    #[arg(long, env = "POKEDEX_FETCH", default_value = "100")]
    pub fetch: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Fetching up to {} catalog records...", options.fetch.clamp(1, MAX_FETCH));
    }

    let list_output = list_data(&options).await?;

    if options.json {
        output_json(&list_output)?;
    } else {
        output_formatted(&list_output, &options)?;
    }

    Ok(())
}

/// Fetches the catalog and runs the view pipeline, returning a structured ListOutput
pub async fn list_data(options: &ListOptions) -> Result<ListOutput> {
    let params = build_params(options)?;

    let client = reqwest::Client::new();
    let items = fetch_catalog(&client, options.fetch).await?;

    Ok(transform_catalog_page(&items, &params))
}

/// Validate the option strings and assemble the view parameters.
fn build_params(options: &ListOptions) -> Result<ViewParams> {
    if let Some(ty) = &options.type_filter {
        validate_type(ty).map_err(|e| eyre!("{}", e))?;
    }

    let stat: StatName = options.stat.parse().map_err(|e| eyre!("{}", e))?;
    let sort: SortKey = options.sort.parse().map_err(|e| eyre!("{}", e))?;

    Ok(ViewParams {
        search: options.search.clone(),
        selected_type: options.type_filter.clone(),
        stat_filter: StatFilter {
            stat,
            min: options.min,
        },
        sort,
        page: options.page,
        per_page: options.limit.max(1),
    })
}

/// Convert list output to JSON string
fn format_list_json(output: &ListOutput) -> Result<String> {
    serde_json::to_string_pretty(output).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

fn opt_num(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Render the catalog grid for one page of entries.
fn format_grid(items: &[ListEntry]) -> String {
    let mut table = crate::prelude::new_grid();
    table.set_titles(prettytable::row![
        "ID", "Name", "Types", "HP", "Atk", "Def", "SpA", "SpD", "Spe", "Exp"
    ]);

    for entry in items {
        table.add_row(prettytable::row![
            entry.id,
            capitalize(&entry.name),
            entry.types.join("/"),
            entry.hp,
            entry.attack,
            entry.defense,
            entry.special_attack,
            entry.special_defense,
            entry.speed,
            opt_num(entry.base_experience)
        ]);
    }

    table.to_string()
}

/// Convert list output to formatted text with colors
fn format_list_text(output: &ListOutput, options: &ListOptions) -> String {
    let mut result = String::new();
    let pagination = &output.pagination;

    // Header
    result.push_str(&f!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&f!(
        "{}\n",
        f!(
            "POKEDEX CATALOG (Page {} of {})",
            pagination.current_page,
            pagination.total_pages.max(1)
        )
        .bright_cyan()
        .bold()
    ));
    result.push_str(&f!("{}\n", "=".repeat(80).bright_cyan()));

    // Active filters
    let mut filters = Vec::new();
    if !options.search.is_empty() {
        filters.push(f!("search ~ \"{}\"", options.search));
    }
    if let Some(ty) = &options.type_filter {
        filters.push(f!("type = {ty}"));
    }
    if options.min > 0 {
        filters.push(f!("{} > {}", options.stat, options.min));
    }
    if !filters.is_empty() {
        result.push_str(&f!(
            "{}: {}\n",
            "Filters".green(),
            filters.join(" | ").bright_white()
        ));
    }

    if output.items.is_empty() {
        result.push_str(&f!("\n{}\n", "No items on this page.".yellow()));
    } else {
        result.push('\n');
        result.push_str(&format_grid(&output.items));
    }

    // Navigation section
    result.push_str(&f!("\n{}\n", "=".repeat(80).bright_yellow()));
    result.push_str(&f!("{}\n", "NAVIGATION".bright_yellow().bold()));
    result.push_str(&f!("{}\n", "=".repeat(80).bright_yellow()));

    result.push_str(&f!(
        "\n{} {} {} {} ({} {})\n",
        "Showing page".bright_white(),
        pagination.current_page.to_string().bright_cyan().bold(),
        "of".bright_white(),
        pagination.total_pages.max(1).to_string().bright_cyan().bold(),
        pagination.total_items.to_string().bright_cyan().bold(),
        "matching items".bright_white()
    ));

    result.push_str(&f!("\n{}:\n", "To navigate".bright_white().bold()));
    if let Some(next) = &pagination.next_page_command {
        result.push_str(&f!("  {}: {}\n", "Next page".green(), next.cyan()));
    }
    if let Some(prev) = &pagination.prev_page_command {
        result.push_str(&f!("  {}: {}\n", "Previous page".green(), prev.cyan()));
    }
    if pagination.prev_page_command.is_some() && pagination.next_page_command.is_none() {
        result.push_str(&f!(
            "  {}: {}\n",
            "First page".green(),
            "pokedex list --page 1".cyan()
        ));
    }

    result.push_str(&f!("\n{}:\n", "To change page size".bright_white().bold()));
    result.push_str(&f!("  {}\n", "pokedex list --limit <number>".cyan()));

    result.push_str(&f!("\n{}:\n", "To filter and sort".bright_white().bold()));
    result.push_str(&f!(
        "  {}\n",
        "pokedex list --search <text> --type <type> --min <value> --sort <key>".cyan()
    ));

    result.push_str(&f!("\n{}:\n", "To read an item".bright_white().bold()));
    result.push_str(&f!("  {}\n", "pokedex read <id-or-name>".cyan()));
    if let Some(first) = output.items.first() {
        result.push_str(&f!(
            "  {}: {}\n",
            "Example".green(),
            f!("pokedex read {}", first.name).cyan()
        ));
    }

    result.push_str(&f!("\n{}:\n", "To get JSON output".bright_white().bold()));
    result.push_str(&f!("  {}\n", "pokedex list --json".cyan()));

    result.push('\n');
    result
}

fn output_json(output: &ListOutput) -> Result<()> {
    let json = format_list_json(output)?;
    println!("{}", json);
    Ok(())
}

fn output_formatted(output: &ListOutput, options: &ListOptions) -> Result<()> {
    let formatted = format_list_text(output, options);
    print!("{}", formatted);
    Ok(())
}
