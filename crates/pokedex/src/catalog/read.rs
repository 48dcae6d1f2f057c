use crate::prelude::{println, *};
use colored::Colorize;
use pokedex_core::detail::{transform_detail, DetailOutput};

use super::{extract_lookup, fetch_by_id, fetch_by_name, type_color, Lookup};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ReadOptions {
    /// Catalog item id or exact name (e.g., "25" or "pikachu")
    #[clap(env = "POKEDEX_ITEM")]
    pub item: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ReadOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Fetching item: {}", options.item);
    }

    let detail = read_data(&options.item).await?;

    if options.json {
        output_json(&detail)?;
    } else {
        output_formatted(&detail)?;
    }

    Ok(())
}

/// Fetches one catalog item by id or name and returns it as detail output
pub async fn read_data(item: &str) -> Result<DetailOutput> {
    let lookup = extract_lookup(item)?;

    let client = reqwest::Client::new();
    let pokemon = match &lookup {
        Lookup::Id(id) => fetch_by_id(&client, *id).await?,
        Lookup::Name(name) => fetch_by_name(&client, name).await?,
    };

    let pokemon = pokemon.ok_or_else(|| {
        eyre!(Error::NotFound(f!(
            "no catalog item matches \"{}\"",
            item.trim()
        )))
    })?;

    Ok(transform_detail(&pokemon))
}

/// Convert detail output to JSON string
fn format_detail_json(detail: &DetailOutput) -> Result<String> {
    serde_json::to_string_pretty(detail).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Convert detail output to formatted text with colors
fn format_detail_text(detail: &DetailOutput) -> String {
    let mut result = String::new();

    // Header
    result.push_str(&f!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&f!(
        "{}\n",
        f!("{} #{}", detail.display_name, detail.id)
            .bright_cyan()
            .bold()
    ));
    result.push_str(&f!("{}\n\n", "=".repeat(80).bright_cyan()));

    // Type badges
    let badges: Vec<String> = detail
        .types
        .iter()
        .map(|ty| ty.color(type_color(ty)).bold().to_string())
        .collect();
    result.push_str(&f!("{}: {}\n\n", "Types".green(), badges.join(" ")));

    // Field table
    let mut table = crate::prelude::new_table();
    if let Some(exp) = detail.base_experience {
        table.add_row(prettytable::row!["Base Experience", exp]);
    }
    if let Some(height) = detail.height {
        table.add_row(prettytable::row!["Height", height]);
    }
    if let Some(order) = detail.order {
        table.add_row(prettytable::row!["Order", order]);
    }
    table.add_row(prettytable::row![
        "Default Form",
        if detail.is_default { "yes" } else { "no" }
    ]);
    if let Some(sprite) = &detail.sprite {
        table.add_row(prettytable::row!["Sprite", sprite]);
    }
    if let Some(artwork) = &detail.artwork {
        table.add_row(prettytable::row!["Artwork", artwork]);
    }
    result.push_str(&table.to_string());

    // Stats
    result.push_str(&f!("\n{}\n", "STATS".bright_yellow().bold()));
    let mut stats = crate::prelude::new_table();
    for line in &detail.stats {
        stats.add_row(prettytable::row![line.label, line.name, line.value]);
    }
    result.push_str(&stats.to_string());

    result.push_str(&f!(
        "\n{}: {}\n",
        "To browse the catalog".bright_white().bold(),
        "pokedex list".cyan()
    ));

    result.push('\n');
    result
}

fn output_json(detail: &DetailOutput) -> Result<()> {
    let json = format_detail_json(detail)?;
    println!("{}", json);
    Ok(())
}

fn output_formatted(detail: &DetailOutput) -> Result<()> {
    let formatted = format_detail_text(detail);
    print!("{}", formatted);
    Ok(())
}
