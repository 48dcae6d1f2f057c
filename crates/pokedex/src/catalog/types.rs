use crate::prelude::{println, *};
use colored::Colorize;
use pokedex_core::model::{capitalize, TYPE_VOCABULARY};

use super::type_color;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct TypesOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: TypesOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("{} known types", TYPE_VOCABULARY.len());
    }

    if options.json {
        println!("{}", format_types_json()?);
    } else {
        print!("{}", format_types_text());
    }

    Ok(())
}

/// Convert the type vocabulary to JSON string
fn format_types_json() -> Result<String> {
    serde_json::to_string_pretty(&TYPE_VOCABULARY)
        .map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Convert the type vocabulary to formatted text with colors
fn format_types_text() -> String {
    let mut result = String::new();

    result.push_str(&f!("\n{}\n", "KNOWN TYPES".bright_cyan().bold()));

    for ty in TYPE_VOCABULARY {
        result.push_str(&f!(
            "  {}  {}\n",
            capitalize(ty).color(type_color(ty)).bold(),
            f!("pokedex list --type {ty}").cyan()
        ));
    }

    result.push('\n');
    result
}
