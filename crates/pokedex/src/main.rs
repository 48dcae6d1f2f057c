use crate::prelude::*;
use clap::Parser;

mod catalog;
mod error;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Browse the Pokémon catalog from the terminal"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "POKEDEX_VERBOSE", global = true, default_value = "false")]
    verbose: bool,

    /// Disable colored output. The NO_COLOR environment variable is honored as well.
    #[clap(long, global = true, default_value = "false")]
    no_color: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// List catalog items with filtering, sorting, and pagination
    List(crate::catalog::list::ListOptions),

    /// Read a single catalog item by id or name
    Read(crate::catalog::read::ReadOptions),

    /// Print the known type vocabulary
    Types(crate::catalog::types::TypesOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    if app.global.no_color {
        colored::control::set_override(false);
    }

    match app.command {
        SubCommands::List(options) => crate::catalog::list::run(options, app.global).await,
        SubCommands::Read(options) => crate::catalog::read::run(options, app.global).await,
        SubCommands::Types(options) => crate::catalog::types::run(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
