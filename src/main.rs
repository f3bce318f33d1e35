use anyhow::Result;
use clap::{Parser, Subcommand};

use sdl2_setup::{commands, utils};

#[derive(Parser)]
#[clap(name = "setup-sdl2")]
#[clap(about = "Fetch the SDL2 development libraries into third_party/SDL2")]
#[clap(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Show diagnostic logging
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Download, extract and move SDL2 into third_party/SDL2 (default)
    Install,
    /// Show the archive, URL and destination without touching anything
    Plan {
        /// Print as JSON
        #[clap(long)]
        json: bool,
    },
    /// Check whether SDL2 is installed in the current directory
    Status,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    utils::logging::init_logging(cli.verbose);

    let result = match cli.command.unwrap_or(Commands::Install) {
        Commands::Install => commands::setup::setup().map_err(|e| anyhow::anyhow!(e)),
        Commands::Plan { json } => {
            commands::plan::print_plan(json).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Status => commands::status::check_status().map_err(|e| anyhow::anyhow!(e)),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
