//! CLI frontend for the truedice random source and dice roller.

mod commands;
mod logging;

use std::process;

use clap::{Args, Parser, Subcommand};
use td_tui::{SourceArgs, TuiArgs};

#[derive(Parser)]
#[command(
    name = "truedice",
    about = "True-random dice with a local pseudo-random fallback",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Options accepted by every subcommand.
#[derive(Args, Clone)]
pub(crate) struct GlobalArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log more (repeat for more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Show how many bytes of true randomness remain (-1 if unknown)
    Quota,

    /// Request integers, a sequence, or strings
    Get(commands::get::GetArgs),

    /// Roll a coin, a die (d4, d6, d20, d30, ...), or ability scores
    Roll {
        /// What to roll: coin, dN, or abilities
        category: String,

        /// Number of rolls
        #[arg(short, long, default_value = "1")]
        times: u32,
    },

    /// Roll six ability scores (4d6, drop the lowest) and show the dice
    Abilities,

    /// Launch the accessible terminal roller
    Tui(TuiArgs),
}

fn main() {
    let cli = Cli::parse();

    if !matches!(cli.command, Commands::Tui(_)) {
        logging::init_logging(cli.global.verbose);
    }

    let result = match cli.command {
        Commands::Quota => commands::quota::run(&cli.global),
        Commands::Get(args) => commands::get::run(&cli.global, args),
        Commands::Roll { category, times } => commands::roll::run(&cli.global, &category, times),
        Commands::Abilities => commands::abilities::run(&cli.global),
        Commands::Tui(args) => commands::tui::run(&cli.global, args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
