//! Standalone binary for the accessible dice roller.

use std::process;

use clap::Parser;
use td_tui::{DiceApp, SourceArgs, TuiArgs};

#[derive(Parser)]
#[command(
    name = "truedice-tui",
    about = "Accessible true-random dice roller",
    version
)]
struct Args {
    #[command(flatten)]
    tui: TuiArgs,

    #[command(flatten)]
    source: SourceArgs,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), String> {
    if let Some(path) = &args.tui.log_file {
        td_tui::logging::init_file_logging(path).map_err(|e| e.to_string())?;
    }

    let config = args.tui.into_config(args.source.to_config())?;
    let app = DiceApp::from_config(config).map_err(|e| e.to_string())?;
    td_tui::terminal::run(app).map_err(|e| e.to_string())
}
