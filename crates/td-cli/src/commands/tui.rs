use td_tui::{DiceApp, TuiArgs};

use crate::GlobalArgs;

pub fn run(global: &GlobalArgs, args: TuiArgs) -> Result<(), String> {
    if let Some(path) = &args.log_file {
        td_tui::logging::init_file_logging(path).map_err(|e| e.to_string())?;
    }
    let config = args.into_config(global.source.to_config())?;
    let app = DiceApp::from_config(config).map_err(|e| e.to_string())?;
    td_tui::terminal::run(app).map_err(|e| e.to_string())
}
