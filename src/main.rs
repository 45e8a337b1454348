use std::process::ExitCode;

use tracing::{error, info};
use tuishelf::{
    catalog::Catalog,
    config::load_default_config,
    core::Result,
    logging,
    tui::{self, Settings},
};

fn main() -> ExitCode {
    // Optional positional argument: path to the catalog database
    let args: Vec<String> = std::env::args().collect();
    let db_arg = args.get(1).map(String::as_str);

    match run(db_arg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("tuishelf exited with an error: {}", e);
            eprintln!("tuishelf: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(db_arg: Option<&str>) -> Result<()> {
    let config = load_default_config()?;

    match logging::init(&config.logging) {
        Ok(path) => info!("Starting tuishelf, logging to {:?}", path),
        Err(e) => eprintln!("Logging disabled: {}", e),
    }

    let settings = Settings::from_config(&config)?;
    let catalog = Catalog::open(config.db_path(db_arg))?;
    tui::run(catalog, settings)
}
