//! Console entry point for the inventory manager.
//!
//! # Responsibility
//! - Resolve configuration from the working directory and start logging.
//! - Open the inventory and hand stdin/stdout to the menu loop.

mod shell;

use log::info;
use std::process::ExitCode;
use stockroom_core::{init_logging, AppConfig, InventoryService, JsonFileProductRepository};

fn main() -> ExitCode {
    let base = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("cannot resolve working directory: {err}");
            return ExitCode::FAILURE;
        }
    };
    let config = AppConfig::in_dir(base);

    // Logging is optional for an operator session.
    if let Err(err) = init_logging(config.log_level, &config.log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }
    info!(
        "event=cli_start module=cli status=ok version={} data_file={}",
        stockroom_core::core_version(),
        config.data_file.display()
    );

    let mut service = InventoryService::open(JsonFileProductRepository::new(&config.data_file));
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    match shell::run(&mut service, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("console I/O failed: {err}");
            ExitCode::FAILURE
        }
    }
}
