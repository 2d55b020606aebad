//! volkit - Entry Point
//!
//! Checks that a container environment can run processes, persist data on a
//! mounted volume and serve HTTP.

use clap::Parser;
use log::info;
use std::process;

use volume_kit::cli::{self, Cli};
use volume_kit::error::handlers::{error_to_exit_code, handle_error};
use volume_kit::utils::logging::setup_logging;

#[tokio::main]
async fn main() {
    setup_logging();

    let cli = Cli::parse();
    info!("Running {:?}", cli.command);

    if let Err(e) = cli::run(cli).await {
        handle_error(&e);
        eprintln!("Error: {e}");
        process::exit(error_to_exit_code(&e));
    }
}
