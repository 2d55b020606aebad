//! Command-line surface
//!
//! Parses arguments and owns all user-facing output. The library modules
//! return values; this module prints them.

pub mod demo;
pub mod hello;
pub mod setup;

use clap::{Parser, Subcommand};
use log::info;
use std::io;
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::heartbeat;
use crate::kv::VolumeStore;
use crate::server::Server;
use crate::storage::setup_storage;

#[derive(Debug, Parser)]
#[command(name = "volkit", version, about = "Container environment checks")]
pub struct Cli {
    /// Config file (TOML). Defaults to ./volkit.toml when present
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a greeting and exit
    Hello,
    /// Print a heartbeat forever
    Heartbeat {
        /// Seconds between beats, overrides the configured interval
        #[arg(long)]
        interval: Option<u64>,
        /// Stop after this many beats
        #[arg(long)]
        count: Option<u64>,
    },
    /// Resolve the storage root, create directories and write the manifest
    Setup {
        /// Preferred mount path
        #[arg(long)]
        primary: Option<PathBuf>,
        /// Used when the primary path is missing or not writable
        #[arg(long)]
        fallback: Option<PathBuf>,
    },
    /// Walk through the key-value store on the volume
    Demo {
        /// Store root, overrides the configured volume path
        #[arg(long)]
        volume: Option<PathBuf>,
    },
    /// Serve the hello page over HTTP
    Serve {
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    pub fn load_config(&self) -> Result<AppConfig, AppError> {
        Ok(AppConfig::load_from(self.config.as_deref())?)
    }
}

/// Execute the parsed command
pub async fn run(cli: Cli) -> Result<(), AppError> {
    let config = cli.load_config()?;

    match cli.command {
        Command::Hello => {
            print!("{}", hello::banner(&hello::host_name()));
        }
        Command::Heartbeat { interval, count } => {
            let interval = interval
                .filter(|secs| *secs > 0)
                .map(std::time::Duration::from_secs)
                .unwrap_or_else(|| config.heartbeat_interval());
            info!("Heartbeat every {:?}", interval);
            heartbeat::run(interval, count, &mut io::stdout()).await?;
        }
        Command::Setup { primary, fallback } => {
            let primary = primary.unwrap_or_else(|| config.primary_path());
            let fallback = fallback.unwrap_or_else(|| config.fallback_path());

            print!("{}", setup::header());
            let result = setup_storage(&primary, &fallback)?;
            print!("{}", setup::summary(&result));
        }
        Command::Demo { volume } => {
            let paths = match volume {
                Some(path) => crate::kv::StorePaths::under(&path),
                None => config.store_paths(),
            };
            let report = demo::run_demo(&VolumeStore::new(paths))?;
            print!("{}", demo::render(&report));
        }
        Command::Serve { port } => {
            let mut server_config = config.server();
            if let Some(port) = port {
                server_config.port = port;
            }
            let server = Server::bind(server_config).await?;
            println!("🌐 Web server running on {}", server.local_addr()?);
            println!("This CAN be accessed from the internet!");
            server.start().await;
        }
    }

    Ok(())
}
