pub mod cli;
pub mod config;
pub mod error;
pub mod heartbeat;
pub mod kv;
pub mod middleware;
pub mod protocol;
pub mod server;
pub mod storage;
pub mod utils;

pub use config::AppConfig;
pub use error::AppError;
pub use kv::VolumeStore;
pub use server::Server;
pub use storage::setup_storage;
