pub mod app;
pub mod config;
pub mod logger;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
