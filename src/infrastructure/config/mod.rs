mod app_config;
mod args;
mod storage;

pub use app_config::{AppConfig, LogLevel};
pub use args::CliArgs;
pub use storage::{ConfigError, ConfigStore};
