//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Spotify backend API client.
pub mod spotify;

pub use config::{AppConfig, CliArgs, ConfigStore, LogLevel};
pub use spotify::SpotifyWebClient;
