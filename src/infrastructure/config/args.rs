use std::path::PathBuf;

use clap::Parser;

use super::app_config::LogLevel;
use crate::domain::entities::{GridSize, SelectionType};

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "topgrid",
    version,
    about = "Generate a grid collage of your top Spotify artists or tracks",
    long_about = None
)]
pub struct CliArgs {
    /// Backend access token (passed through as-is).
    #[arg(long, env = "TOPGRID_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Which category of top content to display.
    #[arg(long, value_enum, default_value_t = SelectionType::Artists)]
    pub selection_type: SelectionType,

    /// Grid dimensions as COLSxROWS, e.g. 3x3.
    #[arg(long, value_name = "SIZE")]
    pub grid_size: Option<GridSize>,

    /// Include the profile picture in the grid.
    #[arg(long)]
    pub include_profile_picture: bool,

    /// Drop items without a usable image.
    #[arg(long)]
    pub exclude_null_images: bool,

    /// Blend the two colors as a gradient.
    #[arg(long)]
    pub use_gradient: Option<bool>,

    /// Primary color (hex code).
    #[arg(long)]
    pub color1: Option<String>,

    /// Secondary color (hex code).
    #[arg(long)]
    pub color2: Option<String>,

    /// Backend base URL.
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,
}
