use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use topgrid::application::services::{ContentResolver, ProfilePictureResolver, ResolveRequest};
use topgrid::domain::entities::AccessToken;
use topgrid::infrastructure::{AppConfig, CliArgs, ConfigStore, SpotifyWebClient};
use topgrid::presentation::{TextGridRenderer, TopContentView, ViewOptions};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        let stderr_layer = fmt::layer().with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();

    let store = ConfigStore::new()?;
    let mut config = store.load_config(args.config.as_deref())?;
    config.apply_overrides(&args);

    init_logging(&config)?;

    info!(version = topgrid::VERSION, "Starting topgrid");

    let client = Arc::new(SpotifyWebClient::with_base_url(&config.api_url)?);
    let content_resolver = ContentResolver::new(client.clone());
    let profile_resolver = ProfilePictureResolver::new(client);

    let token = AccessToken::new(&args.token);
    let request = ResolveRequest {
        token: token.clone(),
        selection: args.selection_type,
        grid: config.grid_size,
        exclude_null_images: args.exclude_null_images,
    };

    // The two resolvers are independent; run them concurrently.
    let (resolution, profile_picture_url) = tokio::join!(
        content_resolver.resolve(&request),
        profile_resolver.resolve(&token, args.include_profile_picture),
    );

    let renderer = Arc::new(TextGridRenderer::stdout());
    let mut view = TopContentView::new(renderer);

    let options = ViewOptions {
        selection: args.selection_type,
        grid: config.grid_size,
        style: config.style.clone(),
        include_profile_picture: args.include_profile_picture,
    };

    view.present(&options, &resolution, profile_picture_url)?;

    Ok(())
}
