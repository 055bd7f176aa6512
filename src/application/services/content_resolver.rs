//! Top content resolution pipeline.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::services::ContentCache;
use crate::domain::entities::{
    AccessToken, ContentInstance, GridSize, SelectionType, MAX_TOP_ITEMS,
};
use crate::domain::ports::ContentPort;

/// Parameters for one resolution cycle.
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    /// Opaque backend access token.
    pub token: AccessToken,
    /// Which category to resolve.
    pub selection: SelectionType,
    /// Target grid dimensions.
    pub grid: GridSize,
    /// Drop items without a usable image.
    pub exclude_null_images: bool,
}

/// User-facing advisory raised during resolution.
///
/// The resolver only reports the condition; how it is shown is the
/// presentation layer's call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    /// Fewer items survived filtering than the grid has cells.
    InsufficientContent {
        /// Items actually available.
        available: usize,
        /// Selection the shortfall applies to.
        selection: SelectionType,
    },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientContent {
                available,
                selection,
            } => write!(
                f,
                "Only {available} {selection} available due to missing images. \
                 Please reduce the grid size."
            ),
        }
    }
}

/// Outcome of one resolution cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentResolution {
    /// The display set, at most one item per grid cell.
    pub items: Vec<ContentInstance>,
    /// Advisory raised during sizing, if any.
    pub advisory: Option<Advisory>,
}

impl ContentResolution {
    /// Empty resolution, used when a fetch fails.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Resolves the display set for a selection: cache, fetch, filter, size.
pub struct ContentResolver {
    port: Arc<dyn ContentPort>,
    cache: ContentCache,
}

impl ContentResolver {
    /// Creates a new resolver with an empty cache.
    #[must_use]
    pub fn new(port: Arc<dyn ContentPort>) -> Self {
        Self {
            port,
            cache: ContentCache::new(),
        }
    }

    /// Runs one resolution cycle.
    ///
    /// Fetch failures are logged and absorbed; the returned resolution
    /// is simply empty for that cycle. Steps run strictly in sequence:
    /// cache lookup, fetch, filter, size.
    pub async fn resolve(&self, request: &ResolveRequest) -> ContentResolution {
        let selection = request.selection;

        let mut working = match self.cache.complete(selection).await {
            Some(cached) => {
                debug!(selection = %selection, "Using cached content data");
                cached
            }
            None => Vec::new(),
        };

        if working.is_empty() {
            match self
                .port
                .fetch_top(&request.token, selection, MAX_TOP_ITEMS)
                .await
            {
                Ok(items) => {
                    info!(
                        selection = %selection,
                        count = items.len(),
                        "Successfully fetched top content"
                    );
                    self.cache.store(selection, items.clone()).await;
                    working = items;
                }
                Err(e) => {
                    warn!(selection = %selection, error = %e, "Failed to fetch top content");
                    return ContentResolution::empty();
                }
            }
        }

        if request.exclude_null_images {
            debug!("Excluding items without usable images");
            working.retain(|item| {
                let keep = item.usable_image_url(selection).is_some();
                if !keep {
                    debug!(name = %item.name, "Filtered out item due to missing image");
                }
                keep
            });
        }

        let cells = request.grid.cell_count();
        let advisory = (working.len() < cells).then(|| {
            let advisory = Advisory::InsufficientContent {
                available: working.len(),
                selection,
            };
            warn!(%advisory, "Not enough content for the requested grid");
            advisory
        });

        working.truncate(cells);

        ContentResolution {
            items: working,
            advisory,
        }
    }
}
