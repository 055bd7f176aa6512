//! Grid render port for the display collaborator.

use crate::domain::entities::{ContentInstance, GridSize, GridStyle};

/// Everything the rendering collaborator needs to draw one grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRenderRequest {
    /// The display set, already filtered and truncated to the grid.
    pub content: Vec<ContentInstance>,
    /// Target grid dimensions.
    pub grid: GridSize,
    /// Whether the profile picture should be shown.
    pub include_profile_picture: bool,
    /// Resolved profile picture URL, if any.
    pub profile_picture_url: Option<String>,
    /// Styling options, passed through opaquely.
    pub style: GridStyle,
}

/// Port for the grid-rendering collaborator.
///
/// The core hands over the resolved display set and makes no further
/// assumptions about how it is drawn.
#[cfg_attr(test, mockall::automock)]
pub trait GridRenderPort: Send + Sync {
    /// Renders one grid.
    fn render(&self, request: &GridRenderRequest) -> std::io::Result<()>;
}
