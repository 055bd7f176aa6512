//! Top content view assembly.

use std::io::{self, Write};
use std::sync::Arc;

use tracing::warn;

use crate::application::services::ContentResolution;
use crate::domain::entities::{GridSize, GridStyle, SelectionType};
use crate::domain::ports::{GridRenderPort, GridRenderRequest};

/// Static display parameters for one presentation pass.
#[derive(Debug, Clone)]
pub struct ViewOptions {
    /// Which category is being displayed.
    pub selection: SelectionType,
    /// Target grid dimensions.
    pub grid: GridSize,
    /// Styling passed through to the renderer.
    pub style: GridStyle,
    /// Whether the profile picture should be shown.
    pub include_profile_picture: bool,
}

/// Assembles the heading and hands the display set to the renderer.
///
/// Pure derivation: apart from the non-emptiness guard there is no
/// business logic here. Advisories raised by the resolver are shown
/// here, since the modality is a presentation concern.
pub struct TopContentView<W: Write> {
    renderer: Arc<dyn GridRenderPort>,
    out: W,
}

impl TopContentView<io::Stdout> {
    /// Creates a view writing to stdout.
    #[must_use]
    pub fn new(renderer: Arc<dyn GridRenderPort>) -> Self {
        Self::with_writer(renderer, io::stdout())
    }
}

impl<W: Write> TopContentView<W> {
    /// Creates a view writing to the given writer.
    #[must_use]
    pub fn with_writer(renderer: Arc<dyn GridRenderPort>, out: W) -> Self {
        Self { renderer, out }
    }

    /// Presents one resolution cycle.
    ///
    /// # Errors
    /// Returns error if writing the heading or rendering fails.
    pub fn present(
        &mut self,
        options: &ViewOptions,
        resolution: &ContentResolution,
        profile_picture_url: Option<String>,
    ) -> io::Result<()> {
        writeln!(self.out, "Your Top {}", options.selection.heading())?;

        if let Some(advisory) = &resolution.advisory {
            warn!(%advisory, "Showing content advisory");
            writeln!(self.out, "warning: {advisory}")?;
        }

        if resolution.items.is_empty() {
            return Ok(());
        }

        self.renderer.render(&GridRenderRequest {
            content: resolution.items.clone(),
            grid: options.grid,
            include_profile_picture: options.include_profile_picture,
            profile_picture_url,
            style: options.style.clone(),
        })
    }
}
