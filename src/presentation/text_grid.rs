//! Plain-text grid renderer.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{GridRenderPort, GridRenderRequest};

/// Renders the grid as rows of names on a writer.
///
/// The default rendering collaborator so the binary produces output on
/// its own; richer renderers plug in behind the same port.
pub struct TextGridRenderer<W: Write + Send> {
    out: Mutex<W>,
}

impl TextGridRenderer<io::Stdout> {
    /// Creates a renderer writing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write + Send> TextGridRenderer<W> {
    /// Creates a renderer writing to the given writer.
    #[must_use]
    pub fn with_writer(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Consumes the renderer and returns the writer.
    ///
    /// # Panics
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out.into_inner().expect("writer lock poisoned")
    }
}

impl<W: Write + Send> GridRenderPort for TextGridRenderer<W> {
    fn render(&self, request: &GridRenderRequest) -> io::Result<()> {
        let mut out = self.out.lock().map_err(|_| io::Error::other("writer lock poisoned"))?;

        if request.style.use_gradient {
            writeln!(
                out,
                "gradient: {} -> {}",
                request.style.color1, request.style.color2
            )?;
        }

        if request.include_profile_picture {
            if let Some(url) = &request.profile_picture_url {
                writeln!(out, "profile: {url}")?;
            }
        }

        for row in request.content.chunks(request.grid.x as usize) {
            let names: Vec<&str> = row.iter().map(|item| item.name.as_str()).collect();
            writeln!(out, "{}", names.join(" | "))?;
        }

        out.flush()
    }
}
