//! Top content entities.

use serde::{Deserialize, Serialize};

/// Maximum number of items the backing service will return per fetch.
///
/// Also the cache-completeness threshold: a cached set is reusable only
/// when it holds exactly this many items.
pub const MAX_TOP_ITEMS: usize = 99;

/// Which category of top content is being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SelectionType {
    /// The user's top artists.
    Artists,
    /// The user's top tracks.
    Tracks,
}

impl SelectionType {
    /// Returns the backend endpoint path for this selection.
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Artists => "top-artists",
            Self::Tracks => "top-tracks",
        }
    }

    /// Returns the lowercase noun used in logs and advisories.
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Artists => "artists",
            Self::Tracks => "tracks",
        }
    }

    /// Returns the capitalized form used in headings.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Artists => "Artists",
            Self::Tracks => "Tracks",
        }
    }
}

impl std::fmt::Display for SelectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.noun())
    }
}

/// Reference to a single image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// The image URL.
    pub url: String,
}

impl ImageRef {
    /// Creates a new image reference.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Album attached to a track, carrying the track's artwork.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    /// Artwork images, largest first.
    pub images: Vec<ImageRef>,
}

/// One artist or track record.
///
/// Artists carry their artwork in `images`; tracks carry it on their
/// `album`. Exactly one of the two is populated depending on the
/// selection type the record came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentInstance {
    /// Display name.
    pub name: String,
    /// Artist artwork, largest first. Empty for tracks.
    #[serde(default)]
    pub images: Vec<ImageRef>,
    /// Album carrying track artwork. Absent for artists.
    #[serde(default)]
    pub album: Option<Album>,
    /// External link to the record on the service, if any.
    #[serde(default)]
    pub external_url: Option<String>,
}

impl ContentInstance {
    /// Returns the first usable image URL for the given selection type.
    ///
    /// Artists are checked against `images`, tracks against
    /// `album.images`. The URL must be present and non-blank.
    #[must_use]
    pub fn usable_image_url(&self, selection: SelectionType) -> Option<&str> {
        let images = match selection {
            SelectionType::Artists => &self.images,
            SelectionType::Tracks => self.album.as_ref().map(|album| &album.images)?,
        };

        images
            .first()
            .map(|image| image.url.as_str())
            .filter(|url| !url.trim().is_empty())
    }
}
