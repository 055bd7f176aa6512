//! Domain layer with core business entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{
    AccessToken, Album, ContentInstance, GridSize, GridStyle, ImageRef, SelectionType,
    MAX_TOP_ITEMS,
};
pub use errors::FetchError;
pub use ports::{ContentPort, GridRenderPort, GridRenderRequest};
