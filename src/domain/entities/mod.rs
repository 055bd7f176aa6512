mod content;
mod grid;
mod token;

pub use content::{Album, ContentInstance, ImageRef, SelectionType, MAX_TOP_ITEMS};
pub use grid::{GridSize, GridStyle};
pub use token::AccessToken;
