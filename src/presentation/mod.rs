//! Presentation layer: view assembly and the built-in text renderer.

mod text_grid;
mod view;

pub use text_grid::TextGridRenderer;
pub use view::{TopContentView, ViewOptions};
