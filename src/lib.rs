//! Topgrid - a grid collage generator for your top Spotify content.
//!
//! This crate fetches a user's top artists or tracks from the backing
//! service with clean architecture, implementing content resolution,
//! image filtering, grid sizing, and presentation assembly.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing resolution services.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing view assembly and the text renderer.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "topgrid";
