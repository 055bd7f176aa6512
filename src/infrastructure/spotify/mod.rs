//! Spotify backend API adapter.

mod client;
mod dto;

pub use client::{SpotifyWebClient, DEFAULT_API_URL};
