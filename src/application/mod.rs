//! Application layer with resolution services.

/// Resolution service implementations.
pub mod services;

pub use services::{
    Advisory, ContentCache, ContentResolution, ContentResolver, ProfilePictureResolver,
    ResolveRequest,
};
