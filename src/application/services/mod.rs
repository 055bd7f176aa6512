mod content_cache;
mod content_resolver;
mod profile_resolver;

pub use content_cache::ContentCache;
pub use content_resolver::{Advisory, ContentResolution, ContentResolver, ResolveRequest};
pub use profile_resolver::ProfilePictureResolver;
