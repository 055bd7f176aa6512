mod content_port;
mod render_port;

pub use content_port::ContentPort;
pub use render_port::{GridRenderPort, GridRenderRequest};
