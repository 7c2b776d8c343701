//! GPU plumbing: device, queue, and surface ownership.

pub mod render_context;

pub use render_context::{RenderContext, RenderContextError};
