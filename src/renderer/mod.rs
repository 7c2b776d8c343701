//! GPU renderers for the two scene layers.
//!
//! [`points::PointsRenderer`] draws the additive particle field;
//! [`wireframe::WireframeRenderer`] draws the instanced line solids. Both
//! own their GPU-resident buffers and refresh them from the CPU scene each
//! frame.

pub mod points;
pub mod wireframe;

pub use points::PointsRenderer;
pub use wireframe::WireframeRenderer;
