//! Fixed perspective camera and its GPU uniform.
//!
//! The camera never moves after construction; the only externally driven
//! field is the aspect ratio, updated on viewport resize.

mod core;
mod rig;

pub use core::{Camera, CameraUniform};
pub use rig::CameraRig;
