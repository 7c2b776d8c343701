use serde::{Deserialize, Serialize};

/// Camera projection and placement parameters. The eye position is applied
/// once at engine construction; only the aspect ratio changes afterward.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraOptions {
    /// Eye position in world space.
    pub eye: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            eye: [0.0, 0.0, 14.0],
            fovy: 60.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}
