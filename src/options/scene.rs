use serde::{Deserialize, Serialize};

/// Scene population options: how many points and wireframes to build, and
/// the volumes they are scattered in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneOptions {
    /// Number of points in the particle field.
    pub point_count: u32,
    /// Half-side of the cube the points are scattered in.
    pub spread: f32,
    /// Number of wireframe instances.
    pub wireframe_count: u32,
    /// Half-side of the cube wireframe centers are placed in.
    pub volume: f32,
    /// Min/max uniform scale for wireframe instances.
    pub scale_range: [f32; 2],
    /// Min/max per-tick angular speed for wireframe instances (radians).
    pub speed_range: [f32; 2],
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            point_count: 3000,
            spread: 10.0,
            wireframe_count: 5,
            volume: 8.0,
            scale_range: [0.6, 1.6],
            speed_range: [0.002, 0.008],
        }
    }
}
