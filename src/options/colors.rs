use serde::{Deserialize, Serialize};

/// Color palette options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// RGB tint for the particle field.
    pub points: [f32; 3],
    /// Particle opacity (additive blend weight).
    pub points_opacity: f32,
    /// RGB tint for the wireframe solids.
    pub wireframes: [f32; 3],
    /// Wireframe line opacity.
    pub wireframes_opacity: f32,
    /// RGBA clear color behind the scene.
    pub background: [f64; 4],
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            points: [0.0, 0.85, 1.0],
            points_opacity: 0.8,
            wireframes: [0.55, 0.36, 0.96],
            wireframes_opacity: 0.35,
            background: [0.01, 0.01, 0.03, 1.0],
        }
    }
}
