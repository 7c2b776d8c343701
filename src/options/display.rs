use serde::{Deserialize, Serialize};

/// Display scaling options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayOptions {
    /// Billboard size of each particle in world units.
    pub point_size: f32,
    /// Ceiling applied to the host's device pixel ratio when sizing the
    /// surface. A performance ceiling, not a contract.
    pub max_pixel_ratio: f64,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            point_size: 0.06,
            max_pixel_ratio: 2.0,
        }
    }
}
