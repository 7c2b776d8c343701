use serde::{Deserialize, Serialize};

/// Per-frame motion constants.
///
/// The defaults are tuned values; changing them restyles the scene without
/// affecting correctness.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MotionOptions {
    /// Point-cloud yaw per second of elapsed time.
    pub drift_rate: f32,
    /// Point-cloud yaw per unit of scroll offset.
    pub scroll_yaw: f32,
    /// Point-cloud pitch per unit of scroll offset.
    pub scroll_pitch: f32,
    /// Peak Y displacement of the wave distortion.
    pub wave_amplitude: f32,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            drift_rate: 0.05,
            scroll_yaw: 0.0002,
            scroll_pitch: 0.0001,
            wave_amplitude: 2.0,
        }
    }
}
