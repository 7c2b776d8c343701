use web_time::{Duration, Instant};

/// Frame pacing with an optional FPS cap and a smoothed FPS readout.
pub struct FrameTiming {
    /// Target FPS (0 = unlimited).
    target_fps: u32,
    /// Minimum frame duration derived from the target.
    min_frame_duration: Duration,
    /// Timestamp of the last presented frame.
    last_frame: Instant,
    /// Exponential moving average of instantaneous FPS.
    smoothed_fps: f32,
    /// EMA weight for the newest sample.
    smoothing: f32,
}

impl FrameTiming {
    /// Create a frame timer with the given FPS cap (0 = unlimited).
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Whether enough time has passed since the last frame to render again.
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Record the end of a presented frame and fold the sample into the
    /// smoothed FPS.
    pub fn end_frame(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Smoothed frames per second.
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_mode_always_renders() {
        let timing = FrameTiming::new(0);
        assert!(timing.should_render());
    }

    #[test]
    fn capped_mode_blocks_immediately_after_a_frame() {
        let mut timing = FrameTiming::new(1);
        timing.end_frame();
        // 1 FPS cap: a full second has certainly not elapsed yet.
        assert!(!timing.should_render());
    }

    #[test]
    fn fps_stays_finite_across_frames() {
        let mut timing = FrameTiming::new(0);
        for _ in 0..10 {
            timing.end_frame();
        }
        assert!(timing.fps().is_finite());
        assert!(timing.fps() > 0.0);
    }
}
