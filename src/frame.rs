//! Per-tick scene update: pure state transition, no rendering side effects.
//!
//! [`advance`] is a function of (elapsed time, scroll offset, previous
//! scene state) only. It never schedules ticks or touches the GPU; the
//! engine uploads whatever changed afterward.

use crate::options::MotionOptions;
use crate::scene::Scene;

/// Advance the scene by one tick.
///
/// * Point-cloud rotation is set absolutely from `t` and `scroll`
///   (ambient drift plus scroll parallax).
/// * The wave distortion rewrites every point's Y from its immutable X and
///   `t` — idempotent for a given `(t, x)`, never a function of prior Y.
///   The position buffer is marked dirty afterward.
/// * Each wireframe instance accumulates its angular speed on rotation X
///   and Y.
pub fn advance(scene: &mut Scene, motion: &MotionOptions, t: f32, scroll: f32) {
    let points = &mut scene.points;
    points.rotation.y = motion.drift_rate * t + motion.scroll_yaw * scroll;
    points.rotation.x = motion.scroll_pitch * scroll;

    let count = points.count();
    for i in 0..count {
        let x = points.x(i);
        points.set_y(i, (t + x).sin() * motion.wave_amplitude);
    }
    if count > 0 {
        points.mark_dirty();
    }

    for w in &mut scene.wireframes {
        w.rotation.x += w.speed;
        w.rotation.y += w.speed;
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, TAU};

    use glam::Vec3;

    use super::*;
    use crate::scene::{PointCloud, WireframeInstance};

    fn seeded_scene() -> Scene {
        Scene {
            points: PointCloud::from_positions(&[
                Vec3::ZERO,
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(-1.0, 0.0, 0.0),
                Vec3::new(0.5, 0.0, 0.0),
            ]),
            wireframes: vec![WireframeInstance {
                position: Vec3::ZERO,
                scale: 1.0,
                rotation: Vec3::ZERO,
                speed: 0.004,
            }],
        }
    }

    #[test]
    fn wave_at_t_zero_follows_sin_of_x() {
        let mut scene = seeded_scene();
        advance(&mut scene, &MotionOptions::default(), 0.0, 0.0);

        let expected = [0.0, 1.0_f32.sin() * 2.0, (-1.0_f32).sin() * 2.0, 0.5_f32.sin() * 2.0];
        for (i, want) in expected.iter().enumerate() {
            assert!(
                (scene.points.y(i) - want).abs() < 1e-6,
                "point {i}: got {}, want {want}",
                scene.points.y(i)
            );
        }
    }

    #[test]
    fn wave_peaks_at_quarter_period() {
        let mut scene = seeded_scene();
        advance(&mut scene, &MotionOptions::default(), FRAC_PI_2, 0.0);
        // sin(pi/2 + 0) * 2 = 2 for the point at x = 0
        assert!((scene.points.y(0) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn wave_is_idempotent_for_fixed_time() {
        let mut scene = seeded_scene();
        let motion = MotionOptions::default();
        advance(&mut scene, &motion, 1.25, 40.0);
        let first: Vec<f32> =
            (0..scene.points.count()).map(|i| scene.points.y(i)).collect();

        advance(&mut scene, &motion, 1.25, 40.0);
        let second: Vec<f32> =
            (0..scene.points.count()).map(|i| scene.points.y(i)).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn wave_marks_buffer_dirty() {
        let mut scene = seeded_scene();
        let _ = scene.points.take_dirty();
        advance(&mut scene, &MotionOptions::default(), 0.5, 0.0);
        assert!(scene.points.take_dirty());
    }

    #[test]
    fn empty_cloud_stays_clean() {
        let mut scene = seeded_scene();
        scene.points = PointCloud::from_positions(&[]);
        let _ = scene.points.take_dirty();
        advance(&mut scene, &MotionOptions::default(), 0.5, 0.0);
        assert!(!scene.points.take_dirty());
    }

    #[test]
    fn buffer_length_invariant_survives_many_ticks() {
        let mut scene = seeded_scene();
        let motion = MotionOptions::default();
        for k in 0..500 {
            advance(&mut scene, &motion, k as f32 * 0.016, k as f32);
            assert_eq!(scene.points.positions().len(), 12);
        }
    }

    #[test]
    fn rotation_couples_time_and_scroll() {
        let mut scene = seeded_scene();
        let motion = MotionOptions::default();
        advance(&mut scene, &motion, 10.0, 100.0);

        // yaw = 0.05 t + 0.0002 s, pitch = 0.0001 s
        assert!((scene.points.rotation.y - (0.05 * 10.0 + 0.0002 * 100.0)).abs() < 1e-6);
        assert!((scene.points.rotation.x - 0.0001 * 100.0).abs() < 1e-6);
    }

    #[test]
    fn rotation_is_absolute_not_cumulative() {
        let mut scene = seeded_scene();
        let motion = MotionOptions::default();
        advance(&mut scene, &motion, 10.0, 0.0);
        advance(&mut scene, &motion, 10.0, 0.0);
        assert!((scene.points.rotation.y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn instance_rotation_accumulates_speed_per_tick() {
        let mut scene = seeded_scene();
        let motion = MotionOptions::default();
        let speed = scene.wireframes[0].speed;

        // Tick timing jitter must not matter: vary t wildly.
        let k = 250;
        for i in 0..k {
            let jittered_t = (i as f32).powf(1.3) * 0.01;
            advance(&mut scene, &motion, jittered_t, 0.0);
        }

        let expected = k as f32 * speed;
        assert!((scene.wireframes[0].rotation.x - expected).abs() < 1e-4);
        assert!((scene.wireframes[0].rotation.y - expected).abs() < 1e-4);
        assert_eq!(scene.wireframes[0].rotation.z, 0.0);
        // Periodic interpretation stays well-defined.
        assert!(expected.rem_euclid(TAU) < TAU);
    }

    #[test]
    fn no_wireframes_is_a_noop() {
        let mut scene = seeded_scene();
        scene.wireframes.clear();
        advance(&mut scene, &MotionOptions::default(), 1.0, 0.0);
        assert!(scene.wireframes.is_empty());
    }
}
