//! Authoritative scene state: the particle field and the wireframe
//! instances.
//!
//! The scene is plain CPU data. It is written exclusively by the frame
//! updater and read by the renderers within the same tick; GPU-resident
//! buffers live in [`crate::renderer`] and are refreshed from here when the
//! dirty flag is set.

use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::Rng;

use crate::geometry;
use crate::options::SceneOptions;

// ---------------------------------------------------------------------------
// Point cloud
// ---------------------------------------------------------------------------

/// The scattered particle field.
///
/// Positions are a flat `3 * count` buffer allocated once. X and Z are
/// immutable after creation; the frame updater rewrites Y each tick and
/// marks the buffer dirty so the renderer re-uploads it.
pub struct PointCloud {
    positions: Vec<f32>,
    /// Whole-cloud rotation, set absolutely each tick (x = pitch, y = yaw).
    pub rotation: Vec3,
    dirty: bool,
}

impl PointCloud {
    /// Scatter `count` points uniformly within `[-spread, spread)` per axis.
    pub fn scatter<R: Rng + ?Sized>(
        count: usize,
        spread: f32,
        rng: &mut R,
    ) -> Self {
        Self {
            positions: geometry::scatter_points(count, spread, rng),
            rotation: Vec3::ZERO,
            dirty: true,
        }
    }

    /// Build a cloud from explicit positions (deterministic construction).
    #[must_use]
    pub fn from_positions(points: &[Vec3]) -> Self {
        let mut positions = Vec::with_capacity(points.len() * 3);
        for p in points {
            positions.extend_from_slice(&p.to_array());
        }
        Self {
            positions,
            rotation: Vec3::ZERO,
            dirty: true,
        }
    }

    /// Number of points.
    #[must_use]
    pub fn count(&self) -> usize {
        self.positions.len() / 3
    }

    /// The flat position buffer (`3 * count` floats).
    #[must_use]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// X coordinate of point `i` (immutable for the cloud's lifetime).
    #[must_use]
    pub fn x(&self, i: usize) -> f32 {
        self.positions[i * 3]
    }

    /// Y coordinate of point `i`.
    #[must_use]
    pub fn y(&self, i: usize) -> f32 {
        self.positions[i * 3 + 1]
    }

    /// Overwrite the Y coordinate of point `i`. X and Z are never touched.
    pub fn set_y(&mut self, i: usize, y: f32) {
        self.positions[i * 3 + 1] = y;
    }

    /// Request a GPU re-upload of the position buffer.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Consume the dirty flag; the caller is expected to re-upload.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Model matrix from the current whole-cloud rotation.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }
}

// ---------------------------------------------------------------------------
// Wireframe instances
// ---------------------------------------------------------------------------

/// One positioned, scaled, rotating copy of the shared wireframe geometry.
#[derive(Debug, Clone, Copy)]
pub struct WireframeInstance {
    /// World-space center.
    pub position: Vec3,
    /// Uniform scale.
    pub scale: f32,
    /// Accumulated rotation (radians; periodic, never wrapped).
    pub rotation: Vec3,
    /// Per-tick angular speed added to rotation X and Y.
    pub speed: f32,
}

impl WireframeInstance {
    /// Model matrix combining translation, rotation, and uniform scale.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            ),
            self.position,
        )
    }
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// The full animated scene: one particle field plus the wireframe instances.
pub struct Scene {
    /// The particle field.
    pub points: PointCloud,
    /// Wireframe instances sharing one geometry and one material.
    pub wireframes: Vec<WireframeInstance>,
}

/// Sample from an inclusive-exclusive range, tolerating degenerate bounds.
fn sample_range<R: Rng + ?Sized>(rng: &mut R, range: [f32; 2]) -> f32 {
    if range[0] < range[1] {
        rng.random_range(range[0]..range[1])
    } else {
        range[0]
    }
}

impl Scene {
    /// Populate a scene from options: scatter the point cloud and place
    /// `wireframe_count` instances with randomized position, scale, and
    /// angular speed. Instance rotations start at zero.
    pub fn generate<R: Rng + ?Sized>(
        options: &SceneOptions,
        rng: &mut R,
    ) -> Self {
        let points = PointCloud::scatter(
            options.point_count as usize,
            options.spread,
            rng,
        );

        let wireframes = (0..options.wireframe_count)
            .map(|_| WireframeInstance {
                position: Vec3::new(
                    sample_range(rng, [-options.volume, options.volume]),
                    sample_range(rng, [-options.volume, options.volume]),
                    sample_range(rng, [-options.volume, options.volume]),
                ),
                scale: sample_range(rng, options.scale_range),
                rotation: Vec3::ZERO,
                speed: sample_range(rng, options.speed_range),
            })
            .collect();

        Self { points, wireframes }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn generate_matches_options() {
        let options = SceneOptions::default();
        let mut rng = StdRng::seed_from_u64(1);
        let scene = Scene::generate(&options, &mut rng);

        assert_eq!(scene.points.count(), options.point_count as usize);
        assert_eq!(
            scene.points.positions().len(),
            3 * options.point_count as usize
        );
        assert_eq!(scene.wireframes.len(), options.wireframe_count as usize);
    }

    #[test]
    fn generated_instances_respect_ranges() {
        let options = SceneOptions::default();
        let mut rng = StdRng::seed_from_u64(2);
        let scene = Scene::generate(&options, &mut rng);

        for w in &scene.wireframes {
            assert!(w.position.abs().max_element() <= options.volume);
            assert!(
                (options.scale_range[0]..options.scale_range[1])
                    .contains(&w.scale)
            );
            assert!(
                (options.speed_range[0]..options.speed_range[1])
                    .contains(&w.speed)
            );
            assert_eq!(w.rotation, Vec3::ZERO);
        }
    }

    #[test]
    fn from_positions_is_deterministic() {
        let cloud = PointCloud::from_positions(&[
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(0.5, 0.0, 0.0),
        ]);
        assert_eq!(cloud.count(), 4);
        assert_eq!(cloud.x(3), 0.5);
        assert_eq!(cloud.y(3), 0.0);
    }

    #[test]
    fn set_y_leaves_x_and_z_untouched() {
        let mut cloud =
            PointCloud::from_positions(&[Vec3::new(1.0, 2.0, 3.0)]);
        cloud.set_y(0, 9.0);
        assert_eq!(cloud.positions(), &[1.0, 9.0, 3.0]);
    }

    #[test]
    fn dirty_flag_is_consumed_once() {
        let mut cloud = PointCloud::from_positions(&[Vec3::ZERO]);
        assert!(cloud.take_dirty());
        assert!(!cloud.take_dirty());
        cloud.mark_dirty();
        assert!(cloud.take_dirty());
    }

    #[test]
    fn degenerate_ranges_collapse_to_lower_bound() {
        let options = SceneOptions {
            scale_range: [1.0, 1.0],
            speed_range: [0.5, 0.5],
            ..SceneOptions::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        let scene = Scene::generate(&options, &mut rng);
        for w in &scene.wireframes {
            assert_eq!(w.scale, 1.0);
            assert_eq!(w.speed, 0.5);
        }
    }
}
