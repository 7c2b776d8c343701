//! The render engine: scene ownership, the per-tick update/draw cycle, and
//! the loop lifecycle state machine.

mod ambient;
mod frame_timing;
mod state;

pub use ambient::AmbientState;
pub use frame_timing::FrameTiming;
pub use state::LoopState;
use web_time::Instant;

use crate::camera::CameraRig;
use crate::error::DriftfieldError;
use crate::frame;
use crate::geometry;
use crate::gpu::render_context::RenderContext;
use crate::options::Options;
use crate::renderer::{PointsRenderer, WireframeRenderer};
use crate::scene::Scene;

/// Frame-rate cap
const TARGET_FPS: u32 = 300;

/// The core rendering engine for the ambient background scene.
///
/// Owns every GPU-resident resource for one mounted instance: the surface
/// context, the camera uniform, the point-cloud buffers, and the shared
/// wireframe geometry/material. All of it is allocated in
/// [`new`](Self::new) and released together when the engine is dropped —
/// construction and disposal are strictly paired.
///
/// # Frame loop
///
/// The host drives one tick per redraw: [`update`](Self::update) advances
/// the scene from elapsed time and the ambient scroll state, then
/// [`render`](Self::render) uploads whatever changed and draws. Ticks only
/// execute while the loop is `Running` ([`start`](Self::start) /
/// [`stop`](Self::stop)); a stopped engine refuses further ticks even if a
/// redraw was already queued.
///
/// # Signals
///
/// Call [`resize`](Self::resize) when the viewport changes. Scroll arrives
/// through the [`AmbientState`] passed to `update`, owned by the host.
pub struct AmbientRenderEngine {
    /// Core wgpu device, queue, and surface.
    pub context: RenderContext,
    /// Fixed camera and its GPU uniform.
    pub camera: CameraRig,
    /// CPU-authoritative scene state.
    scene: Scene,
    points_renderer: PointsRenderer,
    wireframe_renderer: WireframeRenderer,
    /// Runtime scene, motion, camera, color, and display options.
    options: Options,
    /// Loop lifecycle; ticks execute only while `Running`.
    state: LoopState,
    /// Per-frame pacing and FPS tracking.
    frame_timing: FrameTiming,
    /// Monotonic origin for elapsed time; never reset.
    started: Instant,
}

impl AmbientRenderEngine {
    /// Engine with default options.
    ///
    /// # Errors
    ///
    /// Returns [`DriftfieldError`] if GPU initialization fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
    ) -> Result<Self, DriftfieldError> {
        Self::with_options(window, size, Options::default()).await
    }

    /// Engine with explicit options.
    ///
    /// # Errors
    ///
    /// Returns [`DriftfieldError`] if GPU initialization fails.
    pub async fn with_options(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: Options,
    ) -> Result<Self, DriftfieldError> {
        let context = RenderContext::new(window, size).await?;
        let camera = CameraRig::new(&context, &options.camera);

        let mut rng = rand::rng();
        let scene = Scene::generate(&options.scene, &mut rng);
        let wire_geometry = geometry::icosahedron_wireframe();

        log::debug!(
            "scene: {} points, {} wireframe instances",
            scene.points.count(),
            scene.wireframes.len()
        );

        let points_renderer = PointsRenderer::new(
            &context,
            &camera.layout,
            &scene.points,
            &options.colors,
            &options.display,
        );
        let wireframe_renderer = WireframeRenderer::new(
            &context,
            &camera.layout,
            &wire_geometry,
            &scene.wireframes,
            &options.colors,
        );

        Ok(Self {
            context,
            camera,
            scene,
            points_renderer,
            wireframe_renderer,
            options,
            state: LoopState::Idle,
            frame_timing: FrameTiming::new(TARGET_FPS),
            started: Instant::now(),
        })
    }

    /// Transition the loop from `Idle` to `Running`.
    pub fn start(&mut self) {
        if self.state.start() {
            log::debug!("render loop running");
        }
    }

    /// Stop the loop permanently. Pending redraws become no-ops.
    pub fn stop(&mut self) {
        self.state.stop();
    }

    /// Current loop state.
    #[must_use]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Runtime options this engine was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.frame_timing.fps()
    }

    /// Seconds since engine construction (monotonic).
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }

    /// One tick of the frame updater: advance the scene from elapsed time
    /// and the host's ambient state. No-op unless the loop is running.
    pub fn update(&mut self, ambient: &AmbientState) {
        if !self.state.is_running() {
            return;
        }
        let t = self.elapsed();
        frame::advance(
            &mut self.scene,
            &self.options.motion,
            t,
            ambient.scroll(),
        );
    }

    /// Upload changed buffers and draw one frame. No-op unless the loop is
    /// running; paced by the FPS cap.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the swapchain frame cannot be
    /// acquired; the host recovers from `Outdated`/`Lost` with a resize.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        if !self.state.is_running() || !self.frame_timing.should_render() {
            return Ok(());
        }

        self.camera.update_gpu(&self.context.queue);
        self.points_renderer
            .prepare(&self.context.queue, &mut self.scene.points);
        self.wireframe_renderer
            .prepare(&self.context.queue, &self.scene.wireframes);

        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.context.create_encoder();
        {
            let bg = self.options.colors.background;
            let mut rp =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("ambient pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(wgpu::Color {
                                    r: bg[0],
                                    g: bg[1],
                                    b: bg[2],
                                    a: bg[3],
                                }),
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        },
                    )],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

            // Wireframes first so the additive sprites layer over the lines.
            self.wireframe_renderer.draw(&mut rp, &self.camera.bind_group);
            self.points_renderer.draw(&mut rp, &self.camera.bind_group);
        }
        self.context.submit(encoder);
        frame.present();

        self.frame_timing.end_frame();
        Ok(())
    }

    /// Resize the surface and the camera projection to match the new
    /// viewport. Zero-sized dimensions are ignored; repeated identical
    /// dimensions are idempotent.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.context.resize(width, height);
            self.camera.resize(width, height);
        }
    }
}
