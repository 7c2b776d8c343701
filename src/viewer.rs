//! Standalone background window backed by winit.
//!
//! The viewer is the lifecycle layer: it mounts the drawing surface,
//! owns the ambient signal state, forwards resize and scroll to the
//! engine, and tears everything down symmetrically on exit.
//!
//! ```no_run
//! # use driftfield::Viewer;
//! Viewer::builder()
//!     .with_title("driftfield")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    engine::AmbientState, error::DriftfieldError, options::Options,
    AmbientRenderEngine,
};

/// Wheel line-delta to scroll-offset conversion (pixels per line).
const LINE_HEIGHT: f32 = 40.0;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "driftfield",
    /// default options).
    fn new() -> Self {
        Self {
            options: None,
            title: "driftfield".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options,
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that runs the ambient background scene.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Option<Options>,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`DriftfieldError`] if the event loop cannot be created or
    /// fails while running.
    pub fn run(self) -> Result<(), DriftfieldError> {
        let event_loop = EventLoop::new()
            .map_err(|e| DriftfieldError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            ambient: AmbientState::default(),
            options: self.options,
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| DriftfieldError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<AmbientRenderEngine>,
    /// Scroll state owned here, read by the engine each tick.
    ambient: AmbientState,
    options: Option<Options>,
    title: String,
}

/// Compute the wgpu surface size for the window, capping the device pixel
/// ratio at `max_pixel_ratio`.
fn surface_size(
    inner: winit::dpi::PhysicalSize<u32>,
    scale_factor: f64,
    max_pixel_ratio: f64,
) -> (u32, u32) {
    let ratio = if scale_factor > max_pixel_ratio && max_pixel_ratio > 0.0 {
        max_pixel_ratio / scale_factor
    } else {
        1.0
    };
    (
        ((f64::from(inner.width) * ratio) as u32).max(1),
        ((f64::from(inner.height) * ratio) as u32).max(1),
    )
}

impl ViewerApp {
    /// Resize the engine surface from current window dimensions.
    fn resize_to_window(&mut self) {
        let Some(window) = self.window.as_ref() else {
            return;
        };
        let max_ratio = self
            .engine
            .as_ref()
            .map_or(2.0, |e| e.options().display.max_pixel_ratio);
        let (w, h) =
            surface_size(window.inner_size(), window.scale_factor(), max_ratio);
        if let Some(engine) = &mut self.engine {
            engine.resize(w, h);
        }
    }

    /// Stop the loop and release the engine and window. Safe to call on a
    /// partial mount — whatever was created is dropped, the rest is skipped.
    fn shutdown(&mut self) {
        if let Some(engine) = &mut self.engine {
            engine.stop();
        }
        drop(self.engine.take());
        drop(self.window.take());
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes().with_title(&self.title);
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                // No mount target: abort the core only, nothing to unwind.
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let options = self.options.take().unwrap_or_default();
        let (vp_w, vp_h) = surface_size(
            window.inner_size(),
            window.scale_factor(),
            options.display.max_pixel_ratio,
        );

        let engine_result = pollster::block_on(
            AmbientRenderEngine::with_options(
                window.clone(),
                (vp_w, vp_h),
                options,
            ),
        );

        let mut engine = match engine_result {
            Ok(e) => e,
            Err(e) => {
                log::error!("failed to initialize engine: {e}");
                event_loop.exit();
                return;
            }
        };

        engine.start();
        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        // Guard: both window and engine must be initialised.
        if self.window.is_none() || self.engine.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(_)
            | WindowEvent::ScaleFactorChanged { .. } => {
                self.resize_to_window();
            }

            WindowEvent::MouseWheel { delta, .. } => {
                // Wheel-down scrolls the page down: negate into a growing
                // offset.
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y * LINE_HEIGHT,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
                };
                self.ambient.scroll_by(-dy);
            }

            WindowEvent::RedrawRequested => {
                if let Some(engine) = &mut self.engine {
                    engine.update(&self.ambient);
                    match engine.render() {
                        Ok(()) => {}
                        Err(
                            wgpu::SurfaceError::Outdated
                            | wgpu::SurfaceError::Lost,
                        ) => {
                            self.resize_to_window();
                        }
                        Err(e) => {
                            log::error!("render error: {e:?}");
                        }
                    }
                }
                // Schedule the next tick at the host's paint cadence.
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            _ => (),
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_size_passes_through_below_the_cap() {
        let inner = winit::dpi::PhysicalSize::new(1280, 720);
        assert_eq!(surface_size(inner, 1.0, 2.0), (1280, 720));
        assert_eq!(surface_size(inner, 2.0, 2.0), (1280, 720));
    }

    #[test]
    fn surface_size_caps_high_density_displays() {
        let inner = winit::dpi::PhysicalSize::new(3000, 2000);
        assert_eq!(surface_size(inner, 3.0, 2.0), (2000, 1333));
    }

    #[test]
    fn surface_size_never_returns_zero() {
        let inner = winit::dpi::PhysicalSize::new(0, 0);
        assert_eq!(surface_size(inner, 1.0, 2.0), (1, 1));
    }

    #[test]
    fn shutdown_without_mount_is_a_noop() {
        // The mount target was never available: nothing was attached, so
        // teardown has nothing to do and must not panic.
        let mut app = ViewerApp {
            window: None,
            engine: None,
            ambient: AmbientState::default(),
            options: None,
            title: "driftfield".into(),
        };
        app.shutdown();
        app.shutdown();
        assert!(app.window.is_none());
        assert!(app.engine.is_none());
    }
}
