// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Cast allowances — graphics math casts are intentional
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
// Float comparison: tests and defaults compare exact constants
#![allow(clippy::float_cmp)]
#![allow(clippy::default_trait_access)]
#![allow(clippy::missing_const_for_fn)]

//! Ambient procedural background engine built on wgpu.
//!
//! Driftfield renders a continuously animated backdrop: a drifting
//! 3000-point particle field with a sine-wave swell, plus five slowly
//! tumbling wireframe icosahedra. The scene reacts to elapsed time and to
//! an externally supplied scroll offset (ambient parallax).
//!
//! # Key entry points
//!
//! - [`AmbientRenderEngine`] - the rendering engine (one per mounted
//!   surface)
//! - [`Viewer`] - a standalone winit window hosting the engine
//!   (`viewer` feature)
//! - [`Options`] - runtime configuration (scene, motion, camera, colors,
//!   display), with TOML preset support
//!
//! # Architecture
//!
//! The scene is plain CPU data ([`scene::Scene`]); [`frame::advance`] is a
//! pure per-tick state transition, and the renderers re-upload only what
//! changed before the single render pass. The host schedules one tick per
//! display refresh and feeds resize/scroll signals in as plain state
//! overwrites; teardown releases every GPU resource exactly once.

pub mod camera;
pub mod engine;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod gpu;
pub mod options;
pub mod renderer;
pub mod scene;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::{AmbientRenderEngine, AmbientState, LoopState};
pub use error::DriftfieldError;
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
