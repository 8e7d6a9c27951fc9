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
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests use unwrap and exact float comparisons freely
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::float_cmp))]

//! Spherical orbit camera and model-view-projection pipeline.
//!
//! The crate owns the one piece of a small rendering program that has real
//! numerical invariants: an eye orbiting the origin in spherical
//! coordinates, the view matrix derived from it, and the per-object
//! transforms a renderer uploads (`ModelView`, `MVP`, and the normal
//! matrix). It does not render.
//!
//! # Key entry points
//!
//! - [`camera::OrbitCamera`] - spherical camera with discrete steps
//! - [`scene::Scene`] - owner of camera, projection, model, and light, with
//!   cached [`transform::FrameTransforms`]
//! - [`input::InputProcessor`] - turns key presses and drags into
//!   [`command::SceneCommand`]s
//! - [`options::Options`] - TOML configuration for all of the above
//!
//! # Data flow
//!
//! Input events are translated into commands, commands mutate the camera,
//! and every accepted mutation recomposes the transforms synchronously:
//! input → [`command`] → [`camera`] → [`transform`] → GPU upload.

pub mod camera;
pub mod command;
pub mod error;
pub mod input;
pub mod light;
pub mod options;
pub mod scene;
pub mod transform;

pub use camera::OrbitCamera;
pub use command::{CameraCommand, SceneCommand};
pub use error::OrbitError;
pub use scene::Scene;
