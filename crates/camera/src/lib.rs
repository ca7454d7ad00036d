//! Free-look camera for the lampcube demo.
//!
//! Turns keyboard-hold, absolute cursor and scroll input into a view and
//! projection transform. The renderer consumes the matrices once per frame and
//! is told about window resizes through [`ViewportSink`].
//!
//! # Invariants
//! - `forward`, `right` and `up` are derived from yaw/pitch and always orthonormal.
//! - Pitch stays within [-89°, 89°]; field of view stays within [1°, 90°].
//! - The first cursor sample after (re)initialisation never rotates the camera.

mod camera;
mod viewport;

pub use camera::{CameraMovement, FreeCamera, Projection};
pub use viewport::{ViewportRect, ViewportSink};
