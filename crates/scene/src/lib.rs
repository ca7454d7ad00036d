//! Scene parameters: what the renderer draws and the knobs the user turns.
//!
//! One lit cube and one lamp cube orbiting in front of it. All tweakable values
//! live in [`SceneParams`], owned by the application and changed only through
//! [`SceneParams::apply`].
//!
//! # Invariants
//! - Ambient, diffuse and specular strengths stay within [0, 1].
//! - The lamp orbit radius never goes negative.

pub mod config;
pub mod params;

pub use config::{CameraConfig, ConfigError, SceneConfig};
pub use params::{
    Attenuation, Axis, LampOrbit, ObjectTransform, PhongCoefficients, SceneAdjustment,
    SceneParams,
};
