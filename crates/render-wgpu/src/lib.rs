//! wgpu render backend for the lampcube demo.
//!
//! Draws the Phong-lit cube and the lamp marker once per frame from the camera
//! matrices and the scene parameters.
//!
//! # Invariants
//! - The renderer never mutates camera or scene state.
//! - The depth attachment always matches the last viewport reported by the camera.

mod gpu;
mod shaders;
mod uniforms;

pub use gpu::WgpuRenderer;
pub use uniforms::SceneUniforms;
