use crate::params::SceneParams;
use glam::Vec3;
use lampcube_camera::Projection;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors from reading the startup configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Initial camera framing and window size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Vec3,
    pub projection: Projection,
    pub width: u32,
    pub height: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            projection: Projection::Perspective,
            width: 800,
            height: 600,
        }
    }
}

/// Startup configuration. Every field is optional in the YAML file.
///
/// ```yaml
/// camera:
///   position: [0.0, 1.0, 4.0]
///   projection: orthographic
/// scene:
///   phong:
///     shininess: 32.0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    pub scene: SceneParams,
}

impl SceneConfig {
    /// Read and parse a YAML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&text)?;
        tracing::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut config: Self = serde_yaml::from_str(text)?;
        let scene = config.scene.clone().sanitized();
        if scene != config.scene {
            tracing::warn!("scene values out of range in config, clamped");
            config.scene = scene;
        }
        Ok(config)
    }
}
