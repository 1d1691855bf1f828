//! Render configuration, loadable from RON files
//!
//! Every field has a default, so a config file only needs to mention what
//! it overrides:
//!
//! ```ron
//! (width: 80, height: 40, projection: (fov_deg: 45.0))
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rasterizer::{Projection, DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Grid size and camera parameters for one render session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    pub projection: Projection,
    /// Draw triangle edges instead of filling
    pub wireframe: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            projection: Projection::default(),
            wireframe: false,
        }
    }
}

impl RenderConfig {
    /// Load a config from a RON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_ron(&contents)
    }

    /// Parse a config from a RON string.
    pub fn from_ron(s: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_frame() {
        let config = RenderConfig::default();
        assert_eq!(config.width, 45);
        assert_eq!(config.height, 25);
        assert_eq!(config.projection.fov_deg, 35.0);
        assert!(!config.wireframe);
    }

    #[test]
    fn partial_ron_overrides_only_named_fields() {
        let config = RenderConfig::from_ron("(width: 80, wireframe: true)").unwrap();
        assert_eq!(config.width, 80);
        assert_eq!(config.height, 25);
        assert!(config.wireframe);
        assert_eq!(config.projection.near, 0.01);
    }

    #[test]
    fn nested_projection_override() {
        let config = RenderConfig::from_ron("(projection: (fov_deg: 60.0))").unwrap();
        assert_eq!(config.projection.fov_deg, 60.0);
        assert_eq!(config.projection.far, 100.0);
    }

    #[test]
    fn garbage_is_a_parse_error() {
        assert!(matches!(
            RenderConfig::from_ron("not ron at all {"),
            Err(ConfigError::Parse(_))
        ));
    }
}
