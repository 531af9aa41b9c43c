// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Pressrig Team

//! Generator configuration system

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::io::DEFAULT_SEGMENTS;

/// Generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Circle tessellation segment count ($fn)
    pub segments: u32,
    /// Output directory for rendered STL files
    pub output_dir: PathBuf,
    /// Directory holding imported DXF/STL assets
    pub asset_dir: PathBuf,
    /// OpenSCAD executable path
    pub openscad_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
            output_dir: PathBuf::from("output"),
            asset_dir: PathBuf::from("."),
            openscad_path: None, // Auto-detect
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load() -> Result<Self> {
        let mut config = if PathBuf::from("pressrig.toml").exists() {
            Self::from_file("pressrig.toml")?
        } else {
            Self::default()
        };

        if let Ok(segments) = std::env::var("PRESSRIG_SEGMENTS") {
            config.segments = segments
                .parse()
                .context("PRESSRIG_SEGMENTS must be a positive integer")?;
        }

        if let Ok(openscad) = std::env::var("PRESSRIG_OPENSCAD") {
            config.openscad_path = Some(openscad);
        }

        Ok(config)
    }

    /// Build a renderer honoring this configuration
    pub fn renderer(&self) -> crate::io::Renderer {
        let mut renderer =
            crate::io::Renderer::new(self.segments).with_asset_dir(self.asset_dir.clone());
        if let Some(path) = &self.openscad_path {
            renderer = renderer.with_executable(path.clone());
        }
        renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.segments, 48);
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert_eq!(config.asset_dir, PathBuf::from("."));
        assert!(config.openscad_path.is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pressrig.toml");
        std::fs::write(&path, "segments = 96\n").unwrap();
        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.segments, 96);
        assert_eq!(config.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn test_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pressrig.toml");
        std::fs::write(&path, "segments = \"many\"\n").unwrap();
        assert!(Config::from_file(&path).is_err());
    }
}
