// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Pressrig Team

//! External renderer invocation
//!
//! Meshing is delegated to the OpenSCAD binary: the tree is written to a
//! temporary `.scad` file and `openscad -q -o <stl>` is invoked on it. A
//! non-zero exit status is propagated as an error rather than ignored.

use super::assets::verify_assets;
use super::scad::scad_source;
use crate::ast::Node;
use anyhow::{bail, Context, Result};
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{Duration, Instant};

/// Runner for the external OpenSCAD renderer.
pub struct Renderer {
    openscad: String,
    asset_dir: PathBuf,
    segments: u32,
}

impl Renderer {
    pub fn new(segments: u32) -> Self {
        Self {
            openscad: "openscad".to_string(),
            asset_dir: PathBuf::from("."),
            segments,
        }
    }

    pub fn with_executable(mut self, path: impl Into<String>) -> Self {
        self.openscad = path.into();
        self
    }

    pub fn with_asset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.asset_dir = dir.into();
        self
    }

    /// Check if the renderer binary is available
    pub fn is_available(&self) -> bool {
        Command::new(&self.openscad).arg("--version").output().is_ok()
    }

    /// Render the tree to an STL file, returning the render duration.
    pub fn render(&self, node: &Node, output: &Path) -> Result<Duration> {
        verify_assets(node, &self.asset_dir)?;

        // OpenSCAD resolves import() paths relative to the script, so the
        // temporary script lives in the asset directory.
        let mut script = tempfile::Builder::new()
            .prefix("pressrig-")
            .suffix(".scad")
            .tempfile_in(&self.asset_dir)
            .context("Failed to create temporary SCAD file")?;
        script
            .write_all(scad_source(node, self.segments).as_bytes())
            .context("Failed to write temporary SCAD file")?;
        script.flush()?;

        let start = Instant::now();
        let status = Command::new(&self.openscad)
            .arg("-q")
            .arg("-o")
            .arg(output)
            .arg(script.path())
            .status()
            .with_context(|| format!("Failed to execute {}", self.openscad))?;

        if !status.success() {
            bail!(
                "{} exited with status {} while rendering {:?}",
                self.openscad,
                status,
                output
            );
        }

        Ok(start.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::cube;

    #[test]
    fn test_availability_probe_does_not_panic() {
        // Passes whether or not OpenSCAD is installed.
        let _ = Renderer::new(48).is_available();
    }

    #[test]
    fn test_missing_renderer_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = Renderer::new(48)
            .with_executable("definitely-not-openscad")
            .with_asset_dir(dir.path());
        let err = renderer
            .render(&cube(1.0, 1.0, 1.0), Path::new("out.stl"))
            .unwrap_err();
        assert!(err.to_string().contains("definitely-not-openscad"));
    }

    #[test]
    fn test_missing_asset_blocks_render() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = Renderer::new(48).with_asset_dir(dir.path());
        let node = crate::ast::import_mesh("missing.stl");
        let err = renderer.render(&node, Path::new("out.stl")).unwrap_err();
        assert!(err.to_string().contains("missing.stl"));
    }
}
