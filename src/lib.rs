// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Pressrig Team

//! Pressrig
//!
//! A parametric part generator for an extrusion-rail ironing press. Parts are
//! built as constructive solid geometry trees, emitted as OpenSCAD source and
//! rendered to STL through the external `openscad` binary.

pub mod ast;
pub mod config;
pub mod fasteners;
pub mod features;
pub mod io;
pub mod parts;
pub mod utils;

pub use ast::{BoundingBox, Node, TransformOp, Vec3};
pub use config::Config;
pub use fasteners::FastenerSize;
pub use io::{scad_source, write_scad_file, Renderer, DEFAULT_SEGMENTS};
pub use parts::PartId;

use anyhow::Result;

/// Main entry point: build a catalog part and emit it as OpenSCAD source
pub fn emit_part(part: PartId, segments: u32) -> Result<String> {
    let node = part.build()?;
    Ok(scad_source(&node, segments))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_pulley() {
        let source = emit_part(PartId::Pulley, 48).unwrap();
        assert!(source.starts_with("$fn = 48;"));
        assert!(source.contains("cylinder("));
    }
}
