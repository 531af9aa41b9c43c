// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Pressrig Team

//! OpenSCAD source emission
//!
//! Serializes an expression tree into the OpenSCAD operator language. Output
//! is a pure function of the tree and the segment count: numbers use Rust's
//! shortest-roundtrip formatting and child order is the tree order, so the
//! same part always emits byte-identical source.

use crate::ast::{Node, TransformOp, Vec3};
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::Path;

/// Default facet count for curved surfaces, applied globally via `$fn`.
pub const DEFAULT_SEGMENTS: u32 = 48;

/// Render the tree as a complete OpenSCAD program.
pub fn scad_source(node: &Node, segments: u32) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "$fn = {};", segments);
    out.push('\n');
    write_node(&mut out, node, 0);
    out
}

/// Write the tree to a `.scad` file.
pub fn write_scad_file(node: &Node, path: impl AsRef<Path>, segments: u32) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, scad_source(node, segments))
        .with_context(|| format!("Failed to write SCAD file: {:?}", path))
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    let pad = "  ".repeat(depth);
    match node {
        Node::Cube { size, center } => {
            if *center {
                let _ = writeln!(out, "{}cube({}, center = true);", pad, fmt_vec(size));
            } else {
                let _ = writeln!(out, "{}cube({});", pad, fmt_vec(size));
            }
        }
        Node::Cylinder { h, r1, r2 } => {
            if r1 == r2 {
                let _ = writeln!(out, "{}cylinder(h = {}, r = {});", pad, fmt_num(*h), fmt_num(*r1));
            } else {
                let _ = writeln!(
                    out,
                    "{}cylinder(h = {}, r1 = {}, r2 = {});",
                    pad,
                    fmt_num(*h),
                    fmt_num(*r1),
                    fmt_num(*r2)
                );
            }
        }
        Node::ImportMesh { path } => {
            let _ = writeln!(out, "{}import(\"{}\");", pad, path);
        }
        Node::ExtrudeDxf { path, height } => {
            let _ = writeln!(out, "{}linear_extrude(height = {}) {{", pad, fmt_num(*height));
            let _ = writeln!(out, "{}  import(\"{}\");", pad, path);
            let _ = writeln!(out, "{}}}", pad);
        }
        Node::Union(children) => write_block(out, "union()", children, depth),
        Node::Difference(children) => write_block(out, "difference()", children, depth),
        Node::Hull(children) => write_block(out, "hull()", children, depth),
        Node::Minkowski(children) => write_block(out, "minkowski()", children, depth),
        Node::Transform { op, children } => {
            let head = match op {
                TransformOp::Translate(v) => format!("translate({})", fmt_vec(v)),
                TransformOp::Rotate(v) => format!("rotate({})", fmt_vec(v)),
                TransformOp::Scale(v) => format!("scale({})", fmt_vec(v)),
            };
            write_block(out, &head, children, depth);
        }
    }
}

fn write_block(out: &mut String, head: &str, children: &[Node], depth: usize) {
    let pad = "  ".repeat(depth);
    let _ = writeln!(out, "{}{} {{", pad, head);
    for child in children {
        write_node(out, child, depth + 1);
    }
    let _ = writeln!(out, "{}}}", pad);
}

fn fmt_vec(v: &Vec3) -> String {
    format!("[{}, {}, {}]", fmt_num(v.x), fmt_num(v.y), fmt_num(v.z))
}

fn fmt_num(v: f64) -> String {
    // Normalize -0.0 so sign-flipped offsets of zero emit identically.
    let v = if v == 0.0 { 0.0 } else { v };
    format!("{}", v)
}
