// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Pressrig Team

//! Fastener recess generators
//!
//! All of these produce subtraction geometry at the origin; the assembler
//! positions them and cuts them from a body. None of them know the body
//! they will be cut from.

use super::{hex_prism, FeatureError, HEX_FILLET};
use crate::ast::{cube, cylinder, frustum, Node};
use crate::fasteners::FastenerSize;

/// Through-bolt clearance cylinder of length `h`, on the +Z axis.
///
/// The caller chooses `h` long enough to fully penetrate whatever the hole
/// is cut from.
pub fn clearance_hole(size: FastenerSize, h: f64) -> Node {
    cylinder(h, size.spec().clearance / 2.0)
}

/// Straight head-sink cylinder, `extra` deeper than the nominal sink depth.
pub fn head_recess(size: FastenerSize, extra: f64) -> Node {
    let head = size.spec().head;
    cylinder(head.depth + extra, head.diameter / 2.0)
}

/// Countersunk screw volume from raw dimensions: a long shank cylinder below
/// z=0 topped by a conical head widening to `widest` over `depth`. Used both
/// for table sizes and for odd screws the table does not carry (the base
/// bracket's wood screws).
pub fn countersunk_screw(diameter: f64, depth: f64, widest: f64) -> Node {
    let body = cylinder(100.0, diameter / 2.0).translate(0.0, 0.0, -100.0);
    let head = frustum(depth, diameter / 2.0, widest / 2.0).translate(0.0, 0.0, -depth);
    body + head
}

/// Countersunk recess for a table size: clearance shank plus conical head.
pub fn countersunk_recess(size: FastenerSize) -> Node {
    let spec = size.spec();
    countersunk_screw(spec.clearance, spec.head.depth, spec.head.diameter)
}

/// Hex pocket matching the size's nut, at nominal nut depth.
pub fn nut_recess(size: FastenerSize) -> Result<Node, FeatureError> {
    let nut = size.spec().nut;
    hex_prism(nut.width, nut.depth, HEX_FILLET)
}

/// Hex pocket of the size's nut width but an explicit depth, for pockets
/// that must reach deeper than one nut (e.g. cut clear through a wall).
pub fn nut_recess_with_depth(size: FastenerSize, depth: f64) -> Result<Node, FeatureError> {
    let nut = size.spec().nut;
    hex_prism(nut.width, depth, HEX_FILLET)
}

/// Rectangular channel of nut width and depth, running `length` along +X,
/// so a nut can slide in from a part edge instead of dropping in from above.
pub fn nut_slide(size: FastenerSize, length: f64) -> Node {
    let nut = size.spec().nut;
    cube(length, nut.width, nut.depth).translate(0.0, -nut.width / 2.0, 0.0)
}

/// Combined edge-loaded nut capture: slide channel plus hex pocket, raised
/// 10mm above a bolt clearance hole. This is the mount the arm parts repeat.
pub fn nut_attachment(size: FastenerSize, slide_length: f64) -> Result<Node, FeatureError> {
    let pocket = nut_slide(size, slide_length) + nut_recess(size)?;
    Ok(pocket.translate(0.0, 0.0, 10.0) + clearance_hole(size, 10.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::math::approx_eq;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_clearance_hole_diameter() {
        let b = clearance_hole(FastenerSize::M4, 80.0).bounding_box().unwrap();
        assert!(approx_eq(b.size().x, 4.5, TOL));
        assert!(approx_eq(b.size().z, 80.0, TOL));
    }

    #[test]
    fn test_countersunk_screw_extents() {
        // Wood screw dimensions used by the base bracket.
        let b = countersunk_screw(5.9, 4.5, 10.8).bounding_box().unwrap();
        assert!(approx_eq(b.min.z, -100.0, TOL));
        assert!(approx_eq(b.max.z, 0.0, TOL));
        assert!(approx_eq(b.size().x, 10.8, TOL));
    }

    #[test]
    fn test_countersunk_recess_uses_table() {
        let b = countersunk_recess(FastenerSize::M3).bounding_box().unwrap();
        assert!(approx_eq(b.size().x, 6.2, TOL));
    }

    #[test]
    fn test_nut_slide_straddles_x_axis() {
        let b = nut_slide(FastenerSize::M4, 30.0).bounding_box().unwrap();
        assert!(approx_eq(b.min.y, -3.5, TOL));
        assert!(approx_eq(b.max.y, 3.5, TOL));
        assert!(approx_eq(b.size().x, 30.0, TOL));
        assert!(approx_eq(b.size().z, 3.6, TOL));
    }

    #[test]
    fn test_nut_attachment_builds() {
        let n = nut_attachment(FastenerSize::M4, 30.0).unwrap();
        let b = n.bounding_box().unwrap();
        // Bolt hole from z=0, pocket raised to z=10..13.6.
        assert!(approx_eq(b.min.z, 0.0, TOL));
        assert!(approx_eq(b.max.z, 13.6, TOL));
    }
}
