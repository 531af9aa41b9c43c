// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Pressrig Team

//! Extrusion rail sections
//!
//! The rail cross-section comes from a vendor DXF drawn in inches; it is
//! scaled to millimeters and re-centered so the rail's bolt channel sits on
//! the origin.

use crate::ast::{extrude_dxf, Node};
use crate::fasteners::FastenerSize;
use crate::features::clearance_hole;

/// 2D cross-section of a single rail half.
pub const RAIL_XSECTION_DXF: &str = "SINGLE_RAIL_XSECTION.dxf";

/// One rail half of length `h`, extruded along +Z.
pub fn rail_section(h: f64) -> Node {
    extrude_dxf(RAIL_XSECTION_DXF, h)
        .scale(25.4, 25.4, 1.0)
        .translate(25.4, 23.8, 0.0)
}

/// Two rail halves back to back, forming the full double-sided rail.
pub fn double_side_rail(h: f64) -> Node {
    rail_section(h) + rail_section(h).rotate(0.0, 0.0, 180.0)
}

/// Double-sided rail with mounting bolt holes drilled across it: two near
/// the base (matching the bracket through-bolt offsets) and one near the
/// top. The holes accumulate by folding over the offset list.
pub fn double_side_rail_with_holes(
    h: f64,
    bottom_thickness: f64,
    holes: FastenerSize,
) -> Node {
    let bolt_hole = clearance_hole(holes, 80.0)
        .translate(0.0, 0.0, -40.0)
        .rotate(0.0, 90.0, 0.0);

    [20.0 - bottom_thickness, 40.0 - bottom_thickness, h - 10.0]
        .into_iter()
        .fold(double_side_rail(h), |rail, offset| {
            rail - bolt_hole.clone().translate(0.0, 0.0, offset)
        })
}
