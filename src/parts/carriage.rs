// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Pressrig Team

//! Linear-bearing carriage parts
//!
//! The carriage body and its bearing covers are vendor meshes modeled in
//! inches; they are imported as-is and scaled to millimeters. The carriage
//! plate is printed and bolts onto the carriage's mounting pattern.

use crate::ast::{cube_centered, cylinder, import_mesh, Node};
use crate::fasteners::FastenerSize;
use crate::features::{clearance_hole, head_recess, ChamferHull, Sides};
use anyhow::Result;

pub const CARRIAGE_STL: &str = "LB-V1-CARRIAGE.stl";
pub const BEARING_COVER_STL: &str = "LB-V1-BEARING_COVER.stl";

/// Vendor linear-bearing carriage body.
pub fn carriage() -> Node {
    import_mesh(CARRIAGE_STL).scale_uniform(25.4)
}

/// Vendor bearing cover (four per carriage pair).
pub fn bearing_cover() -> Node {
    import_mesh(BEARING_COVER_STL).scale_uniform(25.4)
}

/// Adapter plate between the carriage and the press arms.
///
/// The carriage has four m3 mounting holes with captive nuts centered on
/// the edges of a rectangle approx. 34.8 x 41.4 mm.
#[derive(Debug, Clone)]
pub struct CarriagePlate {
    pub dims: (f64, f64, f64),
    pub chamfer: f64,
    pub screw_thickness: f64,
    pub arm_screw: FastenerSize,
    pub arm_mount_dist: f64,
}

/// Carriage mounting-hole rectangle, measured off the vendor part.
const CARRIAGE_PATTERN_X: f64 = 41.4;
const CARRIAGE_PATTERN_Y: f64 = 34.8;

impl Default for CarriagePlate {
    fn default() -> Self {
        Self {
            dims: (49.0, 42.0, 10.0),
            chamfer: 1.0,
            screw_thickness: 8.0,
            arm_screw: FastenerSize::M4,
            arm_mount_dist: 20.0,
        }
    }
}

impl CarriagePlate {
    pub fn build(&self) -> Result<Node> {
        let (x, y, z) = self.dims;
        let mut plate = ChamferHull::new(self.chamfer)
            .x(Sides::Both)
            .y(Sides::Both)
            .z(Sides::Positive)
            .apply(cube_centered(x, y, z))?
            .translate(0.0, 0.0, z / 2.0);

        // Carriage-side m3 bolts, heads sunk from screw_thickness upward.
        let m3 = FastenerSize::M3.spec();
        let head_sink = cylinder(m3.head.depth * z, m3.head.diameter / 2.0).translate(
            0.0,
            0.0,
            self.screw_thickness,
        );
        let bolt_hole = clearance_hole(FastenerSize::M3, z * 2.0).translate(0.0, 0.0, -z);
        let corner_cut = bolt_hole + head_sink;
        for sx in [1.0, -1.0] {
            for sy in [1.0, -1.0] {
                plate -= corner_cut.clone().translate(
                    sy * CARRIAGE_PATTERN_X / 2.0,
                    sx * CARRIAGE_PATTERN_Y / 2.0,
                    0.0,
                );
            }
        }

        // Arm-side mount bolts through the plate center line.
        let mount_hole = head_recess(self.arm_screw, 1.0)
            + clearance_hole(self.arm_screw, z + self.chamfer);
        plate -= mount_hole
            .clone()
            .translate(self.arm_mount_dist / 2.0, 0.0, 0.0);
        plate -= mount_hole.translate(-self.arm_mount_dist / 2.0, 0.0, 0.0);

        Ok(plate)
    }
}
