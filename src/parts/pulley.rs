// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Pressrig Team

//! Rope pulley and its mounting arms

use crate::ast::{cube, cylinder, frustum, hull, Node};
use crate::fasteners::FastenerSize;
use crate::features::{clearance_hole, head_recess, nut_recess};
use anyhow::{Context, Result};

/// Grooved rope wheel: two flat rims around a V-groove, spinning on a
/// through bolt with extra running clearance.
#[derive(Debug, Clone)]
pub struct Pulley {
    pub width: f64,
    pub diameter: f64,
    pub screw: FastenerSize,
    /// Extra radial clearance over the bolt so the wheel spins freely.
    pub clearance: f64,
    /// Rim width on either side of the groove.
    pub flat: f64,
}

impl Default for Pulley {
    fn default() -> Self {
        Self {
            width: 10.0,
            diameter: 30.0,
            screw: FastenerSize::M4,
            clearance: 0.3,
            flat: 1.0,
        }
    }
}

impl Pulley {
    pub fn build(&self) -> Node {
        let groove_depth = self.width / 2.0 - self.flat;
        let r = self.diameter / 2.0;

        let bolt_hole = cylinder(
            self.width * 2.0,
            self.screw.spec().clearance / 2.0 + self.clearance,
        )
        .translate(0.0, 0.0, -self.width);

        cylinder(self.flat, r)
            + frustum(groove_depth, r, r - groove_depth).translate(0.0, 0.0, self.flat)
            + frustum(groove_depth, r - groove_depth, r)
                .translate(0.0, 0.0, groove_depth + self.flat)
            + cylinder(self.flat, r).translate(0.0, 0.0, 2.0 * groove_depth + self.flat)
            - bolt_hole
    }
}

/// Twin upright arms on a base plate carrying the pulley axle bolt.
#[derive(Debug, Clone)]
pub struct PulleyArms {
    pub height: f64,
    pub through_screw: FastenerSize,
    pub arm_width: f64,
    pub arm_thickness: f64,
    pub pulley_width: f64,
    pub base_width: f64,
    pub base_thickness: f64,
}

impl Default for PulleyArms {
    fn default() -> Self {
        Self {
            height: 40.0,
            through_screw: FastenerSize::M4,
            arm_width: 15.0,
            arm_thickness: 7.5,
            pulley_width: 10.0,
            base_width: 30.0,
            base_thickness: 10.0,
        }
    }
}

impl PulleyArms {
    pub fn build(&self) -> Result<Node> {
        let aw = self.arm_width;
        let at = self.arm_thickness;
        let pw = self.pulley_width;
        let bw = self.base_width;
        let bt = self.base_thickness;

        let arm_base = cube(at, aw, 1.0).translate(0.0, -aw / 2.0, 0.0);
        let arm_top = cylinder(at, aw / 2.0)
            .rotate(0.0, 90.0, 0.0)
            .translate(0.0, 0.0, self.height - aw / 2.0);
        let arm = hull(vec![arm_top, arm_base.clone()]);

        let left = |n: Node| n.translate(pw / 2.0, 0.0, 0.0);
        let right = |n: Node| n.rotate(0.0, 0.0, 180.0).translate(-pw / 2.0, 0.0, 0.0);
        let arms = left(arm.clone()) + right(arm);

        let plate_orig = cube(bw, bw, bt).translate(-bw / 2.0, -bw / 2.0, -bt);
        let plate = hull(vec![
            plate_orig.clone(),
            left(arm_base.clone()).translate(0.0, 0.0, bt / 2.0),
        ]) + hull(vec![
            plate_orig,
            right(arm_base).translate(0.0, 0.0, bt / 2.0),
        ]);

        // Axle bolt spans both arms plus the pulley between them.
        let spacing = at * 2.0 + pw;
        let spec = self.through_screw.spec();
        let axle_bolt = clearance_hole(self.through_screw, spacing * 2.0)
            .translate(0.0, 0.0, -spacing)
            .rotate(0.0, 90.0, 0.0);
        let nut_pocket = nut_recess(self.through_screw)
            .context("pulley axle nut pocket")?
            .rotate(0.0, 90.0, 0.0)
            .translate(-spacing / 2.0, 0.0, 0.0);
        let head_sink = head_recess(self.through_screw, 0.0)
            .rotate(0.0, -90.0, 0.0)
            .translate(spacing / 2.0, 0.0, 0.0);
        let axle_assembly =
            (axle_bolt + nut_pocket + head_sink).translate(0.0, 0.0, self.height - aw / 2.0);

        // Vertical mount bolt through the middle of the base plate.
        let base_bolt = clearance_hole(self.through_screw, bt * 2.0).translate(0.0, 0.0, -bt)
            + cylinder(spec.head.depth * bt, spec.head.diameter / 2.0);

        Ok(arms + plate - axle_assembly - base_bolt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::math::approx_eq;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_pulley_dimensions() {
        let b = Pulley::default().build().bounding_box().unwrap();
        assert!(approx_eq(b.size().x, 30.0, TOL));
        assert!(approx_eq(b.min.z, 0.0, TOL));
        assert!(approx_eq(b.max.z, 10.0, TOL));
    }

    #[test]
    fn test_pulley_bolt_runs_clear() {
        // Groove profile: flat, two frustums meeting at the groove root,
        // flat again; bolt radius carries extra running clearance.
        let p = Pulley::default();
        let n = p.build();
        let mut bolt_r = None;
        n.for_each(&mut |node| {
            if let Node::Cylinder { h, r1, r2 } = node {
                if *h == 20.0 && r1 == r2 {
                    bolt_r = Some(*r1);
                }
            }
        });
        assert_eq!(bolt_r, Some(4.5 / 2.0 + 0.3));
    }

    #[test]
    fn test_pulley_arms_build() {
        let arms = PulleyArms::default().build().unwrap();
        let b = arms.bounding_box().unwrap();
        // Base plate below the origin, arms reaching the axle height.
        assert!(approx_eq(b.min.z, -10.0, TOL));
        assert!(b.max.z >= 40.0 - 1e-9);
    }
}
