// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Pressrig Team

//! Rail end brackets
//!
//! The base and top brackets share a common blank: a chamfered block with a
//! clearance-grown cavity for the rail and horizontal through-bolt
//! assemblies (clearance hole, captive nut pocket on one face, sunken head
//! on the other). Bodies and cutouts are kept separate until the final
//! subtraction so a later boss union can never refill a hole.

use super::rail::double_side_rail;
use crate::ast::{cube, minkowski, Node};
use crate::fasteners::FastenerSize;
use crate::features::{
    clearance_hole, countersunk_screw, head_recess, nut_recess_with_depth, ChamferHull, Sides,
};
use anyhow::{Context, Result};

/// Block footprint shared by both brackets: 30 x 40 mm around the rail.
const BODY_X: f64 = 30.0;
const BODY_Y: f64 = 40.0;

struct BracketBlank {
    body: Node,
    cutouts: Vec<Node>,
}

/// Common bracket blank. `through_offsets` are the heights of the
/// horizontal through-bolt assemblies above the bracket base.
fn bracket_blank(
    bottom_thickness: f64,
    chamfer: f64,
    height: f64,
    clearance: f64,
    through_offsets: &[f64],
    through_screw: FastenerSize,
) -> Result<BracketBlank> {
    let body = ChamferHull::new(chamfer)
        .x(Sides::Both)
        .y(Sides::Both)
        .z(Sides::Positive)
        .apply(cube(BODY_X, BODY_Y, height).translate(-BODY_X / 2.0, -BODY_Y / 2.0, 0.0))?;

    // Rail cavity, grown by the print clearance on all sides.
    let rail_cavity = minkowski(
        double_side_rail(height).translate(0.0, 0.0, bottom_thickness),
        cube(clearance, clearance, clearance),
    );

    let spec = through_screw.spec();
    let bolt_hole = clearance_hole(through_screw, 200.0)
        .translate(0.0, 0.0, -50.0)
        .rotate(0.0, 90.0, 0.0);
    let nut_pocket = nut_recess_with_depth(through_screw, 100.0 + spec.nut.depth)
        .context("bracket nut pocket")?
        .rotate(0.0, 90.0, 0.0)
        .translate(-BODY_X / 2.0 - 0.5 - chamfer - 100.0, 0.0, 0.0);
    let head_sink = head_recess(through_screw, 100.0)
        .translate(0.0, 0.0, -100.0)
        .rotate(0.0, -90.0, 0.0)
        .translate(BODY_X / 2.0 + 0.5 + chamfer, 0.0, 0.0);
    let bolt_assembly = bolt_hole + nut_pocket + head_sink;

    let mut cutouts = vec![rail_cavity];
    for &offset in through_offsets {
        cutouts.push(bolt_assembly.clone().translate(0.0, 0.0, offset));
    }

    Ok(BracketBlank { body, cutouts })
}

/// Bare bracket: blank with all cutouts applied.
pub fn bracket(
    bottom_thickness: f64,
    chamfer: f64,
    height: f64,
    clearance: f64,
    through_offsets: &[f64],
    through_screw: FastenerSize,
) -> Result<Node> {
    let blank = bracket_blank(
        bottom_thickness,
        chamfer,
        height,
        clearance,
        through_offsets,
        through_screw,
    )?;
    Ok(blank
        .cutouts
        .into_iter()
        .fold(blank.body, |body, cut| body - cut))
}

/// Countersunk wood screw (5.9 mm shank, 10.8 mm head) used to fasten the
/// base bracket to the bench.
pub fn wood_screw() -> Node {
    countersunk_screw(5.9, 4.5, 10.8)
}

/// Floor-standing bracket with a wide flange foot screwed to the bench.
#[derive(Debug, Clone)]
pub struct BaseBracket {
    pub mount_screw_hole: Node,
    pub through_screw: FastenerSize,
    pub chamfer: f64,
    pub clearance: f64,
    pub base_flange_width: f64,
    pub base_flange_thickness: f64,
    pub bottom_thickness: f64,
    pub height: f64,
    pub holes_offset: f64,
}

impl Default for BaseBracket {
    fn default() -> Self {
        Self {
            mount_screw_hole: wood_screw(),
            through_screw: FastenerSize::M4,
            chamfer: 1.0,
            clearance: 0.25,
            base_flange_width: 20.0,
            base_flange_thickness: 25.0,
            bottom_thickness: 10.0,
            height: 50.0,
            holes_offset: 10.0,
        }
    }
}

impl BaseBracket {
    pub fn build(&self) -> Result<Node> {
        // Rail bolt holes land at 20 and 40 mm so they line up with a rail
        // drilled at the same bottom thickness.
        let blank = bracket_blank(
            self.bottom_thickness,
            self.chamfer,
            self.height,
            self.clearance,
            &[20.0, 40.0],
            self.through_screw,
        )?;

        let fw = self.base_flange_width;
        let flange = ChamferHull::new(self.chamfer)
            .x(Sides::Both)
            .y(Sides::Both)
            .z(Sides::Positive)
            .apply(
                cube(BODY_X + fw * 2.0, BODY_Y + fw * 2.0, self.base_flange_thickness).translate(
                    -BODY_X / 2.0 - fw,
                    -BODY_Y / 2.0 - fw,
                    0.0,
                ),
            )?;

        let mut body = blank.body + flange;
        for cut in blank.cutouts {
            body -= cut;
        }
        for sx in [1.0, -1.0] {
            for sy in [1.0, -1.0] {
                body -= self.mount_screw_hole.clone().translate(
                    sx * (BODY_X / 2.0 + fw - self.holes_offset),
                    sy * (BODY_Y / 2.0 + fw - self.holes_offset),
                    self.base_flange_thickness + self.chamfer + 0.001,
                );
            }
        }
        Ok(body)
    }
}

/// Top-of-rail bracket with a captive nut under the bottom face, so the
/// press rod bolt can be tightened from above.
#[derive(Debug, Clone)]
pub struct TopBracket {
    pub through_screw: FastenerSize,
    pub chamfer: f64,
    pub clearance: f64,
    pub bottom_thickness: f64,
    pub height: f64,
}

impl Default for TopBracket {
    fn default() -> Self {
        Self {
            through_screw: FastenerSize::M4,
            chamfer: 1.0,
            clearance: 0.25,
            bottom_thickness: 12.0,
            height: 30.0,
        }
    }
}

impl TopBracket {
    pub fn build(&self) -> Result<Node> {
        let body = bracket(
            self.bottom_thickness,
            self.chamfer,
            self.height,
            self.clearance,
            &[20.0],
            self.through_screw,
        )?;

        let pocket_depth = self.through_screw.spec().nut.depth + 2.0;
        let nut_pocket = nut_recess_with_depth(self.through_screw, pocket_depth)
            .context("top bracket nut pocket")?
            .translate(0.0, 0.0, self.bottom_thickness - pocket_depth);
        let bolt_hole = clearance_hole(self.through_screw, self.bottom_thickness);

        Ok(body - nut_pocket - bolt_hole)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_cuts_one_assembly_per_offset() {
        let one = bracket(12.0, 1.0, 30.0, 0.25, &[20.0], FastenerSize::M4).unwrap();
        let two = bracket(10.0, 1.0, 50.0, 0.25, &[20.0, 40.0], FastenerSize::M4).unwrap();
        let count = |n: &Node| match n {
            // body, rail cavity, then one cut per offset
            Node::Difference(children) => children.len(),
            _ => panic!("expected difference"),
        };
        assert_eq!(count(&one), 3);
        assert_eq!(count(&two), 4);
    }

    #[test]
    fn test_base_bracket_builds() {
        assert!(BaseBracket::default().build().is_ok());
    }

    #[test]
    fn test_top_bracket_builds() {
        assert!(TopBracket::default().build().is_ok());
    }

    #[test]
    fn test_top_bracket_pocket_sits_at_bottom_face() {
        let n = TopBracket::default().build().unwrap();
        let Node::Difference(children) = &n else {
            panic!("expected difference");
        };
        // Last two cuts are the bottom nut pocket and its bolt hole.
        let pocket = &children[children.len() - 2];
        let b = pocket.bounding_box().unwrap();
        // Pocket depth is nut depth + 2, ending flush with the 12mm face.
        assert!((b.min.z - 6.4).abs() < 1e-9);
        assert!((b.max.z - 12.0).abs() < 1e-9);
    }
}
