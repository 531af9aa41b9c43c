// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Pressrig Team

//! Split-lock shaft clamps
//!
//! A two-piece collar around a round or square bore. A thin gap slab cuts the
//! collar into two free halves, and a tensioning screw through the lip draws
//! the gap closed to clamp the shaft. Printed parts cannot match a shaft
//! diameter exactly, so clamping beats a matched bore.

use super::{
    clearance_hole, ensure_positive, nut_recess, nut_slide, ChamferHull, FeatureError, Sides,
};
use crate::ast::{cube, cylinder, Node};
use crate::fasteners::FastenerSize;

/// Cross-section of the clamped shaft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoreShape {
    Circle,
    /// Square bore, rotated 45 degrees so the flats face the gap.
    Square,
}

/// Builder for a split-lock clamp.
///
/// The collar is centered on the origin with the bore along +Y and the lip
/// tab extending along +X.
#[derive(Debug, Clone)]
pub struct SplitLock {
    diameter: f64,
    thickness: f64,
    depth: f64,
    lip: f64,
    chamfer: f64,
    gap: f64,
    screw: FastenerSize,
    shape: BoreShape,
}

impl SplitLock {
    pub fn new(diameter: f64) -> Self {
        Self {
            diameter,
            thickness: 3.0,
            depth: 40.0,
            lip: 10.0,
            chamfer: 1.0,
            gap: 2.0,
            screw: FastenerSize::M3,
            shape: BoreShape::Circle,
        }
    }

    /// Radial wall thickness of the collar.
    pub fn thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    /// Length of the collar along the bore axis.
    pub fn depth(mut self, depth: f64) -> Self {
        self.depth = depth;
        self
    }

    pub fn lip(mut self, lip: f64) -> Self {
        self.lip = lip;
        self
    }

    pub fn chamfer(mut self, chamfer: f64) -> Self {
        self.chamfer = chamfer;
        self
    }

    /// Thickness of the gap slab separating the two halves.
    pub fn gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    pub fn screw(mut self, screw: FastenerSize) -> Self {
        self.screw = screw;
        self
    }

    pub fn bore(mut self, shape: BoreShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn build(&self) -> Result<Node, FeatureError> {
        ensure_positive("diameter", self.diameter)?;
        ensure_positive("thickness", self.thickness)?;
        ensure_positive("depth", self.depth)?;
        ensure_positive("lip", self.lip)?;
        ensure_positive("chamfer", self.chamfer)?;
        if self.gap <= 0.0 || self.gap >= self.thickness {
            return Err(FeatureError::DegenerateGap {
                gap: self.gap,
                thickness: self.thickness,
            });
        }

        let d = self.diameter;
        let t = self.thickness;
        let depth = self.depth;
        let c = self.chamfer;

        let lip_part = cube(self.lip, t, depth).translate(d / 2.0, -t / 2.0, 0.0);
        let (bore, brace) = match self.shape {
            BoreShape::Circle => (
                cylinder(depth * 2.0, d / 2.0),
                cylinder(depth, d / 2.0 + t),
            ),
            BoreShape::Square => (
                cube(d, d, depth * 2.0)
                    .translate(-d / 2.0, -d / 2.0, 0.0)
                    .rotate(0.0, 0.0, 45.0),
                cube(2.0 * t + d, 2.0 * t + d, depth)
                    .translate(-d / 2.0 - t, -d / 2.0 - t, 0.0)
                    .rotate(0.0, 0.0, 45.0),
            ),
        };

        // Collar with the bore axis along +Y, centered on the origin.
        let collar = ChamferHull::new(c)
            .x(Sides::Both)
            .y(Sides::Both)
            .apply((brace + lip_part).rotate(90.0, 0.0, 0.0))?;
        let bore_cut = bore.rotate(90.0, 0.0, 0.0).translate(0.0, depth / 2.0, 0.0);
        let holder = (collar - bore_cut).translate(0.0, depth / 2.0, 0.0);

        // Gap slab through the entire collar, lip included, so the clamp
        // splits into exactly two pieces held only by the screw. The square
        // brace is rotated 45 degrees, so its corners reach sqrt(2) times
        // further than the circular collar radius.
        let radial = match self.shape {
            BoreShape::Circle => d / 2.0 + t,
            BoreShape::Square => (d / 2.0 + t) * std::f64::consts::SQRT_2,
        };
        let slab_min_x = -(radial + c);
        let slab_max_x = radial.max(d / 2.0 + self.lip) + c;
        let split = cube(slab_max_x - slab_min_x, depth + 2.0 * c, self.gap).translate(
            slab_min_x,
            -depth / 2.0 - c,
            -self.gap / 2.0,
        );

        // Tensioning screw stack through the lip: nut pocket with an edge
        // slide, clearance bolt, and a sunken head bore.
        let head = self.screw.spec().head;
        let tensioner = (nut_recess(self.screw)?
            + clearance_hole(self.screw, 100.0).translate(0.0, 0.0, -t * 2.0 - c)
            + nut_slide(self.screw, t + d)
            + cylinder(d + t, head.diameter / 2.0).translate(0.0, 0.0, -d - t * 2.0))
        .translate((d + self.lip) / 2.0, 0.0, t / 2.0 + c);

        Ok(holder - split - tensioner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_with_defaults() {
        let n = SplitLock::new(8.0).build().unwrap();
        let b = n.bounding_box().unwrap();
        // Collar spans the bore axis (+Y) over the full depth plus chamfer.
        assert!(b.size().y >= 40.0);
    }

    #[test]
    fn test_square_bore_builds() {
        let n = SplitLock::new(12.66)
            .depth(50.0)
            .gap(0.75)
            .bore(BoreShape::Square)
            .build();
        assert!(n.is_ok());
    }

    #[test]
    fn test_rejects_degenerate_gap() {
        assert!(matches!(
            SplitLock::new(8.0).gap(0.0).build(),
            Err(FeatureError::DegenerateGap { .. })
        ));
        assert!(matches!(
            SplitLock::new(8.0).thickness(3.0).gap(3.0).build(),
            Err(FeatureError::DegenerateGap { .. })
        ));
        assert!(matches!(
            SplitLock::new(8.0).gap(-1.0).build(),
            Err(FeatureError::DegenerateGap { .. })
        ));
    }

    #[test]
    fn test_accepts_gap_inside_wall() {
        assert!(SplitLock::new(8.0).thickness(5.0).gap(0.75).build().is_ok());
    }

    #[test]
    fn test_rejects_nonpositive_dimensions() {
        assert!(SplitLock::new(0.0).build().is_err());
        assert!(SplitLock::new(8.0).depth(-1.0).build().is_err());
    }

    #[test]
    fn test_gap_slab_spans_whole_collar() {
        let n = SplitLock::new(8.0).gap(1.0).build().unwrap();
        // holder - split - tensioner
        let Node::Difference(children) = &n else {
            panic!("expected difference");
        };
        assert_eq!(children.len(), 3);
        let slab = children[1].bounding_box().unwrap();
        let collar = children[0].bounding_box().unwrap();
        assert!(slab.min.x <= collar.min.x);
        assert!(slab.max.x >= collar.max.x);
    }

    #[test]
    fn test_gap_slab_reaches_square_collar_corners() {
        // The rotated square brace reaches sqrt(2) further out than a round
        // collar of the same wall; the slab must still clear its corners.
        let n = SplitLock::new(12.66)
            .depth(50.0)
            .gap(0.75)
            .bore(BoreShape::Square)
            .build()
            .unwrap();
        let Node::Difference(children) = &n else {
            panic!("expected difference");
        };
        let collar = children[0].bounding_box().unwrap();
        let slab = children[1].bounding_box().unwrap();
        assert!(
            slab.min.x <= collar.min.x,
            "slab {} stops short of collar corner {}",
            slab.min.x,
            collar.min.x
        );
        assert!(slab.max.x >= collar.max.x);
        assert!(slab.min.y <= collar.min.y);
        assert!(slab.max.y >= collar.max.y);
    }
}
