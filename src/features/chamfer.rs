// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Pressrig Team

//! Chamfered-edge hulls
//!
//! Bevels the edges of a solid by hulling small offset copies of it along
//! the selected axes. The footprint along an unflagged axis is unchanged;
//! along a flagged side it grows by exactly the chamfer distance.

use super::{ensure_positive, FeatureError};
use crate::ast::{hull, Node};

/// Which sides of an axis participate in the chamfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sides {
    Both,
    Positive,
    Negative,
}

impl Sides {
    fn signs(self) -> &'static [f64] {
        match self {
            Sides::Both => &[1.0, -1.0],
            Sides::Positive => &[1.0],
            Sides::Negative => &[-1.0],
        }
    }
}

/// Builder for a chamfer-hull operation.
///
/// ```
/// use pressrig::ast::cube;
/// use pressrig::features::{ChamferHull, Sides};
///
/// let beveled = ChamferHull::new(1.0)
///     .x(Sides::Both)
///     .y(Sides::Both)
///     .z(Sides::Positive)
///     .apply(cube(30.0, 40.0, 50.0))
///     .unwrap();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ChamferHull {
    chamfer: f64,
    axes: [Option<Sides>; 3],
}

impl ChamferHull {
    pub fn new(chamfer: f64) -> Self {
        Self {
            chamfer,
            axes: [None; 3],
        }
    }

    pub fn x(mut self, sides: Sides) -> Self {
        self.axes[0] = Some(sides);
        self
    }

    pub fn y(mut self, sides: Sides) -> Self {
        self.axes[1] = Some(sides);
        self
    }

    pub fn z(mut self, sides: Sides) -> Self {
        self.axes[2] = Some(sides);
        self
    }

    /// Hull of the body offset by the chamfer distance along every flagged
    /// axis/side. With no flags this degenerates to a hull of the body alone,
    /// which is valid and a no-op for convex input. A zero or negative
    /// chamfer would silently collapse the bevel, so it is rejected.
    pub fn apply(&self, body: Node) -> Result<Node, FeatureError> {
        ensure_positive("chamfer", self.chamfer)?;

        let mut copies = Vec::new();
        for (axis, sides) in self.axes.iter().enumerate() {
            let Some(sides) = sides else { continue };
            for &sign in sides.signs() {
                let mut offset = [0.0, 0.0, 0.0];
                offset[axis] = sign * self.chamfer;
                copies.push(body.clone().translate(offset[0], offset[1], offset[2]));
            }
        }
        if copies.is_empty() {
            copies.push(body);
        }
        Ok(hull(copies))
    }
}
