// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Pressrig Team

//! Symbolic bounding boxes over the expression tree
//!
//! Bounds are computed from the tree itself, without meshing. They are exact
//! for axis-aligned compositions (the common case in these parts) and
//! conservative under rotation. Imported assets have unknown extent, so any
//! subtree containing one has no bounding box.

use super::node::Node;
use crate::utils::math::approx_eq;
use nalgebra::{Matrix4, Point3};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl BoundingBox {
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self { min, max }
    }

    pub fn size(&self) -> nalgebra::Vector3<f64> {
        self.max - self.min
    }

    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.min, &self.max)
    }

    pub fn union_with(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min: Point3::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            max: Point3::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        }
    }

    /// Interval sum of two boxes (the bounding box of a Minkowski sum).
    pub fn minkowski_sum(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min: self.min + other.min.coords,
            max: self.max + other.max.coords,
        }
    }

    /// Bounding box of the eight transformed corners.
    pub fn transform(&self, m: &Matrix4<f64>) -> BoundingBox {
        let corners = [
            Point3::new(self.min.x, self.min.y, self.min.z),
            Point3::new(self.max.x, self.min.y, self.min.z),
            Point3::new(self.min.x, self.max.y, self.min.z),
            Point3::new(self.max.x, self.max.y, self.min.z),
            Point3::new(self.min.x, self.min.y, self.max.z),
            Point3::new(self.max.x, self.min.y, self.max.z),
            Point3::new(self.min.x, self.max.y, self.max.z),
            Point3::new(self.max.x, self.max.y, self.max.z),
        ];

        let first = m.transform_point(&corners[0]);
        let mut result = BoundingBox::new(first, first);
        for corner in &corners[1..] {
            let p = m.transform_point(corner);
            result = result.union_with(&BoundingBox::new(p, p));
        }
        result
    }

    /// Check if two bounding boxes are approximately equal within tolerance
    pub fn approx_eq(&self, other: &BoundingBox, tolerance: f64) -> bool {
        approx_eq(self.min.x, other.min.x, tolerance)
            && approx_eq(self.min.y, other.min.y, tolerance)
            && approx_eq(self.min.z, other.min.z, tolerance)
            && approx_eq(self.max.x, other.max.x, tolerance)
            && approx_eq(self.max.y, other.max.y, tolerance)
            && approx_eq(self.max.z, other.max.z, tolerance)
    }
}

impl Node {
    /// Conservative bounding box, or `None` if the subtree references an
    /// imported asset of unknown extent.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        match self {
            Node::Cube { size, center } => {
                if *center {
                    Some(BoundingBox::new(
                        Point3::new(-size.x / 2.0, -size.y / 2.0, -size.z / 2.0),
                        Point3::new(size.x / 2.0, size.y / 2.0, size.z / 2.0),
                    ))
                } else {
                    Some(BoundingBox::new(
                        Point3::origin(),
                        Point3::new(size.x, size.y, size.z),
                    ))
                }
            }
            Node::Cylinder { h, r1, r2 } => {
                let r = r1.max(*r2);
                Some(BoundingBox::new(
                    Point3::new(-r, -r, 0.0),
                    Point3::new(r, r, *h),
                ))
            }
            Node::ImportMesh { .. } | Node::ExtrudeDxf { .. } => None,
            // A hull is contained in the bounds of its children; a union is
            // exactly their bounds.
            Node::Union(children) | Node::Hull(children) => union_of(children),
            // The first child bounds the whole difference.
            Node::Difference(children) => children.first()?.bounding_box(),
            Node::Minkowski(children) => {
                let mut boxes = children.iter().map(Node::bounding_box);
                let first = boxes.next()??;
                boxes.try_fold(first, |acc, b| Some(acc.minkowski_sum(&b?)))
            }
            Node::Transform { op, children } => {
                let inner = union_of(children)?;
                Some(inner.transform(&op.to_matrix()))
            }
        }
    }
}

fn union_of(children: &[Node]) -> Option<BoundingBox> {
    let mut boxes = children.iter().map(Node::bounding_box);
    let first = boxes.next()??;
    boxes.try_fold(first, |acc, b| Some(acc.union_with(&b?)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::node::{cube, cube_centered, cylinder, extrude_dxf, minkowski};

    const TOL: f64 = 1e-9;

    #[test]
    fn test_cube_bbox() {
        let b = cube(30.0, 40.0, 50.0).bounding_box().unwrap();
        assert!(b.approx_eq(
            &BoundingBox::new(Point3::origin(), Point3::new(30.0, 40.0, 50.0)),
            TOL
        ));

        let c = cube_centered(30.0, 40.0, 50.0).bounding_box().unwrap();
        assert!(c.approx_eq(
            &BoundingBox::new(Point3::new(-15.0, -20.0, -25.0), Point3::new(15.0, 20.0, 25.0)),
            TOL
        ));
    }

    #[test]
    fn test_translated_cylinder_bbox() {
        let b = cylinder(10.0, 2.0)
            .translate(5.0, 0.0, -10.0)
            .bounding_box()
            .unwrap();
        assert!(b.approx_eq(
            &BoundingBox::new(Point3::new(3.0, -2.0, -10.0), Point3::new(7.0, 2.0, 0.0)),
            TOL
        ));
    }

    #[test]
    fn test_difference_takes_first_child() {
        let b = (cube(10.0, 10.0, 10.0) - cube(100.0, 100.0, 100.0))
            .bounding_box()
            .unwrap();
        assert!(approx_eq(b.size().x, 10.0, TOL));
    }

    #[test]
    fn test_minkowski_grows_by_interval_sum() {
        let b = minkowski(cube(10.0, 10.0, 10.0), cube(0.5, 0.5, 0.5))
            .bounding_box()
            .unwrap();
        assert!(b.approx_eq(
            &BoundingBox::new(Point3::origin(), Point3::new(10.5, 10.5, 10.5)),
            TOL
        ));
    }

    #[test]
    fn test_imported_asset_has_no_bbox() {
        let n = cube(1.0, 1.0, 1.0) + extrude_dxf("profile.dxf", 20.0);
        assert!(n.bounding_box().is_none());
    }

    #[test]
    fn test_scaled_bbox() {
        let b = cube(1.0, 1.0, 1.0)
            .scale(25.4, 25.4, 1.0)
            .bounding_box()
            .unwrap();
        assert!(approx_eq(b.max.x, 25.4, TOL));
        assert!(approx_eq(b.max.z, 1.0, TOL));
    }
}
