// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Pressrig Team

//! Geometry expression tree
//!
//! Parts are described as immutable trees of solid primitives and CSG
//! operators. Composition always wraps: a combinator never mutates its
//! children, so any subtree can be shared, cloned, and re-emitted freely.

use serde::{Deserialize, Serialize};
use std::ops;

/// 3D vector type alias
pub type Vec3 = nalgebra::Vector3<f64>;

/// A single node of the geometry expression tree.
///
/// Leaves are primitives (or opaque imported assets); interior nodes are
/// boolean/convex operators and rigid transforms. The tree maps one-to-one
/// onto the OpenSCAD operator language it is serialized into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Cube {
        size: Vec3,
        center: bool,
    },
    /// Cylinder (or frustum when `r1 != r2`) from z=0 to z=h.
    Cylinder {
        h: f64,
        r1: f64,
        r2: f64,
    },
    /// Opaque imported mesh asset, referenced by file name.
    ImportMesh {
        path: String,
    },
    /// 2D cross-section from a DXF file, extruded along +Z.
    ExtrudeDxf {
        path: String,
        height: f64,
    },

    Union(Vec<Node>),
    /// First child minus all following children.
    Difference(Vec<Node>),
    Hull(Vec<Node>),
    Minkowski(Vec<Node>),

    Transform {
        op: TransformOp,
        children: Vec<Node>,
    },
}

/// Rigid (plus scale) transformations, in OpenSCAD conventions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TransformOp {
    Translate(Vec3),
    /// Euler angles in degrees, applied in OpenSCAD order (Z * Y * X).
    Rotate(Vec3),
    Scale(Vec3),
}

impl TransformOp {
    /// Convert the transformation to a homogeneous 4x4 matrix.
    pub fn to_matrix(&self) -> nalgebra::Matrix4<f64> {
        use nalgebra::{Matrix4, UnitQuaternion, Vector3};

        match self {
            TransformOp::Translate(v) => Matrix4::new_translation(v),
            TransformOp::Rotate(angles) => {
                let rx = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), angles.x.to_radians());
                let ry = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), angles.y.to_radians());
                let rz = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), angles.z.to_radians());
                (rz * ry * rx).to_homogeneous()
            }
            TransformOp::Scale(s) => Matrix4::new_nonuniform_scaling(s),
        }
    }
}

impl Node {
    /// Child nodes, empty for primitives and imported assets.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Union(children)
            | Node::Difference(children)
            | Node::Hull(children)
            | Node::Minkowski(children)
            | Node::Transform { children, .. } => children,
            _ => &[],
        }
    }

    /// Visit this node and every descendant, depth-first.
    pub fn for_each<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(&'a Node),
    {
        f(self);
        for child in self.children() {
            child.for_each(f);
        }
    }

    pub fn translate(self, x: f64, y: f64, z: f64) -> Node {
        Node::Transform {
            op: TransformOp::Translate(Vec3::new(x, y, z)),
            children: vec![self],
        }
    }

    /// Rotate by Euler angles in degrees, OpenSCAD order.
    pub fn rotate(self, x: f64, y: f64, z: f64) -> Node {
        Node::Transform {
            op: TransformOp::Rotate(Vec3::new(x, y, z)),
            children: vec![self],
        }
    }

    pub fn scale(self, x: f64, y: f64, z: f64) -> Node {
        Node::Transform {
            op: TransformOp::Scale(Vec3::new(x, y, z)),
            children: vec![self],
        }
    }

    pub fn scale_uniform(self, s: f64) -> Node {
        self.scale(s, s, s)
    }
}

/// Box with one corner at the origin.
pub fn cube(x: f64, y: f64, z: f64) -> Node {
    Node::Cube {
        size: Vec3::new(x, y, z),
        center: false,
    }
}

/// Box centered on the origin.
pub fn cube_centered(x: f64, y: f64, z: f64) -> Node {
    Node::Cube {
        size: Vec3::new(x, y, z),
        center: true,
    }
}

/// Cylinder along +Z from z=0 to z=h.
pub fn cylinder(h: f64, r: f64) -> Node {
    Node::Cylinder { h, r1: r, r2: r }
}

/// Truncated cone along +Z, radius `r1` at the bottom, `r2` at the top.
pub fn frustum(h: f64, r1: f64, r2: f64) -> Node {
    Node::Cylinder { h, r1, r2 }
}

pub fn import_mesh(path: impl Into<String>) -> Node {
    Node::ImportMesh { path: path.into() }
}

pub fn extrude_dxf(path: impl Into<String>, height: f64) -> Node {
    Node::ExtrudeDxf {
        path: path.into(),
        height,
    }
}

pub fn hull(children: Vec<Node>) -> Node {
    Node::Hull(children)
}

pub fn minkowski(a: Node, b: Node) -> Node {
    Node::Minkowski(vec![a, b])
}

// Operator sugar so assembler code reads like the modeling it describes:
// `body + boss - bolt_hole`. Unions and differences flatten one level to
// keep the emitted SCAD shallow; `(a - b) - c` is a single difference list.

impl ops::Add for Node {
    type Output = Node;

    fn add(self, rhs: Node) -> Node {
        match self {
            Node::Union(mut children) => {
                children.push(rhs);
                Node::Union(children)
            }
            other => Node::Union(vec![other, rhs]),
        }
    }
}

impl ops::Sub for Node {
    type Output = Node;

    fn sub(self, rhs: Node) -> Node {
        match self {
            Node::Difference(mut children) => {
                children.push(rhs);
                Node::Difference(children)
            }
            other => Node::Difference(vec![other, rhs]),
        }
    }
}

impl ops::AddAssign for Node {
    fn add_assign(&mut self, rhs: Node) {
        let lhs = std::mem::replace(self, Node::Union(Vec::new()));
        *self = lhs + rhs;
    }
}

impl ops::SubAssign for Node {
    fn sub_assign(&mut self, rhs: Node) {
        let lhs = std::mem::replace(self, Node::Union(Vec::new()));
        *self = lhs - rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_flattens() {
        let n = cube(1.0, 1.0, 1.0) + cube(2.0, 2.0, 2.0) + cube(3.0, 3.0, 3.0);
        match n {
            Node::Union(children) => assert_eq!(children.len(), 3),
            other => panic!("expected union, got {:?}", other),
        }
    }

    #[test]
    fn test_difference_flattens() {
        let n = cube(10.0, 10.0, 10.0) - cylinder(10.0, 1.0) - cylinder(10.0, 2.0);
        match n {
            Node::Difference(children) => assert_eq!(children.len(), 3),
            other => panic!("expected difference, got {:?}", other),
        }
    }

    #[test]
    fn test_difference_of_union_is_not_flattened() {
        let n = (cube(1.0, 1.0, 1.0) - cube(2.0, 2.0, 2.0)) + cube(3.0, 3.0, 3.0)
            - cube(4.0, 4.0, 4.0);
        match n {
            Node::Difference(children) => {
                assert_eq!(children.len(), 2);
                assert!(matches!(children[0], Node::Union(_)));
            }
            other => panic!("expected difference, got {:?}", other),
        }
    }

    #[test]
    fn test_composition_does_not_mutate_children() {
        let a = cube(1.0, 2.0, 3.0);
        let kept = a.clone();
        let _combined = a + cylinder(5.0, 1.0);
        assert_eq!(kept, cube(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_for_each_visits_all_nodes() {
        let n = (cube(1.0, 1.0, 1.0) + cylinder(2.0, 1.0)).translate(1.0, 0.0, 0.0);
        let mut count = 0;
        n.for_each(&mut |_| count += 1);
        // transform + union + two leaves
        assert_eq!(count, 4);
    }

    #[test]
    fn test_rotate_matrix_quarter_turn() {
        let m = TransformOp::Rotate(Vec3::new(0.0, 0.0, 90.0)).to_matrix();
        let p = m.transform_point(&nalgebra::Point3::new(1.0, 0.0, 0.0));
        assert!((p.x - 0.0).abs() < 1e-12);
        assert!((p.y - 1.0).abs() < 1e-12);
    }
}
