// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Pressrig Team

//! Geometry expression tree module
//!
//! Defines the solid-modeling AST the part assemblers build, plus symbolic
//! bounding boxes over it.

mod bbox;
mod node;

pub use bbox::BoundingBox;
pub use node::{
    cube, cube_centered, cylinder, extrude_dxf, frustum, hull, import_mesh, minkowski, Node,
    TransformOp, Vec3,
};
