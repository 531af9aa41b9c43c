// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Pressrig Team

//! Hexagonal prisms with rounded vertical edges
//!
//! Used for nut capture pockets, so the prism is sized by the flat-to-flat
//! distance (how nuts and bolt heads are specified), not corner-to-corner.

use super::{ensure_positive, FeatureError};
use crate::ast::{cylinder, hull, Node};
use std::f64::consts::PI;

/// Default edge-rounding radius for nut pockets.
pub const HEX_FILLET: f64 = 0.1;

/// Regular hex prism of the given flat-to-flat `width`, extruded to height
/// `h`, with vertical edges rounded to `fillet`.
///
/// The prism is the hull of six fillet cylinders on a circle of radius
/// `(width/2 - fillet) / cos(30°)`: the fillet is folded into the corner
/// radius, so the flat-to-flat distance equals `width` exactly for any
/// fillet, not just in the small-fillet limit.
pub fn hex_prism(width: f64, h: f64, fillet: f64) -> Result<Node, FeatureError> {
    ensure_positive("width", width)?;
    ensure_positive("h", h)?;
    ensure_positive("fillet", fillet)?;
    if fillet >= width / 2.0 {
        return Err(FeatureError::FilletTooLarge { fillet, width });
    }

    let corner_r = (width / 2.0 - fillet) / (PI / 6.0).cos();
    let edges = (0..6)
        .map(|i| {
            let theta = PI / 3.0 * i as f64;
            cylinder(h, fillet).translate(corner_r * theta.cos(), corner_r * theta.sin(), 0.0)
        })
        .collect();
    Ok(hull(edges))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::math::approx_eq;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_flat_width_is_exact() {
        for width in [5.85, 7.0, 20.0] {
            for fillet in [1e-4, 0.1, width / 4.0] {
                let b = hex_prism(width, 5.0, fillet).unwrap().bounding_box().unwrap();
                // Flats face +-Y with a corner on +X, so the Y extent is the
                // flat-to-flat distance.
                assert!(
                    approx_eq(b.size().y, width, TOL),
                    "width {} fillet {} gave {}",
                    width,
                    fillet,
                    b.size().y
                );
            }
        }
    }

    #[test]
    fn test_corner_distance_exceeds_flat_width() {
        let b = hex_prism(7.0, 3.6, HEX_FILLET).unwrap().bounding_box().unwrap();
        assert!(b.size().x > b.size().y);
    }

    #[test]
    fn test_height() {
        let b = hex_prism(7.0, 3.6, HEX_FILLET).unwrap().bounding_box().unwrap();
        assert!(approx_eq(b.min.z, 0.0, TOL));
        assert!(approx_eq(b.max.z, 3.6, TOL));
    }

    #[test]
    fn test_rejects_bad_parameters() {
        assert!(hex_prism(0.0, 5.0, 0.1).is_err());
        assert!(hex_prism(7.0, -1.0, 0.1).is_err());
        assert!(hex_prism(7.0, 5.0, 0.0).is_err());
        assert!(hex_prism(7.0, 5.0, 3.5).is_err());
    }

    #[test]
    fn test_is_hull_of_six_edges() {
        let n = hex_prism(7.0, 3.6, HEX_FILLET).unwrap();
        match n {
            Node::Hull(children) => assert_eq!(children.len(), 6),
            other => panic!("expected hull, got {:?}", other),
        }
    }
}
