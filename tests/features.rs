// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Pressrig Team

//! Geometry invariants for the shared feature helpers

use approx::assert_relative_eq;
use pressrig::ast::{cube, Node};
use pressrig::features::{
    hex_prism, BoreShape, ChamferHull, FeatureError, Sides, SplitLock, HEX_FILLET,
};

#[test]
fn test_hex_prism_flat_width_invariant() {
    // The flat-to-flat distance must equal the requested width exactly over
    // the whole usable fillet range, including nut-pocket sizes.
    for width in [5.85, 7.0, 12.0] {
        for fillet in [1e-6, HEX_FILLET, width / 4.0, width / 2.0 - 1e-3] {
            let prism = hex_prism(width, 3.6, fillet).unwrap();
            let b = prism.bounding_box().unwrap();
            assert_relative_eq!(b.size().y, width, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_hex_prism_fillet_bound() {
    assert!(matches!(
        hex_prism(7.0, 3.6, 3.5),
        Err(FeatureError::FilletTooLarge { .. })
    ));
    assert!(hex_prism(7.0, 3.6, 3.499).is_ok());
}

#[test]
fn test_chamfer_hull_footprint_invariant() {
    // Flagged sides grow by the chamfer distance, unflagged sides stay put.
    let b = ChamferHull::new(1.5)
        .x(Sides::Both)
        .z(Sides::Positive)
        .apply(cube(30.0, 40.0, 10.0))
        .unwrap()
        .bounding_box()
        .unwrap();

    assert_eq!(b.min.x, -1.5);
    assert_eq!(b.max.x, 31.5);
    assert_eq!(b.min.y, 0.0);
    assert_eq!(b.max.y, 40.0);
    assert_eq!(b.min.z, 0.0);
    assert_eq!(b.max.z, 11.5);
}

#[test]
fn test_split_lock_gap_must_sit_inside_wall() {
    assert!(matches!(
        SplitLock::new(8.0).thickness(3.0).gap(3.0).build(),
        Err(FeatureError::DegenerateGap { .. })
    ));
    assert!(matches!(
        SplitLock::new(8.0).gap(0.0).build(),
        Err(FeatureError::DegenerateGap { .. })
    ));
    assert!(SplitLock::new(8.0).thickness(3.0).gap(2.0).build().is_ok());
}

#[test]
fn test_split_lock_slab_severs_both_walls() {
    // Round iron clamp and square press-rod clamp: the slab must cover the
    // collar across the full XY plane it cuts, leaving two free pieces.
    // The square brace's corners reach sqrt(2) further out than its walls.
    let clamps = [
        SplitLock::new(20.0).thickness(5.0).lip(20.0).gap(0.75),
        SplitLock::new(12.66)
            .depth(50.0)
            .gap(0.75)
            .bore(BoreShape::Square),
    ];
    for clamp in clamps {
        let clamp = clamp.build().unwrap();
        let Node::Difference(children) = &clamp else {
            panic!("expected a difference at the root");
        };
        let collar = children[0].bounding_box().unwrap();
        let slab = children[1].bounding_box().unwrap();

        assert!(slab.min.x <= collar.min.x, "{} > {}", slab.min.x, collar.min.x);
        assert!(slab.max.x >= collar.max.x, "{} < {}", slab.max.x, collar.max.x);
        assert!(slab.min.y <= collar.min.y);
        assert!(slab.max.y >= collar.max.y);
        assert_relative_eq!(slab.size().z, 0.75, epsilon = 1e-9);
        assert!(slab.min.z < 0.0 && slab.max.z > 0.0);
    }
}
