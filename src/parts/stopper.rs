// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Pressrig Team

//! Rail stopper
//!
//! Small block that clips over one rail half and locks anywhere along it
//! with a bolt against a captive nut, to limit carriage travel.

use super::rail::rail_section;
use crate::ast::{cube_centered, Node};
use crate::fasteners::FastenerSize;
use crate::features::{clearance_hole, nut_recess, nut_slide};
use anyhow::{Context, Result};

pub fn stopper(screw: FastenerSize) -> Result<Node> {
    let body = cube_centered(40.0, 20.0, 10.0);

    let nut_depth = screw.spec().nut.depth;
    let clamp_bolt = (nut_slide(screw, 20.0) + nut_recess(screw).context("stopper nut pocket")?)
        .translate(0.0, 0.0, -nut_depth / 2.0)
        + clearance_hole(screw, 20.0).translate(0.0, 0.0, -10.0);
    let clamp_bolt = clamp_bolt.rotate(0.0, -90.0, -90.0);

    let rail_channel = rail_section(20.0)
        .translate(0.0, -13.0, -10.0)
        .rotate(0.0, 0.0, 180.0);

    Ok(body - rail_channel - clamp_bolt.translate(0.0, -5.0, 0.0))
}
