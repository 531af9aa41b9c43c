// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Pressrig Team

//! Press arms: iron holder and counterweight
//!
//! Both arms share the same skeleton: a chamfered post that bolts to the
//! carriage plate through two edge-loaded nut attachments, carrying a
//! fixture at the top and a rope-tie arch at the back.

use crate::ast::{cube, cylinder, Node};
use crate::fasteners::FastenerSize;
use crate::features::{nut_attachment, BoreShape, ChamferHull, Sides, SplitLock};
use anyhow::{Context, Result};

/// Small rope-tie arch: two chamfered pillars bridged by a cross bar.
#[derive(Debug, Clone)]
pub struct Arch {
    pub thickness: f64,
    pub hole_width: f64,
    pub hole_height: f64,
    pub chamfer: f64,
}

impl Default for Arch {
    fn default() -> Self {
        Self {
            thickness: 5.0,
            hole_width: 5.0,
            hole_height: 5.0,
            chamfer: 1.0,
        }
    }
}

impl Arch {
    pub fn build(&self) -> Result<Node> {
        let t = self.thickness;
        let c = self.chamfer;
        let hw = self.hole_width;
        let hh = self.hole_height;

        let pillar = ChamferHull::new(c)
            .x(Sides::Both)
            .y(Sides::Both)
            .apply(cube(t, t, hh + t).translate(-t / 2.0, hw / 2.0 + c, 0.0))?;
        let cross = ChamferHull::new(c)
            .x(Sides::Both)
            .y(Sides::Both)
            .z(Sides::Both)
            .apply(
                cube(t, hw + 2.0 * (t + c), t).translate(
                    -t / 2.0,
                    -hw / 2.0 - t - c,
                    hh + c,
                ),
            )?;

        Ok(pillar.clone() + pillar.rotate(0.0, 0.0, 180.0) + cross)
    }
}

/// Arm clamping the soldering iron in a split-lock collar.
#[derive(Debug, Clone)]
pub struct IronHolder {
    pub thickness: f64,
    pub depth: f64,
    pub length: f64,
    pub iron_diameter: f64,
    pub chamfer: f64,
    pub iron_holder_thickness: f64,
    pub arm_screw: FastenerSize,
    pub arm_mount_dist: f64,
    pub gap: f64,
    pub split_screw: FastenerSize,
}

impl Default for IronHolder {
    fn default() -> Self {
        Self {
            thickness: 30.0,
            depth: 40.0,
            length: 75.0,
            iron_diameter: 20.0,
            chamfer: 1.0,
            iron_holder_thickness: 5.0,
            arm_screw: FastenerSize::M4,
            arm_mount_dist: 20.0,
            gap: 0.75,
            split_screw: FastenerSize::M3,
        }
    }
}

impl IronHolder {
    pub fn build(&self) -> Result<Node> {
        let t = self.thickness;
        let d = self.depth;
        let len = self.length;

        let arm = ChamferHull::new(self.chamfer)
            .x(Sides::Both)
            .y(Sides::Both)
            .z(Sides::Positive)
            .apply(cube(t, d, len).translate(-t / 2.0, -d / 2.0, 0.0))?;

        let holder = SplitLock::new(self.iron_diameter)
            .thickness(self.iron_holder_thickness)
            .depth(d)
            .lip(10.0)
            .chamfer(self.chamfer)
            .gap(self.gap)
            .screw(self.split_screw)
            .build()
            .context("iron clamp")?
            .rotate(0.0, -90.0, 0.0)
            .translate(
                0.0,
                0.0,
                len + self.iron_diameter / 2.0 - self.iron_holder_thickness / 2.0,
            );

        let rope_tie = Arch::default().build()?.rotate(-90.0, 90.0, 0.0).translate(
            0.0,
            d / 2.0,
            len - self.iron_diameter / 2.0 - self.iron_holder_thickness * 2.0,
        );

        let mount = nut_attachment(self.arm_screw, t).context("arm mount")?;
        Ok(arm + holder + rope_tie
            - mount.clone().translate(0.0, self.arm_mount_dist / 2.0, 0.0)
            - mount.translate(0.0, -self.arm_mount_dist / 2.0, 0.0))
    }
}

/// Arm carrying the counterweight cup and the square press-rod clamp.
#[derive(Debug, Clone)]
pub struct Counterweight {
    pub thickness: f64,
    pub depth: f64,
    pub length: f64,
    pub cup_diameter: f64,
    pub chamfer: f64,
    pub cup_thickness: f64,
    pub arm_screw: FastenerSize,
    pub arm_mount_dist: f64,
    pub press_rod_diameter: f64,
    pub gap: f64,
}

impl Default for Counterweight {
    fn default() -> Self {
        Self {
            thickness: 30.0,
            depth: 50.0,
            length: 55.0,
            cup_diameter: 30.0,
            chamfer: 1.0,
            cup_thickness: 5.0,
            arm_screw: FastenerSize::M4,
            arm_mount_dist: 20.0,
            press_rod_diameter: 12.66,
            gap: 0.75,
        }
    }
}

impl Counterweight {
    pub fn build(&self) -> Result<Node> {
        let t = self.thickness;
        let d = self.depth;
        let len = self.length;
        let cup_r = self.cup_diameter / 2.0;
        let ct = self.cup_thickness;

        let arm = ChamferHull::new(self.chamfer)
            .x(Sides::Both)
            .y(Sides::Both)
            .z(Sides::Positive)
            .apply(cube(t, d, len).translate(-t / 2.0, -d / 2.0, 0.0))?;

        // Shot cup lying on its side, open toward the back.
        let cup_shell = ChamferHull::new(self.chamfer)
            .x(Sides::Both)
            .y(Sides::Both)
            .apply(cylinder(d, cup_r + ct).rotate(90.0, 0.0, 0.0))?
            .translate(0.0, d / 2.0, len - ct);
        let cup_cavity = cylinder(d, cup_r)
            .rotate(90.0, 0.0, 0.0)
            .translate(0.0, d - ct, len - ct);

        let shaft_holder = SplitLock::new(self.press_rod_diameter)
            .depth(d)
            .gap(self.gap)
            .bore(BoreShape::Square)
            .build()
            .context("press rod clamp")?
            .rotate(0.0, -90.0, 0.0)
            .translate(0.0, 0.0, len + cup_r + ct);

        let rope_tie = Arch::default().build()?.rotate(-90.0, 90.0, 0.0).translate(
            0.0,
            d / 2.0,
            len - cup_r - ct * 2.0,
        );

        let mount = nut_attachment(self.arm_screw, t).context("arm mount")?;
        Ok(arm + cup_shell + shaft_holder + rope_tie - cup_cavity
            - mount.clone().translate(0.0, self.arm_mount_dist / 2.0, 0.0)
            - mount.translate(0.0, -self.arm_mount_dist / 2.0, 0.0))
    }
}
