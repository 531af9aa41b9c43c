// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Pressrig Team

//! Metric fastener dimension tables
//!
//! Closed enumeration of the screw sizes the rig uses. Keeping the table an
//! exhaustive match means a part can never ask for a size the table does not
//! carry; adding a size forces every lookup to be extended at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Nominal metric screw sizes used by the rig's parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FastenerSize {
    M3,
    M4,
}

/// Screw-head countersink dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeadRecess {
    /// Depth the head sinks below the surface.
    pub depth: f64,
    /// Widest diameter of the head.
    pub diameter: f64,
}

/// Hex-nut capture pocket dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutPocket {
    /// Flat-to-flat width of the nut.
    pub width: f64,
    /// Nut thickness.
    pub depth: f64,
}

/// All drilling/recess dimensions for one nominal size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FastenerSpec {
    /// Clearance-hole diameter for a free (non-tapping) fit.
    pub clearance: f64,
    pub head: HeadRecess,
    pub nut: NutPocket,
}

impl FastenerSize {
    pub const ALL: [FastenerSize; 2] = [FastenerSize::M3, FastenerSize::M4];

    /// Dimension record for this size.
    pub const fn spec(self) -> FastenerSpec {
        match self {
            FastenerSize::M3 => FastenerSpec {
                clearance: 3.4,
                head: HeadRecess {
                    depth: 2.5,
                    diameter: 6.2,
                },
                nut: NutPocket {
                    width: 5.85,
                    depth: 2.9,
                },
            },
            FastenerSize::M4 => FastenerSpec {
                clearance: 4.5,
                head: HeadRecess {
                    depth: 4.0,
                    diameter: 7.3,
                },
                nut: NutPocket {
                    width: 7.0,
                    depth: 3.6,
                },
            },
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            FastenerSize::M3 => "m3",
            FastenerSize::M4 => "m4",
        }
    }
}

impl fmt::Display for FastenerSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FastenerSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "m3" => Ok(FastenerSize::M3),
            "m4" => Ok(FastenerSize::M4),
            other => Err(format!("unknown fastener size: {}", other)),
        }
    }
}
