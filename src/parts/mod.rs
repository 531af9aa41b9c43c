// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Pressrig Team

//! Part assemblers and the printable-part registry
//!
//! Every physical part of the rig has one pure constructor here. The
//! registry maps stable part names to constructors, so exactly one chosen
//! part is ever built; nothing is selected by assignment order.

mod arm;
mod bracket;
mod carriage;
mod pulley;
mod rail;
mod stopper;

pub use arm::{Arch, Counterweight, IronHolder};
pub use bracket::{bracket, wood_screw, BaseBracket, TopBracket};
pub use carriage::{bearing_cover, carriage, CarriagePlate, BEARING_COVER_STL, CARRIAGE_STL};
pub use pulley::{Pulley, PulleyArms};
pub use rail::{double_side_rail, double_side_rail_with_holes, rail_section, RAIL_XSECTION_DXF};
pub use stopper::stopper;

use crate::ast::Node;
use crate::fasteners::FastenerSize;
use anyhow::Result;
use std::fmt;
use std::str::FromStr;

/// Every printable part of the rig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartId {
    Rail,
    BaseBracket,
    TopBracket,
    PulleyArms,
    Pulley,
    Carriage,
    CarriageBearingCover,
    CarriagePlate,
    IronHolder,
    Counterweight,
    Stopper,
    Arch,
}

impl PartId {
    pub const ALL: [PartId; 12] = [
        PartId::Rail,
        PartId::BaseBracket,
        PartId::TopBracket,
        PartId::PulleyArms,
        PartId::Pulley,
        PartId::Carriage,
        PartId::CarriageBearingCover,
        PartId::CarriagePlate,
        PartId::IronHolder,
        PartId::Counterweight,
        PartId::Stopper,
        PartId::Arch,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PartId::Rail => "rail",
            PartId::BaseBracket => "base-bracket",
            PartId::TopBracket => "top-bracket",
            PartId::PulleyArms => "pulley-arms",
            PartId::Pulley => "pulley",
            PartId::Carriage => "carriage",
            PartId::CarriageBearingCover => "carriage-bearing-cover",
            PartId::CarriagePlate => "carriage-plate",
            PartId::IronHolder => "iron-holder",
            PartId::Counterweight => "counterweight",
            PartId::Stopper => "stopper",
            PartId::Arch => "arch",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PartId::Rail => "double-sided extrusion rail, drilled for m4 mounting bolts",
            PartId::BaseBracket => "bench-mounted rail foot with flange",
            PartId::TopBracket => "top rail bracket with captive press-rod nut",
            PartId::PulleyArms => "twin arms carrying the pulley axle",
            PartId::Pulley => "grooved rope wheel",
            PartId::Carriage => "vendor linear-bearing carriage (imported mesh)",
            PartId::CarriageBearingCover => "vendor carriage bearing cover (imported mesh)",
            PartId::CarriagePlate => "adapter plate between carriage and arms",
            PartId::IronHolder => "arm with split-lock clamp for the iron",
            PartId::Counterweight => "arm with shot cup and press-rod clamp",
            PartId::Stopper => "travel stop clipping onto one rail half",
            PartId::Arch => "rope-tie arch",
        }
    }

    /// How many copies the rig needs printed.
    pub fn copies(self) -> u32 {
        match self {
            PartId::Carriage | PartId::CarriagePlate | PartId::Stopper => 2,
            PartId::CarriageBearingCover => 4,
            _ => 1,
        }
    }

    /// Output file stem, e.g. `2x_carriage_plate`.
    pub fn file_stem(self) -> String {
        format!("{}x_{}", self.copies(), self.name().replace('-', "_"))
    }

    /// Construct the part, oriented for printing.
    pub fn build(self) -> Result<Node> {
        match self {
            PartId::Rail => {
                // On its side: the extrusion profile prints poorly upright.
                Ok(double_side_rail_with_holes(180.0, 10.0, FastenerSize::M4)
                    .rotate(90.0, 0.0, 0.0))
            }
            PartId::BaseBracket => BaseBracket::default().build(),
            PartId::TopBracket => TopBracket::default().build(),
            PartId::PulleyArms => PulleyArms::default().build(),
            PartId::Pulley => Ok(Pulley::default().build()),
            PartId::Carriage => Ok(carriage()),
            PartId::CarriageBearingCover => Ok(bearing_cover()),
            PartId::CarriagePlate => CarriagePlate::default().build(),
            PartId::IronHolder => Ok(IronHolder::default().build()?.rotate(90.0, 0.0, 0.0)),
            PartId::Counterweight => Ok(Counterweight::default().build()?.rotate(90.0, 0.0, 0.0)),
            PartId::Stopper => stopper(FastenerSize::M4),
            PartId::Arch => Arch::default().build(),
        }
    }
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PartId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PartId::ALL
            .iter()
            .copied()
            .find(|p| p.name() == s)
            .ok_or_else(|| format!("unknown part: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_roundtrip() {
        for part in PartId::ALL {
            assert_eq!(part.name().parse::<PartId>().unwrap(), part);
        }
        assert!("flux-capacitor".parse::<PartId>().is_err());
    }

    #[test]
    fn test_print_quantities() {
        assert_eq!(PartId::CarriageBearingCover.copies(), 4);
        assert_eq!(PartId::CarriagePlate.copies(), 2);
        assert_eq!(PartId::Rail.copies(), 1);
    }

    #[test]
    fn test_file_stems() {
        assert_eq!(PartId::CarriagePlate.file_stem(), "2x_carriage_plate");
        assert_eq!(PartId::TopBracket.file_stem(), "1x_top_bracket");
    }
}
