// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Pressrig Team

//! Parametric solid-composition toolkit
//!
//! Reusable shape generators the part assemblers compose: chamfered hulls,
//! hex prisms for nut pockets, fastener recesses, and the split-lock clamp.
//! Recess generators produce subtraction geometry only; the caller positions
//! them and cuts them from a body.

mod chamfer;
mod hex;
mod recess;
mod split_lock;

pub use chamfer::{ChamferHull, Sides};
pub use hex::{hex_prism, HEX_FILLET};
pub use recess::{
    clearance_hole, countersunk_recess, countersunk_screw, head_recess, nut_attachment,
    nut_recess, nut_recess_with_depth, nut_slide,
};
pub use split_lock::{BoreShape, SplitLock};

use thiserror::Error;

/// Construction-time parameter errors.
///
/// These indicate a mistake in the calling code, not a runtime condition;
/// nothing catches or retries them.
#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("dimension must be positive: {name} = {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("hex fillet radius {fillet} must be smaller than half the width {width}")]
    FilletTooLarge { fillet: f64, width: f64 },

    #[error(
        "split-lock gap {gap} must lie strictly between 0 and the collar wall thickness \
         {thickness}, or the two halves separate completely"
    )]
    DegenerateGap { gap: f64, thickness: f64 },
}

pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<(), FeatureError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(FeatureError::NonPositive { name, value })
    }
}
