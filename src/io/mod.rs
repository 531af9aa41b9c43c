// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Pressrig Team

//! SCAD emission, asset checks and renderer invocation

pub mod assets;
pub mod render;
pub mod scad;

pub use assets::{collect_assets, verify_assets};
pub use render::Renderer;
pub use scad::{scad_source, write_scad_file, DEFAULT_SEGMENTS};
