// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Pressrig Team

//! Imported asset tracking
//!
//! Parts reference a handful of external files (the rail cross-section DXF
//! and two vendor meshes) by bare file name. Before a render is attempted
//! the references are checked against the asset directory; a missing file
//! is a hard error naming the asset, with no fallback geometry.

use crate::ast::Node;
use anyhow::{bail, Result};
use std::path::Path;

/// All asset file names referenced by the tree, sorted and deduplicated.
pub fn collect_assets(node: &Node) -> Vec<String> {
    let mut paths = Vec::new();
    node.for_each(&mut |n| match n {
        Node::ImportMesh { path } | Node::ExtrudeDxf { path, .. } => paths.push(path.clone()),
        _ => {}
    });
    paths.sort();
    paths.dedup();
    paths
}

/// Fail if any referenced asset is missing from `asset_dir`.
pub fn verify_assets(node: &Node, asset_dir: impl AsRef<Path>) -> Result<()> {
    let asset_dir = asset_dir.as_ref();
    for asset in collect_assets(node) {
        let path = asset_dir.join(&asset);
        if !path.exists() {
            bail!("missing asset {:?} (looked in {:?})", asset, asset_dir);
        }
    }
    Ok(())
}
