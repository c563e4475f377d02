// License: MIT
// Copyright © 2026 The one-line-diagram Authors

//! The post-order pass of the layout engine.

use super::Extent;
use crate::config::LayoutConfig;
use crate::grammar::{self, ChildLayout};
use crate::tree::DiagramNode;
use crate::{Entity, EntityKind};

/// Sets the subtree width and extent of every node below and including
/// `node`, children before their parent, and returns the width of `node`.
///
/// Kinds with a negative or non-finite intrinsic width are added to `invalid`
/// and counted as zero wide.
pub(super) fn aggregate_widths(
    node: &mut DiagramNode,
    config: &LayoutConfig,
    invalid: &mut Vec<EntityKind>,
) -> f64 {
    let kind = node.equipment.kind();
    let mut intrinsic = config.intrinsic_width(kind);
    if !intrinsic.is_finite() || intrinsic < 0.0 {
        if !invalid.contains(&kind) {
            invalid.push(kind);
        }
        intrinsic = 0.0;
    }

    let mut width = intrinsic;
    for child in &mut node.children {
        width += aggregate_widths(child, config, invalid);
    }
    node.subtree_width = Some(width);
    node.extent = Some(extent(node, intrinsic, config));
    width
}

/// The horizontal reach of `node`'s subtree, from the extents of its
/// children placed the way `position::place` places them.
fn extent(node: &DiagramNode, intrinsic: f64, config: &LayoutConfig) -> Extent {
    let profile = grammar::profile(node.equipment.kind());
    let dx = profile.end_offset.x;
    let spans = node
        .children
        .iter()
        .map(|child| child.extent.unwrap_or_default().span());

    let mut extent = Extent::new(0.0, intrinsic);
    match profile.child_layout {
        ChildLayout::Flow => {
            if let Some(first) = node.children.first() {
                let from = dx - first.extent.unwrap_or_default().left;
                extent.cover(from, from + spans.sum::<f64>());
            }
        }
        ChildLayout::Branch => {
            let (mut right, mut left) = (0.0, 0.0);
            for (i, span) in spans.enumerate() {
                if i % 2 == 0 {
                    right += span;
                } else {
                    left += span;
                }
            }
            let offset = config.branch_offset;
            if !node.children.is_empty() {
                extent.cover(dx + offset, dx + offset + right);
            }
            if node.children.len() > 1 {
                extent.cover(dx - offset - left, dx - offset);
            }
        }
    }
    extent
}
