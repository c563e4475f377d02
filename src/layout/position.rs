// License: MIT
// Copyright © 2026 The one-line-diagram Authors

//! The pre-order pass of the layout engine.

use super::{Placement, Point, Side};
use crate::config::LayoutConfig;
use crate::entity::describe;
use crate::grammar::{self, ChildLayout};
use crate::tree::DiagramNode;
use crate::Entity;

/// Places `node` at `position` and its descendants relative to it, parents
/// before their children.  Extents must already be set.
///
/// Every child subtree gets a horizontal slot as wide as its extent, so
/// sibling subtrees never overlap, however far a branch parent's left
/// children reach.
pub(super) fn place(
    node: &mut DiagramNode,
    position: Point,
    side: Option<Side>,
    config: &LayoutConfig,
) {
    let profile = grammar::profile(node.equipment.kind());
    let end = position + profile.end_offset;
    node.placement = Some(Placement {
        position,
        end_position: end,
        side,
    });
    tracing::debug!(
        "Placed {} at ({}, {}).",
        describe(&node.equipment),
        position.x,
        position.y
    );

    match profile.child_layout {
        ChildLayout::Flow => {
            let y = end.y - config.y_drop;
            // The first child hangs straight below the parent and the rest
            // are packed to its right.
            let mut cursor = end.x
                - node
                    .children
                    .first()
                    .and_then(|c| c.extent)
                    .unwrap_or_default()
                    .left;
            for child in &mut node.children {
                let extent = child.extent.unwrap_or_default();
                place(child, Point::new(cursor + extent.left, y), None, config);
                cursor += extent.span();
            }
        }
        ChildLayout::Branch => {
            let (mut right, mut left) = (0.0, 0.0);
            for (i, child) in node.children.iter_mut().enumerate() {
                let extent = child.extent.unwrap_or_default();
                let row = (i / 2) as f64;
                let y = end.y - config.y_drop - row * config.branch_row_spacing;
                if i % 2 == 0 {
                    let x = end.x + config.branch_offset + right + extent.left;
                    right += extent.span();
                    place(child, Point::new(x, y), Some(Side::Right), config);
                } else {
                    let x = end.x - config.branch_offset - left - extent.right;
                    left += extent.span();
                    place(child, Point::new(x, y), Some(Side::Left), config);
                }
            }
        }
    }
}
