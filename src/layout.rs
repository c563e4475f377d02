// License: MIT
// Copyright © 2026 The one-line-diagram Authors

//! The layout engine.
//!
//! Layout runs in two passes over a tree whose ratings are resolved: subtree
//! widths and horizontal extents are aggregated from the leaves up, and then
//! positions are assigned from the root down.

mod position;
mod width;

use crate::config::LayoutConfig;
use crate::tree::DiagramNode;
use crate::{DiagramErrors, Error};

/// A point in drawing units.  `y` grows upwards, so children are placed at
/// lower `y` values than their parents.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// The side of a branch parent a child is placed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// How far a subtree reaches to the left and right of its root's x.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Extent {
    pub(crate) left: f64,
    pub(crate) right: f64,
}

impl Extent {
    pub(crate) const fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    pub(crate) fn span(&self) -> f64 {
        self.left + self.right
    }

    /// Grows the extent to include `[from, to]`.
    pub(crate) fn cover(&mut self, from: f64, to: f64) {
        self.left = self.left.max(-from);
        self.right = self.right.max(to);
    }
}

/// Where a node was placed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Placement {
    pub(crate) position: Point,
    pub(crate) end_position: Point,
    pub(crate) side: Option<Side>,
}

/// Lays out the tree below `root`, which is placed at the configured origin.
///
/// Nothing is placed if any width or spacing is invalid.
pub(crate) fn lay_out(root: &mut DiagramNode, config: &LayoutConfig, errors: &mut DiagramErrors) {
    let spacings = [
        ("y_drop", config.y_drop, config.y_drop > 0.0),
        ("branch_row_spacing", config.branch_row_spacing, config.branch_row_spacing >= 0.0),
        ("branch_offset", config.branch_offset, config.branch_offset >= 0.0),
    ];
    let mut bad_spacing = false;
    for (name, value, valid) in spacings {
        if !valid || !value.is_finite() {
            let err = Error::layout(format!("Layout spacing {name} of {value} is invalid."));
            tracing::error!("{err}");
            errors.push(err);
            bad_spacing = true;
        }
    }
    if bad_spacing {
        return;
    }

    let mut invalid = vec![];
    let total = width::aggregate_widths(root, config, &mut invalid);

    if !invalid.is_empty() {
        for kind in invalid {
            let err = Error::layout(format!(
                "Intrinsic width of {} for {kind} is invalid.",
                config.intrinsic_width(kind)
            ));
            tracing::error!("{err}");
            errors.push(err);
        }
        return;
    }
    if total <= 0.0 {
        let err = Error::layout(format!(
            "The diagram of {} has a width of {total}.",
            crate::entity::describe(&root.equipment)
        ));
        tracing::error!("{err}");
        errors.push(err);
        return;
    }

    position::place(root, config.origin, None, config);
}
