// License: MIT
// Copyright © 2026 The one-line-diagram Authors

//! The derived tree that a diagram is computed on.
//!
//! A [`DiagramNode`] is built fresh for every diagram and goes through three
//! stages: it is reconstructed from the graph, its ratings are resolved, and
//! finally it is laid out.  Each stage is completed for a parent before it is
//! started for its children.

use crate::layout::{Extent, Placement, Point, Side};
use crate::ratings::{DisconnectSize, FeederSizing, TransformerProtection};
use crate::voltage::VoltageSpec;
use crate::Equipment;

/// How far a node has been computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Reconstructed,
    RatingResolved,
    LaidOut,
}

/// The protective devices selected for a node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Protection {
    Transformer {
        primary: TransformerProtection,
        secondary: TransformerProtection,
    },
    Disconnect(DisconnectSize),
}

/// The engineering quantities resolved for a node.
#[derive(Clone, Debug, PartialEq)]
pub struct Ratings {
    pub(crate) aic: f64,
    pub(crate) main_rating: f64,
    pub(crate) voltage: VoltageSpec,
    pub(crate) parent_distance_ft: f64,
    pub(crate) feeder: Option<FeederSizing>,
    pub(crate) protection: Option<Protection>,
}

impl Ratings {
    /// The fault current available at the node, in amperes.
    pub fn aic_rating(&self) -> f64 {
        self.aic
    }

    /// The current the node and its feeder are rated for, in amperes.
    pub fn main_rating(&self) -> f64 {
        self.main_rating
    }

    /// The voltage the node hands down to its children.
    pub fn voltage(&self) -> VoltageSpec {
        self.voltage
    }

    /// The length of the feeder from the parent, including the mandatory
    /// extra distance.  Zero for services.
    pub fn parent_distance_ft(&self) -> f64 {
        self.parent_distance_ft
    }

    /// The feeder from the parent.  `None` for services.
    pub fn feeder(&self) -> Option<&FeederSizing> {
        self.feeder.as_ref()
    }

    pub fn feeder_wire_size(&self) -> Option<&'static str> {
        self.feeder.as_ref().map(|f| f.conductor_size())
    }

    /// The number of parallel sets of the feeder from the parent, or `0` for
    /// services.
    pub fn feeder_wire_count(&self) -> u32 {
        self.feeder.as_ref().map_or(0, |f| f.conductor_count())
    }

    pub fn protection(&self) -> Option<&Protection> {
        self.protection.as_ref()
    }
}

/// A node of the derived tree, wrapping one entity.
#[derive(Clone, Debug)]
pub struct DiagramNode {
    pub(crate) equipment: Equipment,
    pub(crate) children: Vec<DiagramNode>,
    pub(crate) ratings: Option<Ratings>,
    pub(crate) subtree_width: Option<f64>,
    pub(crate) extent: Option<Extent>,
    pub(crate) placement: Option<Placement>,
}

impl DiagramNode {
    pub(crate) fn new(equipment: Equipment, children: Vec<DiagramNode>) -> Self {
        Self {
            equipment,
            children,
            ratings: None,
            subtree_width: None,
            extent: None,
            placement: None,
        }
    }

    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    /// The children of the node, in the order they were reconstructed.
    pub fn children(&self) -> &[DiagramNode] {
        &self.children
    }

    pub fn stage(&self) -> Stage {
        if self.placement.is_some() {
            Stage::LaidOut
        } else if self.ratings.is_some() {
            Stage::RatingResolved
        } else {
            Stage::Reconstructed
        }
    }

    pub fn ratings(&self) -> Option<&Ratings> {
        self.ratings.as_ref()
    }

    /// The width of the node and all its descendants, once laid out.
    pub fn subtree_width(&self) -> Option<f64> {
        self.subtree_width
    }

    /// How far the node's subtree reaches to the left and right of its
    /// position, once laid out.
    pub fn horizontal_extent(&self) -> Option<(f64, f64)> {
        self.extent.map(|e| (e.left, e.right))
    }

    pub fn position(&self) -> Option<Point> {
        self.placement.map(|p| p.position)
    }

    /// The point the node's children hang off.
    pub fn end_position(&self) -> Option<Point> {
        self.placement.map(|p| p.end_position)
    }

    /// The side of the parent the node was placed on, for children of branch
    /// parents.
    pub fn side(&self) -> Option<Side> {
        self.placement.and_then(|p| p.side)
    }

    /// Visits the node and all its descendants in pre-order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a DiagramNode, usize)) {
        self.walk_at(0, visit);
    }

    fn walk_at<'a>(&'a self, depth: usize, visit: &mut impl FnMut(&'a DiagramNode, usize)) {
        visit(self, depth);
        for child in &self.children {
            child.walk_at(depth + 1, visit);
        }
    }
}
