// License: MIT
// Copyright © 2026 The one-line-diagram Authors

//! This module contains the configuration options for generating one-line
//! diagrams.

use crate::entity_kind::EntityKind;
use crate::grammar;
use crate::layout::Point;

/// Configuration options for the `DistributionGraph` and the diagrams
/// generated from it.
#[derive(Clone, Debug)]
pub struct DiagramConfig {
    /// Whether to allow entities in the catalog that are not reachable from
    /// any service.
    pub allow_unconnected_entities: bool,

    /// The largest voltage drop accepted on a feeder, in percent of the
    /// nominal voltage.
    pub max_voltage_drop_percent: f64,

    /// Added to every feeder length before sizing, in feet, to account for
    /// the conductor run inside the equipment on both ends.
    pub mandatory_extra_distance_ft: f64,

    /// The per-unit impedance assumed for all transformers.
    pub transformer_impedance: f64,

    /// The largest number of parallel conductor sets a feeder may use.
    pub max_parallel_sets: u32,

    pub layout: LayoutConfig,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            allow_unconnected_entities: false,
            max_voltage_drop_percent: 3.0,
            mandatory_extra_distance_ft: 10.0,
            transformer_impedance: 0.03,
            max_parallel_sets: 8,
            layout: LayoutConfig::default(),
        }
    }
}

/// Configuration options for the layout engine, in drawing units.
#[derive(Clone, Debug)]
pub struct LayoutConfig {
    /// Where the service of a diagram is placed.
    pub origin: Point,

    /// The vertical distance between a parent's end point and its children.
    pub y_drop: f64,

    /// The vertical distance between consecutive rows of branch children.
    pub branch_row_spacing: f64,

    /// The horizontal gap between a branch parent and its nearest children.
    pub branch_offset: f64,

    /// Widths that replace the static per-kind intrinsic widths.
    pub intrinsic_width_overrides: Vec<(EntityKind, f64)>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            origin: Point::new(0.0, 0.0),
            y_drop: 1.0,
            branch_row_spacing: 1.0,
            branch_offset: 1.0,
            intrinsic_width_overrides: Vec::new(),
        }
    }
}

impl LayoutConfig {
    /// Returns the intrinsic width of the given kind, taking overrides into
    /// account.
    pub fn intrinsic_width(&self, kind: EntityKind) -> f64 {
        self.intrinsic_width_overrides
            .iter()
            .rev()
            .find(|(k, _)| *k == kind)
            .map(|(_, width)| *width)
            .unwrap_or_else(|| grammar::profile(kind).intrinsic_width)
    }
}
