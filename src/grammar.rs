// License: MIT
// Copyright © 2026 The one-line-diagram Authors

//! The per-kind behaviour table.
//!
//! Every kind-specific decision made while reconstructing, rating and laying
//! out a diagram is looked up here: which kinds may follow a kind, how wide a
//! kind is drawn, how its children are arranged, where its outgoing feeder
//! starts, and where the fault current at its children comes from.

use crate::entity_kind::EntityKind;
use crate::layout::Point;

/// How the children of a node are arranged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChildLayout {
    /// Left to right below the parent.
    Flow,
    /// Alternating right and left of the parent, like breakers in a panel.
    Branch,
}

/// Where the available fault current at a node's children comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaultSource {
    /// The parent's fault current, reduced by the feeder impedance.
    Upstream,
    /// The parent itself, which is a new source.
    Transformer,
}

/// The static description of one entity kind.
#[derive(Clone, Copy, Debug)]
pub struct KindProfile {
    pub kind: EntityKind,
    /// The kinds that may be fed by this kind, in the order they are searched.
    pub successors: &'static [EntityKind],
    pub intrinsic_width: f64,
    pub child_layout: ChildLayout,
    /// The offset from a node's position to the point its children hang off.
    pub end_offset: Point,
    pub fault_source: FaultSource,
}

use ChildLayout::{Branch, Flow};
use EntityKind::*;
use FaultSource::Upstream;

const PROFILES: [KindProfile; 9] = [
    KindProfile {
        kind: Service,
        successors: &[Meter, MainBreaker],
        intrinsic_width: 2.5,
        child_layout: Flow,
        end_offset: Point::new(0.0, -3.0),
        fault_source: Upstream,
    },
    KindProfile {
        kind: Meter,
        successors: &[MainBreaker],
        intrinsic_width: 0.0,
        child_layout: Flow,
        end_offset: Point::new(0.0, -1.5),
        fault_source: Upstream,
    },
    KindProfile {
        kind: MainBreaker,
        successors: &[DistributionBus],
        intrinsic_width: 0.0,
        child_layout: Flow,
        end_offset: Point::new(0.0, -1.0),
        fault_source: Upstream,
    },
    KindProfile {
        kind: DistributionBus,
        successors: &[Meter, DistributionBreaker],
        intrinsic_width: 0.0,
        child_layout: Flow,
        end_offset: Point::new(0.0, 0.0),
        fault_source: Upstream,
    },
    KindProfile {
        kind: DistributionBreaker,
        successors: &[Panel, Disconnect, Transformer],
        intrinsic_width: 0.0,
        child_layout: Flow,
        end_offset: Point::new(0.0, -1.0),
        fault_source: Upstream,
    },
    KindProfile {
        kind: Panel,
        successors: &[PanelBreaker, Panel, Disconnect, Transformer],
        intrinsic_width: 2.0,
        child_layout: Branch,
        end_offset: Point::new(0.0, -2.0),
        fault_source: Upstream,
    },
    KindProfile {
        kind: PanelBreaker,
        successors: &[Panel, Disconnect, Transformer],
        intrinsic_width: 0.0,
        child_layout: Flow,
        end_offset: Point::new(0.0, -1.0),
        fault_source: Upstream,
    },
    KindProfile {
        kind: Disconnect,
        successors: &[Panel, Disconnect, Transformer],
        intrinsic_width: 0.0,
        child_layout: Flow,
        end_offset: Point::new(0.0, -1.5),
        fault_source: Upstream,
    },
    KindProfile {
        kind: Transformer,
        successors: &[Panel, Disconnect],
        intrinsic_width: 2.0,
        child_layout: Flow,
        end_offset: Point::new(0.0, -2.0),
        fault_source: FaultSource::Transformer,
    },
];

/// Returns the profile of the given kind.
pub fn profile(kind: EntityKind) -> &'static KindProfile {
    &PROFILES[kind.index()]
}

/// Returns `true` if an entity of kind `child` may be fed by one of kind
/// `parent`.
pub fn permits(parent: EntityKind, child: EntityKind) -> bool {
    profile(parent).successors.contains(&child)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_are_indexed_by_kind() {
        for kind in EntityKind::ALL {
            assert_eq!(profile(kind).kind, kind);
        }
    }

    #[test]
    fn test_grammar() {
        assert!(permits(Service, Meter));
        assert!(permits(Service, MainBreaker));
        assert!(!permits(Service, Panel));
        assert!(permits(DistributionBus, Meter));
        assert!(permits(Panel, Panel));
        assert!(permits(Disconnect, Disconnect));
        assert!(!permits(Transformer, Transformer));
        assert!(!permits(Transformer, PanelBreaker));

        // Nothing ever feeds a service.
        for kind in EntityKind::ALL {
            assert!(!permits(kind, Service), "{kind}");
        }
    }

    #[test]
    fn test_only_panels_branch() {
        for kind in EntityKind::ALL {
            let expected = if kind == Panel { Branch } else { Flow };
            assert_eq!(profile(kind).child_layout, expected, "{kind}");
        }
        assert_eq!(profile(Transformer).fault_source, FaultSource::Transformer);
    }
}
