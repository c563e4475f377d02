// License: MIT
// Copyright © 2026 The one-line-diagram Authors

//! This module defines the `EntityKind` enum, which represents the kind of an
//! electrical entity, and the `Status` enum.

use crate::entity::Entity;
use std::fmt::Display;

/// Represents the kind of an electrical entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Service,
    Meter,
    MainBreaker,
    DistributionBus,
    DistributionBreaker,
    Panel,
    PanelBreaker,
    Disconnect,
    Transformer,
}

impl EntityKind {
    /// All entity kinds, in the order in which the catalog lists them.
    pub const ALL: [EntityKind; 9] = [
        EntityKind::Service,
        EntityKind::Meter,
        EntityKind::MainBreaker,
        EntityKind::DistributionBus,
        EntityKind::DistributionBreaker,
        EntityKind::Panel,
        EntityKind::PanelBreaker,
        EntityKind::Disconnect,
        EntityKind::Transformer,
    ];

    /// Returns `true` for kinds that expose more than one logical port, and
    /// whose `node_id` may therefore differ from their `id`.
    pub fn has_multiple_ports(&self) -> bool {
        matches!(self, EntityKind::DistributionBus | EntityKind::Panel)
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Service => write!(f, "Service"),
            EntityKind::Meter => write!(f, "Meter"),
            EntityKind::MainBreaker => write!(f, "MainBreaker"),
            EntityKind::DistributionBus => write!(f, "DistributionBus"),
            EntityKind::DistributionBreaker => write!(f, "DistributionBreaker"),
            EntityKind::Panel => write!(f, "Panel"),
            EntityKind::PanelBreaker => write!(f, "PanelBreaker"),
            EntityKind::Disconnect => write!(f, "Disconnect"),
            EntityKind::Transformer => write!(f, "Transformer"),
        }
    }
}

/// The construction status of an entity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    New,
    Existing,
    Relocated,
}

impl Status {
    /// The prefix used in drawing annotations, e.g. `(N)` for new work.
    pub fn prefix(&self) -> &'static str {
        match self {
            Status::New => "(N)",
            Status::Existing => "(E)",
            Status::Relocated => "(R)",
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::New => write!(f, "New"),
            Status::Existing => write!(f, "Existing"),
            Status::Relocated => write!(f, "Relocated"),
        }
    }
}

/// Predicates for checking the kind of an `Entity`.
pub(crate) trait KindPredicates: Entity {
    fn is_service(&self) -> bool {
        self.kind() == EntityKind::Service
    }

    fn is_meter(&self) -> bool {
        self.kind() == EntityKind::Meter
    }
}

/// Implement the `KindPredicates` trait for all types that implement the
/// `Entity` trait.
impl<T: Entity + ?Sized> KindPredicates for T {}
