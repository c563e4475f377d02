// License: MIT
// Copyright © 2026 The one-line-diagram Authors

//! The electrical entities of a project, the links between them, and the
//! `Entity` trait through which the rest of the library looks at them.

use crate::entity_kind::{EntityKind, Status};
use crate::voltage::{Phase, VoltageSpec};

/// The fields shared by all entities.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityInfo {
    /// The catalog identity of the entity.
    pub id: u64,
    /// The identity of the entity's endpoint in the link table.
    pub node_id: u64,
    pub name: String,
    pub status: Status,
    /// The length of the feeder from the upstream entity, in feet.
    pub parent_distance_ft: f64,
}

impl EntityInfo {
    /// Creates the shared fields of a new single-port entity.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            node_id: id,
            name: name.into(),
            status: Status::New,
            parent_distance_ft: 0.0,
        }
    }

    pub fn with_node_id(mut self, node_id: u64) -> Self {
        self.node_id = node_id;
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_parent_distance(mut self, feet: f64) -> Self {
        self.parent_distance_ft = feet;
        self
    }
}

/// The utility service entrance.
#[derive(Clone, Debug, PartialEq)]
pub struct Service {
    pub info: EntityInfo,
    pub amp_rating: f64,
    pub voltage: VoltageSpec,
    pub is_multi_meter: bool,
    /// The available fault current at the service, as given by the utility.
    pub aic_rating: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Meter {
    pub info: EntityInfo,
    pub has_cts: bool,
    /// An empty meter socket.
    pub is_space: bool,
}

/// A circuit breaker.  Main, distribution and panel breakers share this type.
#[derive(Clone, Debug, PartialEq)]
pub struct Breaker {
    pub info: EntityInfo,
    pub amp_rating: f64,
    pub num_poles: u8,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DistributionBus {
    pub info: EntityInfo,
    pub amp_rating: f64,
    pub line_voltage: f64,
    pub phase: Phase,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    pub info: EntityInfo,
    pub main_amp_rating: f64,
    /// Main-lug-only panels have no main breaker.
    pub is_mlo: bool,
    pub voltage: Option<VoltageSpec>,
    pub bus_size: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Disconnect {
    pub info: EntityInfo,
    /// Amp switch (fuse) size, if already chosen.
    pub as_size: Option<f64>,
    /// Amp frame size, if already chosen.
    pub af_size: Option<f64>,
    pub num_poles: u8,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Transformer {
    pub info: EntityInfo,
    pub kva: f64,
    pub primary: VoltageSpec,
    pub secondary: VoltageSpec,
}

/// An entity of any kind.
#[derive(Clone, Debug, PartialEq)]
pub enum Equipment {
    Service(Service),
    Meter(Meter),
    MainBreaker(Breaker),
    DistributionBus(DistributionBus),
    DistributionBreaker(Breaker),
    Panel(Panel),
    PanelBreaker(Breaker),
    Disconnect(Disconnect),
    Transformer(Transformer),
}

impl Equipment {
    pub fn info(&self) -> &EntityInfo {
        match self {
            Equipment::Service(e) => &e.info,
            Equipment::Meter(e) => &e.info,
            Equipment::MainBreaker(e)
            | Equipment::DistributionBreaker(e)
            | Equipment::PanelBreaker(e) => &e.info,
            Equipment::DistributionBus(e) => &e.info,
            Equipment::Panel(e) => &e.info,
            Equipment::Disconnect(e) => &e.info,
            Equipment::Transformer(e) => &e.info,
        }
    }

    /// The voltage on the entity's line side, given the voltage handed down
    /// by its parent.  A bus that matches the upstream line voltage and phase
    /// keeps the upstream neutral.
    pub(crate) fn line_voltage(&self, upstream: VoltageSpec) -> VoltageSpec {
        match self {
            Equipment::Service(s) => s.voltage,
            Equipment::DistributionBus(b) => {
                if b.line_voltage == upstream.line_to_line() && b.phase == upstream.phase() {
                    upstream
                } else {
                    VoltageSpec::line(b.line_voltage, b.phase)
                }
            }
            Equipment::Panel(p) => p.voltage.unwrap_or(upstream),
            Equipment::Transformer(t) => t.primary,
            Equipment::Meter(_)
            | Equipment::MainBreaker(_)
            | Equipment::DistributionBreaker(_)
            | Equipment::PanelBreaker(_)
            | Equipment::Disconnect(_) => upstream,
        }
    }

    /// The voltage the entity hands down to its children, given the voltage
    /// on its line side.
    pub(crate) fn output_voltage(&self, line_side: VoltageSpec) -> VoltageSpec {
        match self {
            Equipment::Transformer(t) => t.secondary,
            _ => line_side,
        }
    }
}

/**
This trait is implemented by everything that can be placed in a one-line
diagram.

It is the view the graph, the rating propagator and the layout engine have on
an entity, independent of its kind-specific fields.
*/
pub trait Entity {
    /// Returns the catalog id of the entity.
    fn id(&self) -> u64;
    /// Returns the id of the entity's endpoint in the link table.
    fn node_id(&self) -> u64;
    /// Returns the kind of the entity.
    fn kind(&self) -> EntityKind;
    fn name(&self) -> &str;
    fn status(&self) -> Status;
    /// Returns the length of the feeder from the upstream entity, in feet.
    fn parent_distance_ft(&self) -> f64;
}

impl Entity for Equipment {
    fn id(&self) -> u64 {
        self.info().id
    }

    fn node_id(&self) -> u64 {
        self.info().node_id
    }

    fn kind(&self) -> EntityKind {
        match self {
            Equipment::Service(_) => EntityKind::Service,
            Equipment::Meter(_) => EntityKind::Meter,
            Equipment::MainBreaker(_) => EntityKind::MainBreaker,
            Equipment::DistributionBus(_) => EntityKind::DistributionBus,
            Equipment::DistributionBreaker(_) => EntityKind::DistributionBreaker,
            Equipment::Panel(_) => EntityKind::Panel,
            Equipment::PanelBreaker(_) => EntityKind::PanelBreaker,
            Equipment::Disconnect(_) => EntityKind::Disconnect,
            Equipment::Transformer(_) => EntityKind::Transformer,
        }
    }

    fn name(&self) -> &str {
        &self.info().name
    }

    fn status(&self) -> Status {
        self.info().status
    }

    fn parent_distance_ft(&self) -> f64 {
        self.info().parent_distance_ft
    }
}

/// Formats an entity for use in messages, e.g. `Panel:4`.
pub(crate) fn describe(entity: &(impl Entity + ?Sized)) -> String {
    format!("{}:{}", entity.kind(), entity.id())
}

/// Asserts that the output port of one entity feeds the input port of
/// another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Link {
    pub output_node_id: u64,
    pub input_node_id: u64,
}

impl Link {
    pub fn new(output_node_id: u64, input_node_id: u64) -> Self {
        Self {
            output_node_id,
            input_node_id,
        }
    }
}

/// The flat entity lists and the link table of one project, as supplied by
/// the persistence layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    pub services: Vec<Service>,
    pub meters: Vec<Meter>,
    pub main_breakers: Vec<Breaker>,
    pub distribution_buses: Vec<DistributionBus>,
    pub distribution_breakers: Vec<Breaker>,
    pub panels: Vec<Panel>,
    pub panel_breakers: Vec<Breaker>,
    pub disconnects: Vec<Disconnect>,
    pub transformers: Vec<Transformer>,
    pub links: Vec<Link>,
}

impl Catalog {
    /// Consumes the catalog and returns all its entities, kind by kind in
    /// [`EntityKind::ALL`] order, together with the link table.
    pub(crate) fn into_parts(self) -> (Vec<Equipment>, Vec<Link>) {
        let entities = std::iter::empty()
            .chain(self.services.into_iter().map(Equipment::Service))
            .chain(self.meters.into_iter().map(Equipment::Meter))
            .chain(self.main_breakers.into_iter().map(Equipment::MainBreaker))
            .chain(
                self.distribution_buses
                    .into_iter()
                    .map(Equipment::DistributionBus),
            )
            .chain(
                self.distribution_breakers
                    .into_iter()
                    .map(Equipment::DistributionBreaker),
            )
            .chain(self.panels.into_iter().map(Equipment::Panel))
            .chain(self.panel_breakers.into_iter().map(Equipment::PanelBreaker))
            .chain(self.disconnects.into_iter().map(Equipment::Disconnect))
            .chain(self.transformers.into_iter().map(Equipment::Transformer))
            .collect();
        (entities, self.links)
    }
}
