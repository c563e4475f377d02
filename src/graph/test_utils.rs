// License: MIT
// Copyright © 2026 The one-line-diagram Authors

//! This module is only compiled when running unit tests and contains the
//! `CatalogBuilder`, which can declaratively build complex catalogs for use in
//! tests.

use crate::entity::{
    Breaker, Disconnect, DistributionBus, EntityInfo, Meter, Panel, Service, Transformer,
};
use crate::{Catalog, DiagramConfig, DistributionGraph, Error, Link, Phase, VoltageSpec};

/// Represents an entity added to the `CatalogBuilder`.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug)]
pub(crate) struct EntityHandle {
    id: u64,
    node_id: u64,
}

impl EntityHandle {
    /// Returns the catalog id of the entity.
    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    /// Returns the link endpoint of the entity.
    pub(crate) fn node_id(&self) -> u64 {
        self.node_id
    }
}

fn voltage(spec: &str) -> VoltageSpec {
    spec.parse().unwrap()
}

/// A builder for creating catalogs easily, for use in tests.
///
/// Ids are handed out in the order in which entities are added, starting
/// from 0.
pub(crate) struct CatalogBuilder {
    catalog: Catalog,
    next_id: u64,
}

impl CatalogBuilder {
    /// Creates a new `CatalogBuilder`.
    pub(crate) fn new() -> Self {
        CatalogBuilder {
            catalog: Catalog::default(),
            next_id: 0,
        }
    }

    fn info(&mut self, prefix: &str) -> EntityInfo {
        let id = self.next_id;
        self.next_id += 1;
        EntityInfo::new(id, format!("{prefix}-{id}"))
    }

    fn handle(info: &EntityInfo) -> EntityHandle {
        EntityHandle {
            id: info.id,
            node_id: info.node_id,
        }
    }

    /// Adds a service and returns its handle.
    pub(crate) fn service(&mut self, amp_rating: f64, spec: &str, aic: f64) -> EntityHandle {
        let info = self.info("SVC");
        let handle = Self::handle(&info);
        self.catalog.services.push(Service {
            info,
            amp_rating,
            voltage: voltage(spec),
            is_multi_meter: false,
            aic_rating: aic,
        });
        handle
    }

    /// Adds a meter and returns its handle.
    pub(crate) fn meter(&mut self) -> EntityHandle {
        let info = self.info("M");
        let handle = Self::handle(&info);
        self.catalog.meters.push(Meter {
            info,
            has_cts: false,
            is_space: false,
        });
        handle
    }

    fn breaker(&mut self, prefix: &str, amp_rating: f64) -> Breaker {
        Breaker {
            info: self.info(prefix),
            amp_rating,
            num_poles: 3,
        }
    }

    /// Adds a main breaker and returns its handle.
    pub(crate) fn main_breaker(&mut self, amp_rating: f64) -> EntityHandle {
        let breaker = self.breaker("MB", amp_rating);
        let handle = Self::handle(&breaker.info);
        self.catalog.main_breakers.push(breaker);
        handle
    }

    /// Adds a distribution bus and returns its handle.
    pub(crate) fn bus(&mut self, amp_rating: f64, line_voltage: f64, phase: u8) -> EntityHandle {
        let info = self.info("BUS");
        let handle = Self::handle(&info);
        self.catalog.distribution_buses.push(DistributionBus {
            info,
            amp_rating,
            line_voltage,
            phase: Phase::try_from(phase).unwrap(),
        });
        handle
    }

    /// Adds a distribution breaker and returns its handle.
    pub(crate) fn distribution_breaker(&mut self, amp_rating: f64) -> EntityHandle {
        let breaker = self.breaker("DB", amp_rating);
        let handle = Self::handle(&breaker.info);
        self.catalog.distribution_breakers.push(breaker);
        handle
    }

    /// Adds a panel with a main breaker and returns its handle.
    pub(crate) fn panel(&mut self, main_amp_rating: f64, spec: Option<&str>) -> EntityHandle {
        let id = self.next_id;
        self.panel_with_node_id(main_amp_rating, spec, id)
    }

    /// Adds a panel whose link endpoint differs from its id.
    pub(crate) fn panel_with_node_id(
        &mut self,
        main_amp_rating: f64,
        spec: Option<&str>,
        node_id: u64,
    ) -> EntityHandle {
        let info = self.info("LP").with_node_id(node_id);
        let handle = Self::handle(&info);
        self.catalog.panels.push(Panel {
            info,
            main_amp_rating,
            is_mlo: false,
            voltage: spec.map(voltage),
            bus_size: main_amp_rating,
        });
        handle
    }

    /// Adds a panel breaker and returns its handle.
    pub(crate) fn panel_breaker(&mut self, amp_rating: f64) -> EntityHandle {
        let breaker = self.breaker("PB", amp_rating);
        let handle = Self::handle(&breaker.info);
        self.catalog.panel_breakers.push(breaker);
        handle
    }

    /// Adds a disconnect without a chosen size and returns its handle.
    pub(crate) fn disconnect(&mut self) -> EntityHandle {
        let info = self.info("DS");
        let handle = Self::handle(&info);
        self.catalog.disconnects.push(Disconnect {
            info,
            as_size: None,
            af_size: None,
            num_poles: 3,
        });
        handle
    }

    /// Adds a transformer and returns its handle.
    pub(crate) fn transformer(&mut self, kva: f64, primary: &str, secondary: &str) -> EntityHandle {
        let info = self.info("T");
        let handle = Self::handle(&info);
        self.catalog.transformers.push(Transformer {
            info,
            kva,
            primary: voltage(primary),
            secondary: voltage(secondary),
        });
        handle
    }

    /// Returns the shared fields of the entity with the given handle.
    pub(crate) fn info_mut(&mut self, handle: EntityHandle) -> &mut EntityInfo {
        let c = &mut self.catalog;
        std::iter::empty()
            .chain(c.services.iter_mut().map(|e| &mut e.info))
            .chain(c.meters.iter_mut().map(|e| &mut e.info))
            .chain(c.main_breakers.iter_mut().map(|e| &mut e.info))
            .chain(c.distribution_buses.iter_mut().map(|e| &mut e.info))
            .chain(c.distribution_breakers.iter_mut().map(|e| &mut e.info))
            .chain(c.panels.iter_mut().map(|e| &mut e.info))
            .chain(c.panel_breakers.iter_mut().map(|e| &mut e.info))
            .chain(c.disconnects.iter_mut().map(|e| &mut e.info))
            .chain(c.transformers.iter_mut().map(|e| &mut e.info))
            .find(|info| info.id == handle.id)
            .unwrap()
    }

    /// Sets the feeder length between the entity and its parent.
    pub(crate) fn distance(&mut self, handle: EntityHandle, feet: f64) -> &mut Self {
        self.info_mut(handle).parent_distance_ft = feet;
        self
    }

    /// Connects two entities.
    pub(crate) fn connect(&mut self, from: EntityHandle, to: EntityHandle) -> &mut Self {
        self.link(from.node_id, to.node_id)
    }

    /// Adds a raw link between two node ids.
    pub(crate) fn link(&mut self, output_node_id: u64, input_node_id: u64) -> &mut Self {
        self.catalog
            .links
            .push(Link::new(output_node_id, input_node_id));
        self
    }

    /// Returns a copy of the catalog built so far, for tests that need to
    /// tamper with it.
    pub(crate) fn catalog(&self) -> Catalog {
        self.catalog.clone()
    }

    /// Builds and returns the graph from the entities and links added to the
    /// builder.
    pub(crate) fn build(&self, config: Option<DiagramConfig>) -> Result<DistributionGraph, Error> {
        DistributionGraph::try_new(self.catalog.clone(), config.unwrap_or_default())
    }
}
