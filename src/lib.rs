// License: MIT
// Copyright © 2026 The one-line-diagram Authors

/*!
# One-Line Diagram

This is a library for generating one-line diagrams of electrical power
distribution systems: trees of services, meters, breakers, buses, panels,
disconnects and transformers, annotated with the available fault current and
the feeder sizing of every entity, and laid out for rendering.

## The catalog

A project is stored as a flat [`Catalog`] of entities, one list per kind, and
a list of [`Link`]s between entity endpoints.  The
[`try_new`][DistributionGraph::try_new] method of [`DistributionGraph`] loads
a catalog and checks it against the data model, including checking that:

- Ids and link endpoints are unique.
- Links point to existing entities and are permitted by the topology grammar.
- No entity has more than one parent.
- All entities are reachable from a service.

Problems found in the catalog don't fail the graph creation.  The offending
entities and links are left out, and the problems are kept as
[`issues`][DistributionGraph::issues].

## Diagram generation

[`one_line_diagram`][DistributionGraph::one_line_diagram] generates the
diagram of one service in three steps:

1. The tree below the service is reconstructed from the links.
2. Ratings are resolved from the service down: the feeder to every entity is
   sized, and the available fault current is reduced by the feeder's
   impedance, or recalculated below transformers.
3. Subtree widths are aggregated from the leaves up, and positions assigned
   from the service down.

The errors of all three steps are collected in [`DiagramErrors`], so that
every problem can be fixed in one go.
*/

mod config;
pub use config::{DiagramConfig, LayoutConfig};

mod diagram;
pub use diagram::{annotations, DiagramEntry, OneLineDiagram};

mod entity;
pub use entity::{
    Breaker, Catalog, Disconnect, DistributionBus, Entity, EntityInfo, Equipment, Link, Meter,
    Panel, Service, Transformer,
};

mod entity_kind;
pub use entity_kind::{EntityKind, Status};

mod error;
pub use error::{DiagramErrors, Error, ErrorKind};

pub mod grammar;

mod graph;
pub use graph::{iterators, DistributionGraph};

mod layout;
pub use layout::{Point, Side};

pub mod ratings;

mod tree;
pub use tree::{DiagramNode, Protection, Ratings, Stage};

mod voltage;
pub use voltage::{Phase, VoltageSpec};
