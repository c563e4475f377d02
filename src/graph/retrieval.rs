// License: MIT
// Copyright © 2026 The one-line-diagram Authors

//! Methods for retrieving entities and links from a [`DistributionGraph`].

use petgraph::graph::NodeIndex;

use crate::entity_kind::KindPredicates;
use crate::iterators::{Entities, Links, Neighbors};
use crate::{DiagramConfig, DistributionGraph, Equipment, Error};

/// `Entity` and `Link` retrieval.
impl DistributionGraph {
    pub(crate) fn index_of(&self, id: u64) -> Result<NodeIndex, Error> {
        self.entity_indices
            .get(&id)
            .copied()
            .ok_or_else(|| Error::entity_not_found(format!("Entity with id {id} not found.")))
    }

    /// Returns the entity with the given `id`, if it exists.
    pub fn entity(&self, id: u64) -> Result<&Equipment, Error> {
        self.index_of(id).map(|i| &self.graph[i])
    }

    /// Returns the entity whose link endpoint is `node_id`, if it exists.
    pub fn entity_by_node(&self, node_id: u64) -> Result<&Equipment, Error> {
        self.node_indices
            .get(&node_id)
            .map(|i| &self.graph[*i])
            .ok_or_else(|| {
                Error::entity_not_found(format!("Entity with node id {node_id} not found."))
            })
    }

    /// Returns an iterator over the entities in the graph, in catalog order.
    pub fn entities(&self) -> Entities {
        Entities {
            iter: self.graph.raw_nodes().iter(),
        }
    }

    /// Returns an iterator over the services in the graph, in catalog order.
    pub fn services(&self) -> impl Iterator<Item = &Equipment> {
        self.entities().filter(|e| e.is_service())
    }

    /// Returns an iterator over the links in the graph.
    pub fn links(&self) -> Links {
        Links {
            graph: &self.graph,
            iter: self.graph.raw_edges().iter(),
        }
    }

    /// Returns an iterator over the *predecessors* of the entity with the
    /// given `id`.  There is at most one.
    ///
    /// Returns an error if the given `id` does not exist.
    pub fn predecessors(&self, id: u64) -> Result<Neighbors, Error> {
        self.index_of(id).map(|index| Neighbors {
            graph: &self.graph,
            iter: self
                .graph
                .neighbors_directed(index, petgraph::Direction::Incoming),
        })
    }

    /// Returns an iterator over the *successors* of the entity with the given
    /// `id`.
    ///
    /// Returns an error if the given `id` does not exist.
    pub fn successors(&self, id: u64) -> Result<Neighbors, Error> {
        self.index_of(id).map(|index| Neighbors {
            graph: &self.graph,
            iter: self
                .graph
                .neighbors_directed(index, petgraph::Direction::Outgoing),
        })
    }

    /// Returns the data-integrity issues found while loading the catalog.
    pub fn issues(&self) -> &[Error] {
        &self.issues
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }
}
