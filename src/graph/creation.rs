// License: MIT
// Copyright © 2026 The one-line-diagram Authors

//! Methods for creating [`DistributionGraph`] instances from a catalog.

use std::collections::{HashMap, HashSet};

use petgraph::graph::{DiGraph, NodeIndex};

use crate::entity::describe;
use crate::entity_kind::KindPredicates;
use crate::{grammar, Catalog, DiagramConfig, Entity, Equipment, Error, Link};

use super::{record_issue, DistributionGraph, NodeIndexMap};

/// `DistributionGraph` instantiation.
impl DistributionGraph {
    /// Creates a new [`DistributionGraph`] from the given catalog.
    ///
    /// Entities and links that violate the data model are left out of the
    /// graph and reported through [`issues`][DistributionGraph::issues].
    /// Returns an error only if the catalog has no service at all.
    pub fn try_new(catalog: Catalog, config: DiagramConfig) -> Result<Self, Error> {
        let (entities, links) = catalog.into_parts();
        let mut issues = vec![];

        let (graph, node_indices, entity_indices) = Self::create_graph(entities, &mut issues);
        if !graph.raw_nodes().iter().any(|n| n.weight.is_service()) {
            return Err(Error::invalid_graph("No service entity found."));
        }

        let mut dg = Self {
            graph,
            node_indices,
            entity_indices,
            issues,
            config,
        };
        dg.add_links(links);
        dg.validate();

        Ok(dg)
    }

    fn create_graph(
        entities: Vec<Equipment>,
        issues: &mut Vec<Error>,
    ) -> (DiGraph<Equipment, ()>, NodeIndexMap, NodeIndexMap) {
        let mut graph = DiGraph::new();
        let mut node_indices = NodeIndexMap::new();
        let mut entity_indices = NodeIndexMap::new();

        for entity in entities {
            let (id, node_id) = (entity.id(), entity.node_id());

            if entity_indices.contains_key(&id) {
                record_issue(
                    issues,
                    Error::data_integrity(format!("Duplicate entity ID found: {id}")),
                );
                continue;
            }
            if !entity.kind().has_multiple_ports() && node_id != id {
                record_issue(
                    issues,
                    Error::data_integrity(format!(
                        "{} has a single port, but its node ID {node_id} differs from its ID.",
                        describe(&entity)
                    )),
                );
                continue;
            }
            if node_indices.contains_key(&node_id) {
                record_issue(
                    issues,
                    Error::data_integrity(format!("Duplicate node ID found: {node_id}")),
                );
                continue;
            }

            let idx = graph.add_node(entity);
            node_indices.insert(node_id, idx);
            entity_indices.insert(id, idx);
        }

        (graph, node_indices, entity_indices)
    }

    fn add_links(&mut self, links: impl IntoIterator<Item = Link>) {
        let mut accepted: Vec<(NodeIndex, NodeIndex)> = vec![];

        for link in links {
            let (oid, iid) = (link.output_node_id, link.input_node_id);

            if oid == iid {
                record_issue(
                    &mut self.issues,
                    Error::data_integrity(format!(
                        "Link:({oid}, {iid}) Can't connect an entity to itself."
                    )),
                );
                continue;
            }
            if let Some(missing) = [oid, iid]
                .into_iter()
                .find(|nid| !self.node_indices.contains_key(nid))
            {
                record_issue(
                    &mut self.issues,
                    Error::data_integrity(format!(
                        "Link:({oid}, {iid}) Can't find an entity with node ID {missing}."
                    )),
                );
                continue;
            }

            let source = self.node_indices[&oid];
            let dest = self.node_indices[&iid];
            let (parent, child) = (&self.graph[source], &self.graph[dest]);
            if !grammar::permits(parent.kind(), child.kind()) {
                let issue = Error::data_integrity(format!(
                    "Link:({oid}, {iid}) {} can't feed {}.",
                    describe(parent),
                    describe(child)
                ));
                record_issue(&mut self.issues, issue);
                continue;
            }
            if !accepted.contains(&(source, dest)) {
                accepted.push((source, dest));
            }
        }

        let mut parents: HashMap<NodeIndex, Vec<NodeIndex>> = HashMap::new();
        for (source, dest) in &accepted {
            parents.entry(*dest).or_default().push(*source);
        }

        let mut reported = HashSet::new();
        for (source, dest) in accepted {
            let dest_parents = &parents[&dest];
            if dest_parents.len() == 1 {
                self.graph.add_edge(source, dest, ());
                continue;
            }
            if reported.insert(dest) {
                let issue = Error::data_integrity(format!(
                    "{} has multiple parents: {}. Its subtree is skipped.",
                    describe(&self.graph[dest]),
                    dest_parents
                        .iter()
                        .map(|p| describe(&self.graph[*p]))
                        .collect::<Vec<_>>()
                        .join(", ")
                ));
                record_issue(&mut self.issues, issue);
            }
        }
    }
}
