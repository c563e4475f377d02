// License: MIT
// Copyright © 2026 The one-line-diagram Authors

//! Reconstruction of the tree below a service.

use petgraph::graph::NodeIndex;

use crate::entity_kind::KindPredicates;
use crate::entity::describe;
use crate::graph::record_issue;
use crate::tree::DiagramNode;
use crate::{grammar, DistributionGraph, Entity, Error};

/// Tree reconstruction.
impl DistributionGraph {
    /// Builds the tree rooted at the service with the given id.
    ///
    /// For every node, each kind that the grammar permits to follow the
    /// node's kind is searched in turn, so that a node may have children of
    /// several kinds.  Children are ordered by kind, in grammar order, and
    /// then by their position in the catalog.
    pub fn build_tree(&self, service_id: u64) -> Result<DiagramNode, Error> {
        self.reconstruct(service_id, &mut vec![])
    }

    /// Same as [`build_tree`][Self::build_tree], but adds the data-integrity
    /// problems found on the way to `issues`.
    pub(crate) fn reconstruct(
        &self,
        service_id: u64,
        issues: &mut Vec<Error>,
    ) -> Result<DiagramNode, Error> {
        let index = self.index_of(service_id)?;
        let service = &self.graph[index];
        if !service.is_service() {
            return Err(Error::invalid_graph(format!(
                "{} is not a service.",
                describe(service)
            )));
        }
        Ok(self.expand(index, &mut vec![], issues))
    }

    fn expand(
        &self,
        index: NodeIndex,
        ancestors: &mut Vec<NodeIndex>,
        issues: &mut Vec<Error>,
    ) -> DiagramNode {
        let entity = &self.graph[index];
        ancestors.push(index);

        let mut successors = self
            .graph
            .neighbors_directed(index, petgraph::Direction::Outgoing)
            .collect::<Vec<_>>();
        successors.sort();

        let mut children = vec![];
        for kind in grammar::profile(entity.kind()).successors {
            for &child in successors.iter().filter(|s| self.graph[**s].kind() == *kind) {
                if ancestors.contains(&child) {
                    record_issue(
                        issues,
                        Error::data_integrity(format!(
                            "{} feeds its own ancestor {}. The link is skipped.",
                            describe(entity),
                            describe(&self.graph[child])
                        )),
                    );
                    continue;
                }
                children.push(self.expand(child, ancestors, issues));
            }
        }

        ancestors.pop();
        tracing::trace!(
            "Reconstructed {} with {} children.",
            describe(entity),
            children.len()
        );
        DiagramNode::new(entity.clone(), children)
    }
}
