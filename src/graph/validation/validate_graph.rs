// License: MIT
// Copyright © 2026 The one-line-diagram Authors

//! Methods for validating the connectedness of a [`DistributionGraph`].

use std::collections::BTreeSet;

use crate::{Entity, Error};

use super::DistributionGraphValidator;

impl DistributionGraphValidator<'_> {
    /// Validates that all entities belong to the tree of some service.
    ///
    /// It does so by ensuring that all the entities are reachable by
    /// traversing the graph from the services.  Unless unconnected entities
    /// are allowed, the unreachable ones are reported together, and the ones
    /// that form a cycle are reported separately.
    pub(super) fn validate_connected_graph(&mut self) {
        let dg = self.dg;
        let mut visited = BTreeSet::new();
        let mut stack = dg.services().map(|s| s.id()).collect::<Vec<_>>();
        visited.extend(stack.iter().copied());
        while let Some(id) = stack.pop() {
            let Ok(successors) = dg.successors(id) else {
                continue;
            };
            for successor in successors {
                if visited.insert(successor.id()) {
                    stack.push(successor.id());
                }
            }
        }

        if dg.config.allow_unconnected_entities {
            return;
        }

        let mut unvisited = dg
            .entities()
            .map(|n| n.id())
            .filter(|id| !visited.contains(id))
            .collect::<Vec<_>>();
        unvisited.sort();

        if unvisited.is_empty() {
            return;
        }
        self.report(Error::data_integrity(format!(
            "Entities {:?} are not connected to any service.",
            unvisited
        )));

        for mut cycle in petgraph::algo::tarjan_scc(&dg.graph)
            .into_iter()
            .filter(|scc| scc.len() > 1)
        {
            cycle.sort();
            let ids = cycle
                .iter()
                .map(|i| dg.graph[*i].id())
                .collect::<Vec<_>>();
            self.report(Error::data_integrity(format!(
                "Entities {:?} form a cycle.",
                ids
            )));
        }
    }
}
