// License: MIT
// Copyright © 2026 The one-line-diagram Authors

//! A graph representation of the electrical entities of a project, and the
//! links between them.

mod creation;
mod reconstruction;
mod retrieval;
mod validation;

pub mod iterators;

#[cfg(test)]
pub(crate) mod test_utils;

use crate::{DiagramConfig, Equipment, Error};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// `Equipment` stored in a `DiGraph` instance can be addressed with
/// `NodeIndex`es.
///
/// `NodeIndexMap` stores the corresponding `NodeIndex` for an id, so that
/// entities in the `DiGraph` can be retrieved from their ids.
pub(crate) type NodeIndexMap = HashMap<u64, NodeIndex>;

/// A graph representation of the electrical entities of a project and the
/// links between them.
///
/// Only the links permitted by the topology grammar are stored, so that every
/// entity has at most one parent and every service is the root of a tree.
pub struct DistributionGraph {
    graph: DiGraph<Equipment, ()>,
    /// Indices by `node_id`, the identity used by the link table.
    node_indices: NodeIndexMap,
    /// Indices by `id`, the catalog identity.
    entity_indices: NodeIndexMap,
    /// The data-integrity problems found while loading the catalog.
    issues: Vec<Error>,
    config: DiagramConfig,
}

/// Logs a data-integrity issue and adds it to `issues`.
pub(crate) fn record_issue(issues: &mut Vec<Error>, issue: Error) {
    tracing::warn!("{}", issue);
    issues.push(issue);
}
