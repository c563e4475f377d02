// License: MIT
// Copyright © 2026 The one-line-diagram Authors

//! Iterators over entities and links in a `DistributionGraph`.

use petgraph::graph::DiGraph;

use crate::{Entity, Equipment, Link};

/// An iterator over the entities in a `DistributionGraph`.
pub struct Entities<'a> {
    pub(crate) iter: std::slice::Iter<'a, petgraph::graph::Node<Equipment>>,
}

impl<'a> Iterator for Entities<'a> {
    type Item = &'a Equipment;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|n| &n.weight)
    }
}

/// An iterator over the links accepted into a `DistributionGraph`.
pub struct Links<'a> {
    pub(crate) graph: &'a DiGraph<Equipment, ()>,
    pub(crate) iter: std::slice::Iter<'a, petgraph::graph::Edge<()>>,
}

impl Iterator for Links<'_> {
    type Item = Link;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|e| {
            Link::new(
                self.graph[e.source()].node_id(),
                self.graph[e.target()].node_id(),
            )
        })
    }
}

/// An iterator over the neighbors of an entity in a `DistributionGraph`.
pub struct Neighbors<'a> {
    pub(crate) graph: &'a DiGraph<Equipment, ()>,
    pub(crate) iter: petgraph::graph::Neighbors<'a, ()>,
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = &'a Equipment;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|i| &self.graph[i])
    }
}
