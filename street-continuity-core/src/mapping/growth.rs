//! Growth of a single street from a seed segment.
//!
//! A street has two ends. Each round, every open end looks for unconsumed
//! segments of the same class leaving its current node and, through
//! `negotiate`, absorbs the straightest one if it is straight enough. An end
//! without candidates closes for good. Growth stops after the first round in
//! which neither end absorbed anything. Every absorption consumes a primal
//! edge and consumed edges are never released, so the number of rounds is
//! bounded by the number of edges.

use std::collections::VecDeque;

use hashbrown::HashSet;
use petgraph::graph::{EdgeIndex, NodeIndex};

use super::continuation::{Continuation, negotiate};
use crate::model::{DualId, DualNode, PrimalGraph};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EndState {
    Open,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    /// Upstream end, grown by prepending
    Source,
    /// Downstream end, grown by appending
    Target,
}

#[derive(Debug, Clone, Copy)]
struct StreetEnd {
    node: NodeIndex,
    /// Boundary edge, the latest one absorbed at this end
    edge: EdgeIndex,
    state: EndState,
}

/// Street under construction, expressed in primal graph indices.
#[derive(Debug, Clone)]
pub(crate) struct Street {
    pub(crate) id: DualId,
    source: StreetEnd,
    target: StreetEnd,
    length: f64,
    label: String,
    names: Vec<String>,
    nodes: Vec<NodeIndex>,
    pub(crate) node_set: HashSet<NodeIndex>,
    edges: VecDeque<(NodeIndex, NodeIndex)>,
}

impl Street {
    /// Starts a street from `seed`, claiming it.
    pub(crate) fn seed(primal: &mut PrimalGraph, id: DualId, seed: EdgeIndex) -> Self {
        let claimed = primal.consume(seed);
        debug_assert!(claimed, "seed edge was already consumed");

        let edge = primal.edge_at(seed);
        let (source, target) = (edge.source, edge.target);

        Self {
            id,
            source: StreetEnd {
                node: source,
                edge: seed,
                state: EndState::Open,
            },
            target: StreetEnd {
                node: target,
                edge: seed,
                state: EndState::Open,
            },
            length: edge.length,
            label: edge.label.clone(),
            names: vec![edge.name.clone()],
            nodes: vec![source, target],
            node_set: HashSet::from_iter([source, target]),
            edges: VecDeque::from([(source, target)]),
        }
    }

    /// Grows both ends until a full round absorbs nothing.
    /// Returns the number of segments absorbed besides the seed.
    pub(crate) fn grow(&mut self, primal: &mut PrimalGraph, min_angle: f64) -> usize {
        let mut absorbed = 0;
        loop {
            let mut progressed = false;
            for side in [Side::Source, Side::Target] {
                if self.advance(primal, side, min_angle) {
                    absorbed += 1;
                    progressed = true;
                }
            }
            if !progressed {
                return absorbed;
            }
        }
    }

    #[cfg(test)]
    fn end_state(&self, side: Side) -> EndState {
        self.end(side).state
    }

    fn end(&self, side: Side) -> &StreetEnd {
        match side {
            Side::Source => &self.source,
            Side::Target => &self.target,
        }
    }

    fn end_mut(&mut self, side: Side) -> &mut StreetEnd {
        match side {
            Side::Source => &mut self.source,
            Side::Target => &mut self.target,
        }
    }

    fn opposite(&self, side: Side) -> &StreetEnd {
        match side {
            Side::Source => &self.target,
            Side::Target => &self.source,
        }
    }

    /// One step at one end. Returns `true` if a segment was absorbed.
    fn advance(&mut self, primal: &mut PrimalGraph, side: Side, min_angle: f64) -> bool {
        let end = *self.end(side);
        if end.state == EndState::Closed {
            return false;
        }

        let candidates = self.candidates(primal, side);
        if candidates.is_empty() {
            self.end_mut(side).state = EndState::Closed;
            return false;
        }

        match negotiate(primal, &candidates, end.node, end.edge, min_angle) {
            Some(choice) => {
                self.absorb(primal, side, choice);
                true
            }
            None => false,
        }
    }

    /// Unconsumed, same-class segments leaving the end, except the one
    /// leading straight to the opposite end.
    fn candidates(&self, primal: &PrimalGraph, side: Side) -> Vec<(NodeIndex, EdgeIndex)> {
        let pivot = self.end(side).node;
        let opposite = self.opposite(side).node;

        primal
            .neighbors_of(pivot)
            .iter()
            .filter(|&&(neighbor, edge)| {
                neighbor != opposite
                    && !primal.is_consumed(edge)
                    && primal.edge_at(edge).label == self.label
            })
            .copied()
            .collect()
    }

    fn absorb(&mut self, primal: &mut PrimalGraph, side: Side, choice: Continuation) {
        primal.consume(choice.edge);
        let segment = primal.edge_at(choice.edge);

        let end = self.end_mut(side);
        let pivot = end.node;
        end.node = choice.neighbor;
        end.edge = choice.edge;

        match side {
            Side::Source => self.edges.push_front((choice.neighbor, pivot)),
            Side::Target => self.edges.push_back((pivot, choice.neighbor)),
        }

        self.length += segment.length;
        if !self.names.contains(&segment.name) {
            self.names.push(segment.name.clone());
        }
        if self.node_set.insert(choice.neighbor) {
            self.nodes.push(choice.neighbor);
        }
    }

    /// Converts indices back to the loader's ids.
    pub(crate) fn freeze(self, primal: &PrimalGraph) -> DualNode {
        let node_id = |index: NodeIndex| primal.node_at(index).id.clone();
        let edge_id = |index: EdgeIndex| primal.edge_at(index).id.clone();

        DualNode {
            id: self.id,
            source_node: node_id(self.source.node),
            target_node: node_id(self.target.node),
            source_edge: edge_id(self.source.edge),
            target_edge: edge_id(self.target.edge),
            length: self.length,
            label: self.label,
            names: self.names,
            nodes: self.nodes.into_iter().map(node_id).collect(),
            edges: self
                .edges
                .into_iter()
                .map(|(u, v)| (node_id(u), node_id(v)))
                .collect(),
        }
    }
}
