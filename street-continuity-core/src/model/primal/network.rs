//! Primal street graph with its adjacency index and consumption flags

use fixedbitset::FixedBitSet;
use geo::Point;
use hashbrown::HashMap;
use log::{debug, warn};
use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use super::components::{EdgeRecord, PrimalEdge, PrimalNode, UNCLASSIFIED, UNKNOWN_NAME};
use crate::{Error, geometry};

/// Undirected street network: intersections as nodes, segments as edges.
///
/// Nodes and edges keep their insertion order, which fixes the order in which
/// the mapper seeds streets and the order in which neighbors are negotiated.
#[derive(Debug, Clone)]
pub struct PrimalGraph {
    pub graph: UnGraph<PrimalNode, PrimalEdge>,
    node_lookup: HashMap<String, NodeIndex>,
    edge_lookup: HashMap<String, EdgeIndex>,
    /// Neighbor lists per node, `(neighbor, connecting edge)`.
    adjacency: Vec<Vec<(NodeIndex, EdgeIndex)>>,
    adjacency_stale: bool,
    consumed: FixedBitSet,
    use_label: bool,
}

impl PrimalGraph {
    /// Empty graph. With `use_label == false` every segment is stored as
    /// `unclassified`, so continuity ignores street classes (ICN).
    pub fn new(use_label: bool) -> Self {
        Self {
            graph: UnGraph::default(),
            node_lookup: HashMap::new(),
            edge_lookup: HashMap::new(),
            adjacency: Vec::new(),
            adjacency_stale: false,
            consumed: FixedBitSet::new(),
            use_label,
        }
    }

    pub fn use_label(&self) -> bool {
        self.use_label
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Adds an intersection.
    ///
    /// # Errors
    ///
    /// `DuplicateNode` if the id was already added. `InvalidData` for
    /// coordinates that are not finite or outside the WGS84 range.
    pub fn add_node(&mut self, id: impl Into<String>, lat: f64, lon: f64) -> Result<NodeIndex, Error> {
        let id = id.into();
        if self.node_lookup.contains_key(&id) {
            return Err(Error::DuplicateNode(id));
        }
        if !(-180.0..=180.0).contains(&lon) || !(-90.0..=90.0).contains(&lat) {
            return Err(Error::InvalidData(format!(
                "Coordinates ({lon}, {lat}) of node {id} are out of range"
            )));
        }

        let index = self.graph.add_node(PrimalNode {
            id: id.clone(),
            geometry: Point::new(lon, lat),
        });
        self.node_lookup.insert(id, index);
        self.adjacency_stale = true;
        Ok(index)
    }

    /// Adds a street segment.
    ///
    /// The adjacency index must be rebuilt afterwards; the mapper does so
    /// itself when it finds the index stale.
    ///
    /// # Errors
    ///
    /// `MissingNode` when an endpoint is unknown. `InvalidEdge` for duplicate
    /// ids, self-loops, zero-length segments and invalid supplied lengths.
    pub fn add_edge(&mut self, record: EdgeRecord) -> Result<EdgeIndex, Error> {
        if self.edge_lookup.contains_key(&record.id) {
            return Err(Error::invalid_edge(&record.id, "duplicate edge id"));
        }

        let source = self.lookup_endpoint(&record.id, &record.source)?;
        let target = self.lookup_endpoint(&record.id, &record.target)?;

        if source == target {
            return Err(Error::invalid_edge(&record.id, "self-loop"));
        }

        let computed = geometry::segment_length(self.point(source), self.point(target));
        if !computed.is_finite() || computed <= 0.0 {
            return Err(Error::invalid_edge(
                &record.id,
                "endpoints share the same coordinates",
            ));
        }

        let length = match record.length {
            Some(length) if !length.is_finite() || length < 0.0 => {
                return Err(Error::invalid_edge(
                    &record.id,
                    format!("invalid length {length}"),
                ));
            }
            Some(length) => length,
            None => computed,
        };

        let name = record
            .name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN_NAME.to_string());
        let label = record
            .label
            .filter(|label| self.use_label && !label.is_empty())
            .unwrap_or_else(|| UNCLASSIFIED.to_string());

        let index = self.graph.add_edge(
            source,
            target,
            PrimalEdge {
                id: record.id.clone(),
                source,
                target,
                length,
                name,
                label,
            },
        );
        self.edge_lookup.insert(record.id, index);
        self.consumed.grow(self.graph.edge_count());
        self.adjacency_stale = true;
        Ok(index)
    }

    fn lookup_endpoint(&self, edge: &str, node: &str) -> Result<NodeIndex, Error> {
        self.node_lookup
            .get(node)
            .copied()
            .ok_or_else(|| Error::MissingNode {
                edge: edge.to_string(),
                node: node.to_string(),
            })
    }

    /// Builds the symmetric adjacency index from the current edge set.
    ///
    /// Only one edge per node pair is kept: a later parallel edge replaces the
    /// earlier one in place, so the neighbor keeps its first position.
    pub fn build_adjacency(&mut self) {
        let mut adjacency = vec![Vec::new(); self.graph.node_count()];
        let mut shadowed = 0usize;

        for edge in self.graph.edge_references() {
            let (u, v) = (edge.source(), edge.target());
            if insert_link(&mut adjacency[u.index()], v, edge.id()) {
                shadowed += 1;
            }
            insert_link(&mut adjacency[v.index()], u, edge.id());
        }

        if shadowed > 0 {
            warn!(
                "{shadowed} parallel edges are shadowed by a later edge between the same \
                intersections and will not take part in continuity negotiation"
            );
        }
        debug!(
            "Adjacency index built for {} nodes and {} edges",
            self.graph.node_count(),
            self.graph.edge_count()
        );

        self.adjacency = adjacency;
        self.adjacency_stale = false;
    }

    /// Whether nodes or edges were added since the last `build_adjacency`.
    pub fn adjacency_is_stale(&self) -> bool {
        self.adjacency_stale
    }

    /// Neighbors of `node` with their connecting edges, in insertion order.
    pub fn neighbors_of(&self, node: NodeIndex) -> &[(NodeIndex, EdgeIndex)] {
        self.adjacency
            .get(node.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Edge joining `u` and `v` according to the adjacency index.
    pub fn connecting_edge(&self, u: NodeIndex, v: NodeIndex) -> Option<EdgeIndex> {
        self.neighbors_of(u)
            .iter()
            .find(|(neighbor, _)| *neighbor == v)
            .map(|&(_, edge)| edge)
    }

    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.node_lookup.get(id).copied()
    }

    pub fn edge_index(&self, id: &str) -> Option<EdgeIndex> {
        self.edge_lookup.get(id).copied()
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown node id.
    pub fn node(&self, id: &str) -> Result<&PrimalNode, Error> {
        self.node_index(id)
            .and_then(|index| self.graph.node_weight(index))
            .ok_or_else(|| Error::NotFound(format!("node {id}")))
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown edge id.
    pub fn edge(&self, id: &str) -> Result<&PrimalEdge, Error> {
        self.edge_index(id)
            .and_then(|index| self.graph.edge_weight(index))
            .ok_or_else(|| Error::NotFound(format!("edge {id}")))
    }

    pub(crate) fn node_at(&self, index: NodeIndex) -> &PrimalNode {
        &self.graph[index]
    }

    pub(crate) fn edge_at(&self, index: EdgeIndex) -> &PrimalEdge {
        &self.graph[index]
    }

    pub(crate) fn point(&self, index: NodeIndex) -> Point<f64> {
        self.graph[index].geometry
    }

    /// Edge indices in insertion order.
    pub fn edge_indices(&self) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph.edge_indices()
    }

    pub fn is_consumed(&self, edge: EdgeIndex) -> bool {
        self.consumed.contains(edge.index())
    }

    /// Claims `edge` for a dual node. Returns `false` if it was already taken.
    pub(crate) fn consume(&mut self, edge: EdgeIndex) -> bool {
        !self.consumed.put(edge.index())
    }

    pub fn consumed_count(&self) -> usize {
        self.consumed.count_ones(..)
    }

    /// Releases every edge so the graph can be mapped again.
    pub fn reset_consumed(&mut self) {
        self.consumed.clear();
    }
}

/// Returns `true` if an existing link to `neighbor` was replaced.
fn insert_link(
    links: &mut Vec<(NodeIndex, EdgeIndex)>,
    neighbor: NodeIndex,
    edge: EdgeIndex,
) -> bool {
    if let Some(link) = links.iter_mut().find(|(n, _)| *n == neighbor) {
        link.1 = edge;
        true
    } else {
        links.push((neighbor, edge));
        false
    }
}
