use super::components::{DualEdge, DualId, DualNode};

/// Streets as nodes, crossings as edges.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DualGraph {
    nodes: Vec<DualNode>,
    edges: Vec<DualEdge>,
    adjacency: Vec<Vec<DualId>>,
}

impl DualGraph {
    /// Assembles the graph and indexes crossings per street.
    ///
    /// `nodes[i].id` must equal `i`.
    pub fn new(nodes: Vec<DualNode>, edges: Vec<DualEdge>) -> Self {
        let mut adjacency = vec![Vec::new(); nodes.len()];
        for edge in &edges {
            adjacency[edge.source].push(edge.target);
            adjacency[edge.target].push(edge.source);
        }

        Self {
            nodes,
            edges,
            adjacency,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> &[DualNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[DualEdge] {
        &self.edges
    }

    pub fn node(&self, id: DualId) -> Option<&DualNode> {
        self.nodes.get(id)
    }

    /// Streets crossing `id`, in ascending order of discovery.
    pub fn neighbors_of(&self, id: DualId) -> &[DualId] {
        self.adjacency
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn degree(&self, id: DualId) -> usize {
        self.neighbors_of(id).len()
    }

    /// Streets crossing no other street.
    pub fn isolated_count(&self) -> usize {
        self.adjacency.iter().filter(|links| links.is_empty()).count()
    }

    pub fn total_length(&self) -> f64 {
        self.nodes.iter().map(|node| node.length).sum()
    }
}
