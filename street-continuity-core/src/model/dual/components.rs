//! Dual network components - continuous streets and their crossings

/// Index of a dual node, dense and in allocation order
pub type DualId = usize;

/// A street of greatest continuity: a chain of primal segments merged
/// across intersections.
#[derive(Debug, Clone, PartialEq)]
pub struct DualNode {
    pub id: DualId,
    /// Primal node at the upstream end
    pub source_node: String,
    /// Primal node at the downstream end
    pub target_node: String,
    /// Last primal edge absorbed at the upstream end
    pub source_edge: String,
    /// Last primal edge absorbed at the downstream end
    pub target_edge: String,
    /// Sum of the absorbed segment lengths in metres
    pub length: f64,
    /// Street class shared by every absorbed segment
    pub label: String,
    /// Distinct segment names, seed name first
    pub names: Vec<String>,
    /// Distinct primal nodes in the order they were reached
    pub nodes: Vec<String>,
    /// Absorbed segments as primal node pairs, upstream to downstream
    pub edges: Vec<(String, String)>,
}

impl DualNode {
    pub fn segment_count(&self) -> usize {
        self.edges.len()
    }
}

/// Two streets crossing at one or more shared intersections.
///
/// Always stored with `source < target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DualEdge {
    pub source: DualId,
    pub target: DualId,
}

impl DualEdge {
    pub fn new(a: DualId, b: DualId) -> Self {
        Self {
            source: a.min(b),
            target: a.max(b),
        }
    }
}
