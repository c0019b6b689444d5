//! Primal network components - intersections, street segments and the
//! records loaders use to describe them

use geo::Point;
use petgraph::graph::NodeIndex;

/// Name given to segments without one
pub const UNKNOWN_NAME: &str = "unknown";
/// Label given to segments without a classification, and to every segment
/// when classification is disabled
pub const UNCLASSIFIED: &str = "unclassified";

/// Primal graph node (intersection)
#[derive(Debug, Clone)]
pub struct PrimalNode {
    /// Opaque node id as given by the loader
    pub id: String,
    /// Node coordinates (x = longitude, y = latitude)
    pub geometry: Point<f64>,
}

impl PrimalNode {
    pub fn lat(&self) -> f64 {
        self.geometry.y()
    }

    pub fn lon(&self) -> f64 {
        self.geometry.x()
    }
}

/// Primal graph edge (street segment)
#[derive(Debug, Clone)]
pub struct PrimalEdge {
    /// Opaque edge id as given by the loader
    pub id: String,
    pub source: NodeIndex,
    pub target: NodeIndex,
    /// Segment length in metres
    pub length: f64,
    pub name: String,
    /// Street class, `unclassified` when classification is disabled
    pub label: String,
}

impl PrimalEdge {
    /// Endpoint on the other side of `node`.
    pub fn opposite(&self, node: NodeIndex) -> NodeIndex {
        if node == self.target {
            self.source
        } else {
            self.target
        }
    }
}

/// Description of a segment to insert into a `PrimalGraph`.
///
/// A missing `length` is computed from the endpoint coordinates.
#[derive(Debug, Clone, Default)]
pub struct EdgeRecord {
    pub id: String,
    pub source: String,
    pub target: String,
    pub length: Option<f64>,
    pub name: Option<String>,
    pub label: Option<String>,
}

impl EdgeRecord {
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_length(mut self, length: f64) -> Self {
        self.length = Some(length);
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
