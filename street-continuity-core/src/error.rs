use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid edge {edge}: {reason}")]
    InvalidEdge { edge: String, reason: String },
    #[error("Edge {edge} references missing node {node}")]
    MissingNode { edge: String, node: String },
    #[error("Duplicate node id {0}")]
    DuplicateNode(String),
    #[error("No such element: {0}")]
    NotFound(String),
    #[error("Continuity angle must lie in ]0, 180], got {0}")]
    InvalidAngle(f64),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}

impl Error {
    pub(crate) fn invalid_edge(edge: &str, reason: impl Into<String>) -> Self {
        Error::InvalidEdge {
            edge: edge.to_string(),
            reason: reason.into(),
        }
    }
}
