// Re-export key components
pub use crate::Error;
pub use crate::export::{write_dual_edges, write_supplementary};
pub use crate::loading::csv::read_csv;
pub use crate::loading::{MappedNetwork, StreetNetworkConfig, create_dual_graph};
pub use crate::mapping::dual_mapper;

// Core types for the primal network
pub use crate::model::{EdgeRecord, PrimalEdge, PrimalGraph, PrimalNode};

// Core types for the dual network
pub use crate::model::{DualEdge, DualGraph, DualId, DualNode};
