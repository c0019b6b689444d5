//! Primal street network model

pub mod components;
pub mod network;

pub use components::{EdgeRecord, PrimalEdge, PrimalNode, UNCLASSIFIED, UNKNOWN_NAME};
pub use network::PrimalGraph;
