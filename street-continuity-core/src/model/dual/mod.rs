//! Dual street network model

pub mod components;
pub mod network;

pub use components::{DualEdge, DualId, DualNode};
pub use network::DualGraph;
