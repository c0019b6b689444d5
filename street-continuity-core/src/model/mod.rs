//! Data model for continuity negotiation
//!
//! The primal graph describes the street network as loaded; the dual graph
//! is the result of merging its segments into continuous streets.

pub mod dual;
pub mod primal;

pub use dual::{DualEdge, DualGraph, DualId, DualNode};
pub use primal::{EdgeRecord, PrimalEdge, PrimalGraph, PrimalNode, UNCLASSIFIED, UNKNOWN_NAME};
