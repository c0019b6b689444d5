//! Street continuity negotiation.
//!
//! Maps a primal street network (intersections as nodes, segments as edges)
//! into its dual representation, in which every node is a street of greatest
//! continuity and every edge a crossing between two streets. Segments are
//! merged through an intersection when the angle they form is wide enough
//! (ICN), optionally only when they share the same street class (HICN).

pub mod error;
pub mod export;
pub mod geometry;
pub mod loading;
pub mod mapping;
pub mod model;
pub mod prelude;

pub use error::Error;
pub use export::{write_dual_edges, write_supplementary};
pub use loading::{MappedNetwork, StreetNetworkConfig, create_dual_graph};
pub use mapping::dual_mapper;
pub use model::{
    DualEdge, DualGraph, DualId, DualNode, EdgeRecord, PrimalEdge, PrimalGraph, PrimalNode,
};
