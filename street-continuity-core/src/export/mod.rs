//! Writers for mapped dual networks

mod supplementary;
mod to_geojson;

pub use supplementary::{write_dual_edges, write_supplementary};
