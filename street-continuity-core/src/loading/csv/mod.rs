//! Primal graph from a pair of CSV files

mod de;
mod processor;
mod raw_types;

pub use de::deserialize_csv_file;
pub use processor::read_csv;
pub use raw_types::{RawEdge, RawNode};
