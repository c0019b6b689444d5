//! This module is responsible for loading street networks and building the
//! dual representation from them.

mod builder;
mod config;
pub mod csv;

pub use builder::{MappedNetwork, create_dual_graph};
pub use config::StreetNetworkConfig;
