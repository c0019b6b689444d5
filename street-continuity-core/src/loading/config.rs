use std::path::PathBuf;

use serde::Deserialize;

/// Inputs and negotiation parameters for `create_dual_graph`
#[derive(Debug, Clone, Deserialize)]
pub struct StreetNetworkConfig {
    /// CSV file with rows `id, longitude, latitude`
    pub nodes_path: PathBuf,
    /// CSV file with rows `id, source, target, length, name, label`
    pub edges_path: PathBuf,
    /// Skip the first row of both files
    #[serde(default)]
    pub has_header: bool,
    /// Restrict continuity to segments of the same class (HICN)
    pub use_label: bool,
    /// Minimum angle in degrees, in `]0, 180]`, for two segments to be
    /// considered the same street
    pub min_angle: f64,
}
