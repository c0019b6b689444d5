use log::info;

use super::config::StreetNetworkConfig;
use super::csv::read_csv;
use crate::{DualGraph, Error, PrimalGraph, dual_mapper};

/// Primal network as loaded, together with the streets mapped from it
#[derive(Debug, Clone)]
pub struct MappedNetwork {
    pub primal: PrimalGraph,
    pub dual: DualGraph,
}

/// Loads the primal network described by the configuration and maps it into
/// its dual representation.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or there are problems
/// reading the input files
pub fn create_dual_graph(config: &StreetNetworkConfig) -> Result<MappedNetwork, Error> {
    validate_config(config)?;

    info!(
        "Reading primal network: {} / {}",
        config.nodes_path.display(),
        config.edges_path.display()
    );
    let mut primal = read_csv(
        &config.nodes_path,
        &config.edges_path,
        config.use_label,
        config.has_header,
    )?;

    info!(
        "Mapping dual network with {}",
        if config.use_label { "HICN" } else { "ICN" }
    );
    let dual = dual_mapper(&mut primal, config.min_angle)?;

    log_mapping_summary(&primal, &dual);
    Ok(MappedNetwork { primal, dual })
}

fn validate_config(config: &StreetNetworkConfig) -> Result<(), Error> {
    for path in [&config.nodes_path, &config.edges_path] {
        if !path.exists() {
            return Err(Error::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Input file not found: {}", path.display()),
            )));
        }
    }

    if !(config.min_angle > 0.0 && config.min_angle <= 180.0) {
        return Err(Error::InvalidAngle(config.min_angle));
    }

    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn log_mapping_summary(primal: &PrimalGraph, dual: &DualGraph) {
    if dual.node_count() == 0 {
        log::warn!("The primal network has no edges, the dual network is empty");
        return;
    }

    let merge_ratio = primal.edge_count() as f64 / dual.node_count() as f64;
    info!(
        "{} segments merged into {} streets ({merge_ratio:.2} segments per street), \
        {} crossings, {:.1} km of streets",
        primal.edge_count(),
        dual.node_count(),
        dual.edge_count(),
        dual.total_length() / 1000.0
    );
}
