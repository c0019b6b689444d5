use std::path::Path;

use log::{info, warn};

use super::de::{deserialize_csv_file, non_empty, parse_optional_f64};
use super::raw_types::{RawEdge, RawNode};
use crate::{EdgeRecord, Error, PrimalGraph};

/// Creates a primal graph from a nodes file (`id, longitude, latitude`) and
/// an edges file (`id, source, target, length, name, label`).
///
/// With `use_label == false` street classes are ignored (ICN). Invalid edges
/// (self-loops, zero length, bad length values) are dropped with a warning.
/// The adjacency index is built before returning.
///
/// # Errors
///
/// Returns an error if a file cannot be read, a node has unparsable
/// coordinates or an edge references a node that does not exist.
pub fn read_csv(
    nodes_path: &Path,
    edges_path: &Path,
    use_label: bool,
    has_header: bool,
) -> Result<PrimalGraph, Error> {
    let raw_nodes: Vec<RawNode> = deserialize_csv_file(nodes_path, has_header)?;
    let raw_edges: Vec<RawEdge> = deserialize_csv_file(edges_path, has_header)?;

    let mut graph = PrimalGraph::new(use_label);

    for node in raw_nodes {
        let (lon, lat) = parse_coordinates(&node)?;
        graph.add_node(node.id, lat, lon)?;
    }
    info!("Loaded {} primal nodes", graph.node_count());

    let mut dropped = 0usize;
    for raw in raw_edges {
        let record = match edge_record(raw) {
            Ok(record) => record,
            Err(e) => {
                warn!("{e}, dropping edge");
                dropped += 1;
                continue;
            }
        };

        match graph.add_edge(record) {
            Ok(_) => {}
            Err(e @ Error::InvalidEdge { .. }) => {
                warn!("{e}, dropping edge");
                dropped += 1;
            }
            Err(e) => return Err(e),
        }
    }
    info!(
        "Loaded {} primal edges ({dropped} dropped)",
        graph.edge_count()
    );

    graph.build_adjacency();
    Ok(graph)
}

fn parse_coordinates(node: &RawNode) -> Result<(f64, f64), Error> {
    let parse = |value: &str, axis: &str| {
        value.parse::<f64>().map_err(|e| {
            Error::InvalidData(format!(
                "Invalid {axis} '{value}' for node {}: {e}",
                node.id
            ))
        })
    };

    let lon = parse(&node.lon, "longitude")?;
    let lat = parse(&node.lat, "latitude")?;
    Ok((lon, lat))
}

fn edge_record(raw: RawEdge) -> Result<EdgeRecord, Error> {
    let length = parse_optional_f64(&raw.length)
        .map_err(|e| Error::invalid_edge(&raw.id, format!("invalid length '{}': {e}", raw.length)))?;

    Ok(EdgeRecord {
        id: raw.id,
        source: raw.source,
        target: raw.target,
        length,
        name: non_empty(raw.name),
        label: non_empty(raw.label),
    })
}
