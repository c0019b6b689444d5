use std::path::Path;

use itertools::Itertools;
use serde::Serialize;

use crate::{DualGraph, Error};

#[derive(Debug, Serialize)]
struct StreetRow<'a> {
    id: usize,
    length: f64,
    label: &'a str,
    names: String,
    nodes: String,
}

#[derive(Debug, Serialize)]
struct CrossingRow {
    id: usize,
    source: usize,
    target: usize,
}

/// Writes one row per street: `id, length, label, names, nodes`, with the
/// list columns joined by `;`. Overwrites `path`.
pub fn write_supplementary(dual: &DualGraph, path: &Path) -> Result<(), Error> {
    let mut writer = csv::Writer::from_path(path)?;
    for street in dual.nodes() {
        writer.serialize(StreetRow {
            id: street.id,
            length: street.length,
            label: &street.label,
            names: street.names.iter().join(";"),
            nodes: street.nodes.iter().join(";"),
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes one row per crossing: `id, source, target`. Overwrites `path`.
pub fn write_dual_edges(dual: &DualGraph, path: &Path) -> Result<(), Error> {
    let mut writer = csv::Writer::from_path(path)?;
    for (id, edge) in dual.edges().iter().enumerate() {
        writer.serialize(CrossingRow {
            id,
            source: edge.source,
            target: edge.target,
        })?;
    }
    writer.flush()?;
    Ok(())
}
