use log::{debug, info};
use petgraph::graph::EdgeIndex;
use rayon::prelude::*;

use super::growth::Street;
use crate::{DualEdge, DualGraph, Error, PrimalGraph};

/// Maps a primal street network into its dual representation.
///
/// Every unconsumed primal edge, in insertion order, seeds a street that is
/// grown until neither end can continue at an angle of at least `min_angle`
/// degrees. Two streets are linked when they share a primal node.
///
/// Consumption flags left over from a previous run are released first, so
/// mapping the same graph twice gives identical results.
///
/// # Errors
///
/// `InvalidAngle` unless `0 < min_angle <= 180`.
pub fn dual_mapper(primal: &mut PrimalGraph, min_angle: f64) -> Result<DualGraph, Error> {
    validate_angle(min_angle)?;

    if primal.adjacency_is_stale() {
        debug!("Adjacency index is stale, rebuilding before mapping");
        primal.build_adjacency();
    }
    if primal.consumed_count() > 0 {
        debug!(
            "Releasing {} edges consumed by a previous run",
            primal.consumed_count()
        );
        primal.reset_consumed();
    }

    info!(
        "Negotiating continuity over {} nodes and {} edges (min angle {min_angle})",
        primal.node_count(),
        primal.edge_count()
    );

    let mut streets: Vec<Street> = Vec::new();
    for index in 0..primal.edge_count() {
        let seed = EdgeIndex::new(index);
        if primal.is_consumed(seed) {
            continue;
        }

        let mut street = Street::seed(primal, streets.len(), seed);
        let absorbed = street.grow(primal, min_angle);
        log::trace!("Street {} absorbed {absorbed} segments", street.id);
        streets.push(street);
    }

    let edges = derive_dual_edges(&streets);
    let nodes = streets
        .into_iter()
        .map(|street| street.freeze(primal))
        .collect::<Vec<_>>();

    let dual = DualGraph::new(nodes, edges);
    info!(
        "Mapped {} streets with {} crossings ({} isolated)",
        dual.node_count(),
        dual.edge_count(),
        dual.isolated_count()
    );
    Ok(dual)
}

fn validate_angle(min_angle: f64) -> Result<(), Error> {
    if min_angle > 0.0 && min_angle <= 180.0 {
        Ok(())
    } else {
        Err(Error::InvalidAngle(min_angle))
    }
}

/// Links every pair of streets sharing at least one primal node.
/// Each unordered pair is tested once; output is ordered by `(source, target)`.
fn derive_dual_edges(streets: &[Street]) -> Vec<DualEdge> {
    (0..streets.len())
        .into_par_iter()
        .flat_map_iter(|sid| {
            let source = &streets[sid];
            streets[sid + 1..]
                .iter()
                .filter(move |target| !source.node_set.is_disjoint(&target.node_set))
                .map(move |target| DualEdge::new(source.id, target.id))
        })
        .collect()
}
