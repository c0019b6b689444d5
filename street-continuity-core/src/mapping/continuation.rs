//! Continuity negotiation at a single intersection.

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::geometry::turn_angle;
use crate::model::PrimalGraph;

/// Neighbor chosen to carry a street through an intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Continuation {
    pub neighbor: NodeIndex,
    /// Edge between the pivot and `neighbor`
    pub edge: EdgeIndex,
    /// Angle at the pivot in degrees, 180 meaning perfectly straight
    pub angle: f64,
}

/// Picks the candidate forming the widest angle at `pivot` with the street
/// arriving through `incoming`, provided that angle reaches `min_angle`.
///
/// `candidates` are `(neighbor, connecting edge)` pairs. The anchor of the
/// angle is the far endpoint of `incoming`, i.e. where the street came from.
/// Ties keep the first candidate. Candidates whose angle is undefined
/// (coincident coordinates) are skipped.
pub fn negotiate(
    primal: &PrimalGraph,
    candidates: &[(NodeIndex, EdgeIndex)],
    pivot: NodeIndex,
    incoming: EdgeIndex,
    min_angle: f64,
) -> Option<Continuation> {
    let anchor = primal.edge_at(incoming).opposite(pivot);
    let pivot_point = primal.point(pivot);
    let anchor_point = primal.point(anchor);

    let mut best: Option<Continuation> = None;
    for &(neighbor, edge) in candidates {
        let Some(angle) = turn_angle(primal.point(neighbor), pivot_point, anchor_point) else {
            log::trace!(
                "Degenerate geometry at node {} towards {}, skipping candidate",
                primal.node_at(pivot).id,
                primal.node_at(neighbor).id
            );
            continue;
        };

        if best.is_none_or(|current| angle > current.angle) {
            best = Some(Continuation {
                neighbor,
                edge,
                angle,
            });
        }
    }

    best.filter(|choice| choice.angle >= min_angle)
}
