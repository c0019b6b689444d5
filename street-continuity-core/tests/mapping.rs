mod common;

use std::collections::HashMap;

use common::{init_logging, jittered_grid, primal_graph};
use street_continuity_core::geometry::turn_angle;
use street_continuity_core::{DualGraph, DualNode, PrimalGraph, dual_mapper};

const MIN_ANGLE: f64 = 120.0;

fn unordered(u: &str, v: &str) -> (String, String) {
    if u <= v {
        (u.to_string(), v.to_string())
    } else {
        (v.to_string(), u.to_string())
    }
}

/// A -- B -- C with C optionally replaced to form a turn at B.
fn three_nodes(c: (f64, f64), labels: (&str, &str), use_label: bool) -> PrimalGraph {
    primal_graph(
        &[("A", 0.0, 0.0), ("B", 0.0, 1.0), ("C", c.0, c.1)],
        &[("AB", "A", "B", labels.0), ("BC", "B", "C", labels.1)],
        use_label,
    )
}

#[test]
fn straight_through_merge() {
    init_logging();
    let mut primal = three_nodes((0.0, 2.0), ("primary", "primary"), true);
    let dual = dual_mapper(&mut primal, MIN_ANGLE).unwrap();

    assert_eq!(dual.node_count(), 1);
    let street = dual.node(0).unwrap();
    assert_eq!(street.source_node, "A");
    assert_eq!(street.target_node, "C");
    assert_eq!(street.nodes, vec!["A", "B", "C"]);
    assert_eq!(street.segment_count(), 2);
    assert_eq!(dual.edge_count(), 0);
}

#[test]
fn sharp_turn_is_rejected() {
    // C sits 60 degrees off the A -> B direction as seen from B.
    let c = (60f64.to_radians().sin(), 1.0 - 60f64.to_radians().cos());
    let mut primal = three_nodes(c, ("primary", "primary"), true);
    let dual = dual_mapper(&mut primal, MIN_ANGLE).unwrap();

    assert_eq!(dual.node_count(), 2);
    let seed = dual.node(0).unwrap();
    assert_eq!(seed.segment_count(), 1);
    assert_eq!((seed.source_node.as_str(), seed.target_node.as_str()), ("A", "B"));
    // Both streets meet at B.
    assert_eq!(dual.edge_count(), 1);
}

#[test]
fn label_mismatch_blocks_hicn_only() {
    let mut hicn = three_nodes((0.0, 2.0), ("primary", "residential"), true);
    let dual = dual_mapper(&mut hicn, MIN_ANGLE).unwrap();
    assert_eq!(dual.node_count(), 2);
    assert_eq!(dual.node(0).unwrap().label, "primary");
    assert_eq!(dual.node(1).unwrap().label, "residential");

    let mut icn = three_nodes((0.0, 2.0), ("primary", "residential"), false);
    let dual = dual_mapper(&mut icn, MIN_ANGLE).unwrap();
    assert_eq!(dual.node_count(), 1);
    assert_eq!(dual.node(0).unwrap().label, "unclassified");
}

#[test]
fn one_crossing_per_pair_of_streets() {
    // Primary avenue a-b-c-d and a residential detour b-m-c touching it twice.
    let mut primal = primal_graph(
        &[
            ("a", 0.0, 0.0),
            ("b", 0.0, 0.001),
            ("c", 0.0, 0.002),
            ("d", 0.0, 0.003),
            ("m", -0.0005, 0.0015),
        ],
        &[
            ("ab", "a", "b", "primary"),
            ("bc", "b", "c", "primary"),
            ("cd", "c", "d", "primary"),
            ("bm", "b", "m", "residential"),
            ("mc", "m", "c", "residential"),
        ],
        true,
    );
    let dual = dual_mapper(&mut primal, 60.0).unwrap();

    assert_eq!(dual.node_count(), 2);
    assert_eq!(dual.node(0).unwrap().nodes, vec!["a", "b", "c", "d"]);
    assert_eq!(dual.node(1).unwrap().nodes, vec!["b", "m", "c"]);
    assert_eq!(dual.edge_count(), 1);
    assert_eq!(dual.neighbors_of(0), &[1]);
    assert_eq!(dual.neighbors_of(1), &[0]);
}

#[test]
fn disjoint_streets_have_no_crossings() {
    let mut primal = primal_graph(
        &[
            ("a", 0.0, 0.0),
            ("b", 0.0, 0.001),
            ("c", 1.0, 0.0),
            ("d", 1.0, 0.001),
        ],
        &[("ab", "a", "b", "primary"), ("cd", "c", "d", "primary")],
        true,
    );
    let dual = dual_mapper(&mut primal, MIN_ANGLE).unwrap();
    assert_eq!(dual.node_count(), 2);
    assert_eq!(dual.degree(0), 0);
    assert_eq!(dual.degree(1), 0);
    assert_eq!(dual.isolated_count(), 2);
}

/// Every primal segment is claimed by exactly one street. Segments are
/// counted per node pair, so parallel edges must appear once each.
fn assert_partition(primal: &PrimalGraph, dual: &DualGraph) {
    let segments: usize = dual.nodes().iter().map(DualNode::segment_count).sum();
    assert_eq!(segments, primal.edge_count());
    assert_eq!(primal.consumed_count(), primal.edge_count());

    let mut expected: HashMap<(String, String), usize> = HashMap::new();
    for edge in primal.graph.edge_weights() {
        let key = unordered(
            &primal.graph[edge.source].id,
            &primal.graph[edge.target].id,
        );
        *expected.entry(key).or_default() += 1;
    }

    let mut seen: HashMap<(String, String), usize> = HashMap::new();
    for street in dual.nodes() {
        for (u, v) in &street.edges {
            *seen.entry(unordered(u, v)).or_default() += 1;
        }
    }
    assert_eq!(seen, expected);
}

#[test]
fn every_segment_belongs_to_exactly_one_street() {
    init_logging();
    for use_label in [true, false] {
        let mut primal = jittered_grid(8, use_label);
        let dual = dual_mapper(&mut primal, MIN_ANGLE).unwrap();
        assert_partition(&primal, &dual);
    }
}

#[test]
fn shadowed_parallel_edge_seeds_its_own_street() {
    init_logging();
    // c - a - b with two segments between a and b; the later one is the
    // one offered to streets growing through a.
    let mut primal = primal_graph(
        &[("c", 0.0, 0.0), ("a", 0.0, 0.001), ("b", 0.0, 0.002)],
        &[
            ("ca", "c", "a", "primary"),
            ("e1", "a", "b", "primary"),
            ("e2", "a", "b", "primary"),
        ],
        true,
    );
    let dual = dual_mapper(&mut primal, MIN_ANGLE).unwrap();

    assert_eq!(dual.node_count(), 2);
    assert_eq!(dual.node(0).unwrap().nodes, vec!["c", "a", "b"]);
    assert_eq!(dual.node(0).unwrap().target_edge, "e2");
    let shadowed = dual.node(1).unwrap();
    assert_eq!(shadowed.source_edge, "e1");
    assert_eq!(shadowed.segment_count(), 1);

    assert_eq!(dual.edge_count(), 1);
    assert_eq!(dual.neighbors_of(0), &[1]);
    assert_partition(&primal, &dual);
}

#[test]
fn streets_keep_their_seed_label() {
    let mut primal = jittered_grid(8, true);
    let dual = dual_mapper(&mut primal, MIN_ANGLE).unwrap();

    for street in dual.nodes() {
        for (u, v) in &street.edges {
            let u = primal.node_index(u).unwrap();
            let v = primal.node_index(v).unwrap();
            let edge = primal.connecting_edge(u, v).unwrap();
            assert_eq!(primal.graph[edge].label, street.label);
        }
    }
    // Rows and columns never merge with each other under HICN.
    assert!(dual.nodes().iter().all(|s| s.names.len() == 1));
}

#[test]
fn consecutive_segments_respect_min_angle() {
    for min_angle in [100.0, 150.0, 170.0] {
        let mut primal = jittered_grid(8, false);
        let dual = dual_mapper(&mut primal, min_angle).unwrap();

        for street in dual.nodes() {
            for pair in street.edges.windows(2) {
                let (before, pivot) = (&pair[0].0, &pair[0].1);
                let (next_pivot, after) = (&pair[1].0, &pair[1].1);
                assert_eq!(pivot, next_pivot, "segments of street {} are not chained", street.id);

                let point = |id: &str| primal.node(id).unwrap().geometry;
                let angle =
                    turn_angle(point(after.as_str()), point(pivot.as_str()), point(before.as_str()))
                        .unwrap();
                assert!(
                    angle >= min_angle,
                    "street {} turns {angle} degrees at {pivot}",
                    street.id
                );
            }
        }
    }
}

#[test]
fn grid_rows_and_columns_become_streets() {
    // Jitter stays far below the threshold, so every row and column of the
    // grid is one street and every row crosses every column.
    let size = 6;
    let mut primal = jittered_grid(size, true);
    let dual = dual_mapper(&mut primal, MIN_ANGLE).unwrap();

    assert_eq!(dual.node_count(), 2 * size);
    assert_eq!(dual.edge_count(), size * size);
    for street in dual.nodes() {
        assert_eq!(street.segment_count(), size - 1);
        assert_eq!(dual.degree(street.id), size);
    }
}

#[test]
fn crossings_are_unique_and_ordered() {
    let mut primal = jittered_grid(7, false);
    let dual = dual_mapper(&mut primal, 150.0).unwrap();

    let mut previous = None;
    for edge in dual.edges() {
        assert!(edge.source < edge.target);
        if let Some(previous) = previous {
            assert!(previous < *edge, "crossings are not strictly ordered");
        }
        previous = Some(*edge);
    }
}

#[test]
fn remapping_is_deterministic() {
    let mut primal = jittered_grid(7, true);
    let first = dual_mapper(&mut primal, 135.0).unwrap();

    primal.reset_consumed();
    let second = dual_mapper(&mut primal, 135.0).unwrap();
    assert_eq!(first, second);

    // Leftover consumption from the previous run is released as well.
    let third = dual_mapper(&mut primal, 135.0).unwrap();
    assert_eq!(first, third);
}
