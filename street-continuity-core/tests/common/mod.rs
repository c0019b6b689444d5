#![allow(dead_code)]

use std::path::PathBuf;

use street_continuity_core::{EdgeRecord, PrimalGraph};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds a primal graph from `(id, lat, lon)` nodes and
/// `(id, source, target, label)` edges, in the given order.
pub fn primal_graph(
    nodes: &[(&str, f64, f64)],
    edges: &[(&str, &str, &str, &str)],
    use_label: bool,
) -> PrimalGraph {
    let mut graph = PrimalGraph::new(use_label);
    for &(id, lat, lon) in nodes {
        graph.add_node(id, lat, lon).unwrap();
    }
    for &(id, source, target, label) in edges {
        graph
            .add_edge(EdgeRecord::new(id, source, target).with_label(label))
            .unwrap();
    }
    graph.build_adjacency();
    graph
}

/// Deterministic jittered grid of `size x size` intersections with
/// horizontal and vertical segments. Rows alternate between `primary` and
/// `residential`, columns are `secondary`.
pub fn jittered_grid(size: usize, use_label: bool) -> PrimalGraph {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut jitter = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        #[allow(clippy::cast_precision_loss)]
        let unit = (state >> 11) as f64 / (1u64 << 53) as f64;
        (unit - 0.5) * 0.0002
    };

    let mut graph = PrimalGraph::new(use_label);
    for row in 0..size {
        for col in 0..size {
            #[allow(clippy::cast_precision_loss)]
            let (lat, lon) = (row as f64 * 0.001 + jitter(), col as f64 * 0.001 + jitter());
            graph.add_node(format!("{row}:{col}"), lat, lon).unwrap();
        }
    }

    for row in 0..size {
        for col in 0..size {
            if col + 1 < size {
                let label = if row % 2 == 0 { "primary" } else { "residential" };
                graph
                    .add_edge(
                        EdgeRecord::new(
                            format!("h{row}:{col}"),
                            format!("{row}:{col}"),
                            format!("{row}:{}", col + 1),
                        )
                        .with_name(format!("Row {row}"))
                        .with_label(label),
                    )
                    .unwrap();
            }
            if row + 1 < size {
                graph
                    .add_edge(
                        EdgeRecord::new(
                            format!("v{row}:{col}"),
                            format!("{row}:{col}"),
                            format!("{}:{col}", row + 1),
                        )
                        .with_name(format!("Column {col}"))
                        .with_label("secondary"),
                    )
                    .unwrap();
            }
        }
    }

    graph.build_adjacency();
    graph
}

/// Fresh scratch directory for files written by a test.
pub fn scratch_dir(test: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join("street_continuity_tests")
        .join(test);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
