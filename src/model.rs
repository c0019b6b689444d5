use std::path::PathBuf;

use street_continuity_core::prelude::*;

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
#[cfg(feature = "stubgen")]
use pyo3_stub_gen::derive::{gen_stub_pyclass, gen_stub_pyfunction, gen_stub_pymethods};

/// Converts a core error into the matching Python exception.
///
/// Problems with the input data become `ValueError`, everything else
/// (I/O, serialization) becomes `RuntimeError`.
pub(crate) fn to_py_err(context: &str, error: Error) -> PyErr {
    match error {
        Error::InvalidEdge { .. }
        | Error::MissingNode { .. }
        | Error::DuplicateNode(_)
        | Error::NotFound(_)
        | Error::InvalidAngle(_)
        | Error::InvalidData(_) => PyErr::new::<PyValueError, _>(format!("{context}: {error}")),
        _ => PyErr::new::<PyRuntimeError, _>(format!("{context}: {error}")),
    }
}

/// PrimalGraph
///
/// Street network in its primal form: intersections are nodes and street
/// segments are undirected edges. Segments carry a length in meters, a
/// street name and a street class (label).
///
/// Graphs are built either node by node with `add_node` / `add_edge`
/// followed by `build_adjacency`, or loaded from CSV files with `read_csv`.
///
/// Example:
///
/// .. code-block:: python
///
///     graph = PrimalGraph(use_label=True)
///     graph.add_node("a", -23.55, -46.63)
///     graph.add_node("b", -23.55, -46.62)
///     graph.add_edge("ab", "a", "b", label="primary")
///     graph.build_adjacency()
///     dual = dual_mapper(graph, 120.0)
#[cfg_attr(feature = "stubgen", gen_stub_pyclass)]
#[pyclass(name = "PrimalGraph")]
pub struct PyPrimalGraph {
    pub(crate) inner: PrimalGraph,
}

#[cfg_attr(feature = "stubgen", gen_stub_pymethods)]
#[pymethods]
impl PyPrimalGraph {
    /// Create an empty graph. With `use_label=False` street classes are
    /// ignored and every segment is `unclassified` (ICN).
    #[new]
    #[pyo3(signature = (use_label = true))]
    pub fn new(use_label: bool) -> Self {
        Self {
            inner: PrimalGraph::new(use_label),
        }
    }

    /// Add an intersection. Raises `ValueError` on duplicate ids and on
    /// coordinates that are not finite or out of range.
    pub fn add_node(&mut self, id: String, lat: f64, lon: f64) -> PyResult<()> {
        self.inner
            .add_node(id, lat, lon)
            .map(|_| ())
            .map_err(|e| to_py_err("Failed to add node", e))
    }

    /// Add a street segment between two existing intersections.
    ///
    /// A missing length is computed from the endpoint coordinates, a missing
    /// name becomes `unknown` and a missing label `unclassified`.
    #[pyo3(signature = (id, source, target, length = None, name = None, label = None))]
    pub fn add_edge(
        &mut self,
        id: String,
        source: String,
        target: String,
        length: Option<f64>,
        name: Option<String>,
        label: Option<String>,
    ) -> PyResult<()> {
        let record = EdgeRecord {
            id,
            source,
            target,
            length,
            name,
            label,
        };
        self.inner
            .add_edge(record)
            .map(|_| ())
            .map_err(|e| to_py_err("Failed to add edge", e))
    }

    /// Rebuild the neighborhood index after the last insertion.
    pub fn build_adjacency(&mut self) {
        self.inner.build_adjacency();
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Number of segments already claimed by a street.
    pub fn consumed_count(&self) -> usize {
        self.inner.consumed_count()
    }

    /// Ids of the intersections adjacent to `id`.
    pub fn neighbors(&self, id: &str) -> PyResult<Vec<String>> {
        let index = self
            .inner
            .node_index(id)
            .ok_or_else(|| to_py_err("Unknown node", Error::NotFound(id.to_string())))?;
        Ok(self
            .inner
            .neighbors_of(index)
            .iter()
            .map(|&(neighbor, _)| self.inner.graph[neighbor].id.clone())
            .collect())
    }

    fn __repr__(&self) -> String {
        format!(
            "PrimalGraph with {} nodes and {} edges ({})",
            self.inner.node_count(),
            self.inner.edge_count(),
            if self.inner.use_label() { "HICN" } else { "ICN" }
        )
    }

    fn __str__(&self) -> String {
        self.__repr__()
    }
}

/// Load a primal graph from CSV files
///
/// Parameters
/// ----------
/// nodes_path : str
///     CSV file with rows ``id, longitude, latitude``
/// edges_path : str
///     CSV file with rows ``id, source, target, length, name, label``
/// use_label : bool, default=True
///     Keep street classes (HICN). With ``False`` every segment is
///     ``unclassified`` (ICN).
/// has_header : bool, default=False
///     Skip the first row of both files
///
/// Returns
/// -------
/// PrimalGraph
///     Graph with its adjacency index already built
///
/// Raises
/// ------
/// ValueError
///     If a node has invalid coordinates or an edge references an unknown node
/// RuntimeError
///     If a file cannot be read
///
/// Notes
/// -----
/// Self-loops, zero-length segments and rows with unparsable lengths are
/// dropped with a warning.
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction(name = "read_csv")]
#[pyo3(signature = (nodes_path, edges_path, use_label = true, has_header = false))]
pub fn py_read_csv(
    nodes_path: &str,
    edges_path: &str,
    use_label: bool,
    has_header: bool,
) -> PyResult<PyPrimalGraph> {
    let graph = read_csv(
        &PathBuf::from(nodes_path),
        &PathBuf::from(edges_path),
        use_label,
        has_header,
    )
    .map_err(|e| to_py_err("Failed to read primal graph", e))?;

    Ok(PyPrimalGraph { inner: graph })
}
