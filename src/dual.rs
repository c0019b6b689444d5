use std::path::PathBuf;

use street_continuity_core::prelude::*;

use pyo3::exceptions::PyIndexError;
use pyo3::prelude::*;
#[cfg(feature = "stubgen")]
use pyo3_stub_gen::derive::{gen_stub_pyclass, gen_stub_pyfunction, gen_stub_pymethods};

use crate::model::{PyPrimalGraph, to_py_err};

/// Street of greatest continuity, a node of the dual graph.
#[cfg_attr(feature = "stubgen", gen_stub_pyclass)]
#[pyclass(name = "DualNode", frozen)]
pub struct PyDualNode {
    #[pyo3(get)]
    id: usize,
    #[pyo3(get)]
    source_node: String,
    #[pyo3(get)]
    target_node: String,
    #[pyo3(get)]
    source_edge: String,
    #[pyo3(get)]
    target_edge: String,
    #[pyo3(get)]
    length: f64,
    #[pyo3(get)]
    label: String,
    #[pyo3(get)]
    names: Vec<String>,
    #[pyo3(get)]
    nodes: Vec<String>,
    #[pyo3(get)]
    edges: Vec<(String, String)>,
}

impl From<&DualNode> for PyDualNode {
    fn from(street: &DualNode) -> Self {
        Self {
            id: street.id,
            source_node: street.source_node.clone(),
            target_node: street.target_node.clone(),
            source_edge: street.source_edge.clone(),
            target_edge: street.target_edge.clone(),
            length: street.length,
            label: street.label.clone(),
            names: street.names.clone(),
            nodes: street.nodes.clone(),
            edges: street.edges.clone(),
        }
    }
}

#[cfg_attr(feature = "stubgen", gen_stub_pymethods)]
#[pymethods]
impl PyDualNode {
    fn __repr__(&self) -> String {
        format!(
            "DualNode(id={}, label='{}', segments={}, length={:.2})",
            self.id,
            self.label,
            self.edges.len(),
            self.length
        )
    }
}

/// DualGraph
///
/// Dual representation of a street network: every node is a street of
/// greatest continuity and every edge links two streets sharing at least one
/// intersection.
///
/// Example:
///
/// .. code-block:: python
///
///     primal = read_csv("nodes.csv", "edges.csv", use_label=True)
///     dual = dual_mapper(primal, 120.0)
///     dual.write_supplementary("streets.csv")
///     geojson = dual.to_geojson(primal)
#[cfg_attr(feature = "stubgen", gen_stub_pyclass)]
#[pyclass(name = "DualGraph")]
pub struct PyDualGraph {
    inner: DualGraph,
}

#[cfg_attr(feature = "stubgen", gen_stub_pymethods)]
#[pymethods]
impl PyDualGraph {
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Crossings as `(source, target)` pairs with `source < target`.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        self.inner
            .edges()
            .iter()
            .map(|edge| (edge.source, edge.target))
            .collect()
    }

    /// All streets in id order.
    pub fn nodes(&self) -> Vec<PyDualNode> {
        self.inner.nodes().iter().map(PyDualNode::from).collect()
    }

    pub fn node(&self, id: usize) -> PyResult<PyDualNode> {
        self.inner
            .node(id)
            .map(PyDualNode::from)
            .ok_or_else(|| PyErr::new::<PyIndexError, _>(format!("No street with id {id}")))
    }

    /// Ids of the streets crossing street `id`.
    pub fn neighbors(&self, id: usize) -> PyResult<Vec<usize>> {
        if id >= self.inner.node_count() {
            return Err(PyErr::new::<PyIndexError, _>(format!(
                "No street with id {id}"
            )));
        }
        Ok(self.inner.neighbors_of(id).to_vec())
    }

    /// Total length of all streets in meters.
    pub fn total_length(&self) -> f64 {
        self.inner.total_length()
    }

    /// Streets as a GeoJSON FeatureCollection string.
    ///
    /// `primal` must be the graph this dual graph was mapped from.
    pub fn to_geojson(&self, primal: &PyPrimalGraph) -> PyResult<String> {
        self.inner
            .to_geojson_string(&primal.inner)
            .map_err(|e| to_py_err("Failed to export streets", e))
    }

    /// Write one CSV row per street: `id, length, label, names, nodes`.
    pub fn write_supplementary(&self, path: &str) -> PyResult<()> {
        write_supplementary(&self.inner, &PathBuf::from(path))
            .map_err(|e| to_py_err("Failed to write streets", e))
    }

    /// Write one CSV row per crossing: `id, source, target`.
    pub fn write_edges(&self, path: &str) -> PyResult<()> {
        write_dual_edges(&self.inner, &PathBuf::from(path))
            .map_err(|e| to_py_err("Failed to write crossings", e))
    }

    fn __len__(&self) -> usize {
        self.inner.node_count()
    }

    fn __repr__(&self) -> String {
        format!(
            "DualGraph with {} streets and {} crossings",
            self.inner.node_count(),
            self.inner.edge_count()
        )
    }

    fn __str__(&self) -> String {
        self.__repr__()
    }
}

/// Map a primal street network into its dual representation
///
/// Every segment, in insertion order, seeds a street that is extended at
/// both ends through the straightest continuation whose angle is at least
/// ``min_angle`` degrees. With a graph built with ``use_label=True`` only
/// segments of the same class are merged (HICN).
///
/// Parameters
/// ----------
/// primal : PrimalGraph
///     Graph to map. Segments claimed by a previous run are released first,
///     so the same graph can be mapped repeatedly.
/// min_angle : float
///     Minimum angle in degrees, in ``]0, 180]``
///
/// Returns
/// -------
/// DualGraph
///
/// Raises
/// ------
/// ValueError
///     If ``min_angle`` is out of range
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction(name = "dual_mapper")]
pub fn py_dual_mapper(primal: &mut PyPrimalGraph, min_angle: f64) -> PyResult<PyDualGraph> {
    let dual = dual_mapper(&mut primal.inner, min_angle)
        .map_err(|e| to_py_err("Failed to map dual graph", e))?;
    Ok(PyDualGraph { inner: dual })
}
