use pyo3::prelude::*;
#[cfg(feature = "stubgen")]
use pyo3_stub_gen::define_stub_info_gatherer;

use dual::{PyDualGraph, PyDualNode, py_dual_mapper};
use model::{PyPrimalGraph, py_read_csv};

pub mod dual;
pub mod model;

/// A Python module implemented in Rust.
#[pymodule]
fn street_continuity(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();

    m.add_class::<PyPrimalGraph>()?;
    m.add_function(wrap_pyfunction!(py_read_csv, m)?)?;

    m.add_class::<PyDualNode>()?;
    m.add_class::<PyDualGraph>()?;
    m.add_function(wrap_pyfunction!(py_dual_mapper, m)?)?;
    Ok(())
}

#[cfg(feature = "stubgen")]
define_stub_info_gatherer!(stub_info);
