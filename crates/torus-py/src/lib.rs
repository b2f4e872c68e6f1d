//! Python bindings for Torus
#![allow(
    clippy::needless_pass_by_value,
    reason = "PyReadonlyArray types are thin wrappers passed by value in pyo3 idioms"
)]
#![allow(
    clippy::unnecessary_wraps,
    reason = "PyO3 methods conventionally return PyResult for Python-facing APIs"
)]

use pyo3::prelude::*;
use pyo3::types::PyModule;

mod array_api;
mod types;

use array_api::manipulation::{
    circshift_coo_from_parts, circshift_csr_from_parts, circshift_from_parts, wrap_indices_py,
};
use types::{Csc64, Csr64};

/// Size rayon's global pool; `None` keeps the default
#[pyfunction]
#[pyo3(signature = (num_threads = None))]
fn init_parallel(num_threads: Option<usize>) -> PyResult<()> {
    torus_kernels::init_parallel(num_threads)
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))
}

#[pymodule]
fn _core(m: &Bound<PyModule>) -> PyResult<()> {
    m.add("version", torus_core::VERSION)?;
    m.add_class::<Csc64>()?;
    m.add_class::<Csr64>()?;
    m.add_function(wrap_pyfunction!(wrap_indices_py, m)?)?;
    m.add_function(wrap_pyfunction!(circshift_from_parts, m)?)?;
    m.add_function(wrap_pyfunction!(circshift_csr_from_parts, m)?)?;
    m.add_function(wrap_pyfunction!(circshift_coo_from_parts, m)?)?;
    m.add_function(wrap_pyfunction!(init_parallel, m)?)?;
    Ok(())
}
