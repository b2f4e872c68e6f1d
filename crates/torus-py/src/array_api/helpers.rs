//! Common helper functions shared by the bindings

use numpy::PyArray1;
use pyo3::prelude::*;

use torus_core::{Axis, Csc, Csr};

/// `(indptr, indices, data, nrows, ncols)` handed back to Python
pub(crate) type CompressedParts<'py> = (
    Bound<'py, PyArray1<i64>>,
    Bound<'py, PyArray1<i64>>,
    Bound<'py, PyArray1<f64>>,
    usize,
    usize,
);

/// Map a core error onto `ValueError`
pub(crate) fn value_error(err: torus_core::Error) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
}

/// Convert the integer axis code (0 = rows, 1 = columns)
///
/// # Errors
/// Returns `PyValueError` for any other code
pub(crate) fn convert_axis(axis: i64) -> PyResult<Axis> {
    Axis::try_from(axis).map_err(value_error)
}

pub(crate) fn csc_parts(py: Python<'_>, a: Csc<f64, i64>) -> CompressedParts<'_> {
    (
        PyArray1::from_vec(py, a.indptr),
        PyArray1::from_vec(py, a.indices),
        PyArray1::from_vec(py, a.data),
        a.nrows,
        a.ncols,
    )
}

pub(crate) fn csr_parts(py: Python<'_>, a: Csr<f64, i64>) -> CompressedParts<'_> {
    (
        PyArray1::from_vec(py, a.indptr),
        PyArray1::from_vec(py, a.indices),
        PyArray1::from_vec(py, a.data),
        a.nrows,
        a.ncols,
    )
}
