use numpy::ndarray::Array2;
use numpy::{IntoPyArray, PyArray1, PyArray2, PyReadonlyArray1};
use pyo3::prelude::*;

use torus_core::Csc;
use torus_kernels::{
    CircShift, csc_to_csr_f64_i64, todense_csc_f64_i64, transpose_csc_f64_i64,
};

use super::csr::Csr64;
use crate::array_api::helpers::{convert_axis, value_error};

#[pyclass]
pub struct Csc64 {
    pub(crate) inner: Csc<f64, i64>,
}

#[pymethods]
impl Csc64 {
    #[new]
    fn new(
        nrows: usize,
        ncols: usize,
        indptr: PyReadonlyArray1<'_, i64>,
        indices: PyReadonlyArray1<'_, i64>,
        data: PyReadonlyArray1<'_, f64>,
        check: bool,
    ) -> PyResult<Self> {
        let csc = Csc::from_parts(
            nrows,
            ncols,
            indptr.as_slice()?.to_vec(),
            indices.as_slice()?.to_vec(),
            data.as_slice()?.to_vec(),
            check,
        )
        .map_err(value_error)?;
        Ok(Self { inner: csc })
    }

    fn shape(&self) -> (usize, usize) {
        self.inner.shape()
    }

    fn nnz(&self) -> usize {
        self.inner.nnz()
    }

    #[getter]
    fn indptr<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<i64>> {
        PyArray1::from_slice(py, &self.inner.indptr)
    }

    #[getter]
    fn indices<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<i64>> {
        PyArray1::from_slice(py, &self.inner.indices)
    }

    #[getter]
    fn data<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        PyArray1::from_slice(py, &self.inner.data)
    }

    /// Circularly shift by `shift` along `axis` (0 = rows, 1 = columns)
    #[pyo3(signature = (shift, axis, wrapping = false))]
    fn circshift(&self, py: Python<'_>, shift: i64, axis: i64, wrapping: bool) -> PyResult<Self> {
        let axis = convert_axis(axis)?;
        let inner = if wrapping {
            py.detach(|| self.inner.circshift_wrapping(shift, axis))
        } else {
            py.detach(|| self.inner.circshift(shift, axis))
                .map_err(value_error)?
        };
        Ok(Self { inner })
    }

    fn transpose(&self, py: Python<'_>) -> PyResult<Self> {
        let inner = py
            .detach(|| transpose_csc_f64_i64(&self.inner))
            .map_err(value_error)?;
        Ok(Self { inner })
    }

    fn tocsr(&self, py: Python<'_>) -> PyResult<Csr64> {
        let inner = py
            .detach(|| csc_to_csr_f64_i64(&self.inner))
            .map_err(value_error)?;
        Ok(Csr64 { inner })
    }

    fn todense<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<f64>>> {
        let dense = py
            .detach(|| todense_csc_f64_i64(&self.inner))
            .map_err(value_error)?;
        let arr = Array2::from_shape_vec(self.inner.shape(), dense).map_err(|_| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>("Output shape mismatch")
        })?;
        Ok(arr.into_pyarray(py))
    }
}
