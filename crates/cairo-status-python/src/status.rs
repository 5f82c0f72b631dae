//! The `Status` value attached to raised errors.

use cairo_status::Status;
use pyo3::{
    prelude::*,
    sync::PyOnceLock,
    types::{PyDict, PyType},
};
use strum::IntoEnumIterator;

static STATUS_TYPE: PyOnceLock<Py<PyType>> = PyOnceLock::new();

/// Returns `Status`, an `enum.IntEnum` with one member per native code.
///
/// Built once per interpreter from [`Status::iter`], so members are real
/// `int`s (`Status.NO_MEMORY == 1`, `Status.NO_MEMORY + 1 == 2`).
pub fn status_type(py: Python<'_>) -> PyResult<&Bound<'_, PyType>> {
    STATUS_TYPE
        .get_or_try_init(py, || {
            let members: Vec<(&'static str, i32)> = Status::iter().map(|s| (s.name(), s.code())).collect();
            let kwargs = PyDict::new(py);
            kwargs.set_item("module", "_cairo_status")?;
            let int_enum = py.import("enum")?.getattr("IntEnum")?;
            let ty = int_enum.call(("Status", members), Some(&kwargs))?.cast_into::<PyType>()?;
            Ok::<_, PyErr>(ty.unbind())
        })
        .map(|ty| ty.bind(py))
}

/// Wraps a raw code for the `status` attribute of a raised error.
///
/// Known codes become the shared `Status` member, unknown codes are passed
/// through as a plain `int`.
pub fn wrap_status(py: Python<'_>, code: i32) -> PyResult<Bound<'_, PyAny>> {
    match Status::from_raw(code) {
        Some(status) => status_type(py)?.call1((status.code(),)),
        None => Ok(code.into_pyobject(py)?.into_any()),
    }
}
