//! The structured exception raised for failed native calls.
//!
//! ## Exception Hierarchy
//!
//! ```text
//! Error(Exception)                     # carries `status` next to the message
//! └── MemoryError(Error, MemoryError)  # synthesized per out-of-memory failure
//! ```
//!
//! Read and write failures are raised as plain `OSError` and are not part of
//! this hierarchy.

use pyo3::{
    PyVisit,
    exceptions::{PyException, PyTypeError},
    ffi,
    gc::PyTraverseError,
    intern,
    prelude::*,
    types::{PyDict, PyString, PyTuple, PyType},
};

use crate::translate::check_status;

/// Base exception for every error reported by the graphics library.
///
/// Constructed like any exception, `Error(message, status)`; the second
/// argument becomes the `status` attribute. `str()` shows only the message.
#[pyclass(name = "Error", extends = PyException, module = "_cairo_status", subclass)]
pub struct CairoError {
    /// `args[1]` as stored by the base initialiser, replaced by the `status`
    /// setter.
    ///
    /// `None` is reported to Python as `None`; it is only stored when the
    /// stored args have fewer than two items or after the collector cleared it.
    status: Option<Py<PyAny>>,
}

#[pymethods]
impl CairoError {
    #[new]
    #[pyo3(signature = (*args))]
    fn new(args: &Bound<'_, PyTuple>) -> Self {
        // `Error(...)` itself runs the inherited base initialiser, which stores
        // these same args; subclasses and explicit calls go through `__init__`
        Self {
            status: args.get_item(1).ok().map(Bound::unbind),
        }
    }

    /// Runs the base exception initialiser, then takes `status` from the
    /// stored `args`.
    #[pyo3(signature = (*args))]
    fn __init__(slf: &Bound<'_, Self>, args: &Bound<'_, PyTuple>) -> PyResult<()> {
        let py = slf.py();
        let base_init = py.get_type::<PyException>().getattr(intern!(py, "__init__"))?;
        let mut call_args = Vec::with_capacity(args.len() + 1);
        call_args.push(slf.as_any().clone());
        call_args.extend(args.iter());
        base_init.call1(PyTuple::new(py, call_args)?)?;

        let stored = slf.getattr(intern!(py, "args"))?.cast_into::<PyTuple>()?;
        slf.borrow_mut().status = stored.get_item(1).ok().map(Bound::unbind);
        Ok(())
    }

    #[getter]
    fn status(&self, py: Python<'_>) -> Py<PyAny> {
        self.status.as_ref().map_or_else(|| py.None(), |status| status.clone_ref(py))
    }

    #[setter]
    fn set_status(&mut self, value: Py<PyAny>) {
        self.status = Some(value);
    }

    /// Translates a raw status code, raising the matching exception on failure.
    #[classmethod]
    #[pyo3(name = "_check_status")]
    fn check_status_cls(cls: &Bound<'_, PyType>, status: i32) -> PyResult<()> {
        check_status(cls.py(), status)
    }

    // pyo3 rejects every assignment unless both halves of the setattr slot are defined
    fn __setattr__(slf: &Bound<'_, Self>, name: &Bound<'_, PyString>, value: &Bound<'_, PyAny>) -> PyResult<()> {
        generic_setattr(slf.as_any(), name, Some(value))
    }

    fn __delattr__(slf: &Bound<'_, Self>, name: &Bound<'_, PyString>) -> PyResult<()> {
        if name.to_cow()? == "status" {
            return Err(PyTypeError::new_err("Cannot delete attribute"));
        }
        generic_setattr(slf.as_any(), name, None)
    }

    fn __str__<'py>(slf: &Bound<'py, Self>) -> PyResult<Bound<'py, PyString>> {
        let py = slf.py();
        let args = slf.getattr(intern!(py, "args"))?.cast_into::<PyTuple>()?;
        if let Ok(message) = args.get_item(0) {
            message.str()
        } else {
            let base_str = py.get_type::<PyException>().getattr(intern!(py, "__str__"))?;
            Ok(base_str.call1((slf,))?.cast_into::<PyString>()?)
        }
    }

    fn __traverse__(&self, visit: PyVisit<'_>) -> Result<(), PyTraverseError> {
        if let Some(status) = &self.status {
            visit.call(status)?;
        }
        Ok(())
    }

    fn __clear__(&mut self) {
        self.status = None;
    }
}

/// Stores or deletes an attribute through the generic attribute protocol.
///
/// Attribute assignment on `Error` is routed here so that deleting `status`
/// can be rejected while every other attribute, and assignment to `status`
/// itself, keeps the base exception behaviour.
fn generic_setattr(obj: &Bound<'_, PyAny>, name: &Bound<'_, PyString>, value: Option<&Bound<'_, PyAny>>) -> PyResult<()> {
    let value = value.map_or(std::ptr::null_mut(), Bound::as_ptr);
    // SAFETY: `obj` and `name` are live borrowed references for the whole call
    // and `value` is either live or null, which requests deletion.
    let ret = unsafe { ffi::PyObject_GenericSetAttr(obj.as_ptr(), name.as_ptr(), value) };
    if ret == -1 {
        Err(PyErr::fetch(obj.py()))
    } else {
        Ok(())
    }
}

/// Returns the finalised `Error` type.
///
/// The type object is readied lazily on first use, exactly once per
/// interpreter, with `Exception` as its base.
#[must_use]
pub fn error_type(py: Python<'_>) -> Bound<'_, PyType> {
    py.get_type::<CairoError>()
}

/// Synthesizes `type(name, (primary, secondary), {})`.
///
/// The result is not cached: every call builds a fresh type. A rejection by
/// `type` (e.g. incompatible base layouts) is returned as the error.
///
/// The namespace is left empty, so `__module__` is only set when a Python
/// frame is active to take it from.
pub fn combine_types<'py>(
    primary: &Bound<'py, PyType>,
    secondary: &Bound<'py, PyType>,
    name: &str,
) -> PyResult<Bound<'py, PyType>> {
    let py = primary.py();
    let bases = PyTuple::new(py, [primary, secondary])?;
    let combined = py.get_type::<PyType>().call1((name, bases, PyDict::new(py)))?;
    Ok(combined.cast_into::<PyType>()?)
}
