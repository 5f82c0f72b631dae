//! Turns native status codes into raised Python exceptions.

use cairo_status::Error;
use pyo3::{
    exceptions::{PyMemoryError, PyOSError},
    prelude::*,
    types::PyType,
};

use crate::{
    exceptions::{combine_types, error_type},
    status::wrap_status,
};

/// Converts a core error into the exception to raise.
///
/// - out of memory: a fresh `MemoryError(Error, MemoryError)` subclass
/// - read/write failures: a plain `OSError`
/// - anything else: `Error`
///
/// If building the exception itself fails, that failure is returned instead.
#[must_use]
pub fn error_to_py(py: Python<'_>, error: &Error) -> PyErr {
    let exc_type = match error {
        Error::Io(io) => return PyOSError::new_err(io.message()),
        Error::LibraryAndOutOfMemory(_) => {
            match combine_types(&error_type(py), &py.get_type::<PyMemoryError>(), "MemoryError") {
                Ok(combined) => combined,
                Err(build_error) => return build_error,
            }
        }
        Error::Library(_) => error_type(py),
    };
    instantiate_error(&exc_type, error)
}

/// Instantiates `exc_type(message, status)` for a library error.
///
/// A failure while wrapping the status or constructing the instance is
/// returned as-is.
#[must_use]
pub fn instantiate_error(exc_type: &Bound<'_, PyType>, error: &Error) -> PyErr {
    let build = || -> PyResult<PyErr> {
        let status = wrap_status(exc_type.py(), error.code())?;
        let exc = exc_type.call1((error.message(), status))?;
        Ok(PyErr::from_value(exc))
    };
    build().unwrap_or_else(|build_error| build_error)
}

/// Translates a raw status code, returning the exception to raise on failure.
pub fn check_status(py: Python<'_>, code: i32) -> PyResult<()> {
    cairo_status::check_status(code).map_err(|error| error_to_py(py, &error))
}

/// Translates a raw status code into the interpreter's pending-exception slot.
///
/// For call sites that follow the C-API convention. Returns `true` when an
/// exception is pending afterwards. An exception that is already pending is
/// left in place and `code` is not inspected.
pub fn check_status_pending(py: Python<'_>, code: i32) -> bool {
    if PyErr::occurred(py) {
        tracing::trace!(code, "exception already pending, status not inspected");
        return true;
    }
    match check_status(py, code) {
        Ok(()) => false,
        Err(error) => {
            error.restore(py);
            true
        }
    }
}
