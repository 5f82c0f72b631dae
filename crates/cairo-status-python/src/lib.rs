//! Python exception mapping for cairo status codes.
//!
//! Provides `Error`, the structured exception carrying a `status`
//! attribute, the `Status` int enum it holds, and the translators native
//! call wrappers use to raise them.

mod exceptions;
mod status;
mod translate;

use std::sync::OnceLock;

pub use exceptions::{CairoError, combine_types, error_type};
use pyo3::prelude::*;
pub use status::{status_type, wrap_status};
pub use translate::{check_status, check_status_pending, error_to_py, instantiate_error};

/// Returns the package version, converting Cargo's format to Python's PEP 440.
fn get_version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();

    VERSION.get_or_init(|| {
        let version = env!("CARGO_PKG_VERSION");
        // cargo uses "1.0-alpha1" etc. while python uses "1.0.0a1", good enough for our versions
        version.replace("-alpha", "a").replace("-beta", "b")
    })
}

/// Status codes and exceptions of the cairo bindings.
#[pymodule]
mod _cairo_status {
    use pyo3::prelude::*;

    #[pymodule_export]
    use super::CairoError as Error;
    use super::{get_version, status_type};

    #[pymodule_init]
    fn init(m: &Bound<'_, PyModule>) -> PyResult<()> {
        let py = m.py();
        m.add("Status", status_type(py)?)?;
        m.add("CairoError", py.get_type::<super::CairoError>())?;
        m.add("__version__", get_version())?;
        Ok(())
    }
}
