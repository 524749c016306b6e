// FFI Facade: The main entry point for Python.
// This file declares the crate's modules and uses `pyo3` to define the
// `_core` Python module consumed by the Cornerstone backend.

pub mod bindings;
pub mod display;
pub mod resolve;
pub mod schedule;
pub mod validation;

use pyo3::prelude::*;

use bindings::python::{resolve_snapshot_json, PyTimelineGraph};

/// A simple function to confirm the Rust core is callable from Python.
#[pyfunction]
fn rust_core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// --- Module Definition ---
/// This function defines the `cornerstone._core` Python module.
/// The name `_core` is chosen to indicate it's an internal, compiled component.
#[pymodule]
fn _core(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTimelineGraph>()?;
    m.add_function(wrap_pyfunction!(rust_core_version, m)?)?;
    m.add_function(wrap_pyfunction!(resolve_snapshot_json, m)?)?;
    Ok(())
}
