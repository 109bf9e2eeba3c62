//! Elef Paint Rust Core
//!
//! Pixel operations for a browser-based raster paint tool, with WASM
//! bindings for the page and Python bindings via PyO3.
//!
//! ## Image Format
//! The surface is RGBA8, row-major, 4 bytes per pixel: the layout of a
//! canvas `ImageData` and of a numpy array shaped `(height, width, 4)`.
//!
//! ## Modules
//! - [`fill`]: paint bucket flood fill (exact color, 4-connected)
//! - [`draw`]: pen/eraser strokes and line, rectangle, circle shapes
//! - [`tools`]: tool selection and the pointer-gesture state machine
//! - [`export`]: flatten onto white and encode PNG
//!
//! ## Features
//! - `wasm`: wasm-bindgen exports (`wasm` module)
//! - `python`: PyO3/numpy extension module `elefpaint_rust`

pub mod color;
pub mod config;
pub mod draw;
pub mod error;
pub mod export;
pub mod fill;
pub mod raster;
pub mod tools;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use color::Rgba;
pub use error::PaintError;
pub use fill::flood_fill;
pub use raster::RasterBuffer;
pub use tools::{PaintCanvas, Tool};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;
    use pyo3::types::PyBytes;

    use crate::color::Rgba;
    use crate::error::PaintError;
    use crate::export;
    use crate::fill;
    use crate::raster::RasterBuffer;

    fn to_py_err(err: PaintError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }

    // ========================================================================
    // Flood Fill
    // ========================================================================

    /// Paint bucket fill of an RGBA u8 image.
    ///
    /// # Arguments
    /// * `image` - Input image of shape (height, width, 4)
    /// * `x`, `y` - Seed pixel; outside the image returns an unchanged copy
    /// * `color` - Fill color as `#RRGGBB` (opaque black if malformed)
    #[pyfunction]
    pub fn flood_fill<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        x: i64,
        y: i64,
        color: &str,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let buffer = RasterBuffer::from_view(image.as_array()).map_err(to_py_err)?;
        let result = fill::flood_fill_hex(&buffer, x, y, color);
        let array = result.to_array().map_err(to_py_err)?;
        Ok(array.into_pyarray(py))
    }

    /// Flood fill returning `(image, pixel_count, bounds)`.
    ///
    /// `bounds` is `(x, y, width, height)` of the repainted region or `None`.
    #[pyfunction]
    pub fn flood_fill_detailed<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        x: i64,
        y: i64,
        color: &str,
    ) -> PyResult<(Bound<'py, PyArray3<u8>>, usize, Option<(usize, usize, usize, usize)>)> {
        let buffer = RasterBuffer::from_view(image.as_array()).map_err(to_py_err)?;
        let outcome = fill::flood_fill_detailed(&buffer, x, y, Rgba::from_hex(color));
        let array = outcome.buffer.to_array().map_err(to_py_err)?;
        Ok((array.into_pyarray(py), outcome.pixel_count, outcome.bounds))
    }

    // ========================================================================
    // Color & Export
    // ========================================================================

    /// Parse `#RRGGBB` into `(r, g, b, a)` (opaque black if malformed).
    #[pyfunction]
    pub fn parse_color(color: &str) -> (u8, u8, u8, u8) {
        let c = Rgba::from_hex(color);
        (c.r, c.g, c.b, c.a)
    }

    /// Flatten an RGBA image onto white and encode it as PNG bytes.
    #[pyfunction]
    pub fn export_png<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyBytes>> {
        let buffer = RasterBuffer::from_view(image.as_array()).map_err(to_py_err)?;
        let png = export::export_png(&buffer).map_err(to_py_err)?;
        Ok(PyBytes::new(py, &png))
    }

    /// Elef Paint Rust extension module
    #[pymodule]
    pub fn elefpaint_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(flood_fill, m)?)?;
        m.add_function(wrap_pyfunction!(flood_fill_detailed, m)?)?;
        m.add_function(wrap_pyfunction!(parse_color, m)?)?;
        m.add_function(wrap_pyfunction!(export_png, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::elefpaint_rust;
