//! Pixel framebuffer for the 5x5 matrix.

use crate::COLOR_OFF;
use crate::types::MatrixError;
use palette::Srgb;

/// Matrix rows.
pub const ROWS: usize = 5;
/// Matrix columns.
pub const COLS: usize = 5;
/// Total LED count.
pub const LED_COUNT: usize = ROWS * COLS;

/// Row-major framebuffer index for a matrix cell.
#[inline]
pub const fn map_index(row: usize, col: usize) -> usize {
    row * COLS + col
}

/// Ordered collection of the 25 cell colors, row-major.
///
/// Allocated inline, cleared at construction, never resized. The
/// [`MatrixRenderer`](crate::matrix::MatrixRenderer) owns the only instance
/// that reaches hardware; this type is public so alternative sinks and
/// tests can build frames of their own.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    cells: [Srgb<u8>; LED_COUNT],
}

impl Framebuffer {
    /// Creates an all-dark framebuffer.
    pub const fn new() -> Self {
        Self {
            cells: [COLOR_OFF; LED_COUNT],
        }
    }

    /// Writes one cell.
    ///
    /// # Errors
    /// Returns [`MatrixError::PixelOutOfRange`] for `index >= 25`.
    pub fn set_pixel(&mut self, index: usize, r: u8, g: u8, b: u8) -> Result<(), MatrixError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(MatrixError::PixelOutOfRange { index })?;
        *cell = Srgb::new(r, g, b);
        Ok(())
    }

    /// Writes one cell, silently ignoring out-of-range indices.
    ///
    /// Lenient variant for render paths that have already validated their
    /// coordinates; prefer [`set_pixel`](Self::set_pixel) elsewhere.
    pub fn set_pixel_lossy(&mut self, index: usize, r: u8, g: u8, b: u8) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Srgb::new(r, g, b);
        }
    }

    /// Sets every cell to `(0, 0, 0)`.
    pub fn clear(&mut self) {
        self.cells = [COLOR_OFF; LED_COUNT];
    }

    /// Reads one cell, `None` when out of range.
    pub fn pixel(&self, index: usize) -> Option<Srgb<u8>> {
        self.cells.get(index).copied()
    }

    /// Iterates cells in framebuffer (transmission) order.
    pub fn iter(&self) -> impl Iterator<Item = &Srgb<u8>> {
        self.cells.iter()
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}
