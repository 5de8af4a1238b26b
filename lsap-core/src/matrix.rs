//! Dense cost matrix view.
//!
//! A read-only, row-major 2-D view over a contiguous caller-owned buffer.
//! The view carries no algorithmic content; it only checks that the
//! buffer agrees with the requested shape and exposes indexing.

use crate::error::ShapeError;

/// Read-only `nrows x ncols` view of a row-major cost buffer.
#[derive(Debug, Clone, Copy)]
pub struct CostMatrix<'a, T> {
    data: &'a [T],
    nrows: usize,
    ncols: usize,
}

impl<'a, T: Copy> CostMatrix<'a, T> {
    /// Wrap a row-major buffer as an `nrows x ncols` matrix.
    ///
    /// Fails with [`ShapeError::BufferSize`] when the buffer does not
    /// hold exactly `nrows * ncols` elements.
    pub fn from_slice(data: &'a [T], nrows: usize, ncols: usize) -> Result<Self, ShapeError> {
        let expected = nrows
            .checked_mul(ncols)
            .ok_or(ShapeError::BufferSize { len: data.len(), nrows, ncols })?;
        if data.len() != expected {
            return Err(ShapeError::BufferSize { len: data.len(), nrows, ncols });
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// True when the matrix has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nrows == 0 || self.ncols == 0
    }

    /// Entry at `(row, col)`.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> T {
        debug_assert!(row < self.nrows && col < self.ncols);
        self.data[row * self.ncols + col]
    }

    /// Contiguous view of one row.
    #[inline]
    pub fn row(&self, row: usize) -> &'a [T] {
        debug_assert!(row < self.nrows);
        &self.data[row * self.ncols..(row + 1) * self.ncols]
    }

    /// The underlying row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }
}
