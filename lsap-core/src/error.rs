//! Error types for the assignment solver.

use thiserror::Error;

/// Shape and layout precondition violations.
///
/// All of these are detected before any state array is mutated.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// The backing buffer does not hold `nrows * ncols` elements.
    #[error("cost buffer has {len} elements, expected {nrows}x{ncols}")]
    BufferSize {
        /// Length of the provided buffer
        len: usize,
        /// Requested number of rows
        nrows: usize,
        /// Requested number of columns
        ncols: usize,
    },

    /// The matrix has more rows than columns.
    ///
    /// The augmenting-path engine assigns every row, so it requires
    /// `nrows <= ncols`. Callers with a tall matrix solve the transpose
    /// (see [`linear_sum_assignment`](crate::linear_sum_assignment)).
    #[error("cost matrix has {nrows} rows and {ncols} columns; rows may not exceed columns")]
    TooManyRows {
        /// Number of rows
        nrows: usize,
        /// Number of columns
        ncols: usize,
    },

    /// The row selected for augmentation does not exist.
    #[error("row {row} out of range for a matrix with {nrows} rows")]
    RowOutOfRange {
        /// Offending row index
        row: usize,
        /// Number of rows
        nrows: usize,
    },

    /// A state array does not match the matrix dimensions.
    #[error("{name} has length {len}, expected {expected}")]
    LengthMismatch {
        /// Name of the offending array
        name: &'static str,
        /// Provided length
        len: usize,
        /// Expected length
        expected: usize,
    },
}

/// Errors produced by [`solve`](crate::solve) and [`augment`](crate::augment).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// No unassigned column is reachable through finite-cost edges.
    ///
    /// After this failure the state arrays passed to the engine hold an
    /// unspecified partial search state and must be discarded.
    #[error("cost matrix is infeasible")]
    Infeasible,

    /// The cost matrix contains `NaN` or `-inf`.
    ///
    /// `+inf` is legal and marks a forbidden row/column pair.
    #[error("cost matrix contains invalid numeric entries")]
    InvalidEntries,

    /// A shape precondition was violated before the engine ran.
    #[error(transparent)]
    Shape(#[from] ShapeError),
}
