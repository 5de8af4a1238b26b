//! Solver driver.
//!
//! Builds a full assignment by running one augmentation per row against
//! an initially empty matching, reusing a single scratch workspace across
//! all rounds. Also hosts the scipy-shaped [`linear_sum_assignment`]
//! convenience entry point, which additionally handles tall matrices and
//! maximization by transposing / negating the input.

use std::fmt;

use crate::augment::{augment_with, AugmentWorkspace};
use crate::error::{ShapeError, SolveError};
use crate::matrix::CostMatrix;
use crate::scalar::{AssignIndex, CostScalar};

/// Solver options.
#[derive(Debug, Clone, Default)]
pub struct SolveOptions {
    /// Dump the dual vectors and assignment arrays to stderr after each
    /// augmentation round. Diagnostic only.
    pub verbose: bool,
}

/// An optimal assignment together with its dual certificate.
///
/// The duals witness optimality: `u[i] + v[j] <= C[i, j]` everywhere,
/// with equality on every assigned pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment<I, T> {
    /// Row assigned to each column, `-1` where the column is unused.
    pub row4col: Vec<I>,
    /// Column assigned to each row; every entry is valid after a solve.
    pub col4row: Vec<I>,
    /// Dual values for rows.
    pub u: Vec<T>,
    /// Dual values for columns.
    pub v: Vec<T>,
}

impl<I: AssignIndex, T: CostScalar> Assignment<I, T> {
    /// Number of rows in the solved problem.
    pub fn num_rows(&self) -> usize {
        self.col4row.len()
    }

    /// Number of columns in the solved problem.
    pub fn num_cols(&self) -> usize {
        self.row4col.len()
    }

    /// Matched `(row, column)` pairs in row order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.col4row
            .iter()
            .enumerate()
            .filter(|(_, col)| !col.is_unassigned())
            .map(|(row, col)| (row, col.index()))
    }

    /// Total cost of the assignment under `costs`, `sum C[i, col4row[i]]`.
    pub fn total_cost(&self, costs: &CostMatrix<'_, T>) -> T {
        self.pairs()
            .fold(T::zero(), |acc, (row, col)| acc + costs.at(row, col))
    }
}

/// Solve the rectangular linear sum assignment problem for `costs`.
///
/// Requires `nrows <= ncols`; every row ends up assigned to a distinct
/// column. Entries must be finite or `+inf` (a forbidden pair).
///
/// # Example
///
/// ```
/// use lsap_core::{solve, Assignment, CostMatrix};
///
/// let data = [4.0, 1.0, 3.0, 2.0, 0.0, 5.0, 3.0, 2.0, 2.0];
/// let costs = CostMatrix::from_slice(&data, 3, 3)?;
/// let assignment: Assignment<i64, f64> = solve(&costs)?;
///
/// assert_eq!(assignment.col4row, vec![1, 0, 2]);
/// assert_eq!(assignment.total_cost(&costs), 5.0);
/// # Ok::<(), lsap_core::SolveError>(())
/// ```
pub fn solve<I, T>(costs: &CostMatrix<'_, T>) -> Result<Assignment<I, T>, SolveError>
where
    I: AssignIndex,
    T: CostScalar,
{
    solve_with_options(costs, &SolveOptions::default())
}

/// Like [`solve`], with explicit [`SolveOptions`].
pub fn solve_with_options<I, T>(
    costs: &CostMatrix<'_, T>,
    options: &SolveOptions,
) -> Result<Assignment<I, T>, SolveError>
where
    I: AssignIndex,
    T: CostScalar,
{
    let nrows = costs.nrows();
    let ncols = costs.ncols();
    if nrows > ncols {
        return Err(ShapeError::TooManyRows { nrows, ncols }.into());
    }
    validate_entries(costs)?;

    let mut assignment = Assignment {
        row4col: vec![I::unassigned(); ncols],
        col4row: vec![I::unassigned(); nrows],
        u: vec![T::zero(); nrows],
        v: vec![T::zero(); ncols],
    };

    let mut workspace = AugmentWorkspace::new(nrows, ncols);
    for free_row in 0..nrows {
        augment_with(
            costs,
            free_row,
            &mut assignment.row4col,
            &mut assignment.col4row,
            &mut assignment.u,
            &mut assignment.v,
            &mut workspace,
        )?;
        if options.verbose {
            trace_round(free_row, nrows, &assignment);
        }
    }

    Ok(assignment)
}

/// Solve in the scipy `linear_sum_assignment` shape.
///
/// `data` is the row-major `nrows x ncols` cost buffer. Returns the
/// matched `(row_ind, col_ind)` pairs with `row_ind` sorted ascending.
/// Unlike [`solve`], a tall matrix (`nrows > ncols`) is handled by
/// solving the transpose, and `maximize` negates the costs first.
pub fn linear_sum_assignment<T: CostScalar>(
    data: &[T],
    nrows: usize,
    ncols: usize,
    maximize: bool,
) -> Result<(Vec<usize>, Vec<usize>), SolveError> {
    let negated: Vec<T>;
    let effective: &[T] = if maximize {
        negated = data.iter().map(|&c| -c).collect();
        &negated
    } else {
        data
    };

    if nrows <= ncols {
        let costs = CostMatrix::from_slice(effective, nrows, ncols)?;
        let assignment: Assignment<i64, T> = solve(&costs)?;
        let col_ind = assignment.col4row.iter().map(|c| c.index()).collect();
        Ok(((0..nrows).collect(), col_ind))
    } else {
        // Tall matrix: assign every column instead, then report the pairs
        // back in row order.
        let mut transposed = Vec::with_capacity(effective.len());
        for col in 0..ncols {
            for row in 0..nrows {
                transposed.push(effective[row * ncols + col]);
            }
        }
        let costs = CostMatrix::from_slice(&transposed, ncols, nrows)?;
        let assignment: Assignment<i64, T> = solve(&costs)?;
        let mut pairs: Vec<(usize, usize)> = assignment
            .col4row
            .iter()
            .enumerate()
            .map(|(col, row)| (row.index(), col))
            .collect();
        pairs.sort_unstable();
        Ok(pairs.into_iter().unzip())
    }
}

/// Reject `NaN` and `-inf` entries before the engine runs.
///
/// `+inf` stays legal as a forbidden pair; anything else non-finite
/// would silently corrupt the shortest-path distances.
fn validate_entries<T: CostScalar>(costs: &CostMatrix<'_, T>) -> Result<(), SolveError> {
    for &entry in costs.as_slice() {
        if entry.is_nan() || (entry.is_infinite() && entry < T::zero()) {
            return Err(SolveError::InvalidEntries);
        }
    }
    Ok(())
}

fn trace_round<I: AssignIndex, T: CostScalar>(
    free_row: usize,
    nrows: usize,
    assignment: &Assignment<I, T>,
) {
    eprintln!("lsap: augmented row {} / {}", free_row + 1, nrows);
    eprintln!("  u:       {}", join(&assignment.u));
    eprintln!("  v:       {}", join(&assignment.v));
    eprintln!("  col4row: {}", join(&assignment.col4row));
    eprintln!("  row4col: {}", join(&assignment.row4col));
}

fn join<V: fmt::Display>(values: &[V]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_problem_is_a_noop() {
        let data: [f64; 0] = [];
        let costs = CostMatrix::from_slice(&data, 0, 0).unwrap();
        let assignment: Assignment<i64, f64> = solve(&costs).unwrap();
        assert!(assignment.col4row.is_empty());
        assert!(assignment.row4col.is_empty());
        assert!(assignment.u.is_empty());
        assert!(assignment.v.is_empty());
    }

    #[test]
    fn tall_matrix_is_rejected() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let costs = CostMatrix::from_slice(&data, 3, 2).unwrap();
        let err = solve::<i64, f64>(&costs).unwrap_err();
        assert_eq!(
            err,
            SolveError::Shape(ShapeError::TooManyRows { nrows: 3, ncols: 2 })
        );
    }

    #[test]
    fn nan_entries_are_rejected() {
        let data = [1.0, f64::NAN, 3.0, 4.0];
        let costs = CostMatrix::from_slice(&data, 2, 2).unwrap();
        assert_eq!(
            solve::<i64, f64>(&costs).unwrap_err(),
            SolveError::InvalidEntries
        );
    }

    #[test]
    fn negative_infinity_is_rejected() {
        let data = [1.0, f64::NEG_INFINITY, 3.0, 4.0];
        let costs = CostMatrix::from_slice(&data, 2, 2).unwrap();
        assert_eq!(
            solve::<i64, f64>(&costs).unwrap_err(),
            SolveError::InvalidEntries
        );
    }

    #[test]
    fn wrapper_sorts_tall_matrices_by_row() {
        // 4 rows, 2 columns: only two rows get matched.
        let data = [8.0, 1.0, 2.0, 9.0, 7.0, 7.0, 3.0, 3.0];
        let (row_ind, col_ind) = linear_sum_assignment(&data, 4, 2, false).unwrap();
        assert_eq!(row_ind.len(), 2);
        assert!(row_ind.windows(2).all(|w| w[0] < w[1]));
        // Optimal pairs: row 0 -> col 1 (1), row 1 -> col 0 (2).
        assert_eq!(row_ind, vec![0, 1]);
        assert_eq!(col_ind, vec![1, 0]);
    }

    #[test]
    fn wrapper_maximize_flips_the_objective() {
        let data = [1.0, 2.0, 4.0, 3.0];
        let (_, col_ind) = linear_sum_assignment(&data, 2, 2, true).unwrap();
        // max picks 2 + 4 = 6: row 0 -> col 1, row 1 -> col 0.
        assert_eq!(col_ind, vec![1, 0]);
    }

    #[test]
    fn wrapper_rejects_infinite_entries_under_maximize() {
        // +inf flips to -inf once negated, which is not a valid cost.
        let data = [1.0, f64::INFINITY, 2.0, 3.0];
        assert_eq!(
            linear_sum_assignment(&data, 2, 2, true).unwrap_err(),
            SolveError::InvalidEntries
        );
    }
}
