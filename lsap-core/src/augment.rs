//! Shortest-augmenting-path step.
//!
//! One augmentation grows a partial assignment by exactly one matched
//! pair. It runs a Dijkstra-style search in the reduced-cost graph from a
//! free row to the nearest unassigned column, updates the dual vectors so
//! complementary slackness keeps holding on the visited subgraph, and
//! rewires the matching along the augmenting path.
//!
//! The search state lives in an [`AugmentWorkspace`] so the solver driver
//! can reuse the buffers across all `nrows` rounds instead of allocating
//! per step.

use crate::error::{ShapeError, SolveError};
use crate::matrix::CostMatrix;
use crate::scalar::{AssignIndex, CostScalar};

/// Pre-allocated scratch buffers for one augmentation step.
///
/// Sized once for an `nrows x ncols` problem and reset at the start of
/// every step.
#[derive(Debug, Clone)]
pub struct AugmentWorkspace<T> {
    /// Predecessor row for each column on the current path tree.
    path: Vec<usize>,
    /// Reduced-cost distance from the free row to each column.
    shortest_path_costs: Vec<T>,
    /// Rows already absorbed into the search tree.
    sr: Vec<bool>,
    /// Columns already absorbed into the search tree.
    sc: Vec<bool>,
    /// Columns not yet settled, scanned as an unordered vector.
    remaining: Vec<usize>,
}

impl<T: CostScalar> AugmentWorkspace<T> {
    /// Allocate scratch for an `nrows x ncols` problem.
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            path: vec![usize::MAX; ncols],
            shortest_path_costs: vec![T::infinity(); ncols],
            sr: vec![false; nrows],
            sc: vec![false; ncols],
            remaining: Vec::with_capacity(ncols),
        }
    }

    /// Number of rows this workspace was sized for.
    pub fn nrows(&self) -> usize {
        self.sr.len()
    }

    /// Number of columns this workspace was sized for.
    pub fn ncols(&self) -> usize {
        self.sc.len()
    }

    fn reset(&mut self) {
        let ncols = self.sc.len();
        self.path.fill(usize::MAX);
        self.shortest_path_costs.fill(T::infinity());
        self.sr.fill(false);
        self.sc.fill(false);
        // Reverse fill so that among equal-distance unassigned columns the
        // scan settles on the lowest index. Together with the tie-break in
        // the scan loop this makes a constant matrix come out as the
        // identity assignment.
        self.remaining.clear();
        self.remaining.extend((0..ncols).rev());
    }
}

/// Run one augmentation step for `free_row`, allocating fresh scratch.
///
/// Grows the matching held in `row4col` / `col4row` by one pair and
/// updates the dual vectors `u` / `v` in place. The row being augmented
/// must currently be unassigned (`col4row[free_row] < 0`) and the state
/// arrays must describe a dual-feasible partial solution; the initial
/// all-`-1` / all-zero state qualifies.
///
/// # Errors
///
/// [`ShapeError`] when an array length disagrees with the matrix shape,
/// when `nrows > ncols`, or when `free_row` is out of range; all are
/// reported before any mutation. [`SolveError::Infeasible`] when no
/// unassigned column is reachable through finite-cost edges; the state
/// arrays are left mid-rewind and must be discarded by the caller.
pub fn augment<I, T>(
    costs: &CostMatrix<'_, T>,
    free_row: usize,
    row4col: &mut [I],
    col4row: &mut [I],
    u: &mut [T],
    v: &mut [T],
) -> Result<(), SolveError>
where
    I: AssignIndex,
    T: CostScalar,
{
    let mut workspace = AugmentWorkspace::new(costs.nrows(), costs.ncols());
    augment_with(costs, free_row, row4col, col4row, u, v, &mut workspace)
}

/// Like [`augment`], reusing caller-provided scratch buffers.
#[allow(clippy::too_many_arguments)]
pub fn augment_with<I, T>(
    costs: &CostMatrix<'_, T>,
    free_row: usize,
    row4col: &mut [I],
    col4row: &mut [I],
    u: &mut [T],
    v: &mut [T],
    workspace: &mut AugmentWorkspace<T>,
) -> Result<(), SolveError>
where
    I: AssignIndex,
    T: CostScalar,
{
    let nrows = costs.nrows();
    let ncols = costs.ncols();
    if nrows > ncols {
        return Err(ShapeError::TooManyRows { nrows, ncols }.into());
    }
    if free_row >= nrows {
        return Err(ShapeError::RowOutOfRange { row: free_row, nrows }.into());
    }
    check_len("col4row", col4row.len(), nrows)?;
    check_len("row4col", row4col.len(), ncols)?;
    check_len("u", u.len(), nrows)?;
    check_len("v", v.len(), ncols)?;
    debug_assert_eq!(workspace.nrows(), nrows);
    debug_assert_eq!(workspace.ncols(), ncols);
    debug_assert!(
        col4row[free_row].is_unassigned(),
        "augmented row must be unassigned"
    );

    workspace.reset();
    let AugmentWorkspace { path, shortest_path_costs, sr, sc, remaining } = workspace;

    let mut min_val = T::zero();
    let mut row_idx = free_row;

    // Dijkstra on the reduced-cost graph. Each round settles one column;
    // the search stops as soon as the settled column is unassigned.
    let sink = loop {
        sr[row_idx] = true;
        let cost_row = costs.row(row_idx);
        let u_row = u[row_idx];

        // Relax every unscanned column through the current frontier row
        // and locate the minimum in the same pass. Ties go to unassigned
        // columns so the search terminates on the earliest augmenting
        // path; degenerate (constant, integer) matrices depend on this.
        let mut lowest = T::infinity();
        let mut selected: Option<usize> = None;
        for (pos, &col) in remaining.iter().enumerate() {
            let reduced = min_val + cost_row[col] - u_row - v[col];
            if reduced < shortest_path_costs[col] {
                path[col] = row_idx;
                shortest_path_costs[col] = reduced;
            }
            let dist = shortest_path_costs[col];
            if dist < lowest || (dist == lowest && row4col[col].is_unassigned()) {
                lowest = dist;
                selected = Some(pos);
            }
        }

        // An infinite minimum means no unassigned column is reachable
        // from the tree through finite-cost edges.
        if lowest == T::infinity() {
            return Err(SolveError::Infeasible);
        }
        let Some(pos) = selected else {
            return Err(SolveError::Infeasible);
        };

        min_val = lowest;
        let col = remaining.swap_remove(pos);
        sc[col] = true;
        if row4col[col].is_unassigned() {
            break col;
        }
        row_idx = row4col[col].index();
    };

    // Dual update. The free row absorbs the full path length; every other
    // visited row only the remainder beyond its matched column, and every
    // visited column the complement. Untouched rows and columns keep
    // their duals.
    u[free_row] += min_val;
    for (i, &visited) in sr.iter().enumerate() {
        if visited && i != free_row {
            u[i] += min_val - shortest_path_costs[col4row[i].index()];
        }
    }
    for (j, &visited) in sc.iter().enumerate() {
        if visited {
            v[j] -= min_val - shortest_path_costs[j];
        }
    }

    // Rewire the matching along the augmenting path, walking the
    // predecessor chain from the sink back to the free row. Each step
    // claims the column for its predecessor row and hands that row's
    // previous column to the next step, keeping col4row and row4col
    // mutually consistent throughout.
    let mut col = sink;
    loop {
        let row = path[col];
        row4col[col] = I::from_index(row);
        let previous = col4row[row];
        col4row[row] = I::from_index(col);
        if row == free_row {
            break;
        }
        col = previous.index();
    }

    Ok(())
}

fn check_len(name: &'static str, len: usize, expected: usize) -> Result<(), ShapeError> {
    if len != expected {
        return Err(ShapeError::LengthMismatch { name, len, expected });
    }
    Ok(())
}
