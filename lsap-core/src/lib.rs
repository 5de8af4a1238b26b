//! lsap-core: rectangular linear sum assignment solver.
//!
//! Solves the linear sum assignment problem (LSAP) on a dense
//! `nrows x ncols` cost matrix with `nrows <= ncols`: match every row to
//! a distinct column so the summed cost is minimal.
//!
//! # Algorithm
//!
//! The solver runs one **shortest augmenting path** step per row
//! (Jonker-Volgenant, in the variant described by Crouse 2016). Each step
//! is a Dijkstra-style search over reduced costs `C[i,j] - u[i] - v[j]`
//! from a free row to the nearest unassigned column, followed by a dual
//! update that keeps `u[i] + v[j] <= C[i,j]` everywhere and tight on
//! matched pairs, and a rewiring pass that installs the path into the
//! matching. The duals returned with the assignment are a certificate of
//! optimality.
//!
//! `+inf` entries mark forbidden pairs; a matrix where some row cannot
//! reach any unassigned column through finite edges fails with
//! [`SolveError::Infeasible`].
//!
//! # Example
//!
//! ```
//! use lsap_core::{solve, Assignment, CostMatrix};
//!
//! // Three workers, three tasks.
//! let data = [4.0, 1.0, 3.0, 2.0, 0.0, 5.0, 3.0, 2.0, 2.0];
//! let costs = CostMatrix::from_slice(&data, 3, 3)?;
//!
//! let assignment: Assignment<i64, f64> = solve(&costs)?;
//! assert_eq!(assignment.col4row, vec![1, 0, 2]);
//! assert_eq!(assignment.total_cost(&costs), 5.0);
//! # Ok::<(), lsap_core::SolveError>(())
//! ```
//!
//! Callers that keep their own state arrays (for instance to drive the
//! engine row by row) can use [`augment`] directly; [`solve`] is the
//! batteries-included driver.

#![warn(clippy::all)]

pub mod augment;
pub mod error;
pub mod matrix;
pub mod scalar;
pub mod solve;

pub use augment::{augment, augment_with, AugmentWorkspace};
pub use error::{ShapeError, SolveError};
pub use matrix::CostMatrix;
pub use scalar::{AssignIndex, CostScalar};
pub use solve::{linear_sum_assignment, solve, solve_with_options, Assignment, SolveOptions};
