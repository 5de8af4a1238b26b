//! Python bindings for the lsap assignment solver.
//!
//! Exposes the solver to Python via PyO3, marshalling numpy arrays in and
//! out of the engine. Array contents are copied out under the GIL and the
//! engine runs with the GIL released, so long solves do not block other
//! Python threads.

use numpy::prelude::*;
use numpy::{PyArray1, PyReadonlyArray2, PyUntypedArray};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use lsap_core::{
    augment as augment_step, solve_with_options, Assignment, CostMatrix, CostScalar,
    SolveError, SolveOptions,
};

/// Copy a 2-D readonly numpy array into a row-major buffer.
///
/// Goes through the array view so strided (non-contiguous) inputs are
/// handled too.
fn copy_matrix<T: numpy::Element + Copy>(
    array: &PyReadonlyArray2<'_, T>,
) -> (Vec<T>, usize, usize) {
    let view = array.as_array();
    (view.iter().copied().collect(), view.nrows(), view.ncols())
}

fn check_two_dimensional(cost_matrix: &Bound<'_, PyAny>) -> PyResult<()> {
    let untyped = cost_matrix
        .downcast::<PyUntypedArray>()
        .map_err(|_| PyValueError::new_err("cost_matrix must be a 2-D numpy array"))?;
    if untyped.ndim() != 2 {
        return Err(PyValueError::new_err(format!(
            "cost_matrix must be 2-D, got {} dimension(s)",
            untyped.ndim()
        )));
    }
    Ok(())
}

fn run_solve<T: CostScalar>(
    data: &[T],
    nrows: usize,
    ncols: usize,
    verbose: bool,
) -> Result<Assignment<i64, T>, SolveError> {
    let costs = CostMatrix::from_slice(data, nrows, ncols)?;
    solve_with_options(&costs, &SolveOptions { verbose })
}

fn to_value_error(err: SolveError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn assignment_to_tuple<T: numpy::Element>(
    py: Python<'_>,
    assignment: Assignment<i64, T>,
) -> (PyObject, PyObject, PyObject, PyObject) {
    (
        PyArray1::from_vec_bound(py, assignment.row4col)
            .into_any()
            .unbind(),
        PyArray1::from_vec_bound(py, assignment.col4row)
            .into_any()
            .unbind(),
        PyArray1::from_vec_bound(py, assignment.u).into_any().unbind(),
        PyArray1::from_vec_bound(py, assignment.v).into_any().unbind(),
    )
}

fn dump_state(u: &[f64], v: &[f64], col4row: &[i64], row4col: &[i64]) {
    eprintln!("  u:       {}", join(u));
    eprintln!("  v:       {}", join(v));
    eprintln!("  col4row: {}", join(col4row));
    eprintln!("  row4col: {}", join(row4col));
}

fn join<V: std::fmt::Display>(values: &[V]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Solve the rectangular linear sum assignment problem.
///
/// # Arguments
///
/// * `cost_matrix` - 2-D numpy array of float64 or float32, with at most
///   as many rows as columns. `+inf` marks a forbidden pair.
/// * `verbose` - Dump duals and assignment arrays to stderr after each
///   augmentation (default: false).
/// * `force_doubles` - Run float32 input through the float64 engine
///   instead of solving at the narrower precision (default: false).
///
/// # Returns
///
/// Tuple `(row4col, col4row, u, v)` of 1-D numpy arrays: `int64`
/// assignments keyed by column and by row, and the float dual vectors
/// (dtype matching the engine precision used).
///
/// Raises `ValueError` on shape violations, invalid entries, unsupported
/// cost dtypes, and infeasible matrices.
#[pyfunction]
#[pyo3(signature = (cost_matrix, verbose = false, force_doubles = false))]
fn solve(
    py: Python<'_>,
    cost_matrix: &Bound<'_, PyAny>,
    verbose: bool,
    force_doubles: bool,
) -> PyResult<(PyObject, PyObject, PyObject, PyObject)> {
    check_two_dimensional(cost_matrix)?;

    if let Ok(array) = cost_matrix.extract::<PyReadonlyArray2<f64>>() {
        let (data, nrows, ncols) = copy_matrix(&array);
        let assignment = py
            .allow_threads(|| run_solve::<f64>(&data, nrows, ncols, verbose))
            .map_err(to_value_error)?;
        Ok(assignment_to_tuple(py, assignment))
    } else if let Ok(array) = cost_matrix.extract::<PyReadonlyArray2<f32>>() {
        let (data, nrows, ncols) = copy_matrix(&array);
        if force_doubles {
            let widened: Vec<f64> = data.iter().map(|&c| f64::from(c)).collect();
            let assignment = py
                .allow_threads(|| run_solve::<f64>(&widened, nrows, ncols, verbose))
                .map_err(to_value_error)?;
            Ok(assignment_to_tuple(py, assignment))
        } else {
            let assignment = py
                .allow_threads(|| run_solve::<f32>(&data, nrows, ncols, verbose))
                .map_err(to_value_error)?;
            Ok(assignment_to_tuple(py, assignment))
        }
    } else {
        Err(PyValueError::new_err(
            "cost_matrix dtype must be float32 or float64",
        ))
    }
}

/// Run one shortest-augmenting-path step for `free_row`.
///
/// Mutates `row4col`, `col4row`, `u` and `v` in place and also returns
/// them. The state arrays must be `int64` / `float64` (raises `TypeError`
/// otherwise) and sized `ncols` / `nrows` / `nrows` / `ncols` (raises
/// `ValueError` before anything is touched). On an infeasible matrix the
/// step raises `ValueError` and the state arrays keep their previous
/// contents; treat them as invalid.
#[pyfunction]
#[pyo3(signature = (cost_matrix, free_row, row4col, col4row, u, v, verbose = false))]
#[allow(clippy::too_many_arguments)]
fn augment(
    py: Python<'_>,
    cost_matrix: &Bound<'_, PyAny>,
    free_row: usize,
    row4col: Bound<'_, PyArray1<i64>>,
    col4row: Bound<'_, PyArray1<i64>>,
    u: Bound<'_, PyArray1<f64>>,
    v: Bound<'_, PyArray1<f64>>,
    verbose: bool,
) -> PyResult<(PyObject, PyObject, PyObject, PyObject)> {
    check_two_dimensional(cost_matrix)?;
    let array = cost_matrix
        .extract::<PyReadonlyArray2<f64>>()
        .map_err(|_| PyValueError::new_err("cost_matrix dtype must be float64"))?;
    let (data, nrows, ncols) = copy_matrix(&array);

    let not_contiguous =
        |_| PyValueError::new_err("state arrays must be contiguous 1-D numpy arrays");
    let mut row4col_vec = row4col.to_vec().map_err(not_contiguous)?;
    let mut col4row_vec = col4row.to_vec().map_err(not_contiguous)?;
    let mut u_vec = u.to_vec().map_err(not_contiguous)?;
    let mut v_vec = v.to_vec().map_err(not_contiguous)?;

    if verbose {
        eprintln!("lsap: augment row {} / {}", free_row + 1, nrows);
    }

    py.allow_threads(|| {
        let costs = CostMatrix::from_slice(&data, nrows, ncols)?;
        augment_step(
            &costs,
            free_row,
            &mut row4col_vec,
            &mut col4row_vec,
            &mut u_vec,
            &mut v_vec,
        )
    })
    .map_err(to_value_error)?;

    let already_borrowed =
        |_| PyValueError::new_err("state arrays must not be borrowed elsewhere");
    row4col
        .try_readwrite()
        .map_err(already_borrowed)?
        .as_slice_mut()
        .map_err(not_contiguous)?
        .copy_from_slice(&row4col_vec);
    col4row
        .try_readwrite()
        .map_err(already_borrowed)?
        .as_slice_mut()
        .map_err(not_contiguous)?
        .copy_from_slice(&col4row_vec);
    u.try_readwrite()
        .map_err(already_borrowed)?
        .as_slice_mut()
        .map_err(not_contiguous)?
        .copy_from_slice(&u_vec);
    v.try_readwrite()
        .map_err(already_borrowed)?
        .as_slice_mut()
        .map_err(not_contiguous)?
        .copy_from_slice(&v_vec);

    if verbose {
        dump_state(&u_vec, &v_vec, &col4row_vec, &row4col_vec);
    }

    Ok((
        row4col.into_any().unbind(),
        col4row.into_any().unbind(),
        u.into_any().unbind(),
        v.into_any().unbind(),
    ))
}

/// Get version information.
#[pyfunction]
fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Python module definition.
#[pymodule]
fn _native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(solve, m)?)?;
    m.add_function(wrap_pyfunction!(augment, m)?)?;
    m.add_function(wrap_pyfunction!(version, m)?)?;
    Ok(())
}
