//! Small assignment example.
//!
//! Three workers bid on four tasks; every worker must take a distinct
//! task and one task stays unstaffed. Prints the optimal assignment and
//! the dual certificate.

use lsap_core::{solve, Assignment, CostMatrix};

fn main() {
    // Rows: workers, columns: tasks, entries: quoted hours.
    #[rustfmt::skip]
    let hours = [
        10.0, 19.0,  8.0, 15.0,
        10.0, 18.0,  7.0, 17.0,
        13.0, 16.0,  9.0, 14.0,
    ];
    let costs = CostMatrix::from_slice(&hours, 3, 4).expect("buffer matches shape");

    let assignment: Assignment<i64, f64> = solve(&costs).expect("feasible problem");

    println!("optimal assignment:");
    for (worker, task) in assignment.pairs() {
        println!("  worker {worker} -> task {task} ({} h)", costs.at(worker, task));
    }
    println!("total: {} h", assignment.total_cost(&costs));
    println!("row duals u:    {:?}", assignment.u);
    println!("column duals v: {:?}", assignment.v);
}
