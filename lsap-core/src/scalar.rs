//! Scalar traits for the `(index, cost)` type dispatch.
//!
//! The engine is written once, generic over the assignment index type and
//! the cost type, instead of duplicating code paths per specialization.
//! Costs are IEEE floats (`f32`/`f64`) with `+inf` marking forbidden
//! pairs; indices are signed primitives (`i32`/`i64`) with `-1` as the
//! unassigned sentinel, matching the layout callers exchange with the
//! numpy boundary.

use std::fmt;
use std::ops::{AddAssign, SubAssign};

use num_traits::{Float, PrimInt, Signed};

/// Cost scalar for the assignment engine.
///
/// All arithmetic runs at the native precision of the scalar; there is no
/// accumulator widening. `Self::infinity()` denotes a prohibited edge.
pub trait CostScalar:
    Float + AddAssign + SubAssign + fmt::Display + fmt::Debug + Send + Sync + 'static
{
}

impl CostScalar for f32 {}
impl CostScalar for f64 {}

/// Signed index stored in the `col4row` / `row4col` arrays.
///
/// Negative values (canonically `-1`) mean "unassigned". Conversions to
/// and from `usize` are only called on values known to be valid
/// row/column indices.
pub trait AssignIndex:
    PrimInt + Signed + fmt::Display + fmt::Debug + Send + Sync + 'static
{
    /// Sentinel for a row or column with no assignment.
    #[inline]
    fn unassigned() -> Self {
        -Self::one()
    }

    /// True when the entry holds no assignment.
    #[inline]
    fn is_unassigned(self) -> bool {
        self < Self::zero()
    }

    /// Convert a valid row/column position into the stored index type.
    fn from_index(index: usize) -> Self;

    /// Read the entry back as a position. Must not be called on the
    /// unassigned sentinel.
    fn index(self) -> usize;
}

impl AssignIndex for i32 {
    #[inline]
    fn from_index(index: usize) -> Self {
        index as i32
    }

    #[inline]
    fn index(self) -> usize {
        debug_assert!(self >= 0);
        self as usize
    }
}

impl AssignIndex for i64 {
    #[inline]
    fn from_index(index: usize) -> Self {
        index as i64
    }

    #[inline]
    fn index(self) -> usize {
        debug_assert!(self >= 0);
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_negative() {
        assert_eq!(<i32 as AssignIndex>::unassigned(), -1);
        assert_eq!(<i64 as AssignIndex>::unassigned(), -1);
        assert!(<i64 as AssignIndex>::unassigned().is_unassigned());
        assert!(!0i64.is_unassigned());
    }

    #[test]
    fn index_round_trip() {
        assert_eq!(i32::from_index(7).index(), 7);
        assert_eq!(i64::from_index(123).index(), 123);
    }
}
