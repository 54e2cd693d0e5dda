#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::shape;

/// A canonical axis priority.
pub trait Order: 'static {
    /// Writes the priority list, most-major axis first.
    fn fill_priorities(priorities: &mut [usize]);

    fn priorities<const R: usize>() -> [usize; R] {
        let mut priorities = [0; R];
        Self::fill_priorities(&mut priorities);
        priorities
    }

    fn priorities_vec(rank: usize) -> Vec<usize> {
        let mut priorities = vec![0; rank];
        Self::fill_priorities(&mut priorities);
        priorities
    }
}

/// The first axis is the most major; the last one is contiguous.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct RowMajor;

impl Order for RowMajor {
    fn fill_priorities(priorities: &mut [usize]) {
        shape::fill_ascending(priorities);
    }
}

/// The last axis is the most major; the first one is contiguous.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ColumnMajor;

impl Order for ColumnMajor {
    fn fill_priorities(priorities: &mut [usize]) {
        shape::fill_descending(priorities);
    }
}

#[cfg(test)]
mod tests {
    use super::{ColumnMajor, Order, RowMajor};
    use crate::shape;

    #[test]
    fn row_major_priorities() {
        assert_eq!(RowMajor::priorities::<3>(), [0, 1, 2]);
        assert_eq!(RowMajor::priorities::<0>(), [0_usize; 0]);
    }

    #[test]
    fn column_major_priorities() {
        assert_eq!(ColumnMajor::priorities::<3>(), [2, 1, 0]);
        assert_eq!(ColumnMajor::priorities::<1>(), [0]);
        assert_eq!(ColumnMajor::priorities_vec(4), [3, 2, 1, 0]);
    }

    #[test]
    fn convert_order_to_strides() {
        let extents = [2_usize, 3, 4];
        let mut strides = [0; 3];

        shape::derive_strides(&extents, &RowMajor::priorities::<3>(), &mut strides);
        assert_eq!(strides, [12, 4, 1]);

        shape::derive_strides(&extents, &ColumnMajor::priorities::<3>(), &mut strides);
        assert_eq!(strides, [1, 2, 6]);
    }
}
