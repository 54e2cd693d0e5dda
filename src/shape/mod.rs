//! Shape and stride arithmetic shared by the fixed-shape array and the
//! reshapable adapter.
//!
//! Every routine is generic over the size type `I`, an unsigned primitive
//! integer. Overflow is always detected before the multiplication that would
//! cause it.

use num_traits::{PrimInt, Unsigned};

use crate::{IndexError, Result, ShapeError};

/// Which extents may be zero.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Zeros {
    /// No extent may be zero.
    Forbidden,
    /// Only the outermost extent may be zero, yielding an empty array.
    LeadingOnly,
}

/// Validates `extents` and returns their product.
///
/// Zero extents are reported before overflow is considered. A zero leading
/// extent, where allowed, still requires the product of the remaining
/// extents to fit in `I`, matching [`nested_size`] for type-level shapes.
pub fn validate_extents<I>(extents: &[I], zeros: Zeros) -> Result<I>
where
    I: PrimInt + Unsigned,
{
    let allowed = match zeros {
        Zeros::Forbidden => 0,
        Zeros::LeadingOnly => 1,
    };
    if let Some(axis) = extents.iter().skip(allowed).position(|e| e.is_zero()) {
        return Err(ShapeError::ZeroExtent {
            axis: axis + allowed,
        }
        .into());
    }

    let (empty, inner) = match extents.split_first() {
        Some((first, rest)) if first.is_zero() => (true, rest),
        _ => (false, extents),
    };
    let max = I::max_value();
    let mut product = I::one();
    for &extent in inner {
        if extent > max / product {
            return Err(ShapeError::Overflow.into());
        }
        product = product * extent;
    }
    Ok(if empty { I::zero() } else { product })
}

/// Validates that `priorities` is a permutation of `0..priorities.len()`.
pub fn validate_priority(priorities: &[usize]) -> Result<()> {
    let rank = priorities.len();
    if let Some(&value) = priorities.iter().find(|&&p| p >= rank) {
        return Err(ShapeError::PriorityOutOfRange { value, rank }.into());
    }

    let is_permutation =
        (0..rank).all(|axis| priorities.iter().filter(|&&p| p == axis).count() == 1);
    if !is_permutation {
        return Err(ShapeError::NotAPermutation.into());
    }

    Ok(())
}

/// Writes the stride of every axis into `strides` and returns the product of
/// all extents.
///
/// The least-major axis, `priorities[rank - 1]`, gets stride 1; each more
/// major axis gets the product of the extents of all less major ones.
/// `extents` and `priorities` must already be validated.
pub fn derive_strides<I>(extents: &[I], priorities: &[usize], strides: &mut [I]) -> I
where
    I: PrimInt + Unsigned,
{
    debug_assert_eq!(extents.len(), priorities.len());
    debug_assert_eq!(extents.len(), strides.len());

    priorities.iter().rev().fold(I::one(), |acc, &axis| {
        strides[axis] = acc;
        acc * extents[axis]
    })
}

/// Maps coordinates to a linear offset. Nothing is checked.
#[inline]
pub fn offset<I>(coords: &[I], strides: &[I]) -> I
where
    I: PrimInt + Unsigned,
{
    coords
        .iter()
        .zip(strides)
        .fold(I::zero(), |acc, (&index, &stride)| acc + index * stride)
}

/// Checks that `coords` has one entry per axis and that each is below its
/// extent. The first offending axis is reported.
pub fn check_coordinates<I>(coords: &[I], extents: &[I]) -> Result<()>
where
    I: PrimInt + Unsigned,
{
    if coords.len() != extents.len() {
        return Err(IndexError::LengthMismatch {
            expected: extents.len(),
            found: coords.len(),
        }
        .into());
    }

    match coords
        .iter()
        .zip(extents)
        .position(|(index, extent)| index >= extent)
    {
        Some(axis) => Err(IndexError::OutOfRange {
            axis,
            index: coords[axis].to_usize().unwrap_or(usize::MAX),
            extent: extents[axis].to_usize().unwrap_or(usize::MAX),
        }
        .into()),
        None => Ok(()),
    }
}

/// Steps `coords` to the next tuple in the traversal order given by
/// `priorities`.
///
/// The least-major coordinate is incremented and carries propagate towards
/// the most-major one. Returns `true` when the carry ran off the most-major
/// axis, i.e. the tuple wrapped around to all zeros.
pub fn advance_odometer<I>(coords: &mut [I], extents: &[I], priorities: &[usize]) -> bool
where
    I: PrimInt + Unsigned,
{
    for &axis in priorities.iter().rev() {
        let next = coords[axis] + I::one();
        if next >= extents[axis] {
            coords[axis] = I::zero();
        } else {
            coords[axis] = next;
            return false;
        }
    }
    true
}

/// Fills `priorities` with `0, 1, ..., rank - 1`.
pub fn fill_ascending(priorities: &mut [usize]) {
    for (i, p) in priorities.iter_mut().enumerate() {
        *p = i;
    }
}

/// Fills `priorities` with `rank - 1, ..., 1, 0`.
pub fn fill_descending(priorities: &mut [usize]) {
    let rank = priorities.len();
    for (i, p) in priorities.iter_mut().enumerate() {
        *p = rank - 1 - i;
    }
}

/// Number of elements of a nested block whose outermost extent is `extent`
/// and whose inner block holds `inner_size` elements over `inner_rank` axes.
///
/// Evaluated at compile time for type-level shapes, where a panic becomes a
/// build error.
pub const fn nested_size(extent: usize, inner_size: usize, inner_rank: usize) -> usize {
    if inner_rank > 0 && inner_size == 0 {
        panic!("only the outermost extent may be zero");
    }
    match extent.checked_mul(inner_size) {
        Some(size) => size,
        None => panic!("total element count exceeds usize"),
    }
}

#[cfg(test)]
mod tests {
    #[cfg(not(feature = "std"))]
    use alloc::{vec, vec::Vec};

    use super::{
        advance_odometer, check_coordinates, derive_strides, fill_ascending, fill_descending,
        offset, validate_extents, validate_priority, Zeros,
    };
    use crate::{Error, ErrorKind, IndexError, Result, ShapeError};

    fn permutations(rank: usize) -> Vec<Vec<usize>> {
        if rank == 0 {
            return vec![vec![]];
        }
        let mut out = Vec::new();
        for p in permutations(rank - 1) {
            for i in 0..=p.len() {
                let mut q = p.clone();
                q.insert(i, rank - 1);
                out.push(q);
            }
        }
        out
    }

    #[test]
    fn validate_good_extents() -> Result<()> {
        assert_eq!(validate_extents(&[2_usize, 3, 4], Zeros::Forbidden)?, 24);
        assert_eq!(validate_extents::<usize>(&[], Zeros::Forbidden)?, 1);
        assert_eq!(validate_extents(&[0_usize, 3], Zeros::LeadingOnly)?, 0);

        Ok(())
    }

    #[test]
    fn reject_zero_extents() {
        assert_eq!(
            validate_extents(&[0_usize, 4], Zeros::Forbidden),
            Err(Error::from(ShapeError::ZeroExtent { axis: 0 }))
        );
        assert_eq!(
            validate_extents(&[5_usize, 0], Zeros::Forbidden),
            Err(Error::from(ShapeError::ZeroExtent { axis: 1 }))
        );
        assert_eq!(
            validate_extents(&[5_usize, 0, 2], Zeros::LeadingOnly),
            Err(Error::from(ShapeError::ZeroExtent { axis: 1 }))
        );
    }

    #[test]
    fn reject_overflowing_extents() {
        assert_eq!(validate_extents(&[15_u8, 17], Zeros::Forbidden), Ok(255));
        assert_eq!(
            validate_extents(&[16_u8, 16], Zeros::Forbidden),
            Err(Error::from(ShapeError::Overflow))
        );

        let half = usize::MAX / 2;
        let e = validate_extents(&[half, half], Zeros::Forbidden).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::Overflow);
    }

    #[test]
    fn empty_leading_axis_still_checks_inner_overflow() {
        assert_eq!(
            validate_extents(&[0, usize::MAX, 2], Zeros::LeadingOnly),
            Err(Error::from(ShapeError::Overflow))
        );
        assert_eq!(validate_extents(&[0_u8, 15, 17], Zeros::LeadingOnly), Ok(0));
        assert_eq!(
            validate_extents(&[0_u8, 16, 16], Zeros::LeadingOnly),
            Err(Error::from(ShapeError::Overflow))
        );
    }

    #[test]
    fn zero_is_reported_before_overflow() {
        assert_eq!(
            validate_extents(&[200_u8, 200, 0], Zeros::Forbidden),
            Err(Error::from(ShapeError::ZeroExtent { axis: 2 }))
        );
    }

    #[test]
    fn validate_priorities() {
        assert!(validate_priority(&[]).is_ok());
        assert!(validate_priority(&[2, 0, 1]).is_ok());
        assert_eq!(
            validate_priority(&[1, 4]),
            Err(Error::from(ShapeError::PriorityOutOfRange { value: 4, rank: 2 }))
        );
        assert_eq!(
            validate_priority(&[1, 1]),
            Err(Error::from(ShapeError::NotAPermutation))
        );
        assert_eq!(
            validate_priority(&[0, 0, 2]).map_err(|e| e.kind()),
            Err(ErrorKind::InvalidArgument)
        );
    }

    #[test]
    fn derive_row_major_strides() {
        let extents = [2_usize, 3, 4, 5];
        let mut priorities = [0; 4];
        fill_ascending(&mut priorities);
        let mut strides = [0; 4];
        let size = derive_strides(&extents, &priorities, &mut strides);

        assert_eq!(size, 120);
        assert_eq!(strides, [60, 20, 5, 1]);
    }

    #[test]
    fn derive_column_major_strides() {
        let extents = [2_usize, 3, 4];
        let mut priorities = [0; 3];
        fill_descending(&mut priorities);
        let mut strides = [0; 3];
        let size = derive_strides(&extents, &priorities, &mut strides);

        assert_eq!(priorities, [2, 1, 0]);
        assert_eq!(size, 24);
        assert_eq!(strides, [1, 2, 6]);
    }

    #[test]
    fn derive_scrambled_strides() {
        let extents = [2_u32, 3, 4];
        let mut strides = [0; 3];
        let size = derive_strides(&extents, &[1, 2, 0], &mut strides);

        assert_eq!(size, 24);
        assert_eq!(strides, [1, 8, 2]);
    }

    #[test]
    fn compute_offset() {
        assert_eq!(offset(&[1_usize, 2, 3], &[12, 4, 1]), 23);
        assert_eq!(offset::<usize>(&[], &[]), 0);
    }

    #[test]
    fn offsets_are_injective_for_every_priority() {
        let extents = [2_usize, 3, 4];
        for priorities in permutations(3) {
            let mut strides = [0; 3];
            let size = derive_strides(&extents, &priorities, &mut strides);
            let mut seen = vec![false; size];
            for i in 0..2 {
                for j in 0..3 {
                    for k in 0..4 {
                        let o = offset(&[i, j, k], &strides);
                        assert!(o < size);
                        assert!(!seen[o], "{:?} maps twice to {}", priorities, o);
                        seen[o] = true;
                    }
                }
            }
            assert!(seen.iter().all(|&x| x));
        }
    }

    #[test]
    fn check_coordinate_bounds() {
        let extents = [2_usize, 3];

        assert!(check_coordinates(&[1, 2], &extents).is_ok());
        assert_eq!(
            check_coordinates(&[1, 3], &extents),
            Err(Error::from(IndexError::OutOfRange {
                axis: 1,
                index: 3,
                extent: 3,
            }))
        );
        assert_eq!(
            check_coordinates(&[2, 9], &extents).map_err(|e| e.kind()),
            Err(ErrorKind::OutOfRange)
        );
        assert_eq!(
            check_coordinates(&[1], &extents),
            Err(Error::from(IndexError::LengthMismatch {
                expected: 2,
                found: 1,
            }))
        );
    }

    #[test]
    fn odometer_visits_every_tuple_in_offset_order() {
        let extents = [2_usize, 3, 2];
        for priorities in permutations(3) {
            let mut strides = [0; 3];
            let size = derive_strides(&extents, &priorities, &mut strides);
            let mut coords = [0; 3];
            for expected in 0..size {
                assert_eq!(offset(&coords, &strides), expected);
                let wrapped = advance_odometer(&mut coords, &extents, &priorities);
                assert_eq!(wrapped, expected == size - 1);
            }
            assert_eq!(coords, [0; 3]);
        }
    }

    #[test]
    fn odometer_of_rank_zero_always_wraps() {
        let mut coords: [usize; 0] = [];

        assert!(advance_odometer(&mut coords, &[], &[]));
    }
}
