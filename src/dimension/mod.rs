//! Type-level shapes for [`ArrayMd`](crate::ArrayMd).
//!
//! A shape is a list of extents built from [`Axis`] cells terminated by
//! [`Scalar`]. The [`dims!`](crate::dims) macro spells them out:
//! `dims![7, 3]` is `Axis<7, Axis<3, Scalar>>`.

use crate::{shape, ArrayMd, IndexError, Result};

mod sealed {
    pub trait Sealed {}
}

/// A compile-time shape.
///
/// `Data<T>` is the nested native array holding `SIZE` elements contiguously
/// in row-major order. The trait is sealed so that this layout holds for
/// every implementor.
pub trait Dimension: sealed::Sealed + Sized + 'static {
    /// Nested native storage for elements of type `T`.
    type Data<T>;
    /// What a reference into this shape looks like: the bare element for
    /// rank 0, an [`ArrayMd`] otherwise.
    type View<T>;

    const RANK: usize;
    const SIZE: usize;

    /// Extent of `axis`, or `None` past the rank.
    fn extent(axis: usize) -> Option<usize>;

    fn build<T, F>(f: &mut F) -> Self::Data<T>
    where
        F: FnMut() -> T;

    fn map_data<T, U, F>(data: Self::Data<T>, f: &mut F) -> Self::Data<U>
    where
        F: FnMut(T) -> U;

    fn view<T>(data: &Self::Data<T>) -> &Self::View<T>;
    fn view_mut<T>(data: &mut Self::Data<T>) -> &mut Self::View<T>;

    /// Row-major offset of the block addressed by a prefix of indices.
    /// Nothing is checked.
    fn offset(indices: &[usize]) -> usize;

    /// Checked version of [`offset`](Self::offset) that also returns the
    /// number of elements in the addressed block. `axis` is the depth of
    /// this shape within the outermost one and is only used for reporting.
    fn locate(indices: &[usize], axis: usize) -> Result<(usize, usize)>;
}

/// Shapes with at least one axis, from which the outermost axis can be
/// peeled off.
pub trait Peel: Dimension {
    type Inner: Dimension;
    const EXTENT: usize;

    fn peel<T>(data: &Self::Data<T>, index: usize) -> &<Self::Inner as Dimension>::Data<T>;
    fn peel_mut<T>(
        data: &mut Self::Data<T>,
        index: usize,
    ) -> &mut <Self::Inner as Dimension>::Data<T>;
}

/// The rank-0 shape holding a single element.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Scalar;

impl sealed::Sealed for Scalar {}

impl Dimension for Scalar {
    type Data<T> = T;
    type View<T> = T;

    const RANK: usize = 0;
    const SIZE: usize = 1;

    fn extent(_axis: usize) -> Option<usize> {
        None
    }

    fn build<T, F>(f: &mut F) -> T
    where
        F: FnMut() -> T,
    {
        f()
    }

    fn map_data<T, U, F>(data: T, f: &mut F) -> U
    where
        F: FnMut(T) -> U,
    {
        f(data)
    }

    fn view<T>(data: &T) -> &T {
        data
    }

    fn view_mut<T>(data: &mut T) -> &mut T {
        data
    }

    fn offset(_indices: &[usize]) -> usize {
        0
    }

    fn locate(indices: &[usize], axis: usize) -> Result<(usize, usize)> {
        if indices.is_empty() {
            Ok((0, 1))
        } else {
            Err(IndexError::TooManyIndices {
                rank: axis,
                found: axis + indices.len(),
            }
            .into())
        }
    }
}

/// An axis of extent `N` wrapped around the inner shape `I`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Axis<const N: usize, I = Scalar>(I);

impl<const N: usize, I: Dimension> sealed::Sealed for Axis<N, I> {}

impl<const N: usize, I: Dimension> Dimension for Axis<N, I> {
    type Data<T> = [I::Data<T>; N];
    type View<T> = ArrayMd<T, Self>;

    const RANK: usize = I::RANK + 1;
    const SIZE: usize = shape::nested_size(N, I::SIZE, I::RANK);

    fn extent(axis: usize) -> Option<usize> {
        match axis {
            0 => Some(N),
            _ => I::extent(axis - 1),
        }
    }

    fn build<T, F>(f: &mut F) -> Self::Data<T>
    where
        F: FnMut() -> T,
    {
        core::array::from_fn(|_| I::build(&mut *f))
    }

    fn map_data<T, U, F>(data: Self::Data<T>, f: &mut F) -> Self::Data<U>
    where
        F: FnMut(T) -> U,
    {
        data.map(|inner| I::map_data(inner, &mut *f))
    }

    fn view<T>(data: &Self::Data<T>) -> &Self::View<T> {
        ArrayMd::from_data_ref(data)
    }

    fn view_mut<T>(data: &mut Self::Data<T>) -> &mut Self::View<T> {
        ArrayMd::from_data_mut(data)
    }

    fn offset(indices: &[usize]) -> usize {
        match indices.split_first() {
            Some((&index, rest)) => index * I::SIZE + I::offset(rest),
            None => 0,
        }
    }

    fn locate(indices: &[usize], axis: usize) -> Result<(usize, usize)> {
        let (&index, rest) = match indices.split_first() {
            Some(split) => split,
            None => return Ok((0, Self::SIZE)),
        };
        if index >= N {
            return Err(IndexError::OutOfRange {
                axis,
                index,
                extent: N,
            }
            .into());
        }
        let (offset, len) = I::locate(rest, axis + 1)?;
        Ok((index * I::SIZE + offset, len))
    }
}

impl<const N: usize, I: Dimension> Peel for Axis<N, I> {
    type Inner = I;
    const EXTENT: usize = N;

    #[inline]
    fn peel<T>(data: &Self::Data<T>, index: usize) -> &I::Data<T> {
        &data[index]
    }

    #[inline]
    fn peel_mut<T>(data: &mut Self::Data<T>, index: usize) -> &mut I::Data<T> {
        &mut data[index]
    }
}

/// Spells out a type-level shape from its extents, outermost first.
///
/// ```
/// use multiarray::{dims, Axis, Dimension, Scalar};
///
/// type Shape = dims![7, 3];
/// let _: Axis<7, Axis<3, Scalar>> = Axis::default();
/// assert_eq!(<Shape as Dimension>::SIZE, 21);
/// assert_eq!(<dims![] as Dimension>::RANK, 0);
/// ```
#[macro_export]
macro_rules! dims {
    () => {
        $crate::Scalar
    };
    ($n:expr $(,)?) => {
        $crate::Axis<{ $n }, $crate::Scalar>
    };
    ($n:expr, $($rest:expr),+ $(,)?) => {
        $crate::Axis<{ $n }, $crate::dims![$($rest),+]>
    };
}
