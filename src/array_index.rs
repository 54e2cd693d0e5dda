//! Index tuples for chained access into an [`ArrayMd`](crate::ArrayMd).
//!
//! A tuple of `k` indices peels the `k` outermost axes off a shape. Any
//! arity from `0` up to the rank is accepted; longer tuples do not satisfy
//! the trait bounds and are rejected at compile time.

use crate::{dimension::Peel, Dimension, IndexError, Result};

/// A prefix of indices into the shape `D`.
pub trait Indices<D: Dimension>: Copy {
    /// The shape left over after the indexed axes are removed.
    type Target: Dimension;

    /// Number of indices in the tuple.
    const COUNT: usize;

    fn reduce<'a, T: 'a>(self, data: &'a D::Data<T>) -> &'a <Self::Target as Dimension>::Data<T>;
    fn reduce_mut<'a, T: 'a>(
        self,
        data: &'a mut D::Data<T>,
    ) -> &'a mut <Self::Target as Dimension>::Data<T>;

    /// Checks each index against its extent, outermost first. `axis` is the
    /// position of the first index within the full shape.
    fn check(&self, axis: usize) -> Result<()>;
}

impl<D: Dimension> Indices<D> for () {
    type Target = D;
    const COUNT: usize = 0;

    #[inline]
    fn reduce<'a, T: 'a>(self, data: &'a D::Data<T>) -> &'a D::Data<T> {
        data
    }

    #[inline]
    fn reduce_mut<'a, T: 'a>(self, data: &'a mut D::Data<T>) -> &'a mut D::Data<T> {
        data
    }

    fn check(&self, _axis: usize) -> Result<()> {
        Ok(())
    }
}

macro_rules! usize_for {
    ($_:ident) => {
        usize
    };
}

macro_rules! impl_indices {
    () => {};
    ($head:ident $($tail:ident)*) => {
        impl<D> Indices<D> for (usize, $(usize_for!($tail),)*)
        where
            D: Peel,
            ($(usize_for!($tail),)*): Indices<D::Inner>,
        {
            type Target = <($(usize_for!($tail),)*) as Indices<D::Inner>>::Target;
            const COUNT: usize = 1 + <($(usize_for!($tail),)*) as Indices<D::Inner>>::COUNT;

            #[inline]
            fn reduce<'a, T: 'a>(
                self,
                data: &'a D::Data<T>,
            ) -> &'a <Self::Target as Dimension>::Data<T> {
                let ($head, $($tail,)*) = self;
                <($(usize_for!($tail),)*) as Indices<D::Inner>>::reduce(
                    ($($tail,)*),
                    D::peel(data, $head),
                )
            }

            #[inline]
            fn reduce_mut<'a, T: 'a>(
                self,
                data: &'a mut D::Data<T>,
            ) -> &'a mut <Self::Target as Dimension>::Data<T> {
                let ($head, $($tail,)*) = self;
                <($(usize_for!($tail),)*) as Indices<D::Inner>>::reduce_mut(
                    ($($tail,)*),
                    D::peel_mut(data, $head),
                )
            }

            fn check(&self, axis: usize) -> Result<()> {
                let &($head, $($tail,)*) = self;
                if $head >= D::EXTENT {
                    return Err(IndexError::OutOfRange {
                        axis,
                        index: $head,
                        extent: D::EXTENT,
                    }
                    .into());
                }
                <($(usize_for!($tail),)*) as Indices<D::Inner>>::check(&($($tail,)*), axis + 1)
            }
        }

        impl_indices!($($tail)*);
    };
}

impl_indices!(i0 i1 i2 i3 i4 i5 i6 i7);
