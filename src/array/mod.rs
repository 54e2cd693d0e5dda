mod fmt;

mod ops;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::{
    marker::PhantomData,
    ops::{Index, IndexMut},
    slice,
};

use num_traits::{AsPrimitive, One, Zero};

use crate::{dimension::Peel, shape, Dimension, IndexError, Indices, Order, Result, RowMajor};

/// A dense array whose shape `D` is fixed at the type level.
///
/// Elements are stored inline as the native nested array `D::Data<T>`, so an
/// `ArrayMd<T, dims![7, 3]>` has exactly the size and layout of
/// `[[T; 3]; 7]`.
///
/// ```
/// use multiarray::{dims, ArrayMd};
///
/// let a = ArrayMd::<i32, dims![2, 3]>::from_data([[1, 2, 3], [4, 5, 6]]);
///
/// assert_eq!(a.slice((1,)).as_slice(), &[4, 5, 6]);
/// assert_eq!(*a.slice((1, 2)), 6);
/// assert_eq!(a[0][1], 2);
/// ```
///
/// Supplying more indices than the rank does not compile:
///
/// ```compile_fail
/// use multiarray::{dims, ArrayMd};
///
/// let a = ArrayMd::<i32, dims![7, 3]>::default();
/// let _ = a.slice((1, 2, 0));
/// ```
///
/// Only the outermost extent may be zero:
///
/// ```compile_fail
/// use multiarray::{dims, ArrayMd};
///
/// let a = ArrayMd::<i32, dims![2, 0]>::default();
/// assert!(a.is_empty());
/// ```
#[repr(transparent)]
pub struct ArrayMd<T, D>
where
    D: Dimension,
{
    data: D::Data<T>,
    phantom: PhantomData<D>,
}

impl<T, D> ArrayMd<T, D>
where
    D: Dimension,
{
    pub const RANK: usize = D::RANK;
    pub const SIZE: usize = D::SIZE;

    #[inline]
    pub const fn from_data(data: D::Data<T>) -> Self {
        Self {
            data,
            phantom: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn from_data_ref(data: &D::Data<T>) -> &Self {
        // SAFETY: `Self` is `repr(transparent)` over `D::Data<T>`.
        unsafe { &*(data as *const D::Data<T> as *const Self) }
    }

    #[inline]
    pub(crate) fn from_data_mut(data: &mut D::Data<T>) -> &mut Self {
        // SAFETY: `Self` is `repr(transparent)` over `D::Data<T>`.
        unsafe { &mut *(data as *mut D::Data<T> as *mut Self) }
    }

    /// Builds an array by calling `f` with each flat offset in row-major
    /// order.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        let mut offset = 0;
        let data = D::build(&mut || {
            let elem = f(offset);
            offset += 1;
            elem
        });
        debug_assert_eq!(offset, D::SIZE);
        Self::from_data(data)
    }

    /// Fills the array from `values` in row-major order. Positions past the
    /// end of `values` are default-initialized.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::LengthMismatch`] if `values` yields more than
    /// `SIZE` elements. At most `SIZE + 1` values are pulled, so `found` is a
    /// lower bound taken from the iterator's size hint.
    pub fn from_values<V>(values: V) -> Result<Self>
    where
        T: Default,
        V: IntoIterator<Item = T>,
    {
        let mut values = values.into_iter();
        let array = Self::from_fn(|_| values.next().unwrap_or_default());
        if values.next().is_some() {
            return Err(IndexError::LengthMismatch {
                expected: D::SIZE,
                found: D::SIZE.saturating_add(1).saturating_add(values.size_hint().0),
            }
            .into());
        }
        Ok(array)
    }

    pub fn zeros() -> Self
    where
        T: Zero,
    {
        Self::from_fn(|_| T::zero())
    }

    pub fn ones() -> Self
    where
        T: One,
    {
        Self::from_fn(|_| T::one())
    }

    #[inline]
    pub fn into_data(self) -> D::Data<T> {
        self.data
    }

    #[inline]
    pub fn data(&self) -> &D::Data<T> {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut D::Data<T> {
        &mut self.data
    }

    #[inline]
    pub const fn rank(&self) -> usize {
        D::RANK
    }

    #[inline]
    pub const fn len(&self) -> usize {
        D::SIZE
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        D::SIZE == 0
    }

    pub fn extent(&self, axis: usize) -> Option<usize> {
        D::extent(axis)
    }

    pub fn extents(&self) -> Vec<usize> {
        (0..D::RANK).filter_map(D::extent).collect()
    }

    /// Row-major strides, in elements.
    pub fn strides(&self) -> Vec<usize> {
        let extents = self.extents();
        let mut strides = vec![0; D::RANK];
        shape::derive_strides(&extents, &RowMajor::priorities_vec(D::RANK), &mut strides);
        strides
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `D::Data<T>` is a nested array of exactly `D::SIZE`
        // contiguous elements.
        unsafe { slice::from_raw_parts(self.as_ptr(), D::SIZE) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: see `as_slice`.
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), D::SIZE) }
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        &self.data as *const D::Data<T> as *const T
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        &mut self.data as *mut D::Data<T> as *mut T
    }

    /// Chained indexing: consumes indices from the outermost axis inwards.
    ///
    /// With `k` indices the result is the whole array for `k == 0`, a view
    /// of the remaining `rank - k` axes for `0 < k < rank` and a single
    /// element for `k == rank`. Indices are not checked against their
    /// extents beyond the panicking bounds check of native arrays.
    #[inline]
    pub fn slice<Ix>(&self, indices: Ix) -> &<Ix::Target as Dimension>::View<T>
    where
        Ix: Indices<D>,
    {
        <Ix::Target as Dimension>::view(indices.reduce(&self.data))
    }

    #[inline]
    pub fn slice_mut<Ix>(&mut self, indices: Ix) -> &mut <Ix::Target as Dimension>::View<T>
    where
        Ix: Indices<D>,
    {
        <Ix::Target as Dimension>::view_mut(indices.reduce_mut(&mut self.data))
    }

    /// Checked chained indexing: every index is validated before any is
    /// applied.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::OutOfRange`] for the first index that is not
    /// below its extent.
    pub fn try_slice<Ix>(&self, indices: Ix) -> Result<&<Ix::Target as Dimension>::View<T>>
    where
        Ix: Indices<D>,
    {
        indices.check(0)?;
        Ok(self.slice(indices))
    }

    pub fn try_slice_mut<Ix>(
        &mut self,
        indices: Ix,
    ) -> Result<&mut <Ix::Target as Dimension>::View<T>>
    where
        Ix: Indices<D>,
    {
        indices.check(0)?;
        Ok(self.slice_mut(indices))
    }

    /// Access with a full coordinate tuple. Individual indices are not
    /// checked against their extents.
    ///
    /// # Panics
    ///
    /// Panics if `indices` does not hold exactly one index per axis or if
    /// the resulting offset is outside the array.
    pub fn element(&self, indices: &[usize]) -> &T {
        assert_eq!(indices.len(), D::RANK, "expected one index per axis");
        &self.as_slice()[D::offset(indices)]
    }

    pub fn element_mut(&mut self, indices: &[usize]) -> &mut T {
        assert_eq!(indices.len(), D::RANK, "expected one index per axis");
        &mut self.as_mut_slice()[D::offset(indices)]
    }

    /// Checked access with a full coordinate tuple.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::LengthMismatch`] unless `indices` holds exactly
    /// one index per axis, and [`IndexError::OutOfRange`] for the first
    /// index that is not below its extent.
    pub fn at(&self, indices: &[usize]) -> Result<&T> {
        let offset = Self::checked_offset(indices)?;
        Ok(&self.as_slice()[offset])
    }

    pub fn at_mut(&mut self, indices: &[usize]) -> Result<&mut T> {
        let offset = Self::checked_offset(indices)?;
        Ok(&mut self.as_mut_slice()[offset])
    }

    fn checked_offset(indices: &[usize]) -> Result<usize> {
        if indices.len() != D::RANK {
            return Err(IndexError::LengthMismatch {
                expected: D::RANK,
                found: indices.len(),
            }
            .into());
        }
        let (offset, _) = D::locate(indices, 0)?;
        Ok(offset)
    }

    /// The contiguous flattened block addressed by a prefix of indices whose
    /// length is only known at run time.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::TooManyIndices`] if `indices` is longer than the
    /// rank, and [`IndexError::OutOfRange`] for the first index that is not
    /// below its extent.
    pub fn sub_block(&self, indices: &[usize]) -> Result<&[T]> {
        let (offset, len) = Self::locate_block(indices)?;
        Ok(&self.as_slice()[offset..offset + len])
    }

    pub fn sub_block_mut(&mut self, indices: &[usize]) -> Result<&mut [T]> {
        let (offset, len) = Self::locate_block(indices)?;
        Ok(&mut self.as_mut_slice()[offset..offset + len])
    }

    fn locate_block(indices: &[usize]) -> Result<(usize, usize)> {
        if indices.len() > D::RANK {
            return Err(IndexError::TooManyIndices {
                rank: D::RANK,
                found: indices.len(),
            }
            .into());
        }
        D::locate(indices, 0)
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.as_mut_slice().fill(value);
    }

    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.data, &mut other.data);
    }

    /// Applies `f` to every element, producing an array of the same shape.
    pub fn map<U, F>(self, mut f: F) -> ArrayMd<U, D>
    where
        F: FnMut(T) -> U,
    {
        ArrayMd::from_data(D::map_data(self.data, &mut f))
    }

    /// Converts every element with an `as` cast.
    pub fn cast<U>(self) -> ArrayMd<U, D>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        self.map(|x| x.as_())
    }

    /// Visits every element together with its coordinates, in row-major
    /// order.
    pub fn apply<F>(&self, mut f: F)
    where
        F: FnMut(&T, &[usize]),
    {
        let (extents, priorities, mut coords) = self.traversal_state();
        for elem in self.as_slice() {
            f(elem, &coords);
            shape::advance_odometer(&mut coords, &extents, &priorities);
        }
    }

    pub fn apply_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T, &[usize]),
    {
        let (extents, priorities, mut coords) = self.traversal_state();
        for elem in self.as_mut_slice() {
            f(elem, &coords);
            shape::advance_odometer(&mut coords, &extents, &priorities);
        }
    }

    fn traversal_state(&self) -> (Vec<usize>, Vec<usize>, Vec<usize>) {
        (
            self.extents(),
            RowMajor::priorities_vec(D::RANK),
            vec![0; D::RANK],
        )
    }
}

impl<T, D> Default for ArrayMd<T, D>
where
    D: Dimension,
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, D> Index<usize> for ArrayMd<T, D>
where
    D: Peel,
{
    type Output = <D::Inner as Dimension>::View<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        <D::Inner as Dimension>::view(D::peel(&self.data, index))
    }
}

impl<T, D> IndexMut<usize> for ArrayMd<T, D>
where
    D: Peel,
{
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        <D::Inner as Dimension>::view_mut(D::peel_mut(&mut self.data, index))
    }
}

impl<'a, T, D> IntoIterator for &'a ArrayMd<T, D>
where
    D: Dimension,
{
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, D> IntoIterator for &'a mut ArrayMd<T, D>
where
    D: Dimension,
{
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
