//! Multi-index access over externally supplied linear storage.

mod indexer;
pub use indexer::Indexer;

mod iter;
pub use iter::IndexedIter;

use core::{
    mem,
    ops::{Index, IndexMut},
};

use crate::{
    storage::{Storage, StorageMut},
    ColumnMajor, IndexError, Order, Result, RowMajor,
};

/// A rank-`R` view of the container `C` whose shape and axis order can be
/// changed at any time without touching the elements.
///
/// The container is never resized. Its length may differ from
/// [`required_size`](Self::required_size); unchecked access past the end of
/// the container panics, checked access reports
/// [`IndexError::Unallocated`], and traversals stop at whichever of the two
/// sizes is smaller.
///
/// ```
/// use multiarray::MultiArray;
///
/// let mut a = MultiArray::<_, 2>::new(vec![2, 3, 5, 7, 11, 13]);
/// a.set_extents([2, 3])?;
/// assert_eq!(a[[1, 0]], 7);
///
/// a.use_column_major_order();
/// assert_eq!(a[[1, 0]], 3);
/// # Ok::<(), multiarray::Error>(())
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct MultiArray<C, const R: usize> {
    storage: C,
    indexer: Indexer<R>,
}

impl<C, const R: usize> MultiArray<C, R>
where
    C: Storage,
{
    /// Wraps `storage` with extents `(len, 1, ..., 1)` in row-major order.
    /// An empty container gets a leading extent of 1.
    pub fn new(storage: C) -> Self {
        let indexer = Indexer::new(storage.len());
        Self { storage, indexer }
    }

    /// Number of elements in the container.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    #[inline]
    pub const fn rank(&self) -> usize {
        R
    }

    /// Number of elements the current shape addresses.
    #[inline]
    pub fn required_size(&self) -> usize {
        self.indexer.size()
    }

    #[inline]
    pub fn extents(&self) -> &[usize; R] {
        self.indexer.extents()
    }

    #[inline]
    pub fn priorities(&self) -> &[usize; R] {
        self.indexer.priorities()
    }

    #[inline]
    pub fn strides(&self) -> &[usize; R] {
        self.indexer.strides()
    }

    #[inline]
    pub fn indexer(&self) -> &Indexer<R> {
        &self.indexer
    }

    /// # Errors
    ///
    /// Returns [`ShapeError::ZeroExtent`](crate::ShapeError::ZeroExtent) if
    /// any extent is zero and [`ShapeError::Overflow`](crate::ShapeError::Overflow)
    /// if their product does not fit in `usize`. The shape is unchanged on
    /// error.
    pub fn set_extents(&mut self, extents: [usize; R]) -> Result<()> {
        self.indexer.set_extents(extents)
    }

    /// # Errors
    ///
    /// Returns [`ShapeError::PriorityOutOfRange`](crate::ShapeError::PriorityOutOfRange)
    /// if a value is not below the rank and
    /// [`ShapeError::NotAPermutation`](crate::ShapeError::NotAPermutation) if
    /// a value repeats. The shape is unchanged on error.
    pub fn set_priorities(&mut self, priorities: [usize; R]) -> Result<()> {
        self.indexer.set_priorities(priorities)
    }

    /// Sets extents and priorities together. Either both are applied or
    /// neither is.
    pub fn set_extents_and_priorities(
        &mut self,
        extents: [usize; R],
        priorities: [usize; R],
    ) -> Result<()> {
        self.indexer.set_extents_and_priorities(extents, priorities)
    }

    pub fn use_order<O: Order>(&mut self) {
        self.indexer.use_order::<O>();
    }

    pub fn use_row_major_order(&mut self) {
        self.use_order::<RowMajor>();
    }

    pub fn use_column_major_order(&mut self) {
        self.use_order::<ColumnMajor>();
    }

    /// Unchecked access: neither the number of coordinates nor their range
    /// is validated.
    ///
    /// # Panics
    ///
    /// Panics if the computed offset is past the end of the container.
    #[inline]
    pub fn get(&self, coords: &[usize]) -> &C::Elem {
        self.storage.element(self.indexer.offset(coords))
    }

    /// Checked access.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::LengthMismatch`] unless there is one coordinate
    /// per axis, [`IndexError::OutOfRange`] for the first coordinate not
    /// below its extent and [`IndexError::Unallocated`] if the element lies
    /// past the end of the container.
    pub fn at(&self, coords: &[usize]) -> Result<&C::Elem> {
        let offset = self.indexer.checked_offset(coords)?;
        let len = self.storage.len();
        self.storage
            .get(offset)
            .ok_or_else(|| IndexError::Unallocated { offset, len }.into())
    }

    pub fn apply<F>(&self, mut f: F)
    where
        F: FnMut(&C::Elem, &[usize; R]),
    {
        let mut coords = [0; R];
        for _ in 0..self.traversal_len() {
            f(self.storage.element(self.indexer.offset(&coords)), &coords);
            self.indexer.advance(&mut coords);
        }
    }

    pub fn indexed_iter(&self) -> IndexedIter<'_, C, R> {
        IndexedIter::new(self)
    }

    #[inline]
    pub fn storage(&self) -> &C {
        &self.storage
    }

    /// The wrapped container. Growing or shrinking it is allowed; the shape
    /// is left as it is.
    #[inline]
    pub fn storage_mut(&mut self) -> &mut C {
        &mut self.storage
    }

    #[inline]
    pub fn into_storage(self) -> C {
        self.storage
    }

    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    fn traversal_len(&self) -> usize {
        self.required_size().min(self.len())
    }
}

impl<C, const R: usize> MultiArray<C, R>
where
    C: StorageMut,
{
    #[inline]
    pub fn get_mut(&mut self, coords: &[usize]) -> &mut C::Elem {
        let offset = self.indexer.offset(coords);
        self.storage.element_mut(offset)
    }

    pub fn at_mut(&mut self, coords: &[usize]) -> Result<&mut C::Elem> {
        let offset = self.indexer.checked_offset(coords)?;
        let len = self.storage.len();
        self.storage
            .get_mut(offset)
            .ok_or_else(|| IndexError::Unallocated { offset, len }.into())
    }

    /// Visits every element with its coordinates, in ascending storage
    /// offset for the current priorities.
    pub fn apply_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut C::Elem, &[usize; R]),
    {
        let mut coords = [0; R];
        for _ in 0..self.traversal_len() {
            let offset = self.indexer.offset(&coords);
            f(self.storage.element_mut(offset), &coords);
            self.indexer.advance(&mut coords);
        }
    }

    /// Assigns `value` to the first `min(required_size, len)` elements of the
    /// container.
    pub fn fill(&mut self, value: C::Elem)
    where
        C::Elem: Clone,
    {
        for offset in 0..self.traversal_len() {
            *self.storage.element_mut(offset) = value.clone();
        }
    }
}

impl<C, const R: usize> Default for MultiArray<C, R>
where
    C: Default + Storage,
{
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C, const R: usize> Index<[usize; R]> for MultiArray<C, R>
where
    C: Storage,
{
    type Output = C::Elem;

    #[inline]
    fn index(&self, coords: [usize; R]) -> &Self::Output {
        self.get(&coords)
    }
}

impl<C, const R: usize> IndexMut<[usize; R]> for MultiArray<C, R>
where
    C: StorageMut,
{
    #[inline]
    fn index_mut(&mut self, coords: [usize; R]) -> &mut Self::Output {
        self.get_mut(&coords)
    }
}
