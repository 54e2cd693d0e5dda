use core::iter::FusedIterator;

use super::{Indexer, MultiArray};
use crate::storage::Storage;

/// Iterator over `(coordinates, element)` pairs of a [`MultiArray`], in
/// ascending storage offset for the current priorities.
///
/// Stops after `min(required_size, len)` elements.
pub struct IndexedIter<'a, C, const R: usize>
where
    C: Storage,
{
    storage: &'a C,
    indexer: &'a Indexer<R>,
    coords: [usize; R],
    len: usize,
}

impl<'a, C, const R: usize> IndexedIter<'a, C, R>
where
    C: Storage,
{
    pub(super) fn new(array: &'a MultiArray<C, R>) -> Self {
        Self {
            storage: &array.storage,
            indexer: &array.indexer,
            coords: [0; R],
            len: array.traversal_len(),
        }
    }
}

impl<'a, C, const R: usize> Iterator for IndexedIter<'a, C, R>
where
    C: Storage,
{
    type Item = ([usize; R], &'a C::Elem);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let coords = self.coords;
        let elem = self.storage.element(self.indexer.offset(&coords));
        self.indexer.advance(&mut self.coords);
        self.len -= 1;
        Some((coords, elem))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<C, const R: usize> ExactSizeIterator for IndexedIter<'_, C, R>
where
    C: Storage,
{
    #[inline(always)]
    fn len(&self) -> usize {
        self.len
    }
}

impl<C, const R: usize> FusedIterator for IndexedIter<'_, C, R> where C: Storage {}

#[cfg(test)]
mod tests {
    #[cfg(not(feature = "std"))]
    use alloc::{vec, vec::Vec};

    use crate::{MultiArray, Result};

    #[test]
    fn iterate_with_coordinates() -> Result<()> {
        let mut a = MultiArray::<_, 2>::new(vec![2, 3, 5, 7, 11, 13]);
        a.set_extents([2, 3])?;
        let iter = a.indexed_iter();

        assert_eq!(iter.len(), 6);
        assert_eq!(
            iter.map(|(c, &x)| (c, x)).collect::<Vec<_>>(),
            vec![
                ([0, 0], 2),
                ([0, 1], 3),
                ([0, 2], 5),
                ([1, 0], 7),
                ([1, 1], 11),
                ([1, 2], 13),
            ]
        );

        Ok(())
    }

    #[test]
    fn iterate_column_major_in_storage_order() -> Result<()> {
        let mut a = MultiArray::<_, 2>::new(vec![2, 3, 5, 7, 11, 13]);
        a.set_extents([2, 3])?;
        a.use_column_major_order();
        let items = a.indexed_iter().collect::<Vec<_>>();

        assert_eq!(items[1], ([1, 0], &3));
        assert_eq!(items[2], ([0, 1], &5));
        assert!(items.iter().map(|&(_, &x)| x).eq([2, 3, 5, 7, 11, 13]));

        Ok(())
    }

    #[test]
    fn stop_at_end_of_storage() -> Result<()> {
        let mut a = MultiArray::<_, 2>::new(vec![1; 5]);
        a.set_extents([3, 3])?;
        let mut iter = a.indexed_iter();

        assert_eq!(iter.len(), 5);
        assert_eq!(iter.by_ref().count(), 5);
        assert_eq!(iter.next(), None);

        Ok(())
    }
}
