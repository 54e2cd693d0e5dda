#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};

use super::{impl_storage_via_index, Storage, StorageMut};
use crate::{ArrayMd, Dimension};

impl_storage_via_index!(mut [T] Vec<T>);
impl_storage_via_index!(mut [T] Box<[T]>);
impl_storage_via_index!(mut [T, const N: usize] [T; N]);

/// A fixed-shape array is addressed through its row-major flattening.
impl<T, D> Storage for ArrayMd<T, D>
where
    D: Dimension,
{
    type Elem = T;

    #[inline]
    fn len(&self) -> usize {
        D::SIZE
    }

    #[inline]
    fn get(&self, offset: usize) -> Option<&T> {
        self.as_slice().get(offset)
    }

    #[inline]
    fn element(&self, offset: usize) -> &T {
        &self.as_slice()[offset]
    }
}

impl<T, D> StorageMut for ArrayMd<T, D>
where
    D: Dimension,
{
    #[inline]
    fn get_mut(&mut self, offset: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(offset)
    }

    #[inline]
    fn element_mut(&mut self, offset: usize) -> &mut T {
        &mut self.as_mut_slice()[offset]
    }
}

#[cfg(test)]
mod tests {
    #[cfg(not(feature = "std"))]
    use alloc::{boxed::Box, vec, vec::Vec};

    use crate::{
        storage::{Storage, StorageMut},
        ArrayMd,
    };

    fn total<S: Storage<Elem = i32>>(s: &S) -> i32 {
        (0..s.len()).map(|i| *s.element(i)).sum()
    }

    #[test]
    fn address_owned_sequences() {
        let mut v = vec![1, 2, 3];
        let b: Box<[i32]> = vec![4, 5].into_boxed_slice();
        let a = [6, 7, 8, 9];

        assert_eq!(total(&v), 6);
        assert_eq!(total(&b), 9);
        assert_eq!(total(&a), 30);
        assert_eq!(Storage::get(&v, 3), None);
        assert!(Storage::is_empty(&Vec::<i32>::new()));

        *v.element_mut(1) = 20;
        if let Some(x) = StorageMut::get_mut(&mut v, 2) {
            *x = 30;
        }
        assert_eq!(v, [1, 20, 30]);
    }

    #[test]
    fn address_fixed_shape_array() {
        let mut a = ArrayMd::<i32, dims![2, 2]>::from_data([[1, 2], [3, 4]]);

        assert_eq!(Storage::len(&a), 4);
        assert_eq!(total(&a), 10);
        *StorageMut::element_mut(&mut a, 3) = 0;
        assert_eq!(a[1][1], 0);
        assert_eq!(Storage::get(&a, 4), None);
    }

    #[test]
    #[should_panic]
    fn element_past_the_end() {
        let v = vec![1, 2, 3];
        v.element(3);
    }
}
