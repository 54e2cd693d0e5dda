//! The linear sequence contract wrapped by [`MultiArray`](crate::MultiArray).
//!
//! Any random-access container with a length can back an adapter. The
//! adapter only reads the length and addresses single positions; it never
//! grows or shrinks the container.

mod deque;
mod owned;
mod view;

pub trait Storage {
    type Elem;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, offset: usize) -> Option<&Self::Elem>;

    /// The element at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is not below `len()`.
    fn element(&self, offset: usize) -> &Self::Elem;
}

pub trait StorageMut: Storage {
    fn get_mut(&mut self, offset: usize) -> Option<&mut Self::Elem>;

    /// # Panics
    ///
    /// Panics if `offset` is not below `len()`.
    fn element_mut(&mut self, offset: usize) -> &mut Self::Elem;
}

/// Implements the storage traits by forwarding to slice-like inherent
/// methods and native indexing.
macro_rules! impl_storage_via_index {
    ([$($generics:tt)*] $type:ty) => {
        impl<$($generics)*> $crate::storage::Storage for $type {
            type Elem = T;

            #[inline]
            fn len(&self) -> usize {
                <[T]>::len(self)
            }

            #[inline]
            fn get(&self, offset: usize) -> Option<&T> {
                <[T]>::get(self, offset)
            }

            #[inline]
            fn element(&self, offset: usize) -> &T {
                &self[offset]
            }
        }
    };
    (mut [$($generics:tt)*] $type:ty) => {
        impl_storage_via_index!([$($generics)*] $type);

        impl<$($generics)*> $crate::storage::StorageMut for $type {
            #[inline]
            fn get_mut(&mut self, offset: usize) -> Option<&mut T> {
                <[T]>::get_mut(self, offset)
            }

            #[inline]
            fn element_mut(&mut self, offset: usize) -> &mut T {
                &mut self[offset]
            }
        }
    };
}
pub(crate) use impl_storage_via_index;
