#[cfg(not(feature = "std"))]
use alloc::collections::VecDeque;
#[cfg(feature = "std")]
use std::collections::VecDeque;

use super::{Storage, StorageMut};

impl<T> Storage for VecDeque<T> {
    type Elem = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, offset: usize) -> Option<&T> {
        VecDeque::get(self, offset)
    }

    #[inline]
    fn element(&self, offset: usize) -> &T {
        &self[offset]
    }
}

impl<T> StorageMut for VecDeque<T> {
    #[inline]
    fn get_mut(&mut self, offset: usize) -> Option<&mut T> {
        VecDeque::get_mut(self, offset)
    }

    #[inline]
    fn element_mut(&mut self, offset: usize) -> &mut T {
        &mut self[offset]
    }
}
