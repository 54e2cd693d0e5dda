use crate::{
    shape::{self, Zeros},
    Order, Result, RowMajor,
};

/// Mutable shape state of a rank-`R` adapter: extents, priorities and the
/// strides derived from them.
///
/// Every mutation validates first and re-derives the strides only after
/// validation succeeded, so the three arrays are always consistent.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Indexer<const R: usize> {
    extents: [usize; R],
    priorities: [usize; R],
    strides: [usize; R],
    size: usize,
}

impl<const R: usize> Indexer<R> {
    /// A row-major shape of `(len, 1, ..., 1)`, with `len` raised to 1 when
    /// it is zero.
    pub fn new(len: usize) -> Self {
        let mut extents = [1; R];
        if let Some(first) = extents.first_mut() {
            *first = len.max(1);
        }
        let mut indexer = Self {
            extents,
            priorities: RowMajor::priorities(),
            strides: [0; R],
            size: 0,
        };
        indexer.update_strides();
        indexer
    }

    #[inline]
    pub fn extents(&self) -> &[usize; R] {
        &self.extents
    }

    #[inline]
    pub fn priorities(&self) -> &[usize; R] {
        &self.priorities
    }

    #[inline]
    pub fn strides(&self) -> &[usize; R] {
        &self.strides
    }

    /// Product of the extents.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn set_extents(&mut self, extents: [usize; R]) -> Result<()> {
        shape::validate_extents(&extents, Zeros::Forbidden)?;
        self.extents = extents;
        self.update_strides();
        Ok(())
    }

    pub fn set_priorities(&mut self, priorities: [usize; R]) -> Result<()> {
        shape::validate_priority(&priorities)?;
        self.priorities = priorities;
        self.update_strides();
        Ok(())
    }

    /// Sets both, restoring the previous extents if the priorities are
    /// rejected.
    pub fn set_extents_and_priorities(
        &mut self,
        extents: [usize; R],
        priorities: [usize; R],
    ) -> Result<()> {
        let previous = self.extents;
        self.set_extents(extents)?;
        if let Err(e) = self.set_priorities(priorities) {
            self.extents = previous;
            self.update_strides();
            return Err(e);
        }
        Ok(())
    }

    pub fn use_order<O: Order>(&mut self) {
        O::fill_priorities(&mut self.priorities);
        self.update_strides();
    }

    #[inline]
    pub fn offset(&self, coords: &[usize]) -> usize {
        shape::offset(coords, &self.strides)
    }

    /// Validates `coords` against the rank and the extents, then maps them.
    pub fn checked_offset(&self, coords: &[usize]) -> Result<usize> {
        shape::check_coordinates(coords, &self.extents)?;
        Ok(self.offset(coords))
    }

    /// Advances `coords` to the tuple with the next larger offset.
    #[inline]
    pub fn advance(&self, coords: &mut [usize; R]) -> bool {
        shape::advance_odometer(coords, &self.extents, &self.priorities)
    }

    fn update_strides(&mut self) {
        self.size = shape::derive_strides(&self.extents, &self.priorities, &mut self.strides);
    }
}
