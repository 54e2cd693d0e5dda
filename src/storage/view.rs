use super::impl_storage_via_index;

impl_storage_via_index!(['a, T] &'a [T]);
impl_storage_via_index!(mut ['a, T] &'a mut [T]);

#[cfg(test)]
mod tests {
    use crate::storage::{Storage, StorageMut};

    #[test]
    fn address_borrowed_slices() {
        let data = [2, 3, 5, 7];
        let view: &[i32] = &data[1..];

        assert_eq!(view.len(), 3);
        assert_eq!(*view.element(0), 3);
        assert_eq!(Storage::get(&view, 3), None);
    }

    #[test]
    fn write_through_mutable_slice() {
        let mut data = [0; 4];
        let mut view: &mut [i32] = &mut data[..2];
        *view.element_mut(1) = 9;

        assert_eq!(StorageMut::get_mut(&mut view, 2), None);
        assert_eq!(data, [0, 9, 0, 0]);
    }
}
