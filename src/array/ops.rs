use core::{
    borrow::{Borrow, BorrowMut},
    cmp::Ordering,
    hash::{Hash, Hasher},
    ops::{
        Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
        DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Sub, SubAssign,
    },
};

use super::ArrayMd;
use crate::Dimension;

impl<T, D> Clone for ArrayMd<T, D>
where
    D: Dimension,
    T: Clone,
{
    fn clone(&self) -> Self {
        let src = self.as_slice();
        Self::from_fn(|i| src[i].clone())
    }

    fn clone_from(&mut self, source: &Self) {
        self.as_mut_slice().clone_from_slice(source.as_slice());
    }
}

impl<T, D> Copy for ArrayMd<T, D>
where
    D: Dimension,
    D::Data<T>: Copy,
    T: Copy,
{
}

impl<T, U, D> PartialEq<ArrayMd<U, D>> for ArrayMd<T, D>
where
    D: Dimension,
    T: PartialEq<U>,
{
    fn eq(&self, other: &ArrayMd<U, D>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, D> Eq for ArrayMd<T, D>
where
    D: Dimension,
    T: Eq,
{
}

impl<T, D> PartialOrd for ArrayMd<T, D>
where
    D: Dimension,
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T, D> Ord for ArrayMd<T, D>
where
    D: Dimension,
    T: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T, D> Hash for ArrayMd<T, D>
where
    D: Dimension,
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T, D> AsRef<[T]> for ArrayMd<T, D>
where
    D: Dimension,
{
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, D> AsMut<[T]> for ArrayMd<T, D>
where
    D: Dimension,
{
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, D> Borrow<[T]> for ArrayMd<T, D>
where
    D: Dimension,
{
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, D> BorrowMut<[T]> for ArrayMd<T, D>
where
    D: Dimension,
{
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

macro_rules! impl_unary_op {
    ($trait:ident, $op:ident) => {
        impl<T, D> $trait for ArrayMd<T, D>
        where
            D: Dimension,
            T: $trait,
        {
            type Output = ArrayMd<<T as $trait>::Output, D>;

            fn $op(self) -> Self::Output {
                self.map(|x| x.$op())
            }
        }

        impl<T, D> $trait for &ArrayMd<T, D>
        where
            D: Dimension,
            T: $trait + Clone,
        {
            type Output = ArrayMd<<T as $trait>::Output, D>;

            fn $op(self) -> Self::Output {
                let src = self.as_slice();
                ArrayMd::from_fn(|i| src[i].clone().$op())
            }
        }
    };
}

impl_unary_op!(Neg, neg);
impl_unary_op!(Not, not);

macro_rules! impl_binary_op {
    ($trait:ident, $op:ident) => {
        impl<T, U, D> $trait<&ArrayMd<U, D>> for &ArrayMd<T, D>
        where
            D: Dimension,
            T: $trait<U> + Clone,
            U: Clone,
        {
            type Output = ArrayMd<<T as $trait<U>>::Output, D>;

            fn $op(self, rhs: &ArrayMd<U, D>) -> Self::Output {
                let (lhs, rhs) = (self.as_slice(), rhs.as_slice());
                ArrayMd::from_fn(|i| lhs[i].clone().$op(rhs[i].clone()))
            }
        }

        impl<T, U, D> $trait<ArrayMd<U, D>> for ArrayMd<T, D>
        where
            D: Dimension,
            T: $trait<U> + Clone,
            U: Clone,
        {
            type Output = ArrayMd<<T as $trait<U>>::Output, D>;

            fn $op(self, rhs: ArrayMd<U, D>) -> Self::Output {
                (&self).$op(&rhs)
            }
        }

        impl<T, U, D> $trait<&ArrayMd<U, D>> for ArrayMd<T, D>
        where
            D: Dimension,
            T: $trait<U> + Clone,
            U: Clone,
        {
            type Output = ArrayMd<<T as $trait<U>>::Output, D>;

            fn $op(self, rhs: &ArrayMd<U, D>) -> Self::Output {
                (&self).$op(rhs)
            }
        }
    };
}

impl_binary_op!(Add, add);
impl_binary_op!(Sub, sub);
impl_binary_op!(Mul, mul);
impl_binary_op!(Div, div);
impl_binary_op!(Rem, rem);
impl_binary_op!(BitAnd, bitand);
impl_binary_op!(BitOr, bitor);
impl_binary_op!(BitXor, bitxor);

macro_rules! impl_assign_op {
    ($trait:ident, $op:ident) => {
        impl<T, U, D> $trait<&ArrayMd<U, D>> for ArrayMd<T, D>
        where
            D: Dimension,
            T: $trait<U>,
            U: Clone,
        {
            fn $op(&mut self, rhs: &ArrayMd<U, D>) {
                for (dst, src) in self.iter_mut().zip(rhs.iter()) {
                    dst.$op(src.clone());
                }
            }
        }

        impl<T, U, D> $trait<ArrayMd<U, D>> for ArrayMd<T, D>
        where
            D: Dimension,
            T: $trait<U>,
            U: Clone,
        {
            fn $op(&mut self, rhs: ArrayMd<U, D>) {
                <Self as $trait<&ArrayMd<U, D>>>::$op(self, &rhs);
            }
        }
    };
}

impl_assign_op!(AddAssign, add_assign);
impl_assign_op!(SubAssign, sub_assign);
impl_assign_op!(MulAssign, mul_assign);
impl_assign_op!(DivAssign, div_assign);
impl_assign_op!(RemAssign, rem_assign);
impl_assign_op!(BitAndAssign, bitand_assign);
impl_assign_op!(BitOrAssign, bitor_assign);
impl_assign_op!(BitXorAssign, bitxor_assign);
