use std::{
    fmt,
    ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign},
};

use multiarray::{ArrayMd, Axis, Result};
use num_complex::Complex;
use num_traits::Zero;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Matrix<T, const R: usize, const C: usize>(ArrayMd<T, Axis<R, Axis<C>>>);

impl<T, const R: usize, const C: usize> Matrix<T, R, C>
where
    T: Copy + Default,
{
    fn new<V>(values: V) -> Result<Self>
    where
        V: IntoIterator<Item = T>,
    {
        Ok(Self(ArrayMd::from_values(values)?))
    }

    fn is_nonzero(&self) -> bool
    where
        T: Zero,
    {
        self.0.iter().any(|x| !x.is_zero())
    }

    fn add_product<const X: usize>(&mut self, lhs: &Matrix<T, R, X>, rhs: &Matrix<T, X, C>)
    where
        T: AddAssign + Mul<Output = T>,
    {
        self.0.apply_mut(|x, coords| {
            let (r, c) = (coords[0], coords[1]);
            for i in 0..X {
                *x += lhs.0[r][i] * rhs.0[i][c];
            }
        });
    }
}

impl<T, const R: usize, const C: usize> AddAssign<&Self> for Matrix<T, R, C>
where
    T: AddAssign + Clone,
{
    fn add_assign(&mut self, rhs: &Self) {
        self.0 += &rhs.0;
    }
}

impl<T, const R: usize, const C: usize> SubAssign<&Self> for Matrix<T, R, C>
where
    T: SubAssign + Clone,
{
    fn sub_assign(&mut self, rhs: &Self) {
        self.0 -= &rhs.0;
    }
}

impl<T, const R: usize, const C: usize> Add<&Self> for Matrix<T, R, C>
where
    T: AddAssign + Clone,
{
    type Output = Self;

    fn add(mut self, rhs: &Self) -> Self {
        self += rhs;
        self
    }
}

impl<T, const R: usize, const C: usize> Sub<&Self> for Matrix<T, R, C>
where
    T: SubAssign + Clone,
{
    type Output = Self;

    fn sub(mut self, rhs: &Self) -> Self {
        self -= rhs;
        self
    }
}

impl<T, const R: usize, const X: usize, const C: usize> Mul<&Matrix<T, X, C>> for &Matrix<T, R, X>
where
    T: AddAssign + Copy + Default + Mul<Output = T>,
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: &Matrix<T, X, C>) -> Matrix<T, R, C> {
        let mut result = Matrix(ArrayMd::default());
        result.add_product(self, rhs);
        result
    }
}

impl<T, const R: usize, const C: usize> MulAssign<&Matrix<T, C, C>> for Matrix<T, R, C>
where
    T: AddAssign + Copy + Default + Mul<Output = T>,
{
    fn mul_assign(&mut self, rhs: &Matrix<T, C, C>) {
        *self = &*self * rhs;
    }
}

impl<T, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for r in 0..R {
            f.write_str("[")?;
            for c in 0..C {
                if c > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", self.0[r][c])?;
            }
            f.write_str("]")?;
        }
        f.write_str("]")
    }
}

fn main() -> Result<()> {
    let a = Matrix::<i32, 2, 2>::new([1, 2, 3, 4])?;
    let b = Matrix::<i32, 2, 2>::new([5, 6, 7, 8])?;

    println!("a: {}", a);
    println!("b: {}", b);
    println!("a + b: {}", a + &b);
    println!("a - b: {}", a - &b);
    println!("a * b: {}", &a * &b);

    let mut m = &Matrix::<i32, 3, 2>::new([2, 3, 5, 7, 11, 13])?
        * &Matrix::<i32, 2, 3>::new([1, 4, 9, 16, 25, 36])?;
    println!("m's size: {}-by-{}.", m.0.extents()[0], m.0.extents()[1]);
    println!("m: {}", m);
    m *= &Matrix::new([1, 0, 0, 0, 1, 0, 0, 0, 1])?;
    println!("m * I<3>: {}", m);

    println!(
        "Bool(m): {}; Bool(Z<2,2>): {}",
        m.is_nonzero(),
        (a - &a).is_nonzero()
    );

    let i = Complex::new(0.0, 1.0);
    let z = Matrix::<Complex<f64>, 2, 2>::new([i, Complex::zero(), Complex::zero(), i])?;
    println!("z * z: {}", &z * &z);
    println!("{:?}", (&z * &z).0);

    Ok(())
}
