use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use crate::{
    approx::{ApproxEq, Tolerance},
    traits::Element,
    Matrix, Vector,
};

impl<T, const N: usize> Index<(usize, usize)> for Matrix<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[col][row]
    }
}

impl<T, const N: usize> IndexMut<(usize, usize)> for Matrix<T, N> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[col][row]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Matrix<U, N>> for Matrix<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, N>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T, const N: usize> Eq for Matrix<T, N> where T: Eq {}

impl<T, const N: usize> ApproxEq for Matrix<T, N>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.as_flattened()
            .abs_diff_eq(other.as_flattened(), abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.as_flattened()
            .rel_diff_eq(other.as_flattened(), rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.as_flattened()
            .ulps_diff_eq(other.as_flattened(), ulps_tolerance)
    }

    fn almost_eq(&self, other: &Self, tolerance: Tolerance<Self::Tolerance>) -> bool {
        self.as_flattened()
            .almost_eq(other.as_flattened(), tolerance)
    }
}

/// Matrix * Column Vector.
impl<T: Element, const N: usize> Mul<Vector<T, N>> for Matrix<T, N> {
    type Output = Vector<T, N>;

    fn mul(self, rhs: Vector<T, N>) -> Self::Output {
        Vector::from_fn(|row| (0..N).fold(T::ZERO, |acc, col| acc + self[(row, col)] * rhs[col]))
    }
}

/// Matrix * Matrix.
impl<T: Element, const N: usize> Mul<Matrix<T, N>> for Matrix<T, N> {
    type Output = Matrix<T, N>;

    fn mul(self, rhs: Matrix<T, N>) -> Self::Output {
        Matrix::from_fn(|i, j| (0..N).fold(T::ZERO, |acc, k| acc + self[(i, k)] * rhs[(k, j)]))
    }
}

/// Matrix * Scalar.
impl<T: Element, const N: usize> Mul<T> for Matrix<T, N> {
    type Output = Matrix<T, N>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

/// Element-wise addition.
impl<T: Element, const N: usize> Add for Matrix<T, N> {
    type Output = Matrix<T, N>;

    fn add(self, rhs: Matrix<T, N>) -> Self::Output {
        Matrix::from_fn(|r, c| self[(r, c)] + rhs[(r, c)])
    }
}

/// Element-wise subtraction.
impl<T: Element, const N: usize> Sub for Matrix<T, N> {
    type Output = Matrix<T, N>;

    fn sub(self, rhs: Matrix<T, N>) -> Self::Output {
        Matrix::from_fn(|r, c| self[(r, c)] - rhs[(r, c)])
    }
}

/// Element-wise negation.
impl<T: Element, const N: usize> Neg for Matrix<T, N> {
    type Output = Matrix<T, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}
