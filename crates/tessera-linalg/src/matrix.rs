use std::{
    array, fmt,
    hash::{Hash, Hasher},
    mem::{ManuallyDrop, MaybeUninit},
};

use crate::{
    error::{LinalgError, Result},
    storage::Block,
    traits::{Element, Float, One, Zero},
    Vec3, Vector,
};

mod ops;
mod stored;

pub use stored::*;

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 2x2 matrix with [`f64`] elements.
pub type Mat2d = Mat2<f64>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 3x3 matrix with [`f64`] elements.
pub type Mat3d = Mat3<f64>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Mat4<f64>;

/// A column-major square matrix of order `N` with element type `T`.
///
/// Element `(row, col)` is stored at linear position `col * N + row`, which is also the layout of
/// [`ArrayMatrix`] and [`BufferMatrix`] storage.
///
/// # Construction
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] create a matrix from an array of row or
///   column vectors (or arrays).
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
/// - [`Matrix::from_diagonal`] creates a matrix with a specified diagonal and zero outside of it.
/// - [`Matrix::from_readable`] copies any [`ReadableMatrix`].
/// - [`Matrix::ZERO`] and [`Matrix::IDENTITY`] are the additive and multiplicative identities.
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of `(usize, usize)`. The
/// first element of the tuple is the *row*, the second is the *column*, matching common
/// mathematical notation. Indices are 0-based.
///
/// ```
/// # use tessera_linalg::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1],
///     [2, 3],
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(1, 0)], 2);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. The
/// [`ReadableMatrix`] methods return errors instead:
///
/// ```
/// # use tessera_linalg::*;
/// let mat = Mat2d::IDENTITY;
/// assert_eq!(mat.get(1, 1), Ok(1.0));
/// assert!(mat.get(0, 2).is_err());
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Matrix<T, const N: usize>([[T; N]; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Matrix<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Matrix<T, N> {}

impl<T, const N: usize> Matrix<T, N> {
    /// Creates a new [`Matrix`] in which the elements are wrapped in [`MaybeUninit`].
    const fn new_uninit() -> Matrix<MaybeUninit<T>, N> {
        // Safety: `uninit` is a valid value for the `MaybeUninit<T>` elements
        unsafe { MaybeUninit::<Matrix<MaybeUninit<T>, N>>::uninit().assume_init() }
    }

    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera_linalg::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     vec2(0, 2),
    ///     vec2(1, 3),
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, N>>>(rows: [U; N]) -> Self {
        Matrix::from_columns(rows).transpose()
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    pub fn from_columns<U: Into<Vector<T, N>>>(columns: [U; N]) -> Self {
        Self(columns.map(|col| col.into().into_array()))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera_linalg::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1],
    ///     [10, 11],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| array::from_fn(|row| cb(row, col))))
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, N>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(|v| f(v))))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 2],
    ///     [1, 3],
    /// ]));
    /// ```
    pub fn transpose(self) -> Self {
        let mut out = Self::new_uninit();
        for (c, column) in self.0.into_iter().enumerate() {
            for (r, elem) in column.into_iter().enumerate() {
                out.0[r][c] = MaybeUninit::new(elem);
            }
        }
        // Safety: the loop above writes to each element.
        unsafe { out.assume_init() }
    }

    /// Returns the columns of this matrix.
    pub fn into_columns(self) -> [Vector<T, N>; N] {
        self.0.map(Vector::from)
    }

    /// Returns the elements in column-major order.
    pub fn as_flattened(&self) -> &[T] {
        self.0.as_flattened()
    }

    /// Returns `self`, but with the element at `(row, col)` replaced with `elem`, without dropping
    /// the old element at that position.
    const fn with_leaky_elem(self, row: usize, col: usize, elem: T) -> Self {
        unsafe {
            // Leaks whatever was at `(col,row)` before.
            union UnWrapper<T, const N: usize> {
                wrapped: ManuallyDrop<Matrix<ManuallyDrop<T>, N>>,
                unwrapped: ManuallyDrop<Matrix<T, N>>,
            }

            let mut wrapped = ManuallyDrop::into_inner(
                UnWrapper {
                    unwrapped: ManuallyDrop::new(self),
                }
                .wrapped,
            );
            wrapped.0[col][row] = ManuallyDrop::new(elem);

            ManuallyDrop::into_inner(
                UnWrapper {
                    wrapped: ManuallyDrop::new(wrapped),
                }
                .unwrapped,
            )
        }
    }
}

impl<T, const N: usize> Matrix<MaybeUninit<T>, N> {
    /// Removes the [`MaybeUninit`] wrapper from each matrix element.
    ///
    /// See [`MaybeUninit::assume_init`] for details about the safety invariant the caller needs to
    /// uphold.
    const unsafe fn assume_init(self) -> Matrix<T, N> {
        // Safety: `MaybeUninit<T>` and `T` have the same layout.
        union UnWrapper<T, const N: usize> {
            uninit: ManuallyDrop<Matrix<MaybeUninit<T>, N>>,
            init: ManuallyDrop<Matrix<T, N>>,
        }

        ManuallyDrop::into_inner(
            UnWrapper {
                uninit: ManuallyDrop::new(self),
            }
            .init,
        )
    }
}

impl<T: Zero, const N: usize> Matrix<T, N> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = unsafe {
        // `[T::ZERO; N]` would require `T: Copy`, which is not available in const contexts.
        let mut mat = Self::new_uninit();
        let mut col = 0;
        while col < N {
            let mut row = 0;
            while row < N {
                mat.0[col][row] = MaybeUninit::new(T::ZERO);
                row += 1;
            }
            col += 1;
        }

        // Safety: the loop above has initialized every element.
        mat.assume_init()
    };
}

impl<T: Zero + One, const N: usize> Matrix<T, N> {
    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else.
    pub const IDENTITY: Self = {
        let mut this = Self::ZERO;
        let mut i = 0;
        while i < N {
            this = this.with_leaky_elem(i, i, T::ONE);
            i += 1;
        }
        this
    };
}

impl<T: Element, const N: usize> Matrix<T, N> {
    /// Copies a [`ReadableMatrix`] into a new [`Matrix`].
    pub fn from_readable<M: ReadableMatrix<T, N>>(source: &M) -> Result<Self> {
        source.to_matrix()
    }

    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera_linalg::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    /// Returns a [`Vector`] holding the diagonal elements of this matrix.
    pub fn diagonal(&self) -> Vector<T, N> {
        Vector::from_fn(|i| self[(i, i)])
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera_linalg::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag.trace(), 1 + 2 + 3);
    ///
    /// assert_eq!(Mat3f::IDENTITY.trace(), 3.0);
    /// ```
    pub fn trace(&self) -> T {
        (0..N).fold(T::ZERO, |acc, i| acc + self[(i, i)])
    }

    /// Multiplies every element by `factor`. Equivalent to `self * factor`.
    pub fn scale(self, factor: T) -> Self {
        self.map(|elem| elem * factor)
    }

    /// Matrix product `self * other`.
    pub fn multiply(self, other: Self) -> Self {
        self * other
    }

    /// Matrix-vector product `self * v`.
    pub fn multiply_vector(self, v: Vector<T, N>) -> Vector<T, N> {
        self * v
    }

    /// Returns a copy of `self` with row `row` replaced by `value`.
    pub fn with_row(mut self, row: usize, value: Vector<T, N>) -> Result<Self> {
        check_index(row, 0, N)?;
        for col in 0..N {
            self[(row, col)] = value[col];
        }
        Ok(self)
    }

    /// Returns a copy of `self` with column `col` replaced by `value`.
    pub fn with_column(mut self, col: usize, value: Vector<T, N>) -> Result<Self> {
        check_index(0, col, N)?;
        self.0[col] = value.into_array();
        Ok(self)
    }
}

impl<T: Float, const N: usize> Matrix<T, N> {
    /// Converts the elements to another floating-point type.
    pub fn cast<U: Float>(self) -> Matrix<U, N> {
        self.map(|elem| U::from_f64(elem.to_f64()))
    }

    /// Inverts this matrix.
    ///
    /// Fails with [`LinalgError::NonInvertible`] if the determinant is indistinguishable from
    /// zero compared to the product of the column lengths, that is if
    /// `|det| <= NON_INVERTIBLE_TOLERANCE * ‖col_0‖ * ... * ‖col_(N-1)‖` (see
    /// [`Float::NON_INVERTIBLE_TOLERANCE`]). Scaling any single column does not change whether a
    /// matrix is invertible, so scale matrices of any magnitude invert.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [2.0, 0.0],
    ///     [0.0, 4.0],
    /// ]);
    /// assert_eq!(mat.inverse().unwrap(), Matrix::from_diagonal([0.5, 0.25]));
    /// assert!(Mat3d::ZERO.inverse().unwrap_err().is_non_invertible());
    /// ```
    pub fn inverse(&self) -> Result<Self>
    where
        Self: SquareMatrix<T>,
    {
        let determinant = self.determinant();
        // Determinant of the matrix with unit-length columns, which is at most 1 by Hadamard's
        // inequality. A zero column divides to NaN, and NaN fails the comparison.
        let relative = Self::from_columns(self.into_columns().map(|col| {
            let magnitude = col.magnitude();
            col.map(|elem| elem / magnitude)
        }))
        .determinant()
        .abs();
        if !(relative > T::NON_INVERTIBLE_TOLERANCE) {
            log::debug!("matrix is not invertible (determinant {determinant}): {self:?}");
            return Err(LinalgError::NonInvertible {
                determinant: determinant.to_f64(),
            });
        }

        Ok(self.adjugate().scale(T::ONE / determinant))
    }
}

/// Order-specific kernels of square matrices.
pub trait SquareMatrix<T: Float>: Sized {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    fn determinant(&self) -> T;

    /// Returns the adjugate (the transposed cofactor matrix).
    ///
    /// For invertible matrices, `adjugate / determinant` is the inverse.
    fn adjugate(&self) -> Self;
}

impl<T: Float> SquareMatrix<T> for Matrix<T, 2> {
    #[inline]
    fn determinant(&self) -> T {
        self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]
    }

    fn adjugate(&self) -> Self {
        let [[a, c], [b, d]] = self.0;
        Matrix::from_columns([[d, -c], [-b, a]])
    }
}

impl<T: Float> SquareMatrix<T> for Matrix<T, 3> {
    fn determinant(&self) -> T {
        let [[a, d, g], [b, e, h], [c, f, i]] = self.0;
        a * e * i + b * f * g + c * d * h - c * e * g - b * d * i - a * f * h
    }

    fn adjugate(&self) -> Self {
        let [c0, c1, c2] = self.into_columns();
        Matrix::from_rows([c1.cross(c2), c2.cross(c0), c0.cross(c1)])
    }
}

impl<T: Float> SquareMatrix<T> for Matrix<T, 4> {
    /// Cofactor expansion along the first row.
    fn determinant(&self) -> T {
        (0..4).fold(T::ZERO, |acc, col| {
            acc + self[(0, col)] * self.cofactor(0, col)
        })
    }

    fn adjugate(&self) -> Self {
        Matrix::from_fn(|row, col| self.cofactor(col, row))
    }
}

impl<T: Element> Matrix<T, 4> {
    /// Returns the 3x3 matrix left after removing row `row` and column `col`.
    fn minor(&self, row: usize, col: usize) -> Matrix<T, 3> {
        let skip = |i: usize, removed: usize| if i < removed { i } else { i + 1 };
        Matrix::from_fn(|r, c| self[(skip(r, row), skip(c, col))])
    }

    /// Transforms `point` as a homogeneous point (with W = 1).
    ///
    /// No perspective divide is performed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera_linalg::*;
    /// let m = Mat4d::from_translation(vec3(1.0, 2.0, 3.0));
    /// assert_eq!(m.transform_point(Vec3d::ZERO), vec3(1.0, 2.0, 3.0));
    /// assert_eq!(m.transform_direction(Vec3d::X), Vec3d::X);
    /// ```
    pub fn transform_point(&self, point: Vec3<T>) -> Vec3<T> {
        (*self * point.extend(T::ONE)).truncate()
    }

    /// Transforms `direction` as a homogeneous direction (with W = 0), ignoring translation.
    pub fn transform_direction(&self, direction: Vec3<T>) -> Vec3<T> {
        (*self * direction.extend(T::ZERO)).truncate()
    }

    /// Creates a matrix translating points by `offset`.
    pub fn from_translation(offset: Vec3<T>) -> Self {
        let mut mat = Self::IDENTITY;
        mat.0[3] = offset.extend(T::ONE).into_array();
        mat
    }

    /// Creates a matrix scaling each axis by the matching component of `factors`.
    pub fn from_scale(factors: Vec3<T>) -> Self {
        Self::from_diagonal(factors.extend(T::ONE))
    }

    /// Returns the upper left 3x3 block (the linear part of an affine transform).
    pub fn upper_left(&self) -> Matrix<T, 3> {
        Matrix::from_fn(|r, c| self[(r, c)])
    }
}

impl<T: Float> Matrix<T, 4> {
    fn cofactor(&self, row: usize, col: usize) -> T {
        let minor = self.minor(row, col).determinant();
        if (row + col) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }
}

impl<T: Element> Matrix<T, 3> {
    /// Embeds this matrix into the upper left of a 4x4 identity matrix.
    pub fn extend(&self) -> Matrix<T, 4> {
        Matrix::from_fn(|r, c| match (r < 3, c < 3) {
            (true, true) => self[(r, c)],
            _ if r == c => T::ONE,
            _ => T::ZERO,
        })
    }

    /// Returns the matrix rotating vectors around `axis` by `radians` (counterclockwise when
    /// looking against the axis).
    ///
    /// `axis` does not have to be normalized. A zero axis yields the identity.
    pub fn from_axis_angle(axis: Vec3<T>, radians: T) -> Self
    where
        T: Float,
    {
        crate::Quat::from_axis_angle(axis, radians).to_matrix3()
    }
}

/// Checks `row` and `col` against the order `n` of a matrix.
pub(crate) fn check_index(row: usize, col: usize, n: usize) -> Result<()> {
    if row < n && col < n {
        Ok(())
    } else {
        log::trace!("out-of-range access: ({row}, {col}) of a matrix of order {n}");
        Err(LinalgError::RowColumnOutOfRange {
            row,
            column: col,
            order: n,
        })
    }
}

/// Stores the `N * N` elements in column-major order.
impl<T: Element, const N: usize> Block for Matrix<T, N> {
    type Element = T;
    const OWNS_MEMORY: bool = true;

    fn capacity(&self) -> usize {
        N * N
    }

    unsafe fn load_unchecked(&self, slot: usize) -> T {
        *self.0.as_flattened().get_unchecked(slot)
    }

    unsafe fn store_unchecked(&mut self, slot: usize, value: T) {
        *self.0.as_flattened_mut().get_unchecked_mut(slot) = value;
    }
}

impl<T: Zero + One, const N: usize> Default for Matrix<T, N> {
    /// Returns the identity matrix.
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: Element, const N: usize> Hash for Matrix<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for elem in self.as_flattened() {
            state.write_u64(elem.hash_bits());
        }
    }
}

struct FormatRow<'a, T, const N: usize>(&'a Matrix<T, N>, usize);

impl<'a, T: fmt::Debug, const N: usize> fmt::Debug for FormatRow<'a, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries((0..N).map(|col| &self.0[(self.1, col)]))
            .finish()
    }
}

/// Prints the matrix row by row.
impl<T: fmt::Debug, const N: usize> fmt::Debug for Matrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for row in 0..N {
            list.entry(&format_args!("{:?}", FormatRow(self, row)));
        }
        list.finish()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Matrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..N {
            if row != 0 {
                f.write_str("; ")?;
            }
            for col in 0..N {
                if col != 0 {
                    f.write_str(" ")?;
                }
                fmt::Display::fmt(&self[(row, col)], f)?;
            }
        }
        Ok(())
    }
}
