//! Matrices whose elements live in a [`Storage`].

use std::cell::Cell;

use crate::{
    error::Result,
    matrix::check_index,
    storage::{Block, Storage},
    traits::{Element, Float},
    Matrix, SquareMatrix, Vector, WritableVector,
};

/// Read access to the elements of a square matrix of order `N`.
///
/// Row and column indices are validated before any element is read.
pub trait ReadableMatrix<T: Element, const N: usize> {
    /// Reads the element in row `row` and column `column`.
    fn get(&self, row: usize, column: usize) -> Result<T>;

    /// Checks that all `N * N` elements can be accessed.
    fn check_bounds(&self) -> Result<()>;

    /// Reads an element without any checks.
    ///
    /// # Safety
    ///
    /// `row` and `column` must be less than `N`, and [`ReadableMatrix::check_bounds`] must succeed.
    unsafe fn get_unchecked(&self, row: usize, column: usize) -> T;

    /// Copies all elements into a [`Matrix`].
    fn to_matrix(&self) -> Result<Matrix<T, N>> {
        self.check_bounds()?;
        // SAFETY: all indices are below `N` and bounds were checked above.
        Ok(Matrix::from_fn(|r, c| unsafe { self.get_unchecked(r, c) }))
    }

    /// Returns row `row` as a vector.
    fn row(&self, row: usize) -> Result<Vector<T, N>> {
        check_index(row, 0, N)?;
        self.check_bounds()?;
        // SAFETY: `row` was validated, and bounds were checked above.
        Ok(Vector::from_fn(|c| unsafe { self.get_unchecked(row, c) }))
    }

    /// Returns column `column` as a vector.
    fn column(&self, column: usize) -> Result<Vector<T, N>> {
        check_index(0, column, N)?;
        self.check_bounds()?;
        // SAFETY: `column` was validated, and bounds were checked above.
        Ok(Vector::from_fn(|r| unsafe { self.get_unchecked(r, column) }))
    }

    /// Writes row `row` into `out`.
    fn row_into<V: WritableVector<T, N>>(&self, row: usize, out: &mut V) -> Result<()> {
        let value = self.row(row)?;
        out.set_all(value)
    }

    /// Writes column `column` into `out`.
    fn column_into<V: WritableVector<T, N>>(&self, column: usize, out: &mut V) -> Result<()> {
        let value = self.column(column)?;
        out.set_all(value)
    }

    /// Writes row `row` into `out` without any checks.
    ///
    /// # Safety
    ///
    /// `row` must be less than `N`, [`ReadableMatrix::check_bounds`] must succeed for `self` and
    /// [`ReadableVector::check_bounds`][crate::ReadableVector::check_bounds] for `out`.
    unsafe fn row_into_unchecked<V: WritableVector<T, N>>(&self, row: usize, out: &mut V) {
        out.set_all_unchecked(Vector::from_fn(|c| self.get_unchecked(row, c)));
    }

    /// Writes column `column` into `out` without any checks.
    ///
    /// # Safety
    ///
    /// `column` must be less than `N`, [`ReadableMatrix::check_bounds`] must succeed for `self`
    /// and [`ReadableVector::check_bounds`][crate::ReadableVector::check_bounds] for `out`.
    unsafe fn column_into_unchecked<V: WritableVector<T, N>>(&self, column: usize, out: &mut V) {
        out.set_all_unchecked(Vector::from_fn(|r| self.get_unchecked(r, column)));
    }
}

/// Write access to the elements of a square matrix of order `N`.
///
/// Multi-element writes check every affected element before writing any of them.
pub trait WritableMatrix<T: Element, const N: usize>: ReadableMatrix<T, N> {
    /// Writes the element in row `row` and column `column`.
    fn set(&mut self, row: usize, column: usize, value: T) -> Result<()>;

    /// Writes an element without any checks.
    ///
    /// # Safety
    ///
    /// `row` and `column` must be less than `N`, and [`ReadableMatrix::check_bounds`] must succeed.
    unsafe fn set_unchecked(&mut self, row: usize, column: usize, value: T);

    /// Overwrites all elements with those of `value`.
    fn set_all(&mut self, value: Matrix<T, N>) -> Result<()> {
        self.check_bounds()?;
        for (c, column) in value.into_columns().into_iter().enumerate() {
            for (r, elem) in column.into_array().into_iter().enumerate() {
                // SAFETY: all indices are below `N` and bounds were checked above.
                unsafe { self.set_unchecked(r, c, elem) };
            }
        }
        Ok(())
    }

    /// Overwrites row `row`.
    fn set_row(&mut self, row: usize, value: Vector<T, N>) -> Result<()> {
        check_index(row, 0, N)?;
        self.check_bounds()?;
        for (c, elem) in value.into_array().into_iter().enumerate() {
            // SAFETY: `row` was validated, and bounds were checked above.
            unsafe { self.set_unchecked(row, c, elem) };
        }
        Ok(())
    }

    /// Overwrites column `column`.
    fn set_column(&mut self, column: usize, value: Vector<T, N>) -> Result<()> {
        check_index(0, column, N)?;
        self.check_bounds()?;
        for (r, elem) in value.into_array().into_iter().enumerate() {
            // SAFETY: `column` was validated, and bounds were checked above.
            unsafe { self.set_unchecked(r, column, elem) };
        }
        Ok(())
    }

    fn set_identity(&mut self) -> Result<()> {
        self.set_all(Matrix::IDENTITY)
    }

    fn transpose_in_place(&mut self) -> Result<()> {
        let m = self.to_matrix()?;
        self.set_all(m.transpose())
    }

    /// Replaces the matrix with its inverse. On failure, the matrix is left unchanged.
    fn invert_in_place(&mut self) -> Result<()>
    where
        T: Float,
        Matrix<T, N>: SquareMatrix<T>,
    {
        let m = self.to_matrix()?;
        self.set_all(m.inverse()?)
    }
}

impl<T: Element, const N: usize> ReadableMatrix<T, N> for Matrix<T, N> {
    fn get(&self, row: usize, column: usize) -> Result<T> {
        check_index(row, column, N)?;
        Ok(self[(row, column)])
    }

    fn check_bounds(&self) -> Result<()> {
        Ok(())
    }

    unsafe fn get_unchecked(&self, row: usize, column: usize) -> T {
        *self.as_flattened().get_unchecked(column * N + row)
    }

    fn to_matrix(&self) -> Result<Matrix<T, N>> {
        Ok(*self)
    }
}

/// A square matrix of order `N` stored in column-major order in a [`Block`] at some offset.
///
/// See [`ArrayMatrix`] and [`BufferMatrix`] for the two storage strategies.
#[derive(Debug, Clone, Copy)]
pub struct StoredMatrix<B, const N: usize> {
    storage: Storage<B>,
}

/// A matrix that owns its elements.
///
/// The [`Default`] value is the identity matrix.
pub type ArrayMatrix<T, const N: usize> = StoredMatrix<Matrix<T, N>, N>;

/// A matrix viewing `N * N` elements of a shared buffer.
///
/// Element `(row, column)` lives in cell `offset + column * N + row`.
///
/// # Examples
///
/// ```
/// # use tessera_linalg::*;
/// let mut buffer = [0.0f32; 4];
/// let cells = shared_cells(&mut buffer);
/// let mut m = BufferMatrix::<f32, 2>::new(cells, 0);
/// m.set(0, 1, 5.0).unwrap();
/// assert_eq!(cells[2].get(), 5.0);
/// ```
pub type BufferMatrix<'a, T, const N: usize> = StoredMatrix<&'a [Cell<T>], N>;

impl<B: Block, const N: usize> StoredMatrix<B, N> {
    /// Creates a matrix whose element `(0, 0)` is at slot `offset` of `block`.
    ///
    /// Out-of-range offsets are accepted here and reported by every element access.
    pub fn from_block(block: B, offset: usize) -> Self {
        Self {
            storage: Storage::new(block, offset, N * N),
        }
    }

    pub fn storage(&self) -> &Storage<B> {
        &self.storage
    }

    /// Serializes the elements in column-major, host-native byte order.
    pub fn native_bytes(&self) -> Result<Vec<u8>> {
        self.storage.native_bytes()
    }
}

impl<T: Element, const N: usize> ArrayMatrix<T, N> {
    pub fn new(value: Matrix<T, N>) -> Self {
        Self::from_block(value, 0)
    }
}

impl<T: Element, const N: usize> Default for ArrayMatrix<T, N> {
    fn default() -> Self {
        Self::new(Matrix::IDENTITY)
    }
}

impl<T: Element, const N: usize> From<Matrix<T, N>> for ArrayMatrix<T, N> {
    fn from(value: Matrix<T, N>) -> Self {
        Self::new(value)
    }
}

impl<'a, T: Element, const N: usize> BufferMatrix<'a, T, N> {
    /// Creates a view of the `N * N` cells starting at `offset`.
    pub fn new(cells: &'a [Cell<T>], offset: usize) -> Self {
        Self::from_block(cells, offset)
    }

    /// Returns the cells holding the elements in column-major order.
    pub fn native_view(&self) -> Result<&'a [Cell<T>]> {
        self.storage.native_view()
    }
}

impl<B: Block, const N: usize> ReadableMatrix<B::Element, N> for StoredMatrix<B, N> {
    fn get(&self, row: usize, column: usize) -> Result<B::Element> {
        check_index(row, column, N)?;
        self.storage.read(column * N + row)
    }

    fn check_bounds(&self) -> Result<()> {
        self.storage.check_bounds()
    }

    unsafe fn get_unchecked(&self, row: usize, column: usize) -> B::Element {
        self.storage.read_unchecked(column * N + row)
    }
}

impl<B: Block, const N: usize> WritableMatrix<B::Element, N> for StoredMatrix<B, N> {
    fn set(&mut self, row: usize, column: usize, value: B::Element) -> Result<()> {
        check_index(row, column, N)?;
        self.storage.write(column * N + row, value)
    }

    unsafe fn set_unchecked(&mut self, row: usize, column: usize, value: B::Element) {
        self.storage.write_unchecked(column * N + row, value)
    }
}

/// Copies `source` into `destination`, element for element.
pub fn make_matrix<T, S, D, const N: usize>(source: &S, destination: &mut D) -> Result<()>
where
    T: Element,
    S: ReadableMatrix<T, N> + ?Sized,
    D: WritableMatrix<T, N> + ?Sized,
{
    destination.set_all(source.to_matrix()?)
}

/// Writes the product `a * b` into `out`.
///
/// The product is computed before `out` is touched, so `out` may view the same cells as `a` or
/// `b`.
///
/// # Examples
///
/// ```
/// # use tessera_linalg::*;
/// let mut buffer = [0.0f64; 4];
/// let cells = shared_cells(&mut buffer);
/// let mut m = BufferMatrix::<f64, 2>::new(cells, 0);
/// m.set_all(Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]])).unwrap();
///
/// let alias = BufferMatrix::<f64, 2>::new(cells, 0);
/// multiply_into(&alias, &alias, &mut m).unwrap();
/// assert_eq!(m.to_matrix().unwrap(), Matrix::from_rows([[7.0, 10.0], [15.0, 22.0]]));
/// ```
pub fn multiply_into<T, A, B, O, const N: usize>(a: &A, b: &B, out: &mut O) -> Result<()>
where
    T: Element,
    A: ReadableMatrix<T, N> + ?Sized,
    B: ReadableMatrix<T, N> + ?Sized,
    O: WritableMatrix<T, N> + ?Sized,
{
    let product = a.to_matrix()? * b.to_matrix()?;
    out.set_all(product)
}

/// Writes the transpose of `source` into `out`.
pub fn transpose_into<T, S, O, const N: usize>(source: &S, out: &mut O) -> Result<()>
where
    T: Element,
    S: ReadableMatrix<T, N> + ?Sized,
    O: WritableMatrix<T, N> + ?Sized,
{
    out.set_all(source.to_matrix()?.transpose())
}

/// Writes the inverse of `source` into `out`. On failure, `out` is left unchanged.
pub fn inverse_into<T, S, O, const N: usize>(source: &S, out: &mut O) -> Result<()>
where
    T: Float,
    Matrix<T, N>: SquareMatrix<T>,
    S: ReadableMatrix<T, N> + ?Sized,
    O: WritableMatrix<T, N> + ?Sized,
{
    out.set_all(source.to_matrix()?.inverse()?)
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn column_major_layout() {
        let mut buffer = [0.0f64; 4];
        let cells = shared_cells(&mut buffer);
        let mut m = BufferMatrix::<f64, 2>::new(cells, 0);
        m.set(0, 0, 0.0).unwrap();
        m.set(0, 1, 1.0).unwrap();
        m.set(1, 0, 100.0).unwrap();
        m.set(1, 1, 101.0).unwrap();

        let view: Vec<f64> = m.native_view().unwrap().iter().map(|c| c.get()).collect();
        assert_eq!(view, [0.0, 100.0, 1.0, 101.0]);
        assert_eq!(
            m.native_bytes().unwrap(),
            bytemuck::cast_slice::<f64, u8>(&[0.0, 100.0, 1.0, 101.0])
        );
    }

    #[test]
    fn row_column_validation() {
        let mut m = ArrayMatrix::<f32, 3>::default();
        assert!(m.storage().owns_memory());
        assert_eq!(m.to_matrix().unwrap(), Mat3f::IDENTITY);

        for (r, c) in [(3, 0), (0, 3), (3, 3), (usize::MAX, 0)] {
            assert!(m.get(r, c).unwrap_err().is_index_out_of_range());
            assert!(m.set(r, c, 1.0).unwrap_err().is_index_out_of_range());
        }
        assert!(m.row(3).is_err());
        assert!(m.column(3).is_err());
        assert!(m.set_row(3, Vec3f::ZERO).is_err());
        assert!(m.set_column(3, Vec3f::ZERO).is_err());
        assert_eq!(m.to_matrix().unwrap(), Mat3f::IDENTITY);
    }

    #[test]
    fn rows_and_columns() {
        let mut m = ArrayMatrix::new(Mat3d::ZERO);
        m.set_row(0, vec3(1.0, 2.0, 3.0)).unwrap();
        m.set_column(2, vec3(7.0, 8.0, 9.0)).unwrap();
        assert_eq!(
            m.to_matrix().unwrap(),
            Mat3d::from_rows([[1.0, 2.0, 7.0], [0.0, 0.0, 8.0], [0.0, 0.0, 9.0]])
        );
        assert_eq!(m.row(0).unwrap(), vec3(1.0, 2.0, 7.0));
        assert_eq!(m.column(2).unwrap(), vec3(7.0, 8.0, 9.0));

        let mut out = ArrayVector::<f64, 3>::default();
        m.row_into(1, &mut out).unwrap();
        assert_eq!(out.to_vector().unwrap(), vec3(0.0, 0.0, 8.0));
        m.column_into(0, &mut out).unwrap();
        assert_eq!(out.to_vector().unwrap(), vec3(1.0, 0.0, 0.0));

        unsafe {
            m.row_into_unchecked(0, &mut out);
            assert_eq!(out.to_vector().unwrap(), vec3(1.0, 2.0, 7.0));
            m.column_into_unchecked(1, &mut out);
            assert_eq!(out.to_vector().unwrap(), vec3(2.0, 0.0, 0.0));
        }

        // A destination that does not fit is rejected without touching it.
        let mut buffer = [0.0f64; 2];
        let cells = shared_cells(&mut buffer);
        let mut short = BufferVector::<f64, 3>::new(cells, 0);
        assert!(m.row_into(0, &mut short).is_err());
        assert_eq!(cells[0].get(), 0.0);
    }

    #[test]
    fn snapshot_is_readable() {
        let m = Mat2d::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m.get(1, 0).unwrap(), 3.0);
        assert_eq!(m.row(1).unwrap(), vec2(3.0, 4.0));
        assert_eq!(m.column(1).unwrap(), vec2(2.0, 4.0));
        assert!(m.get(2, 0).is_err());
        assert_eq!(Matrix::from_readable(&m).unwrap(), m);
    }

    #[test]
    fn whole_matrix_writes() {
        let mut m = ArrayMatrix::new(Mat2d::from_rows([[1.0, 2.0], [3.0, 4.0]]));
        m.transpose_in_place().unwrap();
        assert_eq!(
            m.to_matrix().unwrap(),
            Mat2d::from_rows([[1.0, 3.0], [2.0, 4.0]])
        );

        m.invert_in_place().unwrap();
        assert_approx_eq!(
            m.to_matrix().unwrap(),
            Mat2d::from_rows([[-2.0, 1.5], [1.0, -0.5]])
        )
        .abs(1e-12);

        m.set_all(Mat2d::ZERO).unwrap();
        assert!(m.invert_in_place().unwrap_err().is_non_invertible());
        assert_eq!(m.to_matrix().unwrap(), Mat2d::ZERO);

        m.set_identity().unwrap();
        assert_eq!(m.to_matrix().unwrap(), Mat2d::IDENTITY);
    }

    #[test]
    fn free_functions() {
        let source = Mat3f::from_rows([[1.0, 2.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 2.0]]);
        let mut out = ArrayMatrix::<f32, 3>::default();

        transpose_into(&source, &mut out).unwrap();
        assert_eq!(out.to_matrix().unwrap(), source.transpose());

        inverse_into(&source, &mut out).unwrap();
        assert_approx_eq!(
            out.to_matrix().unwrap(),
            Mat3f::from_rows([[1.0, -2.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.5]])
        );

        make_matrix(&source, &mut out).unwrap();
        assert_eq!(out.to_matrix().unwrap(), source);

        assert!(inverse_into(&Mat3f::ZERO, &mut out).is_err());
        assert_eq!(out.to_matrix().unwrap(), source);
    }

    #[test]
    fn multiply_aliasing_views() {
        let mut buffer = [0.0f64; 8];
        let cells = shared_cells(&mut buffer);
        let mut a = BufferMatrix::<f64, 2>::new(cells, 0);
        let mut b = BufferMatrix::<f64, 2>::new(cells, 4);
        a.set_all(Mat2d::from_rows([[0.0, 1.0], [1.0, 0.0]])).unwrap();
        b.set_all(Mat2d::from_rows([[1.0, 2.0], [3.0, 4.0]])).unwrap();

        // Swap the rows of `b` in place through a second view of the same cells.
        let b_alias = BufferMatrix::<f64, 2>::new(cells, 4);
        multiply_into(&a, &b_alias, &mut b).unwrap();
        assert_eq!(
            b.to_matrix().unwrap(),
            Mat2d::from_rows([[3.0, 4.0], [1.0, 2.0]])
        );
    }
}
