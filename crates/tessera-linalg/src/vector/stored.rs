//! Vectors whose elements live in a [`Storage`].

use std::cell::Cell;

use crate::{
    error::{LinalgError, Result},
    storage::{Block, Storage},
    traits::{Element, Float},
    Vector,
};

/// Read access to the elements of an `N`-element vector.
pub trait ReadableVector<T: Element, const N: usize> {
    /// Reads the element at `index`.
    fn get(&self, index: usize) -> Result<T>;

    /// Checks that all `N` elements can be accessed.
    fn check_bounds(&self) -> Result<()>;

    /// Copies all elements into a [`Vector`].
    fn to_vector(&self) -> Result<Vector<T, N>>;

    fn x(&self) -> Result<T> {
        self.get(0)
    }

    fn y(&self) -> Result<T> {
        self.get(1)
    }

    fn z(&self) -> Result<T> {
        self.get(2)
    }

    fn w(&self) -> Result<T> {
        self.get(3)
    }
}

/// Write access to the elements of an `N`-element vector.
///
/// The in-place operations read the vector, compute the result with the matching [`Vector`]
/// method and write all elements back with [`WritableVector::set_all`].
pub trait WritableVector<T: Element, const N: usize>: ReadableVector<T, N> {
    /// Writes `value` to the element at `index`.
    fn set(&mut self, index: usize, value: T) -> Result<()>;

    /// Writes every element without checking bounds.
    ///
    /// # Safety
    ///
    /// [`ReadableVector::check_bounds`] must succeed.
    unsafe fn set_all_unchecked(&mut self, value: Vector<T, N>);

    /// Writes every element.
    ///
    /// If any element is out of bounds, an error is returned and nothing is written.
    fn set_all(&mut self, value: Vector<T, N>) -> Result<()> {
        self.check_bounds()?;
        // SAFETY: bounds were checked above.
        unsafe { self.set_all_unchecked(value) };
        Ok(())
    }

    fn set_x(&mut self, value: T) -> Result<()> {
        self.set(0, value)
    }

    fn set_y(&mut self, value: T) -> Result<()> {
        self.set(1, value)
    }

    fn set_z(&mut self, value: T) -> Result<()> {
        self.set(2, value)
    }

    fn set_w(&mut self, value: T) -> Result<()> {
        self.set(3, value)
    }

    fn add_in_place(&mut self, other: Vector<T, N>) -> Result<()> {
        let v = self.to_vector()?;
        self.set_all(v.add(other))
    }

    fn subtract_in_place(&mut self, other: Vector<T, N>) -> Result<()> {
        let v = self.to_vector()?;
        self.set_all(v.subtract(other))
    }

    fn scale_in_place(&mut self, factor: T) -> Result<()> {
        let v = self.to_vector()?;
        self.set_all(v.scale(factor))
    }

    fn add_scaled_in_place(&mut self, other: Vector<T, N>, factor: T) -> Result<()> {
        let v = self.to_vector()?;
        self.set_all(v.add_scaled(other, factor))
    }

    fn absolute_in_place(&mut self) -> Result<()> {
        let v = self.to_vector()?;
        self.set_all(v.absolute())
    }

    fn clamp_in_place(&mut self, a: T, b: T) -> Result<()> {
        let v = self.to_vector()?;
        self.set_all(v.clamp(a, b))
    }

    fn normalize_in_place(&mut self) -> Result<()>
    where
        T: Float,
    {
        let v = self.to_vector()?;
        self.set_all(v.normalize())
    }

    fn interpolate_linear_in_place(&mut self, other: Vector<T, N>, alpha: T) -> Result<()>
    where
        T: Float,
    {
        let v = self.to_vector()?;
        self.set_all(v.interpolate_linear(other, alpha))
    }
}

impl<T: Element, const N: usize> ReadableVector<T, N> for Vector<T, N> {
    fn get(&self, index: usize) -> Result<T> {
        self.as_slice()
            .get(index)
            .copied()
            .ok_or(LinalgError::IndexOutOfRange {
                index,
                count: N,
                physical: Some(index),
                capacity: N,
            })
    }

    fn check_bounds(&self) -> Result<()> {
        Ok(())
    }

    fn to_vector(&self) -> Result<Vector<T, N>> {
        Ok(*self)
    }
}

/// An `N`-element vector stored in a [`Block`] at some offset.
///
/// See [`ArrayVector`] and [`BufferVector`] for the two storage strategies.
#[derive(Debug, Clone, Copy)]
pub struct StoredVector<B, const N: usize> {
    storage: Storage<B>,
}

/// A vector that owns its elements.
pub type ArrayVector<T, const N: usize> = StoredVector<[T; N], N>;

/// A vector viewing `N` elements of a shared buffer.
///
/// Several [`BufferVector`]s (and [`BufferMatrix`][crate::BufferMatrix]es) may view the same
/// cells; writes through one are visible through all others.
pub type BufferVector<'a, T, const N: usize> = StoredVector<&'a [Cell<T>], N>;

impl<B: Block, const N: usize> StoredVector<B, N> {
    /// Creates a vector whose element 0 is at slot `offset` of `block`.
    ///
    /// Out-of-range offsets are accepted here and reported by every element access.
    pub fn from_block(block: B, offset: usize) -> Self {
        Self {
            storage: Storage::new(block, offset, N),
        }
    }

    pub fn storage(&self) -> &Storage<B> {
        &self.storage
    }

    /// Serializes the elements in host-native byte order.
    pub fn native_bytes(&self) -> Result<Vec<u8>> {
        self.storage.native_bytes()
    }
}

impl<T: Element, const N: usize> ArrayVector<T, N> {
    pub fn new(value: Vector<T, N>) -> Self {
        Self::from_block(value.into_array(), 0)
    }
}

impl<T: Element, const N: usize> Default for ArrayVector<T, N>
where
    Vector<T, N>: Default,
{
    fn default() -> Self {
        Self::new(Vector::default())
    }
}

impl<T: Element, const N: usize> From<Vector<T, N>> for ArrayVector<T, N> {
    fn from(value: Vector<T, N>) -> Self {
        Self::new(value)
    }
}

impl<'a, T: Element, const N: usize> BufferVector<'a, T, N> {
    /// Creates a view of the `N` cells starting at `offset`.
    pub fn new(cells: &'a [Cell<T>], offset: usize) -> Self {
        Self::from_block(cells, offset)
    }

    /// Returns the cells holding the elements, starting with element 0.
    pub fn native_view(&self) -> Result<&'a [Cell<T>]> {
        self.storage.native_view()
    }
}

impl<B: Block, const N: usize> ReadableVector<B::Element, N> for StoredVector<B, N> {
    fn get(&self, index: usize) -> Result<B::Element> {
        self.storage.read(index)
    }

    fn check_bounds(&self) -> Result<()> {
        self.storage.check_bounds()
    }

    fn to_vector(&self) -> Result<Vector<B::Element, N>> {
        self.storage.check_bounds()?;
        // SAFETY: bounds were checked above.
        Ok(Vector::from_fn(|i| unsafe { self.storage.read_unchecked(i) }))
    }
}

impl<B: Block, const N: usize> WritableVector<B::Element, N> for StoredVector<B, N> {
    fn set(&mut self, index: usize, value: B::Element) -> Result<()> {
        self.storage.write(index, value)
    }

    unsafe fn set_all_unchecked(&mut self, value: Vector<B::Element, N>) {
        for (i, elem) in value.into_array().into_iter().enumerate() {
            self.storage.write_unchecked(i, elem);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{shared_cells, vector::*};

    #[test]
    fn snapshot_is_readable() {
        let v = vec3(1, 2, 3);
        assert_eq!(v.get(2).unwrap(), 3);
        assert_eq!(v.z().unwrap(), 3);
        assert!(v.get(3).unwrap_err().is_index_out_of_range());
        assert!(vec2(1.0, 2.0).z().is_err());
    }

    #[test]
    fn array_vector() {
        let mut v = ArrayVector::<f64, 4>::default();
        assert!(v.storage().owns_memory());
        assert_eq!(v.to_vector().unwrap(), Vec4d::W);

        v.set_x(2.0).unwrap();
        v.set_y(-3.0).unwrap();
        assert_eq!(v.to_vector().unwrap(), vec4(2.0, -3.0, 0.0, 1.0));

        v.absolute_in_place().unwrap();
        v.scale_in_place(2.0).unwrap();
        assert_eq!(v.to_vector().unwrap(), vec4(4.0, 6.0, 0.0, 2.0));

        v.add_scaled_in_place(Vec4d::Z, 3.0).unwrap();
        v.subtract_in_place(Vec4d::W).unwrap();
        v.add_in_place(Vec4d::X).unwrap();
        assert_eq!(v.to_vector().unwrap(), vec4(5.0, 6.0, 3.0, 1.0));

        v.clamp_in_place(5.5, 2.0).unwrap();
        assert_eq!(v.to_vector().unwrap(), vec4(5.0, 5.5, 3.0, 2.0));

        let mut v = ArrayVector::new(vec2(3.0f32, 4.0));
        v.normalize_in_place().unwrap();
        assert_eq!(v.to_vector().unwrap(), vec2(0.6, 0.8));
        v.interpolate_linear_in_place(Vec2f::ZERO, 1.0).unwrap();
        assert_eq!(v.to_vector().unwrap(), Vec2f::ZERO);

        let mut v = ArrayVector::<i32, 2>::default();
        assert!(v.get(2).is_err());
        assert!(v.set_z(1).is_err());
        assert_eq!(v.to_vector().unwrap(), Vec2i::ZERO);
    }

    #[test]
    fn buffer_vectors_alias() {
        let mut data = [0i64; 6];
        let cells = shared_cells(&mut data);
        let mut a = BufferVector::<i64, 3>::new(cells, 3);
        let b = BufferVector::<i64, 3>::new(cells, 3);
        assert!(!a.storage().owns_memory());

        a.set_all(vec3(7, 8, 9)).unwrap();
        assert_eq!(b.to_vector().unwrap(), vec3(7, 8, 9));
        assert_eq!(b.native_view().unwrap()[2].get(), 9);
        assert_eq!(data, [0, 0, 0, 7, 8, 9]);
    }

    #[test]
    fn set_all_is_atomic() {
        let mut data = [1.0f32; 5];
        let cells = shared_cells(&mut data);
        let mut v = BufferVector::<f32, 3>::new(cells, 3);

        assert!(v.set_all(Vec3f::ZERO).is_err());
        assert!(v.add_in_place(Vec3f::X).is_err());
        assert!(v.to_vector().is_err());
        assert_eq!(cells[3].get(), 1.0);
        assert_eq!(cells[4].get(), 1.0);

        // Elements that are in bounds can still be accessed individually.
        v.set(1, 5.0).unwrap();
        assert_eq!(v.get(1).unwrap(), 5.0);
        assert!(v.set(2, 5.0).is_err());
    }

    #[test]
    fn native_bytes() {
        let v = ArrayVector::new(vec2(1i32, -1));
        let bytes = v.native_bytes().unwrap();
        assert_eq!(bytes.len(), 8);
        assert_eq!(bytes, bytemuck::bytes_of(&vec2(1i32, -1)));
    }
}
