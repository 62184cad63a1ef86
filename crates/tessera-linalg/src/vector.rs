use std::{
    array, fmt,
    hash::{Hash, Hasher},
};

use crate::{
    approx::{ApproxEq, Tolerance},
    traits::{Element, Float, MinMax, One, Zero},
};

mod ops;
mod stored;
mod view;

pub use stored::*;
pub use view::*;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 2-dimensional vector with [`i32`] elements.
pub type Vec2i = Vec2<i32>;
/// A 2-dimensional vector with [`i64`] elements.
pub type Vec2l = Vec2<i64>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// A 3-dimensional vector with [`i32`] elements.
pub type Vec3i = Vec3<i32>;
/// A 3-dimensional vector with [`i64`] elements.
pub type Vec3l = Vec3<i64>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;
/// A 4-dimensional vector with [`i32`] elements.
pub type Vec4i = Vec4<i32>;
/// A 4-dimensional vector with [`i64`] elements.
pub type Vec4l = Vec4<i64>;

/// An `N`-element column vector storing elements of type `T`.
///
/// [`Vector`] is an immutable-by-convention value: every operation returns a new vector. Vectors
/// whose elements live in an owned array or in a shared buffer are represented by
/// [`StoredVector`], which implements [`WritableVector`].
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - [`Vector::ZERO`] is a vector containing all-zeroes, and `Vector::X`, `Vector::Y`, `Vector::Z`
///   and `Vector::W` are the unit vectors along each axis.
/// - [`Default`] is the zero vector for 2 and 3 dimensions, and `(0, 0, 0, 1)` (the homogeneous
///   origin) for 4 dimensions.
///
/// # Element Access
///
/// - Elements can be accessed as fields `x`, `y`, `z`, and `w`.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`] expose the underlying
///   elements.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation when
///   the element type `T` also allows this.
///
/// # Equality and Hashing
///
/// `==` compares elements exactly. [`Hash`] is consistent with it, so floating-point vectors hash
/// `-0.0` like `+0.0`. Use [`Vector::almost_equal`] or [`ApproxEq`] for approximate comparisons.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera_linalg::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera_linalg::*;
    /// let v = Vector::from_fn(|i| i as i32 + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera_linalg::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut other = other.0.into_iter();
        Vector(self.0.map(|a| match other.next() {
            Some(b) => (a, b),
            // Both arrays have exactly `N` elements.
            None => unreachable!(),
        }))
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).into_array(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }
}

impl<T: Element, const N: usize> Vector<T, N> {
    /// Component-wise sum of `self` and `other`. Equivalent to `self + other`.
    #[inline]
    pub fn add(self, other: Self) -> Self {
        self.zip(other).map(|(a, b)| a + b)
    }

    /// Component-wise difference of `self` and `other`. Equivalent to `self - other`.
    #[inline]
    pub fn subtract(self, other: Self) -> Self {
        self.zip(other).map(|(a, b)| a - b)
    }

    /// Multiplies every component by `factor`. Equivalent to `self * factor`.
    #[inline]
    pub fn scale(self, factor: T) -> Self {
        self.map(|a| a * factor)
    }

    /// Computes `self + other * factor` component by component.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera_linalg::*;
    /// assert_eq!(vec2(1, 2).add_scaled(vec2(10, 20), 3), vec2(31, 62));
    /// ```
    #[inline]
    pub fn add_scaled(self, other: Self, factor: T) -> Self {
        self.zip(other).map(|(a, b)| a + b * factor)
    }

    /// Component-wise product of `self` and `other`. Equivalent to `self * other`.
    #[inline]
    pub fn component_mul(self, other: Self) -> Self {
        self.zip(other).map(|(a, b)| a * b)
    }

    /// Equivalent to `-self`.
    #[inline]
    pub fn negate(self) -> Self {
        self.map(T::neg)
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera_linalg::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot(self, other: Self) -> T {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared length of this [`Vector`], `self.dot(self)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera_linalg::*;
    /// assert_eq!(vec2(4, 0).magnitude_squared(), 16);
    /// ```
    #[inline]
    pub fn magnitude_squared(self) -> T {
        self.dot(self)
    }

    /// Per-component absolute value.
    ///
    /// Integer components equal to the type's minimum value have no positive counterpart and are
    /// returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera_linalg::*;
    /// assert_eq!(vec3(-1, 0, 2).absolute(), vec3(1, 0, 2));
    /// assert_eq!(vec2(i32::MIN, -1).absolute(), vec2(i32::MIN, 1));
    /// ```
    #[inline]
    pub fn absolute(self) -> Self {
        self.map(|a| a.abs())
    }

    /// Element-wise minimum between `self` and `other`.
    pub fn min(self, other: Self) -> Self {
        self.zip(other).map(|(a, b)| a.min(b))
    }

    /// Element-wise maximum between `self` and `other`.
    pub fn max(self, other: Self) -> Self {
        self.zip(other).map(|(a, b)| a.max(b))
    }

    /// Restricts every component to the range spanned by the scalars `a` and `b`.
    ///
    /// The bounds may be given in either order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera_linalg::*;
    /// let v = vec3(-5, 1, 5);
    /// assert_eq!(v.clamp(-2, 2), vec3(-2, 1, 2));
    /// assert_eq!(v.clamp(2, -2), vec3(-2, 1, 2));
    /// ```
    pub fn clamp(self, a: T, b: T) -> Self {
        self.map(|e| MinMax::clamp(e, a, b))
    }

    /// Restricts every component to the range spanned by the matching components of `a` and `b`.
    ///
    /// The bounds may be given in either order, and may differ in order per component.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera_linalg::*;
    /// let v = vec2(0.0, 10.0);
    /// assert_eq!(v.clamp_by_vector(vec2(1.0, 5.0), vec2(2.0, -5.0)), vec2(1.0, 5.0));
    /// ```
    pub fn clamp_by_vector(self, a: Self, b: Self) -> Self {
        Self::from_fn(|i| MinMax::clamp(self.0[i], a.0[i], b.0[i]))
    }

    /// Returns the smallest component.
    ///
    /// # Panics
    ///
    /// Panics if `N` is 0.
    pub fn min_component(self) -> T {
        self.0.into_iter().fold(self.0[0], MinMax::min)
    }

    /// Returns the largest component.
    ///
    /// # Panics
    ///
    /// Panics if `N` is 0.
    pub fn max_component(self) -> T {
        self.0.into_iter().fold(self.0[0], MinMax::max)
    }
}

impl<T: Float, const N: usize> Vector<T, N> {
    /// Returns the length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera_linalg::*;
    /// assert_eq!(vec2(3.0, 4.0).magnitude(), 5.0);
    /// ```
    ///
    /// Vectors whose squared length overflows or underflows are rescaled by their largest
    /// component first, so the result stays finite whenever the length itself is representable.
    pub fn magnitude(self) -> T {
        let squared = self.magnitude_squared();
        // `x - x` is zero only for finite `x`.
        if squared >= T::MIN_POSITIVE && squared - squared == T::ZERO {
            return squared.sqrt();
        }

        let scale = self.absolute().max_component();
        if !(scale > T::ZERO) || scale - scale != T::ZERO {
            // Zero, infinite or NaN.
            return scale;
        }
        self.map(|a| a / scale).magnitude_squared().sqrt() * scale
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// The zero vector normalizes to the zero vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera_linalg::*;
    /// assert_eq!(vec3(0.0, 0.0, 4.0).normalize(), vec3(0.0, 0.0, 1.0));
    /// assert_eq!(Vec3d::ZERO.normalize(), Vec3d::ZERO);
    /// ```
    pub fn normalize(self) -> Self {
        let magnitude = self.magnitude();
        if magnitude == T::ZERO {
            Self::ZERO
        } else {
            self.map(|a| a / magnitude)
        }
    }

    /// Linear interpolation `self * (1 - alpha) + other * alpha`.
    ///
    /// Returns exactly `self` for `alpha == 0` and exactly `other` for `alpha == 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera_linalg::*;
    /// let a = vec2(0.0, 10.0);
    /// let b = vec2(10.0, 20.0);
    /// assert_eq!(a.interpolate_linear(b, 0.25), vec2(2.5, 12.5));
    /// ```
    pub fn interpolate_linear(self, other: Self, alpha: T) -> Self {
        let beta = T::ONE - alpha;
        self.zip(other).map(|(a, b)| a * beta + b * alpha)
    }

    /// Euclidean distance between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Self) -> T {
        self.subtract(other).magnitude()
    }

    /// Squared Euclidean distance between `self` and `other`.
    #[inline]
    pub fn distance_squared(self, other: Self) -> T {
        self.subtract(other).magnitude_squared()
    }

    /// Returns the component of `self` that is parallel to `onto`.
    ///
    /// Projecting onto the zero vector yields the zero vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera_linalg::*;
    /// let v = vec3(2.0, 3.0, 0.0);
    /// assert_eq!(v.projection(vec3(5.0, 0.0, 0.0)), vec3(2.0, 0.0, 0.0));
    /// assert_eq!(v.projection(Vec3d::Z), Vec3d::ZERO);
    /// assert_eq!(v.projection(Vec3d::ZERO), Vec3d::ZERO);
    /// ```
    pub fn projection(self, onto: Self) -> Self {
        let denominator = onto.magnitude_squared();
        if denominator == T::ZERO {
            return Self::ZERO;
        }
        onto.scale(self.dot(onto) / denominator)
    }

    /// Computes the smallest positive angle between `self` and `other`, in radians.
    ///
    /// Both `self` and `other` must have non-zero length for the result to be meaningful.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera_linalg::*;
    /// use std::f32::consts::TAU;
    ///
    /// let a = Vec3f::Y;
    /// let b = Vec3f::X;
    /// assert_approx_eq!(a.angle_to(b), TAU / 4.0);
    /// assert_approx_eq!(a.angle_to(-a), TAU / 2.0);
    /// ```
    pub fn angle_to(self, other: Self) -> T {
        let cos = self.dot(other) / (self.magnitude() * other.magnitude());
        MinMax::clamp(cos, -T::ONE, T::ONE).acos()
    }

    /// Per-component approximate comparison: each component must pass the absolute or the
    /// relative check of `tolerance`.
    pub fn almost_equal(self, other: Self, tolerance: Tolerance<T>) -> bool {
        self.almost_eq(&other, tolerance)
    }
}

impl<T> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera_linalg::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        [x, y, value].into()
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.into_array();
        [x, y].into()
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera_linalg::*;
    /// let v = vec3(-1.0, 2.0, 3.5).extend(1.0);
    /// assert_eq!(v, vec4(-1.0, 2.0, 3.5, 1.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        [x, y, z, value].into()
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`. Its direction
    /// depends on the order of the arguments: swapping them will invert the direction of the
    /// resulting vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera_linalg::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// let z = Vec3f::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Element,
    {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    ///
    /// This drops the homogeneous coordinate without dividing by it.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.into_array();
        [x, y, z].into()
    }
}

/// Orthonormalizes three vectors with the Gram-Schmidt process.
///
/// The first output points in the direction of `v0`, the second lies in the plane of `v0` and
/// `v1`, and the three outputs are pairwise orthogonal unit vectors. Each projection is applied
/// twice to keep the result orthogonal in floating point.
///
/// Degenerate input does not fail. A zero `v0` is replaced with the X axis. If `v1` (or `v2`) has
/// no component outside of the span of the previous outputs, it is replaced with the axis least
/// aligned with the first output (or the cross product of the first two outputs).
///
/// # Examples
///
/// ```
/// # use tessera_linalg::*;
/// let [e0, e1, e2] = orthonormalize(vec3(2.0, 0.0, 0.0), vec3(1.0, 1.0, 0.0), vec3(5.0, 5.0, 5.0));
/// assert_approx_eq!(e0, Vec3d::X);
/// assert_approx_eq!(e1, Vec3d::Y);
/// assert_approx_eq!(e2, Vec3d::Z);
/// ```
pub fn orthonormalize<T: Float>(v0: Vec3<T>, v1: Vec3<T>, v2: Vec3<T>) -> [Vec3<T>; 3] {
    let e0 = reject(v0, &[]).unwrap_or_else(|| {
        log::trace!("orthonormalize: zero first vector {v0}, using the X axis");
        Vec3::X
    });
    let e1 = reject(v1, &[e0]).unwrap_or_else(|| {
        log::trace!("orthonormalize: {v1} is parallel to {e0}, using the least aligned axis");
        let axis = least_aligned_axis(e0);
        axis.add_scaled(e0, -axis.dot(e0)).normalize()
    });
    let e2 = reject(v2, &[e0, e1]).unwrap_or_else(|| {
        log::trace!("orthonormalize: {v2} is coplanar with {e0} and {e1}, using their cross product");
        e0.cross(e1)
    });
    [e0, e1, e2]
}

/// Removes the components of `v` along the unit vectors in `basis` and normalizes the rest.
///
/// Returns [`None`] if nothing meaningful is left.
fn reject<T: Float>(v: Vec3<T>, basis: &[Vec3<T>]) -> Option<Vec3<T>> {
    let mut rest = v;
    for _ in 0..2 {
        for &e in basis {
            rest = rest.add_scaled(e, -rest.dot(e));
        }
    }

    let magnitude = rest.magnitude();
    let threshold = v.magnitude() * T::EPSILON.sqrt();
    // Also rejects NaN.
    if magnitude > threshold {
        Some(rest.map(|a| a / magnitude))
    } else {
        None
    }
}

fn least_aligned_axis<T: Float>(v: Vec3<T>) -> Vec3<T> {
    let abs = v.absolute();
    let mut axis = 0;
    for i in 1..3 {
        if abs[i] < abs[axis] {
            axis = i;
        }
    }
    Vec3::from_fn(|i| if i == axis { T::ONE } else { T::ZERO })
}

impl<T: Element> Default for Vector<T, 2> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T: Element> Default for Vector<T, 3> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T: Element> Default for Vector<T, 4> {
    /// Returns the homogeneous origin `(0, 0, 0, 1)`.
    #[inline]
    fn default() -> Self {
        Self::W
    }
}

impl<T: Element, const N: usize> Hash for Vector<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for elem in self.0 {
            state.write_u64(elem.hash_bits());
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugViaDisplay<D>(D);
        impl<D: fmt::Display> fmt::Debug for DebugViaDisplay<D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(&DebugViaDisplay(elem));
        }
        tup.finish()
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}
