mod ops;

use std::{
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

use crate::{
    approx::{ApproxEq, Tolerance},
    error::{LinalgError, Result},
    traits::{Element, Float, One, Zero},
    vec4, Mat3, Mat4, Matrix, Vec3, Vector, WritableMatrix, XYZW,
};

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// Unit-length quaternions ("*versors*") are commonly used to represent rotations in 3D space.
/// `q` and `-q` represent the same rotation.
///
/// Quaternions are represented similar to a 4-dimensional vector, with an `x`, `y`, `z` and `w`
/// component, in that order in memory.
///
/// # Examples
///
/// ```
/// # use tessera_linalg::*;
/// use std::f64::consts::FRAC_PI_2;
///
/// let q = Quat::from_rotation_z(FRAC_PI_2);
/// assert_approx_eq!(q.rotate_vector(Vec3d::X), Vec3d::Y).abs(1e-12);
/// assert_approx_eq!(q.to_matrix3() * Vec3d::X, Vec3d::Y).abs(1e-12);
/// ```
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

/// A quaternion with [`f32`] components.
pub type Quatf = Quat<f32>;
/// A quaternion with [`f64`] components.
pub type Quatd = Quat<f64>;

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity.
    ///
    /// This is a unit quaternion that will not change a vector it is multiplied with.
    pub const IDENTITY: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    };
}

impl<T> Quat<T> {
    /// Creates a quaternion from a 4-dimensional [`Vector`].
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the `i`, `j`, and `k` imaginary parts, while
    /// the `w` component corresponds to the real number part of the quaternion.
    pub const fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    pub const fn from_components(x: T, y: T, z: T, w: T) -> Self {
        Self {
            vec: vec4(x, y, z, w),
        }
    }

    /// Returns the components as a vector ordered `x, y, z, w`.
    pub fn into_vec(self) -> Vector<T, 4> {
        self.vec
    }
}

impl<T: Float> Quat<T> {
    /// Creates a rotation of `radians` around `axis`.
    ///
    /// `axis` does not have to be normalized. A zero axis yields [`Quat::IDENTITY`].
    pub fn from_axis_angle(axis: Vec3<T>, radians: T) -> Self {
        let axis = axis.normalize();
        if axis == Vec3::ZERO {
            log::trace!("rotation around the zero axis, using identity");
            return Self::IDENTITY;
        }
        let (sin, cos) = (radians * T::ONE_HALF).sin_cos();
        Self::from_vec(axis.scale(sin).extend(cos))
    }

    pub fn from_rotation_x(radians: T) -> Self {
        let (sin, cos) = (radians * T::ONE_HALF).sin_cos();
        Self::from_components(sin, T::ZERO, T::ZERO, cos)
    }

    pub fn from_rotation_y(radians: T) -> Self {
        let (sin, cos) = (radians * T::ONE_HALF).sin_cos();
        Self::from_components(T::ZERO, sin, T::ZERO, cos)
    }

    pub fn from_rotation_z(radians: T) -> Self {
        let (sin, cos) = (radians * T::ONE_HALF).sin_cos();
        Self::from_components(T::ZERO, T::ZERO, sin, cos)
    }

    /// Returns the squared length of this quaternion.
    pub fn magnitude_squared(&self) -> T {
        self.vec.magnitude_squared()
    }

    /// Returns the length of this quaternion.
    ///
    /// If the length is not equal to one, multiplying a vector with this quaternion will scale the
    /// vector in addition to rotating it.
    #[doc(alias = "norm", alias = "length")]
    pub fn magnitude(&self) -> T {
        self.vec.magnitude()
    }

    /// Returns a normalized copy of this quaternion (whose length equals one).
    ///
    /// The zero quaternion normalizes to the zero quaternion.
    pub fn normalize(self) -> Self {
        Self::from_vec(self.vec.normalize())
    }

    /// Negates the imaginary part.
    ///
    /// For unit quaternions, this is the inverse rotation.
    pub fn conjugate(self) -> Self {
        let [x, y, z, w] = self.vec.into_array();
        Self::from_components(-x, -y, -z, w)
    }

    /// Four-dimensional dot product.
    pub fn dot(self, other: Self) -> T {
        self.vec.dot(other.vec)
    }

    /// Hamilton product `self * other`, which applies `other` first and then `self`.
    pub fn multiply(self, other: Self) -> Self {
        self * other
    }

    /// Returns the multiplicative inverse `conjugate / |q|²`.
    ///
    /// Fails with [`LinalgError::NonInvertible`] for the zero quaternion.
    pub fn inverse(self) -> Result<Self> {
        let magnitude_squared = self.magnitude_squared();
        if !(magnitude_squared > T::ZERO) {
            log::debug!("quaternion is not invertible: {self:?}");
            return Err(LinalgError::NonInvertible {
                determinant: magnitude_squared.to_f64(),
            });
        }
        Ok(Self::from_vec(
            self.conjugate().vec.scale(T::ONE / magnitude_squared),
        ))
    }

    /// Rotates `v` by this quaternion, which must have unit length.
    pub fn rotate_vector(self, v: Vec3<T>) -> Vec3<T> {
        let [x, y, z, w] = self.vec.into_array();
        let imaginary = Vector::from([x, y, z]);
        let t = imaginary.cross(v).scale(T::TWO);
        v.add_scaled(t, w).add(imaginary.cross(t))
    }

    /// Returns the 3x3 rotation matrix of this quaternion, which must have unit length.
    pub fn to_matrix3(self) -> Mat3<T> {
        let [x, y, z, w] = self.vec.into_array();
        let two = T::TWO;
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);
        Matrix::from_rows([
            [T::ONE - two * (yy + zz), two * (xy - wz), two * (xz + wy)],
            [two * (xy + wz), T::ONE - two * (xx + zz), two * (yz - wx)],
            [two * (xz - wy), two * (yz + wx), T::ONE - two * (xx + yy)],
        ])
    }

    /// Returns the homogeneous 4x4 rotation matrix of this quaternion.
    pub fn to_matrix4(self) -> Mat4<T> {
        self.to_matrix3().extend()
    }

    /// Extracts the rotation from a 3x3 rotation matrix.
    ///
    /// Picks the numerically best of four branches depending on the trace and the largest
    /// diagonal element. The result is normalized.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera_linalg::*;
    /// let q = Quatd::from_rotation_y(2.0);
    /// assert!(Quat::from_matrix3(&q.to_matrix3()).same_rotation(q, Tolerance::absolute(1e-12)));
    /// ```
    pub fn from_matrix3(m: &Mat3<T>) -> Self {
        let at = |r: usize, c: usize| m[(r, c)];
        let trace = m.trace();
        let quarter = T::ONE_HALF * T::ONE_HALF;

        let (x, y, z, w) = if trace > T::ZERO {
            let s = (trace + T::ONE).sqrt() * T::TWO;
            (
                (at(2, 1) - at(1, 2)) / s,
                (at(0, 2) - at(2, 0)) / s,
                (at(1, 0) - at(0, 1)) / s,
                s * quarter,
            )
        } else if at(0, 0) > at(1, 1) && at(0, 0) > at(2, 2) {
            let s = (T::ONE + at(0, 0) - at(1, 1) - at(2, 2)).sqrt() * T::TWO;
            (
                s * quarter,
                (at(0, 1) + at(1, 0)) / s,
                (at(0, 2) + at(2, 0)) / s,
                (at(2, 1) - at(1, 2)) / s,
            )
        } else if at(1, 1) > at(2, 2) {
            let s = (T::ONE + at(1, 1) - at(0, 0) - at(2, 2)).sqrt() * T::TWO;
            (
                (at(0, 1) + at(1, 0)) / s,
                s * quarter,
                (at(1, 2) + at(2, 1)) / s,
                (at(0, 2) - at(2, 0)) / s,
            )
        } else {
            let s = (T::ONE + at(2, 2) - at(0, 0) - at(1, 1)).sqrt() * T::TWO;
            (
                (at(0, 2) + at(2, 0)) / s,
                (at(1, 2) + at(2, 1)) / s,
                s * quarter,
                (at(1, 0) - at(0, 1)) / s,
            )
        };

        Self::from_components(x, y, z, w).normalize()
    }

    /// Extracts the rotation from the upper left 3x3 part of a 4x4 matrix.
    pub fn from_matrix4(m: &Mat4<T>) -> Self {
        Self::from_matrix3(&m.upper_left())
    }

    /// Normalized linear interpolation along the shorter arc between `self` and `other`.
    pub fn nlerp(self, other: Self, alpha: T) -> Self {
        let other = if self.dot(other) < T::ZERO {
            -other
        } else {
            other
        };
        Self::from_vec(self.vec.interpolate_linear(other.vec, alpha)).normalize()
    }

    /// Per-component approximate comparison.
    pub fn almost_equal(self, other: Self, tolerance: Tolerance<T>) -> bool {
        self.almost_eq(&other, tolerance)
    }

    /// Returns whether `self` and `other` represent the same rotation, that is whether `other`
    /// or `-other` is approximately equal to `self`.
    pub fn same_rotation(self, other: Self, tolerance: Tolerance<T>) -> bool {
        self.almost_equal(other, tolerance) || self.almost_equal(-other, tolerance)
    }
}

/// Writes the 3x3 rotation matrix of `q` into `out`.
pub fn make_rotation_matrix3<T, M>(q: Quat<T>, out: &mut M) -> Result<()>
where
    T: Float,
    M: WritableMatrix<T, 3> + ?Sized,
{
    out.set_all(q.to_matrix3())
}

/// Writes the 4x4 rotation matrix of `q` into `out`.
pub fn make_rotation_matrix4<T, M>(q: Quat<T>, out: &mut M) -> Result<()>
where
    T: Float,
    M: WritableMatrix<T, 4> + ?Sized,
{
    out.set_all(q.to_matrix4())
}

impl<T> Deref for Quat<T> {
    type Target = XYZW<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.vec
    }
}

impl<T> DerefMut for Quat<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.vec
    }
}

impl<T: Zero + One> Default for Quat<T> {
    /// Returns [`Quat::IDENTITY`].
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: Element> Hash for Quat<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.vec.hash(state);
    }
}

impl<T> From<Vector<T, 4>> for Quat<T> {
    fn from(vec: Vector<T, 4>) -> Self {
        Self::from_vec(vec)
    }
}

impl<T> From<Quat<T>> for Vector<T, 4> {
    fn from(q: Quat<T>) -> Self {
        q.vec
    }
}
