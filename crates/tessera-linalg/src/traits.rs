//! Element-type vocabulary used by the generic kernels.

use std::{fmt, ops};

use crate::approx::{ApproxEq, DefaultTolerances};

/// Types that support the trigonometric functions.
pub trait Trig: Sized {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    fn sin_cos(self) -> (Self, Self);
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support computing their absolute value.
pub trait Abs {
    fn abs(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of [`f32::min`] and [`f32::max`] ([`f64::min`]
/// and [`f64::max`] respectively). Integer types implement it in terms of [`Ord::min`] and
/// [`Ord::max`].
pub trait MinMax: Sized + Copy {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;

    /// Restricts `self` to the range spanned by `a` and `b`.
    ///
    /// Unlike [`f32::clamp`] and [`Ord::clamp`], the bounds may be passed in either order.
    fn clamp(self, a: Self, b: Self) -> Self {
        let (lo, hi) = (a.min(b), a.max(b));
        self.max(lo).min(hi)
    }
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + PartialOrd
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + PartialOrd
        + Copy
{
}

/// Scalar types that can be stored in vectors and matrices.
///
/// Implemented for [`f32`], [`f64`], [`i32`] and [`i64`]. The [`bytemuck::Pod`] bound guarantees
/// that every element has a defined in-memory representation, which is what the native views of
/// buffer-backed values expose.
pub trait Element: Number + MinMax + Abs + bytemuck::Pod + fmt::Debug + fmt::Display {
    /// Returns the bits fed into a [`Hasher`][std::hash::Hasher] for this value.
    ///
    /// Values that compare equal produce the same bits (`-0.0` and `+0.0` hash identically).
    fn hash_bits(self) -> u64;
}

/// Floating-point element types.
pub trait Float: Element + Sqrt + Trig + ApproxEq<Tolerance = Self> + DefaultTolerances {
    const TWO: Self;
    const ONE_HALF: Self;
    const EPSILON: Self;
    /// Smallest positive normal value.
    const MIN_POSITIVE: Self;

    /// Relative tolerance below which a determinant is treated as zero.
    ///
    /// A matrix `A` with columns `a_0, ..., a_(N-1)` is considered non-invertible when
    /// `|det(A)| <= NON_INVERTIBLE_TOLERANCE * ‖a_0‖ * ... * ‖a_(N-1)‖`. The right-hand side is
    /// Hadamard's upper bound on `|det(A)|`, so the test does not depend on the scale of any
    /// column.
    const NON_INVERTIBLE_TOLERANCE: Self;

    fn from_f64(value: f64) -> Self;
    fn to_f64(self) -> f64;
}

macro_rules! int_element {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }

            impl One for $types {
                const ONE: Self = 1;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }

            impl Abs for $types {
                /// The minimum value has no positive counterpart and maps to itself.
                fn abs(self) -> Self {
                    self.wrapping_abs()
                }
            }

            impl Element for $types {
                fn hash_bits(self) -> u64 {
                    self as u64
                }
            }
        )+
    };
}
int_element!(i32, i64);

macro_rules! float_element {
    ($($types:ident: $tolerance:expr),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }

            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    self.min(other)
                }

                fn max(self, other: Self) -> Self {
                    self.max(other)
                }
            }

            impl Abs for $types {
                fn abs(self) -> Self {
                    self.abs()
                }
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Trig for $types {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn tan(self) -> Self {
                    self.tan()
                }

                fn asin(self) -> Self {
                    self.asin()
                }

                fn acos(self) -> Self {
                    self.acos()
                }

                fn atan(self) -> Self {
                    self.atan()
                }

                fn atan2(self, other: Self) -> Self {
                    self.atan2(other)
                }

                fn sin_cos(self) -> (Self, Self) {
                    self.sin_cos()
                }
            }

            impl Element for $types {
                fn hash_bits(self) -> u64 {
                    // `-0.0 == 0.0`, so both must hash the same.
                    if self == 0.0 {
                        0
                    } else {
                        self.to_bits().into()
                    }
                }
            }

            impl Float for $types {
                const TWO: Self = 2.0;
                const ONE_HALF: Self = 0.5;
                const EPSILON: Self = $types::EPSILON;
                const MIN_POSITIVE: Self = $types::MIN_POSITIVE;
                const NON_INVERTIBLE_TOLERANCE: Self = $tolerance;

                fn from_f64(value: f64) -> Self {
                    value as $types
                }

                fn to_f64(self) -> f64 {
                    self.into()
                }
            }
        )+
    };
}
float_element!(f32: 1e-6, f64: 1e-12);

#[cfg(test)]
mod tests {
    use std::hash::{BuildHasher, RandomState};

    use super::*;

    #[test]
    fn clamp_ignores_bound_order() {
        assert_eq!(MinMax::clamp(5, 0, 3), 3);
        assert_eq!(MinMax::clamp(5, 3, 0), 3);
        assert_eq!(MinMax::clamp(-5i64, 3, 0), 0);
        assert_eq!(MinMax::clamp(0.5f32, 1.0, -1.0), 0.5);
        assert_eq!(MinMax::clamp(-2.0f64, 1.0, -1.0), -1.0);
    }

    #[test]
    fn signed_zero_hashes_like_zero() {
        let state = RandomState::new();
        assert_eq!(0.0f32.hash_bits(), (-0.0f32).hash_bits());
        assert_eq!(
            state.hash_one(0.0f64.hash_bits()),
            state.hash_one((-0.0f64).hash_bits())
        );
        assert_ne!(1.0f64.hash_bits(), (-1.0f64).hash_bits());
    }

    #[test]
    fn float_conversions() {
        assert_eq!(f32::from_f64(0.5), 0.5);
        assert_eq!(0.25f32.to_f64(), 0.25);
        assert_eq!(<f64 as Float>::EPSILON, f64::EPSILON);
        assert_eq!(<f32 as Float>::MIN_POSITIVE, f32::MIN_POSITIVE);
    }

    #[test]
    fn integer_abs_wraps_at_minimum() {
        assert_eq!(Abs::abs(-7i32), 7);
        assert_eq!(Abs::abs(i32::MIN), i32::MIN);
        assert_eq!(Abs::abs(i64::MIN + 1), i64::MAX);
    }
}
