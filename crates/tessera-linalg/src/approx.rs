//! Approximate equality.
//!
//! Value equality (`==`) on vectors and matrices is exact. The algebra and the tests compare
//! floating-point results through [`ApproxEq`] instead, configured with a [`Tolerance`].

mod impls;

use std::{fmt, panic::Location};

use crate::traits::Zero;

/// Types that can be compared for *approximate equality*.
///
/// Compound types implementing this trait are considered *equal* if all of their elements are.
///
/// For more information on the subtleties of approximate floating-point number comparison, see:
/// <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Scalar type of the tolerances ([`f32`] or [`f64`]).
    type Tolerance: DefaultTolerances + Copy;

    /// Passes if the absolute difference is at most `abs_tolerance`.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: Self::Tolerance) -> bool;

    /// Passes if the absolute difference is at most the larger magnitude times `rel_tolerance`.
    fn rel_diff_eq(&self, other: &Rhs, rel_tolerance: Self::Tolerance) -> bool;

    /// Passes if there are at most `ulps_tolerance` representable values between the two.
    ///
    /// `NaN` is never equal to anything. `-0.0` and `+0.0` are equal, other values with differing
    /// signs are not.
    fn ulps_diff_eq(&self, other: &Rhs, ulps_tolerance: u32) -> bool;

    /// Per-element comparison that passes an element if *either* the absolute or the relative
    /// check of `tolerance` passes. Every element has to pass.
    fn almost_eq(&self, other: &Rhs, tolerance: Tolerance<Self::Tolerance>) -> bool;
}

/// Default tolerances of a scalar type.
pub trait DefaultTolerances {
    /// Default tolerance for *absolute comparisons* via [`ApproxEq::abs_diff_eq`].
    const DEFAULT_ABS_TOLERANCE: Self;
    /// Default tolerance for *relative comparisons* via [`ApproxEq::rel_diff_eq`].
    const DEFAULT_REL_TOLERANCE: Self;
    /// Default tolerance for *ULPS comparisons* via [`ApproxEq::ulps_diff_eq`].
    const DEFAULT_ULPS_TOLERANCE: u32;
}

impl DefaultTolerances for f32 {
    const DEFAULT_ABS_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_ULPS_TOLERANCE: u32 = 4;
}

impl DefaultTolerances for f64 {
    const DEFAULT_ABS_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_ULPS_TOLERANCE: u32 = 4;
}

/// Absolute and relative tolerance used by [`ApproxEq::almost_eq`].
///
/// # Examples
///
/// ```
/// # use tessera_linalg::*;
/// let tolerance = Tolerance::new(1e-3f32, 1e-6);
/// assert!(tolerance.accepts(&vec2(1.0f32, 0.0), &vec2(1.0, 0.0005)));
/// assert!(!tolerance.accepts(&vec2(1.0f32, 0.0), &vec2(1.0, 0.002)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance<T> {
    /// Maximum absolute difference.
    pub abs: T,
    /// Maximum difference relative to the larger of the two magnitudes.
    pub rel: T,
}

impl<T> Tolerance<T> {
    pub const fn new(abs: T, rel: T) -> Self {
        Self { abs, rel }
    }

    /// Compares `a` and `b` element-wise with this tolerance.
    pub fn accepts<V>(&self, a: &V, b: &V) -> bool
    where
        V: ApproxEq<Tolerance = T> + ?Sized,
        T: DefaultTolerances + Copy,
    {
        a.almost_eq(b, *self)
    }
}

impl<T: Zero> Tolerance<T> {
    /// A tolerance that only allows an absolute difference of `abs`.
    ///
    /// The relative bound is zero, so values further apart than `abs` are never accepted, no
    /// matter how large they are.
    pub const fn absolute(abs: T) -> Self {
        Self { abs, rel: T::ZERO }
    }
}

impl<T: DefaultTolerances> Default for Tolerance<T> {
    fn default() -> Self {
        Self {
            abs: T::DEFAULT_ABS_TOLERANCE,
            rel: T::DEFAULT_REL_TOLERANCE,
        }
    }
}

/// Assertion guard returned by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// The assertion is checked when the guard is dropped. [`Asserter::abs`], [`Asserter::rel`] and
/// [`Asserter::ulps`] select the comparisons to run; the values are equal if *any* selected
/// comparison considers them equal. Without a selection, [`ApproxEq::almost_eq`] runs with the
/// default [`Tolerance`].
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    abs: Option<T::Tolerance>,
    rel: Option<T::Tolerance>,
    ulps: Option<u32>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            msg,
            abs: None,
            rel: None,
            ulps: None,
        }
    }

    /// Compare the absolute difference against `abs`.
    pub fn abs(&mut self, abs: T::Tolerance) -> &mut Self {
        self.abs = Some(abs);
        self
    }

    /// Compare the difference relative to the larger magnitude against `rel`.
    pub fn rel(&mut self, rel: T::Tolerance) -> &mut Self {
        self.rel = Some(rel);
        self
    }

    /// Compare the number of representable values between the two against `ulps`.
    pub fn ulps(&mut self, ulps: u32) -> &mut Self {
        self.ulps = Some(ulps);
        self
    }

    fn equal(&self) -> bool {
        if self.abs.is_none() && self.rel.is_none() && self.ulps.is_none() {
            return self.left.almost_eq(self.right, Tolerance::default());
        }

        self.abs.is_some_and(|abs| self.left.abs_diff_eq(self.right, abs))
            || self.rel.is_some_and(|rel| self.left.rel_diff_eq(self.right, rel))
            || self
                .ulps
                .is_some_and(|ulps| self.left.ulps_diff_eq(self.right, ulps))
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    // `#[track_caller]` has no effect on destructors, so the location is captured in `new`.
    fn drop(&mut self) {
        let equal = self.equal();
        let failed = match self.kind {
            AssertionKind::Eq => !equal,
            AssertionKind::Ne => equal,
        };
        if failed {
            assert_failed(self.left, self.right, self.kind, self.location, self.msg);
        }
    }
}

fn assert_failed(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    args: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "==",
        AssertionKind::Ne => "!=",
    };
    match args {
        Some(args) => panic!(
            "assertion `left {op} right` failed at {location}: {args}\n  left: {left:?}\n right: {right:?}"
        ),
        None => panic!(
            "assertion `left {op} right` failed at {location}\n  left: {left:?}\n right: {right:?}"
        ),
    }
}

#[doc(hidden)]
#[derive(Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Asserts that two expressions are approximately equal (using [`ApproxEq`]).
///
/// Returns an [`Asserter`] that can select the comparison and its tolerance.
///
/// # Examples
///
/// ```
/// # use tessera_linalg::*;
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
/// assert_approx_eq!(100.0, 99.0).abs(1.0);
/// assert_approx_eq!(100.0, 99.0).rel(0.01);
/// assert_approx_eq!(1.0, 1.0 + f64::EPSILON).ulps(1);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// Asserts that two expressions are *not* approximately equal (using [`ApproxEq`]).
///
/// # Examples
///
/// ```
/// # use tessera_linalg::*;
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// assert_approx_ne!(1.0, 1.0 + 2.0 * f64::EPSILON).ulps(1);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::Tolerance;

    #[test]
    fn absolute_tolerance_ignores_magnitude() {
        let a = 1e20f64;
        let b = f64::from_bits(a.to_bits() + 1);
        assert!(!Tolerance::absolute(0.5).accepts(&a, &b));
        assert!(Tolerance::absolute(1e5).accepts(&a, &b));
        // The default relative bound accepts neighbouring values.
        assert!(Tolerance::new(0.5, f64::EPSILON).accepts(&a, &b));
        assert!(Tolerance::absolute(0.0).accepts(&a, &a));
    }

    #[test]
    #[should_panic(expected = "assertion `left != right` failed")]
    fn fail_ne() {
        assert_approx_ne!(1.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn fail_eq() {
        assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    #[should_panic(expected = "determinant drifted")]
    fn assertion_message() {
        assert_approx_eq!(1.0, 2.0, "determinant drifted");
    }

    #[test]
    fn abs_or_rel() {
        // Small values pass the absolute check, large ones the relative check.
        let tolerance = Tolerance::new(1e-3f64, 1e-6);
        assert!(tolerance.accepts(&0.0f64, &0.0009));
        assert!(!tolerance.accepts(&0.0f64, &0.002));
        assert!(tolerance.accepts(&1e6f64, &(1e6 + 0.5)));
        assert!(!tolerance.accepts(&1e6f64, &(1e6 + 5.0)));
    }

    #[test]
    fn every_element_must_pass() {
        let tolerance = Tolerance::new(0.1f32, 0.0);
        assert!(tolerance.accepts(&[1.0f32, 2.0][..], &[1.05f32, 2.05][..]));
        assert!(!tolerance.accepts(&[1.0f32, 2.0][..], &[1.05f32, 2.5][..]));
        assert!(!tolerance.accepts(&[1.0f32][..], &[1.0f32, 2.0][..]));
    }

    #[test]
    fn nan_and_inf() {
        assert_approx_ne!(f32::NAN, f32::NAN).abs(1.0);
        assert_approx_ne!(f32::NAN, f32::NAN).rel(1.0);
        assert_approx_ne!(f32::NAN, f32::NAN).ulps(100);
        assert_approx_eq!(f64::INFINITY, f64::INFINITY).abs(0.0);
        assert_approx_ne!(f64::INFINITY, f64::NEG_INFINITY).rel(10.0);
        assert_approx_ne!(f64::MAX, f64::INFINITY).abs(10000.0);
        assert_approx_eq!(f64::MAX, f64::INFINITY).ulps(1);
    }

    #[test]
    fn signs() {
        assert_approx_ne!(1.0, -1.0);
        assert_approx_eq!(1.0, -1.0).abs(2.0);
        assert_approx_eq!(-1.0, -1.0).rel(0.0);
        assert_approx_eq!(0.0, -0.0).ulps(0);
    }
}
