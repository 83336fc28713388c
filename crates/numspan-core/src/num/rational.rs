// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Exact rational numbers in canonical form.
//!
//! A [`Rational`] is stored as a pair of `i32` components. The denominator is
//! always positive, the numerator carries the sign, and the fraction is always
//! fully reduced. Because the representation is canonical, structural equality
//! and hashing coincide with numeric equality.
//!
//! All intermediate products and sums are evaluated in `i64`, reduced there,
//! and only then narrowed back to `i32`. A result that is still too large after
//! reduction is reported as [`MathError::Overflow`] instead of wrapping.
//! Comparison is always exact: the widened cross products of two `i32`
//! fractions cannot overflow.

use crate::error::{MathError, Result};
use crate::num::gcd::gcd;
use num_traits::{One, ToPrimitive, Zero};
use std::{
    cmp::Ordering,
    ops::{Add, Div, Mul, Neg, Sub},
};

/// An immutable fraction `p/q` with `q > 0` and `gcd(|p|, q) == 1`.
///
/// # Examples
///
/// ```rust
/// # use numspan_core::num::rational::Rational;
/// let half = Rational::new(2, 4).unwrap();
/// assert_eq!(half.numerator(), 1);
/// assert_eq!(half.denominator(), 2);
///
/// let negative = Rational::new(3, -6).unwrap();
/// assert_eq!(negative, Rational::new(-1, 2).unwrap());
/// assert_eq!(format!("{}", negative), "-1/2");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RationalRepr", into = "RationalRepr")
)]
pub struct Rational {
    p: i32,
    q: i32,
}

impl Rational {
    pub const NEGATIVE_ONE: Rational = Rational::from_integer(-1);
    pub const NEGATIVE_HALF: Rational = Rational { p: -1, q: 2 };
    pub const ZERO: Rational = Rational::from_integer(0);
    pub const HALF: Rational = Rational { p: 1, q: 2 };
    pub const ONE: Rational = Rational::from_integer(1);

    /// Creates the canonical form of `p/q`.
    ///
    /// The sign of the denominator migrates to the numerator and both
    /// components are divided by their greatest common divisor.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidArgument`] if `q == 0`, and
    /// [`MathError::Overflow`] if the canonical form does not fit in `i32`
    /// components. `i32::MIN` has no positive counterpart, so this happens
    /// e.g. for `Rational::new(i32::MIN, -1)` or `Rational::new(1, i32::MIN)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numspan_core::num::rational::Rational;
    /// assert!(Rational::new(1, 0).is_err());
    /// assert_eq!(Rational::new(-4, -8).unwrap(), Rational::HALF);
    /// ```
    pub fn new(p: i32, q: i32) -> Result<Self> {
        if q == 0 {
            return Err(MathError::InvalidArgument {
                reason: "the denominator cannot be zero",
            });
        }
        Self::reduce(i64::from(p), i64::from(q), "new")
    }

    /// Creates the canonical form of the widened fraction `p/q`.
    ///
    /// The fraction is reduced in `i64` before it is narrowed, so components
    /// outside the `i32` range are accepted as long as the reduced form fits.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidArgument`] if `q == 0`, and
    /// [`MathError::Overflow`] if the reduced form does not fit in `i32`
    /// components.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numspan_core::num::rational::Rational;
    /// let r = Rational::new_wide(6_000_000_000, 4_000_000_000).unwrap();
    /// assert_eq!(r, Rational::new(3, 2).unwrap());
    /// assert!(Rational::new_wide(6_000_000_001, 2).is_err());
    /// ```
    pub fn new_wide(p: i64, q: i64) -> Result<Self> {
        if q == 0 {
            return Err(MathError::InvalidArgument {
                reason: "the denominator cannot be zero",
            });
        }
        if p == i64::MIN || q == i64::MIN {
            return Err(MathError::Overflow { operation: "new" });
        }
        Self::reduce(p, q, "new")
    }

    /// Creates the rational `p/1`.
    #[inline]
    pub const fn from_integer(p: i32) -> Self {
        Self { p, q: 1 }
    }

    /// Normalizes a widened fraction and narrows it back to `i32` components.
    ///
    /// `q` must be non-zero; every caller guards the zero case with the error
    /// that fits its operation.
    fn reduce(mut p: i64, mut q: i64, operation: &'static str) -> Result<Self> {
        debug_assert!(q != 0, "called `Rational::reduce` with a zero denominator");

        if q < 0 {
            p = -p;
            q = -q;
        }

        let divisor = gcd(p.abs(), q);
        let overflow = || MathError::Overflow { operation };
        Ok(Self {
            p: i32::try_from(p / divisor).map_err(|_| overflow())?,
            q: i32::try_from(q / divisor).map_err(|_| overflow())?,
        })
    }

    /// Returns the signed numerator.
    #[inline]
    pub const fn numerator(&self) -> i32 {
        self.p
    }

    /// Returns the denominator, which is always positive.
    #[inline]
    pub const fn denominator(&self) -> i32 {
        self.q
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.p < 0
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.p == 0
    }

    /// Returns `true` if the denominator is one.
    #[inline]
    pub const fn is_integer(&self) -> bool {
        self.q == 1
    }

    /// Returns `-1`, `0` or `+1` according to the sign of the numerator.
    #[inline]
    pub const fn signum(&self) -> i32 {
        self.p.signum()
    }

    /// Returns `self + rhs`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numspan_core::num::rational::Rational;
    /// let third = Rational::new(1, 3).unwrap();
    /// assert_eq!(third.checked_add(Rational::HALF).unwrap(), Rational::new(5, 6).unwrap());
    /// assert_eq!(third.checked_add(1).unwrap(), Rational::new(4, 3).unwrap());
    /// ```
    pub fn checked_add(self, rhs: impl Into<Rational>) -> Result<Self> {
        let rhs = rhs.into();
        let (p1, q1, p2, q2) = self.widen(rhs);
        Self::reduce(p1 * q2 + p2 * q1, q1 * q2, "add")
    }

    /// Returns `self - rhs`.
    pub fn checked_sub(self, rhs: impl Into<Rational>) -> Result<Self> {
        let rhs = rhs.into();
        let (p1, q1, p2, q2) = self.widen(rhs);
        Self::reduce(p1 * q2 - p2 * q1, q1 * q2, "subtract")
    }

    /// Returns `self * rhs`.
    pub fn checked_mul(self, rhs: impl Into<Rational>) -> Result<Self> {
        let rhs = rhs.into();
        let (p1, q1, p2, q2) = self.widen(rhs);
        Self::reduce(p1 * p2, q1 * q2, "multiply")
    }

    /// Returns `self / rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DivisionByZero`] if `rhs` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numspan_core::{error::MathError, num::rational::Rational};
    /// let third = Rational::new(1, 3).unwrap();
    /// assert_eq!(third.checked_div(Rational::HALF).unwrap(), Rational::new(2, 3).unwrap());
    /// assert_eq!(third.checked_div(Rational::ZERO), Err(MathError::DivisionByZero));
    /// ```
    pub fn checked_div(self, rhs: impl Into<Rational>) -> Result<Self> {
        let rhs = rhs.into();
        if rhs.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        let (p1, q1, p2, q2) = self.widen(rhs);
        Self::reduce(p1 * q2, q1 * p2, "divide")
    }

    /// Returns `q/p`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DivisionByZero`] for zero, which has no inverse.
    pub fn inverse(self) -> Result<Self> {
        if self.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        Self::reduce(i64::from(self.q), i64::from(self.p), "inverse")
    }

    /// Returns `-self`.
    pub fn checked_neg(self) -> Result<Self> {
        Self::reduce(-i64::from(self.p), i64::from(self.q), "negate")
    }

    /// Returns `|self|`.
    pub fn abs(self) -> Result<Self> {
        if self.is_negative() {
            self.checked_neg()
        } else {
            Ok(self)
        }
    }

    /// Returns the mediant `(p1 + p2) / (q1 + q2)` in canonical form.
    ///
    /// The mediant always lies between its two operands.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numspan_core::num::rational::Rational;
    /// let a = Rational::new(1, 2).unwrap();
    /// let b = Rational::new(2, 3).unwrap();
    /// assert_eq!(a.mediant(b).unwrap(), Rational::new(3, 5).unwrap());
    /// ```
    pub fn mediant(self, other: Rational) -> Result<Self> {
        let (p1, q1, p2, q2) = self.widen(other);
        Self::reduce(p1 + p2, q1 + q2, "mediant")
    }

    /// Converts to the nearest `f64`.
    #[inline]
    pub fn to_f64(self) -> f64 {
        f64::from(self.p) / f64::from(self.q)
    }

    /// Converts to an integer, truncating toward zero.
    #[inline]
    pub const fn to_i32(self) -> i32 {
        self.p / self.q
    }

    /// Finds the rational closest to `value` whose denominator does not exceed
    /// `max_denominator`.
    ///
    /// The search walks the continued fraction expansion of `value` (the
    /// Stern–Brocot path, taking each run of same-direction mediants at once)
    /// and finally compares the last convergent with the best semiconvergent
    /// allowed by the bound.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidArgument`] if `value` is not finite or
    /// `max_denominator` is not positive, and [`MathError::Overflow`] if the
    /// result does not fit in `i32` components.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numspan_core::num::rational::Rational;
    /// let pi = Rational::approximate(std::f64::consts::PI, 1000).unwrap();
    /// assert_eq!(pi, Rational::new(355, 113).unwrap());
    /// ```
    pub fn approximate(value: f64, max_denominator: i32) -> Result<Self> {
        if !value.is_finite() {
            return Err(MathError::InvalidArgument {
                reason: "value to approximate must be finite",
            });
        }
        if max_denominator <= 0 {
            return Err(MathError::InvalidArgument {
                reason: "maximum denominator must be positive",
            });
        }

        let magnitude = value.abs();
        if magnitude > f64::from(i32::MAX) {
            return Err(MathError::Overflow {
                operation: "approximate",
            });
        }

        let bound = i64::from(max_denominator);
        let (mut p0, mut q0, mut p1, mut q1) = (0i64, 1i64, 1i64, 0i64);
        let mut x = magnitude;

        // An f64 has a finite expansion; 64 terms is far beyond any i32 bound.
        for _ in 0..64 {
            let a = x.floor();
            let term = a as i64;
            let next = term
                .checked_mul(q1)
                .and_then(|v| v.checked_add(q0))
                .filter(|&q2| q2 <= bound)
                .and_then(|q2| Some((term.checked_mul(p1)?.checked_add(p0)?, q2)));
            let Some((p2, q2)) = next else {
                break;
            };

            (p0, q0, p1, q1) = (p1, q1, p2, q2);

            let frac = x - a;
            if frac == 0.0 {
                break;
            }
            x = 1.0 / frac;
        }

        // The first term always fits (q2 == 1), so q1 >= 1 here.
        let k = (bound - q0) / q1;
        let (semi_p, semi_q) = (p0 + k * p1, q0 + k * q1);
        let semi_error = (semi_p as f64 / semi_q as f64 - magnitude).abs();
        let convergent_error = (p1 as f64 / q1 as f64 - magnitude).abs();

        let (p, q) = if semi_error < convergent_error {
            (semi_p, semi_q)
        } else {
            (p1, q1)
        };
        let p = if value < 0.0 { -p } else { p };

        let result = Self::reduce(p, q, "approximate")?;
        log::debug!(
            "approximated {} as {} (max denominator {})",
            value,
            result,
            max_denominator
        );
        Ok(result)
    }

    #[inline]
    fn widen(self, other: Rational) -> (i64, i64, i64, i64) {
        (
            i64::from(self.p),
            i64::from(self.q),
            i64::from(other.p),
            i64::from(other.q),
        )
    }
}

impl Default for Rational {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i32> for Rational {
    #[inline]
    fn from(value: i32) -> Self {
        Self::from_integer(value)
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        let (p1, q1, p2, q2) = self.widen(*other);
        (p1 * q2).cmp(&(p2 * q1))
    }
}

impl PartialOrd for Rational {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Debug for Rational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rational")
            .field("p", &self.p)
            .field("q", &self.q)
            .finish()
    }
}

impl std::fmt::Display for Rational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.p)
        } else {
            write!(f, "{}/{}", self.p, self.q)
        }
    }
}

// The operators panic where the checked methods return an error, just like
// the primitive integer operators do on overflow or division by zero.
macro_rules! rational_binary_op {
    ($trait_name:ident, $method:ident, $checked:ident, $rhs:ty) => {
        impl $trait_name<$rhs> for Rational {
            type Output = Rational;

            #[inline]
            fn $method(self, rhs: $rhs) -> Rational {
                match self.$checked(rhs) {
                    Ok(value) => value,
                    Err(e) => panic!("rational {} of {} and {} failed: {}", stringify!($method), self, rhs, e),
                }
            }
        }
    };
}

rational_binary_op!(Add, add, checked_add, Rational);
rational_binary_op!(Add, add, checked_add, i32);
rational_binary_op!(Sub, sub, checked_sub, Rational);
rational_binary_op!(Sub, sub, checked_sub, i32);
rational_binary_op!(Mul, mul, checked_mul, Rational);
rational_binary_op!(Mul, mul, checked_mul, i32);
rational_binary_op!(Div, div, checked_div, Rational);
rational_binary_op!(Div, div, checked_div, i32);

impl Neg for Rational {
    type Output = Rational;

    #[inline]
    fn neg(self) -> Rational {
        match self.checked_neg() {
            Ok(value) => value,
            Err(e) => panic!("rational negation of {} failed: {}", self, e),
        }
    }
}

impl Zero for Rational {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.p == 0
    }
}

impl One for Rational {
    #[inline]
    fn one() -> Self {
        Self::ONE
    }
}

impl ToPrimitive for Rational {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        Some(i64::from(Rational::to_i32(*self)))
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        u64::try_from(Rational::to_i32(*self)).ok()
    }

    #[inline]
    fn to_f64(&self) -> Option<f64> {
        Some(Rational::to_f64(*self))
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RationalRepr {
    numerator: i32,
    #[serde(default = "RationalRepr::unit_denominator")]
    denominator: i32,
}

#[cfg(feature = "serde")]
impl RationalRepr {
    fn unit_denominator() -> i32 {
        1
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RationalRepr> for Rational {
    type Error = MathError;

    fn try_from(repr: RationalRepr) -> Result<Self> {
        Rational::new(repr.numerator, repr.denominator)
    }
}

#[cfg(feature = "serde")]
impl From<Rational> for RationalRepr {
    fn from(value: Rational) -> Self {
        Self {
            numerator: value.p,
            denominator: value.q,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(p: i32, q: i32) -> Rational {
        Rational::new(p, q).unwrap()
    }

    #[test]
    fn test_construction_reduces() {
        let half = r(2, 4);
        assert_eq!(half.numerator(), 1);
        assert_eq!(half.denominator(), 2);

        let neg = r(3, -6);
        assert_eq!(neg.numerator(), -1);
        assert_eq!(neg.denominator(), 2);

        let both_negative = r(-10, -15);
        assert_eq!((both_negative.numerator(), both_negative.denominator()), (2, 3));
    }

    #[test]
    fn test_construction_zero_numerator() {
        let zero = r(0, -7);
        assert_eq!(zero, Rational::ZERO);
        assert_eq!(zero.denominator(), 1);
    }

    #[test]
    fn test_construction_zero_denominator() {
        assert!(matches!(
            Rational::new(1, 0),
            Err(MathError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_construction_overflow() {
        assert_eq!(
            Rational::new(i32::MIN, -1),
            Err(MathError::Overflow { operation: "new" })
        );
        // Reduction happens before narrowing.
        assert_eq!(r(i32::MIN, -2), r(1 << 30, 1));
        assert!(Rational::new(1, i32::MIN).is_err());
        assert_eq!(r(2, i32::MIN), r(-1, 1 << 30));
    }

    #[test]
    fn test_new_wide() {
        assert_eq!(Rational::new_wide(-10, -4).unwrap(), r(5, 2));
        assert_eq!(
            Rational::new_wide(1 << 40, 1 << 41).unwrap(),
            Rational::HALF
        );
        assert!(matches!(
            Rational::new_wide(1, 0),
            Err(MathError::InvalidArgument { .. })
        ));
        assert_eq!(
            Rational::new_wide(i64::MIN, 1),
            Err(MathError::Overflow { operation: "new" })
        );
    }

    #[test]
    fn test_constants_are_canonical() {
        for c in [
            Rational::NEGATIVE_ONE,
            Rational::NEGATIVE_HALF,
            Rational::ZERO,
            Rational::HALF,
            Rational::ONE,
        ] {
            assert_eq!(c, r(c.numerator(), c.denominator()));
        }
    }

    #[test]
    fn test_add_and_subtract() {
        assert_eq!(r(1, 3).checked_add(r(1, 6)).unwrap(), Rational::HALF);
        assert_eq!(r(1, 2).checked_sub(r(3, 4)).unwrap(), r(-1, 4));
        assert_eq!(r(5, 7).checked_sub(r(5, 7)).unwrap(), Rational::ZERO);
        assert_eq!(r(1, 2).checked_add(-1).unwrap(), r(1, 2).checked_sub(1).unwrap());
        assert_eq!(r(3, 5).checked_add(Rational::ZERO).unwrap(), r(3, 5));
    }

    #[test]
    fn test_multiply_and_divide() {
        assert_eq!(r(2, 3).checked_mul(r(9, 4)).unwrap(), r(3, 2));
        assert_eq!(r(2, 3).checked_mul(0).unwrap(), Rational::ZERO);
        assert_eq!(r(-2, 3).checked_mul(-1).unwrap(), r(2, 3));
        assert_eq!(r(2, 3).checked_div(r(4, 9)).unwrap(), r(3, 2));
        assert_eq!(r(2, 3).checked_div(-2).unwrap(), r(-1, 3));
        assert_eq!(r(2, 3).checked_div(1).unwrap(), r(2, 3));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(r(2, 3).checked_div(Rational::ZERO), Err(MathError::DivisionByZero));
        assert_eq!(r(2, 3).checked_div(0), Err(MathError::DivisionByZero));
    }

    #[test]
    fn test_inverse() {
        assert_eq!(r(2, 3).inverse().unwrap(), r(3, 2));
        assert_eq!(r(-2, 3).inverse().unwrap(), r(-3, 2));
        assert_eq!(Rational::ZERO.inverse(), Err(MathError::DivisionByZero));
        assert_eq!(
            Rational::from_integer(i32::MIN).inverse(),
            Err(MathError::Overflow { operation: "inverse" })
        );
    }

    #[test]
    fn test_negate_and_abs() {
        assert_eq!(r(2, 3).checked_neg().unwrap(), r(-2, 3));
        assert_eq!(r(-2, 3).abs().unwrap(), r(2, 3));
        assert_eq!(r(2, 3).abs().unwrap(), r(2, 3));
        assert!(Rational::from_integer(i32::MIN).checked_neg().is_err());
    }

    #[test]
    fn test_mediant() {
        assert_eq!(r(1, 2).mediant(r(2, 3)).unwrap(), r(3, 5));
        // Reduced after summing.
        assert_eq!(r(1, 3).mediant(r(1, 1)).unwrap(), Rational::HALF);
        let m = r(1, 4).mediant(r(3, 4)).unwrap();
        assert!(r(1, 4) < m && m < r(3, 4));
    }

    #[test]
    fn test_overflow_is_reported() {
        let big = Rational::from_integer(i32::MAX);
        assert_eq!(
            big.checked_add(1),
            Err(MathError::Overflow { operation: "add" })
        );
        assert_eq!(
            big.checked_mul(big),
            Err(MathError::Overflow { operation: "multiply" })
        );
        // Large components that reduce back into range are fine.
        let a = r(1, i32::MAX);
        assert_eq!(a.checked_mul(i32::MAX).unwrap(), Rational::ONE);
    }

    #[test]
    fn test_compare_widens() {
        let a = r(i32::MAX, i32::MAX - 1);
        let b = r(i32::MAX - 1, i32::MAX - 2);
        assert!(a < b);
        assert!(Rational::from_integer(i32::MIN) < Rational::from_integer(i32::MAX));
        assert_eq!(r(1, 2).cmp(&r(2, 4)), Ordering::Equal);
        assert!(r(-1, 2) < r(-1, 3));
    }

    #[test]
    fn test_signum_and_predicates() {
        assert_eq!(r(-3, 4).signum(), -1);
        assert_eq!(Rational::ZERO.signum(), 0);
        assert_eq!(r(3, 4).signum(), 1);
        assert!(r(-3, 4).is_negative());
        assert!(r(8, 4).is_integer());
        assert!(!r(3, 4).is_integer());
    }

    #[test]
    fn test_conversions() {
        assert_eq!(r(1, 4).to_f64(), 0.25);
        assert_eq!(r(7, 2).to_i32(), 3);
        assert_eq!(r(-7, 2).to_i32(), -3);
        assert_eq!(ToPrimitive::to_u64(&r(-7, 2)), None);
        assert_eq!(ToPrimitive::to_i64(&r(-7, 2)), Some(-3));
        assert_eq!(ToPrimitive::to_u64(&r(7, 2)), Some(3));
        assert_eq!(ToPrimitive::to_i32(&r(i32::MAX, 1)), Some(i32::MAX));
        assert_eq!(ToPrimitive::to_f64(&Rational::NEGATIVE_HALF), Some(-0.5));
        assert_eq!(Rational::from(5), r(10, 2));
        assert_eq!(Rational::default(), Rational::ZERO);
    }

    #[test]
    fn test_traits_display_debug() {
        assert_eq!(format!("{}", r(-6, 4)), "-3/2");
        assert_eq!(format!("{}", r(6, 3)), "2");
        assert_eq!(format!("{:?}", r(1, 2)), "Rational { p: 1, q: 2 }");
    }

    #[test]
    fn test_operators() {
        let a = r(1, 2);
        let b = r(1, 3);
        assert_eq!(a + b, r(5, 6));
        assert_eq!(a - b, r(1, 6));
        assert_eq!(a * b, r(1, 6));
        assert_eq!(a / b, r(3, 2));
        assert_eq!(a + 1, r(3, 2));
        assert_eq!(a * 4, Rational::from(2));
        assert_eq!(-a, Rational::NEGATIVE_HALF);
        assert!(Zero::is_zero(&(a - a)));
        assert_eq!(Rational::one(), a / a);
    }

    #[test]
    #[should_panic(expected = "Division by zero")]
    fn test_operator_divide_by_zero_panics() {
        let _ = Rational::ONE / Rational::ZERO;
    }

    #[test]
    fn test_approximate() {
        assert_eq!(Rational::approximate(0.5, 100).unwrap(), Rational::HALF);
        assert_eq!(Rational::approximate(0.1, 100).unwrap(), r(1, 10));
        assert_eq!(Rational::approximate(-0.75, 10).unwrap(), r(-3, 4));
        assert_eq!(Rational::approximate(3.0, 1).unwrap(), Rational::from(3));
        assert_eq!(
            Rational::approximate(std::f64::consts::PI, 7).unwrap(),
            r(22, 7)
        );
        assert_eq!(
            Rational::approximate(std::f64::consts::PI, 1000).unwrap(),
            r(355, 113)
        );
        assert_eq!(Rational::approximate(1e-9, 100).unwrap(), Rational::ZERO);
    }

    #[test]
    fn test_approximate_rejects_bad_input() {
        assert!(matches!(
            Rational::approximate(f64::NAN, 10),
            Err(MathError::InvalidArgument { .. })
        ));
        assert!(matches!(
            Rational::approximate(0.5, 0),
            Err(MathError::InvalidArgument { .. })
        ));
        assert!(matches!(
            Rational::approximate(1e12, 10),
            Err(MathError::Overflow { .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_validates() {
        let json = serde_json::to_string(&r(-3, 6)).unwrap();
        assert_eq!(json, r#"{"numerator":-1,"denominator":2}"#);
        let back: Rational = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r(-1, 2));

        let reduced: Rational = serde_json::from_str(r#"{"numerator":4,"denominator":-8}"#).unwrap();
        assert_eq!(reduced, r(-1, 2));

        let integer: Rational = serde_json::from_str(r#"{"numerator":4}"#).unwrap();
        assert_eq!(integer, Rational::from(4));

        assert!(serde_json::from_str::<Rational>(r#"{"numerator":1,"denominator":0}"#).is_err());
    }
}
