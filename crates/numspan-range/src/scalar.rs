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

//! # Countable Scalars
//!
//! The arithmetic a range needs from its scalar type in order to measure,
//! move, grow, shrink, center and sample itself. The trait is implemented by
//! value for the primitive integers other than `isize`, for `f32`/`f64`, and
//! for [`Rational`].
//!
//! Integer and rational arithmetic is checked: a result that does not fit the
//! scalar type is reported as [`MathError::Overflow`] instead of wrapping.
//! Floating-point arithmetic follows IEEE semantics; a `NaN` produced along
//! the way is caught when the resulting range is constructed.

use numspan_core::{
    error::{MathError, Result},
    num::{Rational, gcd::gcd},
};
use rand::Rng;
use std::fmt::Debug;

/// A scalar that supports the arithmetic of a countable range.
///
/// # Examples
///
/// ```rust
/// # use numspan_range::scalar::Countable;
/// assert_eq!(Countable::try_add(2i32, 3).unwrap(), 5);
/// assert!(Countable::try_add(i32::MAX, 1).is_err());
/// assert_eq!(<i64 as Countable>::center_between(0, 5).unwrap(), (2, 3));
/// ```
pub trait Countable: Copy + PartialOrd + Debug {
    /// Returns `self + rhs`.
    fn try_add(self, rhs: Self) -> Result<Self>;

    /// Returns `self - rhs`.
    fn try_sub(self, rhs: Self) -> Result<Self>;

    /// Returns half of `self`, truncated for integers.
    fn half(self) -> Result<Self>;

    /// Returns `true` if `self` is strictly less than zero.
    fn is_negative(self) -> bool;

    /// Returns the bounds of the center of `[from, to]`.
    ///
    /// Both bounds are equal unless the scalar cannot represent the exact
    /// midpoint, in which case they are the two nearest values around it.
    fn center_between(from: Self, to: Self) -> Result<(Self, Self)>;

    /// Draws a value from `[from, to]` (inclusive) using `rng`.
    fn sample_between<R>(from: Self, to: Self, rng: &mut R) -> Result<Self>
    where
        R: Rng + ?Sized;
}

macro_rules! countable_int_impl {
    ($t:ty, $v:ident => $is_negative:expr) => {
        impl Countable for $t {
            #[inline(always)]
            fn try_add(self, rhs: Self) -> Result<Self> {
                <$t>::checked_add(self, rhs).ok_or(MathError::Overflow { operation: "add" })
            }

            #[inline(always)]
            fn try_sub(self, rhs: Self) -> Result<Self> {
                <$t>::checked_sub(self, rhs).ok_or(MathError::Overflow {
                    operation: "subtract",
                })
            }

            #[inline(always)]
            fn half(self) -> Result<Self> {
                Ok(self / 2)
            }

            #[inline(always)]
            fn is_negative(self) -> bool {
                let $v = self;
                $is_negative
            }

            // On an odd distance the upper bound is rounded up, so that
            // `min <= exact center <= max`.
            #[inline]
            fn center_between(from: Self, to: Self) -> Result<(Self, Self)> {
                let distance = to.try_sub(from)?;
                let min = from.try_add(distance / 2)?;
                if distance % 2 != 0 {
                    Ok((min, min.try_add(1)?))
                } else {
                    Ok((min, min))
                }
            }

            #[inline]
            fn sample_between<R>(from: Self, to: Self, rng: &mut R) -> Result<Self>
            where
                R: Rng + ?Sized,
            {
                Ok(rng.random_range(from..=to))
            }
        }
    };
}

macro_rules! countable_signed_impl {
    ($($t:ty),*) => {
        $(countable_int_impl!($t, v => v < 0);)*
    };
}

macro_rules! countable_unsigned_impl {
    ($($t:ty),*) => {
        $(countable_int_impl!($t, _v => false);)*
    };
}

// `isize` is left out: rand has no uniform sampler for it.
countable_signed_impl!(i8, i16, i32, i64, i128);
countable_unsigned_impl!(u8, u16, u32, u64, u128, usize);

macro_rules! countable_float_impl {
    ($($t:ty),*) => {
        $(
            impl Countable for $t {
                #[inline(always)]
                fn try_add(self, rhs: Self) -> Result<Self> {
                    Ok(self + rhs)
                }

                #[inline(always)]
                fn try_sub(self, rhs: Self) -> Result<Self> {
                    Ok(self - rhs)
                }

                #[inline(always)]
                fn half(self) -> Result<Self> {
                    Ok(self / 2.0)
                }

                #[inline(always)]
                fn is_negative(self) -> bool {
                    self < 0.0
                }

                // Halving each bound first keeps `[-MAX, MAX]` finite; the
                // clamp guards against subnormal rounding.
                #[inline]
                fn center_between(from: Self, to: Self) -> Result<(Self, Self)> {
                    let center = from / 2.0 + to / 2.0;
                    let center = if center < from {
                        from
                    } else if center > to {
                        to
                    } else {
                        center
                    };
                    Ok((center, center))
                }

                // Linear interpolation with `u` in `[0, 1)`; rounding may land
                // just past `to`, so the result is clamped.
                fn sample_between<R>(from: Self, to: Self, rng: &mut R) -> Result<Self>
                where
                    R: Rng + ?Sized,
                {
                    let width = to - from;
                    if !width.is_finite() {
                        return Err(MathError::InvalidArgument {
                            reason: "cannot sample from a range of non-finite width",
                        });
                    }
                    let u: $t = rng.random();
                    let value = from + u * width;
                    Ok(if value > to { to } else { value })
                }
            }
        )*
    };
}

countable_float_impl!(f32, f64);

impl Countable for Rational {
    #[inline]
    fn try_add(self, rhs: Self) -> Result<Self> {
        self.checked_add(rhs)
    }

    #[inline]
    fn try_sub(self, rhs: Self) -> Result<Self> {
        self.checked_sub(rhs)
    }

    #[inline]
    fn half(self) -> Result<Self> {
        self.checked_div(2)
    }

    #[inline]
    fn is_negative(self) -> bool {
        Rational::is_negative(&self)
    }

    /// The exact midpoint; rationals never need two bounds.
    fn center_between(from: Self, to: Self) -> Result<(Self, Self)> {
        let center = from.checked_add(to.checked_sub(from)?.checked_div(2)?)?;
        Ok((center, center))
    }

    /// Picks a uniform point on the grid of the common denominator of both
    /// bounds, so `from` and `to` themselves are both reachable.
    ///
    /// Grid points are reduced back to `i32` components. Bounds with large
    /// coprime denominators (such as `1/50021` and `1/50000`) have a common
    /// denominator beyond `i32`, and any sample that does not reduce below it
    /// fails with [`MathError::Overflow`].
    fn sample_between<R>(from: Self, to: Self, rng: &mut R) -> Result<Self>
    where
        R: Rng + ?Sized,
    {
        let (from_q, to_q) = (i64::from(from.denominator()), i64::from(to.denominator()));
        let common = from_q / gcd(from_q, to_q) * to_q;
        let low = i64::from(from.numerator()) * (common / from_q);
        let high = i64::from(to.numerator()) * (common / to_q);
        Rational::new_wide(rng.random_range(low..=high), common)
    }
}
