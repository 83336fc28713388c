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

//! Arithmetic transformations of ranges over [`Countable`] scalars.
//!
//! Every amount given to the extend and trim families must be non-negative;
//! `shift` accepts either sign. When trimming would invert a range, the two
//! trimming styles fall back differently:
//!
//! - `trim` collapses to the midpoint of the original range, the lower bound
//!   of its center (`from + (to - from) / 2` for integers).
//! - `trim_minimum` and `trim_maximum` collapse onto the bound that was not
//!   moved.
//!
//! # Examples
//!
//! ```rust
//! # use numspan_range::IntegerRange;
//! let range = IntegerRange::new(0, 10).unwrap();
//! assert_eq!(range.trim(6).unwrap(), IntegerRange::single(5).unwrap());
//! assert_eq!(range.trim_minimum(11).unwrap(), IntegerRange::single(10).unwrap());
//! assert_eq!(range.extend(2)?.shift(-3)?, IntegerRange::new(-5, 9)?);
//! # Ok::<(), numspan_core::MathError>(())
//! ```

use crate::{range::Range, scalar::Countable};
use numspan_core::error::{MathError, Result};
use rand::Rng;
use std::cmp::Ordering;

#[inline]
fn ensure_non_negative<T>(amount: T) -> Result<()>
where
    T: Countable,
{
    if amount.is_negative() {
        return Err(MathError::negative_amount());
    }
    Ok(())
}

impl<T> Range<T>
where
    T: Countable,
{
    /// Returns the distance the range covers, `to - from`.
    ///
    /// Never negative.
    #[inline]
    pub fn distance(&self) -> Result<T> {
        self.to().try_sub(*self.from())
    }

    /// Returns the distance, or `None` if it does not fit the scalar type.
    ///
    /// An integer distance that overflows is larger than any amount of that
    /// type, so no bound moved by such an amount can pass the other.
    #[inline]
    fn checked_distance(&self) -> Result<Option<T>> {
        match self.distance() {
            Ok(distance) => Ok(Some(distance)),
            Err(MathError::Overflow { .. }) => Ok(None),
            Err(error) => Err(error),
        }
    }

    /// Returns the range moved by `amount`, which may be negative.
    pub fn shift(&self, amount: T) -> Result<Self> {
        self.set(
            self.from().try_add(amount)?,
            self.to().try_add(amount)?,
        )
    }

    /// Returns the range with `amount` subtracted from the minimum and added
    /// to the maximum.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidArgument`] if `amount` is negative.
    pub fn extend(&self, amount: T) -> Result<Self> {
        ensure_non_negative(amount)?;
        self.extend_minimum(amount)?.extend_maximum(amount)
    }

    /// Returns the range with `amount` subtracted from the minimum.
    pub fn extend_minimum(&self, amount: T) -> Result<Self> {
        ensure_non_negative(amount)?;
        self.set_from(self.from().try_sub(amount)?)
    }

    /// Returns the range with `amount` added to the maximum.
    pub fn extend_maximum(&self, amount: T) -> Result<Self> {
        ensure_non_negative(amount)?;
        self.set_to(self.to().try_add(amount)?)
    }

    /// Returns the range with `amount` added to the minimum and subtracted
    /// from the maximum.
    ///
    /// If that would leave the minimum above the maximum, the result is the
    /// degenerate range at the midpoint of this range instead: the lower
    /// bound of [`center`](Self::center), which for integers is
    /// `from + (to - from) / 2`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidArgument`] if `amount` is negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numspan_range::IntegerRange;
    /// let range = IntegerRange::new(0, 10).unwrap();
    /// assert_eq!(range.trim(2).unwrap(), IntegerRange::new(2, 8).unwrap());
    /// assert_eq!(range.trim(6).unwrap(), IntegerRange::new(5, 5).unwrap());
    /// ```
    pub fn trim(&self, amount: T) -> Result<Self> {
        ensure_non_negative(amount)?;

        let (from, to) = (*self.from(), *self.to());
        let collapse = match self.checked_distance()? {
            Some(distance) => amount > distance.half()?,
            None => false,
        };
        if !collapse {
            let min = from.try_add(amount)?;
            let max = to.try_sub(amount)?;
            if min.partial_cmp(&max) != Some(Ordering::Greater) {
                return self.set(min, max);
            }
        }

        let (center, _) = T::center_between(from, to)?;
        log::trace!(
            "trim by {:?} would invert [{:?}, {:?}]; collapsing to midpoint {:?}",
            amount,
            from,
            to,
            center
        );
        self.set(center, center)
    }

    /// Returns the range with `amount` added to the minimum.
    ///
    /// If the new minimum would pass the maximum, the result is the degenerate
    /// range at the maximum.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numspan_range::range::Range;
    /// let range = Range::<u8>::new(0, 10).unwrap();
    /// assert_eq!(range.trim_minimum(u8::MAX).unwrap(), Range::single(10).unwrap());
    /// ```
    pub fn trim_minimum(&self, amount: T) -> Result<Self> {
        ensure_non_negative(amount)?;

        let to = *self.to();
        let passes = self
            .checked_distance()?
            .is_some_and(|distance| amount > distance);
        if !passes {
            let new_from = self.from().try_add(amount)?;
            if new_from.partial_cmp(&to) != Some(Ordering::Greater) {
                return self.set_from(new_from);
            }
        }

        log::trace!(
            "trim_minimum by {:?} passes maximum {:?}; clamping",
            amount,
            to
        );
        self.set_from(to)
    }

    /// Returns the range with `amount` subtracted from the maximum.
    ///
    /// If the new maximum would pass the minimum, the result is the degenerate
    /// range at the minimum.
    pub fn trim_maximum(&self, amount: T) -> Result<Self> {
        ensure_non_negative(amount)?;

        let from = *self.from();
        let passes = self
            .checked_distance()?
            .is_some_and(|distance| amount > distance);
        if !passes {
            let new_to = self.to().try_sub(amount)?;
            if new_to.partial_cmp(&from) != Some(Ordering::Less) {
                return self.set_to(new_to);
            }
        }

        log::trace!(
            "trim_maximum by {:?} passes minimum {:?}; clamping",
            amount,
            from
        );
        self.set_to(from)
    }

    /// Returns the center of the range, expressed as a range.
    ///
    /// Integer ranges with an odd distance have no integral midpoint; their
    /// center spans the two integers around it, the upper one rounded up.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numspan_range::{DoubleRange, IntegerRange};
    /// let even = IntegerRange::new(-5, 5).unwrap();
    /// assert_eq!(even.center().unwrap(), IntegerRange::new(0, 0).unwrap());
    ///
    /// let odd = IntegerRange::new(0, 5).unwrap();
    /// assert_eq!(odd.center().unwrap(), IntegerRange::new(2, 3).unwrap());
    ///
    /// let real = DoubleRange::new(0.0, 5.0).unwrap();
    /// assert_eq!(real.center().unwrap(), DoubleRange::single(2.5).unwrap());
    /// ```
    pub fn center(&self) -> Result<Self> {
        let (min, max) = T::center_between(*self.from(), *self.to())?;
        self.set(min, max)
    }

    /// Returns a value from the range (inclusive), drawn from `rng`.
    ///
    /// The same generator state always yields the same value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numspan_range::LongRange;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let range = LongRange::new(-100, 100).unwrap();
    /// let a = range.random_value(&mut ChaCha8Rng::seed_from_u64(1)).unwrap();
    /// let b = range.random_value(&mut ChaCha8Rng::seed_from_u64(1)).unwrap();
    /// assert_eq!(a, b);
    /// assert!(range.contains(&a));
    /// ```
    #[inline]
    pub fn random_value<R>(&self, rng: &mut R) -> Result<T>
    where
        R: Rng + ?Sized,
    {
        T::sample_between(*self.from(), *self.to(), rng)
    }

    /// Returns a value from the range (inclusive), drawn from the thread-local
    /// generator.
    #[cfg(feature = "thread-rng")]
    #[inline]
    pub fn random_value_with_thread_rng(&self) -> Result<T> {
        self.random_value(&mut rand::rng())
    }
}

impl<T> Default for Range<T>
where
    T: Countable + Default,
{
    /// The degenerate range at the scalar's default (zero).
    #[inline]
    fn default() -> Self {
        Range::new_unchecked(T::default(), T::default())
    }
}
