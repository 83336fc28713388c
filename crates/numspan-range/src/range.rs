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

//! Closed ranges `[from, to]` over ordered values.
//!
//! [`Range`] is immutable: every transformation returns a new range and
//! leaves the receiver untouched, so calls chain naturally with `?`. The only
//! invariant is `from <= to`; it is checked by every constructor, and a value
//! that would violate it is never produced.
//!
//! Scalars only need `PartialOrd`, so floating-point ranges are supported.
//! Endpoints that cannot be ordered against each other (such as `NaN`) are
//! rejected like an inverted range, which keeps every stored pair totally
//! ordered.

use numspan_core::error::{MathError, Result};
use std::{
    cmp::Ordering,
    fmt::Debug,
    ops::{Bound, RangeBounds, RangeInclusive},
};

/// An inclusive range `[from, to]`.
///
/// # Invariants
///
/// `from <= to` always holds.
///
/// # Examples
///
/// ```rust
/// # use numspan_range::range::Range;
/// let range = Range::new(0, 10).unwrap();
/// assert!(range.contains(&0));
/// assert!(range.contains(&10));
/// assert!(!range.contains(&11));
///
/// assert!(Range::new(10, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "RangeRepr<T>",
        into = "RangeRepr<T>",
        bound(
            serialize = "T: serde::Serialize + Clone",
            deserialize = "T: serde::Deserialize<'de> + PartialOrd + Debug"
        )
    )
)]
pub struct Range<T> {
    from: T,
    to: T,
}

impl<T> Range<T>
where
    T: PartialOrd + Debug,
{
    /// Creates the range `[from, to]`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidRange`] if `to < from` or if the endpoints
    /// are not comparable.
    #[inline]
    pub fn new(from: T, to: T) -> Result<Self> {
        match from.partial_cmp(&to) {
            Some(Ordering::Less | Ordering::Equal) => Ok(Self { from, to }),
            _ => Err(MathError::invalid_range(&from, &to)),
        }
    }

    /// Creates a range without checking the invariant in release builds.
    ///
    /// The caller must ensure `from <= to`; a `debug_assert!` catches
    /// violations during development.
    #[inline]
    pub(crate) fn new_unchecked(from: T, to: T) -> Self {
        debug_assert!(
            from <= to,
            "called `Range::new_unchecked` with from={:?} > to={:?}",
            from,
            to
        );
        Self { from, to }
    }

    /// Creates the degenerate range `[value, value]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numspan_range::range::Range;
    /// let point = Range::single(4).unwrap();
    /// assert_eq!(point.from(), point.to());
    ///
    /// assert!(Range::single(f64::NAN).is_err());
    /// ```
    #[inline]
    pub fn single(value: T) -> Result<Self>
    where
        T: Clone,
    {
        Self::new(value.clone(), value)
    }

    /// Creates a range from endpoints that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::MissingValue`] naming the first absent endpoint,
    /// or [`MathError::InvalidRange`] if both are present but out of order.
    pub fn from_options(from: Option<T>, to: Option<T>) -> Result<Self> {
        let from = from.ok_or(MathError::MissingValue { name: "minimum" })?;
        let to = to.ok_or(MathError::MissingValue { name: "maximum" })?;
        Self::new(from, to)
    }

    /// Returns the smallest value (the minimum) of this range.
    #[inline]
    pub const fn from(&self) -> &T {
        &self.from
    }

    /// Returns the largest value (the maximum) of this range.
    #[inline]
    pub const fn to(&self) -> &T {
        &self.to
    }

    /// Consumes the range, returning `(from, to)`.
    #[inline]
    pub fn into_inner(self) -> (T, T) {
        (self.from, self.to)
    }

    /// Returns `true` if `value` lies inside the range, bounds included.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        !self.is_under(value) && !self.is_over(value)
    }

    /// Returns `true` if `other` lies completely inside this range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numspan_range::range::Range;
    /// let outer = Range::new(0, 10).unwrap();
    /// assert!(outer.contains_range(&Range::new(2, 8).unwrap()));
    /// assert!(outer.contains_range(&outer));
    /// assert!(!outer.contains_range(&Range::new(5, 11).unwrap()));
    /// ```
    #[inline]
    pub fn contains_range(&self, other: &Range<T>) -> bool {
        self.contains(&other.from) && self.contains(&other.to)
    }

    /// Returns `true` if the minimum of this range is larger than `value`.
    #[inline]
    pub fn is_over(&self, value: &T) -> bool {
        self.from > *value
    }

    /// Returns `true` if the maximum of this range is smaller than `value`.
    #[inline]
    pub fn is_under(&self, value: &T) -> bool {
        self.to < *value
    }

    /// Returns `true` if `value` is exactly on either end of this range.
    #[inline]
    pub fn is_boundary(&self, value: &T) -> bool {
        self.from == *value || self.to == *value
    }

    /// Returns `true` unless the two ranges are strictly disjoint.
    ///
    /// Ranges that merely touch at an endpoint overlap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numspan_range::range::Range;
    /// let a = Range::new(0, 10).unwrap();
    /// assert!(a.overlaps(&Range::new(10, 20).unwrap()));
    /// assert!(!a.overlaps(&Range::new(11, 20).unwrap()));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: &Range<T>) -> bool {
        !(self.to < other.from || other.to < self.from)
    }

    /// Returns the smallest minimum of this and the given range.
    #[inline]
    pub fn minimum<'a>(&'a self, other: &'a Range<T>) -> &'a T {
        if self.from < other.from {
            &self.from
        } else {
            &other.from
        }
    }

    /// Returns the largest maximum of this and the given range.
    #[inline]
    pub fn maximum<'a>(&'a self, other: &'a Range<T>) -> &'a T {
        if self.to < other.to {
            &other.to
        } else {
            &self.to
        }
    }

    /// Returns a range with the given boundaries.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidRange`] if `to < from`.
    #[inline]
    pub fn set(&self, from: T, to: T) -> Result<Self> {
        Self::new(from, to)
    }

    /// Returns a range with `value` as both the minimum and the maximum.
    #[inline]
    pub fn set_single(&self, value: T) -> Result<Self>
    where
        T: Clone,
    {
        Self::single(value)
    }

    /// Returns a range spanning the two values, whichever order they come in.
    ///
    /// The smaller value becomes the minimum, so ordering never causes a
    /// failure; only incomparable values (such as `NaN`) are rejected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numspan_range::range::Range;
    /// let range = Range::new(0, 1).unwrap();
    /// assert_eq!(range.safe_set(9, 3).unwrap(), Range::new(3, 9).unwrap());
    /// ```
    pub fn safe_set(&self, value1: T, value2: T) -> Result<Self> {
        if value2 < value1 {
            Self::new(value2, value1)
        } else {
            Self::new(value1, value2)
        }
    }

    /// Returns this range with the given minimum.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidRange`] if `from` is larger than the maximum.
    #[inline]
    pub fn set_from(&self, from: T) -> Result<Self>
    where
        T: Clone,
    {
        Self::new(from, self.to.clone())
    }

    /// Returns this range with the given maximum.
    ///
    /// Note that this replaces the maximum of the range, not the range itself.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidRange`] if `to` is smaller than the minimum.
    #[inline]
    pub fn set_to(&self, to: T) -> Result<Self>
    where
        T: Clone,
    {
        Self::new(self.from.clone(), to)
    }
}

impl<T> std::fmt::Display for Range<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.from, self.to)
    }
}

impl<T> RangeBounds<T> for Range<T> {
    fn start_bound(&self) -> Bound<&T> {
        Bound::Included(&self.from)
    }

    fn end_bound(&self) -> Bound<&T> {
        Bound::Included(&self.to)
    }
}

impl<T> TryFrom<RangeInclusive<T>> for Range<T>
where
    T: PartialOrd + Debug,
{
    type Error = MathError;

    #[inline]
    fn try_from(range: RangeInclusive<T>) -> Result<Self> {
        let (from, to) = range.into_inner();
        Self::new(from, to)
    }
}

impl<T> From<Range<T>> for RangeInclusive<T> {
    #[inline]
    fn from(range: Range<T>) -> Self {
        RangeInclusive::new(range.from, range.to)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RangeRepr<T> {
    from: Option<T>,
    to: Option<T>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RangeRepr<T>> for Range<T>
where
    T: PartialOrd + Debug,
{
    type Error = MathError;

    fn try_from(repr: RangeRepr<T>) -> Result<Self> {
        Range::from_options(repr.from, repr.to)
    }
}

#[cfg(feature = "serde")]
impl<T> From<Range<T>> for RangeRepr<T> {
    fn from(range: Range<T>) -> Self {
        Self {
            from: Some(range.from),
            to: Some(range.to),
        }
    }
}
