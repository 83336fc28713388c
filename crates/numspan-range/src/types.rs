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

//! Named range instantiations for the common scalar types.

use crate::range::Range;
use numspan_core::{error::Result, num::Rational};

/// An immutable `i32` range.
pub type IntegerRange = Range<i32>;

/// An immutable `i64` range.
pub type LongRange = Range<i64>;

/// An immutable `f64` range.
pub type DoubleRange = Range<f64>;

/// An immutable [`Rational`] range.
pub type RationalRange = Range<Rational>;

impl Range<Rational> {
    /// Creates the range `[p1/q1, p2/q2]`.
    ///
    /// # Errors
    ///
    /// Fails if either fraction is invalid (see [`Rational::new`]) or if the
    /// second fraction is smaller than the first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numspan_range::RationalRange;
    /// # use numspan_core::Rational;
    /// let range = RationalRange::from_fractions(1, 3, 2, 4).unwrap();
    /// assert_eq!(*range.to(), Rational::HALF);
    /// assert!(RationalRange::from_fractions(1, 2, 1, 3).is_err());
    /// assert!(RationalRange::from_fractions(1, 0, 1, 3).is_err());
    /// ```
    pub fn from_fractions(p1: i32, q1: i32, p2: i32, q2: i32) -> Result<Self> {
        Range::new(Rational::new(p1, q1)?, Rational::new(p2, q2)?)
    }
}
