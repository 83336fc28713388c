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

//! # Numspan Range
//!
//! Immutable, chainable closed ranges `[from, to]`.
//!
//! ## Modules
//!
//! - `range`: The generic `Range<T>` over any ordered scalar, with
//!   validation, containment, boundary and overlap queries, and re-bounding
//!   (`set`, `safe_set`, `set_from`, `set_to`). Conversions to and from
//!   `RangeInclusive` and a `RangeBounds` implementation are included.
//! - `scalar`: The `Countable` trait, the arithmetic a scalar supplies to a
//!   range (checked addition and subtraction, halving, sign test, centering,
//!   sampling), implemented for primitive integers, floats and `Rational`.
//! - `countable`: Distance, shift, extend, trim, center and random sampling for
//!   ranges over `Countable` scalars.
//! - `types`: The named instantiations `IntegerRange`, `LongRange`,
//!   `DoubleRange` and `RationalRange`.
//!
//! ## Features
//!
//! - `thread-rng` (default): `Range::random_value_with_thread_rng`, sampling
//!   from the thread-local generator. All other sampling takes the generator
//!   explicitly.
//! - `serde`: `Serialize`/`Deserialize` for `Range<T>`, validated on input.
//!
//! ## Example
//!
//! ```rust
//! use numspan_range::IntegerRange;
//!
//! let range = IntegerRange::new(0, 10)?;
//! let moved = range.shift(5)?.trim(2)?;
//! assert_eq!(moved, IntegerRange::new(7, 13)?);
//! assert!(range.overlaps(&moved));
//! # Ok::<(), numspan_core::MathError>(())
//! ```

pub mod countable;
pub mod range;
pub mod scalar;
pub mod types;

pub use range::Range;
pub use scalar::Countable;
pub use types::{DoubleRange, IntegerRange, LongRange, RationalRange};
