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

//! # Numspan Core
//!
//! Exact numeric primitives shared by the numspan crates.
//!
//! ## Modules
//!
//! - `error`: The `MathError` taxonomy (invalid range, invalid argument,
//!   division by zero, missing value, overflow) and the `Result` alias used
//!   by every fallible operation in the workspace.
//! - `num`: The Euclidean `gcd` and the canonical `Rational` number.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for `Rational`. Deserialization goes
//!   through the normal constructor, so non-canonical input is reduced and a
//!   zero denominator is rejected.

pub mod error;
pub mod num;

pub use error::{MathError, Result};
pub use num::Rational;
