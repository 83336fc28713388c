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

//! # Errors
//!
//! The error taxonomy shared by every numspan crate. All constructors and
//! transformations either return a fully valid value or one of these errors;
//! no partially built value is ever observable.

use thiserror::Error;

/// Convenience alias used throughout the workspace.
pub type Result<T, E = MathError> = std::result::Result<T, E>;

/// The error type for range and rational operations.
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
pub enum MathError {
    /// A range was requested whose maximum is smaller than its minimum,
    /// or whose endpoints cannot be ordered at all (e.g. `NaN`).
    #[error("Invalid range: maximum={to} cannot be less than minimum={from}")]
    InvalidRange { from: String, to: String },

    /// An argument violated the precondition of the operation.
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },

    /// A rational was divided by, or inverted from, zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// A required value was absent.
    #[error("Missing value: {name} cannot be absent")]
    MissingValue { name: &'static str },

    /// The exact result does not fit the component type.
    #[error("Arithmetic overflow in {operation}")]
    Overflow { operation: &'static str },
}

impl MathError {
    /// Builds an [`MathError::InvalidRange`] from the offending endpoints.
    pub fn invalid_range<T>(from: &T, to: &T) -> Self
    where
        T: std::fmt::Debug,
    {
        Self::InvalidRange {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    /// Shorthand for a negative amount passed to an amount-restricted operation.
    #[inline]
    pub const fn negative_amount() -> Self {
        Self::InvalidArgument {
            reason: "amount cannot be negative",
        }
    }
}
