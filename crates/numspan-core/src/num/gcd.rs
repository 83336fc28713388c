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

use num_traits::PrimInt;

/// Greatest common divisor by the Euclidean algorithm.
///
/// `gcd(p, 0) == p`. The algorithm uses the truncating remainder of the
/// primitive type, so for signed inputs the sign of the result follows the
/// last non-zero remainder. Callers that need a magnitude pass non-negative
/// inputs (as rational normalization does).
///
/// # Examples
///
/// ```rust
/// # use numspan_core::num::gcd::gcd;
/// assert_eq!(gcd(12, 18), 6);
/// assert_eq!(gcd(7u64, 0), 7);
/// assert_eq!(gcd(0i32, 0), 0);
/// ```
#[inline]
pub fn gcd<T>(mut p: T, mut q: T) -> T
where
    T: PrimInt,
{
    while q != T::zero() {
        let r = q;
        q = p % q;
        p = r;
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_zero() {
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(5, 0), 5);
        assert_eq!(gcd(0, 5), 5);
    }

    #[test]
    fn test_gcd_self_and_double() {
        for n in [1i64, 2, 17, 360, 46_340] {
            assert_eq!(gcd(n, n), n);
            assert_eq!(gcd(n, n * 2), n);
        }
    }

    #[test]
    fn test_gcd_coprime() {
        assert_eq!(gcd(35, 64), 1);
        assert_eq!(gcd(1u8, 255), 1);
    }

    #[test]
    fn test_gcd_negative_numerator() {
        // The sign follows the truncating remainder.
        assert_eq!(gcd(-12, 8), -4);
        assert_eq!(gcd(-12, 8), -gcd(12, 8));
    }

    #[test]
    fn test_gcd_wide_types() {
        assert_eq!(gcd(i64::MAX, 1), 1);
        assert_eq!(gcd(1u128 << 100, 1u128 << 60), 1u128 << 60);
    }
}
