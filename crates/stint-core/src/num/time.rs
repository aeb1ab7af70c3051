// Copyright (c) 2025 Stint Contributors.
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

//! # Time Points
//!
//! `TimePoint` collects the bounds a scalar needs to serve as a task start or
//! end: basic arithmetic (`num_traits::Num`), type extrema
//! (`num_traits::Bounded`, used as a "minus infinity" sentinel by sweep
//! algorithms), a total comparison for sorting, and a finiteness check for
//! validation.
//!
//! Integers are always finite and compare with `Ord`. Floating point types
//! compare with `partial_cmp` and fall back to `total_cmp` only for NaN, so
//! `cmp_time` agrees with `PartialOrd` on every finite value (`-0.0` and
//! `0.0` are equal) and sorting never has to deal with an unordered pair.
//!
//! ## Usage
//!
//! ```rust
//! use stint_core::num::time::TimePoint;
//! use std::cmp::Ordering;
//!
//! assert_eq!(3i64.cmp_time(&5), Ordering::Less);
//! assert!(2.5f64.is_finite_time());
//! assert!(!f64::INFINITY.is_finite_time());
//! ```

use num_traits::{Bounded, Num};
use std::cmp::Ordering;

/// A scalar type usable as a task bound.
///
/// Implemented for `i8`, `i16`, `i32`, `i64`, `i128`, `isize`, their
/// unsigned counterparts, `f32` and `f64`.
pub trait TimePoint:
    Num + Bounded + Copy + PartialOrd + std::fmt::Debug + std::fmt::Display + Send + Sync
{
    /// Compares two time points under a total order.
    ///
    /// Agrees with `PartialOrd` wherever `partial_cmp` is defined.
    fn cmp_time(&self, other: &Self) -> Ordering;

    /// Returns `true` if the value is a finite time point.
    fn is_finite_time(&self) -> bool;

    /// Computes `self - other`, returning `None` if the difference is not
    /// representable in `Self`.
    fn checked_sub_time(&self, other: &Self) -> Option<Self>;
}

macro_rules! impl_time_point_for_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl TimePoint for $t {
                #[inline(always)]
                fn cmp_time(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }

                #[inline(always)]
                fn is_finite_time(&self) -> bool {
                    true
                }

                #[inline(always)]
                fn checked_sub_time(&self, other: &Self) -> Option<Self> {
                    <$t>::checked_sub(*self, *other)
                }
            }
        )*
    };
}

macro_rules! impl_time_point_for_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl TimePoint for $t {
                #[inline(always)]
                fn cmp_time(&self, other: &Self) -> Ordering {
                    self.partial_cmp(other)
                        .unwrap_or_else(|| <$t>::total_cmp(self, other))
                }

                #[inline(always)]
                fn is_finite_time(&self) -> bool {
                    <$t>::is_finite(*self)
                }

                #[inline(always)]
                fn checked_sub_time(&self, other: &Self) -> Option<Self> {
                    let difference = *self - *other;
                    difference.is_finite().then_some(difference)
                }
            }
        )*
    };
}

impl_time_point_for_int!(i8, i16, i32, i64, i128, isize);
impl_time_point_for_int!(u8, u16, u32, u64, u128, usize);
impl_time_point_for_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn min_of<T: TimePoint>() -> T {
        T::min_value()
    }

    #[test]
    fn test_integer_cmp_matches_ord() {
        assert_eq!(1i32.cmp_time(&2), Ordering::Less);
        assert_eq!(2i32.cmp_time(&2), Ordering::Equal);
        assert_eq!(3u8.cmp_time(&2), Ordering::Greater);
        assert_eq!((-5i64).cmp_time(&-7), Ordering::Greater);
    }

    #[test]
    fn test_integers_are_always_finite() {
        assert!(i64::MAX.is_finite_time());
        assert!(i64::MIN.is_finite_time());
        assert!(0usize.is_finite_time());
    }

    #[test]
    fn test_float_cmp_is_total() {
        assert_eq!(1.0f64.cmp_time(&2.0), Ordering::Less);
        assert_eq!(2.0f32.cmp_time(&2.0), Ordering::Equal);
        // NaN still has a place in the order.
        assert_eq!(f64::NAN.cmp_time(&f64::INFINITY), Ordering::Greater);
    }

    #[test]
    fn test_float_signed_zeros_compare_equal() {
        assert_eq!((-0.0f64).cmp_time(&0.0), Ordering::Equal);
        assert_eq!(0.0f32.cmp_time(&-0.0), Ordering::Equal);
        assert_eq!((-0.0f64).cmp_time(&-1.0), Ordering::Greater);
    }

    #[test]
    fn test_float_finiteness() {
        assert!(1.5f64.is_finite_time());
        assert!(!f64::NAN.is_finite_time());
        assert!(!f64::INFINITY.is_finite_time());
        assert!(!f32::NEG_INFINITY.is_finite_time());
    }

    #[test]
    fn test_checked_sub_time() {
        assert_eq!(7i64.checked_sub_time(&3), Some(4));
        assert_eq!(i64::MAX.checked_sub_time(&i64::MIN), None);
        assert_eq!(2u8.checked_sub_time(&3), None);
        assert_eq!(2.5f64.checked_sub_time(&0.5), Some(2.0));
        assert_eq!(f64::MAX.checked_sub_time(&f64::MIN), None);
    }

    #[test]
    fn test_min_value_is_below_everything_finite() {
        assert_eq!(min_of::<i32>(), i32::MIN);
        assert!(min_of::<f64>() <= -1.0e300);
        assert_eq!(min_of::<u16>(), 0);
    }
}
