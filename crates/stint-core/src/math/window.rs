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

//! # Time Windows
//!
//! `TimeWindow<T>` is the span `[start, end)` a task occupies. The start is
//! part of the window, the end is not, so a window ending at `t` and one
//! starting at `t` are disjoint. Empty windows (`start == end`) are allowed;
//! they overlap nothing that starts or ends at their point.

use crate::num::time::TimePoint;

/// A validated half-open window `[start, end)` with `start <= end`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TimeWindow<T>
where
    T: TimePoint,
{
    start: T,
    end: T,
}

impl<T> TimeWindow<T>
where
    T: TimePoint,
{
    /// Creates a new window.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`, or if the bounds cannot be ordered (NaN).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stint_core::math::window::TimeWindow;
    ///
    /// let window = TimeWindow::new(2, 7);
    /// assert_eq!(window.len(), 5);
    /// ```
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        match Self::try_new(start, end) {
            Some(window) => window,
            None => panic!(
                "called `TimeWindow::new` with unordered bounds: start {} end {}",
                start, end
            ),
        }
    }

    /// Creates a new window, or `None` unless `start <= end`.
    ///
    /// ```rust
    /// # use stint_core::math::window::TimeWindow;
    ///
    /// assert!(TimeWindow::try_new(3, 3).is_some());
    /// assert!(TimeWindow::try_new(4, 3).is_none());
    /// assert!(TimeWindow::try_new(f64::NAN, 1.0).is_none());
    /// ```
    #[inline]
    pub fn try_new(start: T, end: T) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Creates a new window, checking `start <= end` in debug builds only.
    #[inline]
    pub fn new_unchecked(start: T, end: T) -> Self {
        debug_assert!(
            start <= end,
            "called `TimeWindow::new_unchecked` with unordered bounds: start {} end {}",
            start,
            end
        );
        Self { start, end }
    }

    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    #[inline]
    pub const fn end(&self) -> T {
        self.end
    }

    /// Returns `true` if the windows share at least one point:
    /// `!(self.end <= other.start || self.start >= other.end)`.
    ///
    /// ```rust
    /// # use stint_core::math::window::TimeWindow;
    ///
    /// let morning = TimeWindow::new(8, 12);
    /// assert!(morning.overlaps(&TimeWindow::new(11, 13)));
    /// assert!(!morning.overlaps(&TimeWindow::new(12, 13)));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.end <= other.start || self.start >= other.end)
    }

    /// Returns `true` if one window ends exactly where the other starts.
    #[inline]
    pub fn touches(&self, other: &Self) -> bool {
        self.end == other.start || other.end == self.start
    }

    /// Returns `true` if `t` lies in `[start, end)`.
    #[inline]
    pub fn contains(&self, t: T) -> bool {
        self.start <= t && t < self.end
    }

    /// Returns `end - start`.
    ///
    /// # Panics
    ///
    /// Panics if the length is not representable in `T`, as for
    /// `[i64::MIN, i64::MAX)`. Use `checked_len` for such windows.
    #[inline]
    pub fn len(&self) -> T {
        match self.checked_len() {
            Some(len) => len,
            None => panic!(
                "called `TimeWindow::len` on a window whose length overflows: start {} end {}",
                self.start, self.end
            ),
        }
    }

    /// Returns `end - start`, or `None` if the length is not representable
    /// in `T`.
    #[inline]
    pub fn checked_len(&self) -> Option<T> {
        self.end.checked_sub_time(&self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl<T> std::fmt::Display for TimeWindow<T>
where
    T: TimePoint,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl<T> From<std::ops::Range<T>> for TimeWindow<T>
where
    T: TimePoint,
{
    /// # Panics
    ///
    /// Panics if `range.start > range.end`.
    #[inline]
    fn from(range: std::ops::Range<T>) -> Self {
        Self::new(range.start, range.end)
    }
}
