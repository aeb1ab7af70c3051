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

//! The overlap predicate shared by both selectors.
//!
//! Tasks occupy half-open windows `[start, end)`. Two tasks do not overlap
//! when one ends at or before the other starts, so touching endpoints are
//! compatible. Both selectors depend on this convention being applied exactly.

use stint_core::num::time::TimePoint;
use stint_model::task::Task;

/// Returns `true` if the windows of `a` and `b` intersect.
///
/// # Examples
///
/// ```rust
/// # use stint_model::task::Task;
/// # use stint_select::overlap::overlaps;
///
/// assert!(overlaps(&Task::new(1, 3), &Task::new(2, 5)));
/// assert!(!overlaps(&Task::new(1, 3), &Task::new(3, 5)));
/// ```
#[inline(always)]
pub fn overlaps<T>(a: &Task<T>, b: &Task<T>) -> bool
where
    T: TimePoint,
{
    a.overlaps(b)
}

/// Returns `true` if `task` overlaps at least one task yielded by `others`.
#[inline]
pub fn overlaps_any<'t, T, I>(task: &Task<T>, others: I) -> bool
where
    T: TimePoint + 't,
    I: IntoIterator<Item = &'t Task<T>>,
{
    others.into_iter().any(|other| overlaps(task, other))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(start: i64, end: i64) -> Task<i64> {
        Task::new(start, end)
    }

    #[test]
    fn test_touching_endpoints_do_not_overlap() {
        assert!(!overlaps(&t(1, 3), &t(3, 5)));
        assert!(!overlaps(&t(3, 5), &t(1, 3)));
    }

    #[test]
    fn test_partial_and_full_overlap() {
        assert!(overlaps(&t(1, 3), &t(2, 5)));
        assert!(overlaps(&t(0, 10), &t(2, 8)));
        assert!(overlaps(&t(2, 8), &t(0, 10)));
    }

    #[test]
    fn test_identical_tasks_overlap() {
        assert!(overlaps(&t(4, 6), &t(4, 6)));
    }

    #[test]
    fn test_disjoint_tasks() {
        assert!(!overlaps(&t(1, 2), &t(5, 9)));
        assert!(!overlaps(&t(5, 9), &t(1, 2)));
    }

    #[test]
    fn test_float_bounds() {
        let a = Task::new(0.5, 1.25);
        assert!(overlaps(&a, &Task::new(1.0, 2.0)));
        assert!(!overlaps(&a, &Task::new(1.25, 2.0)));
    }

    #[test]
    fn test_overlaps_any() {
        let selected = [t(1, 3), t(6, 7)];
        assert!(overlaps_any(&t(2, 4), &selected));
        assert!(overlaps_any(&t(5, 9), &selected));
        assert!(!overlaps_any(&t(3, 6), &selected));
        assert!(!overlaps_any(&t(3, 6), &[]));
    }
}
