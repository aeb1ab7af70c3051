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

//! # Tasks
//!
//! A `Task` is one schedulable unit of work occupying the half-open time
//! window `[start, end)`. Two tasks whose windows only touch (`a.end() ==
//! b.start()`) do not overlap and may both be selected.
//!
//! Tasks carry no identity beyond their bounds: duplicates are legal and are
//! treated as independent entries by the selectors.
//!
//! Construction follows the usual split: `Task::new` asserts the invariant,
//! `Task::try_new` reports violations as an `InvalidTaskError`.

use stint_core::{math::window::TimeWindow, num::time::TimePoint};

/// Reasons a pair of bounds cannot form a task.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum InvalidTaskError<T>
where
    T: TimePoint,
{
    /// The start lies after the end.
    #[error("invalid task: start {start} is after end {end}")]
    StartAfterEnd { start: T, end: T },
    /// At least one bound is NaN or infinite.
    #[error("invalid task: bounds [{start}, {end}) are not finite")]
    NonFiniteBound { start: T, end: T },
}

/// An immutable task occupying the window `[start, end)`.
#[derive(Clone, Copy, PartialEq)]
pub struct Task<T>
where
    T: TimePoint,
{
    window: TimeWindow<T>,
}

impl<T> Task<T>
where
    T: TimePoint,
{
    /// Creates a new task.
    ///
    /// # Panics
    ///
    /// Panics if the bounds are not finite or if `start > end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stint_model::task::Task;
    ///
    /// let task = Task::new(1, 3);
    /// assert_eq!(task.start(), 1);
    /// assert_eq!(task.end(), 3);
    /// assert_eq!(task.duration(), 2);
    /// ```
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        match Self::try_new(start, end) {
            Ok(task) => task,
            Err(err) => panic!("{}", err),
        }
    }

    /// Creates a new task if the bounds are finite and ordered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stint_model::task::{InvalidTaskError, Task};
    ///
    /// assert!(Task::try_new(0, 10).is_ok());
    /// assert_eq!(
    ///     Task::try_new(5, 1),
    ///     Err(InvalidTaskError::StartAfterEnd { start: 5, end: 1 })
    /// );
    /// assert!(Task::try_new(0.0, f64::INFINITY).is_err());
    /// ```
    #[inline]
    pub fn try_new(start: T, end: T) -> Result<Self, InvalidTaskError<T>> {
        if !start.is_finite_time() || !end.is_finite_time() {
            return Err(InvalidTaskError::NonFiniteBound { start, end });
        }

        match TimeWindow::try_new(start, end) {
            Some(window) => Ok(Self { window }),
            None => Err(InvalidTaskError::StartAfterEnd { start, end }),
        }
    }

    /// Creates a new task without validating the bounds in release builds.
    ///
    /// The caller must ensure both bounds are finite and `start <= end`.
    #[inline]
    pub fn new_unchecked(start: T, end: T) -> Self {
        debug_assert!(
            start.is_finite_time() && end.is_finite_time(),
            "called `Task::new_unchecked` with non-finite bounds"
        );
        Self {
            window: TimeWindow::new_unchecked(start, end),
        }
    }

    /// Returns the inclusive start of the task.
    #[inline]
    pub const fn start(&self) -> T {
        self.window.start()
    }

    /// Returns the exclusive end of the task.
    #[inline]
    pub const fn end(&self) -> T {
        self.window.end()
    }

    /// Returns the time window occupied by the task.
    #[inline]
    pub const fn window(&self) -> TimeWindow<T> {
        self.window
    }

    /// Returns `end - start`.
    ///
    /// # Panics
    ///
    /// Panics if the duration is not representable in `T`. See
    /// `checked_duration`.
    #[inline]
    pub fn duration(&self) -> T {
        self.window.len()
    }

    /// Returns `end - start`, or `None` if it overflows `T`.
    #[inline]
    pub fn checked_duration(&self) -> Option<T> {
        self.window.checked_len()
    }

    /// Returns `true` if the windows of both tasks share at least one point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stint_model::task::Task;
    ///
    /// assert!(Task::new(1, 3).overlaps(&Task::new(2, 5)));
    /// assert!(!Task::new(1, 3).overlaps(&Task::new(3, 5)));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.window.overlaps(&other.window)
    }
}

impl<T> TryFrom<(T, T)> for Task<T>
where
    T: TimePoint,
{
    type Error = InvalidTaskError<T>;

    #[inline]
    fn try_from((start, end): (T, T)) -> Result<Self, Self::Error> {
        Self::try_new(start, end)
    }
}

impl<T> std::fmt::Debug for Task<T>
where
    T: TimePoint,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Task")
            .field("start", &self.start())
            .field("end", &self.end())
            .finish()
    }
}

impl<T> std::fmt::Display for Task<T>
where
    T: TimePoint,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_accessors() {
        let task = Task::new(4i64, 9);
        assert_eq!(task.start(), 4);
        assert_eq!(task.end(), 9);
        assert_eq!(task.duration(), 5);
        assert_eq!(task.window(), TimeWindow::new(4, 9));
    }

    #[test]
    fn test_zero_length_task_is_valid() {
        let task = Task::new(3, 3);
        assert_eq!(task.duration(), 0);
    }

    #[test]
    fn test_extreme_bounds_are_valid_without_a_duration() {
        let task = Task::new(i64::MIN, i64::MAX);
        assert_eq!(task.checked_duration(), None);
        assert!(task.overlaps(&Task::new(0, 1)));
        assert_eq!(Task::new(2i64, 7).checked_duration(), Some(5));
    }

    #[test]
    #[should_panic(expected = "invalid task: start 5 is after end 1")]
    fn test_new_panics_on_reversed_bounds() {
        let _ = Task::new(5, 1);
    }

    #[test]
    fn test_try_new_reports_reversed_bounds() {
        assert_eq!(
            Task::try_new(5i32, 1),
            Err(InvalidTaskError::StartAfterEnd { start: 5, end: 1 })
        );
    }

    #[test]
    fn test_try_new_rejects_non_finite_bounds() {
        assert!(matches!(
            Task::try_new(f64::NAN, 1.0),
            Err(InvalidTaskError::NonFiniteBound { .. })
        ));
        assert!(matches!(
            Task::try_new(0.0, f64::INFINITY),
            Err(InvalidTaskError::NonFiniteBound { .. })
        ));
        assert!(matches!(
            Task::try_new(f32::NEG_INFINITY, 0.0),
            Err(InvalidTaskError::NonFiniteBound { .. })
        ));
    }

    #[test]
    fn test_try_from_tuple() {
        let task = Task::try_from((1, 3)).unwrap();
        assert_eq!(task, Task::new(1, 3));
        assert!(Task::try_from((3, 1)).is_err());
    }

    #[test]
    fn test_touching_endpoints_do_not_overlap() {
        let a = Task::new(1, 3);
        let b = Task::new(3, 5);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_overlap_cases() {
        let a = Task::new(1, 3);
        assert!(a.overlaps(&Task::new(2, 5)));
        assert!(a.overlaps(&Task::new(0, 10)));
        assert!(a.overlaps(&a));
        assert!(!a.overlaps(&Task::new(5, 9)));
    }

    #[test]
    fn test_error_display() {
        let err = InvalidTaskError::StartAfterEnd { start: 7, end: 2 };
        assert_eq!(err.to_string(), "invalid task: start 7 is after end 2");

        let err = InvalidTaskError::NonFiniteBound {
            start: 0.0,
            end: f64::INFINITY,
        };
        assert_eq!(err.to_string(), "invalid task: bounds [0, inf) are not finite");
    }

    #[test]
    fn test_display_and_debug() {
        let task = Task::new(1, 3);
        assert_eq!(format!("{}", task), "[1, 3)");
        assert_eq!(format!("{:?}", task), "Task { start: 1, end: 3 }");
    }
}
