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

//! # Time Limit Monitor
//!
//! Stops a selection run once a wall-clock budget is spent.
//!
//! Reading the clock on every node would dominate a cheap search step, so the
//! deadline is only compared when `(steps & clock_check_mask) == 0`. With the
//! default mask (`0x3FFF`) that is once every 16 384 steps; runs shorter than
//! that are never interrupted.
//!
//! ```rust
//! use std::time::Duration;
//! use stint_search::monitor::search_monitor::{SearchCommand, SearchMonitor};
//! use stint_search::monitor::time_limit::TimeLimitMonitor;
//!
//! let mut monitor = TimeLimitMonitor::new(Duration::from_secs(5));
//! SearchMonitor::<i64>::on_enter_search(&mut monitor, &[]);
//! assert_eq!(SearchMonitor::<i64>::search_command(&monitor), SearchCommand::Continue);
//! ```

use crate::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    stats::SearchStatistics,
};
use std::time::{Duration, Instant};
use stint_core::num::time::TimePoint;
use stint_model::task::Task;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLimitMonitor {
    budget: Duration,
    deadline: Instant,
    clock_check_mask: u64,
    steps: u64,
}

impl TimeLimitMonitor {
    const DEFAULT_CLOCK_CHECK_MASK: u64 = 0x3FFF;

    /// Creates a monitor with the default clock check mask.
    #[inline]
    pub fn new(budget: Duration) -> Self {
        Self::with_clock_check_mask(budget, Self::DEFAULT_CLOCK_CHECK_MASK)
    }

    /// Creates a monitor that reads the clock when `(steps & clock_check_mask) == 0`.
    /// A mask of `0` reads it on every step.
    #[inline]
    pub fn with_clock_check_mask(budget: Duration, clock_check_mask: u64) -> Self {
        Self {
            budget,
            deadline: Self::deadline_from_now(budget),
            clock_check_mask,
            steps: 0,
        }
    }

    /// Returns the configured budget.
    #[inline]
    pub fn time_limit(&self) -> Duration {
        self.budget
    }

    /// Budgets too large to represent as an `Instant` never expire.
    #[inline]
    fn deadline_from_now(budget: Duration) -> Instant {
        let now = Instant::now();
        now.checked_add(budget).unwrap_or(now + Duration::from_secs(u32::MAX as u64))
    }

    #[inline(always)]
    fn is_check_step(&self) -> bool {
        self.steps & self.clock_check_mask == 0
    }
}

impl<T> SearchMonitor<T> for TimeLimitMonitor
where
    T: TimePoint,
{
    fn name(&self) -> &str {
        "TimeLimitMonitor"
    }

    fn on_enter_search(&mut self, _tasks: &[Task<T>]) {
        self.deadline = Self::deadline_from_now(self.budget);
        self.steps = 0;
    }

    fn on_exit_search(&mut self, _statistics: &SearchStatistics) {}

    #[inline(always)]
    fn on_step(&mut self, _statistics: &SearchStatistics) {
        self.steps = self.steps.wrapping_add(1);
    }

    fn on_selection_improved(&mut self, _selection_size: usize, _statistics: &SearchStatistics) {}

    #[inline(always)]
    fn search_command(&self) -> SearchCommand {
        if self.is_check_step() && Instant::now() >= self.deadline {
            SearchCommand::Terminate("time limit reached".to_string())
        } else {
            SearchCommand::Continue
        }
    }
}
