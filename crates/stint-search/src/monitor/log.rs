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

use crate::{monitor::search_monitor::SearchMonitor, stats::SearchStatistics};
use std::time::{Duration, Instant};
use stint_core::num::time::TimePoint;
use stint_model::task::Task;

/// Reports search progress as `tracing` events.
///
/// Progress lines are emitted at most once per `log_interval`, and the clock is
/// only consulted when `(steps & clock_check_mask) == 0`.
#[derive(Debug, Clone)]
pub struct LogMonitor {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    steps: u64,
    best_selection_size: Option<usize>,
}

impl LogMonitor {
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
            steps: 0,
            best_selection_size: None,
        }
    }

    /// Returns the largest selection size reported so far.
    #[inline]
    pub fn best_selection_size(&self) -> Option<usize> {
        self.best_selection_size
    }

    fn log_progress(&mut self, statistics: &SearchStatistics) {
        let now = Instant::now();
        tracing::info!(
            elapsed_secs = now.duration_since(self.start_time).as_secs_f32(),
            nodes = statistics.nodes_explored,
            max_depth = statistics.max_depth,
            best = self.best_selection_size.unwrap_or(0),
            prunings = statistics.prunings_overlap,
            "search progress"
        );
        self.last_log_time = now;
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 4095)
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(log_interval: {}s, clock_check_mask: {})",
            self.log_interval.as_secs(),
            self.clock_check_mask
        )
    }
}

impl<T> SearchMonitor<T> for LogMonitor
where
    T: TimePoint,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self, tasks: &[Task<T>]) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.steps = 0;
        self.best_selection_size = None;
        tracing::info!(num_tasks = tasks.len(), "search started");
    }

    fn on_exit_search(&mut self, statistics: &SearchStatistics) {
        tracing::info!(
            nodes = statistics.nodes_explored,
            solutions = statistics.solutions_found,
            best = self.best_selection_size.unwrap_or(0),
            elapsed = ?statistics.time_total,
            "search finished"
        );
    }

    fn on_step(&mut self, statistics: &SearchStatistics) {
        self.steps = self.steps.wrapping_add(1);
        if (self.steps & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_progress(statistics);
        }
    }

    fn on_selection_improved(&mut self, selection_size: usize, statistics: &SearchStatistics) {
        self.best_selection_size = Some(selection_size);
        tracing::debug!(
            selection_size,
            nodes = statistics.nodes_explored,
            "selection improved"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    #[test]
    fn test_tracks_best_selection_size() {
        let mut monitor = LogMonitor::default();
        let stats = SearchStatistics::default();
        let tasks = [Task::<IntegerType>::new(0, 1)];

        SearchMonitor::<IntegerType>::on_enter_search(&mut monitor, &tasks);
        assert_eq!(monitor.best_selection_size(), None);

        SearchMonitor::<IntegerType>::on_selection_improved(&mut monitor, 1, &stats);
        SearchMonitor::<IntegerType>::on_selection_improved(&mut monitor, 3, &stats);
        assert_eq!(monitor.best_selection_size(), Some(3));

        SearchMonitor::<IntegerType>::on_enter_search(&mut monitor, &tasks);
        assert_eq!(monitor.best_selection_size(), None);
    }

    #[test]
    fn test_progress_updates_last_log_time() {
        let mut monitor = LogMonitor::new(Duration::ZERO, 0);
        let stats = SearchStatistics::default();
        let before = monitor.last_log_time;
        std::thread::sleep(Duration::from_millis(2));
        SearchMonitor::<IntegerType>::on_step(&mut monitor, &stats);
        assert!(monitor.last_log_time > before);
        assert_eq!(monitor.steps, 1);
    }

    #[test]
    fn test_display() {
        let monitor = LogMonitor::new(Duration::from_secs(2), 1023);
        assert_eq!(
            monitor.to_string(),
            "LogMonitor(log_interval: 2s, clock_check_mask: 1023)"
        );
    }
}
