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

//! Greedy selector
//!
//! Earliest end time first: order the tasks by ascending end, then sweep once
//! and accept every task that starts no earlier than the end of the last
//! accepted task. `O(n log n)`, and optimal for unweighted interval scheduling
//! on a single resource.
//!
//! The caller's slice is never sorted in place. The selector sorts a
//! permutation of task indices instead. Equal ends are ordered by ascending
//! start: a zero-length task `[e, e)` is compatible with a task ending at `e`,
//! and must be swept after it. The sort is stable, so fully equal tasks keep
//! input order and the reported selection is deterministic.

use crate::selector::Selector;
use stint_core::num::time::TimePoint;
use stint_model::{index::TaskIndex, selection::Selection, task::Task};
use stint_search::{
    monitor::{
        no_op::NoOpMonitor,
        search_monitor::{SearchCommand, SearchMonitor},
    },
    result::SelectionOutcome,
    stats::SearchStatistics,
};

/// Earliest-end-time maximum interval scheduling.
#[derive(Clone, Debug, Default)]
pub struct GreedySelector {
    order: Vec<usize>,
}

impl GreedySelector {
    /// Creates a new greedy selector.
    #[inline]
    pub fn new() -> Self {
        Self { order: Vec::new() }
    }

    /// Creates a new greedy selector with its ordering buffer sized for
    /// `num_tasks`.
    #[inline]
    pub fn preallocated(num_tasks: usize) -> Self {
        Self {
            order: Vec::with_capacity(num_tasks),
        }
    }

    /// Returns the maximum number of pairwise non-overlapping tasks.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stint_model::task::Task;
    /// # use stint_select::greedy::GreedySelector;
    ///
    /// let tasks = [Task::new(0, 10), Task::new(2, 8), Task::new(3, 7)];
    /// assert_eq!(GreedySelector::new().count(&tasks), 1);
    /// ```
    pub fn count<T>(&mut self, tasks: &[Task<T>]) -> usize
    where
        T: TimePoint,
    {
        self.sort_by_end(tasks);

        let mut last_end = T::min_value();
        let mut count = 0;
        for &i in &self.order {
            let task = &tasks[i];
            if task.start() >= last_end {
                count += 1;
                last_end = task.end();
            }
        }

        self.order.clear();
        count
    }

    /// Returns the selection produced by the sweep.
    #[inline]
    pub fn select<T>(&mut self, tasks: &[Task<T>]) -> Selection
    where
        T: TimePoint,
    {
        self.solve(tasks, NoOpMonitor::new()).into_selection()
    }

    /// Runs the sweep under `monitor`.
    ///
    /// The monitor is stepped once per swept task and notified of every
    /// accepted task. A completed sweep is `Optimal`; a sweep stopped by the
    /// monitor is `Feasible` with the tasks accepted so far.
    pub fn solve<T, S>(&mut self, tasks: &[Task<T>], mut monitor: S) -> SelectionOutcome
    where
        T: TimePoint,
        S: SearchMonitor<T>,
    {
        let start_time = std::time::Instant::now();
        let mut stats = SearchStatistics::default();

        tracing::debug!(
            num_tasks = tasks.len(),
            monitor = monitor.name(),
            "greedy sweep started"
        );
        monitor.on_enter_search(tasks);

        self.sort_by_end(tasks);

        let mut last_end = T::min_value();
        let mut accepted: Vec<TaskIndex> = Vec::new();
        let mut abort_reason = None;

        for (depth, &i) in self.order.iter().enumerate() {
            stats.on_node_explored();
            stats.on_depth_update(depth as u64);
            monitor.on_step(&stats);

            if let SearchCommand::Terminate(reason) = monitor.search_command() {
                abort_reason = Some(reason);
                break;
            }

            let task = &tasks[i];
            if task.start() >= last_end {
                stats.on_take();
                accepted.push(TaskIndex::new(i));
                last_end = task.end();
                stats.on_solution_found();
                tracing::trace!(task = i, size = accepted.len(), "task accepted");
                monitor.on_selection_improved(accepted.len(), &stats);
            } else {
                stats.on_pruning_overlap();
            }
        }

        self.order.clear();
        stats.set_total_time(start_time.elapsed());
        monitor.on_exit_search(&stats);

        let selection = Selection::new(accepted);
        tracing::debug!(
            count = selection.len(),
            elapsed = ?stats.time_total,
            aborted = abort_reason.is_some(),
            "greedy sweep finished"
        );

        match abort_reason {
            Some(reason) => SelectionOutcome::aborted(selection, reason, stats),
            None => SelectionOutcome::optimal(selection, stats),
        }
    }

    /// Fills `order` with the task indices, stably sorted by ascending end,
    /// then ascending start.
    #[inline]
    fn sort_by_end<T>(&mut self, tasks: &[Task<T>])
    where
        T: TimePoint,
    {
        self.order.clear();
        self.order.extend(0..tasks.len());
        self.order.sort_by(|&a, &b| {
            let (a, b) = (&tasks[a], &tasks[b]);
            a.end()
                .cmp_time(&b.end())
                .then_with(|| a.start().cmp_time(&b.start()))
        });
    }
}

impl<T> Selector<T> for GreedySelector
where
    T: TimePoint,
{
    fn name(&self) -> &str {
        "GreedySelector"
    }

    fn select(&mut self, tasks: &[Task<T>]) -> Selection {
        GreedySelector::select(self, tasks)
    }

    fn solve_monitored(
        &mut self,
        tasks: &[Task<T>],
        monitor: &mut dyn SearchMonitor<T>,
    ) -> SelectionOutcome {
        self.solve(tasks, monitor)
    }

    fn count(&mut self, tasks: &[Task<T>]) -> usize {
        GreedySelector::count(self, tasks)
    }
}

/// Returns the maximum number of pairwise non-overlapping tasks in `tasks`
/// using the earliest-end-time sweep.
#[inline]
pub fn count<T>(tasks: &[Task<T>]) -> usize
where
    T: TimePoint,
{
    GreedySelector::preallocated(tasks.len()).count(tasks)
}

/// Returns the earliest-end-time selection of `tasks`.
#[inline]
pub fn select<T>(tasks: &[Task<T>]) -> Selection
where
    T: TimePoint,
{
    GreedySelector::preallocated(tasks.len()).select(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stint_search::{monitor::node_limit::NodeLimitMonitor, result::TerminationReason};

    fn tasks(pairs: &[(i64, i64)]) -> Vec<Task<i64>> {
        pairs.iter().map(|&(s, e)| Task::new(s, e)).collect()
    }

    fn indices(raw: &[usize]) -> Vec<TaskIndex> {
        raw.iter().copied().map(TaskIndex::new).collect()
    }

    #[test]
    fn test_empty_input_counts_zero() {
        let empty: Vec<Task<i64>> = Vec::new();
        assert_eq!(count(&empty), 0);
        assert!(select(&empty).is_empty());
    }

    #[test]
    fn test_mixed_overlaps() {
        let input = tasks(&[(1, 3), (2, 5), (4, 6), (6, 7), (5, 9), (8, 10)]);
        assert_eq!(count(&input), 4);
        assert_eq!(select(&input).indices(), indices(&[0, 2, 3, 5]).as_slice());
    }

    #[test]
    fn test_touching_tasks_are_all_selected() {
        let input = tasks(&[(1, 3), (3, 5), (5, 7)]);
        assert_eq!(count(&input), 3);
    }

    #[test]
    fn test_fully_overlapping_tasks() {
        let input = tasks(&[(0, 10), (2, 8), (3, 7)]);
        assert_eq!(count(&input), 1);
        assert_eq!(select(&input).indices(), indices(&[2]).as_slice());
    }

    #[test]
    fn test_input_order_is_irrelevant() {
        let sorted = tasks(&[(1, 3), (2, 5), (4, 6), (6, 7), (5, 9), (8, 10)]);
        let shuffled = tasks(&[(8, 10), (5, 9), (1, 3), (6, 7), (2, 5), (4, 6)]);
        assert_eq!(count(&sorted), count(&shuffled));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let input = tasks(&[(5, 9), (1, 3), (2, 5), (8, 10)]);
        let snapshot = input.clone();
        let _ = count(&input);
        let _ = select(&input);
        assert_eq!(input, snapshot);
    }

    #[test]
    fn test_shared_boundaries() {
        let input = tasks(&[(1, 3), (1, 2), (2, 3)]);
        assert_eq!(count(&input), 2);
        assert_eq!(select(&input).indices(), indices(&[1, 2]).as_slice());
    }

    #[test]
    fn test_equal_ends_prefer_earlier_start() {
        let input = tasks(&[(2, 5), (1, 5), (3, 5)]);
        assert_eq!(select(&input).indices(), indices(&[1]).as_slice());
    }

    #[test]
    fn test_fully_equal_tasks_keep_input_order() {
        let input = tasks(&[(2, 5), (2, 5), (2, 5)]);
        assert_eq!(select(&input).indices(), indices(&[0]).as_slice());
    }

    #[test]
    fn test_zero_length_task_after_task_with_same_end() {
        // [5, 5) sorts after [3, 5) even though it comes first in the input.
        let input = tasks(&[(5, 5), (3, 5)]);
        assert_eq!(count(&input), 2);
    }

    #[test]
    fn test_sentinel_accepts_minimum_start() {
        let input = vec![Task::new(i64::MIN, i64::MIN + 1), Task::new(i64::MIN + 1, 0)];
        assert_eq!(count(&input), 2);
    }

    #[test]
    fn test_zero_length_tasks() {
        // Two [3, 3) windows are compatible with each other but not with [1, 5).
        let input = tasks(&[(3, 3), (3, 3), (1, 5)]);
        assert_eq!(count(&input), 2);
    }

    #[test]
    fn test_statistics() {
        let input = tasks(&[(1, 3), (2, 5), (4, 6), (6, 7), (5, 9), (8, 10)]);
        let outcome = GreedySelector::new().solve(&input, NoOpMonitor::new());
        let stats = outcome.statistics();

        assert!(outcome.is_optimal());
        assert_eq!(stats.nodes_explored, 6);
        assert_eq!(stats.take_branches, 4);
        assert_eq!(stats.prunings_overlap, 2);
        assert_eq!(stats.solutions_found, 4);
    }

    #[test]
    fn test_monitor_abort_yields_feasible_prefix() {
        let input: Vec<Task<i64>> = (0..10).map(|i| Task::new(i, i + 1)).collect();
        let outcome = GreedySelector::new().solve(&input, NodeLimitMonitor::new(4));

        assert!(!outcome.is_optimal());
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::Aborted("node limit reached".to_string())
        );
        assert_eq!(outcome.count(), 3);
        assert!(outcome.selection().is_pairwise_disjoint(&input));
    }

    #[test]
    fn test_repeated_select_is_identical() {
        let input = tasks(&[(4, 9), (0, 2), (1, 4), (3, 5), (5, 5), (6, 7), (7, 9), (3, 5)]);
        let mut selector = GreedySelector::new();

        let first = selector.select(&input);
        let second = selector.select(&input);
        assert_eq!(first, second);
        assert_eq!(first, select(&input));
    }

    #[test]
    fn test_signed_zero_end_ties_with_zero() {
        // -0.0 == 0.0, so [-0.0, -0.0) must sort after [-3.0, 0.0).
        let input = vec![Task::new(-0.0f64, -0.0), Task::new(-3.0, 0.0)];
        assert_eq!(count(&input), 2);
        assert_eq!(select(&input).indices(), indices(&[0, 1]).as_slice());
    }

    #[test]
    fn test_count_matches_select() {
        let input = tasks(&[(0, 2), (1, 4), (3, 5), (4, 8), (6, 7), (7, 9), (8, 12)]);
        let mut selector = GreedySelector::new();
        assert_eq!(selector.count(&input), selector.select(&input).len());
    }
}
