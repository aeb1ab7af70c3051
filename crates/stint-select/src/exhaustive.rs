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

//! Exhaustive selector
//!
//! Explores every include/exclude decision over the task sequence and returns
//! the true maximum number of pairwise non-overlapping tasks. At each index the
//! search first skips the task, then takes it if it overlaps nothing on the
//! trail. A leaf is reached at the end of the sequence; the trail at that point
//! is a candidate selection.
//!
//! The tentative selection is a trail: a take pushes the task index and the
//! return from that branch pops it, so sibling branches never observe each
//! other's picks. Nothing is memoized.
//!
//! The running time is `O(2^n)` and the recursion depth is `n`. Callers keep
//! inputs small (see `ExhaustiveSelector::DEFAULT_TASK_LIMIT`) or bound the run
//! with a monitor.

use crate::{overlap::overlaps_any, selector::Selector};
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

/// Brute-force maximum interval scheduling.
///
/// The selector owns its trail and best-selection buffers so repeated calls
/// do not reallocate. Both buffers are cleared after every run; no state is
/// carried from one call to the next.
#[derive(Clone, Debug, Default)]
pub struct ExhaustiveSelector {
    trail: Vec<TaskIndex>,
    best: Vec<TaskIndex>,
}

impl ExhaustiveSelector {
    /// Largest input the selector is expected to handle in reasonable time.
    pub const DEFAULT_TASK_LIMIT: usize = 25;

    /// Creates a new exhaustive selector.
    #[inline]
    pub fn new() -> Self {
        Self {
            trail: Vec::new(),
            best: Vec::new(),
        }
    }

    /// Creates a new exhaustive selector with buffers sized for `num_tasks`.
    #[inline]
    pub fn preallocated(num_tasks: usize) -> Self {
        Self {
            trail: Vec::with_capacity(num_tasks),
            best: Vec::with_capacity(num_tasks),
        }
    }

    /// Returns the maximum number of pairwise non-overlapping tasks.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stint_model::task::Task;
    /// # use stint_select::exhaustive::ExhaustiveSelector;
    ///
    /// let tasks = [Task::new(1, 3), Task::new(3, 5), Task::new(5, 7)];
    /// assert_eq!(ExhaustiveSelector::new().count(&tasks), 3);
    /// ```
    #[inline]
    pub fn count<T>(&mut self, tasks: &[Task<T>]) -> usize
    where
        T: TimePoint,
    {
        self.select(tasks).len()
    }

    /// Returns one maximum selection: the first maximum reached in
    /// skip-before-take order.
    #[inline]
    pub fn select<T>(&mut self, tasks: &[Task<T>]) -> Selection
    where
        T: TimePoint,
    {
        self.solve(tasks, NoOpMonitor::new()).into_selection()
    }

    /// Runs the search under `monitor`.
    ///
    /// The monitor is stepped once per search node. If it asks to terminate,
    /// the outcome is `Feasible` with the largest selection seen so far and
    /// the monitor's reason; otherwise it is `Optimal`.
    pub fn solve<T, S>(&mut self, tasks: &[Task<T>], mut monitor: S) -> SelectionOutcome
    where
        T: TimePoint,
        S: SearchMonitor<T>,
    {
        if tasks.len() > Self::DEFAULT_TASK_LIMIT {
            tracing::warn!(
                num_tasks = tasks.len(),
                limit = Self::DEFAULT_TASK_LIMIT,
                "exhaustive selection above the practical task limit"
            );
        }

        self.trail.reserve(tasks.len());
        self.best.reserve(tasks.len());

        let session = ExhaustiveSearchSession::new(self, tasks, &mut monitor);
        let outcome = session.run();
        self.reset();
        outcome
    }

    /// Clears the trail and the best selection without releasing memory.
    #[inline]
    fn reset(&mut self) {
        self.trail.clear();
        self.best.clear();
    }
}

impl<T> Selector<T> for ExhaustiveSelector
where
    T: TimePoint,
{
    fn name(&self) -> &str {
        "ExhaustiveSelector"
    }

    fn select(&mut self, tasks: &[Task<T>]) -> Selection {
        ExhaustiveSelector::select(self, tasks)
    }

    fn solve_monitored(
        &mut self,
        tasks: &[Task<T>],
        monitor: &mut dyn SearchMonitor<T>,
    ) -> SelectionOutcome {
        self.solve(tasks, monitor)
    }
}

/// State of a single exhaustive run.
struct ExhaustiveSearchSession<'a, T, S>
where
    T: TimePoint,
    S: SearchMonitor<T>,
{
    selector: &'a mut ExhaustiveSelector,
    tasks: &'a [Task<T>],
    monitor: &'a mut S,
    stats: SearchStatistics,
    abort_reason: Option<String>,
    start_time: std::time::Instant,
}

impl<'a, T, S> std::fmt::Debug for ExhaustiveSearchSession<'a, T, S>
where
    T: TimePoint,
    S: SearchMonitor<T>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExhaustiveSearchSession")
            .field("num_tasks", &self.tasks.len())
            .field("trail", &self.selector.trail)
            .field("best", &self.selector.best)
            .field("stats", &self.stats)
            .field("abort_reason", &self.abort_reason)
            .finish()
    }
}

impl<'a, T, S> ExhaustiveSearchSession<'a, T, S>
where
    T: TimePoint,
    S: SearchMonitor<T>,
{
    #[inline]
    fn new(selector: &'a mut ExhaustiveSelector, tasks: &'a [Task<T>], monitor: &'a mut S) -> Self {
        Self {
            selector,
            tasks,
            monitor,
            stats: SearchStatistics::default(),
            abort_reason: None,
            start_time: std::time::Instant::now(),
        }
    }

    fn run(mut self) -> SelectionOutcome {
        tracing::debug!(
            num_tasks = self.tasks.len(),
            monitor = self.monitor.name(),
            "exhaustive search started"
        );
        self.monitor.on_enter_search(self.tasks);

        let count = self.explore(0);

        // An interrupted branch may hold a longer partial selection than any
        // leaf reached so far; every trail prefix is pairwise disjoint.
        if self.abort_reason.is_some() && self.selector.trail.len() > self.selector.best.len() {
            self.selector.best.clone_from(&self.selector.trail);
        }

        self.stats.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_search(&self.stats);

        let selection = Selection::new(self.selector.best.clone());
        tracing::debug!(
            count = selection.len(),
            nodes = self.stats.nodes_explored,
            elapsed = ?self.stats.time_total,
            aborted = self.abort_reason.is_some(),
            "exhaustive search finished"
        );

        match self.abort_reason {
            Some(reason) => SelectionOutcome::aborted(selection, reason, self.stats),
            None => {
                debug_assert_eq!(count, selection.len());
                SelectionOutcome::optimal(selection, self.stats)
            }
        }
    }

    /// Returns the maximum selection size reachable from the node at `index`
    /// given the current trail.
    fn explore(&mut self, index: usize) -> usize {
        self.stats.on_node_explored();
        self.stats.on_depth_update(index as u64);
        self.monitor.on_step(&self.stats);

        if let SearchCommand::Terminate(reason) = self.monitor.search_command() {
            self.abort_reason = Some(reason);
            return self.selector.trail.len();
        }

        if index == self.tasks.len() {
            return self.handle_leaf();
        }

        self.stats.on_skip();
        let skip = self.explore(index + 1);
        if self.abort_reason.is_some() {
            return skip;
        }

        let task = &self.tasks[index];
        let tasks = self.tasks;
        let blocked = overlaps_any(
            task,
            self.selector.trail.iter().map(|&picked| &tasks[picked.get()]),
        );
        if blocked {
            self.stats.on_pruning_overlap();
            return skip;
        }

        self.stats.on_take();
        self.selector.trail.push(TaskIndex::new(index));
        let take = self.explore(index + 1);
        if self.abort_reason.is_some() {
            // Leave the trail in place so `run` can recover it.
            return skip.max(take);
        }
        self.selector.trail.pop();

        skip.max(take)
    }

    #[inline]
    fn handle_leaf(&mut self) -> usize {
        let size = self.selector.trail.len();
        if size > self.selector.best.len() {
            self.selector.best.clone_from(&self.selector.trail);
            self.stats.on_solution_found();
            tracing::trace!(size, nodes = self.stats.nodes_explored, "selection improved");
            self.monitor.on_selection_improved(size, &self.stats);
        }
        size
    }
}

/// Returns the maximum number of pairwise non-overlapping tasks in `tasks`
/// by exhaustive search.
#[inline]
pub fn count<T>(tasks: &[Task<T>]) -> usize
where
    T: TimePoint,
{
    ExhaustiveSelector::preallocated(tasks.len()).count(tasks)
}

/// Returns one maximum selection of `tasks` by exhaustive search.
#[inline]
pub fn select<T>(tasks: &[Task<T>]) -> Selection
where
    T: TimePoint,
{
    ExhaustiveSelector::preallocated(tasks.len()).select(tasks)
}
