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

//! Search monitoring interface
//!
//! Declares the `SearchMonitor` trait and `SearchCommand`. Callbacks track the
//! lifecycle of a selection run, and a monitor can stop the run by returning
//! `SearchCommand::Terminate` from `search_command`.
//!
//! Lifecycle
//! - enter -> (step -> command)* with improvements interleaved -> exit
//!
//! Methods take `&mut self`; monitors are single-threaded. Keep callbacks
//! cheap, `on_step` runs once per search node.

use crate::stats::SearchStatistics;
use stint_core::num::time::TimePoint;
use stint_model::task::Task;

/// Instruction returned by a monitor after each step.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum SearchCommand {
    #[default]
    Continue,
    Terminate(String),
}

impl std::fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Terminate(reason) => write!(f, "Terminate: {}", reason),
        }
    }
}

/// Trait for observing and controlling a selection run.
pub trait SearchMonitor<T>
where
    T: TimePoint,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called once before the first step.
    fn on_enter_search(&mut self, tasks: &[Task<T>]);
    /// Called once after the run has stopped, with the final statistics.
    fn on_exit_search(&mut self, statistics: &SearchStatistics);
    /// Called at each node of the search.
    fn on_step(&mut self, statistics: &SearchStatistics);
    /// Called when the best known selection grows to `selection_size` tasks.
    fn on_selection_improved(&mut self, selection_size: usize, statistics: &SearchStatistics);
    /// Called after each step to decide whether the run continues.
    fn search_command(&self) -> SearchCommand {
        SearchCommand::Continue
    }
}

impl<T, M> SearchMonitor<T> for &mut M
where
    T: TimePoint,
    M: SearchMonitor<T> + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn on_enter_search(&mut self, tasks: &[Task<T>]) {
        (**self).on_enter_search(tasks);
    }

    fn on_exit_search(&mut self, statistics: &SearchStatistics) {
        (**self).on_exit_search(statistics);
    }

    #[inline(always)]
    fn on_step(&mut self, statistics: &SearchStatistics) {
        (**self).on_step(statistics);
    }

    fn on_selection_improved(&mut self, selection_size: usize, statistics: &SearchStatistics) {
        (**self).on_selection_improved(selection_size, statistics);
    }

    #[inline(always)]
    fn search_command(&self) -> SearchCommand {
        (**self).search_command()
    }
}

impl<T> std::fmt::Debug for dyn SearchMonitor<T>
where
    T: TimePoint,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn SearchMonitor<T>
where
    T: TimePoint,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}
