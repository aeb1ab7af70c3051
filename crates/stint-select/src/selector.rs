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

use stint_core::num::time::TimePoint;
use stint_model::{selection::Selection, task::Task};
use stint_search::{monitor::search_monitor::SearchMonitor, result::SelectionOutcome};

/// A maximum interval scheduling algorithm.
///
/// Implementations are pure with respect to the task slice: it is never
/// reordered or modified, and nothing observable survives from one call to the
/// next. The `&mut self` receiver only lets a selector reuse scratch buffers.
pub trait Selector<T>
where
    T: TimePoint,
{
    /// Returns the name of the selector.
    fn name(&self) -> &str;

    /// Returns a maximum set of pairwise non-overlapping tasks.
    fn select(&mut self, tasks: &[Task<T>]) -> Selection;

    /// Runs the selector under a dynamically dispatched monitor.
    fn solve_monitored(
        &mut self,
        tasks: &[Task<T>],
        monitor: &mut dyn SearchMonitor<T>,
    ) -> SelectionOutcome;

    /// Returns the size of a maximum set of pairwise non-overlapping tasks.
    #[inline]
    fn count(&mut self, tasks: &[Task<T>]) -> usize {
        self.select(tasks).len()
    }
}

impl<T> std::fmt::Debug for dyn Selector<T>
where
    T: TimePoint,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Selector({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn Selector<T>
where
    T: TimePoint,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Selector({})", self.name())
    }
}
