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

//! # Node Limit Monitor
//!
//! Caps the number of search nodes a run may visit. Unlike a wall-clock
//! budget, a node budget is deterministic: the same input and the same limit
//! always stop at the same point of the search tree.

use crate::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    stats::SearchStatistics,
};
use stint_core::num::time::TimePoint;
use stint_model::task::Task;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeLimitMonitor {
    node_limit: u64,
    nodes: u64,
}

impl NodeLimitMonitor {
    #[inline]
    pub fn new(node_limit: u64) -> Self {
        Self {
            node_limit,
            nodes: 0,
        }
    }

    /// Returns the configured budget.
    #[inline]
    pub fn node_limit(&self) -> u64 {
        self.node_limit
    }

    /// Returns the number of steps observed since the search started.
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl<T> SearchMonitor<T> for NodeLimitMonitor
where
    T: TimePoint,
{
    fn name(&self) -> &str {
        "NodeLimitMonitor"
    }

    fn on_enter_search(&mut self, _tasks: &[Task<T>]) {
        self.nodes = 0;
    }

    fn on_exit_search(&mut self, _statistics: &SearchStatistics) {}

    #[inline(always)]
    fn on_step(&mut self, _statistics: &SearchStatistics) {
        self.nodes = self.nodes.saturating_add(1);
    }

    fn on_selection_improved(&mut self, _selection_size: usize, _statistics: &SearchStatistics) {}

    #[inline(always)]
    fn search_command(&self) -> SearchCommand {
        if self.nodes >= self.node_limit {
            return SearchCommand::Terminate("node limit reached".to_string());
        }
        SearchCommand::Continue
    }
}
