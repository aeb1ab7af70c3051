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

use std::time::Duration;

/// Statistics collected during a single selection run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Total nodes visited (search tree nodes, or tasks swept by a greedy pass).
    pub nodes_explored: u64,
    /// Branches that included the current task.
    pub take_branches: u64,
    /// Branches that excluded the current task.
    pub skip_branches: u64,
    /// Take branches refused because the task overlapped the tentative selection.
    pub prunings_overlap: u64,
    /// The deepest level reached in the search tree.
    pub max_depth: u64,
    /// Number of times the best known selection improved.
    pub solutions_found: u64,
    /// Total time spent in the selector.
    pub time_total: Duration,
}

impl SearchStatistics {
    #[inline]
    pub fn on_node_explored(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add(1);
    }

    #[inline]
    pub fn on_take(&mut self) {
        self.take_branches = self.take_branches.saturating_add(1);
    }

    #[inline]
    pub fn on_skip(&mut self) {
        self.skip_branches = self.skip_branches.saturating_add(1);
    }

    #[inline]
    pub fn on_pruning_overlap(&mut self) {
        self.prunings_overlap = self.prunings_overlap.saturating_add(1);
    }

    #[inline]
    pub fn on_depth_update(&mut self, depth: u64) {
        self.max_depth = self.max_depth.max(depth);
    }

    #[inline]
    pub fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "  Nodes explored:       {}", self.nodes_explored)?;
        writeln!(f, "  Take branches:        {}", self.take_branches)?;
        writeln!(f, "  Skip branches:        {}", self.skip_branches)?;
        writeln!(f, "  Prunings (overlap):   {}", self.prunings_overlap)?;
        writeln!(f, "  Max depth reached:    {}", self.max_depth)?;
        writeln!(f, "  Solutions found:      {}", self.solutions_found)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_increment() {
        let mut stats = SearchStatistics::default();
        stats.on_node_explored();
        stats.on_node_explored();
        stats.on_take();
        stats.on_skip();
        stats.on_pruning_overlap();
        stats.on_solution_found();

        assert_eq!(stats.nodes_explored, 2);
        assert_eq!(stats.take_branches, 1);
        assert_eq!(stats.skip_branches, 1);
        assert_eq!(stats.prunings_overlap, 1);
        assert_eq!(stats.solutions_found, 1);
    }

    #[test]
    fn test_counters_saturate() {
        let mut stats = SearchStatistics {
            nodes_explored: u64::MAX,
            ..Default::default()
        };
        stats.on_node_explored();
        assert_eq!(stats.nodes_explored, u64::MAX);
    }

    #[test]
    fn test_depth_keeps_maximum() {
        let mut stats = SearchStatistics::default();
        stats.on_depth_update(3);
        stats.on_depth_update(7);
        stats.on_depth_update(2);
        assert_eq!(stats.max_depth, 7);
    }

    #[test]
    fn test_display_formats_all_fields() {
        let mut stats = SearchStatistics::default();
        stats.on_node_explored();
        stats.set_total_time(Duration::from_millis(1500));

        let rendered = format!("{}", stats);
        assert!(rendered.contains("Search Statistics:"), "missing header");
        assert!(rendered.contains("Nodes explored:       1"));
        assert!(rendered.contains("Prunings (overlap):   0"));
        assert!(rendered.contains("Total time:           1.50s"));
    }
}
