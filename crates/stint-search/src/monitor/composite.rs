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

use crate::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    stats::SearchStatistics,
};
use stint_core::num::time::TimePoint;
use stint_model::task::Task;

/// Fans every callback out to a list of member monitors.
///
/// Members are notified in insertion order. The search stops as soon as any
/// member asks for it, with the reason of the first such member.
///
/// ```rust
/// use std::time::Duration;
/// use stint_search::monitor::{
///     composite::CompositeMonitor, node_limit::NodeLimitMonitor, time_limit::TimeLimitMonitor,
/// };
///
/// let monitor = CompositeMonitor::<i64>::new()
///     .with_monitor(TimeLimitMonitor::new(Duration::from_secs(1)))
///     .with_monitor(NodeLimitMonitor::new(1_000_000));
/// assert_eq!(monitor.len(), 2);
/// ```
pub struct CompositeMonitor<'a, T> {
    monitors: Vec<Box<dyn SearchMonitor<T> + 'a>>,
}

impl<'a, T> CompositeMonitor<'a, T>
where
    T: TimePoint,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Appends `monitor` to the members.
    #[inline]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: SearchMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Appends `monitor` and returns the composite, for chained construction.
    #[inline]
    pub fn with_monitor<M>(mut self, monitor: M) -> Self
    where
        M: SearchMonitor<T> + 'a,
    {
        self.add_monitor(monitor);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }

    fn member_names(&self) -> Vec<&str> {
        self.monitors.iter().map(|monitor| monitor.name()).collect()
    }
}

impl<'a, T> Default for CompositeMonitor<'a, T>
where
    T: TimePoint,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> std::fmt::Debug for CompositeMonitor<'a, T>
where
    T: TimePoint,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeMonitor")
            .field("monitors", &self.member_names())
            .finish()
    }
}

impl<'a, T> FromIterator<Box<dyn SearchMonitor<T> + 'a>> for CompositeMonitor<'a, T>
where
    T: TimePoint,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn SearchMonitor<T> + 'a>>,
    {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> SearchMonitor<T> for CompositeMonitor<'a, T>
where
    T: TimePoint,
{
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_enter_search(&mut self, tasks: &[Task<T>]) {
        self.monitors
            .iter_mut()
            .for_each(|monitor| monitor.on_enter_search(tasks));
    }

    fn on_exit_search(&mut self, statistics: &SearchStatistics) {
        self.monitors
            .iter_mut()
            .for_each(|monitor| monitor.on_exit_search(statistics));
    }

    #[inline]
    fn on_step(&mut self, statistics: &SearchStatistics) {
        self.monitors
            .iter_mut()
            .for_each(|monitor| monitor.on_step(statistics));
    }

    fn on_selection_improved(&mut self, selection_size: usize, statistics: &SearchStatistics) {
        self.monitors
            .iter_mut()
            .for_each(|monitor| monitor.on_selection_improved(selection_size, statistics));
    }

    #[inline]
    fn search_command(&self) -> SearchCommand {
        self.monitors
            .iter()
            .map(|monitor| monitor.search_command())
            .find(|command| matches!(command, SearchCommand::Terminate(_)))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::{no_op::NoOpMonitor, node_limit::NodeLimitMonitor};

    type IntegerType = i64;

    struct CountingMonitor<'c> {
        steps: &'c mut u64,
    }

    impl<'c> SearchMonitor<IntegerType> for CountingMonitor<'c> {
        fn name(&self) -> &str {
            "CountingMonitor"
        }
        fn on_enter_search(&mut self, _tasks: &[Task<IntegerType>]) {}
        fn on_exit_search(&mut self, _statistics: &SearchStatistics) {}
        fn on_step(&mut self, _statistics: &SearchStatistics) {
            *self.steps += 1;
        }
        fn on_selection_improved(&mut self, _size: usize, _statistics: &SearchStatistics) {}
    }

    #[test]
    fn test_empty_composite_continues() {
        let monitor = CompositeMonitor::<IntegerType>::new();
        assert!(monitor.is_empty());
        assert_eq!(monitor.search_command(), SearchCommand::Continue);
    }

    #[test]
    fn test_events_are_forwarded_to_all_members() {
        let mut first = 0u64;
        let mut second = 0u64;
        {
            let mut monitor = CompositeMonitor::<IntegerType>::new();
            monitor.add_monitor(CountingMonitor { steps: &mut first });
            monitor.add_monitor(CountingMonitor { steps: &mut second });
            assert_eq!(monitor.len(), 2);

            let stats = SearchStatistics::default();
            monitor.on_step(&stats);
            monitor.on_step(&stats);
        }
        assert_eq!(first, 2);
        assert_eq!(second, 2);
    }

    #[test]
    fn test_with_monitor_chains() {
        let monitor = CompositeMonitor::<IntegerType>::new()
            .with_monitor(NoOpMonitor::new())
            .with_monitor(NodeLimitMonitor::new(3));
        assert_eq!(monitor.len(), 2);
        assert!(!monitor.is_empty());
    }

    #[test]
    fn test_first_terminating_member_wins() {
        let mut monitor = CompositeMonitor::<IntegerType>::new();
        monitor.add_monitor(NoOpMonitor::new());
        monitor.add_monitor(NodeLimitMonitor::new(1));

        let stats = SearchStatistics::default();
        monitor.on_enter_search(&[]);
        assert_eq!(monitor.search_command(), SearchCommand::Continue);

        monitor.on_step(&stats);
        match monitor.search_command() {
            SearchCommand::Terminate(reason) => assert_eq!(reason, "node limit reached"),
            other => panic!("expected Terminate, got {:?}", other),
        }
    }

    #[test]
    fn test_debug_lists_member_names() {
        let monitors: Vec<Box<dyn SearchMonitor<IntegerType>>> =
            vec![Box::new(NoOpMonitor::new()), Box::new(NodeLimitMonitor::new(5))];
        let monitor: CompositeMonitor<IntegerType> = monitors.into_iter().collect();
        assert_eq!(
            format!("{:?}", monitor),
            "CompositeMonitor { monitors: [\"NoOpMonitor\", \"NodeLimitMonitor\"] }"
        );
    }
}
