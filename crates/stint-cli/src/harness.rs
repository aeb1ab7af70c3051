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

//! Runs every selector on one instance and compares the results.

use std::time::Duration;
use stint_model::task::Task;
use stint_search::{
    monitor::{composite::CompositeMonitor, log::LogMonitor, time_limit::TimeLimitMonitor},
    result::SelectionOutcome,
};
use stint_select::{exhaustive::ExhaustiveSelector, greedy::GreedySelector, selector::Selector};

/// Limits applied to a comparison run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonConfig {
    /// Largest instance the exhaustive selector is run on.
    pub exhaustive_limit: usize,
    /// Wall-clock budget for the exhaustive selector.
    pub time_limit: Option<Duration>,
    /// Attach a `LogMonitor` to every run.
    pub log_progress: bool,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            exhaustive_limit: ExhaustiveSelector::DEFAULT_TASK_LIMIT,
            time_limit: None,
            log_progress: false,
        }
    }
}

/// A selector together with the limits it runs under.
struct Contender {
    selector: Box<dyn Selector<i64>>,
    task_limit: Option<usize>,
    time_limit: Option<Duration>,
}

/// The result of one selector on the instance.
#[derive(Debug, Clone)]
pub enum SelectorRun {
    Completed {
        name: String,
        outcome: SelectionOutcome,
    },
    Skipped {
        name: String,
        num_tasks: usize,
        limit: usize,
    },
}

impl SelectorRun {
    pub fn name(&self) -> &str {
        match self {
            SelectorRun::Completed { name, .. } | SelectorRun::Skipped { name, .. } => name,
        }
    }

    /// Returns the outcome if the selector ran.
    pub fn outcome(&self) -> Option<&SelectionOutcome> {
        match self {
            SelectorRun::Completed { outcome, .. } => Some(outcome),
            SelectorRun::Skipped { .. } => None,
        }
    }
}

/// Whether the selectors that proved optimality reported the same count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Agreement {
    Agree(usize),
    Disagree,
    /// Fewer than two selectors finished with a proven result.
    Inconclusive,
}

impl std::fmt::Display for Agreement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Agreement::Agree(count) => write!(f, "yes (count {})", count),
            Agreement::Disagree => write!(f, "NO"),
            Agreement::Inconclusive => write!(f, "n/a"),
        }
    }
}

/// All selector runs on one instance.
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    num_tasks: usize,
    runs: Vec<SelectorRun>,
}

impl ComparisonReport {
    #[inline]
    pub fn num_tasks(&self) -> usize {
        self.num_tasks
    }

    #[inline]
    pub fn runs(&self) -> &[SelectorRun] {
        &self.runs
    }

    pub fn agreement(&self) -> Agreement {
        let mut counts = self
            .runs
            .iter()
            .filter_map(SelectorRun::outcome)
            .filter(|outcome| outcome.is_optimal())
            .map(SelectionOutcome::count);

        let Some(first) = counts.next() else {
            return Agreement::Inconclusive;
        };

        let mut compared = false;
        for count in counts {
            if count != first {
                return Agreement::Disagree;
            }
            compared = true;
        }

        if compared {
            Agreement::Agree(first)
        } else {
            Agreement::Inconclusive
        }
    }

    /// Writes the statistics of every completed run.
    pub fn write_statistics<W>(&self, out: &mut W) -> std::fmt::Result
    where
        W: std::fmt::Write,
    {
        for run in &self.runs {
            if let SelectorRun::Completed { name, outcome } = run {
                writeln!(out, "{}", name)?;
                write!(out, "{}", outcome.statistics())?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Tasks: {}", self.num_tasks())?;
        writeln!(f, "{:<20} {:>7} {:>12}  Status", "Selector", "Count", "Elapsed")?;
        for run in self.runs() {
            match run {
                SelectorRun::Completed { outcome, .. } => {
                    let elapsed = format!("{:.2?}", outcome.statistics().time_total);
                    writeln!(
                        f,
                        "{:<20} {:>7} {:>12}  {}",
                        run.name(),
                        outcome.count(),
                        elapsed,
                        outcome.termination_reason()
                    )?;
                }
                SelectorRun::Skipped {
                    num_tasks, limit, ..
                } => {
                    writeln!(
                        f,
                        "{:<20} {:>7} {:>12}  Skipped ({} tasks above limit {})",
                        run.name(),
                        "-",
                        "-",
                        num_tasks,
                        limit
                    )?;
                }
            }
        }
        write!(f, "Agreement: {}", self.agreement())
    }
}

fn contenders(config: &ComparisonConfig) -> Vec<Contender> {
    vec![
        Contender {
            selector: Box::new(GreedySelector::new()),
            task_limit: None,
            time_limit: None,
        },
        Contender {
            selector: Box::new(ExhaustiveSelector::new()),
            task_limit: Some(config.exhaustive_limit),
            time_limit: config.time_limit,
        },
    ]
}

/// Runs the greedy and the exhaustive selector on `tasks`.
pub fn compare(tasks: &[Task<i64>], config: &ComparisonConfig) -> ComparisonReport {
    let runs = contenders(config)
        .into_iter()
        .map(|mut contender| {
            let name = contender.selector.name().to_string();

            if let Some(limit) = contender.task_limit.filter(|&limit| tasks.len() > limit) {
                tracing::info!(selector = %name, num_tasks = tasks.len(), limit, "selector skipped");
                return SelectorRun::Skipped {
                    name,
                    num_tasks: tasks.len(),
                    limit,
                };
            }

            let mut monitor = CompositeMonitor::<i64>::new();
            if let Some(time_limit) = contender.time_limit {
                monitor.add_monitor(TimeLimitMonitor::new(time_limit));
            }
            if config.log_progress {
                monitor.add_monitor(LogMonitor::default());
            }

            let outcome = contender.selector.solve_monitored(tasks, &mut monitor);
            tracing::info!(
                selector = %name,
                count = outcome.count(),
                elapsed = ?outcome.statistics().time_total,
                optimal = outcome.is_optimal(),
                "selector finished"
            );
            SelectorRun::Completed { name, outcome }
        })
        .collect();

    ComparisonReport {
        num_tasks: tasks.len(),
        runs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::sample_tasks;
    use stint_model::generate::TaskGeneratorBuilder;

    #[test]
    fn test_sample_instance_agrees() {
        let report = compare(&sample_tasks(), &ComparisonConfig::default());

        assert_eq!(report.num_tasks(), 6);
        assert_eq!(report.runs().len(), 2);
        assert_eq!(report.runs()[0].name(), "GreedySelector");
        assert_eq!(report.runs()[1].name(), "ExhaustiveSelector");
        assert_eq!(report.agreement(), Agreement::Agree(4));
    }

    #[test]
    fn test_empty_instance_agrees_on_zero() {
        let report = compare(&[], &ComparisonConfig::default());
        assert_eq!(report.agreement(), Agreement::Agree(0));
    }

    #[test]
    fn test_oracle_is_skipped_above_limit() {
        let config = ComparisonConfig {
            exhaustive_limit: 3,
            ..Default::default()
        };
        let report = compare(&sample_tasks(), &config);

        assert!(matches!(
            report.runs()[1],
            SelectorRun::Skipped {
                num_tasks: 6,
                limit: 3,
                ..
            }
        ));
        assert!(report.runs()[1].outcome().is_none());
        assert_eq!(report.agreement(), Agreement::Inconclusive);
        assert!(report.to_string().contains("Skipped (6 tasks above limit 3)"));
    }

    #[test]
    fn test_report_lists_every_selector() {
        let report = compare(&sample_tasks(), &ComparisonConfig::default());
        let text = report.to_string();

        assert!(text.starts_with("Tasks: 6\n"));
        assert!(text.contains("GreedySelector"));
        assert!(text.contains("ExhaustiveSelector"));
        assert!(text.ends_with("Agreement: yes (count 4)"));
    }

    #[test]
    fn test_statistics_are_written_per_run() {
        let report = compare(&sample_tasks(), &ComparisonConfig::default());
        let mut out = String::new();
        report.write_statistics(&mut out).unwrap();

        assert_eq!(out.matches("Search Statistics:").count(), 2);
    }

    #[test]
    fn test_zero_time_limit_aborts_oracle() {
        // Sparse enough that the search tree is far larger than one clock
        // check interval.
        let tasks = TaskGeneratorBuilder::new()
            .seed(1)
            .horizon(1_000)
            .build()
            .generate(25);
        let config = ComparisonConfig {
            time_limit: Some(Duration::ZERO),
            ..Default::default()
        };
        let report = compare(&tasks, &config);
        let exhaustive = report.runs()[1].outcome().unwrap();

        assert!(!exhaustive.is_optimal());
        assert!(exhaustive.selection().is_pairwise_disjoint(&tasks));
        assert_eq!(report.agreement(), Agreement::Inconclusive);
        assert!(report.to_string().contains("Aborted: time limit reached"));
    }
}
