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

use crate::parse::parse_tasks;
use anyhow::{Context, Result};
use clap::Parser;
use std::time::Duration;
use stint_model::{
    generate::{TaskGenerator, TaskGeneratorBuilder},
    task::Task,
};
use stint_select::exhaustive::ExhaustiveSelector;

/// Compares the exhaustive and greedy interval scheduling selectors.
///
/// Without `--tasks` or `--random` the built-in six-task sample is used.
#[derive(Debug, Parser)]
#[command(name = "stint", version, about, long_about = None)]
pub struct Cli {
    /// Explicit tasks as comma separated `start-end` pairs, e.g. "1-3,2-5,4-6".
    #[arg(long, value_name = "LIST", allow_hyphen_values = true, conflicts_with = "random")]
    pub tasks: Option<String>,

    /// Generate N random tasks instead.
    #[arg(long, value_name = "N")]
    pub random: Option<usize>,

    /// Seed for random generation.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Exclusive upper bound for random task starts.
    #[arg(
        long,
        default_value_t = TaskGenerator::DEFAULT_HORIZON,
        value_parser = clap::value_parser!(i64).range(1..)
    )]
    pub horizon: i64,

    /// Maximal duration of a random task.
    #[arg(
        long,
        default_value_t = TaskGenerator::DEFAULT_MAX_DURATION,
        value_parser = clap::value_parser!(i64).range(1..)
    )]
    pub max_duration: i64,

    /// Skip the exhaustive selector above this many tasks.
    #[arg(long, value_name = "N", default_value_t = ExhaustiveSelector::DEFAULT_TASK_LIMIT)]
    pub exhaustive_limit: usize,

    /// Wall-clock budget for the exhaustive selector, in milliseconds.
    #[arg(long, value_name = "MS")]
    pub time_limit_ms: Option<u64>,

    /// Print search statistics for every selector.
    #[arg(long)]
    pub stats: bool,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Builds the task instance selected by the flags.
    pub fn load_tasks(&self) -> Result<Vec<Task<i64>>> {
        if let Some(list) = &self.tasks {
            return parse_tasks(list).context("failed to parse --tasks");
        }

        let Some(num_tasks) = self.random else {
            return Ok(sample_tasks());
        };

        anyhow::ensure!(
            self.horizon.checked_add(self.max_duration).is_some(),
            "--horizon {} plus --max-duration {} overflows i64",
            self.horizon,
            self.max_duration
        );

        let mut generator = TaskGeneratorBuilder::new()
            .seed(self.seed)
            .horizon(self.horizon)
            .max_duration(self.max_duration)
            .build();
        Ok(generator.generate(num_tasks))
    }

    /// Returns the exhaustive selector's time budget, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }
}

/// The six-task sample instance; its maximum selection has four tasks.
pub fn sample_tasks() -> Vec<Task<i64>> {
    [(1, 3), (2, 5), (4, 6), (6, 7), (5, 9), (8, 10)]
        .into_iter()
        .map(|(start, end)| Task::new(start, end))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("stint").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_use_sample() {
        let cli = parse(&[]);
        assert_eq!(cli.exhaustive_limit, ExhaustiveSelector::DEFAULT_TASK_LIMIT);
        assert_eq!(cli.time_limit(), None);
        assert_eq!(cli.load_tasks().unwrap(), sample_tasks());
    }

    #[test]
    fn test_explicit_tasks() {
        let cli = parse(&["--tasks", "1-3,3-5"]);
        assert_eq!(cli.load_tasks().unwrap(), vec![Task::new(1, 3), Task::new(3, 5)]);
    }

    #[test]
    fn test_explicit_tasks_with_leading_negative() {
        let cli = parse(&["--tasks", "-4-2,2-3"]);
        assert_eq!(cli.load_tasks().unwrap(), vec![Task::new(-4, 2), Task::new(2, 3)]);
    }

    #[test]
    fn test_malformed_tasks_are_reported() {
        let cli = parse(&["--tasks", "1-3,oops"]);
        let err = cli.load_tasks().unwrap_err();
        assert_eq!(err.to_string(), "failed to parse --tasks");
        assert!(format!("{:#}", err).contains("`oops`"));
    }

    #[test]
    fn test_random_is_seeded() {
        let cli = parse(&["--random", "50", "--seed", "9", "--horizon", "100"]);
        let first = cli.load_tasks().unwrap();
        let second = cli.load_tasks().unwrap();

        assert_eq!(first.len(), 50);
        assert_eq!(first, second);
        assert!(first.iter().all(|t| t.start() < 100));
    }

    #[test]
    fn test_tasks_conflict_with_random() {
        let result = Cli::try_parse_from(["stint", "--tasks", "1-2", "--random", "3"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_positive_horizon_is_rejected() {
        assert!(Cli::try_parse_from(["stint", "--random", "3", "--horizon", "0"]).is_err());
        assert!(Cli::try_parse_from(["stint", "--random", "3", "--max-duration", "-1"]).is_err());
    }

    #[test]
    fn test_overflowing_horizon_is_an_error() {
        let horizon = i64::MAX.to_string();
        let cli = parse(&["--random", "3", "--horizon", &horizon]);
        assert!(cli.load_tasks().is_err());
    }

    #[test]
    fn test_time_limit() {
        let cli = parse(&["--time-limit-ms", "250"]);
        assert_eq!(cli.time_limit(), Some(Duration::from_millis(250)));
    }
}
