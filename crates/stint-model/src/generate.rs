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

//! # Random Instances
//!
//! `TaskGenerator` produces reproducible task lists for benchmarks, agreement
//! tests and the comparison harness. Each task starts uniformly in
//! `[0, horizon)` and lasts uniformly between `1` and `max_duration` ticks, so
//! every generated task is non-empty.
//!
//! ## Usage
//!
//! ```rust
//! use stint_model::generate::TaskGeneratorBuilder;
//!
//! let mut generator = TaskGeneratorBuilder::new()
//!     .seed(7)
//!     .horizon(100)
//!     .max_duration(5)
//!     .build();
//!
//! let tasks = generator.generate(50);
//! assert_eq!(tasks.len(), 50);
//! assert!(tasks.iter().all(|t| t.start() < 100 && t.duration() <= 5));
//! ```

use crate::task::Task;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded generator of random `Task<i64>` instances.
#[derive(Debug, Clone)]
pub struct TaskGenerator {
    horizon: i64,
    max_duration: i64,
    rng: StdRng,
}

impl TaskGenerator {
    /// Default start horizon: tasks start in `[0, 10_000)`.
    pub const DEFAULT_HORIZON: i64 = 10_000;
    /// Default maximal task duration.
    pub const DEFAULT_MAX_DURATION: i64 = 20;

    /// Returns the exclusive upper bound for task starts.
    #[inline]
    pub fn horizon(&self) -> i64 {
        self.horizon
    }

    /// Returns the maximal task duration.
    #[inline]
    pub fn max_duration(&self) -> i64 {
        self.max_duration
    }

    /// Generates `num_tasks` random tasks.
    pub fn generate(&mut self, num_tasks: usize) -> Vec<Task<i64>> {
        (0..num_tasks).map(|_| self.next_task()).collect()
    }

    #[inline]
    fn next_task(&mut self) -> Task<i64> {
        let start = self.rng.random_range(0..self.horizon);
        let end = start + self.rng.random_range(1..=self.max_duration);
        Task::new_unchecked(start, end)
    }
}

/// Builder for `TaskGenerator`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskGeneratorBuilder {
    seed: u64,
    horizon: i64,
    max_duration: i64,
}

impl Default for TaskGeneratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskGeneratorBuilder {
    /// Creates a new builder with seed `0` and the default horizon and duration.
    #[inline]
    pub fn new() -> Self {
        Self {
            seed: 0,
            horizon: TaskGenerator::DEFAULT_HORIZON,
            max_duration: TaskGenerator::DEFAULT_MAX_DURATION,
        }
    }

    /// Sets the random seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the exclusive upper bound for task starts.
    #[inline]
    pub fn horizon(mut self, horizon: i64) -> Self {
        self.horizon = horizon;
        self
    }

    /// Sets the maximal task duration.
    #[inline]
    pub fn max_duration(mut self, max_duration: i64) -> Self {
        self.max_duration = max_duration;
        self
    }

    /// Builds the `TaskGenerator`.
    ///
    /// # Panics
    ///
    /// Panics if the horizon or the maximal duration is not positive, or if
    /// `horizon + max_duration` overflows `i64`.
    pub fn build(self) -> TaskGenerator {
        assert!(
            self.horizon > 0,
            "called `TaskGeneratorBuilder::build` with non-positive horizon: {}",
            self.horizon
        );
        assert!(
            self.max_duration > 0,
            "called `TaskGeneratorBuilder::build` with non-positive max duration: {}",
            self.max_duration
        );
        assert!(
            self.horizon.checked_add(self.max_duration).is_some(),
            "called `TaskGeneratorBuilder::build` with horizon {} and max duration {} overflowing i64",
            self.horizon,
            self.max_duration
        );

        TaskGenerator {
            horizon: self.horizon,
            max_duration: self.max_duration,
            rng: StdRng::seed_from_u64(self.seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let generator = TaskGeneratorBuilder::new().build();
        assert_eq!(generator.horizon(), 10_000);
        assert_eq!(generator.max_duration(), 20);
    }

    #[test]
    fn test_generated_tasks_respect_bounds() {
        let mut generator = TaskGeneratorBuilder::new()
            .seed(42)
            .horizon(50)
            .max_duration(3)
            .build();

        let tasks = generator.generate(1_000);
        assert_eq!(tasks.len(), 1_000);
        for task in &tasks {
            assert!((0..50).contains(&task.start()), "start out of range: {task}");
            assert!((1..=3).contains(&task.duration()), "bad duration: {task}");
        }
    }

    #[test]
    fn test_same_seed_same_instance() {
        let a = TaskGeneratorBuilder::new().seed(9).build().generate(64);
        let b = TaskGeneratorBuilder::new().seed(9).build().generate(64);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = TaskGeneratorBuilder::new().seed(1).build().generate(64);
        let b = TaskGeneratorBuilder::new().seed(2).build().generate(64);
        assert_ne!(a, b);
    }

    #[test]
    fn test_generate_zero_tasks() {
        let mut generator = TaskGeneratorBuilder::new().build();
        assert!(generator.generate(0).is_empty());
    }

    #[test]
    #[should_panic(expected = "non-positive horizon")]
    fn test_build_rejects_empty_horizon() {
        let _ = TaskGeneratorBuilder::new().horizon(0).build();
    }

    #[test]
    #[should_panic(expected = "non-positive max duration")]
    fn test_build_rejects_zero_duration() {
        let _ = TaskGeneratorBuilder::new().max_duration(0).build();
    }
}
