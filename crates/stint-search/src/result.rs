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

use crate::stats::SearchStatistics;
use stint_model::selection::Selection;

/// The selection reported by a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionResult {
    /// The search ran to completion; the selection has maximum size.
    Optimal(Selection),
    /// The search was stopped early; the selection is valid but may be smaller
    /// than the optimum.
    Feasible(Selection),
}

impl SelectionResult {
    /// Returns the selection regardless of its optimality status.
    #[inline]
    pub fn selection(&self) -> &Selection {
        match self {
            SelectionResult::Optimal(selection) | SelectionResult::Feasible(selection) => {
                selection
            }
        }
    }
}

impl std::fmt::Display for SelectionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionResult::Optimal(selection) => write!(f, "Optimal(count={})", selection.len()),
            SelectionResult::Feasible(selection) => {
                write!(f, "Feasible(count={})", selection.len())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The selector completed its search; the result is a proven maximum.
    OptimalityProven,
    /// A monitor stopped the search. The string names the limit that was hit.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::OptimalityProven => write!(f, "Optimality Proven"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// Result of a monitored selection run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionOutcome {
    result: SelectionResult,
    termination_reason: TerminationReason,
    statistics: SearchStatistics,
}

impl SelectionOutcome {
    #[inline]
    pub fn optimal(selection: Selection, statistics: SearchStatistics) -> Self {
        Self {
            result: SelectionResult::Optimal(selection),
            termination_reason: TerminationReason::OptimalityProven,
            statistics,
        }
    }

    #[inline]
    pub fn aborted<R>(selection: Selection, reason: R, statistics: SearchStatistics) -> Self
    where
        R: Into<String>,
    {
        Self {
            result: SelectionResult::Feasible(selection),
            termination_reason: TerminationReason::Aborted(reason.into()),
            statistics,
        }
    }

    /// Returns the selection result.
    #[inline]
    pub fn result(&self) -> &SelectionResult {
        &self.result
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    /// Returns the run statistics.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Returns the reported selection.
    #[inline]
    pub fn selection(&self) -> &Selection {
        self.result.selection()
    }

    /// Returns the size of the reported selection.
    #[inline]
    pub fn count(&self) -> usize {
        self.result.selection().len()
    }

    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self.result, SelectionResult::Optimal(_))
    }

    /// Consumes the outcome and returns the reported selection.
    #[inline]
    pub fn into_selection(self) -> Selection {
        match self.result {
            SelectionResult::Optimal(selection) | SelectionResult::Feasible(selection) => {
                selection
            }
        }
    }
}

impl std::fmt::Display for SelectionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.result, self.termination_reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stint_model::index::TaskIndex;

    fn selection(indices: &[usize]) -> Selection {
        indices.iter().copied().map(TaskIndex::new).collect()
    }

    #[test]
    fn test_optimal_outcome() {
        let outcome = SelectionOutcome::optimal(selection(&[0, 2]), SearchStatistics::default());
        assert!(outcome.is_optimal());
        assert_eq!(outcome.count(), 2);
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::OptimalityProven
        );
        assert_eq!(outcome.to_string(), "Optimal(count=2) (Optimality Proven)");
    }

    #[test]
    fn test_aborted_outcome_keeps_best_selection() {
        let outcome = SelectionOutcome::aborted(
            selection(&[1]),
            "time limit reached",
            SearchStatistics::default(),
        );
        assert!(!outcome.is_optimal());
        assert_eq!(outcome.count(), 1);
        assert!(matches!(outcome.result(), SelectionResult::Feasible(_)));
        match outcome.termination_reason() {
            TerminationReason::Aborted(msg) => assert_eq!(msg, "time limit reached"),
            other => panic!("expected Aborted termination reason, got {:?}", other),
        }
        assert_eq!(
            outcome.to_string(),
            "Feasible(count=1) (Aborted: time limit reached)"
        );
        assert_eq!(outcome.into_selection(), selection(&[1]));
    }

    #[test]
    fn test_empty_selection_is_still_optimal() {
        let outcome = SelectionOutcome::optimal(Selection::empty(), SearchStatistics::default());
        assert!(outcome.is_optimal());
        assert_eq!(outcome.count(), 0);
        assert_eq!(outcome.statistics(), &SearchStatistics::default());
    }
}
