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

use crate::{index::TaskIndex, task::Task};
use stint_core::num::time::TimePoint;

/// The subset of tasks picked by a selector.
///
/// Members are stored as `TaskIndex` positions into the slice the selector was
/// given, kept in ascending order. The size of the selection is the primary
/// answer of a selector; the membership is one of possibly many optimal subsets.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    indices: Vec<TaskIndex>,
}

impl Selection {
    /// Constructs a new `Selection` from task positions in any order.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `indices` contains duplicates.
    pub fn new(mut indices: Vec<TaskIndex>) -> Self {
        indices.sort_unstable();
        debug_assert!(
            indices.windows(2).all(|pair| pair[0] != pair[1]),
            "called `Selection::new` with duplicate task indices: {:?}",
            indices
        );
        Self { indices }
    }

    /// Returns a selection with no members.
    #[inline]
    pub fn empty() -> Self {
        Self {
            indices: Vec::new(),
        }
    }

    /// Returns the number of selected tasks.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if nothing was selected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the selected positions in ascending order.
    #[inline]
    pub fn indices(&self) -> &[TaskIndex] {
        &self.indices
    }

    /// Returns `true` if the task at `task_index` is part of the selection.
    #[inline]
    pub fn contains(&self, task_index: TaskIndex) -> bool {
        self.indices.binary_search(&task_index).is_ok()
    }

    /// Resolves the selected positions against the slice the selection was made from.
    ///
    /// # Panics
    ///
    /// Panics if a selected position is out of bounds for `tasks`.
    pub fn tasks<'t, T>(&'t self, tasks: &'t [Task<T>]) -> impl Iterator<Item = &'t Task<T>> + 't
    where
        T: TimePoint,
    {
        self.indices.iter().map(move |index| &tasks[index.get()])
    }

    /// Returns `true` if every selected position exists in `tasks` and no two
    /// selected tasks overlap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stint_model::{index::TaskIndex, selection::Selection, task::Task};
    ///
    /// let tasks = [Task::new(1, 3), Task::new(2, 5), Task::new(3, 4)];
    /// let ok = Selection::new(vec![TaskIndex::new(0), TaskIndex::new(2)]);
    /// let bad = Selection::new(vec![TaskIndex::new(0), TaskIndex::new(1)]);
    /// assert!(ok.is_pairwise_disjoint(&tasks));
    /// assert!(!bad.is_pairwise_disjoint(&tasks));
    /// ```
    pub fn is_pairwise_disjoint<T>(&self, tasks: &[Task<T>]) -> bool
    where
        T: TimePoint,
    {
        if self.indices.iter().any(|index| index.get() >= tasks.len()) {
            return false;
        }

        for (i, a) in self.indices.iter().enumerate() {
            for b in &self.indices[i + 1..] {
                if tasks[a.get()].overlaps(&tasks[b.get()]) {
                    return false;
                }
            }
        }
        true
    }
}

impl FromIterator<TaskIndex> for Selection {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = TaskIndex>,
    {
        Self::new(iter.into_iter().collect())
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Selection(size={}, tasks=[", self.len())?;
        for (i, index) in self.indices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", index.get())?;
        }
        write!(f, "])")
    }
}
