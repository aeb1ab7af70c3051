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

/// A strongly-typed position of a task within the slice handed to a selector.
///
/// # Examples
///
/// ```rust
/// # use stint_model::index::TaskIndex;
///
/// let index = TaskIndex::new(3);
/// assert_eq!(index.get(), 3);
/// assert_eq!(format!("{}", index), "TaskIndex(3)");
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskIndex(usize);

impl TaskIndex {
    /// Creates a new `TaskIndex` from a raw position.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the underlying position.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.0
    }
}

impl std::fmt::Debug for TaskIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TaskIndex({})", self.0)
    }
}

impl std::fmt::Display for TaskIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TaskIndex({})", self.0)
    }
}

impl From<usize> for TaskIndex {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl From<TaskIndex> for usize {
    fn from(index: TaskIndex) -> Self {
        index.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        let idx: TaskIndex = 42.into();
        assert_eq!(idx.get(), 42);

        let val: usize = idx.into();
        assert_eq!(val, 42);
    }

    #[test]
    fn test_ordering_follows_position() {
        let mut indices = vec![TaskIndex::new(4), TaskIndex::new(0), TaskIndex::new(2)];
        indices.sort();
        assert_eq!(
            indices,
            vec![TaskIndex::new(0), TaskIndex::new(2), TaskIndex::new(4)]
        );
    }

    #[test]
    fn test_debug_and_display() {
        let idx = TaskIndex::new(7);
        assert_eq!(format!("{}", idx), "TaskIndex(7)");
        assert_eq!(format!("{:?}", idx), "TaskIndex(7)");
    }
}
