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

//! # Stint Select
//!
//! Maximum interval scheduling: given tasks `[start, end)`, pick as many
//! pairwise non-overlapping tasks as possible.
//!
//! Two selectors solve the same problem with very different costs:
//!
//! - `exhaustive`: explores every include/exclude decision. `O(2^n)`. It is a
//!   correctness oracle; callers must keep inputs small (roughly 20 to 25
//!   tasks) or attach a monitor that bounds the run.
//! - `greedy`: sorts by end time and sweeps once, accepting every task that
//!   starts no earlier than the last accepted end. `O(n log n)` and optimal
//!   for this unweighted, single-resource problem.
//!
//! Both share the `overlap` predicate, implement the `selector::Selector`
//! trait, and are pure with respect to their input: the caller's slice is
//! never reordered or modified, and no state survives between calls.
//!
//! ## Usage
//!
//! ```rust
//! use stint_model::task::Task;
//! use stint_select::{exhaustive, greedy};
//!
//! let tasks = [
//!     Task::new(1, 3),
//!     Task::new(2, 5),
//!     Task::new(4, 6),
//!     Task::new(6, 7),
//!     Task::new(5, 9),
//!     Task::new(8, 10),
//! ];
//!
//! assert_eq!(exhaustive::count(&tasks), 4);
//! assert_eq!(greedy::count(&tasks), 4);
//! ```

pub mod exhaustive;
pub mod greedy;
pub mod overlap;
pub mod selector;
