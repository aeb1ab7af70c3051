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

//! # Stint Model
//!
//! **The domain model for interval scheduling selection.**
//!
//! This crate defines the data exchanged between a harness and the selection
//! algorithms in `stint_select`.
//!
//! ## Architecture
//!
//! * **`index`**: `TaskIndex`, a strongly-typed position into a task slice.
//! * **`task`**: `Task`, an immutable half-open time window `[start, end)`,
//!   and `InvalidTaskError` for fallible construction.
//! * **`selection`**: `Selection`, the set of task positions picked by a selector.
//! * **`generate`**: `TaskGenerator`, a seeded generator for random instances.
//!
//! ## Design Philosophy
//!
//! 1.  **Type Safety**: Selected members are `TaskIndex` values, not raw `usize`.
//! 2.  **Fail-Fast**: `Task::new` asserts its invariant; `Task::try_new` reports it.
//! 3.  **Value Semantics**: Tasks are `Copy`; nothing in this crate holds shared mutable state.

pub mod generate;
pub mod index;
pub mod selection;
pub mod task;
