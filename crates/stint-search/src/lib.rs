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

//! # Stint Search
//!
//! Infrastructure shared by the selection algorithms: monitors that observe
//! and bound a search, the statistics a search collects, and the outcome type
//! a bounded search returns.
//!
//! ## Modules
//!
//! - `monitor`: The `SearchMonitor` trait plus no-op, composite, time-limit,
//!   node-limit and logging monitors.
//! - `stats`: `SearchStatistics`, counters and timing of a single run.
//! - `result`: `SelectionOutcome`, pairing a `Selection` with the reason the
//!   search stopped and its statistics.
//!
//! ## Motivation
//!
//! The exhaustive selector is exponential. Callers that cannot bound the input
//! size up front need a way to cap the work and still receive the best subset
//! found so far. Monitors keep that concern out of the search itself.

pub mod monitor;
pub mod result;
pub mod stats;
