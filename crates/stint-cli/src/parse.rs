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

//! Parsing of `start-end` task tokens.
//!
//! A task list is a comma separated sequence of tokens such as
//! `"1-3,2-5,4-6"`. Whitespace around tokens is ignored. A leading minus sign
//! belongs to the start bound, so `"-4-2"` is the task `[-4, 2)` and
//! `"-4--2"` is `[-4, -2)`.

use std::num::ParseIntError;
use stint_model::task::{InvalidTaskError, Task};

/// Errors raised while reading tasks from the command line.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TaskParseError {
    /// The task list contains an empty token, e.g. `"1-3,,4-6"`.
    #[error("empty task token at position {position}")]
    EmptyToken { position: usize },
    /// The token has no `-` separating start and end.
    #[error("task token `{token}` is not of the form `start-end`")]
    MissingSeparator { token: String },
    /// A bound is not an integer.
    #[error("task token `{token}` has an invalid bound: {source}")]
    InvalidBound {
        token: String,
        #[source]
        source: ParseIntError,
    },
    /// Both bounds parsed but do not form a valid task.
    #[error("task token `{token}` is rejected: {source}")]
    InvalidTask {
        token: String,
        #[source]
        source: InvalidTaskError<i64>,
    },
}

/// Parses a single `start-end` token.
pub fn parse_task(token: &str) -> Result<Task<i64>, TaskParseError> {
    let token = token.trim();
    let separator = token
        .char_indices()
        .skip(1)
        .find_map(|(i, c)| (c == '-').then_some(i))
        .ok_or_else(|| TaskParseError::MissingSeparator {
            token: token.to_string(),
        })?;

    let (start, end) = (&token[..separator], &token[separator + 1..]);
    let parse_bound = |bound: &str| {
        bound
            .trim()
            .parse::<i64>()
            .map_err(|source| TaskParseError::InvalidBound {
                token: token.to_string(),
                source,
            })
    };
    let (start, end) = (parse_bound(start)?, parse_bound(end)?);

    Task::try_new(start, end).map_err(|source| TaskParseError::InvalidTask {
        token: token.to_string(),
        source,
    })
}

/// Parses a comma separated task list.
///
/// An input that is empty or only whitespace yields no tasks.
pub fn parse_tasks(list: &str) -> Result<Vec<Task<i64>>, TaskParseError> {
    if list.trim().is_empty() {
        return Ok(Vec::new());
    }

    list.split(',')
        .enumerate()
        .map(|(position, token)| {
            if token.trim().is_empty() {
                return Err(TaskParseError::EmptyToken { position });
            }
            parse_task(token)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_token() {
        assert_eq!(parse_task("1-3"), Ok(Task::new(1, 3)));
        assert_eq!(parse_task(" 4 - 6 "), Ok(Task::new(4, 6)));
        assert_eq!(parse_task("5-5"), Ok(Task::new(5, 5)));
    }

    #[test]
    fn test_parse_negative_bounds() {
        assert_eq!(parse_task("-4-2"), Ok(Task::new(-4, 2)));
        assert_eq!(parse_task("-4--2"), Ok(Task::new(-4, -2)));
    }

    #[test]
    fn test_parse_list() {
        let tasks = parse_tasks("1-3,2-5, 4-6").unwrap();
        assert_eq!(tasks, vec![Task::new(1, 3), Task::new(2, 5), Task::new(4, 6)]);
    }

    #[test]
    fn test_parse_empty_list() {
        assert_eq!(parse_tasks(""), Ok(Vec::new()));
        assert_eq!(parse_tasks("   "), Ok(Vec::new()));
    }

    #[test]
    fn test_missing_separator() {
        assert_eq!(
            parse_task("13"),
            Err(TaskParseError::MissingSeparator {
                token: "13".to_string()
            })
        );
        assert!(matches!(
            parse_task("-13"),
            Err(TaskParseError::MissingSeparator { .. })
        ));
    }

    #[test]
    fn test_invalid_bound() {
        assert!(matches!(
            parse_task("a-3"),
            Err(TaskParseError::InvalidBound { .. })
        ));
        assert!(matches!(
            parse_task("1-"),
            Err(TaskParseError::InvalidBound { .. })
        ));
        assert!(matches!(
            parse_task("1.5-3"),
            Err(TaskParseError::InvalidBound { .. })
        ));
    }

    #[test]
    fn test_start_after_end_is_rejected() {
        let err = parse_task("5-3").unwrap_err();
        assert_eq!(
            err,
            TaskParseError::InvalidTask {
                token: "5-3".to_string(),
                source: InvalidTaskError::StartAfterEnd { start: 5, end: 3 },
            }
        );
        assert_eq!(
            err.to_string(),
            "task token `5-3` is rejected: invalid task: start 5 is after end 3"
        );
    }

    #[test]
    fn test_empty_token_in_list() {
        assert_eq!(
            parse_tasks("1-3,,4-6"),
            Err(TaskParseError::EmptyToken { position: 1 })
        );
        assert_eq!(
            parse_tasks("1-3,"),
            Err(TaskParseError::EmptyToken { position: 1 })
        );
    }
}
