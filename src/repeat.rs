//! The repetition family, all driven by one counting loop.
//!
//! Repetitions are iterative so that stack depth does not grow with the number
//! of matches. Bounds are checked against the number of times the child
//! actually matched, whatever the length of each match.

use crate::{cursor::Cursor, error::ParseError, parse_result::ParseResult, parser::Parser};

enum Repetition<'a, V> {
    /// fewer than the required number of matches; carries the child's failure
    Short(ParseResult<'a, V>),
    Counted { result: ParseResult<'a, V>, count: usize },
}

/// Applies `child` repeatedly from `cur`, folding each success into one result.
///
/// The first `required` applications must all succeed. After that, matching
/// stops at the first failure, at `limit` matches, or at a success that
/// consumed nothing (which would otherwise repeat forever).
fn repeat_counted<'a, V>(
    cur: Cursor<'a>,
    child: &Parser<V>,
    required: usize,
    limit: Option<usize>,
) -> Result<Repetition<'a, V>, ParseError> {
    let mut acc = ParseResult::vacuous(cur);
    let mut count = 0;
    while limit.map_or(true, |limit| count < limit) {
        let res = child.parse_at(acc.remainder_cursor())?;
        if !res.succeeded() {
            if count < required {
                return Ok(Repetition::Short(res));
            }
            break;
        }
        if count >= required && res.selection().is_empty() {
            break;
        }
        acc = acc.combine(res);
        count += 1;
    }
    Ok(Repetition::Counted { result: acc, count })
}

fn unbounded<'a, V>(
    cur: Cursor<'a>,
    child: &Parser<V>,
    required: usize,
) -> Result<ParseResult<'a, V>, ParseError> {
    match repeat_counted(cur, child, required, None)? {
        Repetition::Short(failure) => Ok(failure),
        Repetition::Counted { result, .. } => Ok(result),
    }
}

pub(crate) fn zero_or_more<'a, V>(
    cur: Cursor<'a>,
    child: &Parser<V>,
) -> Result<ParseResult<'a, V>, ParseError> {
    unbounded(cur, child, 0)
}

pub(crate) fn one_or_more<'a, V>(
    cur: Cursor<'a>,
    child: &Parser<V>,
) -> Result<ParseResult<'a, V>, ParseError> {
    unbounded(cur, child, 1)
}

pub(crate) fn at_least<'a, V>(
    cur: Cursor<'a>,
    child: &Parser<V>,
    n: usize,
) -> Result<ParseResult<'a, V>, ParseError> {
    unbounded(cur, child, n)
}

/// `n` matches in a row, no more are attempted
pub(crate) fn exact<'a, V>(
    cur: Cursor<'a>,
    child: &Parser<V>,
    n: usize,
) -> Result<ParseResult<'a, V>, ParseError> {
    match repeat_counted(cur, child, n, Some(n))? {
        Repetition::Short(failure) => Ok(failure),
        Repetition::Counted { result, .. } => Ok(result),
    }
}

/// Matches greedily, then fails if the number of matches is outside `min..=max`.
pub(crate) fn between<'a, V>(
    cur: Cursor<'a>,
    child: &Parser<V>,
    min: usize,
    max: usize,
) -> Result<ParseResult<'a, V>, ParseError> {
    match repeat_counted(cur, child, min, Some(max.saturating_add(1)))? {
        Repetition::Short(failure) => Ok(failure),
        Repetition::Counted { result, count } if count > max || count < min => {
            Ok(ParseResult::failure(result.selection(), cur))
        }
        Repetition::Counted { result, .. } => Ok(result),
    }
}
