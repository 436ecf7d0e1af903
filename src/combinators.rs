use crate::{cursor::Cursor, error::ParseError, parse_result::ParseResult, parser::Parser};

/// Children are applied left to right, each to the previous one's remainder.
/// The first failing child's result is returned as is.
pub(crate) fn sequence<'a, V>(
    cur: Cursor<'a>,
    children: &[Parser<V>],
) -> Result<ParseResult<'a, V>, ParseError> {
    let mut acc = ParseResult::vacuous(cur);
    for child in children {
        let res = child.parse_at(acc.remainder_cursor())?;
        if !res.succeeded() {
            return Ok(res);
        }
        acc = acc.combine(res);
    }
    Ok(acc)
}

/// Ordered choice: the first child to succeed wins, otherwise the last failure.
pub(crate) fn alternation<'a, V>(
    cur: Cursor<'a>,
    children: &[Parser<V>],
) -> Result<ParseResult<'a, V>, ParseError> {
    let mut last = ParseResult::failure(cur.empty_selection(), cur);
    for child in children {
        let res = child.parse_at(cur)?;
        if res.succeeded() {
            return Ok(res);
        }
        last = res;
    }
    Ok(last)
}

pub(crate) fn optional<'a, V>(
    cur: Cursor<'a>,
    child: &Parser<V>,
) -> Result<ParseResult<'a, V>, ParseError> {
    let res = child.parse_at(cur)?;
    if res.succeeded() {
        Ok(res)
    } else {
        Ok(ParseResult::vacuous(cur))
    }
}

/// Consumes one char where `child` does not match.
pub(crate) fn not<'a, V>(
    cur: Cursor<'a>,
    child: &Parser<V>,
) -> Result<ParseResult<'a, V>, ParseError> {
    let res = child.parse_at(cur)?;
    if res.succeeded() {
        return Ok(ParseResult::failure(res.selection(), cur));
    }
    match cur.first() {
        Some(c) => {
            let rest = cur.advance(c.len_utf8());
            Ok(ParseResult::success(cur.select_to(&rest), rest))
        }
        None => Ok(ParseResult::failure(cur.empty_selection(), cur)),
    }
}

/// Zero-width: succeeds without consuming where `child` matches.
pub(crate) fn before<'a, V>(
    cur: Cursor<'a>,
    child: &Parser<V>,
) -> Result<ParseResult<'a, V>, ParseError> {
    let res = child.parse_at(cur)?;
    if res.succeeded() {
        Ok(ParseResult::vacuous(cur))
    } else {
        Ok(ParseResult::failure(res.selection(), cur))
    }
}
