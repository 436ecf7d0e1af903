use crate::{cursor::Cursor, error::ParseError, parse_result::ParseResult};

#[inline]
fn apply<'a, V, F>(cur: Cursor<'a>, f: F) -> ParseResult<'a, V>
where
    F: FnOnce(&'a str) -> Option<usize>,
{
    match f(cur.str()) {
        Some(len) => {
            let rest = cur.advance(len);
            ParseResult::success(cur.select_to(&rest), rest)
        }
        None => ParseResult::failure(cur.empty_selection(), cur),
    }
}

// an empty target always matches, consuming nothing
pub(crate) fn literal<'a, V>(cur: Cursor<'a>, target: &str) -> ParseResult<'a, V> {
    apply(cur, |s| s.starts_with(target).then_some(target.len()))
}

pub(crate) fn char_class<'a, V>(cur: Cursor<'a>, set: &str) -> ParseResult<'a, V> {
    apply(cur, |s| {
        s.chars()
            .next()
            .filter(|c| set.contains(*c))
            .map(char::len_utf8)
    })
}

pub(crate) fn anything<'a, V>(cur: Cursor<'a>) -> Result<ParseResult<'a, V>, ParseError> {
    match cur.first() {
        Some(c) => Ok(apply(cur, |_| Some(c.len_utf8()))),
        None => Err(ParseError::too_short("anything")),
    }
}
