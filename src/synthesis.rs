use crate::{
    cursor::Cursor,
    error::ParseError,
    parse_result::ParseResult,
    parser::{Parser, SynthesisFn},
};

/// What a synthesis function is given to build its value from.
#[derive(Debug, Clone, PartialEq)]
pub enum Synthesis<'s, V> {
    /// the matched text, when the wrapped grammar synthesized nothing itself
    Text(&'s str),
    /// the values synthesized by the wrapped grammar, left to right
    Attributes(Vec<V>),
}

impl<'s, V> Synthesis<'s, V> {
    pub fn text(&self) -> Option<&'s str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Attributes(_) => None,
        }
    }

    /// The child values; empty when synthesizing from text.
    pub fn into_attributes(self) -> Vec<V> {
        match self {
            Self::Text(_) => Vec::new(),
            Self::Attributes(v) => v,
        }
    }
}

/// Replaces the child's attributes with the single value `f` makes of them
/// (or of the matched text, if there were none). Failures pass through.
pub(crate) fn synthesize<'a, V>(
    cur: Cursor<'a>,
    child: &Parser<V>,
    f: &SynthesisFn<V>,
) -> Result<ParseResult<'a, V>, ParseError> {
    let mut res = child.parse_at(cur)?;
    if !res.succeeded() {
        return Ok(res);
    }
    let attributes = res.take_attributes();
    let input = if attributes.is_empty() {
        Synthesis::Text(res.matched())
    } else {
        Synthesis::Attributes(attributes)
    };
    let value = f(input).map_err(ParseError::Synthesis)?;
    res.set_attributes(vec![value]);
    Ok(res)
}
