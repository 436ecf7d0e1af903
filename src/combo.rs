//! Building grammars.
//!
//! Every constructor returns a new node; existing nodes are never modified.
//! Sequences and alternations are kept flat: joining two sequences yields one
//! sequence holding the children of both, and likewise for alternations.

use std::{
    ops::{BitAnd, BitOr, Not},
    sync::Arc,
};

use crate::{
    cursor::Cursor,
    error::{BoxError, ParseError},
    parse_result::ParseResult,
    parser::{Parser, SynthesisFn},
    synthesis::Synthesis,
};

pub fn literal<V>(text: &str) -> Parser<V> {
    Parser::Literal(text.to_string())
}

/// matches any one char of `chars`
pub fn char_class<V>(chars: &str) -> Parser<V> {
    Parser::CharClass(chars.to_string())
}

pub fn anything<V>() -> Parser<V> {
    Parser::Anything
}

/// A flat sequence of `parsers`. A single parser is returned unchanged; an
/// empty sequence matches the empty string.
pub fn sequence<V>(parsers: impl IntoIterator<Item = Parser<V>>) -> Parser<V> {
    flatten(parsers, |p| match p {
        Parser::Sequence(children) => Ok(children),
        other => Err(other),
    })
    .map_or_else(|p| p, Parser::Sequence)
}

/// Ordered choice between `parsers`. A single parser is returned unchanged;
/// an empty alternation never matches.
pub fn alternation<V>(parsers: impl IntoIterator<Item = Parser<V>>) -> Parser<V> {
    flatten(parsers, |p| match p {
        Parser::Alternation(children) => Ok(children),
        other => Err(other),
    })
    .map_or_else(|p| p, Parser::Alternation)
}

/// Splices the children of nested nodes (as picked out by `split`) into one
/// list. Returns `Err` with the node itself when there is exactly one.
fn flatten<V>(
    parsers: impl IntoIterator<Item = Parser<V>>,
    mut split: impl FnMut(Parser<V>) -> Result<Vec<Parser<V>>, Parser<V>>,
) -> Result<Vec<Parser<V>>, Parser<V>> {
    let mut flat = Vec::new();
    for p in parsers {
        match split(p) {
            Ok(children) => flat.extend(children),
            Err(p) => flat.push(p),
        }
    }
    if flat.len() == 1 {
        if let Some(p) = flat.pop() {
            return Err(p);
        }
    }
    Ok(flat)
}

pub fn optional<V>(p: Parser<V>) -> Parser<V> {
    Parser::Optional(Arc::new(p))
}

pub fn zero_or_more<V>(p: Parser<V>) -> Parser<V> {
    Parser::ZeroOrMore(Arc::new(p))
}

pub fn one_or_more<V>(p: Parser<V>) -> Parser<V> {
    Parser::OneOrMore(Arc::new(p))
}

/// Consumes one char wherever `p` does not match.
pub fn not<V>(p: Parser<V>) -> Parser<V> {
    Parser::Not(Arc::new(p))
}

/// Lookahead: succeeds, consuming nothing, wherever `p` matches.
pub fn before<V>(p: Parser<V>) -> Parser<V> {
    Parser::Lookahead(Arc::new(p))
}

/// exactly `n` matches of `p`
pub fn repeat<V>(p: Parser<V>, n: usize) -> Parser<V> {
    Parser::RepeatExact(Arc::new(p), n)
}

/// at least `n` matches of `p`
pub fn repeat_min<V>(p: Parser<V>, n: usize) -> Parser<V> {
    Parser::RepeatMin(Arc::new(p), n)
}

/// Zero to `n` matches of `p`. Fails where more than `n` are available.
pub fn repeat_max<V>(p: Parser<V>, n: usize) -> Parser<V> {
    Parser::RepeatMax(Arc::new(p), n)
}

/// `min` to `max` matches of `p`. Fails where more than `max` are available.
pub fn repeat_range<V>(p: Parser<V>, min: usize, max: usize) -> Parser<V> {
    Parser::RepeatRange(Arc::new(p), min, max)
}

/// Attaches a value-producing function to `p`.
///
/// On success `f` is given the matched text, or if `p` synthesized values of its
/// own, those values; whatever `f` returns becomes the single attribute of the
/// result. An `Err` from `f` aborts the parse with [`ParseError::Synthesis`].
pub fn synthesize<V, F, E>(p: Parser<V>, f: F) -> Parser<V>
where
    V: 'static,
    F: for<'s> Fn(Synthesis<'s, V>) -> Result<V, E> + Send + Sync + 'static,
    E: Into<BoxError>,
{
    let f: SynthesisFn<V> =
        Arc::new(move |s: Synthesis<'_, V>| -> Result<V, BoxError> { f(s).map_err(Into::into) });
    Parser::Synthesize(Arc::new(p), f)
}

pub fn parse<'a, V>(
    p: &Parser<V>,
    input: impl Into<Cursor<'a>>,
) -> Result<ParseResult<'a, V>, ParseError> {
    p.parse(input)
}

impl<V> Parser<V> {
    pub fn and(self, next: Parser<V>) -> Self {
        sequence([self, next])
    }

    pub fn or(self, alternative: Parser<V>) -> Self {
        alternation([self, alternative])
    }

    pub fn optional(self) -> Self {
        optional(self)
    }

    pub fn zero_or_more(self) -> Self {
        zero_or_more(self)
    }

    pub fn one_or_more(self) -> Self {
        one_or_more(self)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        not(self)
    }

    pub fn before(self) -> Self {
        before(self)
    }

    pub fn repeat(self, n: usize) -> Self {
        repeat(self, n)
    }

    pub fn repeat_min(self, n: usize) -> Self {
        repeat_min(self, n)
    }

    pub fn repeat_max(self, n: usize) -> Self {
        repeat_max(self, n)
    }

    pub fn repeat_range(self, min: usize, max: usize) -> Self {
        repeat_range(self, min, max)
    }

    pub fn synthesize<F, E>(self, f: F) -> Self
    where
        V: 'static,
        F: for<'s> Fn(Synthesis<'s, V>) -> Result<V, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        synthesize(self, f)
    }
}

impl<V> BitAnd for Parser<V> {
    type Output = Parser<V>;

    fn bitand(self, rhs: Parser<V>) -> Parser<V> {
        self.and(rhs)
    }
}

impl<V> BitOr for Parser<V> {
    type Output = Parser<V>;

    fn bitor(self, rhs: Parser<V>) -> Parser<V> {
        self.or(rhs)
    }
}

impl<V> Not for Parser<V> {
    type Output = Parser<V>;

    fn not(self) -> Parser<V> {
        not(self)
    }
}

impl<V> From<&str> for Parser<V> {
    fn from(text: &str) -> Self {
        literal(text)
    }
}
