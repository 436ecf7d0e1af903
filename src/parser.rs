use std::{fmt, sync::Arc};

use crate::{
    combinators,
    cursor::Cursor,
    error::{BoxError, ParseError},
    logging::Loggable,
    parse_result::ParseResult,
    repeat,
    synthesis::{self, Synthesis},
    text_parser,
};

pub type SynthesisFn<V> =
    Arc<dyn for<'s> Fn(Synthesis<'s, V>) -> Result<V, BoxError> + Send + Sync>;

/// A grammar node.
///
/// Grammars are immutable values assembled ahead of time (see [`crate::combo`])
/// and can be reused for any number of parses, from any number of threads.
/// `V` is the type of value produced by [`Parser::Synthesize`] nodes; grammars
/// that synthesize nothing can leave it as `()`.
///
/// Build grammars with the constructors and operators in [`crate::combo`] rather
/// than the variants directly: those keep sequences and alternations flat and
/// collapse one-element lists. A hand-built nested node matches the same text,
/// it is just deeper to evaluate and to print.
pub enum Parser<V = ()> {
    Literal(String),
    CharClass(String),
    Anything,
    Sequence(Vec<Parser<V>>),
    Alternation(Vec<Parser<V>>),
    Optional(Arc<Parser<V>>),
    ZeroOrMore(Arc<Parser<V>>),
    OneOrMore(Arc<Parser<V>>),
    Not(Arc<Parser<V>>),
    Lookahead(Arc<Parser<V>>),
    RepeatExact(Arc<Parser<V>>, usize),
    RepeatMin(Arc<Parser<V>>, usize),
    RepeatMax(Arc<Parser<V>>, usize),
    RepeatRange(Arc<Parser<V>>, usize, usize),
    Synthesize(Arc<Parser<V>>, SynthesisFn<V>),
}

impl<V> Clone for Parser<V> {
    fn clone(&self) -> Self {
        match self {
            Self::Literal(s) => Self::Literal(s.clone()),
            Self::CharClass(s) => Self::CharClass(s.clone()),
            Self::Anything => Self::Anything,
            Self::Sequence(v) => Self::Sequence(v.clone()),
            Self::Alternation(v) => Self::Alternation(v.clone()),
            Self::Optional(p) => Self::Optional(Arc::clone(p)),
            Self::ZeroOrMore(p) => Self::ZeroOrMore(Arc::clone(p)),
            Self::OneOrMore(p) => Self::OneOrMore(Arc::clone(p)),
            Self::Not(p) => Self::Not(Arc::clone(p)),
            Self::Lookahead(p) => Self::Lookahead(Arc::clone(p)),
            Self::RepeatExact(p, n) => Self::RepeatExact(Arc::clone(p), *n),
            Self::RepeatMin(p, n) => Self::RepeatMin(Arc::clone(p), *n),
            Self::RepeatMax(p, n) => Self::RepeatMax(Arc::clone(p), *n),
            Self::RepeatRange(p, min, max) => Self::RepeatRange(Arc::clone(p), *min, *max),
            Self::Synthesize(p, f) => Self::Synthesize(Arc::clone(p), Arc::clone(f)),
        }
    }
}

impl<V> Parser<V> {
    /// Matches a prefix of `input`.
    ///
    /// A grammar that does not match is reported through the result's status;
    /// `Err` is reserved for [`ParseError`]s.
    pub fn parse<'a>(
        &self,
        input: impl Into<Cursor<'a>>,
    ) -> Result<ParseResult<'a, V>, ParseError> {
        self.parse_at(input.into())
    }

    pub(crate) fn parse_at<'a>(&self, cur: Cursor<'a>) -> Result<ParseResult<'a, V>, ParseError> {
        let action = self.kind();
        cur.log_inputs(action, NodeArgs(self));
        let res = match self {
            Self::Literal(target) => text_parser::literal(cur, target),
            Self::CharClass(set) => text_parser::char_class(cur, set),
            Self::Anything => text_parser::anything(cur)?,
            Self::Sequence(children) => combinators::sequence(cur, children)?,
            Self::Alternation(children) => combinators::alternation(cur, children)?,
            Self::Optional(p) => combinators::optional(cur, p)?,
            Self::ZeroOrMore(p) => repeat::zero_or_more(cur, p)?,
            Self::OneOrMore(p) => repeat::one_or_more(cur, p)?,
            Self::Not(p) => combinators::not(cur, p)?,
            Self::Lookahead(p) => combinators::before(cur, p)?,
            Self::RepeatExact(p, n) => repeat::exact(cur, p, *n)?,
            Self::RepeatMin(p, n) => repeat::at_least(cur, p, *n)?,
            Self::RepeatMax(p, n) => repeat::between(cur, p, 0, *n)?,
            Self::RepeatRange(p, min, max) => repeat::between(cur, p, *min, *max)?,
            Self::Synthesize(p, f) => synthesis::synthesize(cur, p, f)?,
        };
        if res.succeeded() {
            cur.log_success(action, NodeArgs(self), res.matched(), res.attributes().len());
        } else {
            cur.log_failure(action, NodeArgs(self), res.matched());
        }
        Ok(res)
    }

    /// Strips a synthesis wrapper, leaving the grammar it was attached to.
    pub fn disable_synthesis(self) -> Self {
        match self {
            Self::Synthesize(p, _) => Arc::try_unwrap(p).unwrap_or_else(|p| (*p).clone()),
            other => other,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Literal(_) => "literal",
            Self::CharClass(_) => "char_class",
            Self::Anything => "anything",
            Self::Sequence(_) => "sequence",
            Self::Alternation(_) => "alternation",
            Self::Optional(_) => "optional",
            Self::ZeroOrMore(_) => "zero_or_more",
            Self::OneOrMore(_) => "one_or_more",
            Self::Not(_) => "not",
            Self::Lookahead(_) => "before",
            Self::RepeatExact(..) => "repeat",
            Self::RepeatMin(..) => "repeat_min",
            Self::RepeatMax(..) => "repeat_max",
            Self::RepeatRange(..) => "repeat_range",
            Self::Synthesize(..) => "synthesize",
        }
    }

    fn args(&self) -> String {
        format!("{:?}", NodeArgs(self))
    }

    fn children(&self) -> Vec<&Parser<V>> {
        match self {
            Self::Literal(_) | Self::CharClass(_) | Self::Anything => vec![],
            Self::Sequence(v) | Self::Alternation(v) => v.iter().collect(),
            Self::Optional(p)
            | Self::ZeroOrMore(p)
            | Self::OneOrMore(p)
            | Self::Not(p)
            | Self::Lookahead(p)
            | Self::RepeatExact(p, _)
            | Self::RepeatMin(p, _)
            | Self::RepeatMax(p, _)
            | Self::RepeatRange(p, ..)
            | Self::Synthesize(p, _) => vec![p.as_ref()],
        }
    }

    /// Renders the grammar as an indented tree, one node per line.
    pub fn name(&self, indent: &str) -> String {
        let mut s = format!("{indent}{kind}({args})", kind = self.kind(), args = self.args());
        let indent = indent.replace("└──", "|  ");
        for child in self.children() {
            s.push('\n');
            s.push_str(&child.name(&format!("{indent}└──")));
        }
        s
    }
}

/// Formats a node's own arguments (not its children) on demand, so that
/// disabled trace logging costs nothing.
struct NodeArgs<'p, V>(&'p Parser<V>);

impl<'p, V> fmt::Debug for NodeArgs<'p, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Parser::Literal(s) | Parser::CharClass(s) => write!(f, "{s:?}"),
            Parser::Sequence(v) | Parser::Alternation(v) => write!(f, "{}", v.len()),
            Parser::RepeatExact(_, n) | Parser::RepeatMin(_, n) | Parser::RepeatMax(_, n) => {
                write!(f, "{n}")
            }
            Parser::RepeatRange(_, min, max) => write!(f, "{min}..={max}"),
            _ => Ok(()),
        }
    }
}

impl<V> fmt::Display for Parser<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name(""))
    }
}

impl<V> fmt::Debug for Parser<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            Self::CharClass(s) => f.debug_tuple("CharClass").field(s).finish(),
            Self::Synthesize(p, _) => f.debug_tuple("Synthesize").field(p).field(&"<fn>").finish(),
            other => {
                let mut t = f.debug_tuple(other.kind());
                for child in other.children() {
                    t.field(child);
                }
                t.finish()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use test_log::test;

    fn lit(s: &str) -> Parser {
        literal(s)
    }

    #[test]
    fn test_prefix_property() -> Result<(), ParseError> {
        let grammars: Vec<Parser> = vec![
            lit("hi"),
            zero_or_more(lit("hi")),
            lit("hi") & lit("ho"),
            lit("a") | lit("ab"),
            not(lit("a")),
            before(lit("end")),
            repeat_range(char_class("abc"), 1, 4),
        ];
        for g in &grammars {
            for input in ["hihoend", "abcabc", "endstuff", "", "bcd"] {
                let res = g.parse(input)?;
                if res.succeeded() {
                    assert_eq!(format!("{}{}", res.matched(), res.remainder()), input, "{g}");
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_reparse_remainder() -> Result<(), ParseError> {
        let g: Parser = lit("hi") | lit("ho");
        let input = "hihoho!";
        let r1 = g.parse(input)?;
        let r2 = g.parse(r1.remainder_cursor())?;
        let r3 = g.parse(r2.remainder_cursor())?;
        assert_eq!((r1.matched(), r2.matched(), r3.matched()), ("hi", "ho", "ho"));
        assert_eq!(r3.remainder(), "!");
        assert_eq!(r3.remainder_cursor().position(), 6);

        // a plain &str starts counting afresh
        let r = g.parse(r1.remainder())?;
        assert_eq!((r.matched(), r.remainder_cursor().position()), ("ho", 2));

        // same grammar, same input, same answer
        assert_eq!(g.parse(input)?, r1);
        Ok(())
    }

    #[test]
    fn test_grammar_shared_across_threads() {
        let g: Parser<usize> = one_or_more(char_class("0123456789"))
            .synthesize(|s: Synthesis<'_, usize>| -> Result<usize, BoxError> {
                Ok(s.text().unwrap_or_default().len())
            });
        let g = std::sync::Arc::new(g);
        let handles: Vec<_> = (1..4)
            .map(|n| {
                let g = std::sync::Arc::clone(&g);
                std::thread::spawn(move || {
                    let input = "7".repeat(n);
                    let attributes = g.parse(input.as_str()).map(|r| r.into_attributes());
                    attributes
                })
            })
            .collect();
        for (n, h) in (1..4).zip(handles) {
            assert_eq!(h.join().unwrap().unwrap(), vec![n]);
        }
    }

    #[test]
    fn test_name() {
        let g: Parser = (lit("a") | lit("b")) & zero_or_more(char_class("xy"));
        assert_eq!(
            g.to_string(),
            "sequence(2)\n\
             └──alternation(2)\n\
             |  └──literal(\"a\")\n\
             |  └──literal(\"b\")\n\
             └──zero_or_more()\n\
             |  └──char_class(\"xy\")"
        );
        assert_eq!(format!("{:?}", lit("a").optional()), "optional(Literal(\"a\"))");
    }

    #[test]
    fn test_hand_built_nesting() -> Result<(), ParseError> {
        let nested: Parser = Parser::Sequence(vec![
            Parser::Sequence(vec![lit("a"), lit("b")]),
            Parser::Alternation(vec![Parser::Alternation(vec![lit("x")]), lit("c")]),
        ]);
        let flat: Parser = lit("a") & lit("b") & (lit("x") | lit("c"));
        for input in ["abc!", "abx", "ab", "ac"] {
            let (n, f) = (nested.parse(input)?, flat.parse(input)?);
            assert_eq!(n.status(), f.status(), "{input}");
            assert_eq!((n.matched(), n.remainder()), (f.matched(), f.remainder()));
        }
        assert_eq!(nested.children().len(), 2);
        assert_eq!(flat.children().len(), 3);
        Ok(())
    }

    #[test]
    fn test_disable_synthesis() -> Result<(), ParseError> {
        let g: Parser<String> = literal("a").one_or_more().synthesize(
            |s: Synthesis<'_, String>| -> Result<String, BoxError> {
                Ok(s.text().unwrap_or_default().to_uppercase())
            },
        );
        assert_eq!(g.parse("aab")?.attributes(), &["AA".to_string()]);

        let plain = g.disable_synthesis();
        assert_eq!(plain.kind(), "one_or_more");
        let res = plain.parse("aab")?;
        assert_eq!(res.matched(), "aa");
        assert!(res.attributes().is_empty());

        // no-op on anything else
        assert_eq!(lit("a").disable_synthesis().kind(), "literal");
        Ok(())
    }
}
