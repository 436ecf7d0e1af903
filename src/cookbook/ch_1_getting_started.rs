//! Matching without producing values.
//!
//! A grammar that synthesizes nothing is a `Parser<()>`, which is what plain `Parser`
//! means. Each rule below is a function returning a fresh grammar; they could equally
//! be built once and stored.

use crate::contrib::{digit, whitespace};
use crate::prelude::*;

/// `hh:mm`, 24 hour clock, with an optional `:ss`
pub fn clock() -> Parser {
    let hh = char_class("01") & digit() | literal("2") & char_class("0123");
    let mm = char_class("012345") & digit();
    hh & literal(":") & mm.clone() & optional(literal(":") & mm)
}

/// a line comment runs to the end of the line (or input), not including the newline
pub fn line_comment() -> Parser {
    literal("//") & zero_or_more(!char_class("\n"))
}

/// An identifier that is not a keyword.
///
/// `!p` consumes the char it checks, so "not a keyword" is written as a peek at the
/// first char followed by `!before(keyword)`, which then consumes that char.
pub fn identifier() -> Parser {
    let first = || char_class("_abcdefghijklmnopqrstuvwxyz");
    let rest = zero_or_more(char_class("_abcdefghijklmnopqrstuvwxyz0123456789"));
    // a keyword needs a following non-identifier char
    let keyword = (literal("let") | literal("fn")) & before(!first());
    before(first()) & !before(keyword) & rest
}

pub fn assignment() -> Parser {
    literal("let") & one_or_more(char_class(" ")) & identifier() & whitespace() & literal("=")
}
