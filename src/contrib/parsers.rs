use once_cell::sync::Lazy;

use crate::prelude::*;

static ALPHA: Lazy<String> = Lazy::new(|| ('A'..='Z').chain('a'..='z').collect());
static DIGITS: Lazy<String> = Lazy::new(|| ('0'..='9').collect());
static ALPHANUMERIC: Lazy<String> = Lazy::new(|| ALPHA.chars().chain(DIGITS.chars()).collect());

/// spaces, tabs and newlines, possibly none
pub fn whitespace<V>() -> Parser<V> {
    zero_or_more(char_class(" \n\t"))
}

/// `target` with any surrounding whitespace
pub fn token<V>(target: Parser<V>) -> Parser<V> {
    whitespace() & target & whitespace()
}

/// one or more `target`s separated by `delimiter`, whitespace allowed throughout
pub fn token_list<V>(target: Parser<V>, delimiter: Parser<V>) -> Parser<V> {
    token(target.clone()) & zero_or_more(token(delimiter) & token(target))
}

pub fn digit<V>() -> Parser<V> {
    char_class(&DIGITS)
}

pub fn sign<V>() -> Parser<V> {
    char_class("+-")
}

/// one ASCII letter
pub fn alphabetic<V>() -> Parser<V> {
    char_class(&ALPHA)
}

pub fn alphanumeric<V>() -> Parser<V> {
    char_class(&ALPHANUMERIC)
}

// \b[A-Z0-9._%+-]+@([A-Z0-9-]+\.)+[A-Z]{2,4}\b
pub fn email<V>() -> Parser<V> {
    static NAME: Lazy<String> =
        Lazy::new(|| ALPHANUMERIC.chars().chain(['.', '_', '%', '+', '-']).collect());
    static LABEL: Lazy<String> = Lazy::new(|| ALPHANUMERIC.chars().chain(['-']).collect());

    one_or_more(char_class(&NAME))
        & literal("@")
        & one_or_more(one_or_more(char_class(&LABEL)) & literal("."))
        & repeat_range(alphabetic(), 2, 4)
}
