//! Ready-made grammars for common lexical shapes.

mod parsers;

pub use parsers::{alphabetic, alphanumeric, digit, email, sign, token, token_list, whitespace};
