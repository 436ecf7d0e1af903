//! Comma separated values with typed fields.
//!
//! Each field becomes a [`Value`] and each line a `Value::List`. Floats are tried
//! before integers since `1.5` starts with an integer, and choice is ordered.
//!
//! ```
//! use pegchain::cookbook::ch_4_csv::{rows, Value};
//!
//! let table = rows("1, 2.5\n'x', -3").unwrap();
//! assert_eq!(
//!     table,
//!     Some(vec![
//!         vec![Value::Int(1), Value::Float(2.5)],
//!         vec![Value::Str("x".to_string()), Value::Int(-3)],
//!     ])
//! );
//! ```

use std::convert::Infallible;

use crate::contrib::{digit, sign, token_list};
use crate::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
}

pub fn integer() -> Parser<Value> {
    (optional(sign()) & one_or_more(digit()))
        .synthesize(|s: Synthesis<'_, Value>| s.text().unwrap_or_default().parse().map(Value::Int))
}

/// `12.`, `-0.5`; digits are needed before the point only
pub fn floating() -> Parser<Value> {
    (optional(sign()) & one_or_more(digit()) & literal(".") & zero_or_more(digit()))
        .synthesize(|s: Synthesis<'_, Value>| {
            s.text().unwrap_or_default().parse().map(Value::Float)
        })
}

/// single quoted, no escapes
pub fn string() -> Parser<Value> {
    let quote = || literal("'");
    let body = zero_or_more(!quote()).synthesize(|s: Synthesis<'_, Value>| {
        Ok::<_, Infallible>(Value::Str(s.text().unwrap_or_default().to_string()))
    });
    quote() & body & quote()
}

pub fn value() -> Parser<Value> {
    floating() | integer() | string()
}

/// One line of fields. The whitespace around a field includes newlines, so the
/// line break after the last field is consumed along with it.
pub fn value_list() -> Parser<Value> {
    token_list(value(), literal(","))
        .synthesize(|s: Synthesis<'_, Value>| Ok::<_, Infallible>(Value::List(s.into_attributes())))
}

/// Parses a whole document, `None` if any of it is left unparsed.
pub fn rows(text: &str) -> Result<Option<Vec<Vec<Value>>>, ParseError> {
    let res = zero_or_more(value_list()).parse(text)?;
    if !res.succeeded() || !res.remainder().is_empty() {
        return Ok(None);
    }
    let rows = res
        .into_attributes()
        .into_iter()
        .map(|row| match row {
            Value::List(fields) => fields,
            other => vec![other],
        })
        .collect();
    Ok(Some(rows))
}
