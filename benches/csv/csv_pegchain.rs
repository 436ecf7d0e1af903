use std::convert::Infallible;

use pegchain::contrib::{digit, sign, token_list};
use pegchain::prelude::*;

use crate::Value;

pub fn pegchain_parser(parser: &Parser<Value>, s: &str) -> Vec<Value> {
    parser.parse(s).unwrap().into_attributes()
}

pub fn grammar() -> Parser<Value> {
    let integer = (optional(sign()) & one_or_more(digit()))
        .synthesize(|s: Synthesis<'_, Value>| s.text().unwrap_or_default().parse().map(Value::Int));
    let floating = (optional(sign()) & one_or_more(digit()) & literal(".") & zero_or_more(digit()))
        .synthesize(|s: Synthesis<'_, Value>| {
            s.text().unwrap_or_default().parse().map(Value::Float)
        });
    let body = zero_or_more(!literal("'")).synthesize(|s: Synthesis<'_, Value>| {
        Ok::<_, Infallible>(Value::Str(s.text().unwrap_or_default().to_string()))
    });
    let string = literal("'") & body & literal("'");
    let row = token_list(floating | integer | string, literal(",")).synthesize(
        |s: Synthesis<'_, Value>| Ok::<_, Infallible>(Value::List(s.into_attributes())),
    );
    zero_or_more(row)
}
