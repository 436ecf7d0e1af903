//! Building an AST while parsing.
//!
//! Each `synthesize` replaces whatever its rule produced with one value. Numbers are
//! made from text; products and sums are made from the values of the rules inside
//! them, so by the time the outermost rule has matched, its single attribute is the
//! whole tree.

use crate::contrib::{digit, token};
use crate::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Num(i64),
    Mul(Vec<Expr>),
    Add(Vec<Expr>),
}

impl Expr {
    pub fn eval(&self) -> i64 {
        match self {
            Expr::Num(n) => *n,
            Expr::Mul(v) => v.iter().map(Expr::eval).product(),
            Expr::Add(v) => v.iter().map(Expr::eval).sum(),
        }
    }
}

#[derive(Debug)]
struct NotANumber(String);

impl std::fmt::Display for NotANumber {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "expected a number, found '{}'", self.0)
    }
}

impl std::error::Error for NotANumber {}

fn number(s: Synthesis<'_, Expr>) -> Result<Expr, NotANumber> {
    let text = s.text().unwrap_or_default();
    text.parse().map(Expr::Num).map_err(|_| NotANumber(text.to_string()))
}

/// a one-element list is the element itself
fn fold(op: fn(Vec<Expr>) -> Expr) -> impl Fn(Synthesis<'_, Expr>) -> Result<Expr, BoxError> {
    move |s: Synthesis<'_, Expr>| -> Result<Expr, BoxError> {
        let mut v = s.into_attributes();
        if v.len() == 1 {
            if let Some(e) = v.pop() {
                return Ok(e);
            }
        }
        Ok(op(v))
    }
}

/// `1 + 2 * 3`, no parentheses
pub fn expression() -> Parser<Expr> {
    let num = token(one_or_more(digit()).synthesize(number));
    let product = (num.clone() & zero_or_more(literal("*") & num)).synthesize(fold(Expr::Mul));
    (product.clone() & zero_or_more(literal("+") & product)).synthesize(fold(Expr::Add))
}

pub fn evaluate(s: &str) -> Result<Option<i64>, ParseError> {
    let res = expression().parse(s)?;
    if !res.succeeded() || !res.remainder().is_empty() {
        return Ok(None);
    }
    Ok(res.into_attributes().first().map(Expr::eval))
}
