use nom::{
    branch::alt,
    bytes::complete::{is_not, tag},
    character::complete::{char, digit1, multispace0, one_of},
    combinator::{map, map_res, opt, recognize},
    multi::{many0, separated_list1},
    sequence::{delimited, tuple},
    IResult,
};

use crate::Value;

pub fn nom_parser(s: &str) -> Vec<Value> {
    many0(row)(s).unwrap().1
}

fn integer(i: &str) -> IResult<&str, Value> {
    map_res(recognize(tuple((opt(one_of("+-")), digit1))), |s: &str| {
        s.parse().map(Value::Int)
    })(i)
}

fn floating(i: &str) -> IResult<&str, Value> {
    map_res(
        recognize(tuple((opt(one_of("+-")), digit1, char('.'), opt(digit1)))),
        |s: &str| s.parse().map(Value::Float),
    )(i)
}

fn string(i: &str) -> IResult<&str, Value> {
    map(
        delimited(char('\''), opt(is_not("'")), char('\'')),
        |s: Option<&str>| Value::Str(s.unwrap_or_default().to_string()),
    )(i)
}

fn field(i: &str) -> IResult<&str, Value> {
    delimited(multispace0, alt((floating, integer, string)), multispace0)(i)
}

fn row(i: &str) -> IResult<&str, Value> {
    map(separated_list1(tag(","), field), Value::List)(i)
}
