//! Numeric value and unit parsing for token text.
//!
//! Validators receive tokens whose text still carries any unit suffix
//! (`-5.5%`, `1200ms`); the helpers here parse that text with nom.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1},
    combinator::{all_consuming, map_res, opt, recognize},
    sequence::{pair, tuple},
};

use crate::types::{Axis, Scalar, Unit};

/// Parse a floating point or integer number.
pub fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((opt(char('-')), digit1, opt(pair(char('.'), digit1))))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

/// Parses a full scalar: a number with an optional `%` suffix.
///
/// A bare number is in cells; `%` makes it a percentage of `axis`.
pub fn scalar(input: &str, axis: Axis) -> Option<Scalar> {
    let (_, (value, percent)) = all_consuming(pair(parse_number, opt(char('%'))))(input).ok()?;
    Some(Scalar {
        value,
        unit: if percent.is_some() {
            Unit::Percent
        } else {
            Unit::Cells
        },
        axis,
    })
}

/// Parses a duration in seconds: bare number, `s` suffix, or `ms` suffix
/// (milliseconds, divided by 1000).
pub fn seconds(input: &str) -> Option<f64> {
    let (_, (value, suffix)) =
        all_consuming(pair(parse_number, opt(alt((tag("ms"), tag("s"))))))(input).ok()?;
    Some(match suffix {
        Some("ms") => value / 1000.0,
        _ => value,
    })
}

/// Parses a whole number of cells, sign permitted.
pub fn integer(input: &str) -> Option<i32> {
    let (_, text) = all_consuming::<_, _, nom::error::Error<&str>, _>(recognize(pair(
        opt(char('-')),
        digit1,
    )))(input)
    .ok()?;
    text.parse().ok()
}

/// Parses a fraction: a bare number taken as-is, or a percentage divided
/// by 100. No clamping happens here.
pub fn fraction(input: &str) -> Option<f64> {
    let (_, (value, percent)) = all_consuming(pair(parse_number, opt(char('%'))))(input).ok()?;
    Some(if percent.is_some() {
        value / 100.0
    } else {
        value
    })
}
