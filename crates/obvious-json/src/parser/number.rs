//! Numbers, read by an explicit state machine over JSON's number grammar.
//!
//! The value is accumulated digit by digit in an `f64` rather than handed to
//! a float parser, so results carry the rounding of that accumulation.
//!
//! Two asymmetries are intentional. A leading `0` in the integral part ends
//! the integral part (`01` reads as `0` and leaves `1` unconsumed), while the
//! exponent accepts any number of leading zeros (`1e007` is `1e7`).

use super::{Cursor, Outcome, outcome::reject};
use crate::SyntaxError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberState {
    Integral,
    BeforeFraction,
    Fraction,
    BeforeExponent,
    ExponentZeros,
    Exponent,
}

#[inline]
fn digit(c: Option<char>) -> Option<f64> {
    c.and_then(|c| c.to_digit(10)).map(f64::from)
}

pub(super) fn parse(start: Cursor<'_>) -> Outcome<'_, f64> {
    let mut cursor = start.branch();

    let mut sign = 1.0;
    if cursor.head() == Some('-') {
        sign = -1.0;
        cursor.advance(1);
    }

    let Some(first) = digit(cursor.head()) else {
        return Outcome::Unrecognized;
    };

    let mut value = 0.0_f64;
    let mut weight = 1.0_f64;
    let mut exponent = 0.0_f64;
    let mut exponent_negative = false;

    let mut state = if first == 0.0 {
        cursor.advance(1);
        NumberState::BeforeFraction
    } else {
        NumberState::Integral
    };

    loop {
        state = match state {
            NumberState::Integral => match digit(cursor.head()) {
                Some(d) => {
                    value = value * 10.0 + d;
                    cursor.advance(1);
                    NumberState::Integral
                }
                None => NumberState::BeforeFraction,
            },
            NumberState::BeforeFraction => {
                if cursor.head() == Some('.') {
                    cursor.advance(1);
                    if digit(cursor.head()).is_none() {
                        return reject(SyntaxError::MissingFractionDigit, cursor);
                    }
                    NumberState::Fraction
                } else {
                    NumberState::BeforeExponent
                }
            }
            NumberState::Fraction => match digit(cursor.head()) {
                Some(d) => {
                    weight /= 10.0;
                    value += weight * d;
                    cursor.advance(1);
                    NumberState::Fraction
                }
                None => NumberState::BeforeExponent,
            },
            NumberState::BeforeExponent => {
                if !matches!(cursor.head(), Some('e' | 'E')) {
                    return Outcome::Valid(value * sign, cursor);
                }
                cursor.advance(1);
                match cursor.head() {
                    Some('-') => {
                        exponent_negative = true;
                        cursor.advance(1);
                    }
                    Some('+') => cursor.advance(1),
                    _ => {}
                }
                NumberState::ExponentZeros
            }
            NumberState::ExponentZeros => {
                if cursor.head() == Some('0') {
                    cursor.advance(1);
                    NumberState::ExponentZeros
                } else {
                    NumberState::Exponent
                }
            }
            NumberState::Exponent => match digit(cursor.head()) {
                Some(d) => {
                    exponent = exponent * 10.0 + d;
                    cursor.advance(1);
                    NumberState::Exponent
                }
                None => {
                    // A zero mantissa stays zero even when the scale overflows.
                    if value == 0.0 {
                        return Outcome::Valid(value * sign, cursor);
                    }
                    let scale = 10.0_f64.powf(exponent);
                    if exponent_negative {
                        value /= scale;
                    } else {
                        value *= scale;
                    }
                    return Outcome::Valid(value * sign, cursor);
                }
            },
        };
    }
}
