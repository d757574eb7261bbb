//! Base-token resolution.
//!
//! A base token ("tip") is either an integer literal, written with C-style
//! auto-detected notation (`16`, `0x10`, `020`), or one of the mnemonics
//! `hex`, `dec`, `oct` and `bin`. Resolution and range validation are kept
//! apart: [`resolve_base_tip`] returns whatever integer the literal denotes,
//! and [`check_radix`] decides whether that integer is a supported radix.
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{BaseTip, Radix};

const MNEMONICS: [(&str, i32); 4] = [("hex", 16), ("dec", 10), ("oct", 8), ("bin", 2)];

/// Map a base token to the integer it names.
///
/// Numeric tokens are returned verbatim when they fit in an `i32`, even when
/// that value is not a usable radix (`"1"` resolves to `1`).
pub fn resolve_base_tip(tip: &str) -> BaseTip {
    match parse_integer_literal(tip) {
        Some(value) => match i32::try_from(value) {
            Ok(value) => BaseTip::Resolved(value),
            Err(_) => BaseTip::Unrecognized,
        },
        None => MNEMONICS
            .iter()
            .find(|(name, _)| tip.eq_ignore_ascii_case(name))
            .map_or(BaseTip::Unrecognized, |&(_, radix)| BaseTip::Resolved(radix)),
    }
}

/// Resolve `tip` and require the result to be a supported radix.
pub fn check_radix(tip: &str) -> Result<Radix> {
    let resolved = resolve_base_tip(tip);
    debug!("base tip {:?} resolved to {:?}", tip, resolved);

    match resolved {
        BaseTip::Resolved(value) => Radix::try_from(value).map_err(|_| Error::UnsupportedBase {
            tip: tip.to_string(),
        }),
        BaseTip::Unrecognized => Err(Error::UnrecognizedBase {
            tip: tip.to_string(),
        }),
    }
}

/// Skip the leading whitespace C's `isspace` recognises, vertical tab included.
pub(crate) fn skip_leading_space(s: &str) -> &str {
    s.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b')
}

/// Parse a whole token as a signed integer literal, detecting the radix from
/// its prefix: `0x`/`0X` is hexadecimal, a leading `0` is octal, anything else
/// is decimal. Leading whitespace and a single sign are accepted.
///
/// Returns `None` unless every character of the token is consumed. Values too
/// large for `i128` saturate, which is enough for callers narrowing to `i32`.
fn parse_integer_literal(tip: &str) -> Option<i128> {
    let rest = skip_leading_space(tip);
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let (radix, digits) = if let Some(hex) = rest
        .strip_prefix("0x")
        .or_else(|| rest.strip_prefix("0X"))
    {
        (16, hex)
    } else if rest.starts_with('0') {
        // The leading zero is itself an octal digit, so "0" parses as zero.
        (8, rest)
    } else {
        (10, rest)
    };

    if digits.is_empty() {
        return None;
    }

    let mut magnitude: i128 = 0;
    for c in digits.chars() {
        let digit = c.to_digit(radix)?;
        magnitude = magnitude
            .saturating_mul(i128::from(radix))
            .saturating_add(i128::from(digit));
    }

    Some(if negative { -magnitude } else { magnitude })
}
