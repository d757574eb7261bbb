//! Parsing of the number being converted.
use tracing::debug;

use crate::core::base::skip_leading_space;
use crate::error::{Error, Result};
use crate::types::Radix;

/// Parse `token` as an unsigned integer written in `radix`.
///
/// Leading whitespace is skipped. A single `+` or `-` sign may follow; a
/// negative value wraps modulo 2^64, so `-1` is `u64::MAX`. For radix 16 an
/// optional `0x`/`0X` prefix comes next. Digits may be in either letter case.
/// The magnitude must fit in a `u64` before negation. Every character is checked
/// for validity before the value is range checked, so a token that is both
/// too long and malformed reports [`Error::TargetNotInBase`].
///
/// The `tip` carried by a `TargetNotInBase` error is the radix number; callers
/// holding the original base token should substitute it.
pub fn parse_target(token: &str, radix: Radix) -> Result<u64> {
    let not_in_base = || Error::TargetNotInBase {
        tip: radix.to_string(),
    };

    let rest = skip_leading_space(token);
    let (negative, unsigned) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };
    let digits = if radix == Radix::HEXADECIMAL {
        unsigned
            .strip_prefix("0x")
            .or_else(|| unsigned.strip_prefix("0X"))
            .unwrap_or(unsigned)
    } else {
        unsigned
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix.get())) {
        debug!("target {:?} has no valid digits in radix {}", token, radix);
        return Err(not_in_base());
    }

    // All digits are valid, so overflow is the only remaining failure.
    let magnitude =
        u64::from_str_radix(digits, radix.get()).map_err(|_| Error::TargetOutOfRange)?;
    let value = if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    };
    debug!("target {:?} parsed as {} in radix {}", token, value, radix);
    Ok(value)
}
