//! Rendering of unsigned integers in an arbitrary radix.
//!
//! Digits are produced least significant first into a fixed stack buffer and
//! emitted as one contiguous span. Nothing is shared between calls, so every
//! entry point here is safe to use from multiple threads at once.
use std::fmt;

use crate::types::{LetterCase, MAX_RADIX, MIN_RADIX, Radix};

/// Longest possible rendering: `u64::MAX` in radix 2 needs one digit per bit.
const DIGIT_CAPACITY: usize = u64::BITS as usize;

/// Write `value` in `radix` to `out` without leading zeros.
///
/// Zero is written as a single `0`. Digit values 10..=35 use letters in the
/// requested case.
pub fn write_in_radix<W: fmt::Write>(
    out: &mut W,
    radix: Radix,
    value: u64,
    case: LetterCase,
) -> fmt::Result {
    let base = u64::from(radix.get());
    debug_assert!((u64::from(MIN_RADIX)..=u64::from(MAX_RADIX)).contains(&base));

    let letter_ten = case.letter_ten();
    let mut buffer = [0u8; DIGIT_CAPACITY];
    let mut start = DIGIT_CAPACITY;
    let mut remaining = value;

    loop {
        start -= 1;
        // Always < 36, so the narrowing is lossless.
        let digit = (remaining % base) as u8;
        remaining /= base;

        buffer[start] = if digit < 10 {
            b'0' + digit
        } else {
            letter_ten + (digit - 10)
        };

        if remaining == 0 {
            break;
        }
    }

    // Only ASCII digits and letters were written.
    let digits = std::str::from_utf8(&buffer[start..]).map_err(|_| fmt::Error)?;
    out.write_str(digits)
}

/// Render `value` in `radix` into a new `String`.
pub fn render_in_radix(radix: Radix, value: u64, case: LetterCase) -> String {
    InRadix::new(radix, value, case).to_string()
}

/// `Display` adapter that formats a value in a given radix.
///
/// ```
/// use yabc::{InRadix, LetterCase, Radix};
///
/// let shown = format!("{}", InRadix::new(Radix::HEXADECIMAL, 255, LetterCase::Upper));
/// assert_eq!(shown, "FF");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InRadix {
    pub radix: Radix,
    pub value: u64,
    pub case: LetterCase,
}

impl InRadix {
    pub fn new(radix: Radix, value: u64, case: LetterCase) -> Self {
        Self { radix, value, case }
    }
}

impl fmt::Display for InRadix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_in_radix(f, self.radix, self.value, self.case)
    }
}
