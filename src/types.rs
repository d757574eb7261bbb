//! Shared types used across yabc.
//! Includes the validated `Radix`, the output `LetterCase`, and the
//! `BaseTip` produced by base resolution.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Smallest supported radix.
pub const MIN_RADIX: u32 = 2;
/// Largest supported radix: ten decimal digits plus 26 letters.
pub const MAX_RADIX: u32 = 36;

/// A radix known to lie in `MIN_RADIX..=MAX_RADIX`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Radix(u32);

impl Radix {
    pub const BINARY: Radix = Radix(2);
    pub const OCTAL: Radix = Radix(8);
    pub const DECIMAL: Radix = Radix(10);
    pub const HEXADECIMAL: Radix = Radix(16);

    /// Returns `None` when `value` is outside the supported range.
    pub fn new(value: u32) -> Option<Self> {
        if (MIN_RADIX..=MAX_RADIX).contains(&value) {
            Some(Radix(value))
        } else {
            None
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<i32> for Radix {
    type Error = i32;

    fn try_from(value: i32) -> std::result::Result<Self, Self::Error> {
        u32::try_from(value)
            .ok()
            .and_then(Radix::new)
            .ok_or(value)
    }
}

impl TryFrom<u32> for Radix {
    type Error = String;

    fn try_from(value: u32) -> std::result::Result<Self, Self::Error> {
        Radix::new(value)
            .ok_or_else(|| format!("radix must be in {MIN_RADIX}..={MAX_RADIX}, got {value}"))
    }
}

impl From<Radix> for u32 {
    fn from(radix: Radix) -> Self {
        radix.0
    }
}

impl std::fmt::Display for Radix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Letter case for digit values 10..=35 in rendered output.
#[derive(
    Copy,
    Clone,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    ValueEnum,
    Debug,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LetterCase {
    #[default]
    Lower,
    Upper,
}

impl LetterCase {
    /// The symbol standing for digit value 10.
    pub fn letter_ten(self) -> u8 {
        match self {
            LetterCase::Lower => b'a',
            LetterCase::Upper => b'A',
        }
    }
}

impl std::fmt::Display for LetterCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LetterCase::Lower => write!(f, "lower"),
            LetterCase::Upper => write!(f, "upper"),
        }
    }
}

/// Outcome of resolving a base token.
///
/// `Resolved` holds the raw parsed value, which may still fall outside the
/// supported radix range; see [`Radix::try_from`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum BaseTip {
    Resolved(i32),
    Unrecognized,
}
