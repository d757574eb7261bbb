use serde::{Deserialize, Serialize};

use crate::core::base::check_radix;
use crate::error::Result;
use crate::types::{LetterCase, Radix};

/// Conversion parameters suitable for config files and embedding callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionParams {
    /// Radix the target is written in
    pub from: Radix,
    /// Radix of the rendered result
    pub to: Radix,
    #[serde(default)]
    pub case: LetterCase,
}

impl ConversionParams {
    /// Build parameters from two base tokens, as typed on a command line.
    pub fn from_tips(from_tip: &str, to_tip: &str, case: LetterCase) -> Result<Self> {
        Ok(Self {
            from: check_radix(from_tip)?,
            to: check_radix(to_tip)?,
            case,
        })
    }
}

impl Default for ConversionParams {
    fn default() -> Self {
        Self {
            from: Radix::DECIMAL,
            to: Radix::HEXADECIMAL,
            case: LetterCase::Lower,
        }
    }
}
