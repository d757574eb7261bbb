//! High-level library API: resolve base tokens and convert a target from one
//! radix to another in a single call. Prefer these entrypoints over the
//! low-level `core` modules when integrating yabc.
use tracing::debug;

use crate::core::base::check_radix;
use crate::core::params::ConversionParams;
use crate::core::render::render_in_radix;
use crate::core::target::parse_target;
use crate::error::Result;
use crate::types::{LetterCase, Radix};

/// Resolve a base token (`"16"`, `"0x10"`, `"hex"`, ...) to a supported radix.
pub fn resolve_radix(tip: &str) -> Result<Radix> {
    check_radix(tip)
}

/// Convert `target`, written in the base named by `from_tip`, to the base
/// named by `to_tip`.
///
/// Inputs are validated in order (source base, destination base, target),
/// and the first failure is returned. Nothing is rendered until all of them
/// pass.
///
/// ```
/// use yabc::{convert, LetterCase};
///
/// assert_eq!(convert("16", "2", "ff", LetterCase::Lower).unwrap(), "11111111");
/// assert_eq!(convert("dec", "hex", "255", LetterCase::Upper).unwrap(), "FF");
/// ```
pub fn convert(from_tip: &str, to_tip: &str, target: &str, case: LetterCase) -> Result<String> {
    let params = ConversionParams::from_tips(from_tip, to_tip, case)?;
    let value = parse_target(target, params.from).map_err(|e| e.with_source_tip(from_tip))?;
    Ok(render(&params, value))
}

/// Convert `target` using already-validated parameters.
pub fn convert_with(params: &ConversionParams, target: &str) -> Result<String> {
    let value = parse_target(target, params.from)?;
    Ok(render(params, value))
}

fn render(params: &ConversionParams, value: u64) -> String {
    let rendered = render_in_radix(params.to, value, params.case);
    debug!(
        "rendered {} from radix {} as {:?} in radix {}",
        value, params.from, rendered, params.to
    );
    rendered
}
