//! Field and tag spellings emitted by the PolySubML compiler.
//!
//! These are a wire contract: the compiler lowers sum-type cases, tuples and
//! `loop` bodies into plain objects using exactly these names. Changing any of
//! them breaks every consumer of compiled output.

/// Field holding the discriminant of a tagged variant (e.g. `` `Some ``).
pub const TAG_FIELD: &str = "$tag";

/// Field holding the payload of a tagged variant.
pub const PAYLOAD_FIELD: &str = "$val";

/// Prefix of positional tuple fields: `_0`, `_1`, ...
pub const TUPLE_FIELD_PREFIX: char = '_';

/// Tag a `loop` body returns to request another iteration.
pub const CONTINUE_TAG: &str = "Continue";

/// Tag a `loop` body returns to finish with a result.
pub const BREAK_TAG: &str = "Break";

/// Name of positional field `index` (`_0`, `_1`, ...).
pub fn tuple_field(index: usize) -> String {
    format!("{TUPLE_FIELD_PREFIX}{index}")
}

/// Parse a positional field name back into its index.
///
/// Only canonical spellings are accepted: `_01` and `_+1` are not positional.
pub fn tuple_index(name: &str) -> Option<usize> {
    let digits = name.strip_prefix(TUPLE_FIELD_PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    digits.parse().ok()
}
