//! Trainer code allocation.
//!
//! Trainer codes are `T` followed by a sequence number zero-padded to at
//! least two digits: `T01`, `T02`, ..., `T99`, `T100`. A new code is always
//! the current maximum plus one; gaps left by deleted trainers are never
//! reused.
//!
//! Ordering between codes is numeric. The repository layer relies on the
//! fact that allocated codes are canonical (no padding beyond two digits),
//! so ordering by `(length, text)` yields the same result in SQL.

use crate::error::CoreError;

/// Leading character of every trainer code.
pub const CODE_PREFIX: char = 'T';

/// Minimum number of digits after the prefix.
pub const MIN_DIGITS: usize = 2;

/// Code assigned to the first trainer.
pub const FIRST_CODE: &str = "T01";

/// Format a sequence number as a trainer code.
///
/// ```
/// use trainerhub_core::trainer_code::format_code;
///
/// assert_eq!(format_code(1), "T01");
/// assert_eq!(format_code(42), "T42");
/// assert_eq!(format_code(100), "T100");
/// ```
pub fn format_code(number: u64) -> String {
    format!("{CODE_PREFIX}{number:0width$}", width = MIN_DIGITS)
}

/// Extract the sequence number from a stored trainer code.
///
/// A code that is not `T` followed by ASCII digits was not produced by
/// this allocator and is reported as an internal error.
pub fn parse_number(code: &str) -> Result<u64, CoreError> {
    let digits = code
        .strip_prefix(CODE_PREFIX)
        .filter(|d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
        .ok_or_else(|| CoreError::Internal(format!("malformed trainer code '{code}'")))?;

    digits
        .parse::<u64>()
        .map_err(|e| CoreError::Internal(format!("trainer code '{code}' out of range: {e}")))
}

/// Compute the code that follows `last`, or [`FIRST_CODE`] when there is
/// no trainer yet.
pub fn next_code(last: Option<&str>) -> Result<String, CoreError> {
    let Some(last) = last else {
        return Ok(FIRST_CODE.to_string());
    };
    let next = parse_number(last)?
        .checked_add(1)
        .ok_or_else(|| CoreError::Internal("trainer code sequence exhausted".to_string()))?;
    Ok(format_code(next))
}
