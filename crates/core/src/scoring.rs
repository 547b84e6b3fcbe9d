//! Scoring module - points per lock event
//!
//! Rows cleared by a single lock are scored together as one batch on the
//! non-linear curve 100 / 300 / 500 / 800.

use crate::types::LINE_SCORES;

/// Points for clearing `lines` rows in one lock.
///
/// More than four rows cannot come from a single piece; such counts score as
/// four.
pub fn calculate_line_score(lines: usize) -> u32 {
    LINE_SCORES[lines.min(LINE_SCORES.len() - 1)]
}
