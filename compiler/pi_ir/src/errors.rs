//! Term construction errors.

use crate::Sort;

/// An operand did not match the sort its grammar position requires.
///
/// Raised only while assembling terms. A machine never produces it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("malformed term: operand {position} of `{constructor}` must be {expected}, found {found}")]
pub struct MalformedTerm {
    /// Grammar rule being built, e.g. `"Sum"`.
    pub constructor: &'static str,
    /// 0-based operand position.
    pub position: usize,
    pub expected: Sort,
    pub found: Sort,
}

impl MalformedTerm {
    pub(crate) fn new(constructor: &'static str, position: usize, expected: Sort, found: Sort) -> Self {
        MalformedTerm {
            constructor,
            position,
            expected,
            found,
        }
    }
}
