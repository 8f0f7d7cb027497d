use tracing::warn;

use crate::SortError;

pub(crate) fn require_mut<'a, T>(
    v: Option<&'a mut [T]>,
    op: &'static str,
) -> Result<&'a mut [T], SortError> {
    v.ok_or_else(|| missing_input(op))
}

pub(crate) fn require<'a, T>(v: Option<&'a [T]>, op: &'static str) -> Result<&'a [T], SortError> {
    v.ok_or_else(|| missing_input(op))
}

fn missing_input(op: &'static str) -> SortError {
    warn!(op, "rejected absent input sequence");
    SortError::MissingInput { op }
}
