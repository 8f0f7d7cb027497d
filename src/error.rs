use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("{op}: input sequence is absent")]
    MissingInput { op: &'static str },
    #[error("range {low}..={high} is out of bounds for a sequence of length {len}")]
    RangeOutOfBounds { low: usize, high: usize, len: usize },
}
