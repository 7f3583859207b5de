use thiserror::Error;

/// The top-level error type for this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A constructor received a size or start index it cannot accept
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// An index fell outside the half-open range `[start, end)`
    #[error("index {index} is out of range {start}..{end}")]
    IndexOutOfRange {
        index: isize,
        start: usize,
        end: usize,
    },

    /// A binary operation was given operands of different sizes
    #[error("size mismatch: left operand has size {lhs}, right operand has size {rhs}")]
    SizeMismatch { lhs: usize, rhs: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) const fn index_out_of_range(index: isize, start: usize, end: usize) -> Self {
        Self::IndexOutOfRange { index, start, end }
    }

    pub(crate) fn size_mismatch(lhs: usize, rhs: usize) -> Self {
        log::debug!("rejecting binary operation {{lhs: {lhs}, rhs: {rhs}}}");
        Self::SizeMismatch { lhs, rhs }
    }

    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    #[must_use]
    pub const fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    #[must_use]
    pub const fn is_size_mismatch(&self) -> bool {
        matches!(self, Self::SizeMismatch { .. })
    }
}
