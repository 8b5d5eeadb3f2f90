use thiserror::Error;

/// Errors returned when resolving offsets against a [`LocationIndex`](crate::LocationIndex).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Error)]
pub enum LocateError {
    /// The requested offset is negative or lies past the end of the source.
    ///
    /// `len` itself is a valid offset, denoting the end of the source.
    #[error("offset {offset} is out of range for a source of length {len}")]
    OffsetOutOfRange { offset: i64, len: usize },
}

impl LocateError {
    pub(crate) fn out_of_range(offset: i64, len: usize) -> Self {
        LocateError::OffsetOutOfRange { offset, len }
    }
}
