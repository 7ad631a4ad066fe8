use super::Error;

/// Error when a key column of a persisted record is reassigned.
///
/// Partition and clustering key values identify the row; changing them after
/// the row exists would address a different row.
#[derive(Debug)]
pub(super) struct IllegalKeyMutation {
    column: Box<str>,
}

impl std::error::Error for IllegalKeyMutation {}

impl core::fmt::Display for IllegalKeyMutation {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "can't update key '{}' for persisted records", self.column)
    }
}

impl Error {
    /// Creates an illegal key mutation error for the given column.
    pub fn illegal_key_mutation(column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::IllegalKeyMutation(IllegalKeyMutation {
            column: column.into().into(),
        }))
    }

    /// Returns `true` if this error is an illegal key mutation error.
    pub fn is_illegal_key_mutation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::IllegalKeyMutation(_))
    }
}
