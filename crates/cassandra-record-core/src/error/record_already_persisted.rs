use super::Error;

/// Error when `create` runs on a record that is already persisted.
#[derive(Debug)]
pub(super) struct RecordAlreadyPersisted {
    table: Box<str>,
}

impl std::error::Error for RecordAlreadyPersisted {}

impl core::fmt::Display for RecordAlreadyPersisted {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "record already persisted: {}", self.table)
    }
}

impl Error {
    /// Creates a record already persisted error.
    pub fn record_already_persisted(table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::RecordAlreadyPersisted(
            RecordAlreadyPersisted {
                table: table.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a record already persisted error.
    pub fn is_record_already_persisted(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::RecordAlreadyPersisted(_))
    }
}
