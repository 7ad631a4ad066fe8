use super::Error;

/// Error when `delete` or `destroy` runs on a record that was never saved.
#[derive(Debug)]
pub(super) struct RecordNotPersisted {
    table: Box<str>,
}

impl std::error::Error for RecordNotPersisted {}

impl core::fmt::Display for RecordNotPersisted {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "record not persisted: {}", self.table)
    }
}

impl Error {
    /// Creates a record not persisted error.
    pub fn record_not_persisted(table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::RecordNotPersisted(RecordNotPersisted {
            table: table.into().into(),
        }))
    }

    /// Returns `true` if this error is a record not persisted error.
    pub fn is_record_not_persisted(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::RecordNotPersisted(_))
    }
}
