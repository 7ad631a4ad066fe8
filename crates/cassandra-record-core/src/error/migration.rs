use super::Error;

/// Error when a migration cannot be located or loaded.
#[derive(Debug)]
pub(super) struct MigrationError {
    message: Box<str>,
}

impl std::error::Error for MigrationError {}

impl core::fmt::Display for MigrationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "migration error: {}", self.message)
    }
}

impl Error {
    /// Creates a migration error.
    pub fn migration(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Migration(MigrationError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a migration error.
    pub fn is_migration(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Migration(_))
    }
}
