use super::Error;

/// Error when a column name is not declared by the schema.
#[derive(Debug)]
pub(super) struct UnknownColumn {
    table: Box<str>,
    column: Box<str>,
}

impl std::error::Error for UnknownColumn {}

impl core::fmt::Display for UnknownColumn {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown column {}.{}", self.table, self.column)
    }
}

impl Error {
    /// Creates an unknown column error.
    pub fn unknown_column(table: impl Into<String>, column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownColumn(UnknownColumn {
            table: table.into().into(),
            column: column.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown column error.
    pub fn is_unknown_column(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownColumn(_))
    }
}
