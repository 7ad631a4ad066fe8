use super::Error;

/// Error raised by the strict save variants when validation fails.
#[derive(Debug)]
pub(super) struct RecordInvalid {
    messages: Vec<String>,
}

impl std::error::Error for RecordInvalid {}

impl core::fmt::Display for RecordInvalid {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "record invalid: {}", self.messages.join(", "))
    }
}

impl Error {
    /// Creates a record invalid error carrying the full validation messages.
    pub fn record_invalid<I>(messages: I) -> Error
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Error::from(super::ErrorKind::RecordInvalid(RecordInvalid {
            messages: messages.into_iter().map(Into::into).collect(),
        }))
    }

    /// Returns `true` if this error is a record invalid error.
    pub fn is_record_invalid(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::RecordInvalid(_))
    }
}
