use super::Error;

/// Error when a lifecycle callback halts a save or destroy.
#[derive(Debug)]
pub(super) struct CallbackError {
    event: &'static str,
}

impl std::error::Error for CallbackError {}

impl core::fmt::Display for CallbackError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{} callback aborted the operation", self.event)
    }
}

impl Error {
    /// Creates a callback error for the named lifecycle event.
    ///
    /// The error returned by the handler itself is kept as the cause.
    pub fn callback(event: &'static str) -> Error {
        Error::from(super::ErrorKind::Callback(CallbackError { event }))
    }

    /// Returns `true` if this error is a callback error.
    pub fn is_callback(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Callback(_))
    }
}
