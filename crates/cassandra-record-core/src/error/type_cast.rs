use super::Error;
use crate::stmt::{Type, Value};

/// Error when a value cannot be cast to a column's declared type.
#[derive(Debug)]
pub(super) struct TypeCastError {
    value: Value,
    to_type: Type,
}

impl std::error::Error for TypeCastError {}

impl core::fmt::Display for TypeCastError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "can't cast '{}' to {}", self.value, self.to_type)
    }
}

impl Error {
    /// Creates a type cast error.
    pub fn type_cast(value: Value, to_type: Type) -> Error {
        Error::from(super::ErrorKind::TypeCast(TypeCastError { value, to_type }))
    }

    /// Returns `true` if this error is a type cast error.
    pub fn is_type_cast(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeCast(_))
    }
}
