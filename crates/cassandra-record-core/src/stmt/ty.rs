use crate::Error;

use std::{fmt, str::FromStr};

/// The declared type of a column.
///
/// Each variant maps to one CQL type. Values assigned to a column are cast to
/// the column's type with [`Type::cast`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// UTF-8 text (`text`)
    Text,

    /// Signed 32-bit integer (`int`)
    Int,

    /// Signed 64-bit integer (`bigint`)
    Bigint,

    /// Boolean (`boolean`)
    Boolean,

    /// Calendar date without a time component (`date`)
    Date,

    /// UTC instant with millisecond precision (`timestamp`)
    Timestamp,

    /// Version 1, time-based UUID (`timeuuid`)
    Timeuuid,

    /// Any UUID (`uuid`)
    Uuid,
}

impl Type {
    /// The CQL name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Text => "text",
            Type::Int => "int",
            Type::Bigint => "bigint",
            Type::Boolean => "boolean",
            Type::Date => "date",
            Type::Timestamp => "timestamp",
            Type::Timeuuid => "timeuuid",
            Type::Uuid => "uuid",
        }
    }
}

impl FromStr for Type {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Ok(match name.to_ascii_lowercase().as_str() {
            "text" => Type::Text,
            "int" => Type::Int,
            "bigint" => Type::Bigint,
            "boolean" => Type::Boolean,
            "date" => Type::Date,
            "timestamp" => Type::Timestamp,
            "timeuuid" => Type::Timeuuid,
            "uuid" => Type::Uuid,
            _ => return Err(Error::unknown_type(name)),
        })
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
