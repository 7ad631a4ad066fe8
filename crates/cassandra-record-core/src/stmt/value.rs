use crate::{Error, Result};

use chrono::SecondsFormat;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Calendar date
    Date(chrono::NaiveDate),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// A list of values, used for `IN` predicates
    List(Vec<Value>),

    /// Null value. Assigning null to a column of a persisted record removes
    /// the column value from the row.
    #[default]
    Null,

    /// String value
    String(String),

    /// UTC instant
    Timestamp(chrono::DateTime<chrono::Utc>),

    /// Unsigned 128-bit integer. Only meaningful as input when casting to a
    /// UUID column.
    U128(u128),

    /// UUID, any version
    Uuid(Uuid),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn list_from_vec(items: Vec<Self>) -> Self {
        Self::List(items)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::I32(v) => Some(v as i64),
            Self::I64(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_uuid(&self) -> Option<Uuid> {
        match *self {
            Self::Uuid(v) => Some(v),
            _ => None,
        }
    }

    /// Name of the variant, used in conversion error messages.
    pub(crate) fn variant_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::Date(_) => "Date",
            Self::I32(_) => "I32",
            Self::I64(_) => "I64",
            Self::List(_) => "List",
            Self::Null => "Null",
            Self::String(_) => "String",
            Self::Timestamp(_) => "Timestamp",
            Self::U128(_) => "U128",
            Self::Uuid(_) => "Uuid",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::Date(v) => write!(f, "{}", v.format("%Y-%m-%d")),
            Value::I32(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Null => f.write_str("null"),
            Value::String(v) => f.write_str(v),
            Value::Timestamp(v) => f.write_str(&v.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Value::U128(v) => write!(f, "{v}"),
            Value::Uuid(v) => write!(f, "{}", v.hyphenated()),
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I32(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<u128> for Value {
    fn from(src: u128) -> Self {
        Self::U128(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<Uuid> for Value {
    fn from(src: Uuid) -> Self {
        Self::Uuid(src)
    }
}

impl From<&Value> for Value {
    fn from(src: &Value) -> Self {
        src.clone()
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(src: Option<T>) -> Self {
        match src {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(src: Vec<T>) -> Self {
        Self::List(src.into_iter().map(Into::into).collect())
    }
}

macro_rules! impl_try_from_value {
    ($ty:ty, $name:ident, $lit:literal) => {
        impl TryFrom<Value> for $ty {
            type Error = Error;

            fn try_from(value: Value) -> Result<Self> {
                match value {
                    Value::$name(value) => Ok(value),
                    value => Err(crate::err!(
                        "cannot convert {} to {}",
                        value.variant_name(),
                        $lit
                    )),
                }
            }
        }
    };
}

impl_try_from_value!(bool, Bool, "bool");
impl_try_from_value!(i32, I32, "i32");
impl_try_from_value!(String, String, "String");
impl_try_from_value!(Uuid, Uuid, "Uuid");

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value.as_i64() {
            Some(value) => Ok(value),
            None => Err(crate::err!(
                "cannot convert {} to i64",
                value.variant_name()
            )),
        }
    }
}
