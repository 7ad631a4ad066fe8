use super::{Type, Value};
use crate::{Error, Result};

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use uuid::Uuid;

/// Naive timestamp layouts accepted from text. Naive text is read as UTC.
const NAIVE_TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Zoned timestamp layouts accepted from text, in addition to RFC 3339.
const ZONED_TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%d %H:%M:%S %z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
];

impl Type {
    /// Cast a raw value into the canonical in-memory representation of this
    /// type.
    ///
    /// `Null` casts to `Null` for every type. Any other value that cannot be
    /// represented fails with a type cast error; nothing is silently coerced.
    pub fn cast(&self, value: Value) -> Result<Value> {
        if value.is_null() {
            return Ok(Value::Null);
        }

        match self {
            Type::Text => cast_text(value),
            Type::Int => cast_int(value),
            Type::Bigint => cast_bigint(value),
            Type::Boolean => cast_boolean(value),
            Type::Date => cast_date(value),
            Type::Timestamp => cast_timestamp(value),
            Type::Timeuuid | Type::Uuid => cast_uuid(value, *self),
        }
    }
}

fn cast_text(value: Value) -> Result<Value> {
    match value {
        Value::String(_) => Ok(value),
        Value::List(_) => Err(Error::type_cast(value, Type::Text)),
        value => Ok(Value::String(value.to_string())),
    }
}

fn cast_int(value: Value) -> Result<Value> {
    let cast = match &value {
        Value::I32(v) => Some(*v),
        Value::I64(v) => i32::try_from(*v).ok(),
        Value::U128(v) => i32::try_from(*v).ok(),
        Value::String(v) => v.trim().parse::<i32>().ok(),
        _ => None,
    };

    cast.map(Value::I32)
        .ok_or_else(|| Error::type_cast(value, Type::Int))
}

fn cast_bigint(value: Value) -> Result<Value> {
    let cast = match &value {
        Value::I32(v) => Some(*v as i64),
        Value::I64(v) => Some(*v),
        Value::U128(v) => i64::try_from(*v).ok(),
        Value::String(v) => v.trim().parse::<i64>().ok(),
        _ => None,
    };

    cast.map(Value::I64)
        .ok_or_else(|| Error::type_cast(value, Type::Bigint))
}

fn cast_boolean(value: Value) -> Result<Value> {
    let cast = match &value {
        Value::Bool(v) => Some(*v),
        Value::I32(1) | Value::I64(1) => Some(true),
        Value::I32(0) | Value::I64(0) => Some(false),
        Value::String(v) => match v.as_str() {
            "1" | "true" => Some(true),
            "0" | "false" => Some(false),
            _ => None,
        },
        _ => None,
    };

    cast.map(Value::Bool)
        .ok_or_else(|| Error::type_cast(value, Type::Boolean))
}

fn cast_date(value: Value) -> Result<Value> {
    let cast = match &value {
        Value::Date(v) => Some(*v),
        Value::Timestamp(v) => Some(v.date_naive()),
        Value::String(v) => parse_date(v.trim()),
        _ => None,
    };

    cast.map(Value::Date)
        .ok_or_else(|| Error::type_cast(value, Type::Date))
}

fn cast_timestamp(value: Value) -> Result<Value> {
    let cast = match &value {
        Value::Timestamp(v) => Some(*v),
        Value::Date(v) => v.and_hms_opt(0, 0, 0).map(|v| v.and_utc()),
        Value::I32(v) => DateTime::from_timestamp(*v as i64, 0),
        Value::I64(v) => DateTime::from_timestamp(*v, 0),
        Value::String(v) => parse_timestamp(v.trim()),
        _ => None,
    };

    cast.and_then(truncate_to_millis)
        .map(Value::Timestamp)
        .ok_or_else(|| Error::type_cast(value, Type::Timestamp))
}

fn cast_uuid(value: Value, ty: Type) -> Result<Value> {
    let cast = match &value {
        Value::Uuid(v) => Some(*v),
        Value::String(v) => Uuid::parse_str(v.trim()).ok(),
        Value::U128(v) => Some(Uuid::from_u128(*v)),
        Value::I64(v) => u128::try_from(*v).ok().map(Uuid::from_u128),
        Value::I32(v) => u128::try_from(*v).ok().map(Uuid::from_u128),
        _ => None,
    };

    cast.map(Value::Uuid).ok_or_else(|| Error::type_cast(value, ty))
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(zoned) = DateTime::parse_from_rfc3339(text) {
        return Some(zoned.with_timezone(&Utc));
    }

    for format in ZONED_TIMESTAMP_FORMATS {
        if let Ok(zoned) = DateTime::<FixedOffset>::parse_from_str(text, format) {
            return Some(zoned.with_timezone(&Utc));
        }
    }

    let naive = text
        .strip_suffix(" UTC")
        .or_else(|| text.strip_suffix('Z'))
        .unwrap_or(text);

    for format in NAIVE_TIMESTAMP_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(naive, format) {
            return Some(naive.and_utc());
        }
    }

    parse_date(naive)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// The store keeps millisecond precision; anything finer is dropped so the
/// in-memory value matches what a reload returns.
fn truncate_to_millis(value: DateTime<Utc>) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(value.timestamp_millis())
}
