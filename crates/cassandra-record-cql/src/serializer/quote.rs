use super::{Formatter, ToCql};

use cassandra_record_core::stmt::Value;

/// Render a value as a CQL literal.
///
/// - integers, booleans and UUIDs render bare
/// - timestamps render as integer milliseconds since the epoch
/// - dates render as `'YYYY-MM-DD'`
/// - strings render single-quoted with embedded quotes doubled
/// - null renders as `NULL`, lists as `(a, b, ...)`
///
/// This is the only place values become statement text.
pub fn quote(value: &Value) -> String {
    let mut ret = String::new();
    value.to_cql(&mut Formatter { dst: &mut ret });
    ret
}

impl ToCql for &Value {
    fn to_cql(self, f: &mut Formatter<'_>) {
        use Value::*;

        match self {
            Bool(v) => f.dst.push_str(if *v { "true" } else { "false" }),
            Date(v) => {
                f.dst.push('\'');
                f.dst.push_str(&v.format("%Y-%m-%d").to_string());
                f.dst.push('\'');
            }
            I32(v) => f.dst.push_str(&v.to_string()),
            I64(v) => f.dst.push_str(&v.to_string()),
            List(values) => {
                fmt!(f, "(" super::Comma(values) ")");
            }
            Null => f.dst.push_str("NULL"),
            String(v) => quote_string(v, f),
            Timestamp(v) => f.dst.push_str(&v.timestamp_millis().to_string()),
            U128(v) => f.dst.push_str(&v.to_string()),
            Uuid(v) => f.dst.push_str(&v.hyphenated().to_string()),
        }
    }
}

fn quote_string(src: &str, f: &mut Formatter<'_>) {
    f.dst.push('\'');
    for ch in src.chars() {
        if ch == '\'' {
            f.dst.push('\'');
        }
        f.dst.push(ch);
    }
    f.dst.push('\'');
}
