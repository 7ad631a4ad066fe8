use crate::Model;

use cassandra_record_core::stmt::Value;
use cassandra_record_cql::stmt::Predicate;

use chrono::{DateTime, NaiveDate, Utc};
use std::ops::{Range, RangeInclusive};
use uuid::Uuid;

/// The right-hand side of a structured predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// `column = value`
    Eq(Value),

    /// `column IN (values)`
    In(Vec<Value>),
}

/// Values usable with [`Relation::filter`](crate::Relation::filter).
///
/// Scalars compile to equality. Lists, slices, arrays and ranges compile to
/// `IN`; ranges are expanded to their members first.
pub trait IntoCondition {
    fn into_condition(self) -> Condition;
}

impl IntoCondition for Condition {
    fn into_condition(self) -> Condition {
        self
    }
}

impl IntoCondition for Value {
    fn into_condition(self) -> Condition {
        match self {
            Value::List(values) => Condition::In(values),
            value => Condition::Eq(value),
        }
    }
}

macro_rules! impl_scalar_condition {
    ( $( $ty:ty ),* ) => {
        $(
            impl IntoCondition for $ty {
                fn into_condition(self) -> Condition {
                    Condition::Eq(self.into())
                }
            }
        )*
    };
}

impl_scalar_condition!(
    bool,
    i32,
    i64,
    u128,
    String,
    &str,
    &String,
    Uuid,
    NaiveDate,
    DateTime<Utc>
);

impl<T: Into<Value>> IntoCondition for Vec<T> {
    fn into_condition(self) -> Condition {
        Condition::In(self.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> IntoCondition for [T; N] {
    fn into_condition(self) -> Condition {
        Condition::In(self.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> IntoCondition for &[T] {
    fn into_condition(self) -> Condition {
        Condition::In(self.iter().cloned().map(Into::into).collect())
    }
}

macro_rules! impl_int_range_condition {
    ( $( $ty:ty ),* ) => {
        $(
            impl IntoCondition for Range<$ty> {
                fn into_condition(self) -> Condition {
                    Condition::In(self.map(Value::from).collect())
                }
            }

            impl IntoCondition for RangeInclusive<$ty> {
                fn into_condition(self) -> Condition {
                    Condition::In(self.map(Value::from).collect())
                }
            }
        )*
    };
}

impl_int_range_condition!(i32, i64);

impl IntoCondition for Range<NaiveDate> {
    fn into_condition(self) -> Condition {
        Condition::In(dates(self.start, self.end, false))
    }
}

impl IntoCondition for RangeInclusive<NaiveDate> {
    fn into_condition(self) -> Condition {
        let (start, end) = self.into_inner();
        Condition::In(dates(start, end, true))
    }
}

impl IntoCondition for Range<&str> {
    fn into_condition(self) -> Condition {
        Condition::In(strings(self.start, self.end, false))
    }
}

impl IntoCondition for RangeInclusive<&str> {
    fn into_condition(self) -> Condition {
        Condition::In(strings(self.start(), self.end(), true))
    }
}

impl IntoCondition for Range<String> {
    fn into_condition(self) -> Condition {
        Condition::In(strings(&self.start, &self.end, false))
    }
}

impl IntoCondition for RangeInclusive<String> {
    fn into_condition(self) -> Condition {
        Condition::In(strings(self.start(), self.end(), true))
    }
}

/// Build the predicate for `column`. Values are cast to the column's type
/// when the column is declared and the cast succeeds; otherwise they are
/// used as given.
pub(super) fn compile<M: Model>(column: &str, condition: impl IntoCondition) -> Predicate {
    let ty = M::schema().column(column).map(|column| column.ty);
    let cast = |value: Value| match ty {
        Some(ty) => ty.cast(value.clone()).unwrap_or(value),
        None => value,
    };

    match condition.into_condition() {
        Condition::Eq(value) => Predicate::eq(column, cast(value)),
        Condition::In(values) => Predicate::in_list(column, values.into_iter().map(cast).collect()),
    }
}

fn dates(start: NaiveDate, end: NaiveDate, inclusive: bool) -> Vec<Value> {
    let mut ret = vec![];
    let mut current = start;

    while current < end || (inclusive && current == end) {
        ret.push(Value::Date(current));

        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }

    ret
}

/// Members of a string range, stepping with [`succ`].
///
/// Iteration stops at `end`, or once the current string is longer than `end`
/// or passes it at the same length.
fn strings(start: &str, end: &str, inclusive: bool) -> Vec<Value> {
    let mut ret = vec![];

    if start > end || (!inclusive && start == end) {
        return ret;
    }

    let mut current = start.to_string();

    loop {
        if current == end {
            if inclusive {
                ret.push(Value::String(current));
            }
            break;
        }

        let next = succ(&current);
        let stuck = next == current;
        ret.push(Value::String(current));

        if stuck || next.len() > end.len() || next.is_empty() || (next.len() == end.len() && *next > *end) {
            break;
        }

        current = next;
    }

    ret
}

/// The successor of a string: the rightmost ASCII alphanumeric is incremented,
/// carrying into alphanumerics to its left (`"az"` -> `"ba"`, `"zz"` -> `"aaa"`,
/// `"a9"` -> `"b0"`). Strings without alphanumerics increment their last
/// character.
pub(crate) fn succ(src: &str) -> String {
    let mut chars: Vec<char> = src.chars().collect();

    let Some(mut i) = chars.iter().rposition(char::is_ascii_alphanumeric) else {
        if let Some(last) = chars.last_mut() {
            *last = next_char(*last);
        }
        return chars.into_iter().collect();
    };

    loop {
        let (next, carry) = match chars[i] {
            'z' => ('a', true),
            'Z' => ('A', true),
            '9' => ('0', true),
            c => ((c as u8 + 1) as char, false),
        };
        chars[i] = next;

        if !carry {
            break;
        }

        match chars[..i].iter().rposition(char::is_ascii_alphanumeric) {
            Some(left) => i = left,
            None => {
                let first = if next == '0' { '1' } else { next };
                chars.insert(i, first);
                break;
            }
        }
    }

    chars.into_iter().collect()
}

/// The next scalar value, skipping the surrogate range. `char::MAX` has no
/// successor and is returned as is.
fn next_char(c: char) -> char {
    match c {
        '\u{D7FF}' => '\u{E000}',
        c => char::from_u32(c as u32 + 1).unwrap_or(c),
    }
}
