#[macro_use]
mod fmt;
use fmt::ToCql;

mod bind;
pub use bind::bind;

mod delim;
use delim::{And, Comma};

mod quote;
pub use quote::quote;

// Fragment serializers
mod statement;

use crate::stmt::Statement;

struct Formatter<'a> {
    /// Where to write the serialized CQL
    dst: &'a mut String,
}

/// Serialize a statement to CQL text.
///
/// Every value reaches the output through [`quote`]; identifiers (table and
/// column names) come from the schema and are written as declared.
pub fn serialize(stmt: &Statement) -> String {
    let mut ret = String::new();

    let mut fmt = Formatter { dst: &mut ret };

    ToCql::to_cql(stmt, &mut fmt);

    ret
}
