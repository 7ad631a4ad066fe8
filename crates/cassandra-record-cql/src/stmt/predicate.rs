use cassandra_record_core::stmt::Value;

/// One AND-joined term of a `WHERE` clause.
///
/// Only equality and `IN` are expressible structurally; anything else goes
/// through [`Predicate::Raw`].
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// `column = <quoted value>`
    Eq { column: String, value: Value },

    /// `column IN (<quoted>, ...)`
    In { column: String, values: Vec<Value> },

    /// Raw CQL, already bound
    Raw(String),
}

impl Predicate {
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Predicate::Eq {
            column: column.into(),
            value: value.into(),
        }
    }

    pub fn in_list(column: impl Into<String>, values: Vec<Value>) -> Self {
        Predicate::In {
            column: column.into(),
            values,
        }
    }

    pub fn raw(cql: impl Into<String>) -> Self {
        Predicate::Raw(cql.into())
    }
}
