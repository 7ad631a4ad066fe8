use cassandra_record_core::stmt::Value;

/// One `SET` clause entry of an UPDATE.
#[derive(Debug, Clone, PartialEq)]
pub enum Assignment {
    /// `column = <quoted value>`
    Set { column: String, value: Value },

    /// Raw CQL assignment text, emitted verbatim
    Raw(String),
}

impl Assignment {
    pub fn set(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Assignment::Set {
            column: column.into(),
            value: value.into(),
        }
    }

    pub fn raw(cql: impl Into<String>) -> Self {
        Assignment::Raw(cql.into())
    }
}
