use cassandra_record_core::stmt::Value;

/// `INSERT INTO table(columns) VALUES(values)`
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: String,

    /// Column/value pairs, in statement order
    pub values: Vec<(String, Value)>,
}

impl Insert {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            values: vec![],
        }
    }

    pub fn value(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.push((column.into(), value.into()));
        self
    }
}
