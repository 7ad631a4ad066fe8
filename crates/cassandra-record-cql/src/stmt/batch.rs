use super::Statement;

use std::fmt;

/// Statements submitted together; atomic when they target one partition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Batch {
    pub statements: Vec<Statement>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, statement: impl Into<Statement>) {
        self.statements.push(statement.into());
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// CQL text of each statement, in order.
    pub fn to_cql(&self) -> Vec<String> {
        self.statements.iter().map(Statement::to_cql).collect()
    }
}

impl FromIterator<Statement> for Batch {
    fn from_iter<T: IntoIterator<Item = Statement>>(iter: T) -> Self {
        Batch {
            statements: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Batch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BEGIN BATCH")?;
        for statement in &self.statements {
            writeln!(f, "{statement}")?;
        }
        write!(f, "APPLY BATCH")
    }
}
