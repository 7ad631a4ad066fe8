use super::Migration;
use crate::{Db, Result};

use cassandra_record_core::{async_trait, Error};

use std::path::Path;

/// A migration made of plain CQL statements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CqlMigration {
    up: Vec<String>,
    down: Vec<String>,
}

impl CqlMigration {
    /// Build from `;`-separated CQL source for each direction.
    pub fn new(up: &str, down: &str) -> Self {
        Self {
            up: split_statements(up),
            down: split_statements(down),
        }
    }

    /// Read `up` and, when given, `down` statements from files.
    pub fn from_files(up: impl AsRef<Path>, down: Option<&Path>) -> Result<Self> {
        let up = read(up.as_ref())?;
        let down = match down {
            Some(path) => read(path)?,
            None => String::new(),
        };

        Ok(Self::new(&up, &down))
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|err| {
        Error::from(err).context(Error::migration(format!(
            "can't read {}",
            path.display()
        )))
    })
}

#[async_trait]
impl Migration for CqlMigration {
    async fn up(&self, db: &Db) -> Result<()> {
        for statement in &self.up {
            db.execute_cql(statement).await?;
        }
        Ok(())
    }

    async fn down(&self, db: &Db) -> Result<()> {
        for statement in &self.down {
            db.execute_cql(statement).await?;
        }
        Ok(())
    }
}

/// Split CQL source into statements on `;`.
///
/// Separators inside string literals are kept, `--` and `//` line comments
/// are dropped, and blank statements are skipped.
pub fn split_statements(src: &str) -> Vec<String> {
    let mut ret = vec![];
    let mut current = String::new();
    let mut in_literal = false;
    let mut chars = src.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\'' => {
                in_literal = !in_literal;
                current.push(ch);
            }
            ';' if !in_literal => push_statement(&mut ret, &mut current),
            '-' | '/' if !in_literal && chars.peek() == Some(&ch) => {
                for next in chars.by_ref() {
                    if next == '\n' {
                        current.push('\n');
                        break;
                    }
                }
            }
            _ => current.push(ch),
        }
    }

    push_statement(&mut ret, &mut current);
    ret
}

fn push_statement(statements: &mut Vec<String>, current: &mut String) {
    let statement = current.trim();
    if !statement.is_empty() {
        statements.push(statement.to_string());
    }
    current.clear();
}
