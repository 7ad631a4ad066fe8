use super::Predicate;

/// `DELETE [columns] FROM table [WHERE ...]`
///
/// With an empty column list the whole row is deleted; otherwise only the
/// listed column values are removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub table: String,

    pub columns: Vec<String>,

    pub filter: Vec<Predicate>,
}

impl Delete {
    pub fn rows(table: impl Into<String>, filter: Vec<Predicate>) -> Self {
        Self {
            table: table.into(),
            columns: vec![],
            filter,
        }
    }

    pub fn columns(table: impl Into<String>, columns: Vec<String>, filter: Vec<Predicate>) -> Self {
        Self {
            table: table.into(),
            columns,
            filter,
        }
    }
}
