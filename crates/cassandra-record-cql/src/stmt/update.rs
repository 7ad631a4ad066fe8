use super::{Assignment, Predicate};

/// `UPDATE table SET ... [WHERE ...]`
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: String,

    pub assignments: Vec<Assignment>,

    pub filter: Vec<Predicate>,
}

impl Update {
    pub fn new(table: impl Into<String>, assignments: Vec<Assignment>, filter: Vec<Predicate>) -> Self {
        Self {
            table: table.into(),
            assignments,
            filter,
        }
    }
}
