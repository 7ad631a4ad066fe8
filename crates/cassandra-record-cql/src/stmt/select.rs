use super::{Direction, Predicate, Projection};

use indexmap::IndexMap;

/// `SELECT [DISTINCT] projection FROM table [WHERE ...] [ORDER BY ...] [LIMIT n]`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Select {
    pub table: String,

    pub projection: Projection,

    pub distinct: bool,

    pub filter: Vec<Predicate>,

    /// Ordering entries; a column keeps the position of its first insertion
    pub order_by: IndexMap<String, Direction>,

    pub limit: Option<usize>,
}

impl Select {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Default::default()
        }
    }

    /// AND another predicate onto the filter.
    pub fn and(&mut self, predicate: Predicate) {
        self.filter.push(predicate);
    }

    /// The same filter, counting rows instead of returning them.
    pub fn count(&self) -> Select {
        Select {
            table: self.table.clone(),
            projection: Projection::Count,
            distinct: false,
            filter: self.filter.clone(),
            order_by: IndexMap::new(),
            limit: None,
        }
    }
}
