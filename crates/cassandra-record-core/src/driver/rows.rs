use super::PagingState;
use crate::stmt::Row;

/// One page of a result set.
///
/// A result is consumed forward only: when `paging_state` is set, the next
/// page is fetched by executing the same statement again with that state.
/// `None` marks the last page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rows {
    pub rows: Vec<Row>,

    pub paging_state: Option<PagingState>,
}

impl Rows {
    /// A result with no rows and no further pages.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A final page holding the given rows.
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            rows,
            paging_state: None,
        }
    }

    /// Mark this page as followed by another one.
    pub fn with_paging_state(mut self, paging_state: PagingState) -> Self {
        self.paging_state = Some(paging_state);
        self
    }

    pub fn has_more_pages(&self) -> bool {
        self.paging_state.is_some()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn first(&self) -> Option<&Row> {
        self.rows.first()
    }
}

impl IntoIterator for Rows {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}
