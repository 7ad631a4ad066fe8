use cassandra_record_core::stmt::Row;
use cassandra_record_cql::stmt::{Projection as Columns, Select};

use std::{fmt, marker::PhantomData};
use tokio::sync::OnceCell;

use crate::Model;

/// A relation narrowed to specific columns.
///
/// Results are plain column -> value rows, never records.
pub struct Projection<M> {
    select: Select,

    /// Result of `to_a`, cached on this value only
    loaded: OnceCell<Vec<Row>>,

    _p: PhantomData<fn() -> M>,
}

impl<M: Model> Projection<M> {
    pub(super) fn new(select: Select) -> Self {
        Self {
            select,
            loaded: OnceCell::new(),
            _p: PhantomData,
        }
    }

    fn derive(&self, f: impl FnOnce(&mut Select)) -> Self {
        let mut select = self.select.clone();
        f(&mut select);
        Self::new(select)
    }

    /// Add more columns to the projection. An empty projection selects every
    /// column.
    pub fn select<I, S>(&self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.derive(|select| {
            let mut projected = match std::mem::take(&mut select.projection) {
                Columns::Columns(projected) => projected,
                _ => vec![],
            };
            projected.extend(columns.into_iter().map(Into::into));

            select.projection = if projected.is_empty() {
                Columns::All
            } else {
                Columns::Columns(projected)
            };
        })
    }

    /// Return each distinct row once.
    pub fn distinct(&self) -> Self {
        self.derive(|select| select.distinct = true)
    }

    select_builders!(Row);
}

impl<M: Model> Clone for Projection<M> {
    fn clone(&self) -> Self {
        Self::new(self.select.clone())
    }
}

impl<M> fmt::Debug for Projection<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Projection")
            .field("select", &self.select)
            .field("loaded", &self.loaded.initialized())
            .finish()
    }
}
