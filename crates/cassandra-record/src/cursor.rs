use crate::{Model, Record, Result};

use cassandra_record_core::stmt::Row;

use std::pin::Pin;
use tokio_stream::{Stream, StreamExt};

/// A value a result row can be read into.
pub trait FromRow: Sized + Send + 'static {
    fn from_row(row: Row) -> Self;
}

impl FromRow for Row {
    fn from_row(row: Row) -> Self {
        row
    }
}

impl<M: Model> FromRow for Record<M> {
    fn from_row(row: Row) -> Self {
        M::load(row)
    }
}

pub trait FromCursor<A>: Extend<A> + Default {}

impl<A, T: Extend<A> + Default> FromCursor<A> for T {}

/// Forward-only iteration over every row of a paged result.
///
/// Pages are fetched lazily, one driver call per page, as the cursor
/// advances.
pub struct Cursor<T> {
    pages: Pin<Box<dyn Stream<Item = Result<Vec<T>>> + Send>>,
    buffer: std::vec::IntoIter<T>,
}

impl<T: FromRow> Cursor<T> {
    pub(crate) fn new(pages: impl Stream<Item = Result<Vec<T>>> + Send + 'static) -> Self {
        Self {
            pages: Box::pin(pages),
            buffer: Vec::new().into_iter(),
        }
    }

    pub async fn next(&mut self) -> Option<Result<T>> {
        loop {
            if let Some(item) = self.buffer.next() {
                return Some(Ok(item));
            }

            match self.pages.next().await? {
                Ok(page) => self.buffer = page.into_iter(),
                Err(err) => return Some(Err(err)),
            }
        }
    }

    /// Collect all values
    pub async fn collect<B>(mut self) -> Result<B>
    where
        B: FromCursor<T>,
    {
        let mut ret = B::default();

        while let Some(res) = self.next().await {
            ret.extend(Some(res?));
        }

        Ok(ret)
    }
}

impl<T> std::fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("buffered", &self.buffer.len())
            .finish()
    }
}
