mod condition;
pub use condition::{Condition, IntoCondition};

/// Builders and readers shared by [`Relation`] and [`Projection`], which both
/// wrap a `select` and a `loaded` cache and provide `derive`. `$row` is what
/// each result row is read into.
macro_rules! select_builders {
    ($row:ty) => {
        /// Add `column = value`, or `column IN (...)` for lists and ranges.
        pub fn filter(&self, column: &str, condition: impl $crate::IntoCondition) -> Self {
            let predicate = $crate::relation::condition::compile::<M>(column, condition);
            self.derive(|select| select.and(predicate))
        }

        /// [`Self::filter`] for each entry.
        pub fn filter_all<K, C>(&self, conditions: impl IntoIterator<Item = (K, C)>) -> Self
        where
            K: AsRef<str>,
            C: $crate::IntoCondition,
        {
            let predicates: Vec<_> = conditions
                .into_iter()
                .map(|(column, condition)| {
                    $crate::relation::condition::compile::<M>(column.as_ref(), condition)
                })
                .collect();

            self.derive(|select| select.filter.extend(predicates))
        }

        /// Add a raw CQL predicate. `:name` placeholders are replaced with the
        /// quoted value of the matching argument.
        pub fn filter_cql<K, V>(
            &self,
            template: &str,
            args: impl IntoIterator<Item = (K, V)>,
        ) -> Self
        where
            K: AsRef<str>,
            V: Into<$crate::Value>,
        {
            let predicate = cassandra_record_cql::stmt::Predicate::raw(
                cassandra_record_cql::bind(template, args),
            );
            self.derive(|select| select.and(predicate))
        }

        /// Order by `column`. Ordering the same column again replaces its
        /// direction but keeps its position.
        pub fn order_by(&self, column: &str, direction: $crate::Direction) -> Self {
            self.derive(|select| {
                select.order_by.insert(column.to_string(), direction);
            })
        }

        pub fn limit(&self, n: usize) -> Self {
            self.derive(|select| select.limit = Some(n))
        }

        /// The untyped statement this query compiles to.
        pub fn statement(&self) -> &cassandra_record_cql::stmt::Select {
            &self.select
        }

        /// The SELECT text this query runs.
        pub fn to_cql(&self) -> String {
            cassandra_record_cql::Statement::Select(self.select.clone()).to_cql()
        }

        /// Stream the results one page at a time. Empty pages are skipped.
        pub fn find_in_batches(
            &self,
            db: &$crate::Db,
            batch_size: usize,
        ) -> impl tokio_stream::Stream<Item = $crate::Result<Vec<$row>>> + Send + 'static {
            $crate::relation::batches(db, self.to_cql(), batch_size)
        }

        /// Iterate over every result, fetching pages of
        /// [`Db::page_size`](crate::Db::page_size) rows as needed.
        pub fn find_each(&self, db: &$crate::Db) -> $crate::Cursor<$row> {
            $crate::Cursor::new(self.find_in_batches(db, db.page_size()))
        }

        /// Load every result. The first call runs the query; later calls on
        /// the same value return the cached results.
        pub async fn to_a(&self, db: &$crate::Db) -> $crate::Result<&[$row]> {
            self.loaded
                .get_or_try_init(|| self.find_each(db).collect())
                .await
                .map(Vec::as_slice)
        }

        pub async fn first(&self, db: &$crate::Db) -> $crate::Result<Option<$row>> {
            self.limit(1).find_each(db).next().await.transpose()
        }
    };
}

mod projection;
pub use projection::Projection;

use crate::{cursor::FromRow, Db, Model, Record, Result};

use cassandra_record_core::{
    driver::Rows,
    stmt::{Row, Value},
    Error,
};
use cassandra_record_cql::{
    bind,
    stmt::{Assignment, Batch, Delete, Select, Statement, Update},
};

use std::fmt;
use tokio::sync::OnceCell;
use tokio_stream::{Stream, StreamExt};

/// An immutable, lazily evaluated query over one model's table.
///
/// Builder methods return a new relation and leave the receiver untouched.
/// Nothing is sent to the store until an execution method is called.
pub struct Relation<M> {
    select: Select,

    /// Result of `to_a`, cached on this value only
    loaded: OnceCell<Vec<Record<M>>>,
}

impl<M: Model> Relation<M> {
    pub(crate) fn new() -> Self {
        Self::from_select(Select::new(M::table_name()))
    }

    fn from_select(select: Select) -> Self {
        Self {
            select,
            loaded: OnceCell::new(),
        }
    }

    fn derive(&self, f: impl FnOnce(&mut Select)) -> Self {
        let mut select = self.select.clone();
        f(&mut select);
        Self::from_select(select)
    }

    /// A copy of this relation with an empty result cache.
    pub fn all(&self) -> Self {
        self.derive(|_| {})
    }

    select_builders!(Record<M>);

    /// Return plain rows of the given columns instead of records.
    pub fn select<I, S>(&self, columns: I) -> Projection<M>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Projection::new(self.select.clone()).select(columns)
    }

    pub async fn first_n(&self, db: &Db, n: usize) -> Result<Vec<Record<M>>> {
        self.limit(n).find_each(db).collect().await
    }

    /// `SELECT COUNT(*)` with this relation's predicates.
    pub async fn count(&self, db: &Db) -> Result<i64> {
        let rows = db.execute(self.select.count()).await?;
        read_count(&rows)
    }

    /// Delete every matching row with one statement. No hooks run.
    pub async fn delete_all(&self, db: &Db) -> Result<()> {
        db.execute(Delete::rows(M::table_name(), self.select.filter.clone()))
            .await?;
        Ok(())
    }

    /// Delete matching rows page by page, one batch of key-scoped deletes per
    /// page. No hooks run.
    pub async fn delete_in_batches(&self, db: &Db) -> Result<()> {
        let batches = self.find_in_batches(db, db.page_size());
        tokio::pin!(batches);

        while let Some(records) = batches.next().await {
            let batch: Batch = records?
                .iter()
                .map(|record| Statement::from(Delete::rows(M::table_name(), record.key_filter())))
                .collect();

            db.execute_batch(&batch).await?;
        }

        Ok(())
    }

    /// Set columns on every matching row. Values are cast to the columns'
    /// declared types.
    pub async fn update_all<K, V>(
        &self,
        db: &Db,
        assignments: impl IntoIterator<Item = (K, V)>,
    ) -> Result<()>
    where
        K: AsRef<str>,
        V: Into<Value>,
    {
        let schema = M::schema();
        let assignments = assignments
            .into_iter()
            .map(|(name, value)| {
                let name = name.as_ref();
                let column = schema
                    .column(name)
                    .ok_or_else(|| Error::unknown_column(schema.table_name(), name))?;
                Ok(Assignment::set(name, column.ty.cast(value.into())?))
            })
            .collect::<Result<Vec<_>>>()?;

        self.update_with(db, assignments).await
    }

    /// Apply a raw `SET` clause to every matching row, binding `:name`
    /// placeholders like [`Relation::filter_cql`].
    pub async fn update_all_cql<K, V>(
        &self,
        db: &Db,
        template: &str,
        args: impl IntoIterator<Item = (K, V)>,
    ) -> Result<()>
    where
        K: AsRef<str>,
        V: Into<Value>,
    {
        let assignment = Assignment::raw(bind(template, args));
        self.update_with(db, vec![assignment]).await
    }

    async fn update_with(&self, db: &Db, assignments: Vec<Assignment>) -> Result<()> {
        let update = Update::new(M::table_name(), assignments, self.select.filter.clone());
        db.execute(update).await?;
        Ok(())
    }
}

impl<M: Model> Clone for Relation<M> {
    fn clone(&self) -> Self {
        self.all()
    }
}

impl<M> fmt::Debug for Relation<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Relation")
            .field("select", &self.select)
            .field("loaded", &self.loaded.initialized())
            .finish()
    }
}

/// Page through `cql`, re-executing it with the previous page's paging state
/// until the driver reports no more pages.
pub(crate) fn batches<T: FromRow>(
    db: &Db,
    cql: String,
    batch_size: usize,
) -> impl Stream<Item = Result<Vec<T>>> + Send + 'static {
    let db = db.clone();

    async_stream::try_stream! {
        let mut paging_state = None;

        loop {
            let options = db
                .exec_options()
                .page_size(batch_size)
                .paging_state(paging_state.take());

            let Rows { rows, paging_state: next } = db.execute_with(&cql, options).await?;

            if !rows.is_empty() {
                yield rows.into_iter().map(T::from_row).collect::<Vec<_>>();
            }

            match next {
                Some(next) => paging_state = Some(next),
                None => break,
            }
        }
    }
}

fn read_count(rows: &Rows) -> Result<i64> {
    rows.first()
        .and_then(|row: &Row| row.get("count"))
        .and_then(Value::as_i64)
        .ok_or_else(|| Error::invalid_result("COUNT(*) returned no `count` column"))
}
