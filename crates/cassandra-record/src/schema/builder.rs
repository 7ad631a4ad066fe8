use super::{Callbacks, Event, Schema};
use crate::{
    validation::{Errors, ValidationContext},
    Record, Result,
};

use cassandra_record_core::{
    schema::{Column, KeyKind},
    stmt::Type,
    Error,
};

use indexmap::IndexMap;
use std::sync::Arc;

/// Declares a [`Schema`].
///
/// ```ignore
/// Schema::builder("search_logs")
///     .partition_key("date", Type::Date)
///     .partition_key("bucket", "int")
///     .clustering_key("id", Type::Timeuuid)
///     .column("username", Type::Text)
///     .validates_presence_of("username")
///     .build()
/// ```
pub struct Builder<M> {
    table_name: String,
    columns: Vec<Column>,
    callbacks: Callbacks<M>,
    validators: Vec<crate::validation::Validator<M>>,

    /// First declaration error, reported by `build`
    error: Option<Error>,
}

/// A column type given either as a [`Type`] or by its CQL name.
pub trait IntoType {
    fn into_type(self) -> Result<Type>;
}

impl IntoType for Type {
    fn into_type(self) -> Result<Type> {
        Ok(self)
    }
}

impl IntoType for &str {
    fn into_type(self) -> Result<Type> {
        self.parse()
    }
}

macro_rules! callback_methods {
    ( $( $(#[$attr:meta])* $name:ident => $event:ident, )* ) => {
        $(
            $(#[$attr])*
            pub fn $name<F>(self, f: F) -> Self
            where
                F: Fn(&mut Record<M>) -> Result<()> + Send + Sync + 'static,
            {
                self.on(Event::$event, f)
            }
        )*
    };
}

impl<M> Builder<M> {
    pub(super) fn new(table_name: String) -> Self {
        Self {
            table_name,
            columns: vec![],
            callbacks: Callbacks::default(),
            validators: vec![],
            error: None,
        }
    }

    /// Declare a regular column.
    pub fn column(self, name: impl Into<String>, ty: impl IntoType) -> Self {
        self.declare(name.into(), ty, None)
    }

    /// Declare a partition key column.
    pub fn partition_key(self, name: impl Into<String>, ty: impl IntoType) -> Self {
        self.declare(name.into(), ty, Some(KeyKind::Partition))
    }

    /// Declare a clustering key column.
    pub fn clustering_key(self, name: impl Into<String>, ty: impl IntoType) -> Self {
        self.declare(name.into(), ty, Some(KeyKind::Clustering))
    }

    fn declare(mut self, name: String, ty: impl IntoType, key: Option<KeyKind>) -> Self {
        match ty.into_type() {
            Ok(ty) => self.columns.push(Column {
                key,
                ..Column::new(name, ty)
            }),
            Err(err) => self.fail(err.context(crate::err!("column `{name}`"))),
        }
        self
    }

    /// Register a handler for a lifecycle event. Handlers of one event run in
    /// registration order.
    pub fn on<F>(mut self, event: Event, f: F) -> Self
    where
        F: Fn(&mut Record<M>) -> Result<()> + Send + Sync + 'static,
    {
        self.callbacks.push(event, Arc::new(f));
        self
    }

    callback_methods! {
        before_validation => BeforeValidation,
        after_validation => AfterValidation,
        before_save => BeforeSave,
        after_save => AfterSave,
        before_create => BeforeCreate,
        after_create => AfterCreate,
        before_update => BeforeUpdate,
        after_update => AfterUpdate,
        before_destroy => BeforeDestroy,
        after_destroy => AfterDestroy,
    }

    /// Register a validator. It adds an entry to `errors` for each problem it
    /// finds.
    pub fn validate<F>(mut self, f: F) -> Self
    where
        F: Fn(&Record<M>, ValidationContext, &mut Errors) + Send + Sync + 'static,
    {
        self.validators.push(Arc::new(f));
        self
    }

    /// Reject null and blank text values in `column`.
    pub fn validates_presence_of(self, column: impl Into<String>) -> Self {
        let column = column.into();
        self.validate(move |record, _, errors| {
            let value = record.attributes().get(column.as_str());
            if value.map_or(true, crate::validation::is_blank) {
                errors.add(column.clone(), "can't be blank");
            }
        })
    }

    pub fn build(self) -> Result<Schema<M>> {
        if let Some(err) = self.error {
            return Err(err.context(crate::err!("schema for `{}`", self.table_name)));
        }

        let mut columns = IndexMap::with_capacity(self.columns.len());

        for column in self.columns {
            if columns.contains_key(&column.name) {
                return Err(Error::invalid_schema(format!(
                    "column `{}` declared twice on `{}`",
                    column.name, self.table_name
                )));
            }

            columns.insert(column.name.clone(), column);
        }

        if !columns.values().any(Column::is_partition_key) {
            return Err(Error::invalid_schema(format!(
                "`{}` has no partition key",
                self.table_name
            )));
        }

        Ok(Schema {
            table_name: self.table_name,
            columns,
            callbacks: self.callbacks,
            validators: self.validators,
        })
    }

    fn fail(&mut self, err: Error) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }
}
