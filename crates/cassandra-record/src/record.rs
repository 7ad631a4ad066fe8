mod persistence;

use crate::{
    schema::Event,
    validation::{Errors, ValidationContext},
    Model, Result,
};

use cassandra_record_core::{
    stmt::{Row, Value},
    Error,
};
use cassandra_record_cql::stmt::Predicate;

use indexmap::IndexMap;
use std::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

/// Pending change of one column: `(baseline, new)`.
pub type Change = (Value, Value);

/// An instance of a model: current column values plus change tracking.
///
/// Values assigned through [`Record::set`] are cast to the column's declared
/// type. Until the next successful save, every column whose value differs
/// from the last saved one is listed in [`Record::changes`].
pub struct Record<M> {
    values: Row,

    /// Column -> (baseline, new), only for columns whose value differs from
    /// the baseline
    changes: IndexMap<String, Change>,

    persisted: bool,

    destroyed: bool,

    errors: Errors,

    _p: PhantomData<fn() -> M>,
}

impl<M: Model> Record<M> {
    /// A new, unsaved record with every declared column null.
    pub fn new() -> Self {
        let values = M::schema()
            .columns()
            .map(|column| (column.name.clone(), Value::Null))
            .collect();

        Self {
            values,
            changes: IndexMap::new(),
            persisted: false,
            destroyed: false,
            errors: Errors::new(),
            _p: PhantomData,
        }
    }

    /// A new record with the given attributes assigned.
    pub fn with<K, V>(attributes: impl IntoIterator<Item = (K, V)>) -> Result<Self>
    where
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut record = Self::new();
        record.assign(attributes)?;
        Ok(record)
    }

    /// Hydrate a record from a stored row. Values are taken as-is and the
    /// record starts persisted with no pending changes.
    pub(crate) fn load(row: Row) -> Self {
        let mut record = Self::new();
        record.values.extend(row);
        record.persisted = true;
        record
    }

    /// Assign each attribute through [`Record::set`]. Names the schema does
    /// not declare are skipped.
    pub fn assign<K, V>(&mut self, attributes: impl IntoIterator<Item = (K, V)>) -> Result<()>
    where
        K: AsRef<str>,
        V: Into<Value>,
    {
        let schema = M::schema();

        for (name, value) in attributes {
            let name = name.as_ref();
            if schema.column(name).is_some() {
                self.set(name, value)?;
            }
        }

        Ok(())
    }

    /// Current value of a declared column.
    pub fn get(&self, name: &str) -> Result<&Value> {
        if M::schema().column(name).is_none() {
            return Err(Error::unknown_column(M::schema().table_name(), name));
        }

        Ok(self.values.get(name).unwrap_or(&Value::Null))
    }

    /// Current value converted to `T`; `None` when null.
    pub fn get_as<T>(&self, name: &str) -> Result<Option<T>>
    where
        T: TryFrom<Value, Error = Error>,
    {
        match self.get(name)? {
            Value::Null => Ok(None),
            value => T::try_from(value.clone()).map(Some),
        }
    }

    /// Cast `value` to the column's type and store it, tracking the change.
    ///
    /// Fails when the column is undeclared, when it is a key column of a
    /// persisted record, or when the value cannot be cast.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let schema = M::schema();
        let Some(column) = schema.column(name) else {
            return Err(Error::unknown_column(schema.table_name(), name));
        };

        if self.persisted && column.is_key() {
            return Err(Error::illegal_key_mutation(name));
        }

        let value = column.ty.cast(value.into())?;
        let current = self.values.get(name).cloned().unwrap_or_default();

        if current == value {
            return Ok(());
        }

        let baseline = match self.changes.get(name) {
            Some((baseline, _)) => baseline.clone(),
            None => current,
        };

        if baseline == value {
            self.changes.shift_remove(name);
        } else {
            self.changes
                .insert(name.to_string(), (baseline, value.clone()));
        }

        self.values.insert(name.to_string(), value);
        Ok(())
    }

    /// Values of the key columns, partition key first.
    pub fn key(&self) -> Vec<&Value> {
        M::schema()
            .key_columns()
            .map(|column| self.values.get(&column.name).unwrap_or(&Value::Null))
            .collect()
    }

    /// `key = value` predicates identifying this record's row.
    pub(crate) fn key_filter(&self) -> Vec<Predicate> {
        M::schema()
            .key_columns()
            .map(|column| {
                let value = self.values.get(&column.name).cloned().unwrap_or_default();
                Predicate::eq(&column.name, value)
            })
            .collect()
    }

    /// Run the validators for `context`, between the before/after validation
    /// hooks. The outcome is left in [`Record::errors`].
    pub fn is_valid(&mut self, context: ValidationContext) -> Result<bool> {
        self.run_callbacks(Event::BeforeValidation)?;

        let mut errors = Errors::new();
        for validator in &M::schema().validators {
            validator(self, context, &mut errors);
        }
        self.errors = errors;

        self.run_callbacks(Event::AfterValidation)?;

        Ok(self.errors.is_empty())
    }

    pub(crate) fn run_callbacks(&mut self, event: Event) -> Result<()> {
        for callback in M::schema().callbacks.get(event) {
            callback(self).map_err(|err| err.context(Error::callback(event.as_str())))?;
        }

        Ok(())
    }
}

impl<M> Record<M> {
    /// All column values, in declaration order.
    pub fn attributes(&self) -> &Row {
        &self.values
    }

    /// Pending changes since the last successful save.
    pub fn changes(&self) -> &IndexMap<String, Change> {
        &self.changes
    }

    pub fn is_changed(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Names of the changed columns.
    pub fn changed(&self) -> Vec<&str> {
        self.changes.keys().map(String::as_str).collect()
    }

    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    pub fn is_new_record(&self) -> bool {
        !self.persisted
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Errors from the last validation run.
    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    /// Make the current values the new change baseline.
    fn changes_applied(&mut self) {
        self.changes.clear();
    }
}

impl<M: Model> Default for Record<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Clone for Record<M> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            changes: self.changes.clone(),
            persisted: self.persisted,
            destroyed: self.destroyed,
            errors: self.errors.clone(),
            _p: PhantomData,
        }
    }
}

impl<M> fmt::Debug for Record<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("values", &self.values)
            .field("changes", &self.changes)
            .field("persisted", &self.persisted)
            .field("destroyed", &self.destroyed)
            .finish()
    }
}

/// Records are equal when their key columns are equal.
impl<M: Model> PartialEq for Record<M> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<M: Model> Eq for Record<M> {}

impl<M: Model> Hash for Record<M> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
