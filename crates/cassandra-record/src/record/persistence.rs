use super::Record;
use crate::{schema::Event, validation::ValidationContext, Db, Model, Result};

use cassandra_record_core::{stmt::Row, Error};
use cassandra_record_cql::stmt::{Assignment, Batch, Delete, Insert, Statement, Update};

impl<M: Model> Record<M> {
    fn validation_context(&self) -> ValidationContext {
        if self.persisted {
            ValidationContext::Update
        } else {
            ValidationContext::Create
        }
    }

    /// Validate, then insert or update.
    ///
    /// Returns `Ok(false)` without touching the store when validation fails;
    /// the reasons are in [`Record::errors`].
    pub async fn save(&mut self, db: &Db) -> Result<bool> {
        if !self.is_valid(self.validation_context())? {
            return Ok(false);
        }

        self.persist(db).await?;
        Ok(true)
    }

    /// Like [`Record::save`], but a validation failure is an error.
    pub async fn save_strict(&mut self, db: &Db) -> Result<()> {
        if !self.is_valid(self.validation_context())? {
            return Err(Error::record_invalid(self.errors.full_messages()));
        }

        self.persist(db).await
    }

    /// Assign `attributes`, then [`Record::save`].
    pub async fn update(&mut self, db: &Db, attributes: Row) -> Result<bool> {
        self.assign(attributes)?;
        self.save(db).await
    }

    /// Assign `attributes`, then [`Record::save_strict`].
    pub async fn update_strict(&mut self, db: &Db, attributes: Row) -> Result<()> {
        self.assign(attributes)?;
        self.save_strict(db).await
    }

    /// Validate and insert a new record.
    ///
    /// Fails if the record was already persisted.
    pub async fn create(&mut self, db: &Db) -> Result<bool> {
        if self.persisted {
            return Err(Error::record_already_persisted(M::table_name()));
        }

        self.save(db).await
    }

    /// Delete the record's row by key. No hooks run.
    pub async fn delete(&mut self, db: &Db) -> Result<()> {
        if !self.persisted {
            return Err(Error::record_not_persisted(M::table_name()));
        }

        db.execute(Delete::rows(M::table_name(), self.key_filter()))
            .await?;

        self.destroyed = true;
        Ok(())
    }

    /// Delete the record's row, between the destroy hooks.
    pub async fn destroy(&mut self, db: &Db) -> Result<()> {
        if !self.persisted {
            return Err(Error::record_not_persisted(M::table_name()));
        }

        self.run_callbacks(Event::BeforeDestroy)?;
        self.delete(db).await?;
        self.run_callbacks(Event::AfterDestroy)
    }

    async fn persist(&mut self, db: &Db) -> Result<()> {
        if self.persisted {
            self.update_record(db).await
        } else {
            self.create_record(db).await
        }
    }

    async fn create_record(&mut self, db: &Db) -> Result<()> {
        if self.persisted {
            return Err(Error::record_already_persisted(M::table_name()));
        }

        self.run_callbacks(Event::BeforeSave)?;
        self.run_callbacks(Event::BeforeCreate)?;

        if self.is_changed() {
            let mut insert = Insert::new(M::table_name());
            for (column, (_, value)) in &self.changes {
                insert = insert.value(column, value);
            }

            db.execute(insert).await?;
        }

        self.persisted = true;
        self.changes_applied();

        self.run_callbacks(Event::AfterCreate)?;
        self.run_callbacks(Event::AfterSave)
    }

    async fn update_record(&mut self, db: &Db) -> Result<()> {
        if !self.persisted {
            return Err(Error::record_not_persisted(M::table_name()));
        }

        self.run_callbacks(Event::BeforeSave)?;
        self.run_callbacks(Event::BeforeUpdate)?;

        if self.is_changed() {
            let batch = self.update_statements();

            match &batch.statements[..] {
                [statement] => {
                    db.execute(statement.clone()).await?;
                }
                _ => db.execute_batch(&batch).await?,
            }
        }

        self.changes_applied();

        self.run_callbacks(Event::AfterUpdate)?;
        self.run_callbacks(Event::AfterSave)
    }

    /// Columns changed to null become one column DELETE, the rest one UPDATE.
    fn update_statements(&self) -> Batch {
        let table = M::table_name();
        let filter = self.key_filter();

        let (nulls, values): (Vec<_>, Vec<_>) = self
            .changes
            .iter()
            .partition(|(_, (_, value))| value.is_null());

        let mut batch = Batch::new();

        if !nulls.is_empty() {
            let columns = nulls.into_iter().map(|(column, _)| column.clone()).collect();
            batch.push(Delete::columns(table, columns, filter.clone()));
        }

        if !values.is_empty() {
            let assignments = values
                .into_iter()
                .map(|(column, (_, value))| Assignment::set(column, value))
                .collect();
            batch.push(Statement::from(Update::new(table, assignments, filter)));
        }

        batch
    }
}
