pub mod cursor;
pub use cursor::Cursor;

pub mod db;
pub use db::Db;

pub mod migration;
pub use migration::{CqlMigration, Migration, Migrator, SchemaMigration};

mod model;
pub use model::Model;

pub mod record;
pub use record::Record;

pub mod relation;
pub use relation::{IntoCondition, Projection, Relation};

pub mod schema;
pub use schema::{Event, Schema};

pub mod validation;
pub use validation::{Errors, ValidationContext};

pub use cassandra_record_core::{
    async_trait, bail,
    driver::{self, Connection, Consistency, Driver, ExecOptions, Rows},
    err, row,
    schema::{Column, KeyKind},
    stmt::{self, Row, Type, Value},
    Error, Result,
};

pub use cassandra_record_cql as cql;
pub use cassandra_record_cql::stmt::Direction;
