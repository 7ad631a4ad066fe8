mod assignment;
pub use assignment::Assignment;

mod batch;
pub use batch::Batch;

mod create_table;
pub use create_table::CreateTable;

mod delete;
pub use delete::Delete;

mod direction;
pub use direction::Direction;

mod insert;
pub use insert::Insert;

mod predicate;
pub use predicate::Predicate;

mod projection;
pub use projection::Projection;

mod select;
pub use select::Select;

mod update;
pub use update::Update;

use std::fmt;

/// A CQL statement, before serialization.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    CreateTable(CreateTable),
    Delete(Delete),
    Insert(Insert),
    Select(Select),
    Update(Update),
}

impl Statement {
    /// Serialize the statement to CQL text.
    pub fn to_cql(&self) -> String {
        crate::serialize(self)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_cql())
    }
}

macro_rules! impl_from_stmt {
    ($( $name:ident ),*) => {
        $(
            impl From<$name> for Statement {
                fn from(src: $name) -> Self {
                    Statement::$name(src)
                }
            }
        )*
    };
}

impl_from_stmt!(CreateTable, Delete, Insert, Select, Update);
