mod cast;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;

mod value_chrono;

use indexmap::IndexMap;

/// A row returned by the driver, or a projected row handed back to the
/// application: column name to value, in the order the columns were selected.
pub type Row = IndexMap<String, Value>;
