pub mod serializer;
pub use serializer::{bind, quote, serialize};

pub mod stmt;
pub use stmt::Statement;
