mod column;
pub use column::{Column, KeyKind};
