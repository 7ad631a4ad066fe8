use crate::stmt::Type;

/// A declared column: name, type and key role.
///
/// Columns are immutable once declared and owned by the model's schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// The column name, as used in CQL statements
    pub name: String,

    /// The declared type; assigned values are cast to it
    pub ty: Type,

    /// Whether the column is part of the primary key, and in which role
    pub key: Option<KeyKind>,
}

/// The role of a key column within the primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// Determines which partition (and therefore which replicas) hold the row
    Partition,

    /// Orders rows within a partition
    Clustering,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            key: None,
        }
    }

    pub fn is_key(&self) -> bool {
        self.key.is_some()
    }

    pub fn is_partition_key(&self) -> bool {
        self.key == Some(KeyKind::Partition)
    }

    pub fn is_clustering_key(&self) -> bool {
        self.key == Some(KeyKind::Clustering)
    }
}
