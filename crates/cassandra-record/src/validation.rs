use crate::Record;

use cassandra_record_core::stmt::Value;

use std::sync::Arc;

/// Which write a validation run guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationContext {
    /// The record has not been persisted yet
    Create,

    /// The record is persisted and is being re-saved
    Update,
}

pub(crate) type Validator<M> =
    Arc<dyn Fn(&Record<M>, ValidationContext, &mut Errors) + Send + Sync>;

/// Validation errors collected on a record, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Errors {
    entries: Vec<(String, String)>,
}

impl Errors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.entries.push((field.into(), message.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Messages recorded for one field.
    pub fn get(&self, field: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(f, _)| f == field)
            .map(|(_, message)| message.as_str())
            .collect()
    }

    /// `"<field> <message>"` for every entry.
    pub fn full_messages(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(field, message)| format!("{field} {message}"))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }
}

/// Null, or text with nothing but whitespace.
pub(crate) fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}
