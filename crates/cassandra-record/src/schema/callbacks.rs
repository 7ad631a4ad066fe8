use crate::{Record, Result};

use std::sync::Arc;

/// A lifecycle event hooks can be registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    BeforeValidation,
    AfterValidation,
    BeforeSave,
    AfterSave,
    BeforeCreate,
    AfterCreate,
    BeforeUpdate,
    AfterUpdate,
    BeforeDestroy,
    AfterDestroy,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BeforeValidation => "before_validation",
            Event::AfterValidation => "after_validation",
            Event::BeforeSave => "before_save",
            Event::AfterSave => "after_save",
            Event::BeforeCreate => "before_create",
            Event::AfterCreate => "after_create",
            Event::BeforeUpdate => "before_update",
            Event::AfterUpdate => "after_update",
            Event::BeforeDestroy => "before_destroy",
            Event::AfterDestroy => "after_destroy",
        }
    }
}

pub(crate) type Callback<M> = Arc<dyn Fn(&mut Record<M>) -> Result<()> + Send + Sync>;

/// Registered handlers, in registration order.
pub(crate) struct Callbacks<M> {
    handlers: Vec<(Event, Callback<M>)>,
}

impl<M> Default for Callbacks<M> {
    fn default() -> Self {
        Self { handlers: vec![] }
    }
}

impl<M> Callbacks<M> {
    pub(crate) fn push(&mut self, event: Event, callback: Callback<M>) {
        self.handlers.push((event, callback));
    }

    pub(crate) fn get(&self, event: Event) -> impl Iterator<Item = &Callback<M>> + '_ {
        self.handlers
            .iter()
            .filter(move |(e, _)| *e == event)
            .map(|(_, callback)| callback)
    }

    pub(crate) fn len(&self) -> usize {
        self.handlers.len()
    }
}
