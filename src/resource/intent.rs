//! Intents accepted by the resource reducer.

use crate::mvi::Intent;

use super::entity::Record;

#[derive(Debug, Clone)]
pub enum ResourceIntent<T> {
    /// A GET was issued.
    LoadStarted,
    /// The GET succeeded; replaces the collection.
    Loaded { items: Vec<T> },
    /// The GET failed; the previous collection stays visible.
    LoadFailed { message: String },
    /// User asked for an empty form.
    OpenCreate,
    /// User asked to edit an existing record.
    OpenEdit { item: T },
    /// User dismissed the form.
    Cancel,
    /// A create or update was accepted by the server.
    Saved,
    /// A create or update was rejected; the form stays open.
    SaveFailed { message: String },
    /// A DELETE succeeded for this id.
    Removed { id: String },
    /// A DELETE failed; the collection is untouched.
    RemoveFailed { message: String },
}

impl<T: Record> Intent for ResourceIntent<T> {}
