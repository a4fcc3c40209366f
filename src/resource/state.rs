//! State owned by a resource manager.

use crate::mvi::ViewState;

use super::entity::Record;

/// Everything a screen needs to render one resource.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    /// Server order; at most one element for singleton resources.
    pub items: Vec<T>,
    pub loading: bool,
    /// Last failure, scoped to the resource. Cleared when a load starts.
    pub error: Option<String>,
    /// Record open in the form; `None` while creating.
    pub editing: Option<T>,
    pub show_form: bool,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            editing: None,
            show_form: false,
        }
    }
}

impl<T: Record> ViewState for ResourceState<T> {}

impl<T: Record> ResourceState<T> {
    /// The record of a singleton resource.
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == Some(id))
    }

    pub fn is_creating(&self) -> bool {
        self.show_form && self.editing.is_none()
    }
}
