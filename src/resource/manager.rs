//! Per-resource controller synchronising local state with the API.

use std::sync::Arc;

use serde::Serialize;

use crate::config::DeletePolicy;
use crate::http::Transport;
use crate::interact::Confirm;
use crate::mvi::Reducer;

use super::entity::{Entity, Record};
use super::error::ManagerError;
use super::intent::ResourceIntent;
use super::normalize::Shape;
use super::reducer::ResourceReducer;
use super::state::ResourceState;

/// Question asked before every delete.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this item?";

/// What `remove` ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// No id was given; nothing happened.
    Skipped,
    /// The user did not confirm; nothing was sent.
    Declined,
    Removed,
    /// The request failed; see the state's error.
    Failed,
}

/// Owns the collection and editing session of one API resource.
///
/// A manager is bound to a resource name (the collection path segment,
/// e.g. `"skills"`) and a record type. All operations suspend only on the
/// network call and take `&mut self`, so requests on one manager never
/// overlap.
pub struct ResourceManager<T: Record = Entity> {
    resource: String,
    transport: Arc<dyn Transport>,
    confirm: Arc<dyn Confirm>,
    delete_policy: DeletePolicy,
    shape: Shape,
    state: ResourceState<T>,
}

impl<T: Record> ResourceManager<T> {
    /// Creates a manager without touching the network.
    pub fn new(
        resource: impl Into<String>,
        transport: Arc<dyn Transport>,
        confirm: Arc<dyn Confirm>,
    ) -> Self {
        Self {
            resource: resource.into(),
            transport,
            confirm,
            delete_policy: DeletePolicy::default(),
            shape: Shape::List,
            state: ResourceState::default(),
        }
    }

    /// Creates a manager and performs the initial load.
    pub async fn open(
        resource: impl Into<String>,
        transport: Arc<dyn Transport>,
        confirm: Arc<dyn Confirm>,
    ) -> Self {
        let mut manager = Self::new(resource, transport, confirm);
        manager.load().await;
        manager
    }

    /// Creates a manager for a singleton resource and performs the initial
    /// load. `items` then holds at most one record.
    pub async fn open_singleton(
        resource: impl Into<String>,
        transport: Arc<dyn Transport>,
        confirm: Arc<dyn Confirm>,
    ) -> Self {
        let mut manager = Self::new(resource, transport, confirm).with_shape(Shape::Single);
        manager.load().await;
        manager
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_delete_policy(mut self, policy: DeletePolicy) -> Self {
        self.delete_policy = policy;
        self
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn state(&self) -> &ResourceState<T> {
        &self.state
    }

    pub fn items(&self) -> &[T] {
        &self.state.items
    }

    pub fn loading(&self) -> bool {
        self.state.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn editing(&self) -> Option<&T> {
        self.state.editing.as_ref()
    }

    pub fn show_form(&self) -> bool {
        self.state.show_form
    }

    /// The record of a singleton resource (About, Contact).
    pub fn first(&self) -> Option<&T> {
        self.state.first()
    }

    fn dispatch(&mut self, intent: ResourceIntent<T>) {
        let state = std::mem::take(&mut self.state);
        self.state = ResourceReducer::<T>::reduce(state, intent);
    }

    /// Re-fetches the collection.
    ///
    /// On failure the previous items stay in place and `error` is set.
    pub async fn load(&mut self) {
        self.dispatch(ResourceIntent::LoadStarted);

        match self.transport.get(&self.resource).await {
            Ok(response) => {
                let items = self.decode(self.shape.extract(&response));
                tracing::debug!(resource = %self.resource, count = items.len(), "Loaded resource");
                self.dispatch(ResourceIntent::Loaded { items });
            }
            Err(e) => {
                tracing::error!(
                    resource = %self.resource,
                    error_type = e.error_type(),
                    error = %e,
                    "Failed to load resource"
                );
                self.dispatch(ResourceIntent::LoadFailed {
                    message: format!("Failed to load {} from API", self.resource),
                });
            }
        }
    }

    fn decode(&self, entities: Vec<Entity>) -> Vec<T> {
        entities
            .into_iter()
            .filter_map(|entity| match serde_json::from_value::<T>(entity.into_value()) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(
                        resource = %self.resource,
                        error = %e,
                        "Skipping record that does not match the expected shape"
                    );
                    None
                }
            })
            .collect()
    }

    /// Opens an empty form.
    pub fn open_create(&mut self) {
        self.dispatch(ResourceIntent::OpenCreate);
    }

    /// Opens the form on `item`. Seeding form fields is the caller's job.
    pub fn open_edit(&mut self, item: T) {
        self.dispatch(ResourceIntent::OpenEdit { item });
    }

    /// Closes the form and ends the editing session.
    pub fn cancel(&mut self) {
        self.dispatch(ResourceIntent::Cancel);
    }

    /// Creates or updates, then reloads the collection.
    ///
    /// Updates go to `{resource}/{id}` when the record being edited has an
    /// id; everything else is a create. On failure the form stays open and
    /// the error is returned as well as recorded.
    pub async fn save<F: Serialize + ?Sized>(&mut self, form: &F) -> Result<(), ManagerError> {
        let result = self.send_save(form).await;

        match result {
            Ok(()) => {
                self.dispatch(ResourceIntent::Saved);
                self.load().await;
                Ok(())
            }
            Err(e) => {
                tracing::error!(resource = %self.resource, error = %e, "Failed to save resource");
                self.dispatch(ResourceIntent::SaveFailed {
                    message: format!("Failed to save {}", self.resource),
                });
                Err(e)
            }
        }
    }

    async fn send_save<F: Serialize + ?Sized>(&self, form: &F) -> Result<(), ManagerError> {
        let body = serde_json::to_value(form)?;
        let target = self.state.editing.as_ref().and_then(|item| item.id());

        match target {
            Some(id) => {
                let path = format!("{}/{}", self.resource, id);
                self.transport.patch(&path, &body).await?;
            }
            None => {
                self.transport.post(&self.resource, &body).await?;
            }
        }
        Ok(())
    }

    /// Deletes `id` after confirmation and drops it from the local list.
    ///
    /// The list is not re-fetched. Whether a 404 counts as success is
    /// decided by the manager's [`DeletePolicy`].
    pub async fn remove(&mut self, id: Option<&str>) -> RemoveOutcome {
        let Some(id) = id.filter(|id| !id.is_empty()) else {
            return RemoveOutcome::Skipped;
        };

        if !self.confirm.confirm(DELETE_PROMPT) {
            tracing::debug!(resource = %self.resource, id = %id, "Delete declined");
            return RemoveOutcome::Declined;
        }

        let path = format!("{}/{}", self.resource, id);
        match self.transport.delete(&path).await {
            Ok(_) => {}
            Err(e) if e.is_not_found() && self.delete_policy == DeletePolicy::Idempotent => {
                tracing::info!(resource = %self.resource, id = %id, "Entity already gone, treating delete as done");
            }
            Err(e) => {
                tracing::error!(resource = %self.resource, id = %id, error = %e, "Failed to delete resource");
                self.dispatch(ResourceIntent::RemoveFailed {
                    message: format!("Failed to delete {}", self.resource),
                });
                return RemoveOutcome::Failed;
            }
        }

        self.dispatch(ResourceIntent::Removed { id: id.to_string() });
        RemoveOutcome::Removed
    }
}
