//! Generic resource management.
//!
//! A [`ResourceManager`] owns one API collection: it loads it, opens and
//! closes the editing session, and sends creates, updates and deletes.
//! Responses pass through [`normalize_list`] / [`normalize_single`] before
//! they reach the manager's state, so envelope differences between
//! endpoints never leak into callers.

mod entity;
mod error;
mod intent;
mod manager;
mod normalize;
mod records;
mod reducer;
mod state;

pub use entity::{Entity, Record, ID_FIELD, LEGACY_ID_FIELD};
pub use error::ManagerError;
pub use intent::ResourceIntent;
pub use manager::{RemoveOutcome, ResourceManager, DELETE_PROMPT};
pub use normalize::{normalize_list, normalize_single, Shape};
pub use records::{About, Contact, Education, Experience, GalleryPhoto, Project, Skill};
pub use reducer::ResourceReducer;
pub use state::ResourceState;
