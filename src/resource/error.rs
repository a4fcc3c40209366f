use thiserror::Error;

use crate::http::ApiError;

/// Errors a resource manager hands back to its caller.
///
/// Only `save` propagates failures; the other operations record them in
/// [`ResourceState::error`](super::ResourceState) and return normally.
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Failed to encode form data: {0}")]
    Encode(#[from] serde_json::Error),
}
