//! HTTP access to the content API.
//!
//! [`Transport`] is the seam resource managers depend on; [`ApiClient`] is
//! the production implementation on top of reqwest.

mod client;
mod error;
mod transport;

pub use client::ApiClient;
pub use error::ApiError;
pub use transport::Transport;
