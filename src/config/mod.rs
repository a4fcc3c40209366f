//! Configuration loading: TOML file, environment overrides, credentials.

mod credentials;
mod loader;
mod types;

pub use credentials::{build_auth_header, AuthHeader, SecureString};
pub use loader::{ConfigError, ENV_ADMIN_EMAIL, ENV_API_ENDPOINT, ENV_API_KEY};
pub use types::{ApiConfig, AuthConfig, Config, DeletePolicy, ResourcesConfig};
