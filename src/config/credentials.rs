//! Credential handling for the content API.
//!
//! API tokens are wrapped so they never end up in logs or debug output.

use super::types::ApiConfig;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

impl ApiConfig {
    /// The bearer token for this API, if a non-empty one is configured.
    pub fn credential(&self) -> Option<SecureString> {
        self.api_key
            .as_ref()
            .filter(|key| !key.trim().is_empty())
            .map(|key| SecureString::new(key.clone()))
    }
}

/// Header name and value for authentication.
pub type AuthHeader = (String, String);

/// Build the `Authorization` header for the API, if a token is configured.
pub fn build_auth_header(api: &ApiConfig) -> Option<AuthHeader> {
    api.credential()
        .map(|key| ("Authorization".to_string(), format!("Bearer {}", key.expose())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_string_does_not_leak() {
        let secret = SecureString::new("my-secret-key".to_string());

        let debug_output = format!("{:?}", secret);
        assert!(!debug_output.contains("my-secret-key"));

        let display_output = format!("{}", secret);
        assert!(!display_output.contains("my-secret-key"));

        assert_eq!(secret.expose(), "my-secret-key");
    }

    #[test]
    fn test_bearer_header() {
        let api = ApiConfig {
            api_key: Some("token-456".to_string()),
            ..ApiConfig::default()
        };
        let (name, value) = build_auth_header(&api).unwrap();
        assert_eq!(name, "Authorization");
        assert_eq!(value, "Bearer token-456");
    }

    #[test]
    fn test_blank_key_means_no_header() {
        let api = ApiConfig {
            api_key: Some("   ".to_string()),
            ..ApiConfig::default()
        };
        assert!(build_auth_header(&api).is_none());
        assert!(build_auth_header(&ApiConfig::default()).is_none());
    }
}
