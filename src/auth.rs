//! Admin allow-list.
//!
//! Sign-in happens elsewhere. This gate only answers whether an already
//! identified user may administer content.

use thiserror::Error;

use crate::config::AuthConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessDenied {
    #[error("Not signed in: only the admin account may manage content")]
    Anonymous,

    #[error("Access denied for '{email}': only the admin account may manage content")]
    NotAdmin { email: String },
}

/// Admits exactly one configured email address.
#[derive(Debug, Clone)]
pub struct AdminGate {
    admin_email: Option<String>,
}

impl AdminGate {
    pub fn new(admin_email: Option<String>) -> Self {
        Self {
            admin_email: admin_email.map(|email| email.trim().to_lowercase()),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.admin_email.clone())
    }

    /// True when the address matches the admin, ignoring case.
    pub fn is_admin(&self, email: Option<&str>) -> bool {
        match (&self.admin_email, email) {
            (Some(admin), Some(email)) => email.trim().to_lowercase() == *admin,
            _ => false,
        }
    }

    /// Admits the user or explains why not.
    ///
    /// With no admin configured the gate is open; that is logged so an
    /// unprotected setup does not go unnoticed.
    pub fn check(&self, email: Option<&str>) -> Result<(), AccessDenied> {
        if self.admin_email.is_none() {
            tracing::warn!("No admin email configured, access is not restricted");
            return Ok(());
        }

        match email {
            None => Err(AccessDenied::Anonymous),
            Some(email) if self.is_admin(Some(email)) => Ok(()),
            Some(email) => Err(AccessDenied::NotAdmin {
                email: email.to_string(),
            }),
        }
    }
}
