//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod fake_transport;
pub mod mock_backend;

use portfolio_cms::resource::Entity;
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Build an entity from a JSON object literal.
pub fn entity(value: Value) -> Entity {
    Entity::from_value(value).expect("entity must be a JSON object")
}
