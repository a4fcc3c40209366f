//! Content administration for a portfolio site backed by a REST API.
//!
//! The crate is organised around a generic [`resource::ResourceManager`]
//! that owns the state of one API collection and keeps it in sync with the
//! server. Everything else is a collaborator the manager is handed at
//! construction time: the HTTP transport, the confirmation prompt, the
//! file selector for image uploads.

pub mod auth;
pub mod commands;
pub mod config;
pub mod http;
pub mod interact;
pub mod logging;
pub mod media;
pub mod mvi;
pub mod resource;
pub mod sections;
