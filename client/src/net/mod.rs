//! Networking modules for the host JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `identity` defines the backend/navigation seams
//! the auth form depends on, and `types` defines the shared wire schema.

pub mod api;
pub mod identity;
pub mod types;
