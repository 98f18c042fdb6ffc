//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validation is shared with the host, which re-checks every auth request
//! body against the same schema.

pub mod validation;
