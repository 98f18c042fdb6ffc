//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Everything here is plain data plus transitions, with no Leptos or browser
//! types, so it tests with ordinary `#[test]` functions. Pages wrap these
//! values in signals.

pub mod auth_form;
pub mod dashboard;
pub mod fields;
pub mod link;
