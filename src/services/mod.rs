//! Service layer for the host's JSON API.
//!
//! ARCHITECTURE
//! ============
//! Route handlers stay thin; outbound calls and data assembly live here.

pub mod dashboard;
pub mod identity;
