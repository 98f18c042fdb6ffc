//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: they render values handed to them by the
//! pages and report user input back through callbacks.

pub mod auth_input;
pub mod header_box;
pub mod link_account;
pub mod recent_transactions;
pub mod right_sidebar;
pub mod total_balance_box;
