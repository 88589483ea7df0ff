//! Route modules for the dashboard server
//!
//! Each module follows a consistent structure:
//! - api.rs: JSON API endpoints
//! - page.rs: HTMX page rendering
//!
//! The employees module is small enough to live in a single file.

pub mod employees;
pub mod transactions;
