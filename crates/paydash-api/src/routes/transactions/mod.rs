//! Transaction routes - display list, employee filter, view-more pagination
//!
//! Structure:
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: Full page rendering

pub mod api;
pub mod page;

pub use api::{
    api_select,
    api_state,
    api_transactions,
    api_view_more,
    htmx_select,
    htmx_transactions_list,
    htmx_view_more,
};

pub use page::page_dashboard;
