//! Upstream transactions API client
//!
//! The dashboard reaches its data sources through the [`TransactionsApi`]
//! trait: an employee directory, a cursor-paginated "all transactions"
//! feed, and a per-employee transactions feed. The default implementation
//! is [`MemoryBackend`], an in-memory upstream with a seeded dataset.

use async_trait::async_trait;
use std::sync::Arc;

pub mod error;
pub mod memory;
pub mod types;

pub use error::{ClientError, ClientResult};
pub use memory::MemoryBackend;

// Re-export commonly used types
pub use types::{Employee, Page, PageCursor, Transaction, TransactionPage};

/// API reference type
pub type ApiRef = Arc<dyn TransactionsApi>;

/// Trait for upstream transaction data sources
#[async_trait]
pub trait TransactionsApi: Send + Sync {
    /// Fetch the full employee directory
    async fn fetch_employees(&self) -> Result<Vec<Employee>, ClientError>;

    /// Fetch one page of the "all transactions" feed; `None` requests the
    /// first page, otherwise pass the cursor from the previous page
    async fn fetch_transactions_paginated(
        &self,
        cursor: Option<&str>,
    ) -> Result<TransactionPage, ClientError>;

    /// Fetch every transaction for one employee in a single round trip
    async fn fetch_transactions_by_employee(
        &self,
        employee_id: &str,
    ) -> Result<Vec<Transaction>, ClientError>;
}
