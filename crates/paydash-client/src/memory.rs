//! In-memory transactions backend
//!
//! Serves a fixed dataset with cursor pagination, employee filtering, and
//! optional simulated latency. This is the upstream the dashboard talks to
//! by default; the cursor is the numeric offset of the next record, encoded
//! as an opaque string token.

use crate::error::{ClientError, ClientResult};
use crate::types::{Employee, Transaction, TransactionPage};
use crate::TransactionsApi;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::time::Duration;

/// In-memory implementation of [`crate::TransactionsApi`]
pub struct MemoryBackend {
    employees: Vec<Employee>,
    transactions: Vec<Transaction>,
    page_size: usize,
    latency: Duration,
}

impl MemoryBackend {
    /// Create a backend over the given dataset
    pub fn new(
        employees: Vec<Employee>,
        transactions: Vec<Transaction>,
        page_size: usize,
        latency_ms: u64,
    ) -> Self {
        Self {
            employees,
            transactions,
            page_size: page_size.max(1),
            latency: Duration::from_millis(latency_ms),
        }
    }

    /// Create a backend over the bundled fixture dataset
    pub fn seeded(page_size: usize, latency_ms: u64) -> Self {
        Self::new(seed_employees(), seed_transactions(), page_size, latency_ms)
    }

    fn parse_cursor(&self, cursor: Option<&str>) -> ClientResult<usize> {
        match cursor {
            None => Ok(0),
            Some(raw) => {
                let start = raw.parse::<usize>().map_err(|_| ClientError::InvalidCursor {
                    cursor: raw.to_string(),
                })?;
                if start > self.transactions.len() {
                    return Err(ClientError::InvalidCursor {
                        cursor: raw.to_string(),
                    });
                }
                Ok(start)
            }
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl TransactionsApi for MemoryBackend {
    async fn fetch_employees(&self) -> Result<Vec<Employee>, ClientError> {
        self.simulate_latency().await;
        Ok(self.employees.clone())
    }

    async fn fetch_transactions_paginated(
        &self,
        cursor: Option<&str>,
    ) -> Result<TransactionPage, ClientError> {
        self.simulate_latency().await;
        let start = self.parse_cursor(cursor)?;
        let end = (start + self.page_size).min(self.transactions.len());
        let data = self.transactions[start..end].to_vec();
        let next_page = if end < self.transactions.len() {
            Some(end.to_string())
        } else {
            None
        };
        Ok(TransactionPage { data, next_page })
    }

    async fn fetch_transactions_by_employee(
        &self,
        employee_id: &str,
    ) -> Result<Vec<Transaction>, ClientError> {
        self.simulate_latency().await;
        if !self.employees.iter().any(|e| e.id == employee_id) {
            return Err(ClientError::UnknownEmployee {
                id: employee_id.to_string(),
            });
        }
        Ok(self
            .transactions
            .iter()
            .filter(|t| t.employee_id == employee_id)
            .cloned()
            .collect())
    }
}

// ==================== Fixture Dataset ====================

fn employee(id: &str, first_name: &str, last_name: &str) -> Employee {
    Employee {
        id: id.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    }
}

fn txn(
    id: &str,
    cents: i64,
    merchant: &str,
    date: &str,
    employee_id: &str,
    approved: bool,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        amount: Decimal::new(cents, 2),
        merchant: merchant.to_string(),
        date: date.to_string(),
        employee_id: employee_id.to_string(),
        approved,
    }
}

fn seed_employees() -> Vec<Employee> {
    vec![
        employee("emp-001", "James", "Smith"),
        employee("emp-002", "Maria", "Garcia"),
        employee("emp-003", "Wei", "Chen"),
        employee("emp-004", "Priya", "Patel"),
        employee("emp-005", "Daniel", "Brown"),
        employee("emp-006", "Sofia", "Rossi"),
    ]
}

fn seed_transactions() -> Vec<Transaction> {
    vec![
        txn("txn-001", 15250, "Acme Supplies", "2024-01-08", "emp-001", true),
        txn("txn-002", 4899, "Blue Bottle Coffee", "2024-01-12", "emp-002", true),
        txn("txn-003", 120000, "Skyline Travel", "2024-01-19", "emp-003", false),
        txn("txn-004", 2350, "Metro Transit", "2024-01-23", "emp-001", true),
        txn("txn-005", 8999, "Office Depot", "2024-02-02", "emp-004", true),
        txn("txn-006", 34900, "CloudHost", "2024-02-07", "emp-005", true),
        txn("txn-007", 56200, "Gourmet Catering", "2024-02-14", "emp-002", false),
        txn("txn-008", 1500, "City Parking", "2024-02-21", "emp-006", true),
        txn("txn-009", 219999, "TechWorld", "2024-03-01", "emp-003", true),
        txn("txn-010", 7425, "Print Hub", "2024-03-06", "emp-004", true),
        txn("txn-011", 18600, "Acme Supplies", "2024-03-15", "emp-005", false),
        txn("txn-012", 9200, "Riverside Hotel", "2024-03-22", "emp-001", true),
        txn("txn-013", 4150, "Blue Bottle Coffee", "2024-04-03", "emp-006", true),
        txn("txn-014", 67800, "Skyline Travel", "2024-04-11", "emp-002", true),
        txn("txn-015", 2999, "Metro Transit", "2024-04-18", "emp-003", true),
        txn("txn-016", 125000, "Summit Conference", "2024-05-02", "emp-004", false),
        txn("txn-017", 5600, "Office Depot", "2024-05-16", "emp-005", true),
        txn("txn-018", 31250, "Gourmet Catering", "2024-06-04", "emp-006", true),
    ]
}

// ==================== Tests ====================
