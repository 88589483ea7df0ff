//! Wire types shared with the upstream transactions API

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Opaque pagination cursor returned by the transactions feed
pub type PageCursor = String;

/// Employee record from the directory feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique employee identifier
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl Employee {
    /// Display label, e.g. "James Smith"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A single financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique transaction identifier
    pub id: String,
    /// Monetary amount in dollars
    pub amount: Decimal,
    /// Merchant name
    pub merchant: String,
    /// Transaction date (YYYY-MM-DD format)
    pub date: String,
    /// Id of the employee who made the transaction
    pub employee_id: String,
    /// Whether the transaction has been approved
    pub approved: bool,
}

impl Transaction {
    /// Get the transaction date as NaiveDate
    pub fn date_naive(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// One batch of a paginated feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Records in this batch
    pub data: Vec<T>,
    /// Cursor for the next page; `None` when the feed is exhausted
    pub next_page: Option<PageCursor>,
}

/// Page of the "all transactions" feed
pub type TransactionPage = Page<Transaction>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_full_name() {
        let employee = Employee {
            id: "emp-001".to_string(),
            first_name: "James".to_string(),
            last_name: "Smith".to_string(),
        };
        assert_eq!(employee.full_name(), "James Smith");
    }

    #[test]
    fn test_transaction_date_naive() {
        let txn = Transaction {
            id: "txn-001".to_string(),
            amount: Decimal::new(1250, 2),
            merchant: "Acme Supplies".to_string(),
            date: "2024-03-14".to_string(),
            employee_id: "emp-001".to_string(),
            approved: true,
        };
        let date = txn.date_naive().unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 14).unwrap());

        let bad = Transaction {
            date: "not-a-date".to_string(),
            ..txn
        };
        assert!(bad.date_naive().is_none());
    }

    #[test]
    fn test_wire_field_names() {
        let employee = Employee {
            id: "emp-001".to_string(),
            first_name: "James".to_string(),
            last_name: "Smith".to_string(),
        };
        let json = serde_json::to_string(&employee).unwrap();
        assert!(json.contains("\"firstName\""));
        assert!(json.contains("\"lastName\""));

        let page: TransactionPage = serde_json::from_str(
            r#"{"data": [], "nextPage": null}"#,
        )
        .unwrap();
        assert!(page.data.is_empty());
        assert!(page.next_page.is_none());
    }
}
