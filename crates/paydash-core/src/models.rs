//! View-state models for the dashboard

use serde::Serialize;

pub use paydash_client::{Employee, Page, PageCursor, Transaction, TransactionPage};

/// Id of the sentinel "no filter" employee
pub const EMPTY_EMPLOYEE_ID: &str = "empty";

/// Synthetic "no filter" entry prepended to the employee selector.
/// Never a fetched entity.
pub fn empty_employee() -> Employee {
    Employee {
        id: EMPTY_EMPLOYEE_ID.to_string(),
        first_name: "All".to_string(),
        last_name: "Employees".to_string(),
    }
}

/// Which transaction source is currently authoritative
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Paginated "all transactions" feed
    All,
    /// Employee-scoped feed for the given employee id
    Employee(String),
}

impl Mode {
    /// Selected employee id, `None` in all-transactions mode
    pub fn employee_id(&self) -> Option<&str> {
        match self {
            Mode::All => None,
            Mode::Employee(id) => Some(id),
        }
    }
}

/// Reported lifecycle state of a data source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceState {
    /// Never fetched, or reset by invalidation
    Uncalled,
    /// Fetch in flight
    Loading,
    /// Holds a result
    Resolved,
}

impl std::fmt::Display for SourceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceState::Uncalled => write!(f, "uncalled"),
            SourceState::Loading => write!(f, "loading"),
            SourceState::Resolved => write!(f, "resolved"),
        }
    }
}

/// Serializable view of the dashboard handed to the presentation layer
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// Accumulated display list
    pub transactions: Vec<Transaction>,
    /// Employee directory; empty until the directory resolves
    pub employees: Vec<Employee>,
    /// Currently selected employee id, `None` in all-transactions mode
    pub selected_employee: Option<String>,
    pub is_employees_loading: bool,
    pub is_at_end_of_data: bool,
    pub is_view_more_visible: bool,
}
