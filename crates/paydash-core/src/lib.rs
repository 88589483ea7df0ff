//! Core view-state reconciliation for the transaction dashboard
//!
//! The [`Dashboard`] owns two mutually exclusive transaction sources (the
//! paginated "all transactions" feed and the per-employee feed) plus the
//! employee directory, and reconciles them into a single display list.
//! Every fetch is the direct result of a named transition (`mount`,
//! `select_employee`, `view_more`); selecting one filter mode invalidates
//! the other source, and derived flags (`is_at_end_of_data`,
//! `is_view_more_visible`, `is_employees_loading`) are computed from the
//! source states on demand.

pub mod error;
pub mod models;
pub mod sources;

use log::{debug, warn};
use paydash_client::ApiRef;

pub use error::{CoreError, CoreResult, ErrorCode, ErrorSeverity};
pub use models::{
    empty_employee, DashboardSnapshot, Mode, SourceState, EMPTY_EMPLOYEE_ID,
};
pub use paydash_client::{Employee, Transaction, TransactionPage};

use sources::{EmployeeDirectory, EmployeeTransactions, PaginatedTransactions};

/// Dashboard view state
///
/// Holds the current mode, the accumulated display list, and the per-source
/// fetch state. The display list is owned exclusively by this struct; the
/// presentation layer only reads snapshots.
pub struct Dashboard {
    api: ApiRef,
    mode: Mode,
    transactions: Vec<Transaction>,
    employees: EmployeeDirectory,
    paginated: PaginatedTransactions,
    by_employee: EmployeeTransactions,
}

impl Dashboard {
    /// Create a dashboard over the given API handle
    pub fn new(api: ApiRef) -> Self {
        Self {
            api,
            mode: Mode::All,
            transactions: Vec::new(),
            employees: EmployeeDirectory::new(),
            paginated: PaginatedTransactions::new(),
            by_employee: EmployeeTransactions::new(),
        }
    }

    // ==================== Transitions ====================

    /// Initial load; same path as selecting the sentinel employee
    pub async fn mount(&mut self) -> CoreResult<()> {
        self.load_all().await
    }

    /// Switch the employee filter. `None` or the sentinel id enters
    /// all-transactions mode (a full reload, even when already there);
    /// a real id enters employee mode. An id missing from a resolved
    /// directory falls back to the sentinel.
    pub async fn select_employee(&mut self, selection: Option<&str>) -> CoreResult<()> {
        match selection {
            None => self.load_all().await,
            Some(id) if id == EMPTY_EMPLOYEE_ID => self.load_all().await,
            Some(id) => {
                if let Some(directory) = self.employees.data() {
                    if !directory.iter().any(|e| e.id == id) {
                        warn!("unknown employee selection {:?}, showing all transactions", id);
                        return self.load_all().await;
                    }
                }
                self.load_by_employee(id).await
            }
        }
    }

    /// Append the next page of the "all transactions" feed to the display
    /// list. A no-op while an employee filter is active, while a page is
    /// already loading, or at end of data.
    pub async fn view_more(&mut self) -> CoreResult<()> {
        if self.mode != Mode::All || self.paginated.is_loading() || self.is_at_end_of_data() {
            debug!("view_more ignored in current state");
            return Ok(());
        }
        self.fetch_next_page().await
    }

    async fn load_all(&mut self) -> CoreResult<()> {
        self.mode = Mode::All;
        self.by_employee.invalidate_data();
        // Pagination restarts at the first page; accumulation starts fresh
        self.paginated.invalidate_data();
        self.transactions.clear();

        self.fetch_employees().await?;
        self.fetch_next_page().await
    }

    async fn load_by_employee(&mut self, employee_id: &str) -> CoreResult<()> {
        self.mode = Mode::Employee(employee_id.to_string());
        self.paginated.invalidate_data();

        let token = self.by_employee.start_fetch();
        match self.api.fetch_transactions_by_employee(employee_id).await {
            Ok(list) => {
                if let Some(scoped) = self.by_employee.resolve(token, list) {
                    // The scoped result replaces the display list outright
                    self.transactions.clear();
                    self.transactions.extend_from_slice(scoped);
                }
                Ok(())
            }
            Err(e) => {
                self.by_employee.reject(token);
                Err(e.into())
            }
        }
    }

    async fn fetch_employees(&mut self) -> CoreResult<()> {
        // At most one directory fetch per session
        if self.employees.data().is_some() {
            return Ok(());
        }
        self.employees.start_fetch();
        match self.api.fetch_employees().await {
            Ok(list) => {
                self.employees.resolve(list);
                Ok(())
            }
            Err(e) => {
                self.employees.reject();
                Err(e.into())
            }
        }
    }

    async fn fetch_next_page(&mut self) -> CoreResult<()> {
        let (token, cursor) = self.paginated.start_fetch();
        match self.api.fetch_transactions_paginated(cursor.as_deref()).await {
            Ok(page) => {
                if let Some(accepted) = self.paginated.resolve(token, page) {
                    self.transactions.extend_from_slice(&accepted.data);
                }
                Ok(())
            }
            Err(e) => {
                self.paginated.reject(token);
                Err(e.into())
            }
        }
    }

    // ==================== Derived State ====================

    /// Accumulated display list
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Resolved employee directory, `None` until loaded
    pub fn employees(&self) -> Option<&[Employee]> {
        self.employees.data()
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Currently selected employee id, `None` in all-transactions mode
    pub fn selected_employee(&self) -> Option<&str> {
        self.mode.employee_id()
    }

    /// True while the directory fetch is in flight and nothing has
    /// resolved yet
    pub fn is_employees_loading(&self) -> bool {
        self.employees.is_loading() && self.employees.data().is_none()
    }

    /// True iff the most recent paginated page reported no further pages.
    /// Always false while an employee filter is active.
    pub fn is_at_end_of_data(&self) -> bool {
        match self.mode {
            Mode::Employee(_) => false,
            Mode::All => self.paginated.at_end(),
        }
    }

    /// The "view more" control is shown only when no employee-scoped
    /// result is authoritative and the paginated feed is not exhausted
    pub fn is_view_more_visible(&self) -> bool {
        self.by_employee.data().is_none() && !self.is_at_end_of_data()
    }

    /// States of the two transaction sources (paginated, employee-scoped)
    pub fn source_states(&self) -> (SourceState, SourceState) {
        (self.paginated.state(), self.by_employee.state())
    }

    /// Serializable view for the presentation layer
    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            transactions: self.transactions.clone(),
            employees: self.employees.data().map(<[Employee]>::to_vec).unwrap_or_default(),
            selected_employee: self.selected_employee().map(str::to_string),
            is_employees_loading: self.is_employees_loading(),
            is_at_end_of_data: self.is_at_end_of_data(),
            is_view_more_visible: self.is_view_more_visible(),
        }
    }
}

// ==================== Tests ====================
