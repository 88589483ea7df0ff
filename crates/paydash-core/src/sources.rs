//! Source state tracking for the dashboard's data feeds
//!
//! Each transaction source keeps its latest payload, a loading flag, and an
//! epoch counter. Fetches are two-phase: `start_fetch` marks the source
//! loading and hands back a token carrying the current epoch; `resolve`
//! applies a payload only if the token's epoch still matches, so a response
//! that was in flight when the source was invalidated is discarded instead
//! of corrupting the state of the mode the user switched to. `reject`
//! clears the loading flag and keeps prior data, leaving the view in its
//! last good state after a transport failure.

use crate::models::SourceState;
use paydash_client::{Employee, PageCursor, Transaction, TransactionPage};

/// Token tying an in-flight fetch to the source epoch that issued it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

// ==================== Employee Directory ====================

/// Employee directory source. Fetched at most once per session; never
/// invalidated, so the protocol carries no epoch.
#[derive(Debug, Default)]
pub struct EmployeeDirectory {
    data: Option<Vec<Employee>>,
    loading: bool,
}

impl EmployeeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolved directory, `None` until the first successful fetch
    pub fn data(&self) -> Option<&[Employee]> {
        self.data.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn state(&self) -> SourceState {
        if self.loading {
            SourceState::Loading
        } else if self.data.is_some() {
            SourceState::Resolved
        } else {
            SourceState::Uncalled
        }
    }

    pub fn start_fetch(&mut self) {
        self.loading = true;
    }

    pub fn resolve(&mut self, employees: Vec<Employee>) {
        self.loading = false;
        self.data = Some(employees);
    }

    pub fn reject(&mut self) {
        self.loading = false;
    }
}

// ==================== Paginated Transactions ====================

/// State of the cursor-paginated "all transactions" feed
#[derive(Debug, Default)]
pub struct PaginatedTransactions {
    data: Option<TransactionPage>,
    next_page: Option<PageCursor>,
    loading: bool,
    epoch: u64,
}

impl PaginatedTransactions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently resolved page, `None` while uncalled
    pub fn data(&self) -> Option<&TransactionPage> {
        self.data.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn state(&self) -> SourceState {
        if self.loading {
            SourceState::Loading
        } else if self.data.is_some() {
            SourceState::Resolved
        } else {
            SourceState::Uncalled
        }
    }

    /// True iff the last resolved page reported no further pages
    pub fn at_end(&self) -> bool {
        matches!(&self.data, Some(page) if page.next_page.is_none())
    }

    /// Mark the source loading and return the token plus the cursor to
    /// request; the cursor is `None` when starting from the first page
    pub fn start_fetch(&mut self) -> (FetchToken, Option<PageCursor>) {
        self.loading = true;
        (FetchToken(self.epoch), self.next_page.clone())
    }

    /// Apply a fetched page. Returns the stored page, or `None` when the
    /// source was invalidated after the fetch started and the response is
    /// discarded as stale.
    pub fn resolve(&mut self, token: FetchToken, page: TransactionPage) -> Option<&TransactionPage> {
        if token.0 != self.epoch {
            log::debug!("discarding stale paginated response");
            return None;
        }
        self.loading = false;
        self.next_page = page.next_page.clone();
        self.data = Some(page);
        self.data.as_ref()
    }

    /// Clear the loading flag after a failed fetch; prior data is kept
    pub fn reject(&mut self, token: FetchToken) {
        if token.0 == self.epoch {
            self.loading = false;
        }
    }

    /// Reset cursor and resolved state to uncalled. An in-flight response
    /// issued before this call will be discarded by `resolve`.
    pub fn invalidate_data(&mut self) {
        self.data = None;
        self.next_page = None;
        self.loading = false;
        self.epoch += 1;
    }
}

// ==================== Employee-Scoped Transactions ====================

/// State of the single-call per-employee transactions feed
#[derive(Debug, Default)]
pub struct EmployeeTransactions {
    data: Option<Vec<Transaction>>,
    loading: bool,
    epoch: u64,
}

impl EmployeeTransactions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolved transaction list, `None` while uncalled
    pub fn data(&self) -> Option<&[Transaction]> {
        self.data.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn state(&self) -> SourceState {
        if self.loading {
            SourceState::Loading
        } else if self.data.is_some() {
            SourceState::Resolved
        } else {
            SourceState::Uncalled
        }
    }

    pub fn start_fetch(&mut self) -> FetchToken {
        self.loading = true;
        FetchToken(self.epoch)
    }

    /// Apply a fetched result; stale responses are discarded as in
    /// [`PaginatedTransactions::resolve`]
    pub fn resolve(&mut self, token: FetchToken, transactions: Vec<Transaction>) -> Option<&[Transaction]> {
        if token.0 != self.epoch {
            log::debug!("discarding stale employee-scoped response");
            return None;
        }
        self.loading = false;
        self.data = Some(transactions);
        self.data.as_deref()
    }

    pub fn reject(&mut self, token: FetchToken) {
        if token.0 == self.epoch {
            self.loading = false;
        }
    }

    /// Reset to uncalled; a late response is discarded by `resolve`
    pub fn invalidate_data(&mut self) {
        self.data = None;
        self.loading = false;
        self.epoch += 1;
    }
}

// ==================== Tests ====================
