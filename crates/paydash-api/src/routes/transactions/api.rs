//! Transactions API endpoints - JSON API and HTMX partial responses
//!
//! Endpoints:
//! - api_transactions: current display list (JSON)
//! - api_state: full view-state snapshot (JSON)
//! - api_select: switch the employee filter (JSON)
//! - api_view_more: append the next page (JSON)
//! - htmx_transactions_list: display list fragment (HTML)
//! - htmx_select: switch filter and refresh the fragment (HTMX)
//! - htmx_view_more: append the next page and refresh the fragment (HTMX)
//!
//! Transport failures are not retried: JSON endpoints propagate them as
//! error responses, HTMX endpoints log and re-render the last good state.

use crate::error::ApiError;
use crate::AppState;
use axum::extract::Form;
use paydash_core::DashboardSnapshot;
use paydash_utils::{format_amount, sanitize_html};
use std::collections::HashMap;

/// Current display list (JSON API)
pub async fn api_transactions(state: axum::extract::State<AppState>) -> String {
    let dashboard = state.dashboard.read().await;
    serde_json::to_string(dashboard.transactions()).unwrap_or_default()
}

/// Full view-state snapshot (JSON API)
pub async fn api_state(state: axum::extract::State<AppState>) -> String {
    let dashboard = state.dashboard.read().await;
    serde_json::to_string(&dashboard.snapshot()).unwrap_or_default()
}

/// Switch the employee filter (JSON API); returns the refreshed snapshot
pub async fn api_select(
    state: axum::extract::State<AppState>,
    Form(params): Form<HashMap<String, String>>,
) -> Result<String, ApiError> {
    let selection = params.get("employee").map(|s| s.as_str());
    let mut dashboard = state.dashboard.write().await;
    dashboard.select_employee(selection).await?;
    Ok(serde_json::to_string(&dashboard.snapshot()).unwrap_or_default())
}

/// Append the next page (JSON API); returns the refreshed snapshot
pub async fn api_view_more(
    state: axum::extract::State<AppState>,
) -> Result<String, ApiError> {
    let mut dashboard = state.dashboard.write().await;
    dashboard.view_more().await?;
    Ok(serde_json::to_string(&dashboard.snapshot()).unwrap_or_default())
}

/// HTMX: display list fragment
pub async fn htmx_transactions_list(state: axum::extract::State<AppState>) -> String {
    let dashboard = state.dashboard.read().await;
    render_transactions_fragment(&dashboard.snapshot())
}

/// HTMX: switch the employee filter and refresh the fragment
pub async fn htmx_select(
    state: axum::extract::State<AppState>,
    Form(params): Form<HashMap<String, String>>,
) -> String {
    let selection = params.get("employee").map(|s| s.as_str());
    let mut dashboard = state.dashboard.write().await;
    if let Err(e) = dashboard.select_employee(selection).await {
        log::error!("employee selection failed: {}", e);
    }
    render_transactions_fragment(&dashboard.snapshot())
}

/// HTMX: append the next page and refresh the fragment
pub async fn htmx_view_more(state: axum::extract::State<AppState>) -> String {
    let mut dashboard = state.dashboard.write().await;
    if let Err(e) = dashboard.view_more().await {
        log::error!("view more failed: {}", e);
    }
    render_transactions_fragment(&dashboard.snapshot())
}

/// Render the display list plus the view-more control from a snapshot
pub fn render_transactions_fragment(snapshot: &DashboardSnapshot) -> String {
    if snapshot.transactions.is_empty() {
        return r#"<div class='text-center py-12 text-gray-500'><p>No transactions to show</p></div>"#
            .to_string();
    }

    let mut html = String::from("<div class='space-y-2'>");
    for txn in &snapshot.transactions {
        let employee_label = snapshot
            .employees
            .iter()
            .find(|e| e.id == txn.employee_id)
            .map(|e| e.full_name())
            .unwrap_or_else(|| txn.employee_id.clone());
        let (badge_label, badge_class) = if txn.approved {
            ("Approved", "bg-green-100 text-green-700")
        } else {
            ("Pending", "bg-yellow-100 text-yellow-700")
        };
        html.push_str(&format!(
            r#"
<div class='flex items-center justify-between bg-white rounded-lg shadow-sm px-4 py-3'>
    <div>
        <p class='font-medium'>{}</p>
        <p class='text-sm text-gray-500'>{} &middot; {}</p>
    </div>
    <div class='flex items-center gap-3'>
        <span class='text-xs px-2 py-1 rounded-full {}'>{}</span>
        <span class='font-semibold'>{}</span>
    </div>
</div>"#,
            sanitize_html(&txn.merchant),
            sanitize_html(&employee_label),
            txn.date,
            badge_class,
            badge_label,
            format_amount(txn.amount)
        ));
    }
    html.push_str("\n</div>");

    if snapshot.is_at_end_of_data {
        html.push_str(
            "\n<p class='text-center text-sm text-gray-400 py-4'>No more transactions</p>",
        );
    }
    if snapshot.is_view_more_visible {
        html.push_str(
            r#"
<div class='text-center py-4'>
    <button hx-post='/transactions/more' hx-target='#transactions-content' hx-swap='innerHTML'
        class='px-6 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700'>View more</button>
</div>"#,
        );
    }
    html
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use paydash_core::{Employee, Transaction};
    use rust_decimal::Decimal;

    fn snapshot(transactions: Vec<Transaction>, at_end: bool, view_more: bool) -> DashboardSnapshot {
        DashboardSnapshot {
            transactions,
            employees: vec![Employee {
                id: "emp-001".to_string(),
                first_name: "James".to_string(),
                last_name: "Smith".to_string(),
            }],
            selected_employee: None,
            is_employees_loading: false,
            is_at_end_of_data: at_end,
            is_view_more_visible: view_more,
        }
    }

    fn txn(id: &str, cents: i64) -> Transaction {
        Transaction {
            id: id.to_string(),
            amount: Decimal::new(cents, 2),
            merchant: "Acme Supplies".to_string(),
            date: "2024-01-08".to_string(),
            employee_id: "emp-001".to_string(),
            approved: true,
        }
    }

    #[test]
    fn test_render_empty_list() {
        let html = render_transactions_fragment(&snapshot(Vec::new(), false, true));
        assert!(html.contains("No transactions to show"));
        assert!(!html.contains("View more"));
    }

    #[test]
    fn test_render_rows_with_formatted_amount() {
        let html = render_transactions_fragment(&snapshot(vec![txn("txn-001", 15250)], false, true));
        assert!(html.contains("Acme Supplies"));
        assert!(html.contains("$152.50"));
        // Employee ids are resolved to display names
        assert!(html.contains("James Smith"));
        assert!(html.contains("View more"));
    }

    #[test]
    fn test_render_end_of_data_hides_view_more() {
        let html = render_transactions_fragment(&snapshot(vec![txn("txn-001", 15250)], true, false));
        assert!(html.contains("No more transactions"));
        assert!(!html.contains("View more"));
    }

    #[test]
    fn test_render_escapes_merchant() {
        let mut hostile = txn("txn-001", 1000);
        hostile.merchant = "<script>alert(1)</script>".to_string();
        let html = render_transactions_fragment(&snapshot(vec![hostile], false, false));
        assert!(!html.contains("<script>"));
    }
}
