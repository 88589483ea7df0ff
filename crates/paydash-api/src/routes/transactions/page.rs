//! Dashboard page rendering - Full page endpoint
//!
//! page_dashboard: the single dashboard page. The employee selector and the
//! transaction list load themselves as HTMX fragments, so this page only
//! lays out the containers and a stats strip.

use crate::AppState;
use paydash_utils::format_number;

/// Dashboard page
pub async fn page_dashboard(
    state: axum::extract::State<AppState>,
) -> axum::response::Html<String> {
    let dashboard = state.dashboard.read().await;
    let shown = dashboard.transactions().len();
    let directory_size = dashboard.employees().map(<[_]>::len).unwrap_or(0);
    let page_size = state.config.pagination.transactions_per_page;

    let inner_content = format!(
        r#"<main class='max-w-3xl mx-auto px-4 py-8'>
        <h1 class='text-3xl font-bold mb-2'>Paydash</h1>
        <p class='text-gray-600 mb-6'>Browse company transactions, or pick an employee to see only theirs.
            Re-selecting "All Employees" reloads the list from the first page.</p>

        <div class='grid grid-cols-3 gap-3 mb-6'>
            <div class='bg-indigo-50 p-3 rounded-lg border border-indigo-100'><p class='text-xs text-indigo-600'>Transactions shown</p><p class='text-xl font-bold'>{}</p></div>
            <div class='bg-purple-50 p-3 rounded-lg border border-purple-100'><p class='text-xs text-purple-600'>Employees</p><p class='text-xl font-bold'>{}</p></div>
            <div class='bg-green-50 p-3 rounded-lg border border-green-100'><p class='text-xs text-green-600'>Per page</p><p class='text-xl font-bold'>{}</p></div>
        </div>

        <div id='employee-select' hx-get='/employees/select' hx-trigger='load' class='mb-6'>
            <p class='text-gray-500'>Loading employees...</p>
        </div>

        <div id='transactions-content' hx-get='/transactions/list' hx-trigger='load'>
            <p class='text-gray-500 text-center'>Loading transactions...</p>
        </div>
    </main>"#,
        format_number(shown),
        format_number(directory_size),
        format_number(page_size)
    );

    axum::response::Html(crate::base_html("Transactions", &inner_content))
}
