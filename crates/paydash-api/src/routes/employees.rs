//! Employee directory routes - JSON API and the selector fragment
//!
//! Endpoints:
//! - api_employees: employee directory (JSON, `null` until resolved)
//! - htmx_employee_select: selector fragment (HTML)

use crate::AppState;
use paydash_core::{empty_employee, Employee};
use paydash_utils::sanitize_html;

/// Get the employee directory (JSON API)
pub async fn api_employees(state: axum::extract::State<AppState>) -> String {
    let dashboard = state.dashboard.read().await;
    serde_json::to_string(&dashboard.employees()).unwrap_or_default()
}

/// HTMX: employee selector fragment
pub async fn htmx_employee_select(state: axum::extract::State<AppState>) -> String {
    let dashboard = state.dashboard.read().await;
    render_employee_select(
        dashboard.employees(),
        dashboard.selected_employee(),
        dashboard.is_employees_loading(),
    )
}

/// Render the employee selector: the sentinel followed by the directory,
/// each mapped to a `{value, label}` option pair
pub fn render_employee_select(
    employees: Option<&[Employee]>,
    selected: Option<&str>,
    is_loading: bool,
) -> String {
    let employees = match employees {
        Some(employees) => employees,
        None => {
            let label = if is_loading {
                "Loading employees"
            } else {
                "Employees not loaded"
            };
            return format!(
                r#"<label class='block text-sm font-medium text-gray-700 mb-1'>Filter by employee</label>
<select disabled class='px-4 py-2 border rounded-lg w-64 bg-gray-100 text-gray-400'>
    <option>{}</option>
</select>"#,
                label
            );
        }
    };

    let sentinel = empty_employee();
    let selected_id = selected.unwrap_or(&sentinel.id);
    let mut options = String::new();
    for employee in std::iter::once(&sentinel).chain(employees.iter()) {
        let marker = if employee.id == selected_id {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            "\n    <option value='{}'{}>{}</option>",
            employee.id,
            marker,
            sanitize_html(&employee.full_name())
        ));
    }

    format!(
        r#"<label class='block text-sm font-medium text-gray-700 mb-1' for='employee-filter'>Filter by employee</label>
<select id='employee-filter' name='employee' hx-post='/select' hx-target='#transactions-content' hx-trigger='change'
    class='px-4 py-2 border rounded-lg w-64'>{}
</select>"#,
        options
    )
}

// ==================== Tests ====================
