//! Plain-text rendering of command results.

use chrono::{DateTime, Utc};
use models::{Employee, Session};
use service::validation::ValidationErrors;

pub const EMPTY_LIST: &str = "No employees registered";

const HEADERS: [&str; 3] = ["Name", "Email", "Created"];

/// Long date (`March 5, 2026`) on the calendar day of the sender's offset;
/// the raw value when it is not RFC 3339.
pub fn created_date(employee: &Employee) -> String {
    employee
        .created_at_time()
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|_| employee.created_at.clone())
}

/// Aligned table with a header row and a total line.
pub fn employee_table(employees: &[Employee]) -> String {
    if employees.is_empty() {
        return format!("{EMPTY_LIST}\n");
    }

    let rows: Vec<[String; 3]> = employees
        .iter()
        .map(|e| [e.name.clone(), e.email.clone(), created_date(e)])
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    push_row(&mut out, &widths.map(|w| "-".repeat(w)), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out.push_str(&format!("\nTotal: {}\n", rows.len()));
    out
}

fn push_row(out: &mut String, cells: &[String; 3], widths: &[usize; 3]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(c, &w)| format!("{c:<w$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// One `field: message` line per invalid field.
pub fn field_errors(errors: &ValidationErrors) -> String {
    errors.iter().map(|(field, e)| format!("{field}: {}\n", e.message)).collect()
}

pub fn session_status(session: Option<&Session>) -> String {
    match session {
        Some(s) => {
            let until = DateTime::<Utc>::from_timestamp(s.expires_at, 0)
                .map(|d| d.format("%Y-%m-%d %H:%M:%S UTC").to_string())
                .unwrap_or_else(|| s.expires_at.to_string());
            if s.user_id.is_empty() {
                format!("Signed in (session valid until {until})\n")
            } else {
                format!("Signed in as {} (session valid until {until})\n", s.user_id)
            }
        }
        None => "Not signed in\n".to_string(),
    }
}
