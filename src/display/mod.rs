//! Display formatting for terminal output
//!
//! Lists render as tables through `tabled`; single records and summaries are
//! plain aligned text.

pub mod budget;
pub mod goal;
pub mod summary;
pub mod transaction;
pub mod trip;

pub use budget::{format_budget_list, format_budget_overview};
pub use goal::{format_goal_details, format_goal_list};
pub use summary::format_dashboard;
pub use transaction::{format_transaction_details, format_transaction_list};
pub use trip::{format_trip_details, format_trip_list};

use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Render rows as a table, or `empty` when there are none
pub(crate) fn render_table<T: Tabled>(rows: Vec<T>, empty: &str) -> String {
    if rows.is_empty() {
        return format!("{}\n", empty);
    }
    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Truncate to `max_chars` characters, marking the cut with "..."
pub(crate) fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Text progress bar, `width` cells wide, clamped to 0..=100 percent
pub(crate) fn progress_bar(percentage: f64, width: usize) -> String {
    let clamped = percentage.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
