//! Budget display formatting

use tabled::Tabled;

use crate::config::Settings;
use crate::services::{BudgetOverview, BudgetProgress, BudgetStatus};

use super::{progress_bar, render_table};

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Status")]
    status: String,
}

fn status_label(status: BudgetStatus) -> &'static str {
    match status {
        BudgetStatus::Ok => "OK",
        BudgetStatus::Warning => "! near limit",
        BudgetStatus::Exceeded => "!! exceeded",
    }
}

pub fn format_budget_list(budgets: &[BudgetProgress<'_>], settings: &Settings) -> String {
    let rows = budgets
        .iter()
        .map(|p| BudgetRow {
            id: p.budget.id.to_string(),
            category: p.budget.category.clone(),
            spent: settings.format_money(p.spent),
            limit: settings.format_money(p.budget.limit),
            remaining: settings.format_money(p.remaining),
            progress: format!("{} {:>3.0}%", progress_bar(p.percentage, 10), p.percentage),
            status: status_label(p.status).to_string(),
        })
        .collect();
    render_table(rows, "No budgets defined.")
}

/// Overview totals followed by the budget table
pub fn format_budget_overview(
    overview: &BudgetOverview<'_>,
    without_budget: &[&str],
    settings: &Settings,
) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Total limit: {}   Spent: {}   Available: {}\n\n",
        settings.format_money(overview.total_limit),
        settings.format_money(overview.total_spent),
        settings.format_money(overview.available),
    ));
    output.push_str(&format_budget_list(&overview.budgets, settings));

    if !without_budget.is_empty() {
        output.push_str(&format!("\nWithout budget: {}\n", without_budget.join(", ")));
    }

    output
}
