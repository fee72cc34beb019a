//! Dashboard display

use crate::config::Settings;
use crate::services::DashboardSummary;

use super::{progress_bar, transaction::format_transaction_list};

pub fn format_dashboard(summary: &DashboardSummary<'_>, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Balance:  {}\n", settings.format_money(summary.balance)));
    output.push_str(&format!("Income:   {}\n", settings.format_money(summary.total_income)));
    output.push_str(&format!("Expenses: {}\n", settings.format_money(summary.total_expenses)));

    if !summary.top_categories.is_empty() {
        output.push_str("\nTop expense categories:\n");
        for share in &summary.top_categories {
            output.push_str(&format!(
                "  {:<16} {:>14} {:>5.1}%\n",
                share.category,
                settings.format_money(share.amount),
                share.percentage
            ));
        }
    }

    output.push_str("\nRecent transactions:\n");
    output.push_str(&format_transaction_list(&summary.recent_transactions, settings));

    if !summary.goals.is_empty() {
        output.push_str("\nGoals:\n");
        for p in &summary.goals {
            output.push_str(&format!(
                "  {:<20} {} {:>3.0}%\n",
                p.goal.title,
                progress_bar(p.percentage, 10),
                p.percentage.min(100.0)
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FinanceSnapshot, Money, NewTransaction, Transaction, TransactionType};
    use crate::services::SummaryService;
    use chrono::NaiveDate;

    #[test]
    fn test_dashboard_output() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let mut s = FinanceSnapshot::empty();
        s.transactions = vec![
            Transaction::from_new(NewTransaction::new(
                "Salary",
                Money::from_units(5000),
                TransactionType::Income,
                "Salário",
                today,
            )),
            Transaction::from_new(NewTransaction::new(
                "Rent",
                Money::from_units(1500),
                TransactionType::Expense,
                "Moradia",
                today,
            )),
        ];

        let summary = SummaryService::new(&s).dashboard(today, 5);
        let output = format_dashboard(&summary, &Settings::default());

        assert!(output.contains("Balance:  R$ 3500.00"));
        assert!(output.contains("Moradia"));
        assert!(output.contains("100.0%"));
        assert!(!output.contains("Goals:"));
    }
}
