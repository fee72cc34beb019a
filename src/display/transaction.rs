//! Transaction display formatting

use tabled::Tabled;

use crate::config::Settings;
use crate::models::Transaction;

use super::{render_table, truncate};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

fn signed_amount(txn: &Transaction, settings: &Settings) -> String {
    let sign = if txn.is_expense() { "-" } else { "+" };
    format!("{}{}", sign, settings.format_money(txn.amount))
}

/// Format transactions as a table, in the order given
pub fn format_transaction_list(transactions: &[&Transaction], settings: &Settings) -> String {
    let rows = transactions
        .iter()
        .map(|txn| {
            let mut description = truncate(&txn.description, 30);
            if txn.is_trip_expense() {
                description.push_str(" ✈");
            }
            TransactionRow {
                id: txn.id.to_string(),
                date: settings.format_date(txn.date),
                description,
                category: txn.category.clone(),
                amount: signed_amount(txn, settings),
            }
        })
        .collect();
    render_table(rows, "No transactions found.")
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", settings.format_date(txn.date)));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Amount:      {}\n", signed_amount(txn, settings)));
    output.push_str(&format!("Category:    {}\n", txn.category));

    if let Some(tag) = &txn.tag {
        output.push_str(&format!("Tag:         {}\n", tag));
    }
    if let Some(trip_id) = txn.trip_id {
        output.push_str(&format!("Trip:        {}\n", trip_id));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NewTransaction, TransactionType};
    use chrono::NaiveDate;

    fn txn(kind: TransactionType) -> Transaction {
        Transaction::from_new(
            NewTransaction::new(
                "Mercado",
                Money::from_cents(12_345),
                kind,
                "Alimentação",
                NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
            )
            .with_tag("weekly"),
        )
    }

    #[test]
    fn test_list_contains_signed_amounts() {
        let settings = Settings::default();
        let expense = txn(TransactionType::Expense);
        let income = txn(TransactionType::Income);
        let output = format_transaction_list(&[&expense, &income], &settings);

        assert!(output.contains("-R$ 123.45"));
        assert!(output.contains("+R$ 123.45"));
        assert!(output.contains(&expense.id.to_string()));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(
            format_transaction_list(&[], &Settings::default()),
            "No transactions found.\n"
        );
    }

    #[test]
    fn test_details() {
        let t = txn(TransactionType::Expense);
        let output = format_transaction_details(&t, &Settings::default());
        assert!(output.contains("Tag:         weekly"));
        assert!(output.contains("Type:        Expense"));
        assert!(!output.contains("Trip:"));
    }
}
