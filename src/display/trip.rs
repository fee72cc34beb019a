//! Trip display formatting

use tabled::Tabled;

use crate::config::Settings;
use crate::services::TripProgress;

use super::{progress_bar, render_table, truncate};

#[derive(Tabled)]
struct TripRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Destination")]
    destination: String,
    #[tabled(rename = "Dates")]
    dates: String,
    #[tabled(rename = "Days")]
    days: i64,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Used")]
    used: String,
}

pub fn format_trip_list(trips: &[TripProgress<'_>], settings: &Settings) -> String {
    let rows = trips
        .iter()
        .map(|p| TripRow {
            id: p.trip.id.to_string(),
            destination: truncate(&p.trip.destination, 24),
            dates: format!(
                "{} - {}",
                settings.format_date(p.trip.start_date),
                settings.format_date(p.trip.end_date)
            ),
            days: p.days,
            spent: settings.format_money(p.spent),
            budget: settings.format_money(p.trip.budget),
            used: format!("{:.0}%", p.percentage),
        })
        .collect();
    render_table(rows, "No trips planned.")
}

/// Trip header, budget usage and the trip's own expense list
pub fn format_trip_details(progress: &TripProgress<'_>, settings: &Settings) -> String {
    let trip = progress.trip;
    let mut output = String::new();

    output.push_str(&format!("Trip:      {} ({})\n", trip.destination, trip.id));
    output.push_str(&format!(
        "Dates:     {} to {} ({} days)\n",
        settings.format_date(trip.start_date),
        settings.format_date(trip.end_date),
        progress.days
    ));
    output.push_str(&format!(
        "Spent:     {} of {} {} {:.0}%\n",
        settings.format_money(progress.spent),
        settings.format_money(trip.budget),
        progress_bar(progress.percentage, 20),
        progress.percentage
    ));
    if progress.is_over_budget() {
        output.push_str(&format!(
            "Over budget by {}\n",
            settings.format_money(-progress.remaining)
        ));
    } else {
        output.push_str(&format!(
            "Remaining: {}\n",
            settings.format_money(progress.remaining)
        ));
    }

    output.push('\n');
    let expenses: Vec<_> = trip.expenses.iter().collect();
    output.push_str(&super::transaction::format_transaction_list(&expenses, settings));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NewTrip, Trip, TripExpense};
    use chrono::NaiveDate;

    #[test]
    fn test_details_over_budget() {
        let day = |d| NaiveDate::from_ymd_opt(2024, 7, d).unwrap();
        let mut trip = Trip::from_new(NewTrip::new("Lisboa", Money::from_units(100), day(1), day(3)));
        let expense = TripExpense::new("Hotel", Money::from_units(130), "Viagem", day(1));
        trip.expenses.push(expense.into_transaction(trip.id));

        let output = format_trip_details(&TripProgress::compute(&trip), &Settings::default());
        assert!(output.contains("(3 days)"));
        assert!(output.contains("Over budget by R$ 30.00"));
        assert!(output.contains("Hotel"));
    }
}
