//! Trip service
//!
//! Trip figures come from the trip's own expense list, which can drift from
//! the global transaction list once either side is edited.

use serde::Serialize;

use crate::error::FinanceResult;
use crate::models::{FinanceSnapshot, Money, Trip};

use super::resolve_by_id;

#[derive(Debug, Clone, Serialize)]
pub struct TripProgress<'a> {
    pub trip: &'a Trip,
    pub spent: Money,
    /// Spent as a percentage of the trip budget; may exceed 100
    pub percentage: f64,
    pub remaining: Money,
    /// Inclusive trip length
    pub days: i64,
}

impl<'a> TripProgress<'a> {
    pub fn compute(trip: &'a Trip) -> Self {
        let spent = trip.total_spent();
        Self {
            trip,
            spent,
            percentage: spent.percent_of(trip.budget),
            remaining: trip.budget - spent,
            days: trip.duration_days(),
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent > self.trip.budget
    }
}

/// Service for trip queries
pub struct TripService<'a> {
    snapshot: &'a FinanceSnapshot,
}

impl<'a> TripService<'a> {
    pub fn new(snapshot: &'a FinanceSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn progress_all(&self) -> Vec<TripProgress<'a>> {
        self.snapshot.trips.iter().map(TripProgress::compute).collect()
    }

    /// Resolve an id prefix or an exact (case-insensitive) destination
    pub fn find(&self, identifier: &str) -> FinanceResult<&'a Trip> {
        let named: Vec<&Trip> = self
            .snapshot
            .trips
            .iter()
            .filter(|t| t.destination.eq_ignore_ascii_case(identifier.trim()))
            .collect();
        if let [only] = named.as_slice() {
            return Ok(*only);
        }
        resolve_by_id(&self.snapshot.trips, identifier, |t| t.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinanceError;
    use crate::models::{NewTrip, TripExpense};
    use chrono::NaiveDate;

    fn trip() -> Trip {
        let day = |d| NaiveDate::from_ymd_opt(2024, 7, d).unwrap();
        let mut trip = Trip::from_new(NewTrip::new(
            "Lisboa",
            Money::from_units(1000),
            day(1),
            day(10),
        ));
        for units in [700, 450] {
            let expense = TripExpense::new("x", Money::from_units(units), "Viagem", day(2));
            trip.expenses.push(expense.into_transaction(trip.id));
        }
        trip
    }

    #[test]
    fn test_progress_over_budget() {
        let t = trip();
        let p = TripProgress::compute(&t);
        assert_eq!(p.spent, Money::from_units(1150));
        assert!((p.percentage - 115.0).abs() < 1e-9);
        assert_eq!(p.remaining, Money::from_units(-150));
        assert_eq!(p.days, 10);
        assert!(p.is_over_budget());
    }

    #[test]
    fn test_single_day_trip() {
        let day = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let t = Trip::from_new(NewTrip::new("Santos", Money::from_units(100), day, day));
        let p = TripProgress::compute(&t);
        assert_eq!(p.days, 1);
        assert_eq!(p.percentage, 0.0);
    }

    #[test]
    fn test_find_ambiguous_destination_falls_back_to_id() {
        let mut s = FinanceSnapshot::empty();
        s.trips = vec![trip(), trip()];
        let service = TripService::new(&s);

        assert!(matches!(
            service.find("Lisboa"),
            Err(FinanceError::NotFound { .. })
        ));
        let id = s.trips[1].id.to_string();
        assert_eq!(service.find(&id).unwrap().id, s.trips[1].id);
    }
}
