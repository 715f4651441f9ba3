//! Filter Engine Module
//! Country and date-range selection over the loaded dataset.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::data::{Dataset, VaccinationRecord};

/// The user's current selection.
///
/// An empty country set is the distinguished "no restriction" value; the date
/// interval is closed on both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub countries: BTreeSet<String>,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl FilterCriteria {
    /// True when `record` falls inside the selection.
    pub fn matches(&self, record: &VaccinationRecord) -> bool {
        (self.countries.is_empty() || self.countries.contains(&record.country))
            && record.date >= self.start
            && record.date <= self.end
    }
}

/// Produce the filtered view: the subsequence of dataset records matching
/// `criteria`, in dataset order.
///
/// Pure and stable: identical inputs give identical output and qualifying
/// records are never reordered. An inverted interval (`start > end`) matches
/// nothing — a range widget can legally pass through that state, so it must
/// yield an empty view rather than an error.
pub fn filter<'a>(dataset: &'a Dataset, criteria: &FilterCriteria) -> Vec<&'a VaccinationRecord> {
    dataset
        .records()
        .iter()
        .filter(|record| criteria.matches(record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(country: &str, date: &str, total: Option<u64>) -> VaccinationRecord {
        VaccinationRecord {
            country: country.to_string(),
            iso_code: None,
            date: date.parse().expect("test date"),
            total_vaccinations: total,
            people_vaccinated: None,
            people_fully_vaccinated: None,
            daily_vaccinations: None,
            vaccines: None,
        }
    }

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            record("Indonesia", "2021-01-01", Some(100)),
            record("Indonesia", "2021-01-02", Some(200)),
            record("Malaysia", "2021-01-02", Some(300)),
            record("Malaysia", "2021-01-05", None),
        ])
    }

    fn criteria(countries: &[&str], start: &str, end: &str) -> FilterCriteria {
        FilterCriteria {
            countries: countries.iter().map(|c| c.to_string()).collect(),
            start: start.parse().expect("test date"),
            end: end.parse().expect("test date"),
        }
    }

    #[test]
    fn selects_by_country_and_date_interval() {
        let dataset = dataset();
        let view = filter(&dataset, &criteria(&["Indonesia"], "2021-01-01", "2021-01-02"));
        assert_eq!(view.len(), 2);
        assert!(view.iter().all(|r| r.country == "Indonesia"));
    }

    #[test]
    fn empty_selection_means_every_country() {
        let dataset = dataset();
        let view = filter(&dataset, &criteria(&[], "2021-01-01", "2021-01-02"));
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn interval_bounds_are_inclusive() {
        let dataset = dataset();
        let view = filter(&dataset, &criteria(&[], "2021-01-02", "2021-01-05"));
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn inverted_interval_yields_the_empty_view() {
        let dataset = dataset();
        let view = filter(&dataset, &criteria(&[], "2021-01-05", "2021-01-01"));
        assert!(view.is_empty());
    }

    #[test]
    fn filtering_is_pure() {
        let dataset = dataset();
        let c = criteria(&["Malaysia"], "2021-01-01", "2021-01-05");
        assert_eq!(filter(&dataset, &c), filter(&dataset, &c));
    }

    #[test]
    fn view_is_a_stable_subsequence_of_the_dataset() {
        let dataset = dataset();
        let view = filter(&dataset, &criteria(&[], "2021-01-01", "2021-01-05"));

        // Every view record is a dataset record, and dataset order holds.
        let mut cursor = dataset.records().iter();
        for selected in &view {
            assert!(cursor.any(|r| std::ptr::eq(r, *selected)));
        }
    }

    #[test]
    fn unknown_country_matches_nothing() {
        let dataset = dataset();
        let view = filter(&dataset, &criteria(&["Norway"], "2021-01-01", "2021-01-05"));
        assert!(view.is_empty());
    }
}
