//! Daily Aggregator Module
//! Collapses the filtered view into per-date sums for the trend chart.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::data::VaccinationRecord;

/// Summed `total_vaccinations` for one date of the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: u64,
}

/// Group the view by date and sum `total_vaccinations` over records where
/// the value is present.
///
/// Every date occurring in the view appears exactly once, in ascending
/// order. A date whose records all lack a value still contributes a 0 entry
/// so the chart keeps that point in its x-domain.
pub fn daily_totals(view: &[&VaccinationRecord]) -> Vec<DailyTotal> {
    let mut by_date: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for record in view {
        let total = by_date.entry(record.date).or_insert(0);
        if let Some(value) = record.total_vaccinations {
            *total += value;
        }
    }

    by_date
        .into_iter()
        .map(|(date, total)| DailyTotal { date, total })
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

    fn date(s: &str) -> NaiveDate {
        s.parse().expect("test date")
    }

    #[test]
    fn sums_present_values_per_date() {
        let records = vec![
            record("Indonesia", "2021-01-02", Some(200)),
            record("Malaysia", "2021-01-02", Some(300)),
            record("Indonesia", "2021-01-01", Some(100)),
        ];
        let view: Vec<&VaccinationRecord> = records.iter().collect();

        assert_eq!(
            daily_totals(&view),
            vec![
                DailyTotal { date: date("2021-01-01"), total: 100 },
                DailyTotal { date: date("2021-01-02"), total: 500 },
            ]
        );
    }

    #[test]
    fn absent_values_do_not_contribute() {
        let records = vec![
            record("Indonesia", "2021-01-01", Some(100)),
            record("Malaysia", "2021-01-01", None),
        ];
        let view: Vec<&VaccinationRecord> = records.iter().collect();

        assert_eq!(
            daily_totals(&view),
            vec![DailyTotal { date: date("2021-01-01"), total: 100 }]
        );
    }

    #[test]
    fn a_date_with_no_present_value_is_kept_at_zero() {
        let records = vec![
            record("Indonesia", "2021-01-01", Some(100)),
            record("Indonesia", "2021-01-02", None),
            record("Malaysia", "2021-01-02", None),
        ];
        let view: Vec<&VaccinationRecord> = records.iter().collect();

        assert_eq!(
            daily_totals(&view),
            vec![
                DailyTotal { date: date("2021-01-01"), total: 100 },
                DailyTotal { date: date("2021-01-02"), total: 0 },
            ]
        );
    }

    #[test]
    fn empty_view_aggregates_to_nothing() {
        assert!(daily_totals(&[]).is_empty());
    }
}
