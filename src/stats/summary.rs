//! Summary Extractor Module
//! Headline KPI scalars computed from the filtered view.

use std::collections::HashSet;

use crate::data::VaccinationRecord;

/// Headline metrics for the current filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// Number of distinct countries in the view.
    pub countries: usize,
    /// Largest reported cumulative vaccination count; 0 when none is present.
    pub max_total_vaccinations: u64,
    /// Largest reported fully-vaccinated count; 0 when none is present.
    pub max_people_fully_vaccinated: u64,
}

/// Compute the headline metrics.
///
/// Maxima range over present values only and default to 0 so an absent value
/// never leaks into a displayed KPI. An empty view yields all zeroes; there
/// is no failure mode.
pub fn summarize(view: &[&VaccinationRecord]) -> Summary {
    let countries = view
        .iter()
        .map(|record| record.country.as_str())
        .collect::<HashSet<_>>()
        .len();

    Summary {
        countries,
        max_total_vaccinations: view
            .iter()
            .filter_map(|record| record.total_vaccinations)
            .max()
            .unwrap_or(0),
        max_people_fully_vaccinated: view
            .iter()
            .filter_map(|record| record.people_fully_vaccinated)
            .max()
            .unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{daily_totals, filter, DailyTotal, Dataset, FilterCriteria};
    use chrono::NaiveDate;

    fn record(country: &str, date: &str, total: Option<u64>, fully: Option<u64>) -> VaccinationRecord {
        VaccinationRecord {
            country: country.to_string(),
            iso_code: None,
            date: date.parse().expect("test date"),
            total_vaccinations: total,
            people_vaccinated: None,
            people_fully_vaccinated: fully,
            daily_vaccinations: None,
            vaccines: None,
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().expect("test date")
    }

    /// The three-record fixture shared by the pipeline tests.
    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            record("Indonesia", "2021-01-01", Some(100), Some(10)),
            record("Indonesia", "2021-01-02", Some(200), Some(50)),
            record("Malaysia", "2021-01-02", Some(300), Some(80)),
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
    fn empty_view_summarizes_to_zeroes() {
        assert_eq!(summarize(&[]), Summary::default());
    }

    #[test]
    fn maxima_ignore_absent_values() {
        let records = vec![
            record("Indonesia", "2021-01-01", None, None),
            record("Indonesia", "2021-01-02", Some(200), None),
        ];
        let view: Vec<&VaccinationRecord> = records.iter().collect();

        let summary = summarize(&view);
        assert_eq!(summary.countries, 1);
        assert_eq!(summary.max_total_vaccinations, 200);
        // No record carries the metric, so the KPI falls back to 0.
        assert_eq!(summary.max_people_fully_vaccinated, 0);
    }

    #[test]
    fn counts_distinct_countries() {
        let records = vec![
            record("Indonesia", "2021-01-01", None, None),
            record("Indonesia", "2021-01-02", None, None),
            record("Malaysia", "2021-01-02", None, None),
        ];
        let view: Vec<&VaccinationRecord> = records.iter().collect();
        assert_eq!(summarize(&view).countries, 2);
    }

    #[test]
    fn single_country_pipeline_end_to_end() {
        let dataset = dataset();
        let view = filter(&dataset, &criteria(&["Indonesia"], "2021-01-01", "2021-01-02"));

        assert_eq!(view.len(), 2);
        assert_eq!(
            daily_totals(&view),
            vec![
                DailyTotal { date: date("2021-01-01"), total: 100 },
                DailyTotal { date: date("2021-01-02"), total: 200 },
            ]
        );
        assert_eq!(
            summarize(&view),
            Summary {
                countries: 1,
                max_total_vaccinations: 200,
                max_people_fully_vaccinated: 50,
            }
        );
    }

    #[test]
    fn all_countries_pipeline_end_to_end() {
        let dataset = dataset();
        let view = filter(&dataset, &criteria(&[], "2021-01-01", "2021-01-02"));

        assert_eq!(view.len(), 3);
        assert_eq!(
            daily_totals(&view),
            vec![
                DailyTotal { date: date("2021-01-01"), total: 100 },
                DailyTotal { date: date("2021-01-02"), total: 500 },
            ]
        );
        assert_eq!(
            summarize(&view),
            Summary {
                countries: 2,
                max_total_vaccinations: 300,
                max_people_fully_vaccinated: 80,
            }
        );
    }
}
