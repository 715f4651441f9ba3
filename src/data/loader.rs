//! Dataset Loader Module
//! Reads the vaccination CSV once with Polars and materializes typed records.

use std::path::Path;
use std::sync::OnceLock;

use chrono::NaiveDate;
use polars::prelude::*;
use thiserror::Error;

/// Textual date format used by the source file.
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("failed to read CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("dataset is missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("line {line}: invalid date '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { line: usize, value: String },
    #[error("line {line}: missing country")]
    MissingCountry { line: usize },
}

/// One row of the vaccination dataset.
///
/// Numeric fields are cumulative counts; an empty field in the source file is
/// absent (`None`), never zero. The zero default is applied only at the
/// aggregate/summary boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaccinationRecord {
    pub country: String,
    pub iso_code: Option<String>,
    pub date: NaiveDate,
    pub total_vaccinations: Option<u64>,
    pub people_vaccinated: Option<u64>,
    pub people_fully_vaccinated: Option<u64>,
    pub daily_vaccinations: Option<u64>,
    pub vaccines: Option<String>,
}

/// The dataset in file order, loaded once and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset {
    records: Vec<VaccinationRecord>,
}

static CACHE: OnceLock<Dataset> = OnceLock::new();

impl Dataset {
    /// Load a vaccination CSV.
    ///
    /// `country` and `date` columns are required and every row must carry
    /// both; the first malformed or missing value aborts the whole load. A
    /// partial dataset would silently skew the downstream summaries, so
    /// there is no skip-and-continue path. The numeric and passthrough
    /// columns are optional and degrade to all-`None` when absent.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoaderError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let df = LazyCsvReader::new(&path_str)
            .with_infer_schema_length(Some(10_000))
            .finish()?
            .collect()?;

        Self::from_dataframe(&df)
    }

    /// Process-wide memoized load.
    ///
    /// The first successful load is published once and every later call
    /// returns the same instance without touching the file again. Concurrent
    /// first calls may each read the file, but exactly one result wins the
    /// cache; redundant reads are harmless because the source file is static.
    /// A failed load leaves the cache empty.
    pub fn load_cached(path: impl AsRef<Path>) -> Result<&'static Dataset, LoaderError> {
        if let Some(dataset) = CACHE.get() {
            return Ok(dataset);
        }
        let dataset = Self::load(path)?;
        Ok(CACHE.get_or_init(|| dataset))
    }

    fn from_dataframe(df: &DataFrame) -> Result<Self, LoaderError> {
        let countries = required_strings(df, "country")?;
        let dates = required_strings(df, "date")?;
        let iso_codes = optional_strings(df, "iso_code");
        let totals = optional_counts(df, "total_vaccinations")?;
        let vaccinated = optional_counts(df, "people_vaccinated")?;
        let fully_vaccinated = optional_counts(df, "people_fully_vaccinated")?;
        let daily = optional_counts(df, "daily_vaccinations")?;
        let vaccines = optional_strings(df, "vaccines");

        let mut records = Vec::with_capacity(df.height());
        for row in 0..df.height() {
            // 1-based CSV line number, counting the header line.
            let line = row + 2;

            let country = countries
                .get(row)
                .filter(|c| !c.is_empty())
                .ok_or(LoaderError::MissingCountry { line })?;

            let raw_date = dates.get(row).unwrap_or_default();
            let date = NaiveDate::parse_from_str(raw_date, DATE_FORMAT).map_err(|_| {
                LoaderError::InvalidDate {
                    line,
                    value: raw_date.to_string(),
                }
            })?;

            records.push(VaccinationRecord {
                country: country.to_string(),
                iso_code: iso_codes[row].clone(),
                date,
                total_vaccinations: totals[row],
                people_vaccinated: vaccinated[row],
                people_fully_vaccinated: fully_vaccinated[row],
                daily_vaccinations: daily[row],
                vaccines: vaccines[row].clone(),
            });
        }

        Ok(Self { records })
    }

    /// Build a dataset directly from records (test fixtures).
    #[cfg(test)]
    pub(crate) fn from_records(records: Vec<VaccinationRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[VaccinationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct country names, sorted. Populates the country picker.
    pub fn countries(&self) -> Vec<String> {
        let mut names: Vec<String> = self.records.iter().map(|r| r.country.clone()).collect();
        names.sort();
        names.dedup();
        names
    }

    /// Earliest and latest record dates. Seeds the date-range widget.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.records.iter().map(|r| r.date).min()?;
        let max = self.records.iter().map(|r| r.date).max()?;
        Some((min, max))
    }
}

fn required_strings<'a>(
    df: &'a DataFrame,
    name: &'static str,
) -> Result<&'a StringChunked, LoaderError> {
    let column = df
        .column(name)
        .map_err(|_| LoaderError::MissingColumn(name))?;
    Ok(column.as_materialized_series().str()?)
}

/// A passthrough text column; absent or non-text columns become all-`None`.
fn optional_strings(df: &DataFrame, name: &str) -> Vec<Option<String>> {
    let Ok(column) = df.column(name) else {
        return vec![None; df.height()];
    };
    let Ok(values) = column.as_materialized_series().str() else {
        return vec![None; df.height()];
    };
    values.into_iter().map(|v| v.map(str::to_string)).collect()
}

/// A count column stored as floats in the source file (pandas artifact).
/// Values are truncated to whole counts; negative or non-finite readings are
/// treated as absent, as are empty fields.
fn optional_counts(df: &DataFrame, name: &str) -> Result<Vec<Option<u64>>, LoaderError> {
    let Ok(column) = df.column(name) else {
        return Ok(vec![None; df.height()]);
    };
    let as_f64 = column.cast(&DataType::Float64)?;
    let values = as_f64.f64()?;
    Ok(values
        .into_iter()
        .map(|v| v.filter(|x| x.is_finite() && *x >= 0.0).map(|x| x as u64))
        .collect())
}
