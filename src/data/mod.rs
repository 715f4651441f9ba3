//! Data module - dataset loading, filtering and aggregation

mod aggregate;
mod filter;
mod loader;

pub use aggregate::{daily_totals, DailyTotal};
pub use filter::{filter, FilterCriteria};
pub use loader::{Dataset, LoaderError, VaccinationRecord};
