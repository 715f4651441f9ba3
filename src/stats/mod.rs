//! Stats module - headline metric computation

mod summary;

pub use summary::{summarize, Summary};
