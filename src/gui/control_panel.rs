//! Filter Panel Widget
//! Left side panel with the country multiselect and date-range controls.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use egui::{Color32, RichText, ScrollArea};

use crate::data::{Dataset, FilterCriteria};

/// Pre-selected country on startup, when present in the dataset.
const DEFAULT_COUNTRY: &str = "Indonesia";

/// Left side panel holding the interactive filter state.
pub struct FilterPanel {
    countries: Vec<String>,
    selected: BTreeSet<String>,
    search: String,
    start: NaiveDate,
    end: NaiveDate,
    start_text: String,
    end_text: String,
}

impl FilterPanel {
    /// Seed the panel from the dataset: full country list, date bounds as
    /// the initial range.
    pub fn new(dataset: &Dataset) -> Self {
        let countries = dataset.countries();

        let mut selected = BTreeSet::new();
        if countries.iter().any(|c| c == DEFAULT_COUNTRY) {
            selected.insert(DEFAULT_COUNTRY.to_string());
        }

        let (start, end) = dataset
            .date_bounds()
            .unwrap_or((NaiveDate::default(), NaiveDate::default()));

        Self {
            countries,
            selected,
            search: String::new(),
            start,
            end,
            start_text: start.format("%Y-%m-%d").to_string(),
            end_text: end.format("%Y-%m-%d").to_string(),
        }
    }

    /// Snapshot of the current criteria for the pipeline.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            countries: self.selected.clone(),
            start: self.start,
            end: self.end,
        }
    }

    /// Draw the panel. Returns true when the criteria changed this frame.
    pub fn show(&mut self, ui: &mut egui::Ui) -> bool {
        let before = self.criteria();

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(RichText::new("🔍 Filters").size(20.0).strong());
            ui.label(
                RichText::new("Explore the vaccination data")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        self.date_section(ui);

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        self.country_section(ui);

        before != self.criteria()
    }

    fn date_section(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("📅 Date Range").size(14.0).strong());
        ui.add_space(5.0);

        let label_width = 45.0;
        let mut invalid = false;

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("From:"));
            ui.text_edit_singleline(&mut self.start_text);
        });
        match self.start_text.trim().parse::<NaiveDate>() {
            Ok(date) => self.start = date,
            Err(_) => invalid = true,
        }

        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("To:"));
            ui.text_edit_singleline(&mut self.end_text);
        });
        match self.end_text.trim().parse::<NaiveDate>() {
            Ok(date) => self.end = date,
            Err(_) => invalid = true,
        }

        if invalid {
            ui.label(
                RichText::new("Dates must be YYYY-MM-DD; the last valid value stays active")
                    .size(11.0)
                    .color(Color32::from_rgb(220, 53, 69)),
            );
        }
    }

    fn country_section(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("🌍 Countries").size(14.0).strong());
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.label("Search:");
            ui.text_edit_singleline(&mut self.search);
        });
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(5.0)
            .show(ui, |ui| {
                ScrollArea::vertical().max_height(260.0).show(ui, |ui| {
                    let query = self.search.trim().to_lowercase();
                    for country in &self.countries {
                        if !query.is_empty() && !country.to_lowercase().contains(&query) {
                            continue;
                        }
                        let mut checked = self.selected.contains(country);
                        if ui.checkbox(&mut checked, country).changed() {
                            if checked {
                                self.selected.insert(country.clone());
                            } else {
                                self.selected.remove(country);
                            }
                        }
                    }
                });
            });

        ui.add_space(5.0);
        ui.horizontal(|ui| {
            if ui.small_button("Select All").clicked() {
                self.selected = self.countries.iter().cloned().collect();
            }
            if ui.small_button("Clear All").clicked() {
                self.selected.clear();
            }
        });

        let status = if self.selected.is_empty() {
            "No selection: every country is shown".to_string()
        } else {
            format!(
                "{} of {} countries selected",
                self.selected.len(),
                self.countries.len()
            )
        };
        ui.label(RichText::new(status).size(11.0).color(Color32::GRAY));
    }
}
