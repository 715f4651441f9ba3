//! Vaxboard Main Application
//! Main window wiring the filter panel to the recomputed dashboard views.

use egui::SidePanel;

use crate::data::{self, DailyTotal, Dataset, VaccinationRecord};
use crate::gui::{Dashboard, FilterPanel};
use crate::stats::{self, Summary};

/// Main application window.
///
/// Owns the immutable dataset reference and the derived views, which are
/// recomputed in one synchronous pass whenever the filter criteria change.
pub struct VaxboardApp {
    dataset: &'static Dataset,
    filter_panel: FilterPanel,

    // Derived views for the current criteria.
    totals: Vec<DailyTotal>,
    summary: Summary,
    table_rows: Vec<&'static VaccinationRecord>,
}

impl VaxboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, dataset: &'static Dataset) -> Self {
        let filter_panel = FilterPanel::new(dataset);
        let mut app = Self {
            dataset,
            filter_panel,
            totals: Vec::new(),
            summary: Summary::default(),
            table_rows: Vec::new(),
        };
        app.recompute();
        app
    }

    /// Re-run the pipeline for the current criteria: filter the dataset,
    /// then aggregate and summarize the view.
    fn recompute(&mut self) {
        let criteria = self.filter_panel.criteria();
        let view = data::filter(self.dataset, &criteria);
        self.totals = data::daily_totals(&view);
        self.summary = stats::summarize(&view);

        // Newest first is a display concern; the stable sort keeps dataset
        // order within a date.
        let mut rows = view;
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        self.table_rows = rows;

        log::debug!(
            "recomputed views: {} records, {} days, {} countries",
            self.table_rows.len(),
            self.totals.len(),
            self.summary.countries
        );
    }
}

impl eframe::App for VaxboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut changed = false;

        // Left panel - filter controls
        SidePanel::left("filter_panel")
            .min_width(280.0)
            .max_width(340.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    changed = self.filter_panel.show(ui);
                });
            });

        if changed {
            self.recompute();
        }

        // Central panel - dashboard
        egui::CentralPanel::default().show(ctx, |ui| {
            Dashboard::show(ui, &self.summary, &self.totals, &self.table_rows);
        });
    }
}
