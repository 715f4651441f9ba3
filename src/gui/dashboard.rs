//! Dashboard Widget
//! Central panel with the KPI cards, the trend chart and the record table.

use egui::{Color32, RichText, ScrollArea};

use crate::charts::TrendChart;
use crate::data::{DailyTotal, VaccinationRecord};
use crate::stats::Summary;

const ACCENT: Color32 = Color32::from_rgb(21, 101, 192);
const TABLE_ROW_HEIGHT: f32 = 22.0;

/// Column widths for the record table.
const DATE_WIDTH: f32 = 90.0;
const COUNTRY_WIDTH: f32 = 160.0;
const ISO_WIDTH: f32 = 50.0;
const COUNT_WIDTH: f32 = 130.0;

/// Central dashboard: header, KPI row, trend chart and record table.
pub struct Dashboard;

impl Dashboard {
    /// Draw the whole central panel from the recomputed views. `rows` is the
    /// filtered view in display order (newest first).
    pub fn show(
        ui: &mut egui::Ui,
        summary: &Summary,
        totals: &[DailyTotal],
        rows: &[&VaccinationRecord],
    ) {
        ui.add_space(5.0);
        ui.label(
            RichText::new("💉 COVID-19 Vaccination Dashboard")
                .size(24.0)
                .strong(),
        );
        ui.label(
            RichText::new("Vaccination progress per country over time")
                .size(12.0)
                .color(Color32::GRAY),
        );
        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        Self::kpi_row(ui, summary);

        ui.add_space(12.0);
        ui.separator();
        ui.add_space(8.0);

        ui.label(RichText::new("📈 Vaccination Trend").size(16.0).strong());
        ui.label(
            RichText::new("Summed total vaccinations per day across the selection")
                .size(11.0)
                .color(Color32::GRAY),
        );
        ui.add_space(4.0);
        TrendChart::draw(ui, totals);

        ui.add_space(12.0);
        ui.separator();
        ui.add_space(8.0);

        ui.label(RichText::new("📋 Records").size(16.0).strong());
        ui.label(
            RichText::new(format!("{} rows, newest first", rows.len()))
                .size(11.0)
                .color(Color32::GRAY),
        );
        ui.add_space(4.0);
        Self::record_table(ui, rows);
    }

    fn kpi_row(ui: &mut egui::Ui, summary: &Summary) {
        ui.columns(3, |columns| {
            Self::kpi_card(
                &mut columns[0],
                "🌍 Countries",
                &format_count(summary.countries as u64),
            );
            Self::kpi_card(
                &mut columns[1],
                "💉 Total Vaccinations (max)",
                &format_count(summary.max_total_vaccinations),
            );
            Self::kpi_card(
                &mut columns[2],
                "✅ Fully Vaccinated (max)",
                &format_count(summary.max_people_fully_vaccinated),
            );
        });
    }

    fn kpi_card(ui: &mut egui::Ui, title: &str, value: &str) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(8.0)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(title).size(12.0).color(Color32::GRAY));
                    ui.label(RichText::new(value).size(24.0).strong().color(ACCENT));
                });
            });
    }

    fn record_table(ui: &mut egui::Ui, rows: &[&VaccinationRecord]) {
        Self::table_header(ui);
        ScrollArea::vertical()
            .auto_shrink([false, true])
            .show_rows(ui, TABLE_ROW_HEIGHT, rows.len(), |ui, range| {
                for index in range {
                    if let Some(record) = rows.get(index) {
                        Self::table_row(ui, record);
                    }
                }
            });
    }

    fn table_header(ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for (title, width) in [
                ("Date", DATE_WIDTH),
                ("Country", COUNTRY_WIDTH),
                ("ISO", ISO_WIDTH),
                ("Total", COUNT_WIDTH),
                ("Vaccinated", COUNT_WIDTH),
                ("Fully vaccinated", COUNT_WIDTH),
                ("Daily", COUNT_WIDTH),
            ] {
                ui.add_sized(
                    [width, TABLE_ROW_HEIGHT],
                    egui::Label::new(RichText::new(title).strong()),
                );
            }
            ui.label(RichText::new("Vaccines").strong());
        });
        ui.separator();
    }

    fn table_row(ui: &mut egui::Ui, record: &VaccinationRecord) {
        ui.horizontal(|ui| {
            ui.add_sized(
                [DATE_WIDTH, TABLE_ROW_HEIGHT],
                egui::Label::new(record.date.format("%Y-%m-%d").to_string()),
            );
            ui.add_sized(
                [COUNTRY_WIDTH, TABLE_ROW_HEIGHT],
                egui::Label::new(record.country.as_str()),
            );
            ui.add_sized(
                [ISO_WIDTH, TABLE_ROW_HEIGHT],
                egui::Label::new(record.iso_code.as_deref().unwrap_or("-")),
            );
            for value in [
                record.total_vaccinations,
                record.people_vaccinated,
                record.people_fully_vaccinated,
                record.daily_vaccinations,
            ] {
                ui.add_sized(
                    [COUNT_WIDTH, TABLE_ROW_HEIGHT],
                    egui::Label::new(format_optional(value)),
                );
            }
            ui.label(record.vaccines.as_deref().unwrap_or("-"));
        });
    }
}

/// Group digits in threes: 1234567 -> "1,234,567".
fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

fn format_optional(value: Option<u64>) -> String {
    value.map(format_count).unwrap_or_else(|| "-".to_string())
}
