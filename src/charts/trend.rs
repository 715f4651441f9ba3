//! Trend Chart Module
//! Draws the daily vaccination aggregate as an interactive egui_plot line.

use chrono::{Duration, NaiveDate};
use egui::{Color32, RichText};
use egui_plot::{Line, Plot, PlotPoints};

use crate::data::DailyTotal;

/// Line color for the trend.
pub const TREND_COLOR: Color32 = Color32::from_rgb(21, 101, 192);

/// Renders the total-vaccinations trend using egui_plot.
pub struct TrendChart;

impl TrendChart {
    /// Draw the trend line for the aggregated view.
    /// X-axis: date, Y-axis: summed total vaccinations.
    pub fn draw(ui: &mut egui::Ui, totals: &[DailyTotal]) {
        if totals.is_empty() {
            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("No data for the current filter")
                        .size(16.0)
                        .color(Color32::GRAY),
                );
            });
            ui.add_space(20.0);
            return;
        }

        let points: PlotPoints = totals
            .iter()
            .map(|point| [Self::date_to_x(point.date), point.total as f64])
            .collect();

        Plot::new("vaccination_trend")
            .height(420.0)
            .allow_scroll(false)
            .x_axis_label("Date")
            .y_axis_label("Total vaccinations")
            .x_axis_formatter(|mark, _range| {
                Self::x_to_date(mark.value)
                    .map(|date| date.format("%Y-%m-%d").to_string())
                    .unwrap_or_default()
            })
            .label_formatter(|_name, value| match Self::x_to_date(value.x) {
                Some(date) => format!("{}\n{:.0}", date.format("%Y-%m-%d"), value.y),
                None => String::new(),
            })
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(points)
                        .color(TREND_COLOR)
                        .width(3.0)
                        .name("Total vaccinations"),
                );
            });
    }

    /// Days since the Unix epoch, as a plot coordinate.
    fn date_to_x(date: NaiveDate) -> f64 {
        // NaiveDate::default() is 1970-01-01.
        date.signed_duration_since(NaiveDate::default()).num_days() as f64
    }

    /// Inverse of [`Self::date_to_x`]. `None` for coordinates outside the
    /// calendar, which zooming and panning can produce.
    fn x_to_date(x: f64) -> Option<NaiveDate> {
        if !x.is_finite() {
            return None;
        }
        let days = Duration::try_days(x.round() as i64)?;
        NaiveDate::default().checked_add_signed(days)
    }
}
