//! GUI module - User interface components

mod app;
mod control_panel;
mod dashboard;

pub use app::VaxboardApp;
pub use control_panel::FilterPanel;
pub use dashboard::Dashboard;
