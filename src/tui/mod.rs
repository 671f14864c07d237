pub mod app;
pub mod chart;
pub mod ui;

pub use ui::run_tui;
