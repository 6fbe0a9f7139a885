//! Reusable UI widgets for the dashboard

mod chart_canvas;
mod filter_controls;

pub use chart_canvas::ChartCanvas;
pub use filter_controls::FilterControls;
