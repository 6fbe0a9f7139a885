mod dashboard;
mod decade_panel;
mod filter_panel;
mod global_map;
mod header;
mod kpi;

pub use dashboard::render_dashboard;
pub use decade_panel::render_decade_panel;
pub use filter_panel::render_filter_panel;
pub use global_map::render_global_map;
pub use header::render_header;
pub use kpi::render_kpis;
