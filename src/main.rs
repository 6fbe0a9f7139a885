#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use tracing_subscriber::EnvFilter;

mod app;
mod chart;
mod charts;
mod config;
mod constants;
mod data;
mod error;
mod state;
mod ui;
mod widgets;

use app::SoundOxide;
use config::DashboardConfig;
use constants::config::DEFAULT_LOG_FILTER;

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(feature = "profile-with-puffin")]
fn start_puffin_server() -> Option<puffin_http::Server> {
    puffin::set_scopes_on(true);
    let address = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
    match puffin_http::Server::new(&address) {
        Ok(server) => {
            tracing::info!(%address, "puffin server listening");
            Some(server)
        }
        Err(e) => {
            tracing::warn!("puffin server failed to start: {e}");
            None
        }
    }
}

fn main() -> error::Result<()> {
    init_logging();

    #[cfg(feature = "profile-with-puffin")]
    let _puffin = start_puffin_server();

    let config = DashboardConfig::load();
    tracing::info!(decade = config.filters.decade.year(), "starting dashboard");

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SoundOxide - A Century of Sound",
        options,
        Box::new(|_| Ok(Box::new(SoundOxide::new(config)))),
    )
    .map_err(|e| {
        let err = error::DashboardError::from(e);
        tracing::error!("{}: {}", err.title(), err.user_message());
        err
    })
}
