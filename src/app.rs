use crate::chart::ChartRenderer;
use crate::charts::{EmotionScatter, GenreDistribution, GenreTrends, PopularityHistogram, RegionGrid};
use crate::config::DashboardConfig;
use crate::constants::layout::FILTER_PANEL_WIDTH;
use crate::data::stats::calculate_kpis;
use crate::data::{DataProvider, KpiSummary, MockProvider};
use crate::state::{AppState, FilterState, ViewTab};
use crate::ui;
use eframe::egui;

/// Renderers of the Dashboard tab
pub struct DashboardCharts {
    pub scatter: ChartRenderer<EmotionScatter>,
    pub genres: ChartRenderer<GenreDistribution>,
    pub popularity: ChartRenderer<PopularityHistogram>,
    pub trends: ChartRenderer<GenreTrends>,
}

/// Renderers of the Global Map tab
pub struct MapCharts {
    pub grid: ChartRenderer<RegionGrid>,
}

/// The view group currently on screen; the hidden one holds no renderers
pub enum MountedView {
    Dashboard(DashboardCharts),
    GlobalMap(MapCharts),
}

impl MountedView {
    fn mount(tab: ViewTab, state: &AppState, speed: f64) -> Self {
        tracing::debug!(tab = tab.label(), "mounting view group");
        match tab {
            ViewTab::Dashboard => MountedView::Dashboard(DashboardCharts {
                scatter: ChartRenderer::new(EmotionScatter).with_speed(speed),
                genres: ChartRenderer::new(GenreDistribution).with_speed(speed),
                popularity: ChartRenderer::new(PopularityHistogram).with_speed(speed),
                trends: ChartRenderer::new(GenreTrends).with_speed(speed),
            }),
            ViewTab::GlobalMap => MountedView::GlobalMap(MapCharts {
                grid: ChartRenderer::new(RegionGrid::new(state.view.map_mode)).with_speed(speed),
            }),
        }
    }

    pub fn tab(&self) -> ViewTab {
        match self {
            MountedView::Dashboard(_) => ViewTab::Dashboard,
            MountedView::GlobalMap(_) => ViewTab::GlobalMap,
        }
    }

    fn dispose(&mut self) {
        match self {
            MountedView::Dashboard(charts) => {
                charts.scatter.dispose();
                charts.genres.dispose();
                charts.popularity.dispose();
                charts.trends.dispose();
            }
            MountedView::GlobalMap(charts) => charts.grid.dispose(),
        }
    }

    fn refresh(&mut self) {
        match self {
            MountedView::Dashboard(charts) => {
                charts.scatter.refresh();
                charts.genres.refresh();
                charts.popularity.refresh();
                charts.trends.refresh();
            }
            MountedView::GlobalMap(charts) => charts.grid.refresh(),
        }
    }
}

pub struct SoundOxide {
    pub state: AppState,
    pub config: DashboardConfig,
    pub provider: Box<dyn DataProvider>,
    pub view: MountedView,
    pub kpis: KpiSummary,
    /// Filters the KPIs were computed for; `None` forces a recompute
    kpi_filters: Option<FilterState>,
}

impl SoundOxide {
    pub fn new(config: DashboardConfig) -> Self {
        let provider: Box<dyn DataProvider> = match config.seed {
            Some(seed) => {
                tracing::info!(seed, "using seeded mock data");
                Box::new(MockProvider::seeded(seed))
            }
            None => Box::new(MockProvider::from_entropy()),
        };
        Self::with_provider(config, provider)
    }

    pub fn with_provider(config: DashboardConfig, provider: Box<dyn DataProvider>) -> Self {
        let mut state = AppState::with_filters(config.filters.clone());
        state.view.dark_mode = config.dark_mode;
        let view = MountedView::mount(state.view.tab, &state, config.animation_speed);

        let mut app = Self {
            state,
            config,
            provider,
            view,
            kpis: KpiSummary::default(),
            kpi_filters: None,
        };
        app.refresh_kpis();
        app
    }

    /// Show another tab: the visible group is disposed and the new one mounted
    pub fn switch_tab(&mut self, tab: ViewTab) -> bool {
        if !self.state.switch_tab(tab) {
            return false;
        }
        self.view.dispose();
        self.view = MountedView::mount(tab, &self.state, self.config.animation_speed);
        true
    }

    /// Install filters from the filter panel
    pub fn set_filters(&mut self, next: FilterState) {
        if self.state.replace_filters(next) {
            self.refresh_kpis();
        }
    }

    /// Fetch new data for every visible chart with the same filters
    pub fn reroll(&mut self) {
        tracing::info!("re-rolling chart data");
        self.view.refresh();
        self.kpi_filters = None;
        self.refresh_kpis();
    }

    /// Recompute the KPI cards from a fresh sample if the filters moved
    pub fn refresh_kpis(&mut self) {
        if self.kpi_filters.as_ref() == Some(&self.state.filters) {
            return;
        }
        profiling::scope!("SoundOxide::refresh_kpis");
        let tracks = self.provider.fetch_tracks(&self.state.filters);
        self.kpis = calculate_kpis(&tracks, &self.state.filters);
        self.kpi_filters = Some(self.state.filters.clone());
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Typing in the artist search must not trigger shortcuts
        if ctx.wants_keyboard_input() {
            return;
        }

        let (dashboard, map, theme, reroll, escape) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Num1),
                i.key_pressed(egui::Key::Num2),
                i.key_pressed(egui::Key::T),
                i.key_pressed(egui::Key::R),
                i.key_pressed(egui::Key::Escape),
            )
        });

        if dashboard {
            self.switch_tab(ViewTab::Dashboard);
        }
        if map {
            self.switch_tab(ViewTab::GlobalMap);
        }
        if theme {
            self.state.view.toggle_dark_mode();
        }
        if reroll {
            self.reroll();
        }
        if escape {
            self.state.view.clear_selection();
        }
    }
}

impl eframe::App for SoundOxide {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        profiling::finish_frame!();
        profiling::scope!("SoundOxide::update");

        if self.state.view.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        self.handle_shortcuts(ctx);
        self.refresh_kpis();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui::render_header(self, ui);
        });

        egui::SidePanel::left("filter_panel")
            .resizable(false)
            .exact_width(FILTER_PANEL_WIDTH)
            .show(ctx, |ui| {
                ui::render_filter_panel(self, ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("page_scroll")
                .show(ui, |ui| {
                    ui::render_kpis(self, ui);
                    ui.separator();
                    match self.state.view.tab {
                        ViewTab::Dashboard => ui::render_dashboard(self, ui),
                        ViewTab::GlobalMap => ui::render_global_map(self, ui),
                    }
                });
        });
    }
}
