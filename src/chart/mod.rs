//! Generic reconciling chart engine
//!
//! A [`ChartSpec`] says what a chart shows: where its data comes from, how it is scaled, what
//! each datum looks like and what the tooltip says. [`ChartRenderer`] does the rest for every
//! chart alike: it watches the filter state and frame, re-fetches and reconciles marks with
//! staggered entrance transitions, tracks hover and owns the one tooltip overlay.

pub mod axis;
pub mod color;
pub mod curve;
pub mod format;
pub mod mark;
pub mod overlay;
pub mod scale;
pub mod surface;
pub mod transition;

pub use axis::{Axis, AxisSide, Margin, Tick};
pub use mark::{Geometry, Mark, MarkVisual};
pub use overlay::Overlay;
pub use surface::DrawingSurface;
pub use transition::{AnimationSpec, Easing, Entrance};

use crate::data::DataProvider;
use crate::state::FilterState;
use egui::{Color32, Pos2, Rect};

/// Chart-specific configuration plugged into the generic renderer
pub trait ChartSpec {
    /// One record of the chart's data set; one mark is drawn per datum
    type Datum: Clone + std::fmt::Debug;

    /// Scales and any derived geometry computed from data and plot rect
    type Layout;

    /// Short name used in log output
    fn name(&self) -> &'static str;

    /// Pull this chart's records from the provider
    fn fetch(&self, provider: &mut dyn DataProvider, filters: &FilterState) -> Vec<Self::Datum>;

    fn margin(&self) -> Margin;

    fn layout(&self, data: &[Self::Datum], plot: Rect) -> Self::Layout;

    fn axes(&self, _layout: &Self::Layout, _data: &[Self::Datum]) -> Vec<Axis> {
        Vec::new()
    }

    /// Final on-screen state for one datum
    fn mark(
        &self,
        datum: &Self::Datum,
        index: usize,
        layout: &Self::Layout,
        filters: &FilterState,
    ) -> Mark;

    /// Hover variant of a mark's visual
    fn highlight(&self, visual: &MarkVisual) -> MarkVisual {
        visual.clone()
    }

    /// Overlay lines for a hovered datum; the first line is the title
    fn tooltip(&self, datum: &Self::Datum, data: &[Self::Datum]) -> Vec<String>;

    fn animation(&self) -> AnimationSpec;

    /// Extra hit-test tolerance in points
    fn hit_slack(&self) -> f32 {
        0.0
    }

    fn title(&self, _filters: &FilterState) -> Option<String> {
        None
    }

    fn legend(&self, _data: &[Self::Datum]) -> Vec<(String, Color32)> {
        Vec::new()
    }

    /// Free text painted at fixed positions, such as group headers
    fn annotations(&self, _layout: &Self::Layout) -> Vec<(Pos2, String)> {
        Vec::new()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Uninitialized,
    Rendered,
    Disposed,
}

/// What a call to [`ChartRenderer::update`] did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderPass {
    /// First draw after mounting
    Initial,
    /// Filters changed: data re-fetched and marks re-entered
    Redrawn,
    /// Frame changed: same data laid out again
    Relaid,
    Unchanged,
    /// Renderer already disposed
    Skipped,
}

/// Stateful renderer for one chart instance
pub struct ChartRenderer<C: ChartSpec> {
    spec: C,
    lifecycle: Lifecycle,
    surface: DrawingSurface,
    data: Vec<C::Datum>,
    layout: Option<C::Layout>,
    /// Filters of the last fetch; `None` forces a re-fetch
    filters: Option<FilterState>,
    hovered: Option<usize>,
    overlay: Option<Overlay>,
    speed: f64,
}

impl<C: ChartSpec> ChartRenderer<C> {
    pub fn new(spec: C) -> Self {
        let margin = spec.margin();
        Self {
            spec,
            lifecycle: Lifecycle::Uninitialized,
            surface: DrawingSurface::acquire(Rect::NOTHING, margin),
            data: Vec::new(),
            layout: None,
            filters: None,
            hovered: None,
            overlay: None,
            speed: 1.0,
        }
    }

    /// Animation speed multiplier; 0 disables animation
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn spec(&self) -> &C {
        &self.spec
    }

    /// Mutable access for chart-local parameters; follow with [`Self::restyle`]
    pub fn spec_mut(&mut self) -> &mut C {
        &mut self.spec
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn data(&self) -> &[C::Datum] {
        &self.data
    }

    pub fn layout(&self) -> Option<&C::Layout> {
        self.layout.as_ref()
    }

    pub fn surface(&self) -> &DrawingSurface {
        &self.surface
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Filters the current marks were drawn for
    pub fn filters(&self) -> Option<&FilterState> {
        self.filters.as_ref()
    }

    fn anim(&self) -> AnimationSpec {
        self.spec.animation().scaled(self.speed)
    }

    fn build_marks(&self, filters: &FilterState) -> Vec<Mark> {
        match &self.layout {
            Some(layout) => self
                .data
                .iter()
                .enumerate()
                .map(|(i, d)| self.spec.mark(d, i, layout, filters))
                .collect(),
            None => Vec::new(),
        }
    }

    fn relayout(&mut self) {
        let layout = self.spec.layout(&self.data, self.surface.plot());
        self.surface.set_axes(self.spec.axes(&layout, &self.data));
        self.layout = Some(layout);
    }

    /// Bring the chart up to date with `filters` and `frame`
    ///
    /// Changed filters re-fetch and restart the entrance of every mark; a changed frame alone
    /// lays the same data out again and retargets running transitions.
    pub fn update(
        &mut self,
        provider: &mut dyn DataProvider,
        filters: &FilterState,
        frame: Rect,
        now: f64,
    ) -> RenderPass {
        profiling::scope!("ChartRenderer::update");

        if self.lifecycle == Lifecycle::Disposed {
            return RenderPass::Skipped;
        }

        let pass = if self.filters.as_ref() != Some(filters) {
            self.clear_hover();
            self.surface.resize(frame, self.spec.margin());
            self.data = self.spec.fetch(provider, filters);
            tracing::debug!(
                chart = self.spec.name(),
                records = self.data.len(),
                decade = filters.decade.year(),
                "fetched chart data"
            );
            self.relayout();
            let marks = self.build_marks(filters);
            let anim = self.anim();
            self.surface.reconcile(marks, &anim, now);
            self.filters = Some(filters.clone());

            if self.lifecycle == Lifecycle::Uninitialized {
                self.lifecycle = Lifecycle::Rendered;
                tracing::debug!(chart = self.spec.name(), "chart rendered");
                RenderPass::Initial
            } else {
                RenderPass::Redrawn
            }
        } else if frame != self.surface.frame() {
            self.surface.resize(frame, self.spec.margin());
            self.relayout();
            let marks = self.build_marks(filters);
            self.surface.retarget(marks);
            // Old overlay position no longer matches the marks
            self.overlay = None;
            self.reapply_highlight();
            RenderPass::Relaid
        } else {
            RenderPass::Unchanged
        };

        self.surface.settle(now);
        pass
    }

    /// Rebuild marks after a chart-local parameter changed, animating from the current state
    pub fn restyle(&mut self, now: f64) {
        if self.lifecycle != Lifecycle::Rendered {
            return;
        }
        let Some(filters) = self.filters.clone() else {
            return;
        };
        self.relayout();
        let marks = self.build_marks(&filters);
        let anim = self.anim();
        self.surface.morph(marks, &anim, now);
        self.reapply_highlight();
        if let (Some(index), Some(overlay)) = (self.hovered, self.overlay.as_mut()) {
            if let Some(datum) = self.data.get(index) {
                overlay.lines = self.spec.tooltip(datum, &self.data);
            }
        }
    }

    /// Force a re-fetch on the next update even though the filters are unchanged
    pub fn refresh(&mut self) {
        self.filters = None;
    }

    fn reapply_highlight(&mut self) {
        if let Some(index) = self.hovered {
            let highlight = self.surface.mark(index).map(|m| self.spec.highlight(&m.visual));
            self.surface.set_highlight(index, highlight);
        }
    }

    fn clear_hover(&mut self) {
        if let Some(index) = self.hovered.take() {
            self.surface.set_highlight(index, None);
        }
        self.overlay = None;
    }

    /// Hover handling; returns whether the hovered mark changed
    pub fn pointer_moved(&mut self, pos: Pos2, now: f64) -> bool {
        if self.lifecycle != Lifecycle::Rendered {
            return false;
        }
        let hit = self.surface.hit_test(pos, self.spec.hit_slack(), now);
        let Some(index) = hit else {
            let changed = self.hovered.is_some();
            self.pointer_left();
            return changed;
        };

        let changed = self.hovered != Some(index);
        if changed {
            if let Some(previous) = self.hovered {
                self.surface.set_highlight(previous, None);
            }
            self.hovered = Some(index);
            self.reapply_highlight();
            tracing::trace!(chart = self.spec.name(), index, "mark hovered");
        }

        let lines = match (&self.overlay, self.data.get(index)) {
            (Some(o), _) if o.mark == index => o.lines.clone(),
            (_, Some(datum)) => self.spec.tooltip(datum, &self.data),
            (_, None) => Vec::new(),
        };
        self.overlay = Some(Overlay::at_pointer(index, pos, lines));
        changed
    }

    /// Revert the hovered mark and drop the overlay; safe to call repeatedly
    pub fn pointer_left(&mut self) {
        self.clear_hover();
    }

    /// Index of the datum under `pos`, if any
    pub fn click(&self, pos: Pos2, now: f64) -> Option<usize> {
        if self.lifecycle != Lifecycle::Rendered {
            return None;
        }
        self.surface.hit_test(pos, self.spec.hit_slack(), now)
    }

    /// Marks as they should be painted at `now`
    pub fn snapshot(&self, now: f64) -> Vec<(MarkVisual, &Mark)> {
        self.surface.snapshot(now)
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.lifecycle == Lifecycle::Rendered && self.surface.is_animating(now)
    }

    /// Release marks and the overlay; later updates are ignored
    pub fn dispose(&mut self) {
        if self.lifecycle == Lifecycle::Disposed {
            return;
        }
        self.clear_hover();
        self.surface.clear();
        self.data.clear();
        self.layout = None;
        self.filters = None;
        self.lifecycle = Lifecycle::Disposed;
        tracing::debug!(chart = self.spec.name(), "chart disposed");
    }
}

impl<C: ChartSpec> Drop for ChartRenderer<C> {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MockProvider;
    use crate::state::FilterEdit;
    use egui::{Color32, pos2};

    /// One bar per decade index up to the selected decade
    struct Steps;

    impl ChartSpec for Steps {
        type Datum = u16;
        type Layout = Rect;

        fn name(&self) -> &'static str {
            "steps"
        }

        fn fetch(&self, _provider: &mut dyn DataProvider, filters: &FilterState) -> Vec<u16> {
            (0..=filters.decade.index() as u16).collect()
        }

        fn margin(&self) -> Margin {
            Margin::new(0.0, 0.0, 0.0, 0.0)
        }

        fn layout(&self, _data: &[u16], plot: Rect) -> Rect {
            plot
        }

        fn mark(&self, d: &u16, _index: usize, plot: &Rect, _filters: &FilterState) -> Mark {
            let x = plot.min.x + *d as f32 * 20.0;
            Mark::new(MarkVisual::new(
                Geometry::Rect {
                    rect: Rect::from_min_max(pos2(x, plot.min.y), pos2(x + 10.0, plot.max.y)),
                    corner_radius: 0.0,
                },
                Color32::GREEN,
            ))
        }

        fn highlight(&self, visual: &MarkVisual) -> MarkVisual {
            MarkVisual {
                fill: Color32::WHITE,
                ..visual.clone()
            }
        }

        fn tooltip(&self, d: &u16, _data: &[u16]) -> Vec<String> {
            vec![format!("step {}", d)]
        }

        fn animation(&self) -> AnimationSpec {
            AnimationSpec::new(1.0, 0.1)
        }
    }

    fn frame(width: f32) -> Rect {
        Rect::from_min_max(pos2(0.0, 0.0), pos2(width, 100.0))
    }

    fn rendered(filters: &FilterState) -> (ChartRenderer<Steps>, MockProvider) {
        let mut provider = MockProvider::seeded(7);
        let mut r = ChartRenderer::new(Steps);
        assert_eq!(r.update(&mut provider, filters, frame(400.0), 0.0), RenderPass::Initial);
        (r, provider)
    }

    #[test]
    fn test_lifecycle_transitions() {
        let filters = FilterState::default();
        let (mut r, mut provider) = rendered(&filters);
        assert_eq!(r.lifecycle(), Lifecycle::Rendered);
        assert_eq!(r.surface().len(), 10);
        assert_eq!(r.update(&mut provider, &filters, frame(400.0), 0.1), RenderPass::Unchanged);

        let older = filters.apply(FilterEdit::DecadeIndex(2));
        assert_eq!(r.update(&mut provider, &older, frame(400.0), 0.2), RenderPass::Redrawn);
        assert_eq!(r.surface().len(), 3);

        r.dispose();
        assert_eq!(r.lifecycle(), Lifecycle::Disposed);
        assert_eq!(r.update(&mut provider, &filters, frame(400.0), 0.3), RenderPass::Skipped);
        assert!(r.surface().is_empty());
    }

    #[test]
    fn test_mid_animation_change_settles_on_new_data() {
        let filters = FilterState::default();
        let (mut r, mut provider) = rendered(&filters);
        let older = filters.apply(FilterEdit::DecadeIndex(3));
        r.update(&mut provider, &older, frame(400.0), 0.4);
        assert!(r.is_animating(0.5));

        let done = 0.4 + 1.0 + 0.1 * 3.0 + 0.01;
        r.update(&mut provider, &older, frame(400.0), done);
        assert!(!r.is_animating(done));
        let snapshot = r.snapshot(done);
        assert_eq!(snapshot.len(), 4);
        for (visual, mark) in snapshot {
            assert_eq!(&visual, &mark.visual);
        }
    }

    #[test]
    fn test_resize_retargets_without_refetch() {
        let filters = FilterState::default();
        let (mut r, mut provider) = rendered(&filters);
        assert_eq!(r.update(&mut provider, &filters, frame(600.0), 0.5), RenderPass::Relaid);
        assert!(r.is_animating(0.5), "running entrance is not restarted or cut short");
        assert_eq!(r.surface().len(), 10);
        assert_eq!(r.surface().frame(), frame(600.0));
    }

    #[test]
    fn test_hover_keeps_at_most_one_overlay() {
        let filters = FilterState::default();
        let (mut r, _provider) = rendered(&filters);
        let now = 5.0;

        for _ in 0..20 {
            assert!(r.pointer_moved(pos2(5.0, 50.0), now));
            assert_eq!(r.overlay().map(|o| o.mark), Some(0));
            r.pointer_moved(pos2(25.0, 50.0), now);
            assert_eq!(r.overlay().map(|o| o.mark), Some(1));
            assert_eq!(r.overlay().and_then(|o| o.title()), Some("step 1"));
            r.pointer_left();
            r.pointer_left();
            assert!(r.overlay().is_none());
        }
        assert_eq!(r.hovered(), None);
    }

    #[test]
    fn test_hover_highlights_and_reverts() {
        let filters = FilterState::default();
        let (mut r, _provider) = rendered(&filters);
        let now = 5.0;
        r.pointer_moved(pos2(25.0, 50.0), now);
        assert_eq!(r.surface().visual(1, now).map(|v| v.fill), Some(Color32::WHITE));
        r.pointer_moved(pos2(15.0, 50.0), now);
        assert_eq!(r.surface().visual(1, now).map(|v| v.fill), Some(Color32::GREEN));
        assert!(r.overlay().is_none());
    }

    #[test]
    fn test_filter_change_drops_overlay() {
        let filters = FilterState::default();
        let (mut r, mut provider) = rendered(&filters);
        r.pointer_moved(pos2(5.0, 50.0), 5.0);
        assert!(r.overlay().is_some());
        r.update(&mut provider, &filters.apply(FilterEdit::DecadeIndex(0)), frame(400.0), 5.1);
        assert!(r.overlay().is_none());
        assert_eq!(r.hovered(), None);
    }

    #[test]
    fn test_dispose_releases_overlay_and_is_idempotent() {
        let filters = FilterState::default();
        let (mut r, _provider) = rendered(&filters);
        r.pointer_moved(pos2(5.0, 50.0), 5.0);
        r.dispose();
        r.dispose();
        assert!(r.overlay().is_none());
        assert!(!r.pointer_moved(pos2(5.0, 50.0), 5.0));
        assert_eq!(r.click(pos2(5.0, 50.0), 5.0), None);
    }

    #[test]
    fn test_refresh_forces_redraw() {
        let filters = FilterState::default();
        let (mut r, mut provider) = rendered(&filters);
        r.refresh();
        assert_eq!(r.update(&mut provider, &filters, frame(400.0), 1.0), RenderPass::Redrawn);
    }

    #[test]
    fn test_zero_speed_lands_immediately() {
        let filters = FilterState::default();
        let mut provider = MockProvider::seeded(1);
        let mut r = ChartRenderer::new(Steps).with_speed(0.0);
        r.update(&mut provider, &filters, frame(400.0), 0.0);
        assert!(!r.is_animating(0.001));
    }
}
