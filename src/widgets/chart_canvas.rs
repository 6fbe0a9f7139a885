//! Paints a [`ChartRenderer`] into an egui region and feeds pointer input back to it

use crate::chart::curve::truncate;
use crate::chart::{AxisSide, ChartRenderer, ChartSpec, Geometry, Mark, MarkVisual, RenderPass};
use crate::data::DataProvider;
use crate::state::FilterState;
use egui::{
    Align2, Area, Color32, FontId, Frame, Id, Order, Painter, Rect, Sense, Shape, Stroke, Ui,
    pos2, vec2,
};

const TICK_LENGTH: f32 = 5.0;
const LEGEND_SWATCH: f32 = 12.0;
const LEGEND_ROW: f32 = 22.0;
const LEGEND_MIN_MARGIN: f32 = 100.0;

/// What happened to the chart this frame
pub struct CanvasResponse {
    pub response: egui::Response,
    /// Datum index under a click, if any
    pub clicked: Option<usize>,
}

pub struct ChartCanvas<'a, C: ChartSpec> {
    renderer: &'a mut ChartRenderer<C>,
    provider: &'a mut dyn DataProvider,
    filters: &'a FilterState,
    height: f32,
}

impl<'a, C: ChartSpec> ChartCanvas<'a, C> {
    pub fn new(
        renderer: &'a mut ChartRenderer<C>,
        provider: &'a mut dyn DataProvider,
        filters: &'a FilterState,
        height: f32,
    ) -> Self {
        Self {
            renderer,
            provider,
            filters,
            height,
        }
    }

    pub fn show(self, ui: &mut Ui) -> CanvasResponse {
        profiling::scope!("ChartCanvas::show");

        let size = vec2(ui.available_width(), self.height);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());
        let now = ui.input(|i| i.time);

        let pass = self.renderer.update(self.provider, self.filters, rect, now);
        if pass != RenderPass::Unchanged {
            tracing::trace!(chart = self.renderer.spec().name(), ?pass, "chart pass");
        }

        match response.hover_pos() {
            Some(pos) => {
                self.renderer.pointer_moved(pos, now);
            }
            None => self.renderer.pointer_left(),
        }
        let clicked = if response.clicked() {
            response
                .interact_pointer_pos()
                .and_then(|pos| self.renderer.click(pos, now))
        } else {
            None
        };

        let painter = ui.painter_at(rect);
        let text = ui.visuals().text_color();
        let weak = ui.visuals().weak_text_color();
        let grid = ui.visuals().widgets.noninteractive.bg_stroke.color;

        if let Some(title) = self.renderer.spec().title(self.filters) {
            painter.text(
                pos2(rect.center().x, rect.min.y + 12.0),
                Align2::CENTER_CENTER,
                title,
                FontId::proportional(15.0),
                text,
            );
        }

        paint_axes(&painter, self.renderer, weak, grid);

        if let Some(layout) = self.renderer.layout() {
            for (pos, label) in self.renderer.spec().annotations(layout) {
                painter.text(pos, Align2::LEFT_TOP, label, FontId::proportional(12.0), weak);
            }
        }

        for (visual, mark) in self.renderer.snapshot(now) {
            paint_mark(&painter, &visual, mark, text);
        }

        let legend = self.renderer.spec().legend(self.renderer.data());
        paint_legend(&painter, rect, self.renderer.surface().plot(), &legend, text);

        if let Some(overlay) = self.renderer.overlay() {
            Area::new(Id::new(("chart_overlay", self.renderer.spec().name())))
                .order(Order::Tooltip)
                .fixed_pos(overlay.position)
                .interactable(false)
                .show(ui.ctx(), |ui| {
                    Frame::popup(ui.style()).show(ui, |ui| {
                        if let Some(title) = overlay.title() {
                            ui.strong(title);
                        }
                        for line in overlay.body() {
                            ui.label(line);
                        }
                    });
                });
        }

        if self.renderer.is_animating(now) {
            ui.ctx().request_repaint();
        }

        CanvasResponse {
            response,
            clicked,
        }
    }
}

fn paint_axes<C: ChartSpec>(
    painter: &Painter,
    renderer: &ChartRenderer<C>,
    label: Color32,
    grid: Color32,
) {
    let plot = renderer.surface().plot();
    let frame = renderer.surface().frame();
    let font = FontId::proportional(11.0);

    for axis in renderer.surface().axes() {
        match axis.side {
            AxisSide::Bottom => {
                let y = plot.max.y;
                painter.line_segment([pos2(plot.min.x, y), pos2(plot.max.x, y)], Stroke::new(1.0, label));
                for tick in &axis.ticks {
                    let x = tick.position;
                    if axis.grid {
                        painter.line_segment([pos2(x, plot.min.y), pos2(x, y)], Stroke::new(0.5, grid));
                    }
                    painter.line_segment([pos2(x, y), pos2(x, y + TICK_LENGTH)], Stroke::new(1.0, label));
                    if !tick.label.is_empty() {
                        painter.text(pos2(x, y + 8.0), Align2::CENTER_TOP, &tick.label, font.clone(), label);
                    }
                }
                if !axis.title.is_empty() {
                    painter.text(
                        pos2(plot.center().x, y + 32.0),
                        Align2::CENTER_TOP,
                        &axis.title,
                        FontId::proportional(13.0),
                        label,
                    );
                }
            }
            AxisSide::Left => {
                let x = plot.min.x;
                painter.line_segment([pos2(x, plot.min.y), pos2(x, plot.max.y)], Stroke::new(1.0, label));
                for tick in &axis.ticks {
                    let y = tick.position;
                    if axis.grid {
                        painter.line_segment([pos2(x, y), pos2(plot.max.x, y)], Stroke::new(0.5, grid));
                    }
                    painter.line_segment([pos2(x - TICK_LENGTH, y), pos2(x, y)], Stroke::new(1.0, label));
                    if !tick.label.is_empty() {
                        painter.text(pos2(x - 8.0, y), Align2::RIGHT_CENTER, &tick.label, font.clone(), label);
                    }
                }
                if !axis.title.is_empty() {
                    painter.text(
                        pos2(frame.min.x + 4.0, plot.min.y - 14.0),
                        Align2::LEFT_BOTTOM,
                        &axis.title,
                        FontId::proportional(13.0),
                        label,
                    );
                }
            }
        }
    }
}

fn paint_mark(painter: &Painter, visual: &MarkVisual, mark: &Mark, text: Color32) {
    let color = visual.color();
    match &visual.geometry {
        Geometry::Circle { center, radius } => {
            if *radius > 0.0 {
                painter.circle_filled(*center, *radius, color);
            }
        }
        Geometry::Rect { rect, corner_radius } => {
            if rect.is_positive() {
                painter.rect_filled(*rect, *corner_radius, color);
                // Labels fade with their mark
                let fade = if mark.visual.opacity > 0.0 {
                    (visual.opacity / mark.visual.opacity).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                paint_label(painter, *rect, &mark.label, visual.fill, text, fade);
            }
        }
        Geometry::Path { points, width, progress } => {
            let visible = truncate(points, *progress);
            if visible.len() > 1 {
                painter.add(Shape::line(visible, Stroke::new(*width, color)));
            }
        }
    }
}

/// Tile-style label: accent bar, bold first line, weak second line
fn paint_label(painter: &Painter, rect: Rect, lines: &[String], accent: Color32, text: Color32, alpha: f32) {
    if lines.is_empty() {
        return;
    }
    let bar = Rect::from_min_size(rect.min + vec2(10.0, 8.0), vec2(rect.width() - 20.0, 4.0));
    painter.rect_filled(bar, 2.0, accent.gamma_multiply(alpha));

    let mut y = bar.max.y + 6.0;
    for (i, line) in lines.iter().enumerate() {
        let (font, color) = if i == 0 {
            (FontId::proportional(13.0), text)
        } else {
            (FontId::proportional(11.0), text.gamma_multiply(0.7))
        };
        painter.text(pos2(rect.min.x + 10.0, y), Align2::LEFT_TOP, line, font, color.gamma_multiply(alpha));
        y += 16.0;
    }
}

/// Legend in the right margin when there is room for it, otherwise along the top
fn paint_legend(painter: &Painter, frame: Rect, plot: Rect, entries: &[(String, Color32)], text: Color32) {
    let vertical = frame.max.x - plot.max.x >= LEGEND_MIN_MARGIN;
    let mut cursor = if vertical {
        pos2(plot.max.x + 20.0, plot.min.y)
    } else {
        pos2(plot.min.x, frame.min.y + 4.0)
    };
    for (label, color) in entries {
        let swatch = Rect::from_min_size(cursor, vec2(LEGEND_SWATCH, LEGEND_SWATCH));
        painter.rect_filled(swatch, 2.0, *color);
        let label_rect = painter.text(
            pos2(swatch.max.x + 6.0, swatch.center().y),
            Align2::LEFT_CENTER,
            label,
            FontId::proportional(12.0),
            text,
        );
        if vertical {
            cursor.y += LEGEND_ROW;
        } else {
            cursor.x = label_rect.max.x + 14.0;
        }
    }
}
