use std::f32::consts::PI;

use eframe::egui::{self, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2};

use crate::chart::{self, ChartInput, ChartKind, Point, Primitive, Viewport, MARKER_SIZE, STROKE_COLOR};
use crate::color::PaletteKind;
use crate::notify::{Observer, Snapshot};

const DASH: f32 = 5.0;
const LABEL_PADDING: f32 = 10.0;
// White at 70% opacity.
const LABEL_BACKGROUND: Color32 = Color32::from_rgba_premultiplied(178, 178, 178, 178);
/// Largest arc piece painted as one convex polygon.
const MAX_SECTOR_PIECE_DEG: f64 = 90.0;

// ---------------------------------------------------------------------------
// Chart canvas (central panel)
// ---------------------------------------------------------------------------

/// Keeps a copy of what to draw and the primitives laid out for it.
#[derive(Debug, Default)]
pub struct ChartCanvas {
    values: Vec<f64>,
    chart: ChartKind,
    palette: PaletteKind,
    viewport: Option<Viewport>,
    primitives: Vec<Primitive>,
    stale: bool,
}

impl Observer for ChartCanvas {
    fn on_full_refresh(&mut self, snapshot: &Snapshot<'_>) {
        self.on_chart_refresh(snapshot);
    }

    fn on_chart_refresh(&mut self, snapshot: &Snapshot<'_>) {
        self.values.clear();
        self.values.extend_from_slice(snapshot.values);
        self.chart = snapshot.chart;
        self.palette = snapshot.palette;
        self.stale = true;
    }
}

impl ChartCanvas {
    /// Primitives for `viewport`, re-laid out after a refresh or a resize.
    fn prepare(&mut self, viewport: Viewport) -> &[Primitive] {
        if self.stale || self.viewport != Some(viewport) {
            self.primitives = chart::layout(&ChartInput {
                values: &self.values,
                kind: self.chart,
                palette: self.palette.palette(),
                viewport,
            });
            log::debug!(
                "laid out {:?} at {}x{}: {} primitives",
                self.chart,
                viewport.width,
                viewport.height,
                self.primitives.len()
            );
            self.viewport = Some(viewport);
            self.stale = false;
        }
        &self.primitives
    }

    /// Paint the chart into all the space the panel offers.
    pub fn show(&mut self, ui: &mut Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
        let rect = response.rect;
        painter.rect_filled(rect, 0.0, Color32::WHITE);

        let viewport = Viewport::new(rect.width() as f64, rect.height() as f64);
        let origin = rect.min;
        let to_screen = |p: Point| origin + Vec2::new(p.x as f32, p.y as f32);
        let stroke = Stroke::new(1.0, STROKE_COLOR);

        for prim in self.prepare(viewport) {
            match prim {
                Primitive::Marker { center, color } => {
                    let r = Rect::from_center_size(to_screen(*center), Vec2::splat(MARKER_SIZE as f32));
                    painter.rect_filled(r, 0.0, *color);
                }
                Primitive::Segment { from, to, dashed } => {
                    let ends = [to_screen(*from), to_screen(*to)];
                    if *dashed {
                        painter.extend(Shape::dashed_line(&ends, stroke, DASH, DASH));
                    } else {
                        painter.line_segment(ends, stroke);
                    }
                }
                Primitive::Rect { min, width, height, fill } => {
                    let r = Rect::from_min_size(
                        to_screen(*min),
                        Vec2::new(*width as f32, *height as f32),
                    );
                    match fill {
                        Some(color) => painter.rect_filled(r, 0.0, *color),
                        None => painter.rect_stroke(r, 0.0, stroke, egui::StrokeKind::Inside),
                    };
                }
                Primitive::Sector { center, radius, start_deg, sweep_deg, color } => {
                    for piece in sector_pieces(to_screen(*center), *radius, *start_deg, *sweep_deg) {
                        painter.add(Shape::convex_polygon(piece, *color, Stroke::NONE));
                    }
                }
                Primitive::Label { origin: at, lines } => {
                    let galley = painter.layout_no_wrap(
                        lines.join("\n"),
                        FontId::proportional(13.0),
                        Color32::BLACK,
                    );
                    let top_left = to_screen(*at);
                    let bg = Rect::from_min_size(
                        top_left,
                        galley.size() + Vec2::splat(LABEL_PADDING * 2.0),
                    );
                    painter.rect_filled(bg, 0.0, LABEL_BACKGROUND);
                    painter.galley(top_left + Vec2::splat(LABEL_PADDING), galley, Color32::BLACK);
                }
            }
        }
    }
}

/// Split a sector into convex fans of at most 90° each.
/// Angles grow counter-clockwise, so screen y is flipped.
fn sector_pieces(center: Pos2, radius: f64, start_deg: f64, sweep_deg: f64) -> Vec<Vec<Pos2>> {
    let pieces = (sweep_deg.abs() / MAX_SECTOR_PIECE_DEG).ceil().max(1.0) as usize;
    let step = sweep_deg / pieces as f64;
    let r = radius as f32;

    (0..pieces)
        .map(|k| {
            let from = start_deg + step * k as f64;
            // one vertex per 2°
            let segments = ((step.abs() / 2.0).ceil() as usize).max(1);
            let mut points = Vec::with_capacity(segments + 2);
            points.push(center);
            for s in 0..=segments {
                let deg = from + step * s as f64 / segments as f64;
                let rad = deg as f32 * PI / 180.0;
                points.push(center + Vec2::new(r * rad.cos(), -r * rad.sin()));
            }
            points
        })
        .collect()
}
