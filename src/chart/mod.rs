//! Chart geometry: dataset + chart kind + viewport → drawable primitives.
//!
//! Nothing here touches the UI. Coordinates are pixels with the origin at
//! the top-left corner of the canvas and y growing downward.
use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

use crate::color::Palette;
use crate::data::stats::Summary;

mod bar;
mod box_plot;
mod line;
mod pie;

// ---------------------------------------------------------------------------
// Chart kind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
    SemBar,
    Pie,
    BoxPlot,
}

impl ChartKind {
    pub const ALL: [ChartKind; 5] = [
        ChartKind::Line,
        ChartKind::Bar,
        ChartKind::SemBar,
        ChartKind::Pie,
        ChartKind::BoxPlot,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Line => "Line",
            ChartKind::Bar => "Bar",
            ChartKind::SemBar => "Bar (SEM)",
            ChartKind::Pie => "Pie",
            ChartKind::BoxPlot => "Box",
        }
    }

    /// Blank space kept around the plot on every side.
    pub fn margin(self) -> f64 {
        match self {
            ChartKind::Line | ChartKind::BoxPlot => 12.5,
            ChartKind::Bar | ChartKind::SemBar | ChartKind::Pie => 10.0,
        }
    }

    /// SEM bars and pies only make sense for non-negative values.
    pub fn requires_non_negative(self) -> bool {
        matches!(self, ChartKind::SemBar | ChartKind::Pie)
    }
}

// ---------------------------------------------------------------------------
// Primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Side length of the square point markers.
pub const MARKER_SIZE: f64 = 5.0;
pub const MARKER_COLOR: Color32 = Color32::RED;
pub const STROKE_COLOR: Color32 = Color32::BLACK;

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Square marker centered on `center`.
    Marker { center: Point, color: Color32 },
    Segment {
        from: Point,
        to: Point,
        dashed: bool,
    },
    /// Axis-aligned rectangle; `fill: None` draws an outline only.
    Rect {
        min: Point,
        width: f64,
        height: f64,
        fill: Option<Color32>,
    },
    /// Filled circular sector. Angles in degrees, counter-clockwise from 3 o'clock.
    Sector {
        center: Point,
        radius: f64,
        start_deg: f64,
        sweep_deg: f64,
        color: Color32,
    },
    /// Block of text lines anchored at the canvas origin.
    Label { origin: Point, lines: Vec<String> },
}

impl Primitive {
    fn marker(x: f64, y: f64) -> Self {
        Primitive::Marker {
            center: Point::new(x, y),
            color: MARKER_COLOR,
        }
    }

    fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Primitive::Segment {
            from: Point::new(x1, y1),
            to: Point::new(x2, y2),
            dashed: false,
        }
    }

    fn dashed(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Primitive::Segment {
            from: Point::new(x1, y1),
            to: Point::new(x2, y2),
            dashed: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Viewport and plot area
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Usable plot area after removing the margin on all four sides.
#[derive(Debug, Clone, Copy)]
struct Area {
    margin: f64,
    width: f64,
    height: f64,
}

impl Area {
    fn new(viewport: Viewport, margin: f64) -> Self {
        Area {
            margin,
            width: viewport.width - margin * 2.0,
            height: viewport.height - margin * 2.0,
        }
    }

    fn left(&self) -> f64 {
        self.margin
    }

    fn top(&self) -> f64 {
        self.margin
    }

    fn right(&self) -> f64 {
        self.width + self.margin
    }

    fn bottom(&self) -> f64 {
        self.height + self.margin
    }

    fn center_x(&self) -> f64 {
        self.width / 2.0 + self.margin
    }

    fn center_y(&self) -> f64 {
        self.height / 2.0 + self.margin
    }

    /// Pixel y for `value` normalized into `[min, min + range]`, inverted.
    fn y_for(&self, value: f64, min: f64, range: f64) -> f64 {
        self.height - (value - min) / range * self.height + self.margin
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Everything needed to lay out one chart.
#[derive(Debug, Clone, Copy)]
pub struct ChartInput<'a> {
    pub values: &'a [f64],
    pub kind: ChartKind,
    pub palette: Palette,
    pub viewport: Viewport,
}

/// Lay out the chart. The statistics label is always the last primitive.
/// An empty value slice yields no primitives.
pub fn layout(input: &ChartInput<'_>) -> Vec<Primitive> {
    let Some(summary) = Summary::of(input.values) else {
        return Vec::new();
    };
    let area = Area::new(input.viewport, input.kind.margin());

    let mut prims = match input.kind {
        ChartKind::Line => line::layout(input.values, area),
        ChartKind::Bar => bar::layout(input.values, area, &input.palette),
        ChartKind::SemBar => bar::layout_sem(input.values, area, &input.palette, &summary),
        ChartKind::Pie => pie::layout(input.values, area, &input.palette),
        ChartKind::BoxPlot => box_plot::layout(area, &summary),
    };
    prims.push(Primitive::Label {
        origin: Point::new(0.0, 0.0),
        lines: summary.lines(),
    });
    prims
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PaletteKind;

    fn run(values: &[f64], kind: ChartKind) -> Vec<Primitive> {
        layout(&ChartInput {
            values,
            kind,
            palette: PaletteKind::Rainbow.palette(),
            viewport: Viewport::new(400.0, 300.0),
        })
    }

    #[test]
    fn label_is_always_last() {
        for kind in ChartKind::ALL {
            let prims = run(&[1.0, 0.0, 3.0], kind);
            assert!(
                matches!(prims.last(), Some(Primitive::Label { lines, .. }) if lines.len() == 7),
                "{kind:?}"
            );
        }
    }

    #[test]
    fn empty_input_has_no_primitives() {
        assert!(run(&[], ChartKind::Bar).is_empty());
    }

    #[test]
    fn negative_requirement() {
        assert!(ChartKind::SemBar.requires_non_negative());
        assert!(ChartKind::Pie.requires_non_negative());
        assert!(!ChartKind::Line.requires_non_negative());
        assert!(!ChartKind::Bar.requires_non_negative());
        assert!(!ChartKind::BoxPlot.requires_non_negative());
    }

    #[test]
    fn kind_from_config_text() {
        let kind: ChartKind = serde_json::from_str("\"box_plot\"").unwrap();
        assert_eq!(kind, ChartKind::BoxPlot);
    }
}
