use crate::color::Palette;
use crate::data::stats::Summary;

use super::{Area, Point, Primitive};

/// Width of one bar; bars and gaps alternate across the plot width.
fn bar_width(area: &Area, count: usize) -> f64 {
    area.width / (count * 2 - 1) as f64
}

fn bar_height(value: f64, range: f64, area: &Area) -> f64 {
    if range != 0.0 {
        value.abs() / range * area.height
    } else {
        area.height
    }
}

fn bar(i: usize, top: f64, width: f64, height: f64, area: &Area, palette: &Palette) -> Primitive {
    Primitive::Rect {
        min: Point::new(2.0 * i as f64 * width + area.left(), top),
        width,
        height,
        fill: Some(palette.color_for(i)),
    }
}

/// Bars rising above or hanging below a zero line.
pub(super) fn layout(values: &[f64], area: Area, palette: &Palette) -> Vec<Primitive> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min).min(0.0);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max).max(0.0);
    let range = max - min;

    let zero_y = if range != 0.0 {
        area.y_for(0.0, min, range)
    } else {
        area.bottom()
    };
    let width = bar_width(&area, values.len());

    let mut prims = Vec::with_capacity(values.len() + 1);
    for (i, &v) in values.iter().enumerate() {
        if v == 0.0 {
            continue;
        }
        let height = bar_height(v, range, &area);
        let top = if v > 0.0 { zero_y - height } else { zero_y };
        prims.push(bar(i, top, width, height, &area, palette));
    }
    prims.push(Primitive::segment(area.left(), zero_y, area.right(), zero_y));
    prims
}

/// Bars on the bottom edge with the mean and mean ± SEM drawn across.
///
/// Values are expected to be non-negative; the scale runs from 0 to the max.
pub(super) fn layout_sem(
    values: &[f64],
    area: Area,
    palette: &Palette,
    summary: &Summary,
) -> Vec<Primitive> {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max;
    let width = bar_width(&area, values.len());

    let mut prims = Vec::with_capacity(values.len() + 4);
    let mut all_zero = true;
    for (i, &v) in values.iter().enumerate() {
        if v == 0.0 {
            continue;
        }
        all_zero = false;
        let height = bar_height(v, range, &area);
        prims.push(bar(i, area.bottom() - height, width, height, &area, palette));
    }
    prims.push(Primitive::segment(area.left(), area.bottom(), area.right(), area.bottom()));
    if all_zero {
        return prims;
    }

    let level = |value: f64| {
        if range != 0.0 {
            area.y_for(value, 0.0, range)
        } else {
            area.top()
        }
    };
    let mean_y = level(summary.mean);
    let upper_y = level(summary.mean + summary.standard_error);
    let lower_y = level(summary.mean - summary.standard_error);

    prims.push(Primitive::segment(area.left(), mean_y, area.right(), mean_y));
    prims.push(Primitive::dashed(area.left(), upper_y, area.right(), upper_y));
    prims.push(Primitive::dashed(area.left(), lower_y, area.right(), lower_y));
    prims
}
