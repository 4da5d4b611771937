use crate::color::Palette;

use super::{Area, Point, Primitive};

/// One sector per non-zero entry, swept in order from 0°.
pub(super) fn layout(values: &[f64], area: Area, palette: &Palette) -> Vec<Primitive> {
    let sum: f64 = values.iter().sum();
    if sum == 0.0 {
        return Vec::new();
    }

    let center = Point::new(area.center_x(), area.center_y());
    let radius = area.width.min(area.height) / 2.0;

    let mut start = 0.0;
    let mut prims = Vec::with_capacity(values.len());
    for (i, &v) in values.iter().enumerate() {
        if v == 0.0 {
            continue;
        }
        let sweep = v / sum * 360.0;
        prims.push(Primitive::Sector {
            center,
            radius,
            start_deg: start,
            sweep_deg: sweep,
            color: palette.color_for(i),
        });
        start += sweep;
    }
    prims
}
