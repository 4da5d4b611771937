use crate::data::stats::Summary;

use super::{Area, Point, Primitive};

/// Height of the quartile box and of the reference line for flat data.
const BOX_HEIGHT: f64 = 70.0;

/// Horizontal box plot centered vertically in the plot area.
pub(super) fn layout(area: Area, summary: &Summary) -> Vec<Primitive> {
    let five = &summary.five;
    let mid_y = area.center_y();
    let top = mid_y - BOX_HEIGHT / 2.0;
    let bottom = mid_y + BOX_HEIGHT / 2.0;
    let range = five.max - five.min;

    if range == 0.0 {
        let x = area.center_x();
        return vec![
            Primitive::marker(x, mid_y),
            Primitive::segment(x, top, x, bottom),
        ];
    }

    let offset = |value: f64| (value - five.min) / range * area.width;
    let lower = offset(five.lower_quartile);
    let upper = offset(five.upper_quartile);
    let median = offset(five.median) + area.left();

    vec![
        Primitive::segment(area.left(), mid_y, lower + area.left(), mid_y),
        Primitive::segment(upper + area.left(), mid_y, area.right(), mid_y),
        Primitive::Rect {
            min: Point::new(lower + area.left(), top),
            width: upper - lower,
            height: BOX_HEIGHT,
            fill: None,
        },
        Primitive::segment(median, top, median, bottom),
        Primitive::marker(area.left(), mid_y),
        Primitive::marker(area.right(), mid_y),
    ]
}
