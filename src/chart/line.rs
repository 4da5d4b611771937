use super::{Area, Primitive};

/// Markers joined by segments, spaced evenly across the plot width.
pub(super) fn layout(values: &[f64], area: Area) -> Vec<Primitive> {
    if values.len() == 1 {
        return vec![Primitive::marker(area.center_x(), area.bottom())];
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    let separation = area.width / (values.len() - 1) as f64;

    let points: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = i as f64 * separation + area.left();
            // Flat data sits on the bottom edge.
            let y = if range == 0.0 {
                area.bottom()
            } else {
                area.y_for(v, min, range)
            };
            (x, y)
        })
        .collect();

    let mut prims = Vec::with_capacity(points.len() * 2);
    for (i, &(x, y)) in points.iter().enumerate() {
        prims.push(Primitive::marker(x, y));
        if let Some(&(nx, ny)) = points.get(i + 1) {
            prims.push(Primitive::segment(x, y, nx, ny));
        }
    }
    prims
}

#[cfg(test)]
mod tests {
    use super::super::{Point, Viewport};
    use super::*;

    fn area() -> Area {
        Area::new(Viewport::new(225.0, 125.0), 12.5)
    }

    #[test]
    fn single_value_is_one_marker_at_bottom_middle() {
        let prims = layout(&[3.0], area());
        assert_eq!(prims.len(), 1);
        match &prims[0] {
            Primitive::Marker { center, .. } => assert_eq!(*center, Point::new(112.5, 112.5)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn points_span_width_and_invert_y() {
        // usable area is 200 x 100
        let prims = layout(&[1.0, 2.0, 3.0], area());
        let markers: Vec<Point> = prims
            .iter()
            .filter_map(|p| match p {
                Primitive::Marker { center, .. } => Some(*center),
                _ => None,
            })
            .collect();
        assert_eq!(
            markers,
            vec![
                Point::new(12.5, 112.5),
                Point::new(112.5, 62.5),
                Point::new(212.5, 12.5)
            ]
        );
        let segments = prims
            .iter()
            .filter(|p| matches!(p, Primitive::Segment { .. }))
            .count();
        assert_eq!(segments, 2);
    }

    #[test]
    fn flat_data_sits_on_bottom() {
        let prims = layout(&[4.0, 4.0, 4.0, 4.0], area());
        for p in &prims {
            if let Primitive::Marker { center, .. } = p {
                assert_eq!(center.y, 112.5);
            }
        }
    }
}
