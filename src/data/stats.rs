// ---------------------------------------------------------------------------
// Descriptive statistics over a dataset
// ---------------------------------------------------------------------------

/// Arithmetic mean. Callers pass a non-empty slice; an empty one yields NaN.
pub fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

/// Standard error of the mean, using the population standard deviation:
/// `sqrt(sum((x - mean)^2) / n) / sqrt(n)`.
pub fn standard_error(data: &[f64]) -> f64 {
    let n = data.len() as f64;
    let m = mean(data);
    let variance = data.iter().map(|x| (x - m).powi(2)).sum::<f64>() / n;
    variance.sqrt() / n.sqrt()
}

/// Min, quartiles, median and max of a dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub lower_quartile: f64,
    pub median: f64,
    pub upper_quartile: f64,
    pub max: f64,
}

/// Compute the five-number summary on a sorted copy of `data`.
///
/// Quartiles are the medians of the lower and upper halves. When the count is
/// odd both halves include the central element. No rank interpolation.
pub fn five_number_summary(data: &[f64]) -> Option<FiveNumberSummary> {
    if data.is_empty() {
        return None;
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    let lower = &sorted[..n.div_ceil(2)];
    let upper = &sorted[n / 2..];

    Some(FiveNumberSummary {
        min: sorted[0],
        lower_quartile: median_of_sorted(lower),
        median: median_of_sorted(&sorted),
        upper_quartile: median_of_sorted(upper),
        max: sorted[n - 1],
    })
}

fn median_of_sorted(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

// ---------------------------------------------------------------------------
// Full summary shown next to every chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub standard_error: f64,
    pub five: FiveNumberSummary,
}

impl Summary {
    pub fn of(data: &[f64]) -> Option<Self> {
        let five = five_number_summary(data)?;
        Some(Summary {
            mean: mean(data),
            standard_error: standard_error(data),
            five,
        })
    }

    /// Label lines in display order, two decimals each.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("mean: {:.2}", self.mean),
            format!("SEM: {:.2}", self.standard_error),
            format!("minimum value: {:.2}", self.five.min),
            format!("lower quartile: {:.2}", self.five.lower_quartile),
            format!("median: {:.2}", self.five.median),
            format!("upper quartile: {:.2}", self.five.upper_quartile),
            format!("maximum value: {:.2}", self.five.max),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn four_values() {
        let data = [1.0, 2.0, 3.0, 4.0];
        assert!(close(mean(&data), 2.5));
        let expected_se = (5.0f64 / 4.0).sqrt() / 2.0;
        assert!(close(standard_error(&data), expected_se));
        assert!((standard_error(&data) - 0.559).abs() < 1e-3);

        let five = five_number_summary(&data).unwrap();
        assert!(close(five.min, 1.0));
        assert!(close(five.lower_quartile, 1.5));
        assert!(close(five.median, 2.5));
        assert!(close(five.upper_quartile, 3.5));
        assert!(close(five.max, 4.0));
    }

    #[test]
    fn odd_count_halves_include_median() {
        let five = five_number_summary(&[5.0, 1.0, 3.0, 2.0, 4.0]).unwrap();
        assert!(close(five.median, 3.0));
        // lower half [1, 2, 3], upper half [3, 4, 5]
        assert!(close(five.lower_quartile, 2.0));
        assert!(close(five.upper_quartile, 4.0));
    }

    #[test]
    fn single_value() {
        let data = [7.25];
        assert!(close(mean(&data), 7.25));
        assert!(close(standard_error(&data), 0.0));
        let five = five_number_summary(&data).unwrap();
        for v in [five.min, five.lower_quartile, five.median, five.upper_quartile, five.max] {
            assert!(close(v, 7.25));
        }
    }

    #[test]
    fn input_is_not_reordered() {
        let data = vec![3.0, -1.0, 2.0];
        let _ = five_number_summary(&data);
        assert_eq!(data, vec![3.0, -1.0, 2.0]);
    }

    #[test]
    fn empty_has_no_summary() {
        assert!(five_number_summary(&[]).is_none());
        assert!(Summary::of(&[]).is_none());
    }

    #[test]
    fn summary_lines_are_two_decimals() {
        let lines = Summary::of(&[1.0, 2.0, 3.0, 4.0]).unwrap().lines();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "mean: 2.50");
        assert_eq!(lines[1], "SEM: 0.56");
        assert_eq!(lines[3], "lower quartile: 1.50");
        assert_eq!(lines[6], "maximum value: 4.00");
    }

    proptest! {
        #[test]
        fn summary_is_ordered(data in prop::collection::vec(-1e6f64..1e6, 1..60)) {
            let s = five_number_summary(&data).unwrap();
            prop_assert!(s.min <= s.lower_quartile);
            prop_assert!(s.lower_quartile <= s.median);
            prop_assert!(s.median <= s.upper_quartile);
            prop_assert!(s.upper_quartile <= s.max);
        }
    }
}
