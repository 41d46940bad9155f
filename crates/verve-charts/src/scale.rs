//! Value-to-pixel scaling for the Cartesian value axis

/// Linear scale mapping data values onto a vertical pixel extent.
///
/// Pixel y grows downward: the data maximum maps to the top of the plot,
/// the minimum to the bottom. The minimum is clamped to zero or below so
/// a zero baseline always lies inside the domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    pub min: f64,
    pub max: f64,
    pub px_per_unit: f64,
    /// Pixel y of the zero baseline
    pub origin_px: f64,
    padding_px: f64,
}

impl ValueScale {
    /// Derive a scale from every value that will share the axis.
    /// Non-finite values are ignored; an empty or flat domain falls back
    /// to a one-unit span so the mapping stays well defined.
    pub fn compute(
        values: impl IntoIterator<Item = f64>,
        plot_extent_px: f64,
        padding_px: f64,
    ) -> Self {
        let mut min = f64::MAX;
        let mut max = f64::MIN;

        for v in values {
            if !v.is_finite() {
                continue;
            }
            min = min.min(v);
            max = max.max(v);
        }

        // Empty sweep
        if min > max {
            min = 0.0;
            max = 0.0;
        }

        min = min.min(0.0);
        if max - min < f64::EPSILON {
            max = min + 1.0;
        }

        let px_per_unit = plot_extent_px / (max - min);
        let mut scale = Self {
            min,
            max,
            px_per_unit,
            origin_px: 0.0,
            padding_px,
        };
        scale.origin_px = scale.y(0.0);
        scale
    }

    /// Pixel y for a data value
    pub fn y(&self, value: f64) -> f64 {
        self.padding_px + (self.max - value) * self.px_per_unit
    }

    /// Value span covered by the axis (always >= 1 unit)
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Evenly spaced `(value, y)` levels from min to max inclusive
    pub fn ticks(&self, count: usize) -> Vec<(f64, f64)> {
        if count <= 1 {
            return vec![(self.min, self.y(self.min))];
        }

        let step = (self.max - self.min) / (count - 1) as f64;
        (0..count)
            .map(|i| {
                let value = self.min + step * i as f64;
                (value, self.y(value))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_scale_maps_extremes() {
        let scale = ValueScale::compute([10.0, 20.0, 30.0], 300.0, 10.0);
        assert_eq!(scale.min, 0.0); // clamped below the data minimum
        assert_eq!(scale.max, 30.0);
        assert_eq!(scale.y(30.0), 10.0);
        assert_eq!(scale.y(0.0), 310.0);
        assert_eq!(scale.origin_px, 310.0);
    }

    #[test]
    fn test_negative_minimum_kept() {
        let scale = ValueScale::compute([-10.0, 20.0], 300.0, 0.0);
        assert_eq!(scale.min, -10.0);
        assert_eq!(scale.max, 20.0);
        assert_eq!(scale.y(-10.0), 300.0);
    }

    #[test]
    fn test_degenerate_all_zero() {
        let scale = ValueScale::compute([0.0, 0.0, 0.0], 200.0, 0.0);
        assert_eq!(scale.min, 0.0);
        assert_eq!(scale.max, 1.0);
        assert_eq!(scale.origin_px, 200.0);
        assert!(scale.px_per_unit.is_finite());
    }

    #[test]
    fn test_degenerate_empty() {
        let scale = ValueScale::compute([], 200.0, 5.0);
        assert_eq!(scale.min, 0.0);
        assert_eq!(scale.max, 1.0);
    }

    #[test]
    fn test_non_finite_ignored() {
        let scale = ValueScale::compute([f64::NAN, 5.0, f64::INFINITY], 100.0, 0.0);
        assert_eq!(scale.max, 5.0);
    }

    #[test]
    fn test_ticks_cover_domain() {
        let scale = ValueScale::compute([0.0, 100.0], 200.0, 0.0);
        let ticks = scale.ticks(5);
        assert_eq!(ticks.len(), 5);
        assert_eq!(ticks[0].0, 0.0);
        assert_eq!(ticks[4].0, 100.0);
        assert_eq!(ticks[2].0, 50.0);
        // pixel positions descend as values rise
        assert!(ticks[0].1 > ticks[4].1);
    }

    #[test]
    fn test_single_tick() {
        let scale = ValueScale::compute([0.0, 10.0], 100.0, 0.0);
        assert_eq!(scale.ticks(1).len(), 1);
    }

    proptest! {
        #[test]
        fn prop_domain_contains_all_data(
            values in proptest::collection::vec(-1e6f64..1e6, 0..50)
        ) {
            let scale = ValueScale::compute(values.iter().copied(), 240.0, 20.0);
            prop_assert!(scale.min <= 0.0);
            prop_assert!(scale.max > scale.min);
            for &v in &values {
                prop_assert!(scale.min <= v);
                prop_assert!(v <= scale.max);
            }
        }

        #[test]
        fn prop_y_is_monotonic(
            a in -1e6f64..1e6,
            b in -1e6f64..1e6
        ) {
            let scale = ValueScale::compute([a, b], 240.0, 20.0);
            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            prop_assert!(scale.y(lo) >= scale.y(hi));
        }
    }
}
