//! Grouped bar geometry for bar charts

use crate::scale::ValueScale;
use serde::{Deserialize, Serialize};
use verve_core::Series;

/// Fraction of its slot share that a bar actually fills
pub const BAR_WIDTH_RATIO: f64 = 0.8;

/// One bar rectangle, placed sign-aware against the zero baseline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarRect {
    pub category_index: usize,
    pub dataset_index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarRect {
    /// Pixel y of the bar edge touching the baseline's far side
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Build grouped bar rectangles.
///
/// Each category owns an equal slot of the plot width, split evenly
/// between datasets; a bar fills `BAR_WIDTH_RATIO` of its share,
/// centered. Positive bars rise from the zero baseline, negative bars
/// hang below it. Values with no category slot and non-finite values
/// produce no bar.
pub fn build_bars(
    datasets: &[Series],
    scale: &ValueScale,
    category_count: usize,
    plot_width_px: f64,
    plot_left_px: f64,
) -> Vec<BarRect> {
    if datasets.is_empty() || category_count == 0 {
        return Vec::new();
    }

    let slot = plot_width_px / category_count as f64;
    let share = slot / datasets.len() as f64;
    let width = share * BAR_WIDTH_RATIO;
    let inset = (share - width) / 2.0;

    let mut bars = Vec::with_capacity(datasets.len() * category_count);
    for (dataset_index, series) in datasets.iter().enumerate() {
        for (category_index, &value) in series.values.iter().enumerate() {
            if category_index >= category_count || !value.is_finite() {
                continue;
            }

            let x = plot_left_px
                + category_index as f64 * slot
                + dataset_index as f64 * share
                + inset;
            let height = value.abs() * scale.px_per_unit;
            let y = if value >= 0.0 {
                scale.origin_px - height
            } else {
                scale.origin_px
            };

            bars.push(BarRect {
                category_index,
                dataset_index,
                x,
                y,
                width,
                height,
            });
        }
    }

    bars
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn series(values: &[f64]) -> Series {
        Series::new("s", values.to_vec())
    }

    #[test]
    fn test_sign_aware_placement() {
        let scale = ValueScale::compute([10.0, -5.0, 3.0], 200.0, 0.0);
        let bars = build_bars(&[series(&[10.0, -5.0, 3.0])], &scale, 3, 300.0, 0.0);
        assert_eq!(bars.len(), 3);

        // positive bars end at the baseline
        assert_eq!(bars[0].bottom(), scale.origin_px);
        assert_eq!(bars[0].y, scale.origin_px - bars[0].height);
        // negative bars start at the baseline
        assert_eq!(bars[1].y, scale.origin_px);
        assert!(bars[1].height > 0.0);
        assert_eq!(bars[2].bottom(), scale.origin_px);
    }

    #[test]
    fn test_slot_layout() {
        let scale = ValueScale::compute([1.0], 100.0, 0.0);
        let datasets = [series(&[1.0, 1.0, 1.0]), series(&[1.0, 1.0, 1.0])];
        let bars = build_bars(&datasets, &scale, 3, 300.0, 0.0);
        assert_eq!(bars.len(), 6);

        // slot 100, share 50, width 40, inset 5
        assert_eq!(bars[0].width, 40.0);
        assert_eq!(bars[0].x, 5.0);   // dataset 0, category 0
        assert_eq!(bars[3].x, 55.0);  // dataset 1, category 0
        assert_eq!(bars[1].x, 105.0); // dataset 0, category 1
    }

    #[test]
    fn test_plot_left_offsets_x() {
        let scale = ValueScale::compute([1.0], 100.0, 0.0);
        let bars = build_bars(&[series(&[1.0])], &scale, 1, 100.0, 50.0);
        assert_eq!(bars[0].x, 60.0);
    }

    #[test]
    fn test_values_beyond_categories_dropped() {
        let scale = ValueScale::compute([1.0, 2.0, 3.0, 4.0], 100.0, 0.0);
        let bars = build_bars(&[series(&[1.0, 2.0, 3.0, 4.0])], &scale, 2, 100.0, 0.0);
        assert_eq!(bars.len(), 2);
    }

    #[test]
    fn test_short_series_leaves_gaps() {
        let scale = ValueScale::compute([1.0], 100.0, 0.0);
        let bars = build_bars(&[series(&[1.0])], &scale, 4, 100.0, 0.0);
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].category_index, 0);
    }

    #[test]
    fn test_non_finite_values_skipped() {
        let scale = ValueScale::compute([1.0, 2.0], 100.0, 0.0);
        let bars = build_bars(&[series(&[1.0, f64::NAN, 2.0])], &scale, 3, 100.0, 0.0);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[1].category_index, 2);
    }

    #[test]
    fn test_empty_inputs() {
        let scale = ValueScale::compute([], 100.0, 0.0);
        assert!(build_bars(&[], &scale, 3, 100.0, 0.0).is_empty());
        assert!(build_bars(&[series(&[1.0])], &scale, 0, 100.0, 0.0).is_empty());
    }

    #[test]
    fn test_zero_value_sits_on_baseline() {
        let scale = ValueScale::compute([0.0, 5.0], 100.0, 0.0);
        let bars = build_bars(&[series(&[0.0])], &scale, 1, 100.0, 0.0);
        assert_eq!(bars[0].height, 0.0);
        assert_eq!(bars[0].y, scale.origin_px);
    }

    proptest! {
        #[test]
        fn prop_bars_stay_inside_plot(
            values in proptest::collection::vec(-1e4f64..1e4, 1..12),
            category_count in 1usize..12,
            plot_width in 10.0f64..1000.0
        ) {
            let scale = ValueScale::compute(values.iter().copied(), 200.0, 0.0);
            let bars = build_bars(&[series(&values)], &scale, category_count, plot_width, 0.0);
            for bar in &bars {
                prop_assert!(bar.height >= 0.0);
                prop_assert!(bar.width > 0.0);
                prop_assert!(bar.x >= 0.0);
                prop_assert!(bar.x + bar.width <= plot_width + 1e-9);
            }
        }
    }
}
