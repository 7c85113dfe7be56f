//! Grouped Bar Layout Module
//! Computes bar x-positions, category tick positions, and annotation text.
//! Everything here is pure so the chart geometry is testable without a
//! display surface.

use std::ops::Range;

/// Width of a single bar in category units.
pub const BAR_WIDTH: f64 = 0.20;
/// Gap between adjacent bars within a group.
pub const BAR_GAP: f64 = 0.05;

/// Derived layout for a grouped bar chart: categories sit at integer
/// x-positions, and each series is shifted right by one bar slot.
#[derive(Debug, Clone, Copy)]
pub struct GroupedBarLayout {
    n_series: usize,
    n_categories: usize,
    bar_width: f64,
    bar_gap: f64,
}

impl GroupedBarLayout {
    pub fn new(n_series: usize, n_categories: usize) -> Self {
        Self {
            n_series,
            n_categories,
            bar_width: BAR_WIDTH,
            bar_gap: BAR_GAP,
        }
    }

    pub fn bar_width(&self) -> f64 {
        self.bar_width
    }

    fn slot(&self) -> f64 {
        self.bar_width + self.bar_gap
    }

    /// X-center of the bar for series `k` within category `i`.
    pub fn bar_x(&self, series: usize, category: usize) -> f64 {
        debug_assert!(series < self.n_series && category < self.n_categories);
        category as f64 + series as f64 * self.slot()
    }

    /// X-position of the tick label for category `i`, centered under the
    /// group of bars.
    pub fn tick_x(&self, category: usize) -> f64 {
        category as f64 + (self.n_series - 1) as f64 / 2.0 * self.slot()
    }

    /// Horizontal span of the plot, with half a category of padding on
    /// either side of the outermost bars.
    pub fn x_range(&self) -> Range<f64> {
        let left = -self.bar_width;
        let right = self.bar_x(self.n_series - 1, self.n_categories - 1) + self.bar_width * 2.0;
        left..right
    }

    /// Vertical span of the plot, leaving headroom above the tallest bar
    /// for its annotation.
    pub fn y_range(&self, max_value: f64) -> Range<f64> {
        let top = if max_value.is_finite() && max_value > 0.0 {
            (max_value * 1.12).ceil()
        } else {
            100.0
        };
        0.0..top
    }
}

/// Annotation drawn above each bar: the bar height to one decimal place,
/// as a percentage.
pub fn annotation(value: f64) -> String {
    format!("{value:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> GroupedBarLayout {
        GroupedBarLayout::new(4, 2)
    }

    #[test]
    fn bar_positions_step_by_quarter() {
        let l = layout();
        for k in 0..4 {
            for i in 0..2 {
                let expected = i as f64 + k as f64 * 0.25;
                assert!((l.bar_x(k, i) - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn ticks_centered_under_groups() {
        let l = layout();
        assert!((l.tick_x(0) - 0.375).abs() < 1e-12);
        assert!((l.tick_x(1) - 1.375).abs() < 1e-12);
    }

    #[test]
    fn annotation_has_one_decimal_and_percent() {
        assert_eq!(annotation(78.41), "78.4%");
        assert_eq!(annotation(98.0), "98.0%");
        assert_eq!(annotation(93.6), "93.6%");
    }

    #[test]
    fn builtin_scenario_corner_bars() {
        // 4 series x 2 categories = 8 bars; first and last per the data.
        let l = layout();
        assert_eq!(l.bar_x(0, 0), 0.0); // (Accuracy, SVM)
        assert_eq!(l.bar_x(3, 1), 1.75); // (FScore, DT)
        assert_eq!(annotation(78.41), "78.4%");
        assert_eq!(annotation(93.6), "93.6%");
    }

    #[test]
    fn ranges_cover_all_bars() {
        let l = layout();
        let x = l.x_range();
        assert!(x.start < l.bar_x(0, 0) - BAR_WIDTH / 2.0);
        assert!(x.end > l.bar_x(3, 1) + BAR_WIDTH / 2.0);

        let y = l.y_range(99.0);
        assert_eq!(y.start, 0.0);
        assert!(y.end > 99.0);
    }
}
