//! Chart Style Module
//! Hatch patterns, viridis gradient sampling, and the chart theme.

use plotters::style::colors::colormaps::{ColorMap, ViridisRGB};
use plotters::style::RGBColor;

// Theme colors
pub const PLOT_BACKGROUND: RGBColor = RGBColor(240, 248, 255);
pub const AXIS_COLOR: RGBColor = RGBColor(0, 0, 139); // dark blue
pub const TITLE_COLOR: RGBColor = RGBColor(0, 100, 0); // dark green
pub const CATEGORY_LABEL_COLOR: RGBColor = RGBColor(139, 0, 0); // dark red
pub const GRID_COLOR: RGBColor = RGBColor(128, 128, 128);
pub const EDGE_COLOR: RGBColor = RGBColor(0, 0, 0);

/// Opacity applied to bar fills.
pub const BAR_ALPHA: f64 = 0.9;
/// Rotation of the category tick labels, in degrees.
pub const CATEGORY_LABEL_ROTATION: f32 = 15.0;

pub const WATERMARK: &str = "Generated with perfchart";

/// Fill pattern overlaid on a bar for visual distinction independent of
/// color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hatch {
    /// Dense rising diagonals (`//`).
    Slash,
    /// Falling diagonals (`\`).
    Backslash,
    /// Both diagonals (`x`).
    Cross,
    /// Diagonals plus vertical and horizontal lines (`*`).
    Star,
}

impl Hatch {
    /// Pixel spacing between hatch lines. Slash is drawn denser to match
    /// the doubled `//` pattern.
    fn spacing(self) -> i32 {
        match self {
            Hatch::Slash => 6,
            Hatch::Backslash | Hatch::Cross => 10,
            Hatch::Star => 12,
        }
    }
}

/// Per-series styling: hatch pattern plus one gradient position per
/// category slot.
#[derive(Debug, Clone, Copy)]
pub struct SeriesStyle {
    pub hatch: Hatch,
    pub gradient_stops: [f64; 2],
}

const SERIES_STYLES: [SeriesStyle; 4] = [
    SeriesStyle {
        hatch: Hatch::Slash,
        gradient_stops: [0.2, 0.4],
    },
    SeriesStyle {
        hatch: Hatch::Backslash,
        gradient_stops: [0.5, 0.6],
    },
    SeriesStyle {
        hatch: Hatch::Cross,
        gradient_stops: [0.7, 0.8],
    },
    SeriesStyle {
        hatch: Hatch::Star,
        gradient_stops: [0.9, 1.0],
    },
];

/// Style for series `k`, cycling past the built-in four.
pub fn series_style(k: usize) -> SeriesStyle {
    SERIES_STYLES[k % SERIES_STYLES.len()]
}

/// Sample the viridis colormap at position `t` in [0, 1].
pub fn gradient_color(t: f64) -> RGBColor {
    ViridisRGB.get_color(t as f32)
}

/// Fill color for the bar of series `k` at category slot `i`.
pub fn bar_color(k: usize, i: usize) -> RGBColor {
    let style = series_style(k);
    gradient_color(style.gradient_stops[i % style.gradient_stops.len()])
}

/// Same gradient sample as an egui color, for the interactive plot.
pub fn bar_color32(k: usize, i: usize) -> egui::Color32 {
    let c = bar_color(k, i);
    egui::Color32::from_rgb(c.0, c.1, c.2)
}

pub type Segment = ((i32, i32), (i32, i32));

/// Hatch lines for a pixel rectangle, clipped to its bounds.
/// `(x0, y0)` is the top-left corner, `(x1, y1)` the bottom-right.
pub fn hatch_segments(x0: i32, y0: i32, x1: i32, y1: i32, hatch: Hatch) -> Vec<Segment> {
    if x1 <= x0 || y1 <= y0 {
        return Vec::new();
    }

    let spacing = hatch.spacing();
    let mut segments = Vec::new();

    // Rising diagonals: y = c - x
    if matches!(hatch, Hatch::Slash | Hatch::Cross | Hatch::Star) {
        let mut c = x0 + y0 + spacing;
        while c < x1 + y1 {
            let xa = x0.max(c - y1);
            let xb = x1.min(c - y0);
            if xa <= xb {
                segments.push(((xa, c - xa), (xb, c - xb)));
            }
            c += spacing;
        }
    }

    // Falling diagonals: y = x + c
    if matches!(hatch, Hatch::Backslash | Hatch::Cross | Hatch::Star) {
        let mut c = y0 - x1 + spacing;
        while c < y1 - x0 {
            let xa = x0.max(y0 - c);
            let xb = x1.min(y1 - c);
            if xa <= xb {
                segments.push(((xa, xa + c), (xb, xb + c)));
            }
            c += spacing;
        }
    }

    // Vertical and horizontal lines
    if hatch == Hatch::Star {
        let mut x = x0 + spacing;
        while x < x1 {
            segments.push(((x, y0), (x, y1)));
            x += spacing;
        }
        let mut y = y0 + spacing;
        while y < y1 {
            segments.push(((x0, y), (x1, y)));
            y += spacing;
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_styles_match_metric_order() {
        assert_eq!(series_style(0).hatch, Hatch::Slash);
        assert_eq!(series_style(1).hatch, Hatch::Backslash);
        assert_eq!(series_style(2).hatch, Hatch::Cross);
        assert_eq!(series_style(3).hatch, Hatch::Star);
        assert_eq!(series_style(0).gradient_stops, [0.2, 0.4]);
        assert_eq!(series_style(3).gradient_stops, [0.9, 1.0]);
        // cycles past the built-in four
        assert_eq!(series_style(4).hatch, Hatch::Slash);
    }

    #[test]
    fn gradient_endpoints_differ() {
        assert_ne!(gradient_color(0.0), gradient_color(1.0));
        assert_ne!(bar_color(0, 0), bar_color(0, 1));
    }

    #[test]
    fn hatch_segments_stay_inside_rect() {
        let (x0, y0, x1, y1) = (10, 20, 50, 120);
        for hatch in [Hatch::Slash, Hatch::Backslash, Hatch::Cross, Hatch::Star] {
            let segments = hatch_segments(x0, y0, x1, y1, hatch);
            assert!(!segments.is_empty(), "{hatch:?} produced no lines");
            for ((ax, ay), (bx, by)) in segments {
                for (x, y) in [(ax, ay), (bx, by)] {
                    assert!(x >= x0 && x <= x1, "{hatch:?}: x={x} outside");
                    assert!(y >= y0 && y <= y1, "{hatch:?}: y={y} outside");
                }
            }
        }
    }

    #[test]
    fn slash_is_denser_than_backslash() {
        let slash = hatch_segments(0, 0, 40, 80, Hatch::Slash).len();
        let backslash = hatch_segments(0, 0, 40, 80, Hatch::Backslash).len();
        assert!(slash > backslash);
    }

    #[test]
    fn degenerate_rect_has_no_hatch() {
        assert!(hatch_segments(10, 10, 10, 40, Hatch::Cross).is_empty());
        assert!(hatch_segments(10, 40, 30, 40, Hatch::Star).is_empty());
    }
}
