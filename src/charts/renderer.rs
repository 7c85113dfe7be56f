//! Static Chart Renderer
//! Draws the grouped bar chart on any plotters backend.
//!
//! Layout:
//! 1. Title centered above the plot
//! 2. Bars grouped per category, viridis fills, black edges, hatch overlays
//! 3. Bold percentage annotation above every bar
//! 4. Rotated category labels under each group, legend upper-left,
//!    dashed y-grid, watermark under the axis

use crate::charts::layout::{annotation, GroupedBarLayout};
use crate::charts::style::{self, hatch_segments};
use crate::data::ChartDataset;
use plotters::coord::Shift;
use plotters::element::DashedPathElement;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle, FontTransform};
use std::path::Path;
use thiserror::Error;

/// Spacing of the dashed horizontal grid lines, in percent.
const GRID_STEP: f64 = 20.0;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("chart drawing failed: {0}")]
    Draw(String),
}

fn draw_err<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Draw(e.to_string())
}

/// Renders chart images for export and headless use.
pub struct StaticChartRenderer;

impl StaticChartRenderer {
    pub const DEFAULT_SIZE: (u32, u32) = (1200, 800);

    /// Render the chart to a PNG file.
    pub fn render_to_file(
        dataset: &ChartDataset,
        path: &Path,
        size: (u32, u32),
    ) -> Result<(), RenderError> {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        Self::draw(dataset, &root)?;
        root.present().map_err(draw_err)?;
        log::info!("chart written to {}", path.display());
        Ok(())
    }

    /// Render the chart into a raw RGB byte buffer (3 bytes per pixel).
    pub fn render_to_rgb_buffer(
        dataset: &ChartDataset,
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, RenderError> {
        let mut buf = vec![0u8; (width * height * 3) as usize];
        {
            let root =
                BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
            Self::draw(dataset, &root)?;
            root.present().map_err(draw_err)?;
        }
        Ok(buf)
    }

    /// Draw the full chart on a drawing area. Backend-agnostic; the
    /// callers above pick file or in-memory bitmap targets.
    pub fn draw<DB: DrawingBackend>(
        dataset: &ChartDataset,
        root: &DrawingArea<DB, Shift>,
    ) -> Result<(), RenderError> {
        let layout = GroupedBarLayout::new(dataset.series().len(), dataset.categories().len());
        let x_range = layout.x_range();
        let y_range = layout.y_range(dataset.max_value());

        root.fill(&WHITE).map_err(draw_err)?;

        let mut chart = ChartBuilder::on(root)
            .caption(
                "Performance Comparison of Algorithms",
                FontDesc::new(FontFamily::SansSerif, 28.0, FontStyle::Bold)
                    .color(&style::TITLE_COLOR),
            )
            .margin(20)
            .x_label_area_size(70)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range.clone(), y_range.clone())
            .map_err(draw_err)?;

        chart
            .plotting_area()
            .fill(&style::PLOT_BACKGROUND)
            .map_err(draw_err)?;

        // Left and bottom spines only; category labels are drawn manually
        // at the group tick positions, so the mesh renders no x labels.
        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_labels(0)
            .y_labels(6)
            .axis_style(style::AXIS_COLOR.stroke_width(2))
            .label_style(
                FontDesc::new(FontFamily::SansSerif, 14.0, FontStyle::Normal).color(&BLACK),
            )
            .x_desc("Comparison Algorithms")
            .y_desc("Performance Value (%)")
            .axis_desc_style(
                FontDesc::new(FontFamily::SansSerif, 20.0, FontStyle::Bold)
                    .color(&style::AXIS_COLOR),
            )
            .draw()
            .map_err(draw_err)?;

        // Dashed horizontal grid
        chart
            .draw_series(
                (1..)
                    .map(|n| n as f64 * GRID_STEP)
                    .take_while(|y| *y < y_range.end)
                    .map(|y| {
                        DashedPathElement::new(
                            vec![(x_range.start, y), (x_range.end, y)],
                            8,
                            6,
                            style::GRID_COLOR.mix(0.5),
                        )
                    }),
            )
            .map_err(draw_err)?;

        // Bars: viridis fill at 0.9 alpha plus a black edge, one legend
        // entry per series.
        let half = layout.bar_width() / 2.0;
        for (k, series) in dataset.series().iter().enumerate() {
            let legend_color = style::gradient_color(style::series_style(k).gradient_stops[0]);
            chart
                .draw_series(series.values.iter().enumerate().flat_map(|(i, &value)| {
                    let x = layout.bar_x(k, i);
                    let corners = [(x - half, 0.0), (x + half, value)];
                    let fill = style::bar_color(k, i).mix(style::BAR_ALPHA).filled();
                    [
                        Rectangle::new(corners, fill),
                        Rectangle::new(corners, style::EDGE_COLOR.stroke_width(1)),
                    ]
                }))
                .map_err(draw_err)?
                .label(series.label.clone())
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 6), (x + 14, y + 6)], legend_color.filled())
                });
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.9))
            .border_style(style::EDGE_COLOR)
            .label_font(
                FontDesc::new(FontFamily::SansSerif, 15.0, FontStyle::Normal).color(&BLACK),
            )
            .draw()
            .map_err(draw_err)?;

        // Hatch overlays and annotations are positioned in pixel space via
        // the chart's coordinate mapping.
        let annotation_style = FontDesc::new(FontFamily::SansSerif, 13.0, FontStyle::Bold)
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Bottom));

        for (k, series) in dataset.series().iter().enumerate() {
            let hatch = style::series_style(k).hatch;
            for (i, &value) in series.values.iter().enumerate() {
                let x = layout.bar_x(k, i);
                let (px0, py0) = chart.backend_coord(&(x - half, value));
                let (px1, py1) = chart.backend_coord(&(x + half, 0.0));
                for (a, b) in hatch_segments(px0, py0, px1, py1, hatch) {
                    root.draw(&PathElement::new(vec![a, b], style::EDGE_COLOR.mix(0.6)))
                        .map_err(draw_err)?;
                }

                let (cx, cy) = chart.backend_coord(&(x, value));
                root.draw(&Text::new(
                    annotation(value),
                    (cx, cy - 5),
                    annotation_style.clone(),
                ))
                .map_err(draw_err)?;
            }
        }

        // Category tick labels, rotated and centered under each group
        let tick_style = FontDesc::new(FontFamily::SansSerif, 16.0, FontStyle::Bold)
            .transform(FontTransform::RotateAngle(style::CATEGORY_LABEL_ROTATION))
            .color(&style::CATEGORY_LABEL_COLOR)
            .pos(Pos::new(HPos::Center, VPos::Top));
        for (i, label) in dataset.categories().iter().enumerate() {
            let (px, py) = chart.backend_coord(&(layout.tick_x(i), 0.0));
            root.draw(&Text::new(label.clone(), (px, py + 8), tick_style.clone()))
                .map_err(draw_err)?;
        }

        // Watermark under the axis
        let watermark_style = FontDesc::new(FontFamily::SansSerif, 15.0, FontStyle::Normal)
            .color(&style::GRID_COLOR.mix(0.5))
            .pos(Pos::new(HPos::Center, VPos::Top));
        let (wx, wy) = chart.backend_coord(&((x_range.start + x_range.end) / 2.0, 0.0));
        root.draw(&Text::new(style::WATERMARK, (wx, wy + 42), watermark_style))
            .map_err(draw_err)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ChartDataset;

    #[test]
    fn render_to_buffer_is_idempotent() {
        let ds = ChartDataset::default();
        let a = StaticChartRenderer::render_to_rgb_buffer(&ds, 600, 400).unwrap();
        let b = StaticChartRenderer::render_to_rgb_buffer(&ds, 600, 400).unwrap();
        assert_eq!(a.len(), 600 * 400 * 3);
        assert_eq!(a, b);
    }

    #[test]
    fn outer_margin_is_white() {
        let ds = ChartDataset::default();
        let buf = StaticChartRenderer::render_to_rgb_buffer(&ds, 600, 400).unwrap();
        assert_eq!(&buf[0..3], &[255, 255, 255]);
    }

    #[test]
    fn exported_png_decodes_with_expected_dimensions() {
        let path = std::env::temp_dir().join("perfchart_render_test.png");
        StaticChartRenderer::render_to_file(&ChartDataset::default(), &path, (640, 480))
            .unwrap();
        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (640, 480));
        std::fs::remove_file(&path).ok();
    }
}
