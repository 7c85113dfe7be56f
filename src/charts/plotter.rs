//! Chart Plotter Module
//! Interactive grouped bar chart using egui_plot.

use crate::charts::layout::{annotation, GroupedBarLayout};
use crate::charts::style;
use crate::data::ChartDataset;
use egui::{Align2, Color32, RichText, Stroke};
use egui_plot::{Bar, BarChart, Corner, GridMark, Legend, Plot, PlotPoint, Text};

/// Draws the interactive chart view.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw the grouped bar chart with annotations and a legend.
    /// Bar positions come from the same layout the static renderer uses.
    pub fn draw_bar_chart(ui: &mut egui::Ui, dataset: &ChartDataset) {
        let layout = GroupedBarLayout::new(dataset.series().len(), dataset.categories().len());
        let x_range = layout.x_range();
        let y_range = layout.y_range(dataset.max_value());

        let ticks: Vec<f64> = (0..dataset.categories().len())
            .map(|i| layout.tick_x(i))
            .collect();
        let labels: Vec<String> = dataset.categories().to_vec();
        let spacer_ticks = ticks.clone();

        Plot::new("perf_bar_chart")
            .legend(Legend::default().position(Corner::LeftTop))
            .allow_scroll(false)
            .x_axis_label("Comparison Algorithms")
            .y_axis_label("Performance Value (%)")
            .include_x(x_range.start)
            .include_x(x_range.end)
            .include_y(0.0)
            .include_y(y_range.end)
            .clamp_grid(true)
            // Only the group centers get x-axis marks
            .x_grid_spacer(move |_input| {
                spacer_ticks
                    .iter()
                    .map(|&value| GridMark {
                        value,
                        step_size: 1.0,
                    })
                    .collect()
            })
            .x_axis_formatter(move |mark, _range| {
                ticks
                    .iter()
                    .position(|&t| (mark.value - t).abs() < 1e-6)
                    .and_then(|i| labels.get(i).cloned())
                    .unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                for (k, series) in dataset.series().iter().enumerate() {
                    let bars: Vec<Bar> = series
                        .values
                        .iter()
                        .enumerate()
                        .map(|(i, &value)| {
                            Bar::new(layout.bar_x(k, i), value)
                                .width(layout.bar_width())
                                .fill(style::bar_color32(k, i))
                                .stroke(Stroke::new(1.0, Color32::BLACK))
                        })
                        .collect();

                    plot_ui.bar_chart(
                        BarChart::new(bars)
                            .name(&series.label)
                            .color(style::bar_color32(k, 0)),
                    );

                    for (i, &value) in series.values.iter().enumerate() {
                        plot_ui.text(
                            Text::new(
                                PlotPoint::new(layout.bar_x(k, i), value),
                                RichText::new(annotation(value)).strong().size(11.0),
                            )
                            .anchor(Align2::CENTER_BOTTOM)
                            .color(Color32::BLACK),
                        );
                    }
                }
            });
    }
}
