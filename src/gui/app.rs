//! PerfChart Main Application
//! Main window with the interactive chart and PNG export.

use crate::charts::{ChartPlotter, StaticChartRenderer};
use crate::data::ChartDataset;
use anyhow::Context;
use std::path::Path;

/// Main application window.
pub struct PerfChartApp {
    dataset: ChartDataset,
    status: String,
}

impl PerfChartApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            dataset: ChartDataset::default(),
            status: String::new(),
        }
    }

    /// Ask for an output path, render the static chart there, and open
    /// the result with the system viewer.
    fn handle_export_png(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name("performance_comparison.png")
            .save_file()
        else {
            return; // User cancelled
        };

        match Self::export_png(&self.dataset, &path) {
            Ok(()) => {
                self.status = format!("Exported {}", path.display());
            }
            Err(e) => {
                log::error!("export failed: {e:#}");
                self.status = format!("Error: {e:#}");
            }
        }
    }

    fn export_png(dataset: &ChartDataset, path: &Path) -> anyhow::Result<()> {
        StaticChartRenderer::render_to_file(dataset, path, StaticChartRenderer::DEFAULT_SIZE)
            .context("rendering chart")?;
        open::that(path).context("opening exported image")?;
        Ok(())
    }
}

impl eframe::App for PerfChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Algorithm Performance Comparison");
                ui.separator();
                if ui.button("Export PNG").clicked() {
                    self.handle_export_png();
                }
                if !self.status.is_empty() {
                    ui.label(&self.status);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ChartPlotter::draw_bar_chart(ui, &self.dataset);
        });
    }
}
