//! PerfChart - Algorithm Performance Comparison Chart
//!
//! Shows a grouped bar chart comparing SVM and DT across four performance
//! metrics, with styled PNG export.

mod charts;
mod data;
mod gui;

use eframe::egui;
use gui::PerfChartApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("PerfChart"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "PerfChart",
        options,
        Box::new(|cc| Ok(Box::new(PerfChartApp::new(cc)))),
    )
}
