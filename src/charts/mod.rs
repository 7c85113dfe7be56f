//! Charts module - Chart layout, styling and rendering

pub mod layout;
mod plotter;
mod renderer;
pub mod style;

pub use plotter::ChartPlotter;
pub use renderer::{RenderError, StaticChartRenderer};
