//! Data module - Chart dataset definitions

mod model;

pub use model::{ChartDataset, DatasetError, MetricSeries};
