//! Chart Dataset Module
//! Fixed metric series and category labels for the comparison chart.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("series '{series}' has {actual} values, expected {expected}")]
    SeriesLengthMismatch {
        series: String,
        expected: usize,
        actual: usize,
    },
    #[error("dataset has no series")]
    NoSeries,
    #[error("dataset has no categories")]
    NoCategories,
}

/// A named metric with one value per category.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSeries {
    pub label: String,
    pub values: Vec<f64>,
}

impl MetricSeries {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }
}

/// Category labels plus the metric series measured over them.
/// Built once from literals and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataset {
    categories: Vec<String>,
    series: Vec<MetricSeries>,
}

impl ChartDataset {
    /// Build a dataset, checking that every series carries exactly one
    /// value per category.
    pub fn new(
        categories: Vec<String>,
        series: Vec<MetricSeries>,
    ) -> Result<Self, DatasetError> {
        if categories.is_empty() {
            return Err(DatasetError::NoCategories);
        }
        if series.is_empty() {
            return Err(DatasetError::NoSeries);
        }
        for s in &series {
            if s.values.len() != categories.len() {
                return Err(DatasetError::SeriesLengthMismatch {
                    series: s.label.clone(),
                    expected: categories.len(),
                    actual: s.values.len(),
                });
            }
        }
        Ok(Self { categories, series })
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn series(&self) -> &[MetricSeries] {
        &self.series
    }

    /// Largest value across all series. NaN values are skipped.
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .filter(|v| !v.is_nan())
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

impl Default for ChartDataset {
    /// The built-in SVM vs. DT comparison data.
    fn default() -> Self {
        Self::new(
            vec!["SVM".to_string(), "DT".to_string()],
            vec![
                MetricSeries::new("Accuracy", vec![78.41, 98.0]),
                MetricSeries::new("Precision", vec![99.0, 95.2]),
                MetricSeries::new("Recall", vec![79.2, 92.6]),
                MetricSeries::new("FScore", vec![87.5, 93.6]),
            ],
        )
        .expect("built-in dataset is well formed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dataset_shape() {
        let ds = ChartDataset::default();
        assert_eq!(ds.categories(), &["SVM".to_string(), "DT".to_string()]);
        assert_eq!(ds.series().len(), 4);
        for s in ds.series() {
            assert_eq!(s.values.len(), 2);
        }
        assert_eq!(ds.series()[0].label, "Accuracy");
        assert_eq!(ds.series()[0].values[0], 78.41);
        assert_eq!(ds.series()[3].values[1], 93.6);
    }

    #[test]
    fn max_value_of_default_data() {
        let ds = ChartDataset::default();
        assert_eq!(ds.max_value(), 99.0);
    }

    #[test]
    fn mismatched_series_rejected() {
        let err = ChartDataset::new(
            vec!["SVM".to_string(), "DT".to_string()],
            vec![MetricSeries::new("Accuracy", vec![78.41])],
        )
        .unwrap_err();
        match err {
            DatasetError::SeriesLengthMismatch {
                series,
                expected,
                actual,
            } => {
                assert_eq!(series, "Accuracy");
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_dataset_rejected() {
        assert!(matches!(
            ChartDataset::new(vec!["SVM".to_string()], vec![]),
            Err(DatasetError::NoSeries)
        ));
        assert!(matches!(
            ChartDataset::new(vec![], vec![MetricSeries::new("Accuracy", vec![])]),
            Err(DatasetError::NoCategories)
        ));
    }
}
