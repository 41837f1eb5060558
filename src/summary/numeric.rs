//! Numeric summary statistics

use serde::Serialize;
use statrs::statistics::{Data, Distribution, Max, Median, Min};

/// Summary statistics for a numeric column
///
/// Moments that are undefined for the input (the standard deviation of fewer
/// than two values, anything over zero values) are `NaN`, never an error.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NumericStats {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl PartialEq for NumericStats {
    fn eq(&self, other: &Self) -> bool {
        let fields = |s: &Self| [s.mean, s.median, s.std_dev, s.min, s.max];
        fields(self)
            .iter()
            .zip(fields(other).iter())
            .all(|(a, b)| a.to_bits() == b.to_bits() || a == b)
    }
}

/// Describe the non-null values of a numeric column
pub fn describe(values: Vec<f64>) -> NumericStats {
    if values.is_empty() {
        return NumericStats {
            mean: f64::NAN,
            median: f64::NAN,
            std_dev: f64::NAN,
            min: f64::NAN,
            max: f64::NAN,
        };
    }

    let data = Data::new(values);
    NumericStats {
        mean: data.mean().unwrap_or(f64::NAN),
        median: data.median(),
        // Sample standard deviation; NaN below two values
        std_dev: data.std_dev().unwrap_or(f64::NAN),
        min: data.min(),
        max: data.max(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_basic() {
        let stats = describe(vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(stats.mean, 2.5);
        assert_eq!(stats.median, 2.5);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 4.0);
        // Sample variance of [1,2,3,4] is 5/3
        assert!((stats.std_dev - (5.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_describe_odd_count_median() {
        let stats = describe(vec![3.0, 1.0, 2.0]);
        assert_eq!(stats.median, 2.0);
    }

    #[test]
    fn test_single_value_has_nan_std_dev() {
        let stats = describe(vec![7.0]);
        assert_eq!(stats.mean, 7.0);
        assert_eq!(stats.median, 7.0);
        assert_eq!(stats.min, 7.0);
        assert_eq!(stats.max, 7.0);
        assert!(stats.std_dev.is_nan());
    }

    #[test]
    fn test_no_values_is_all_nan() {
        let stats = describe(Vec::new());
        assert!(stats.mean.is_nan());
        assert!(stats.median.is_nan());
        assert!(stats.std_dev.is_nan());
        assert!(stats.min.is_nan());
        assert!(stats.max.is_nan());
    }

    #[test]
    fn test_mean_within_min_max() {
        let stats = describe(vec![2.0, 9.0, 4.0, 4.0, 5.5]);
        assert!(stats.min <= stats.mean && stats.mean <= stats.max);
        assert!(stats.min <= stats.median && stats.median <= stats.max);
    }
}
