//! Descriptive statistics over `f64` datasets.

/// Arithmetic mean of `values`.
///
/// Returns `f64::NAN` for an empty slice; callers that cannot tolerate NaN
/// are expected to sanitize (the optimizer clamps non-finite sub-metrics).
///
/// # Examples
///
/// ```
/// # use teamforge_stats::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// ```
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    #[expect(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    values.iter().sum::<f64>() / n
}

/// Population variance of `values` (divisor `n`, not `n - 1`).
///
/// Returns `f64::NAN` for an empty slice.
///
/// # Examples
///
/// ```
/// # use teamforge_stats::variance;
/// assert_eq!(variance(&[1.0, 1.0, 1.0]), 0.0);
/// assert_eq!(variance(&[0.0, 2.0]), 1.0);
/// ```
#[must_use]
pub fn variance(values: &[f64]) -> f64 {
    let m = mean(values);
    #[expect(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / n
}

/// Population standard deviation of `values`.
#[must_use]
pub fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Summary statistics for one dataset.
///
/// Used for per-generation fitness reporting; all fields are computed in a
/// single pass over a sorted copy of the input.
#[derive(Debug, Clone, Copy)]
pub struct DescriptiveStats {
    /// The minimum value in the dataset.
    pub min: f64,
    /// The maximum value in the dataset.
    pub max: f64,
    /// The arithmetic mean of the dataset.
    pub mean: f64,
    /// The median value of the dataset.
    pub median: f64,
    /// The population standard deviation of the dataset.
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes summary statistics from unsorted values.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use teamforge_stats::DescriptiveStats;
    /// let stats = DescriptiveStats::new([5.0, 2.0, 4.0, 1.0, 3.0]).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);

        let min = *values.first()?;
        let max = *values.last()?;
        let median = values[values.len() / 2];
        Some(Self {
            min,
            max,
            mean: mean(&values),
            median,
            std_dev: std_dev(&values),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_and_variance_match_hand_computation() {
        let values = [0.2, 0.4, 0.6];
        assert!((mean(&values) - 0.4).abs() < 1e-12);
        let expected_var = ((0.2f64 - 0.4).powi(2) + 0.0 + (0.6f64 - 0.4).powi(2)) / 3.0;
        assert!((variance(&values) - expected_var).abs() < 1e-12);
        assert!((std_dev(&values) - expected_var.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn empty_slice_yields_nan() {
        assert!(mean(&[]).is_nan());
        assert!(variance(&[]).is_nan());
        assert!(std_dev(&[]).is_nan());
    }

    #[test]
    fn single_value_has_zero_spread() {
        assert_eq!(variance(&[7.5]), 0.0);
        assert_eq!(std_dev(&[7.5]), 0.0);
    }

    #[test]
    fn descriptive_stats_none_on_empty() {
        assert!(DescriptiveStats::new([]).is_none());
    }

    #[test]
    fn descriptive_stats_handles_unsorted_input() {
        let stats = DescriptiveStats::new([3.0, 1.0, 2.0]).unwrap();
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 3.0);
        assert_eq!(stats.median, 2.0);
    }
}
