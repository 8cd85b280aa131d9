use core::fmt::{self, Display};

use num_traits::Float;

use crate::helper;
use crate::mode::Mode;

/// The five-number summary of a dataset: minimum, first quartile, median,
/// third quartile, maximum.
///
/// Quartiles are computed by taking the median of the lower and upper
/// halves of the sorted data, with the middle element excluded from both
/// halves when the count is odd. This differs from linear-interpolation
/// quantile conventions; see [`Statistics::five_number_summary`].
///
/// [`Statistics::five_number_summary`]: crate::Statistics::five_number_summary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiveNumberSummary<T> {
    /// Smallest value in the dataset.
    pub min: T,
    /// Median of the lower half of the sorted dataset.
    pub q1: T,
    /// Median of the whole dataset.
    pub median: T,
    /// Median of the upper half of the sorted dataset.
    pub q3: T,
    /// Largest value in the dataset.
    pub max: T,
}

impl<T: Float> FiveNumberSummary<T> {
    /// Returns the summary as `[min, q1, median, q3, max]`
    ///
    /// # Returns
    ///
    /// * `[T; 5]` - The summary values in order
    pub fn to_array(self) -> [T; 5] {
        [self.min, self.q1, self.median, self.q3, self.max]
    }
}

impl<T: Float + Display> Display for FiveNumberSummary<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}, {}]",
            self.min, self.q1, self.median, self.q3, self.max
        )
    }
}

/// A snapshot report of the main descriptive statistics of a dataset.
///
/// Produced by [`Statistics::describe`]; dispersion figures use the
/// population convention. The `Display` impl renders a multi-line report
/// with dispersion values rounded to two decimals.
///
/// [`Statistics::describe`]: crate::Statistics::describe
#[derive(Debug, Clone, PartialEq)]
pub struct Describe<T> {
    /// Number of values in the dataset.
    pub count: usize,
    /// Arithmetic mean, full precision.
    pub mean: T,
    /// Median.
    pub median: T,
    /// Mode result.
    pub mode: Mode<T>,
    /// Population variance.
    pub variance: T,
    /// Population standard deviation.
    pub stddev: T,
    /// Coefficient of variation, absent when the mean is zero.
    pub coefficient_of_variation: Option<T>,
    /// Five-number summary.
    pub five_number_summary: FiveNumberSummary<T>,
}

impl<T: Float + Display> Display for Describe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Length of the set: {}", self.count)?;
        writeln!(f)?;
        writeln!(f, "Mean: {}", self.mean)?;
        writeln!(f, "Median: {}", self.median)?;
        writeln!(f, "Mode: {}", self.mode)?;
        writeln!(f)?;
        writeln!(f, "Variance: {}", helper::round_to_places(self.variance, 2))?;
        writeln!(
            f,
            "Standard Deviation: {}",
            helper::round_to_places(self.stddev, 2)
        )?;
        match self.coefficient_of_variation {
            Some(cv) => writeln!(
                f,
                "Coefficient of Variation: {}",
                helper::round_to_places(cv, 2)
            )?,
            None => writeln!(f, "Coefficient of Variation: undefined (mean is zero)")?,
        }
        writeln!(f)?;
        write!(f, "Five number summary: {}", self.five_number_summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_summary_to_array_and_display() {
        let summary = FiveNumberSummary {
            min: 10.0,
            q1: 14.0,
            median: 18.5,
            q3: 23.0,
            max: 23.0,
        };
        assert_eq!(summary.to_array(), [10.0, 14.0, 18.5, 23.0, 23.0]);
        assert_eq!(summary.to_string(), "[10, 14, 18.5, 23, 23]");
    }

    #[test]
    fn test_describe_display() {
        let report = Describe {
            count: 4,
            mean: 2.5,
            median: 2.5,
            mode: Mode::NoMode,
            variance: 1.25,
            stddev: 1.118_033_988_749_895,
            coefficient_of_variation: Some(0.447_213_595_499_958),
            five_number_summary: FiveNumberSummary {
                min: 1.0,
                q1: 1.5,
                median: 2.5,
                q3: 3.5,
                max: 4.0,
            },
        };

        let text = report.to_string();
        assert!(text.starts_with("Length of the set: 4"));
        assert!(text.contains("Mode: no mode"));
        assert!(text.contains("Variance: 1.25"));
        assert!(text.contains("Standard Deviation: 1.12"));
        assert!(text.contains("Coefficient of Variation: 0.45"));
        assert!(text.ends_with("Five number summary: [1, 1.5, 2.5, 3.5, 4]"));
    }
}
