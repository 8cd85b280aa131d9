use alloc::string::String;
use alloc::vec::Vec;

use core::fmt::{self, Display, Write as _};

use num_traits::Float;

use crate::error::{Error, Result};
use crate::helper;

/// A single class (bin) of a [`FrequencyTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyClass<T> {
    /// Lower bound of the class interval.
    pub lower_bound: T,
    /// Number of dataset values falling into the class.
    pub frequency: usize,
    /// Percentage of the dataset falling into the class, rounded per the
    /// table's `round_to` argument. Rows are rounded independently and are
    /// not renormalized to sum to exactly 100.
    pub relative_frequency: T,
    /// Running sum of the absolute frequencies up to and including this
    /// class.
    pub cumulative_frequency: usize,
}

/// Options for rendering a [`FrequencyTable`] as text.
///
/// Rendering limits are passed explicitly at the call site rather than held
/// in process-wide state.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Maximum number of class rows to print; `None` prints every row.
    pub max_rows: Option<usize>,
}

/// A frequency table over equal-width classes.
///
/// Classes are ordered by ascending lower bound and each spans the
/// half-open interval `[lower_bound, lower_bound + class_width)`. The table
/// is a value object computed from a dataset snapshot; it is not updated
/// when the dataset changes.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable<T> {
    classes: Vec<FrequencyClass<T>>,
    class_width: T,
}

impl<T: Float> FrequencyTable<T> {
    /// Bins `values` into `num_classes` equal-width classes covering
    /// `[min_value, max_value)`.
    ///
    /// Values equal to or above `max_value` fall into no class and are
    /// dropped, so the final cumulative frequency equals the binned count,
    /// not necessarily the dataset size.
    pub(crate) fn build(
        values: &[T],
        num_classes: usize,
        min_value: T,
        max_value: T,
        round_to: i32,
    ) -> Result<Self> {
        if num_classes == 0 {
            return Err(Error::EmptyClasses);
        }
        let classes_t = T::from(num_classes).unwrap_or_else(T::one);
        let class_width = (max_value - min_value) / classes_t;

        let lower_bounds: Vec<T> = (0..num_classes)
            .map(|i| min_value + T::from(i).unwrap_or_else(T::zero) * class_width)
            .collect();

        let mut frequencies = vec![0usize; num_classes];
        for &value in values {
            for (index, &lower) in lower_bounds.iter().enumerate() {
                if lower <= value && value < lower + class_width {
                    frequencies[index] += 1;
                    break;
                }
            }
        }

        let total = T::from(values.len()).unwrap_or_else(T::one);
        let _100 = T::from(100.0).unwrap_or_else(T::one);

        let mut cumulative = 0;
        let classes = lower_bounds
            .into_iter()
            .zip(frequencies)
            .map(|(lower_bound, frequency)| {
                cumulative += frequency;
                let proportion = T::from(frequency).unwrap_or_else(T::zero) / total;
                FrequencyClass {
                    lower_bound,
                    frequency,
                    relative_frequency: helper::round_to_places(proportion, round_to) * _100,
                    cumulative_frequency: cumulative,
                }
            })
            .collect();

        Ok(Self {
            classes,
            class_width,
        })
    }

    /// Returns the classes in ascending lower-bound order
    ///
    /// # Returns
    ///
    /// * `&[FrequencyClass<T>]` - The class rows
    pub fn classes(&self) -> &[FrequencyClass<T>] {
        &self.classes
    }

    /// Returns the width shared by every class interval
    ///
    /// # Returns
    ///
    /// * `T` - The class width
    pub fn class_width(&self) -> T {
        self.class_width
    }

    /// Returns the number of classes
    ///
    /// # Returns
    ///
    /// * `usize` - The number of classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns the number of dataset values that landed in a class
    ///
    /// Values at or above the table's upper bound are not counted.
    ///
    /// # Returns
    ///
    /// * `usize` - The binned count
    pub fn binned_count(&self) -> usize {
        self.classes.last().map_or(0, |c| c.cumulative_frequency)
    }
}

impl<T: Float + Display> FrequencyTable<T> {
    /// Renders the table as aligned text
    ///
    /// # Arguments
    ///
    /// * `options` - Row limits for the rendering
    ///
    /// # Returns
    ///
    /// * `String` - The rendered table
    pub fn render(&self, options: &RenderOptions) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:<12} {:>10} {:>12} {:>12}",
            "Class", "Frequency", "Relative %", "Cumulative"
        );

        let shown = options.max_rows.unwrap_or(self.classes.len());
        for class in self.classes.iter().take(shown) {
            let _ = writeln!(
                out,
                "{:<12} {:>10} {:>12} {:>12}",
                class.lower_bound,
                class.frequency,
                class.relative_frequency,
                class.cumulative_frequency
            );
        }
        if shown < self.classes.len() {
            let _ = writeln!(out, "... ({} more classes)", self.classes.len() - shown);
        }
        out
    }
}

impl<T: Float + Display> Display for FrequencyTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&RenderOptions::default()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use assert_approx_eq::assert_approx_eq;

    const VALUES: [f64; 8] = [10.0, 12.0, 16.0, 16.0, 21.0, 23.0, 23.0, 23.0];

    #[test]
    fn test_counts_and_cumulative() {
        let table = FrequencyTable::build(&VALUES, 3, 10.0, 25.0, 2).unwrap();
        assert_eq!(table.len(), 3);
        assert_approx_eq!(table.class_width(), 5.0);

        let classes = table.classes();
        assert_approx_eq!(classes[0].lower_bound, 10.0);
        assert_approx_eq!(classes[1].lower_bound, 15.0);
        assert_approx_eq!(classes[2].lower_bound, 20.0);

        assert_eq!(classes[0].frequency, 2);
        assert_eq!(classes[1].frequency, 2);
        assert_eq!(classes[2].frequency, 4);

        assert_eq!(classes[0].cumulative_frequency, 2);
        assert_eq!(classes[1].cumulative_frequency, 4);
        assert_eq!(classes[2].cumulative_frequency, 8);
        assert_eq!(table.binned_count(), 8);
    }

    #[test]
    fn test_relative_frequencies_rounded_per_row() {
        let table = FrequencyTable::build(&VALUES, 3, 10.0, 25.0, 2).unwrap();
        let classes = table.classes();
        assert_approx_eq!(classes[0].relative_frequency, 25.0);
        assert_approx_eq!(classes[1].relative_frequency, 25.0);
        assert_approx_eq!(classes[2].relative_frequency, 50.0);
    }

    #[test]
    fn test_values_at_or_above_max_are_dropped() {
        let values = [10.0, 12.0, 25.0, 30.0];
        let table = FrequencyTable::build(&values, 3, 10.0, 25.0, 2).unwrap();
        assert_eq!(table.binned_count(), 2);
    }

    #[test]
    fn test_lowest_class_includes_min() {
        let values = [10.0, 24.999];
        let table = FrequencyTable::build(&values, 3, 10.0, 25.0, 2).unwrap();
        assert_eq!(table.classes()[0].frequency, 1);
        assert_eq!(table.classes()[2].frequency, 1);
    }

    #[test]
    fn test_zero_classes_rejected() {
        let err = FrequencyTable::build(&VALUES, 0, 10.0, 25.0, 2).unwrap_err();
        assert_eq!(err, Error::EmptyClasses);
    }

    #[test]
    fn test_render_row_limit() {
        let table = FrequencyTable::build(&VALUES, 3, 10.0, 25.0, 2).unwrap();
        let full = table.to_string();
        assert_eq!(full.lines().count(), 4);

        let limited = table.render(&RenderOptions { max_rows: Some(1) });
        assert_eq!(limited.lines().count(), 3);
        assert!(limited.contains("... (2 more classes)"));
    }
}
