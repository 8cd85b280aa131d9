use ahash::RandomState;
use hashbrown::HashMap;
use num_traits::Float;
use ordered_float::{OrderedFloat, PrimitiveFloat};

use alloc::string::String;
use alloc::vec::Vec;

use core::fmt::{self, Display};
use core::ops::Add;

use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::helper::{self, median_from_sorted_slice};
use crate::mode::Mode;
use crate::summary::{Describe, FiveNumberSummary};
use crate::Kbn;

/// Minimum number of data points a dataset must hold.
const MIN_VALUES: usize = 2;

/// A descriptive-statistics engine over a single one-dimensional dataset.
///
/// `Statistics<T>` owns an ordered sequence of at least two floating-point
/// values and exposes every statistical operation as a pure function of that
/// state. Nothing is cached: each call recomputes from the current values,
/// so replacing the dataset is immediately reflected by every operation.
///
/// Operations never mutate the dataset; where sorted order is needed the
/// engine sorts a copy. The engine provides no internal synchronization, so
/// sharing one instance across threads requires external serialization.
///
/// # Type Parameters
///
/// * `T` - The floating-point type of the dataset values.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics<T> {
    /// The dataset, in insertion order.
    values: Vec<T>,
}

impl<T: Float + Default> Statistics<T> {
    /// Creates a new engine over the given dataset.
    ///
    /// Validation happens before any state is stored: either a valid engine
    /// exists afterwards or none does.
    ///
    /// # Arguments
    ///
    /// * `values` - The dataset, at least 2 values long
    ///
    /// # Returns
    ///
    /// * `Result<Self>` - The engine, or [`Error::TooFewValues`]
    ///
    /// # Examples
    ///
    /// ```
    /// # use descriptive_stats::{Error, Statistics};
    /// let stats = Statistics::new(vec![1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(stats.len(), 3);
    ///
    /// let err = Statistics::new(vec![1.0]).unwrap_err();
    /// assert_eq!(err, Error::TooFewValues { len: 1 });
    /// ```
    pub fn new(values: Vec<T>) -> Result<Self> {
        if values.len() < MIN_VALUES {
            return Err(Error::TooFewValues { len: values.len() });
        }
        Ok(Self { values })
    }

    /// Creates a new engine from a borrowed slice.
    ///
    /// # Arguments
    ///
    /// * `values` - The dataset, at least 2 values long
    ///
    /// # Returns
    ///
    /// * `Result<Self>` - The engine, or [`Error::TooFewValues`]
    pub fn from_slice(values: &[T]) -> Result<Self> {
        Self::new(values.to_vec())
    }

    // For concatenations of already-validated datasets.
    fn from_valid(values: Vec<T>) -> Self {
        debug_assert!(values.len() >= MIN_VALUES);
        Self { values }
    }

    /// Replaces the dataset wholesale, with the same validation as
    /// construction.
    ///
    /// On failure the previous dataset is left untouched.
    ///
    /// # Arguments
    ///
    /// * `values` - The replacement dataset, at least 2 values long
    ///
    /// # Returns
    ///
    /// * `Result<()>` - `Ok` on success, [`Error::TooFewValues`] otherwise
    pub fn replace_values(&mut self, values: Vec<T>) -> Result<()> {
        if values.len() < MIN_VALUES {
            return Err(Error::TooFewValues { len: values.len() });
        }
        self.values = values;
        Ok(())
    }

    /// Returns the number of values in the dataset
    ///
    /// # Returns
    ///
    /// * `usize` - The dataset size
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns the dataset values in insertion order
    ///
    /// # Returns
    ///
    /// * `&[T]` - The values
    pub fn values(&self) -> &[T] {
        &self.values
    }

    fn n_t(&self) -> T {
        T::from(self.values.len()).unwrap_or_else(T::one)
    }

    /// Returns the sum of all values, accumulated with compensated
    /// summation
    ///
    /// # Returns
    ///
    /// * `T` - The sum
    pub fn sum(&self) -> T {
        let mut sum = Kbn::default();
        for &value in &self.values {
            sum += value;
        }
        sum.total()
    }

    /// Returns the smallest value in the dataset
    ///
    /// # Returns
    ///
    /// * `T` - The minimum
    pub fn min(&self) -> T {
        self.values
            .iter()
            .copied()
            .reduce(T::min)
            .unwrap_or_else(T::zero)
    }

    /// Returns the largest value in the dataset
    ///
    /// # Returns
    ///
    /// * `T` - The maximum
    pub fn max(&self) -> T {
        self.values
            .iter()
            .copied()
            .reduce(T::max)
            .unwrap_or_else(T::zero)
    }

    /// Returns the arithmetic mean of the dataset
    ///
    /// # Arguments
    ///
    /// * `round_to` - Decimal places for the result; `-1` is the exact
    ///   "no rounding" sentinel and returns full precision
    ///
    /// # Returns
    ///
    /// * `T` - The mean
    ///
    /// # Examples
    ///
    /// ```
    /// # use descriptive_stats::Statistics;
    /// let stats = Statistics::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(stats.mean(-1), 3.5);
    ///
    /// let stats = Statistics::new(vec![1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(stats.mean(2), 2.0);
    /// assert_eq!(stats.mean(-1), 2.0);
    /// ```
    pub fn mean(&self, round_to: i32) -> T {
        helper::round_to_places(self.sum() / self.n_t(), round_to)
    }

    /// Returns the median of the dataset
    ///
    /// Sorts a copy of the values; for an odd count the middle element, for
    /// an even count the average of the two elements adjacent to the
    /// midpoint. The stored dataset is never mutated.
    ///
    /// # Returns
    ///
    /// * `T` - The median
    ///
    /// # Examples
    ///
    /// ```
    /// # use descriptive_stats::Statistics;
    /// let stats = Statistics::new(vec![1.0, 2.0, 3.0, 3.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(stats.median(), 3.0);
    ///
    /// let stats = Statistics::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(stats.median(), 3.5);
    /// ```
    pub fn median(&self) -> T {
        median_from_sorted_slice(&helper::sorted_copy(&self.values))
    }

    /// Returns the variance of the dataset
    ///
    /// Computes the mean of squared deviations from the unrounded mean,
    /// dividing by `n` for the population variance or `n - 1` for the
    /// sample variance. The divisor convention is shared with
    /// [`stddev`](Self::stddev), [`coefficient_of_variation`](Self::coefficient_of_variation)
    /// and [`zscore`](Self::zscore).
    ///
    /// # Arguments
    ///
    /// * `sample` - `true` divides by `n - 1`, `false` by `n`
    ///
    /// # Returns
    ///
    /// * `T` - The variance
    ///
    /// # Examples
    ///
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// # use descriptive_stats::Statistics;
    /// let stats = Statistics::<f64>::new(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_approx_eq!(stats.variance(false), 1.25);
    /// assert_approx_eq!(stats.variance(true), 1.6666666666, 1e-9);
    /// ```
    pub fn variance(&self, sample: bool) -> T {
        let mean = self.mean(-1);
        let mut sum_sq_dev = Kbn::default();
        for &value in &self.values {
            let dev = value - mean;
            sum_sq_dev += dev * dev;
        }
        let ddof = if sample { T::one() } else { T::zero() };
        sum_sq_dev.total() / (self.n_t() - ddof)
    }

    /// Returns the standard deviation of the dataset
    ///
    /// The square root of [`variance`](Self::variance) under the same
    /// divisor convention for the same `sample` flag.
    ///
    /// # Arguments
    ///
    /// * `sample` - `true` divides by `n - 1`, `false` by `n`
    ///
    /// # Returns
    ///
    /// * `T` - The standard deviation
    ///
    /// # Examples
    ///
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// # use descriptive_stats::Statistics;
    /// let stats = Statistics::<f64>::new(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_approx_eq!(stats.stddev(false), 1.1180339887, 1e-9);
    /// assert_approx_eq!(stats.stddev(true), 1.2909944487, 1e-9);
    /// ```
    pub fn stddev(&self, sample: bool) -> T {
        self.variance(sample).sqrt()
    }

    /// Returns the coefficient of variation of the dataset
    ///
    /// The ratio of the standard deviation to the mean.
    ///
    /// # Arguments
    ///
    /// * `sample` - `true` divides by `n - 1`, `false` by `n`
    ///
    /// # Returns
    ///
    /// * `Result<T>` - The coefficient, or [`Error::DivisionByZero`] when
    ///   the mean is zero
    ///
    /// # Examples
    ///
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// # use descriptive_stats::Statistics;
    /// let stats = Statistics::<f64>::new(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_approx_eq!(stats.coefficient_of_variation(false).unwrap(), 0.4472135955, 1e-9);
    ///
    /// let degenerate = Statistics::new(vec![-1.0, 1.0]).unwrap();
    /// assert!(degenerate.coefficient_of_variation(false).is_err());
    /// ```
    pub fn coefficient_of_variation(&self, sample: bool) -> Result<T> {
        let mean = self.mean(-1);
        if mean.is_zero() {
            return Err(Error::DivisionByZero("coefficient of variation"));
        }
        Ok(self.stddev(sample) / mean)
    }

    /// Returns the z-score of a value relative to the dataset
    ///
    /// How many standard deviations `value` lies from the mean.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to standardize
    /// * `sample` - `true` divides by `n - 1`, `false` by `n`
    ///
    /// # Returns
    ///
    /// * `Result<T>` - The z-score, or [`Error::DivisionByZero`] when the
    ///   standard deviation is zero (all values equal)
    ///
    /// # Examples
    ///
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// # use descriptive_stats::Statistics;
    /// let stats = Statistics::<f64>::new(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_approx_eq!(stats.zscore(4.0, false).unwrap(), 1.3416407865, 1e-9);
    /// ```
    pub fn zscore(&self, value: T, sample: bool) -> Result<T> {
        let stddev = self.stddev(sample);
        if stddev.is_zero() {
            return Err(Error::DivisionByZero("z-score"));
        }
        Ok((value - self.mean(-1)) / stddev)
    }

    /// Applies Hildebrand's rule of symmetry to the dataset
    ///
    /// Computes `(mean - median) / stddev` with the unrounded mean and the
    /// population standard deviation; the dataset is considered symmetric
    /// enough when the absolute ratio is below 0.2.
    ///
    /// # Returns
    ///
    /// * `Result<bool>` - `true` when symmetric enough, or
    ///   [`Error::DivisionByZero`] when the dataset has zero spread
    ///
    /// # Examples
    ///
    /// ```
    /// # use descriptive_stats::Statistics;
    /// let stats = Statistics::new(vec![1.0, 2.0, 3.0, 3.0, 3.0, 4.0, 5.0]).unwrap();
    /// assert!(stats.hildebrand_rule().unwrap());
    /// ```
    pub fn hildebrand_rule(&self) -> Result<bool> {
        let stddev = self.stddev(false);
        if stddev.is_zero() {
            return Err(Error::DivisionByZero("Hildebrand ratio"));
        }
        let ratio = (self.mean(-1) - self.median()) / stddev;
        let threshold = T::from(0.2).unwrap_or_else(T::zero);
        Ok(ratio.abs() < threshold)
    }

    /// Returns the five-number summary of the dataset
    ///
    /// Minimum, first quartile, median, third quartile, maximum. Quartiles
    /// are the medians of the lower and upper halves of the sorted data,
    /// excluding the middle element from both halves when the count is odd.
    /// This split-and-recurse definition deliberately differs from
    /// linear-interpolation quantile conventions.
    ///
    /// # Returns
    ///
    /// * `FiveNumberSummary<T>` - The summary
    ///
    /// # Examples
    ///
    /// ```
    /// # use descriptive_stats::Statistics;
    /// let stats =
    ///     Statistics::new(vec![10.0, 12.0, 16.0, 16.0, 21.0, 23.0, 23.0, 23.0]).unwrap();
    /// let summary = stats.five_number_summary();
    /// assert_eq!(summary.to_array(), [10.0, 14.0, 18.5, 23.0, 23.0]);
    /// ```
    pub fn five_number_summary(&self) -> FiveNumberSummary<T> {
        let sorted = helper::sorted_copy(&self.values);
        let n = sorted.len();
        let (middle, upper) = if n % 2 == 0 {
            (n / 2, n / 2)
        } else {
            (n / 2, n / 2 + 1)
        };

        FiveNumberSummary {
            min: sorted[0],
            q1: median_from_sorted_slice(&sorted[..middle]),
            median: median_from_sorted_slice(&sorted),
            q3: median_from_sorted_slice(&sorted[upper..]),
            max: sorted[n - 1],
        }
    }

    /// Bins the dataset into a frequency table of equal-width classes
    ///
    /// Class lower bounds are `min_value + i * class_width` with
    /// `class_width = (max_value - min_value) / num_classes`. Each value
    /// lands in the unique class whose half-open interval
    /// `[lower, lower + width)` contains it; values at or above `max_value`
    /// fall into no class and are silently dropped, so the final cumulative
    /// frequency can be below the dataset size.
    ///
    /// # Arguments
    ///
    /// * `num_classes` - Number of equal-width classes
    /// * `min_value` - Lower bound of the binned range
    /// * `max_value` - Upper bound of the binned range
    /// * `round_to` - Decimal places for the relative-frequency
    ///   proportions, `-1` for full precision
    ///
    /// # Returns
    ///
    /// * `Result<FrequencyTable<T>>` - The table, or
    ///   [`Error::EmptyClasses`] when `num_classes` is zero
    ///
    /// # Examples
    ///
    /// ```
    /// # use descriptive_stats::Statistics;
    /// let stats =
    ///     Statistics::new(vec![10.0, 12.0, 16.0, 16.0, 21.0, 23.0, 23.0, 23.0]).unwrap();
    /// let table = stats.frequency_table(3, 10.0, 25.0, 2).unwrap();
    ///
    /// let frequencies: Vec<usize> = table.classes().iter().map(|c| c.frequency).collect();
    /// assert_eq!(frequencies, vec![2, 2, 4]);
    /// ```
    pub fn frequency_table(
        &self,
        num_classes: usize,
        min_value: T,
        max_value: T,
        round_to: i32,
    ) -> Result<FrequencyTable<T>> {
        FrequencyTable::build(&self.values, num_classes, min_value, max_value, round_to)
    }

    /// Returns a new engine over the concatenation of two datasets
    ///
    /// Values are appended in order, self then other; neither original
    /// dataset is modified. The `+` operator delegates here.
    ///
    /// # Arguments
    ///
    /// * `other` - The dataset appended after this one
    ///
    /// # Returns
    ///
    /// * `Self` - The combined engine
    ///
    /// # Examples
    ///
    /// ```
    /// # use descriptive_stats::Statistics;
    /// let a = Statistics::new(vec![1.0, 2.0]).unwrap();
    /// let b = Statistics::new(vec![3.0, 4.0, 5.0]).unwrap();
    ///
    /// let combined = &a + &b;
    /// assert_eq!(combined.values(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
    /// assert_eq!(a.len(), 2);
    /// ```
    pub fn concat(&self, other: &Self) -> Self {
        self.with_values(&other.values)
    }

    /// Returns a new engine with extra values appended to the dataset
    ///
    /// # Arguments
    ///
    /// * `more` - The values appended after the current dataset
    ///
    /// # Returns
    ///
    /// * `Self` - The combined engine
    pub fn with_values(&self, more: &[T]) -> Self {
        let mut values = Vec::with_capacity(self.values.len() + more.len());
        values.extend_from_slice(&self.values);
        values.extend_from_slice(more);
        Self::from_valid(values)
    }
}

impl<T: Float + Default + PrimitiveFloat> Statistics<T> {
    /// Returns the mode of the dataset as a tagged result
    ///
    /// Counts the frequency of each distinct value. A single value at the
    /// highest frequency yields [`Mode::Single`]; several yield
    /// [`Mode::Tied`] in first-encountered dataset order. When the tie
    /// covers every distinct value of a non-constant dataset (all values
    /// equally frequent, including the all-unique case) there is no
    /// distinguishable mode and [`Mode::NoMode`] is returned.
    ///
    /// # Returns
    ///
    /// * `Mode<T>` - The mode result
    ///
    /// # Examples
    ///
    /// ```
    /// # use descriptive_stats::{Mode, Statistics};
    /// let stats = Statistics::new(vec![1.0, 2.0, 3.0, 3.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(stats.mode(), Mode::Single(3.0));
    ///
    /// let tied =
    ///     Statistics::new(vec![1.0, 1.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 4.0]).unwrap();
    /// assert_eq!(tied.mode(), Mode::Tied(vec![3.0, 4.0]));
    ///
    /// let uniform = Statistics::new(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(uniform.mode(), Mode::NoMode);
    /// ```
    pub fn mode(&self) -> Mode<T> {
        let mut freq: HashMap<OrderedFloat<T>, usize, RandomState> =
            HashMap::with_hasher(RandomState::default());
        let mut order: Vec<OrderedFloat<T>> = Vec::new();

        for &value in &self.values {
            let key = OrderedFloat(value);
            match freq.get_mut(&key) {
                Some(count) => *count += 1,
                None => {
                    freq.insert(key, 1);
                    order.push(key);
                }
            }
        }

        let highest = freq.values().copied().max().unwrap_or(0);
        let mut tied = Vec::new();
        for key in &order {
            if freq.get(key).copied().unwrap_or(0) == highest {
                tied.push(key.0);
            }
        }

        if tied.len() == 1 {
            Mode::Single(tied[0])
        } else if tied.len() == order.len() {
            Mode::NoMode
        } else {
            Mode::Tied(tied)
        }
    }

    /// Returns a snapshot report of the main statistics of the dataset
    ///
    /// Dispersion figures use the population convention; the coefficient of
    /// variation is absent when the mean is zero.
    ///
    /// # Returns
    ///
    /// * `Describe<T>` - The report
    pub fn describe(&self) -> Describe<T> {
        Describe {
            count: self.len(),
            mean: self.mean(-1),
            median: self.median(),
            mode: self.mode(),
            variance: self.variance(false),
            stddev: self.stddev(false),
            coefficient_of_variation: self.coefficient_of_variation(false).ok(),
            five_number_summary: self.five_number_summary(),
        }
    }
}

/// Returns the minimum percentage of data guaranteed by Chebyshev's theorem
/// to lie within `k` standard deviations of the mean
///
/// Computes `(1 - 1/k²) × 100`, rounded to two decimal places and formatted
/// with a trailing `%`. The bound holds for any distribution and needs no
/// dataset. Values of `k` at or below 1 are accepted but yield a vacuous
/// bound of 0% or less.
///
/// # Arguments
///
/// * `k` - The number of standard deviations
///
/// # Returns
///
/// * `Result<String>` - The formatted percentage, or
///   [`Error::DivisionByZero`] when `k` is zero
///
/// # Examples
///
/// ```
/// # use descriptive_stats::chebyshevs_theorem;
/// assert_eq!(chebyshevs_theorem(2.0).unwrap(), "75.0%");
/// assert_eq!(chebyshevs_theorem(3.0).unwrap(), "88.89%");
/// ```
pub fn chebyshevs_theorem<T: Float + Display>(k: T) -> Result<String> {
    if k.is_zero() {
        return Err(Error::DivisionByZero("Chebyshev's theorem"));
    }
    let _100 = T::from(100.0).unwrap_or_else(T::one);
    let percentage = (T::one() - T::one() / (k * k)) * _100;
    Ok(helper::format_percent(percentage))
}

impl<T: Float + Default> Add<&Statistics<T>> for &Statistics<T> {
    type Output = Statistics<T>;

    fn add(self, other: &Statistics<T>) -> Statistics<T> {
        self.concat(other)
    }
}

impl<T: Float + Default> Add<&[T]> for &Statistics<T> {
    type Output = Statistics<T>;

    fn add(self, other: &[T]) -> Statistics<T> {
        self.with_values(other)
    }
}

impl<T: Float + Display> Display for Statistics<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Statistics[")?;
        if self.values.len() <= 10 {
            for (i, value) in self.values.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{value}")?;
            }
        } else {
            let first = &self.values[..2];
            let last = &self.values[self.values.len() - 2..];
            write!(
                f,
                "{}, {}, ... {}, {}",
                first[0], first[1], last[0], last[1]
            )?;
        }
        write!(f, "]")
    }
}
