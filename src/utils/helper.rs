use num_traits::Float;

use alloc::string::String;
use alloc::vec::Vec;

use core::cmp::Ordering;
use core::fmt::Display;

/// Returns the median from a sorted slice
///
/// # Arguments
///
/// * `ss` - The sorted slice
///
/// # Returns
///
/// * `T` - The median
#[inline]
pub fn median_from_sorted_slice<T: Float>(ss: &[T]) -> T {
    let len = ss.len();
    let mid = len / 2;
    let _2 = T::one() + T::one();
    if len % 2 == 0 {
        (ss[mid - 1] + ss[mid]) / _2
    } else {
        ss[mid]
    }
}

/// Returns an ascending sorted copy of a slice, leaving the input untouched
///
/// # Arguments
///
/// * `values` - The values to sort
///
/// # Returns
///
/// * `Vec<T>` - The sorted copy
#[inline]
pub fn sorted_copy<T: Float>(values: &[T]) -> Vec<T> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

/// Rounds a value to the given number of decimal places
///
/// A negative `places` is the "no rounding" sentinel and returns the value
/// unchanged at full precision.
///
/// # Arguments
///
/// * `value` - The value to round
/// * `places` - The number of decimal places, or `-1` for full precision
///
/// # Returns
///
/// * `T` - The rounded value
#[inline]
pub fn round_to_places<T: Float>(value: T, places: i32) -> T {
    if places < 0 {
        return value;
    }
    let factor = T::from(10.0).map_or_else(T::one, |ten| ten.powi(places));
    (value * factor).round() / factor
}

/// Formats a percentage rounded to two decimal places, keeping at least one
/// decimal digit and appending a trailing `%`
///
/// Produces `"75.0%"` rather than `"75%"` and `"88.89%"` rather than
/// `"88.8900%"`.
///
/// # Arguments
///
/// * `value` - The percentage value
///
/// # Returns
///
/// * `String` - The formatted percentage
pub fn format_percent<T: Float + Display>(value: T) -> String {
    let rounded = round_to_places(value, 2);
    let mut out = format!("{rounded:.2}");
    while out.ends_with('0') {
        out.pop();
    }
    if out.ends_with('.') {
        out.push('0');
    }
    out.push('%');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_odd() {
        assert_eq!(median_from_sorted_slice(&[1.0, 2.0, 5.0]), 2.0);
    }

    #[test]
    fn test_median_even() {
        assert_eq!(median_from_sorted_slice(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    }

    #[test]
    fn test_sorted_copy_leaves_input_untouched() {
        let values = [3.0, 1.0, 2.0];
        let sorted = sorted_copy(&values);
        assert_eq!(sorted, vec![1.0, 2.0, 3.0]);
        assert_eq!(values, [3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_round_to_places() {
        assert_eq!(round_to_places(0.375, 2), 0.38);
        assert_eq!(round_to_places(3.14159, 0), 3.0);
        assert_eq!(round_to_places(0.375, -1), 0.375);
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(75.0), "75.0%");
        assert_eq!(format_percent(88.888_888), "88.89%");
        assert_eq!(format_percent(86.1), "86.1%");
        assert_eq!(format_percent(-300.0), "-300.0%");
    }
}
