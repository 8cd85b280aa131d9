use alloc::vec::Vec;

use core::fmt::{self, Display};

use num_traits::Float;

/// The result of a mode computation.
///
/// The mode of a dataset is not always a single value: several values can
/// tie for the highest frequency, and when every distinct value is equally
/// frequent there is no distinguishable mode at all. Representing the last
/// case as a dedicated variant keeps it distinguishable from any legitimate
/// data value.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode<T> {
    /// Exactly one value attains the highest frequency.
    Single(T),
    /// Several values tie for the highest frequency, in the order they were
    /// first encountered in the dataset.
    Tied(Vec<T>),
    /// All distinct values are equally frequent, including the degenerate
    /// all-unique case.
    NoMode,
}

impl<T> Mode<T> {
    /// Returns `true` if the dataset has no distinguishable mode
    ///
    /// # Returns
    ///
    /// * `bool` - True for [`Mode::NoMode`]
    pub const fn is_no_mode(&self) -> bool {
        matches!(self, Self::NoMode)
    }

    /// Returns all values tied for the highest frequency
    ///
    /// # Returns
    ///
    /// * `Vec<T>` - One value for [`Mode::Single`], the tied values for
    ///   [`Mode::Tied`], empty for [`Mode::NoMode`]
    pub fn into_values(self) -> Vec<T> {
        match self {
            Self::Single(value) => vec![value],
            Self::Tied(values) => values,
            Self::NoMode => Vec::new(),
        }
    }
}

impl<T: Float + Display> Display for Mode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(value) => write!(f, "{value}"),
            Self::Tied(values) => {
                write!(f, "[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            }
            Self::NoMode => write!(f, "no mode"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_into_values() {
        assert_eq!(Mode::Single(3.0).into_values(), vec![3.0]);
        assert_eq!(Mode::Tied(vec![3.0, 4.0]).into_values(), vec![3.0, 4.0]);
        assert_eq!(Mode::<f64>::NoMode.into_values(), Vec::<f64>::new());
    }

    #[test]
    fn test_display() {
        assert_eq!(Mode::Single(3.0).to_string(), "3");
        assert_eq!(Mode::Tied(vec![3.0, 4.5]).to_string(), "[3, 4.5]");
        assert_eq!(Mode::<f64>::NoMode.to_string(), "no mode");
    }

    #[test]
    fn test_is_no_mode() {
        assert!(Mode::<f64>::NoMode.is_no_mode());
        assert!(!Mode::Single(1.0).is_no_mode());
    }
}
