use thiserror::Error;

/// Errors produced by dataset validation and arithmetic edge cases.
///
/// Validation errors are raised at the boundary (construction, replacement)
/// before any state changes. Arithmetic edge cases propagate instead of
/// silently returning zero or infinity, so degenerate datasets (all-equal
/// values, zero mean) surface at the call site.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The dataset has fewer than the minimum required elements.
    #[error("data set has to have at least 2 data points, got {len}")]
    TooFewValues {
        /// Number of elements that were supplied.
        len: usize,
    },

    /// A derived quantity required dividing by a zero value.
    #[error("division by zero while computing {0}")]
    DivisionByZero(&'static str),

    /// A frequency table was requested with zero classes.
    #[error("frequency table needs at least one class")]
    EmptyClasses,
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::TooFewValues { len: 1 }.to_string(),
            "data set has to have at least 2 data points, got 1"
        );
        assert_eq!(
            Error::DivisionByZero("coefficient of variation").to_string(),
            "division by zero while computing coefficient of variation"
        );
        assert_eq!(
            Error::EmptyClasses.to_string(),
            "frequency table needs at least one class"
        );
    }
}
