//! Error types for axis construction and bounds computation.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building an axis.
///
/// Configuration and domain errors surface synchronously at axis
/// construction and abort the axis. Per-value projection failures are not
/// represented here; they are recovered inside
/// [`Axis::project_value`](crate::axis::Axis::project_value).
#[derive(Error, Debug)]
pub enum Error {
    /// Scale selector token did not match `<family><optional-base>`.
    #[error("invalid scale token {0:?}, expected e.g. \"linear\", \"log\", \"log2\" or \"log10\"")]
    InvalidScaleToken(String),

    /// Logarithm base outside the supported range.
    #[error("logarithm base must be a finite number greater than 1, got {0}")]
    InvalidLogBase(f64),

    /// Logarithmic scale requested over data that touches or crosses zero.
    #[error("non-positive values are not supported on a logarithmic axis (low={low}, high={high})")]
    LogDomain {
        /// Lower extremum of the data.
        low: f64,
        /// Upper extremum of the data.
        high: f64,
    },

    /// Extrema reaching the bounds computation were NaN or infinite.
    #[error("axis extrema must be finite, got low={low}, high={high}")]
    NonFiniteExtrema {
        /// Lower extremum.
        low: f64,
        /// Upper extremum.
        high: f64,
    },

    /// Lower extremum was greater than the upper extremum.
    #[error("axis extrema are inverted: low={low} is greater than high={high}")]
    InvertedExtrema {
        /// Lower extremum.
        low: f64,
        /// Upper extremum.
        high: f64,
    },

    /// Step optimization failed to converge on a usable tick spacing.
    #[error("exceeded maximum number of iterations while optimizing the scale step")]
    BoundsOptimization,

    /// No finite data value was found and no explicit high/low override given.
    #[error("no finite data values and no explicit high/low overrides")]
    EmptyData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::LogDomain {
            low: -5.0,
            high: 10.0,
        };
        assert!(err.to_string().contains("logarithmic"));
        assert!(err.to_string().contains("-5"));
    }

    #[test]
    fn test_scale_token_display() {
        let err = Error::InvalidScaleToken("sqrt2".to_string());
        assert!(err.to_string().contains("sqrt2"));
    }
}
