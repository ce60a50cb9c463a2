//! Extrema extraction over series data.
//!
//! Finds the lowest and highest finite value across all series of an axis,
//! honoring explicit `high`/`low` overrides and the configured reference
//! value, and repairs degenerate results so downstream bounds computation
//! always sees a usable range.

use crate::axis::AxisOptions;
use crate::error::{Error, Result};

/// Raw data extrema along one axis, before any nice-number rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighLow {
    /// Minimum data value.
    pub low: f64,
    /// Maximum data value.
    pub high: f64,
}

impl HighLow {
    /// Construct raw extrema directly.
    #[must_use]
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }
}

/// Compute the extrema of `series`, honoring option overrides.
///
/// NaN and infinite samples are skipped. An overridden side is taken
/// verbatim instead of being computed. `reference_value`, when set, extends
/// whichever side it falls outside of, guaranteeing it ends up inside the
/// resolved domain.
///
/// When the result is degenerate (`high <= low`) it is widened towards zero
/// or to a unit range so that a single-valued or empty-range axis still
/// renders: equal-at-zero becomes `[0, 1]`, an all-negative value keeps its
/// low and gets `high = 0`, an all-positive value keeps its high and gets
/// `low = 0`.
///
/// # Errors
///
/// Returns [`Error::EmptyData`] when no finite sample exists and the
/// missing side has no explicit override.
pub fn high_low(series: &[&[f64]], options: &AxisOptions) -> Result<HighLow> {
    let mut computed_high = f64::NEG_INFINITY;
    let mut computed_low = f64::INFINITY;
    if options.high.is_none() || options.low.is_none() {
        for values in series {
            for &v in *values {
                if v.is_finite() {
                    computed_high = computed_high.max(v);
                    computed_low = computed_low.min(v);
                }
            }
        }
    }

    let mut high = options.high.unwrap_or(computed_high);
    let mut low = options.low.unwrap_or(computed_low);

    if let Some(reference) = options.reference_value {
        high = high.max(reference);
        low = low.min(reference);
    }

    if !high.is_finite() || !low.is_finite() {
        return Err(Error::EmptyData);
    }

    // Degenerate-range repair, biased towards including zero.
    if high <= low {
        if low == 0.0 {
            high = 1.0;
        } else if low < 0.0 {
            high = 0.0;
        } else if high > 0.0 {
            low = 0.0;
        } else {
            high = 1.0;
            low = 0.0;
        }
    }

    Ok(HighLow { low, high })
}
