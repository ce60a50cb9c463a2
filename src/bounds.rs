//! Nice-number bounds and tick computation.
//!
//! Given raw extrema and the pixel length available for the axis, this
//! module rounds the domain to order-of-magnitude friendly edges and picks
//! the densest tick step whose projected spacing still respects the
//! configured minimum. It operates purely in whatever numeric space it is
//! given and knows nothing about scale transforms; callers that need a
//! non-linear scale transform their extrema first and invert the result.

use crate::error::{Error, Result};
use crate::extrema::HighLow;

/// Smallest usable step; also the relative nudge used when a step underflows
/// addition against a large tick value.
const EPSILON: f64 = 2.221e-16;

/// Decimal digits kept when rounding enumerated tick values.
const PRECISION: i32 = 8;

/// Iteration cap for the step optimization loop.
const MAX_OPTIMIZATION_STEPS: u32 = 1000;

/// The resolved numeric domain and tick set of an axis.
///
/// `low`/`high` are the raw extrema that produced the bounds, `min`/`max`
/// the rounded renderable edges with `min <= low <= high <= max` for
/// continuous scales. `values` holds the tick positions in ascending order.
/// `step` is the tick spacing for continuous scales; decade-snapped
/// logarithmic bounds carry `None` because their ticks are not evenly
/// stepped in value space.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    /// Raw lower extremum.
    pub low: f64,
    /// Raw upper extremum.
    pub high: f64,
    /// Rounded lower domain edge.
    pub min: f64,
    /// Rounded upper domain edge.
    pub max: f64,
    /// `max - min`.
    pub range: f64,
    /// Tick spacing, continuous scales only.
    pub step: Option<f64>,
    /// Ordered tick positions.
    pub values: Vec<f64>,
}

/// Compute nice bounds and ticks for `high_low` over `axis_length` pixels.
///
/// The initial step is the order of magnitude of the value range; it is then
/// doubled while ticks would crowd below `scale_min_space` pixels and halved
/// while there is room to spare. With `only_integer` the step is kept
/// integral, preferring 1 or a small factor of the rounded range when those
/// still fit. Finally `min`/`max` are tightened towards the raw
/// extrema and the ticks enumerated with precision-safe increments.
///
/// Equal extrema produce a single-tick result with `range == 0`; projection
/// over such bounds is handled by the projector's degenerate-domain
/// fallback.
///
/// # Errors
///
/// [`Error::NonFiniteExtrema`] or [`Error::InvertedExtrema`] for unusable
/// extrema, [`Error::BoundsOptimization`] if step optimization fails to
/// converge.
pub fn nice_bounds(
    axis_length: f64,
    high_low: HighLow,
    scale_min_space: f64,
    only_integer: bool,
) -> Result<Bounds> {
    let HighLow { low, high } = high_low;
    if !low.is_finite() || !high.is_finite() {
        return Err(Error::NonFiniteExtrema { low, high });
    }
    if high < low {
        return Err(Error::InvertedExtrema { low, high });
    }
    if high == low {
        return Ok(Bounds {
            low,
            high,
            min: low,
            max: high,
            range: 0.0,
            step: Some(1.0),
            values: vec![round_with_precision(low)],
        });
    }

    let value_range = high - low;
    let oom = order_of_magnitude(value_range);
    let mut step = 10f64.powf(oom);
    let mut min = (low / step).floor() * step;
    let mut max = (high / step).ceil() * step;
    // Extrema closer together than the float resolution at their magnitude
    // can collapse the rounded edges; keep the range one step wide.
    if max == min {
        max += step;
    }
    let mut range = max - min;

    let scale_up = project_length(axis_length, step, range) < scale_min_space;
    let smallest_factor = if only_integer { rho(range) } else { 0.0 };

    if only_integer && project_length(axis_length, 1.0, range) >= scale_min_space {
        step = 1.0;
    } else if only_integer
        && smallest_factor < step
        && project_length(axis_length, smallest_factor, range) >= scale_min_space
    {
        step = smallest_factor;
    } else {
        let mut optimization_counter = 0;
        loop {
            if scale_up && project_length(axis_length, step, range) <= scale_min_space {
                step *= 2.0;
            } else if !scale_up && project_length(axis_length, step / 2.0, range) >= scale_min_space
            {
                step /= 2.0;
                if only_integer && step.fract() != 0.0 {
                    step *= 2.0;
                    break;
                }
            } else {
                break;
            }

            optimization_counter += 1;
            if optimization_counter > MAX_OPTIMIZATION_STEPS {
                return Err(Error::BoundsOptimization);
            }
        }
    }
    step = step.max(EPSILON);

    // Narrow min and max towards the raw extrema based on the final step.
    let mut new_min = min;
    let mut new_max = max;
    while new_min + step <= low {
        new_min = safe_increment(new_min, step);
    }
    while new_max - step >= high {
        new_max = safe_increment(new_max, -step);
    }
    min = new_min;
    max = new_max;
    range = max - min;

    let mut values = Vec::new();
    let mut tick = min;
    while tick <= max {
        let value = round_with_precision(tick);
        if values.last() != Some(&value) {
            values.push(value);
        }
        tick = safe_increment(tick, step);
    }

    Ok(Bounds {
        low,
        high,
        min,
        max,
        range,
        step: Some(step),
        values,
    })
}

/// Order of magnitude of a positive value.
fn order_of_magnitude(value: f64) -> f64 {
    value.abs().log10().floor()
}

/// Pixel length a span of `length` value units occupies on the axis.
fn project_length(axis_length: f64, length: f64, range: f64) -> f64 {
    length / range * axis_length
}

/// Round to [`PRECISION`] decimal digits.
fn round_with_precision(value: f64) -> f64 {
    let pow = 10f64.powi(PRECISION);
    (value * pow).round() / pow
}

/// Add `increment` and, if the addition underflows at the current magnitude,
/// nudge by one relative epsilon instead so tick enumeration always
/// terminates.
fn safe_increment(value: f64, increment: f64) -> f64 {
    let next = value + increment;
    if next == value {
        value * (1.0 + if increment > 0.0 { EPSILON } else { -EPSILON })
    } else {
        next
    }
}

/// A small nontrivial factor of an integral value (Pollard's rho, with 2
/// handled by trial division). Non-integral or oversized inputs are returned
/// unchanged, which makes the caller's `smallest_factor < step` guard fail
/// closed.
fn rho(num: f64) -> f64 {
    if num == 1.0 || num.fract() != 0.0 || num <= 0.0 || num > u64::MAX as f64 {
        return num;
    }
    let n = num as u64;
    if n % 2 == 0 {
        return 2.0;
    }

    let advance = |x: u64| -> u64 {
        let x = u128::from(x);
        ((x * x + 1) % u128::from(n)) as u64
    };
    let mut x1 = 2u64;
    let mut x2 = 2u64;
    loop {
        x1 = advance(x1);
        x2 = advance(advance(x2));
        let divisor = gcd(x1.abs_diff(x2), n);
        if divisor != 1 {
            return divisor as f64;
        }
    }
}

fn gcd(mut p: u64, mut q: u64) -> u64 {
    while q != 0 {
        let r = p % q;
        p = q;
        q = r;
    }
    p
}
