//! Forward/inverse value transforms used for axis scaling.
//!
//! A [`Transform`] maps data values into the space in which ticks are spaced
//! evenly, and back. The registry covers identity (linear) and logarithm to
//! an arbitrary base; callers can also supply their own monotonic pair.

use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};

/// Boxed scalar function for caller-supplied transform pairs.
type ScalarFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// An invertible scalar transform.
///
/// Cloning is cheap; custom pairs are shared behind an [`Arc`].
///
/// # Invariant
///
/// `inverse(forward(v)) ≈ v` for every `v` in the transform's domain, and
/// `forward` must be strictly monotonic over that domain. Built-in
/// transforms satisfy this by construction; for [`Transform::custom`] it is
/// the caller's responsibility and is not enforced at runtime.
#[derive(Clone)]
pub struct Transform {
    repr: Repr,
}

#[derive(Clone)]
enum Repr {
    Linear,
    Log { base: f64, ln_base: f64 },
    Custom { forward: ScalarFn, inverse: ScalarFn },
}

impl Transform {
    /// Identity transform in both directions.
    #[must_use]
    pub fn linear() -> Self {
        Self { repr: Repr::Linear }
    }

    /// Logarithm to `base`: forward is `ln(v) / ln(base)`, inverse is
    /// `base^v`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLogBase`] if `base` is not finite or not
    /// greater than 1.
    pub fn log_base(base: f64) -> Result<Self> {
        if !base.is_finite() || base <= 1.0 {
            return Err(Error::InvalidLogBase(base));
        }
        Ok(Self {
            repr: Repr::Log {
                base,
                ln_base: base.ln(),
            },
        })
    }

    /// Caller-supplied forward/inverse pair, accepted verbatim.
    pub fn custom<F, I>(forward: F, inverse: I) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
        I: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self {
            repr: Repr::Custom {
                forward: Arc::new(forward),
                inverse: Arc::new(inverse),
            },
        }
    }

    /// Map a data value into transformed space.
    #[must_use]
    pub fn forward(&self, value: f64) -> f64 {
        match &self.repr {
            Repr::Linear => value,
            Repr::Log { ln_base, .. } => value.ln() / ln_base,
            Repr::Custom { forward, .. } => forward(value),
        }
    }

    /// Map a transformed value back into data space.
    #[must_use]
    pub fn inverse(&self, value: f64) -> f64 {
        match &self.repr {
            Repr::Linear => value,
            Repr::Log { base, .. } => base.powf(value),
            Repr::Custom { inverse, .. } => inverse(value),
        }
    }

    /// Whether this is the identity transform.
    #[must_use]
    pub fn is_linear(&self) -> bool {
        matches!(self.repr, Repr::Linear)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::linear()
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Linear => f.write_str("Transform::Linear"),
            Repr::Log { base, .. } => f.debug_struct("Transform::Log").field("base", base).finish(),
            Repr::Custom { .. } => f.write_str("Transform::Custom"),
        }
    }
}
