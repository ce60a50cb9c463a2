//! Scale descriptors and the scale-selector token grammar.
//!
//! A scale is configured either from a short token (`"linear"`, `"log"`,
//! `"log2"`, `"log10"`, ...) or by supplying a pre-built transform pair.
//! Tokens are parsed once at the configuration boundary into a [`Scale`]
//! variant; nothing downstream works with strings.

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::transform::Transform;

/// Default base when a logarithmic family is selected without one.
const DEFAULT_LOG_BASE: f64 = 10.0;

/// The mathematical model of an axis.
#[derive(Debug, Clone, Default)]
pub enum Scale {
    /// Evenly spaced values, no transformation.
    #[default]
    Linear,
    /// Logarithmic spacing with decade ticks at integer powers of `base`.
    Logarithmic {
        /// Logarithm base, finite and greater than 1.
        base: f64,
    },
    /// Caller-supplied monotonic forward/inverse pair.
    Custom(Transform),
}

impl Scale {
    /// Logarithmic scale with the default base 10.
    #[must_use]
    pub fn log10() -> Self {
        Scale::Logarithmic {
            base: DEFAULT_LOG_BASE,
        }
    }

    /// Logarithmic scale with an explicit base.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLogBase`] if `base` is not finite or not
    /// greater than 1.
    pub fn log(base: f64) -> Result<Self> {
        if !base.is_finite() || base <= 1.0 {
            return Err(Error::InvalidLogBase(base));
        }
        Ok(Scale::Logarithmic { base })
    }

    /// Parse a scale-selector token of the form
    /// `<family-letters><optional-numeric-base>`.
    ///
    /// Recognized families are `linear` (no base allowed) and `log` (base
    /// optional, default 10). Parse failure is a configuration error, never
    /// a silent default.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidScaleToken`] for an unrecognized family or malformed
    /// suffix, [`Error::InvalidLogBase`] for a base that is not finite or
    /// not greater than 1.
    pub fn parse(token: &str) -> Result<Self> {
        let split = token
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(token.len());
        let (family, suffix) = token.split_at(split);
        match family {
            "linear" if suffix.is_empty() => Ok(Scale::Linear),
            "log" => {
                let base = if suffix.is_empty() {
                    DEFAULT_LOG_BASE
                } else {
                    suffix
                        .parse::<f64>()
                        .map_err(|_| Error::InvalidScaleToken(token.to_string()))?
                };
                Scale::log(base)
            }
            _ => Err(Error::InvalidScaleToken(token.to_string())),
        }
    }

    /// Resolve the descriptor to its transform pair.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLogBase`] if a [`Scale::Logarithmic`] was
    /// constructed directly with an invalid base.
    pub fn transform(&self) -> Result<Transform> {
        match self {
            Scale::Linear => Ok(Transform::linear()),
            Scale::Logarithmic { base } => Transform::log_base(*base),
            Scale::Custom(transform) => Ok(transform.clone()),
        }
    }

    /// Whether decade snapping applies (logarithmic family).
    #[must_use]
    pub fn is_logarithmic(&self) -> bool {
        matches!(self, Scale::Logarithmic { .. })
    }
}

impl FromStr for Scale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Scale::parse(s)
    }
}

impl From<Transform> for Scale {
    fn from(transform: Transform) -> Self {
        Scale::Custom(transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_linear() {
        assert!(matches!(Scale::parse("linear").unwrap(), Scale::Linear));
    }

    #[test]
    fn test_parse_log_default_base() {
        match Scale::parse("log").unwrap() {
            Scale::Logarithmic { base } => assert_eq!(base, 10.0),
            other => panic!("expected Logarithmic, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_log_with_base() {
        match Scale::parse("log2").unwrap() {
            Scale::Logarithmic { base } => assert_eq!(base, 2.0),
            other => panic!("expected Logarithmic, got {other:?}"),
        }
        match Scale::parse("log10").unwrap() {
            Scale::Logarithmic { base } => assert_eq!(base, 10.0),
            other => panic!("expected Logarithmic, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_fractional_base() {
        match Scale::parse("log2.5").unwrap() {
            Scale::Logarithmic { base } => assert_eq!(base, 2.5),
            other => panic!("expected Logarithmic, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_family() {
        assert!(matches!(
            Scale::parse("sqrt"),
            Err(Error::InvalidScaleToken(_))
        ));
        assert!(Scale::parse("").is_err());
        assert!(Scale::parse("linear10").is_err());
    }

    #[test]
    fn test_parse_rejects_bad_base() {
        assert!(matches!(
            Scale::parse("log1"),
            Err(Error::InvalidLogBase(_))
        ));
        assert!(Scale::parse("log0.5").is_err());
        assert!(Scale::parse("log-2").is_err());
        assert!(matches!(
            Scale::parse("logx"),
            Err(Error::InvalidScaleToken(_))
        ));
    }

    #[test]
    fn test_default_is_linear() {
        assert!(matches!(Scale::default(), Scale::Linear));
    }

    #[test]
    fn test_from_str() {
        let scale: Scale = "log2".parse().unwrap();
        assert!(scale.is_logarithmic());
    }

    #[test]
    fn test_transform_resolution() {
        let t = Scale::parse("log10").unwrap().transform().unwrap();
        assert!((t.forward(100.0) - 2.0).abs() < 1e-12);
        assert!(Scale::Logarithmic { base: 0.0 }.transform().is_err());
    }
}
