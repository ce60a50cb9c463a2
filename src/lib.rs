//! # autoaxis
//!
//! Automatically scaled numeric axes for 2-D charts.
//!
//! Given series data, the pixel length available for an axis and a small set
//! of options, autoaxis resolves a "nice" numeric domain with evenly spaced
//! ticks and hands back a pure, O(1) value-to-pixel projection. Linear,
//! logarithmic (arbitrary base greater than 1) and caller-supplied monotonic
//! transforms are supported.
//!
//! ## Quick Start
//!
//! ```rust
//! use autoaxis::prelude::*;
//!
//! let rect = ChartRect::new(50.0, 450.0, 380.0, 30.0);
//! let options = AxisOptions::default().only_integer(true);
//! let axis = Axis::auto_scale(AxisUnit::y(), &[&[1.25, 12.5, 300.0]], rect, &options)?;
//!
//! for tick in axis.ticks() {
//!     let _offset = axis.project_value(*tick);
//! }
//! # Ok::<(), autoaxis::Error>(())
//! ```
//!
//! ## Error model
//!
//! Configuration mistakes (malformed scale tokens, a logarithm base of 1 or
//! below) and domain violations (logarithmic scaling over data that touches
//! or crosses zero) abort axis construction with an [`Error`]. A transform
//! misbehaving for one particular value during projection never aborts a
//! render: the single call degrades to an untransformed projection and is
//! reported through `tracing` (no subscriber is installed by this crate).

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::suboptimal_flops)]

/// Axis construction and value projection.
pub mod axis;

/// Nice-number bounds and tick computation.
pub mod bounds;

/// Error types.
pub mod error;

/// Extrema extraction over series data.
pub mod extrema;

/// Scale descriptors and the selector-token grammar.
pub mod scale;

/// Forward/inverse value transforms.
pub mod transform;

pub use error::{Error, Result};

/// Convenience re-exports for the common construction path.
pub mod prelude {
    pub use crate::axis::{Axis, AxisOptions, AxisUnit, ChartRect, Dimension};
    pub use crate::bounds::Bounds;
    pub use crate::error::{Error, Result};
    pub use crate::extrema::HighLow;
    pub use crate::scale::Scale;
    pub use crate::transform::Transform;
}
