//! Auto-scaled axis construction and value-to-pixel projection.
//!
//! An [`Axis`] is an immutable snapshot built once per render: it combines
//! the axis unit, the available chart rectangle, the resolved [`Bounds`] and
//! the active transform, and exposes [`Axis::project_value`] for the
//! renderer to place points, gridlines and labels. Rebuild it on resize or
//! data updates; it is never mutated in place.

use crate::bounds::{self, Bounds};
use crate::error::{Error, Result};
use crate::extrema::{self, HighLow};
use crate::scale::Scale;
use crate::transform::Transform;

/// Default minimum pixel spacing between ticks.
const DEFAULT_SCALE_MIN_SPACE: f64 = 20.0;

/// Geometric dimension an axis runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// Left-to-right.
    Horizontal,
    /// Bottom-to-top.
    Vertical,
}

/// Which dimension an axis renders and which data-point field it reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisUnit {
    /// Geometric dimension.
    pub dim: Dimension,
    /// Property name read from a data point.
    pub field: &'static str,
}

impl AxisUnit {
    /// The horizontal `x` unit.
    #[must_use]
    pub fn x() -> Self {
        Self {
            dim: Dimension::Horizontal,
            field: "x",
        }
    }

    /// The vertical `y` unit.
    #[must_use]
    pub fn y() -> Self {
        Self {
            dim: Dimension::Vertical,
            field: "y",
        }
    }
}

/// Pixel rectangle available for the chart.
///
/// `x1`/`x2` are the left/right edges; `y1`/`y2` are the bottom/top edges in
/// screen coordinates, so `y1 >= y2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartRect {
    /// Left edge.
    pub x1: f64,
    /// Right edge.
    pub x2: f64,
    /// Bottom edge (larger screen coordinate).
    pub y1: f64,
    /// Top edge.
    pub y2: f64,
}

impl ChartRect {
    /// Construct a chart rectangle from its edges.
    #[must_use]
    pub fn new(x1: f64, x2: f64, y1: f64, y2: f64) -> Self {
        Self { x1, x2, y1, y2 }
    }

    /// Pixel length available along `dim`.
    #[must_use]
    pub fn axis_length(&self, dim: Dimension) -> f64 {
        match dim {
            Dimension::Horizontal => self.x2 - self.x1,
            Dimension::Vertical => self.y1 - self.y2,
        }
    }
}

/// Configuration recognized by auto-scaled axes.
#[derive(Debug, Clone)]
pub struct AxisOptions {
    /// Explicit upper extremum; the computed data maximum is ignored.
    pub high: Option<f64>,
    /// Explicit lower extremum; the computed data minimum is ignored.
    pub low: Option<f64>,
    /// Minimum pixel spacing between ticks.
    pub scale_min_space: f64,
    /// Restrict ticks and bounds to whole numbers.
    pub only_integer: bool,
    /// A value guaranteed to be included in the resolved domain.
    pub reference_value: Option<f64>,
    /// Scale model; defaults to linear.
    pub scale: Scale,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self {
            high: None,
            low: None,
            scale_min_space: DEFAULT_SCALE_MIN_SPACE,
            only_integer: false,
            reference_value: None,
            scale: Scale::default(),
        }
    }
}

impl AxisOptions {
    /// Override the upper extremum.
    #[must_use]
    pub fn high(mut self, high: f64) -> Self {
        self.high = Some(high);
        self
    }

    /// Override the lower extremum.
    #[must_use]
    pub fn low(mut self, low: f64) -> Self {
        self.low = Some(low);
        self
    }

    /// Set the minimum pixel spacing between ticks.
    #[must_use]
    pub fn scale_min_space(mut self, pixels: f64) -> Self {
        self.scale_min_space = pixels;
        self
    }

    /// Restrict ticks and bounds to whole numbers.
    #[must_use]
    pub fn only_integer(mut self, only_integer: bool) -> Self {
        self.only_integer = only_integer;
        self
    }

    /// Guarantee a value is included in the domain.
    #[must_use]
    pub fn reference_value(mut self, value: f64) -> Self {
        self.reference_value = Some(value);
        self
    }

    /// Select the scale model.
    #[must_use]
    pub fn scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }
}

/// An automatically scaled axis.
///
/// Construction resolves the domain and ticks; afterwards the axis is an
/// immutable value whose [`project_value`](Axis::project_value) is pure and
/// O(1), safe to call once per data point, gridline and label.
#[derive(Debug, Clone)]
pub struct Axis {
    unit: AxisUnit,
    rect: ChartRect,
    bounds: Bounds,
    transform: Transform,
    axis_length: f64,
}

impl Axis {
    /// Build an axis over raw series data.
    ///
    /// Extrema are computed from `series` (honoring the `high`/`low` and
    /// `reference_value` options), then resolved into bounds according to
    /// the configured scale.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyData`] when no usable extrema exist, plus everything
    /// [`Axis::with_extrema`] can return.
    pub fn auto_scale(
        unit: AxisUnit,
        series: &[&[f64]],
        rect: ChartRect,
        options: &AxisOptions,
    ) -> Result<Self> {
        let high_low = extrema::high_low(series, options)?;
        Self::with_extrema(unit, high_low, rect, options)
    }

    /// Build an axis from already-known extrema.
    ///
    /// Logarithmic scales snap the domain to integer powers of the base and
    /// emit one tick per decade. Linear and custom scales transform the
    /// extrema, delegate nice-number rounding to [`bounds::nice_bounds`] in
    /// transformed space and map the result back through the inverse.
    ///
    /// # Errors
    ///
    /// [`Error::LogDomain`] for a logarithmic scale over data that touches
    /// or crosses zero, [`Error::InvalidLogBase`] for a bad base,
    /// [`Error::NonFiniteExtrema`] / [`Error::InvertedExtrema`] /
    /// [`Error::BoundsOptimization`] from bounds computation.
    pub fn with_extrema(
        unit: AxisUnit,
        high_low: HighLow,
        rect: ChartRect,
        options: &AxisOptions,
    ) -> Result<Self> {
        let axis_length = rect.axis_length(unit.dim);
        let transform = options.scale.transform()?;
        let bounds = match &options.scale {
            Scale::Logarithmic { base } => log_bounds(high_low, *base)?,
            _ => continuous_bounds(high_low, axis_length, options, &transform)?,
        };
        Ok(Self {
            unit,
            rect,
            bounds,
            transform,
            axis_length,
        })
    }

    /// Project a data value to a pixel offset along the axis.
    ///
    /// `project_value(min) == 0` and `project_value(max) == axis_length`;
    /// the mapping is monotonic whenever the transform is.
    ///
    /// Two recoverable conditions never panic or return non-finite values:
    ///
    /// - A degenerate domain (the transformed span is zero or non-finite)
    ///   maps every input to the axis midpoint, `axis_length / 2`.
    /// - A transform evaluation that produces a non-finite result for this
    ///   particular call (an ill-behaved custom pair, or a non-positive
    ///   sample reaching a logarithmic axis) falls back to projecting the
    ///   untransformed values for this call only, reported through
    ///   `tracing` at warn level.
    #[must_use]
    pub fn project_value(&self, value: f64) -> f64 {
        let mut min = self.transform.forward(self.bounds.min);
        let mut max = self.transform.forward(self.bounds.max);
        let mut transformed = self.transform.forward(value);
        if !min.is_finite() || !max.is_finite() || !transformed.is_finite() {
            tracing::warn!(
                value,
                min = self.bounds.min,
                max = self.bounds.max,
                "transform produced a non-finite value, projecting untransformed"
            );
            min = self.bounds.min;
            max = self.bounds.max;
            transformed = value;
        }

        let range = max - min;
        if range == 0.0 || !range.is_finite() {
            return self.axis_length / 2.0;
        }
        self.axis_length * (transformed - min) / range
    }

    /// Ordered tick values, in data space.
    #[must_use]
    pub fn ticks(&self) -> &[f64] {
        &self.bounds.values
    }

    /// The resolved bounds.
    #[must_use]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Pixel length of the axis.
    #[must_use]
    pub fn axis_length(&self) -> f64 {
        self.axis_length
    }

    /// The unit this axis renders.
    #[must_use]
    pub fn unit(&self) -> AxisUnit {
        self.unit
    }

    /// The chart rectangle this axis was built for.
    #[must_use]
    pub fn chart_rect(&self) -> ChartRect {
        self.rect
    }
}

/// Decade-snapped bounds for a logarithmic scale.
///
/// The domain is `[base^floor(log_base(low)), base^ceil(log_base(high))]`
/// and every integer power of `base` in between becomes a tick, so the
/// resulting `values` always bracket the data and hold at least one element.
fn log_bounds(high_low: HighLow, base: f64) -> Result<Bounds> {
    let HighLow { low, high } = high_low;
    if !low.is_finite() || !high.is_finite() {
        return Err(Error::NonFiniteExtrema { low, high });
    }
    if high < low {
        return Err(Error::InvertedExtrema { low, high });
    }
    // A zero or sign-straddling range has no logarithm; negative-only data
    // doesn't either. Reject instead of silently falling back to linear.
    if low <= 0.0 {
        return Err(Error::LogDomain { low, high });
    }

    let min_decade = low.log(base).floor();
    let max_decade = high.log(base).ceil();
    let min = base.powf(min_decade);
    let max = base.powf(max_decade);
    let values = (min_decade as i64..=max_decade as i64)
        .map(|decade| base.powf(decade as f64))
        .collect();

    Ok(Bounds {
        low,
        high,
        min,
        max,
        range: max - min,
        step: None,
        values,
    })
}

/// Bounds for linear and custom-transformed scales.
///
/// Nice-number rounding happens in transformed space; every value-space
/// field of the result is mapped back through the inverse, and the range is
/// recomputed afterwards since a transform is not generally range-linear.
fn continuous_bounds(
    high_low: HighLow,
    axis_length: f64,
    options: &AxisOptions,
    transform: &Transform,
) -> Result<Bounds> {
    let transformed = HighLow {
        low: transform.forward(high_low.low),
        high: transform.forward(high_low.high),
    };
    let bounds = bounds::nice_bounds(
        axis_length,
        transformed,
        options.scale_min_space,
        options.only_integer,
    )?;

    let min = transform.inverse(bounds.min);
    let max = transform.inverse(bounds.max);
    Ok(Bounds {
        low: transform.inverse(bounds.low),
        high: transform.inverse(bounds.high),
        min,
        max,
        range: max - min,
        step: bounds.step.map(|s| transform.inverse(s)),
        values: bounds.values.iter().map(|v| transform.inverse(*v)).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::Scale;
    use crate::transform::Transform;

    fn rect(length: f64) -> ChartRect {
        ChartRect::new(0.0, length, length, 0.0)
    }

    #[test]
    fn test_axis_unit_constructors() {
        assert_eq!(AxisUnit::x().dim, Dimension::Horizontal);
        assert_eq!(AxisUnit::x().field, "x");
        assert_eq!(AxisUnit::y().dim, Dimension::Vertical);
        assert_eq!(AxisUnit::y().field, "y");
    }

    #[test]
    fn test_chart_rect_axis_length() {
        let r = ChartRect::new(50.0, 450.0, 380.0, 30.0);
        assert_eq!(r.axis_length(Dimension::Horizontal), 400.0);
        assert_eq!(r.axis_length(Dimension::Vertical), 350.0);
    }

    #[test]
    fn test_options_defaults() {
        let options = AxisOptions::default();
        assert_eq!(options.scale_min_space, 20.0);
        assert!(!options.only_integer);
        assert!(options.high.is_none());
        assert!(matches!(options.scale, Scale::Linear));
    }

    #[test]
    fn test_linear_axis_endpoints() {
        let axis = Axis::auto_scale(
            AxisUnit::y(),
            &[&[0.0, 25.0, 100.0]],
            rect(400.0),
            &AxisOptions::default(),
        )
        .unwrap();
        let min = axis.bounds().min;
        let max = axis.bounds().max;
        assert_eq!(axis.project_value(min), 0.0);
        assert_eq!(axis.project_value(max), 400.0);
        assert_eq!(axis.project_value(25.0), 100.0);
    }

    #[test]
    fn test_projection_is_monotonic_and_bounded() {
        let axis = Axis::auto_scale(
            AxisUnit::x(),
            &[&[3.0, 42.0, 97.0]],
            rect(500.0),
            &AxisOptions::default(),
        )
        .unwrap();
        let min = axis.bounds().min;
        let max = axis.bounds().max;
        let mut last = f64::NEG_INFINITY;
        for i in 0..=100 {
            let v = min + (max - min) * f64::from(i) / 100.0;
            let p = axis.project_value(v);
            assert!((0.0..=500.0).contains(&p), "projection {p} out of range");
            assert!(p >= last);
            last = p;
        }
    }

    #[test]
    fn test_projection_is_idempotent() {
        let axis = Axis::auto_scale(
            AxisUnit::x(),
            &[&[1.0, 50.0]],
            rect(300.0),
            &AxisOptions::default(),
        )
        .unwrap();
        assert_eq!(axis.project_value(17.3), axis.project_value(17.3));
    }

    #[test]
    fn test_log_axis_rejects_non_positive_data() {
        let options = AxisOptions::default().scale(Scale::log10());
        let err = Axis::with_extrema(
            AxisUnit::y(),
            HighLow::new(-5.0, 10.0),
            rect(100.0),
            &options,
        )
        .unwrap_err();
        assert!(matches!(err, Error::LogDomain { .. }));

        assert!(Axis::with_extrema(
            AxisUnit::y(),
            HighLow::new(0.0, 10.0),
            rect(100.0),
            &options,
        )
        .is_err());

        // Negative-only data has no real logarithm either.
        assert!(Axis::with_extrema(
            AxisUnit::y(),
            HighLow::new(-100.0, -1.0),
            rect(100.0),
            &options,
        )
        .is_err());
    }

    #[test]
    fn test_log_axis_decade_ticks() {
        let options = AxisOptions::default().scale(Scale::log10());
        let axis = Axis::with_extrema(
            AxisUnit::y(),
            HighLow::new(12.5, 11000.0),
            rect(100.0),
            &options,
        )
        .unwrap();
        // floor(log10(12.5)) = 1, ceil(log10(11000)) = 5: decades bracket
        // the data on both sides.
        assert_eq!(
            axis.ticks(),
            &[10.0, 100.0, 1000.0, 10000.0, 100_000.0][..]
        );
        assert_eq!(axis.bounds().min, 10.0);
        assert_eq!(axis.bounds().max, 100_000.0);
        assert_eq!(axis.bounds().step, None);
    }

    #[test]
    fn test_log_axis_exact_powers() {
        let options = AxisOptions::default().scale(Scale::log10());
        let axis = Axis::with_extrema(
            AxisUnit::y(),
            HighLow::new(10.0, 10000.0),
            rect(100.0),
            &options,
        )
        .unwrap();
        assert_eq!(axis.ticks(), &[10.0, 100.0, 1000.0, 10000.0][..]);
        assert_eq!(axis.project_value(10.0), 0.0);
        assert_eq!(axis.project_value(10000.0), 100.0);
    }

    #[test]
    fn test_log_axis_base2() {
        let options = AxisOptions::default().scale(Scale::log(2.0).unwrap());
        let axis = Axis::with_extrema(
            AxisUnit::x(),
            HighLow::new(1.0, 16.0),
            rect(400.0),
            &options,
        )
        .unwrap();
        assert_eq!(axis.ticks(), &[1.0, 2.0, 4.0, 8.0, 16.0][..]);
        // Each octave spans the same number of pixels.
        assert!((axis.project_value(2.0) - 100.0).abs() < 1e-9);
        assert!((axis.project_value(8.0) - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_log_axis_single_value_has_a_tick() {
        let options = AxisOptions::default().scale(Scale::log10());
        let axis = Axis::with_extrema(
            AxisUnit::y(),
            HighLow::new(100.0, 100.0),
            rect(100.0),
            &options,
        )
        .unwrap();
        assert_eq!(axis.ticks(), &[100.0][..]);
        // Degenerate domain: everything lands on the axis midpoint.
        assert_eq!(axis.project_value(100.0), 50.0);
    }

    #[test]
    fn test_equal_extrema_on_linear_axis() {
        let axis = Axis::with_extrema(
            AxisUnit::y(),
            HighLow::new(5.0, 5.0),
            rect(100.0),
            &AxisOptions::default(),
        )
        .unwrap();
        assert_eq!(axis.ticks(), &[5.0][..]);
        let p = axis.project_value(5.0);
        assert!(p.is_finite());
        assert_eq!(p, 50.0);
    }

    #[test]
    fn test_degenerate_domain_projects_to_midpoint() {
        // A constant forward collapses the transformed span to zero.
        let collapsing = Transform::custom(|_| 1.0, |v| v);
        let options = AxisOptions::default().scale(Scale::Custom(collapsing));
        let axis = Axis::with_extrema(
            AxisUnit::y(),
            HighLow::new(5.0, 5.0),
            rect(200.0),
            &options,
        )
        .unwrap();
        let p = axis.project_value(5.0);
        assert!(p.is_finite());
        assert_eq!(p, 100.0);
    }

    #[test]
    fn test_custom_sqrt_transform() {
        let sqrt = Transform::custom(f64::sqrt, |v| v * v);
        let options = AxisOptions::default().scale(Scale::Custom(sqrt));
        let axis = Axis::with_extrema(
            AxisUnit::x(),
            HighLow::new(1.0, 100.0),
            rect(100.0),
            &options,
        )
        .unwrap();
        let min = axis.bounds().min;
        let max = axis.bounds().max;
        assert!(min <= 1.0);
        assert!(max >= 100.0);
        assert_eq!(axis.project_value(min), 0.0);
        assert_eq!(axis.project_value(max), 100.0);
        let p1 = axis.project_value(1.0);
        let p25 = axis.project_value(25.0);
        let p100 = axis.project_value(100.0);
        assert!(p1 < p25 && p25 < p100);
    }

    #[test]
    fn test_custom_transform_failure_falls_back_per_call() {
        // sqrt of a negative sample is NaN; the single call degrades to an
        // untransformed projection instead of poisoning the render.
        let sqrt = Transform::custom(f64::sqrt, |v| v * v);
        let options = AxisOptions::default().scale(Scale::Custom(sqrt));
        let axis = Axis::with_extrema(
            AxisUnit::x(),
            HighLow::new(1.0, 100.0),
            rect(100.0),
            &options,
        )
        .unwrap();
        let p = axis.project_value(-4.0);
        assert!(p.is_finite());
        // Well-formed values keep projecting through the transform.
        assert_eq!(axis.project_value(axis.bounds().max), 100.0);
    }

    #[test]
    fn test_only_integer_axis() {
        let options = AxisOptions::default().only_integer(true);
        let axis = Axis::auto_scale(AxisUnit::y(), &[&[0.2, 7.8]], rect(600.0), &options).unwrap();
        for tick in axis.ticks() {
            assert_eq!(tick.fract(), 0.0, "tick {tick} is not an integer");
        }
    }

    #[test]
    fn test_high_low_override_flows_into_bounds() {
        let options = AxisOptions::default().low(0.0).high(100.0);
        let axis = Axis::auto_scale(
            AxisUnit::y(),
            &[&[40.0, 60.0]],
            rect(400.0),
            &options,
        )
        .unwrap();
        assert!(axis.bounds().min <= 0.0);
        assert!(axis.bounds().max >= 100.0);
    }

    #[test]
    fn test_axis_is_cloneable_snapshot() {
        let axis = Axis::auto_scale(
            AxisUnit::x(),
            &[&[1.0, 9.0]],
            rect(100.0),
            &AxisOptions::default(),
        )
        .unwrap();
        let copy = axis.clone();
        assert_eq!(copy.project_value(4.2), axis.project_value(4.2));
        assert_eq!(copy.ticks(), axis.ticks());
        assert_eq!(copy.unit(), axis.unit());
        assert_eq!(copy.chart_rect(), axis.chart_rect());
    }
}
