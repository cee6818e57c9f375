use std::iter::FusedIterator;

use thiserror::Error;

/// One swept input dimension.
///
/// An axis enumerates `start`, `start + step`, `start + step + step`, ... for
/// as long as the running value stays `<= stop`. Values are accumulated by
/// repeated addition, never computed as `start + i * step`, so the sequence is
/// bit-for-bit reproducible by any implementation that adds in the same order.
/// The last value may fall short of `stop` when accumulation drifts; that drift
/// is part of the sequence and is never snapped away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    start: f64,
    stop: f64,
    step: f64,
}

/// Errors that can occur when constructing an [`Axis`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum AxisError {
    #[error("axis bound is not finite: {value}")]
    NonFiniteBound { value: f64 },

    #[error("axis step must be finite and positive, got {step}")]
    InvalidStep { step: f64 },

    #[error("axis range is descending: start {start} > stop {stop}")]
    Descending { start: f64, stop: f64 },

    #[error("axis step {step} does not advance past {at}")]
    StepTooSmall { step: f64, at: f64 },
}

impl Axis {
    /// Creates an ascending axis over `[start, stop]`.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is not finite, if `step` is not a finite
    /// positive number, if `start > stop`, or if adding `step` would leave the
    /// running value unchanged somewhere in the range.
    pub fn new(start: f64, stop: f64, step: f64) -> Result<Self, AxisError> {
        if !start.is_finite() {
            return Err(AxisError::NonFiniteBound { value: start });
        }
        if !stop.is_finite() {
            return Err(AxisError::NonFiniteBound { value: stop });
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(AxisError::InvalidStep { step });
        }
        if start > stop {
            return Err(AxisError::Descending { start, stop });
        }

        // Spacing between floats grows with magnitude, so the ends of the
        // range are where a small step would stall.
        for at in [start, stop] {
            if at + step <= at {
                return Err(AxisError::StepTooSmall { step, at });
            }
        }

        Ok(Self { start, stop, step })
    }

    /// Returns a fresh iterator over the axis values.
    ///
    /// Each call starts over from `start`.
    #[must_use]
    pub fn values(&self) -> AxisValues {
        AxisValues {
            next: self.start,
            stop: self.stop,
            step: self.step,
        }
    }

    /// Returns the number of values the axis produces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values().count()
    }

    /// Always `false`; a valid axis yields at least `start`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl IntoIterator for &Axis {
    type Item = f64;
    type IntoIter = AxisValues;

    fn into_iter(self) -> Self::IntoIter {
        self.values()
    }
}

/// Iterator over the values of an [`Axis`].
#[derive(Debug, Clone)]
pub struct AxisValues {
    next: f64,
    stop: f64,
    step: f64,
}

impl Iterator for AxisValues {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next <= self.stop {
            let value = self.next;
            self.next += self.step;
            Some(value)
        } else {
            None
        }
    }
}

impl FusedIterator for AxisValues {}
