//! Core traits and types for Sextant reference fixtures.
//!
//! This crate defines the sampling side of fixture generation and the seam to
//! the function under test:
//!
//! - [`Axis`]: one swept input dimension, enumerated by repeated addition
//! - [`Grid`]: the row-major Cartesian product of N axes
//! - [`Sampling`] and [`Decimator`]: the deterministic 1-in-5 thinning rule
//! - [`Model`]: a callable that maps a sampled tuple to a structured output
//! - [`Outputs`]: flattens a structured output into typed fixture fields

mod axis;
mod grid;
mod model;
mod output;
mod sampling;

pub use axis::{Axis, AxisError, AxisValues};
pub use grid::{Grid, Samples};
pub use model::{FnModel, Model, from_fn};
pub use output::{Matrix3, OutputKind, OutputValue, Outputs, Vector3};
pub use sampling::{Decimated, Decimator, Sampling};
