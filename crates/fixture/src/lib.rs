//! Generation, formatting, and verification of reference fixtures.
//!
//! A fixture is produced by one straight pass per function under test:
//!
//! 1. A [`Descriptor`] names the fixture, declares its axes, and declares the
//!    shape of the function's outputs.
//! 2. [`records`] enumerates the grid, thins it with the sampling rule for the
//!    descriptor's arity, and calls the model once per kept tuple.
//! 3. [`write_fixture`] renders every record as a literal array, using
//!    28-digit scientific notation so every `f64` survives the round trip.
//!
//! The reverse direction, [`parse_fixture`] and [`verify`], reads a fixture
//! back and re-checks a model against it within a [`Tolerance`].

mod config;
mod descriptor;
mod error;
mod format;
mod generate;
mod parse;
mod record;
mod verify;
mod write;

pub use config::{Config, ConfigError, Declaration};
pub use descriptor::{Descriptor, DescriptorError};
pub use error::Error;
pub use format::{Field, Sci};
pub use generate::{Records, generate, records};
pub use parse::{Literal, ParseError, ParsedFixture, parse_fixture};
pub use record::{Fixture, ResultRecord};
pub use verify::{Mismatch, Report, Tolerance, VerifyError, verify};
pub use write::{FixtureWriter, Summary, write_fixture};
