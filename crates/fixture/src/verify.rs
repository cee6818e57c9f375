use approx::relative_eq;
use sextant_core::{Model, OutputValue, Outputs};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    Config, Descriptor, Error, ParseError, ParsedFixture, ResultRecord, generate::check_shape,
};

/// Tolerance for comparing recorded outputs against recomputed ones.
///
/// Two values match when they are within `abs` of each other, or within
/// `rel` of the larger magnitude. NaN matches NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    pub abs: f64,
    pub rel: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            abs: 1e-8,
            rel: 1e-12,
        }
    }
}

impl Tolerance {
    /// Requires bit-for-bit agreement.
    pub const EXACT: Self = Self { abs: 0.0, rel: 0.0 };

    /// Returns true if `recorded` and `computed` agree.
    #[must_use]
    pub fn matches(&self, recorded: f64, computed: f64) -> bool {
        if recorded.is_nan() || computed.is_nan() {
            return recorded.is_nan() && computed.is_nan();
        }
        recorded == computed
            || relative_eq!(recorded, computed, epsilon = self.abs, max_relative = self.rel)
    }
}

/// One recorded value that disagrees with its recomputation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mismatch {
    pub row: usize,
    /// Position in the record, inputs first.
    pub field: usize,
    /// Element within a vector or matrix field, row-major; zero otherwise.
    pub element: usize,
    pub recorded: f64,
    pub computed: f64,
}

/// Result of checking a model against a fixture.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    pub rows: usize,
    pub mismatches: Vec<Mismatch>,
}

impl Report {
    /// Returns true if every recorded value matched.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Errors that prevent a fixture from being checked at all.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("fixture is named `{found}`, expected `{expected}`")]
    Name { expected: String, found: String },

    #[error("malformed fixture: {0}")]
    Parse(#[from] ParseError),

    #[error("fixture has {found} records, expected {expected}")]
    RecordCount { expected: usize, found: usize },

    #[error(transparent)]
    Generate(#[from] Error),
}

/// Checks `model` against a parsed fixture.
///
/// Recorded inputs must equal the sampled grid tuples exactly. The model is
/// then called with each recorded input and its outputs are compared to the
/// recorded ones within `tolerance`. Disagreements are collected in the
/// returned [`Report`] rather than failing fast.
///
/// # Errors
///
/// Returns an error if the fixture name, record count, or field layout does
/// not match the descriptor, or if the model fails.
pub fn verify<M, const N: usize>(
    model: M,
    descriptor: &Descriptor<N>,
    config: &Config,
    parsed: &ParsedFixture,
    tolerance: Tolerance,
) -> Result<Report, VerifyError>
where
    M: Model<Input = [f64; N]>,
    M::Output: Outputs,
{
    let expected = config.fixture_name(descriptor.name());
    if parsed.name != expected {
        return Err(VerifyError::Name {
            expected,
            found: parsed.name.clone(),
        });
    }

    let records = parsed.records::<N>(descriptor.outputs())?;
    if records.len() != descriptor.expected_records() {
        return Err(VerifyError::RecordCount {
            expected: descriptor.expected_records(),
            found: records.len(),
        });
    }

    debug!(fixture = descriptor.name(), rows = records.len(), "verifying fixture");

    let samples = descriptor.sampling().apply(descriptor.grid().samples());
    let mut report = Report {
        rows: records.len(),
        mismatches: Vec::new(),
    };

    for (row, (record, sample)) in records.iter().zip(samples).enumerate() {
        for (field, (&recorded, &computed)) in record.inputs.iter().zip(&sample).enumerate() {
            if recorded != computed {
                report.mismatches.push(Mismatch {
                    row,
                    field,
                    element: 0,
                    recorded,
                    computed,
                });
            }
        }

        let computed = recompute(&model, descriptor, record)?;
        for (i, (recorded, computed)) in record.outputs.iter().zip(&computed).enumerate() {
            let pairs = flatten(recorded).into_iter().zip(flatten(computed));
            for (element, (recorded, computed)) in pairs.enumerate() {
                if !tolerance.matches(recorded, computed) {
                    report.mismatches.push(Mismatch {
                        row,
                        field: N + i,
                        element,
                        recorded,
                        computed,
                    });
                }
            }
        }
    }

    if !report.is_clean() {
        warn!(
            fixture = descriptor.name(),
            mismatches = report.mismatches.len(),
            "fixture disagrees with model"
        );
    }
    Ok(report)
}

fn recompute<M, const N: usize>(
    model: &M,
    descriptor: &Descriptor<N>,
    record: &ResultRecord<N>,
) -> Result<Vec<OutputValue>, Error>
where
    M: Model<Input = [f64; N]>,
    M::Output: Outputs,
{
    let output = model
        .call(&record.inputs)
        .map_err(|source| Error::model(descriptor.name(), &record.inputs, source))?;
    let values = output.values();

    check_shape(descriptor, values.iter().map(OutputValue::kind))?;
    Ok(values)
}

fn flatten(value: &OutputValue) -> Vec<f64> {
    match value {
        OutputValue::Scalar(value) => vec![*value],
        OutputValue::Vector(vector) => vector.to_vec(),
        OutputValue::Matrix(matrix) => matrix.iter().flatten().copied().collect(),
        OutputValue::Integer(value) => vec![f64::from(*value)],
    }
}
