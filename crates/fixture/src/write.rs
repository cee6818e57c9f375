use std::io::{self, Write};

use sextant_core::{Model, Outputs};

use crate::{Config, Descriptor, Error, Field, ResultRecord, Sci, records};

/// Writes the text of one fixture, line by line.
///
/// The layout is fixed:
///
/// ```text
/// [<keyword> ]<name><suffix> = [
///   [<in0>, <in1>, ..., <out0>, <out1>, ...  ],
///   ...
/// ];
/// ```
///
/// Callers are expected to call [`begin`](Self::begin) once, then
/// [`record`](Self::record) per record, then [`finish`](Self::finish).
#[derive(Debug)]
pub struct FixtureWriter<'a, W> {
    out: W,
    config: &'a Config,
}

impl<'a, W: Write> FixtureWriter<'a, W> {
    /// Creates a writer over `out`.
    pub fn new(out: W, config: &'a Config) -> Self {
        Self { out, config }
    }

    /// Writes the opening line for the fixture `name`.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn begin(&mut self, name: &str) -> io::Result<()> {
        if let Some(keyword) = self.config.declaration().keyword() {
            write!(self.out, "{keyword} ")?;
        }
        writeln!(self.out, "{} = [", self.config.fixture_name(name))
    }

    /// Writes one record line.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn record<const N: usize>(&mut self, record: &ResultRecord<N>) -> io::Result<()> {
        self.out.write_all(b"  [")?;

        let inputs = record.inputs.iter().map(|&value| Sci(value).to_string());
        let outputs = record.outputs.iter().map(|value| Field(value).to_string());
        for (i, field) in inputs.chain(outputs).enumerate() {
            if i > 0 {
                self.out.write_all(b", ")?;
            }
            self.out.write_all(field.as_bytes())?;
        }

        self.out.write_all(b"  ],\n")
    }

    /// Writes the closing line.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn finish(&mut self) -> io::Result<()> {
        self.out.write_all(b"];\n")
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Counts reported after a fixture is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub name: String,
    /// Tuples in the full grid.
    pub enumerated: usize,
    /// Records written.
    pub kept: usize,
}

/// Generates one fixture and writes it to `out`.
///
/// The fixture is rendered in memory first, so `out` receives either the
/// whole fixture or nothing.
///
/// # Errors
///
/// Returns an error if the model fails or produces the wrong shape, or if
/// writing to `out` fails.
pub fn write_fixture<M, W, const N: usize>(
    model: M,
    descriptor: &Descriptor<N>,
    config: &Config,
    mut out: W,
) -> Result<Summary, Error>
where
    M: Model<Input = [f64; N]>,
    M::Output: Outputs,
    W: Write,
{
    let mut pass = records(model, descriptor)?;
    let mut writer = FixtureWriter::new(Vec::new(), config);

    writer.begin(descriptor.name())?;
    for record in pass.by_ref() {
        writer.record(&record?)?;
    }
    writer.finish()?;

    out.write_all(&writer.into_inner())?;
    out.flush()?;

    Ok(Summary {
        name: descriptor.name().to_owned(),
        enumerated: descriptor.enumerated(),
        kept: pass.kept(),
    })
}
