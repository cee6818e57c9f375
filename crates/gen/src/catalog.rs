use std::io::Write;

use sextant_core::{Axis, AxisError, Model, Outputs, from_fn};
use sextant_fixture::{
    Config, Descriptor, DescriptorError, Error as FixtureError, Report, Summary, Tolerance,
    VerifyError, parse_fixture, verify, write_fixture,
};
use thiserror::Error;

use crate::functions;

/// One function under test, with its arity erased.
pub trait Entry {
    /// Returns the fixture name.
    fn name(&self) -> &str;

    /// Returns the number of inputs.
    fn arity(&self) -> usize;

    /// Returns the number of tuples the grid enumerates.
    fn enumerated(&self) -> usize;

    /// Returns the number of records a generated fixture holds.
    fn expected_records(&self) -> usize;

    /// Generates the fixture and writes it to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if generation or writing fails.
    fn write(&self, config: &Config, out: &mut dyn Write) -> Result<Summary, FixtureError>;

    /// Checks the model against fixture text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text does not parse as this fixture or the
    /// model fails.
    fn verify(
        &self,
        config: &Config,
        text: &str,
        tolerance: Tolerance,
    ) -> Result<Report, VerifyError>;
}

/// A descriptor paired with the model it describes.
pub struct FixtureEntry<M, const N: usize> {
    descriptor: Descriptor<N>,
    model: M,
}

impl<M, const N: usize> FixtureEntry<M, N>
where
    M: Model<Input = [f64; N]>,
    M::Output: Outputs,
{
    /// Creates an entry whose declared outputs come from the model's type.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not a valid fixture name.
    pub fn new(name: &str, axes: [Axis; N], model: M) -> Result<Self, DescriptorError> {
        let descriptor = Descriptor::new(name, axes, <M::Output as Outputs>::KINDS)?;
        Ok(Self { descriptor, model })
    }
}

impl<M, const N: usize> Entry for FixtureEntry<M, N>
where
    M: Model<Input = [f64; N]>,
    M::Output: Outputs,
{
    fn name(&self) -> &str {
        self.descriptor.name()
    }

    fn arity(&self) -> usize {
        N
    }

    fn enumerated(&self) -> usize {
        self.descriptor.enumerated()
    }

    fn expected_records(&self) -> usize {
        self.descriptor.expected_records()
    }

    fn write(&self, config: &Config, out: &mut dyn Write) -> Result<Summary, FixtureError> {
        write_fixture(&self.model, &self.descriptor, config, out)
    }

    fn verify(
        &self,
        config: &Config,
        text: &str,
        tolerance: Tolerance,
    ) -> Result<Report, VerifyError> {
        let parsed = parse_fixture(text)?;
        verify(&self.model, &self.descriptor, config, &parsed, tolerance)
    }
}

/// Errors that can occur when building or querying a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid axis: {0}")]
    Axis(#[from] AxisError),

    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    #[error("no fixture named `{name}`")]
    Unknown { name: String },
}

/// An ordered set of fixtures.
#[derive(Default)]
pub struct Catalog {
    entries: Vec<Box<dyn Entry>>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, replacing any entry of the same name.
    pub fn insert(&mut self, entry: Box<dyn Entry>) {
        match self.entries.iter().position(|e| e.name() == entry.name()) {
            Some(index) => self.entries[index] = entry,
            None => self.entries.push(entry),
        }
    }

    /// Returns the entry named `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn Entry> {
        self.entries
            .iter()
            .find(|entry| entry.name() == name)
            .map(|entry| &**entry)
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Entry> {
        self.entries.iter().map(|entry| &**entry)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves fixture names to entries, in the order given.
    ///
    /// An empty `names` selects every entry.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Unknown`] for the first name not in the catalog.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<&dyn Entry>, CatalogError> {
        if names.is_empty() {
            return Ok(self.iter().collect());
        }
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.get(name).ok_or_else(|| CatalogError::Unknown {
                    name: name.to_owned(),
                })
            })
            .collect()
    }

    /// Builds the catalog of reference fixtures.
    ///
    /// # Errors
    ///
    /// Returns an error if any built-in axis or name is invalid.
    pub fn reference() -> Result<Self, CatalogError> {
        let mut catalog = Self::new();

        let small = Axis::new(-12.0, 12.0, 3.75)?;
        let epoch = Axis::new(1_955_545.0, 2_947_545.0, 124_000.0)?;
        let jd = Axis::new(2_400_000.5, 2_500_000.5, 20_000.0)?;
        let jd_coarse = Axis::new(2_400_000.5, 2_500_000.5, 50_000.0)?;
        let day_part = Axis::new(-0.75, 0.75, 0.25)?;
        let half_day = Axis::new(-0.5, 0.5, 0.5)?;
        let rotation = Axis::new(-3.0, 3.0, 1.5)?;
        let longitude = Axis::new(-3.0, 3.0, 0.75)?;
        let latitude = Axis::new(-1.5, 1.5, 0.375)?;
        let cartesian = Axis::new(-2.0, 2.0, 1.0)?;
        let calendar_jd = Axis::new(-100_000.0, 2_500_000.0, 650_000.0)?;

        catalog.insert(entry("epj2jd", [epoch], from_fn(functions::epj2jd))?);
        catalog.insert(entry("pr00", [jd, small], from_fn(functions::pr00))?);
        catalog.insert(entry("tcbtdb", [small, small], from_fn(functions::tcbtdb))?);
        catalog.insert(entry("ut1tai", [small, small, small], from_fn(functions::ut1tai))?);
        catalog.insert(entry(
            "prec76",
            [jd_coarse, half_day, jd_coarse, half_day],
            from_fn(functions::prec76),
        )?);
        catalog.insert(entry("rv2m", [rotation; 3], from_fn(functions::rv2m))?);
        catalog.insert(entry("rm2v", [rotation; 3], from_fn(functions::rm2v))?);
        catalog.insert(entry("s2c", [longitude, latitude], from_fn(functions::s2c))?);
        catalog.insert(entry("c2s", [cartesian; 3], from_fn(functions::c2s))?);
        catalog.insert(entry("jd2cal", [calendar_jd, day_part], from_fn(functions::jd2cal))?);

        Ok(catalog)
    }
}

fn entry<M, const N: usize>(
    name: &str,
    axes: [Axis; N],
    model: M,
) -> Result<Box<dyn Entry>, DescriptorError>
where
    M: Model<Input = [f64; N]> + 'static,
    M::Output: Outputs,
{
    Ok(Box::new(FixtureEntry::new(name, axes, model)?))
}
