use sextant_core::{OutputKind, OutputValue};

/// One sampled input tuple paired with the outputs the model produced for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord<const N: usize> {
    pub inputs: [f64; N],
    pub outputs: Vec<OutputValue>,
}

impl<const N: usize> ResultRecord<N> {
    /// Creates a record.
    #[must_use]
    pub fn new(inputs: [f64; N], outputs: Vec<OutputValue>) -> Self {
        Self { inputs, outputs }
    }

    /// Returns the shape of the outputs.
    pub fn output_kinds(&self) -> impl Iterator<Item = OutputKind> + '_ {
        self.outputs.iter().map(OutputValue::kind)
    }

    /// Returns the total number of fields, inputs first.
    #[must_use]
    pub fn field_count(&self) -> usize {
        N + self.outputs.len()
    }
}

/// The named, ordered collection of records for one function under test.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixture<const N: usize> {
    pub name: String,
    pub records: Vec<ResultRecord<N>>,
}
