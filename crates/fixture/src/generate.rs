use std::iter::FusedIterator;

use sextant_core::{Decimated, Model, OutputKind, Outputs, Samples};
use tracing::{debug, info, trace};

use crate::{Descriptor, Error, Fixture, ResultRecord};

/// Starts a generation pass for one fixture.
///
/// The returned iterator enumerates the descriptor's grid, applies the
/// sampling rule for its arity, and calls `model` once per kept tuple, in
/// enumeration order. Each pass owns its own decimation counter.
///
/// # Errors
///
/// Returns [`Error::Shape`] up front if the model's declared output kinds do
/// not match the descriptor's.
pub fn records<'a, M, const N: usize>(
    model: M,
    descriptor: &'a Descriptor<N>,
) -> Result<Records<'a, M, N>, Error>
where
    M: Model<Input = [f64; N]>,
    M::Output: Outputs,
{
    check_shape(descriptor, <M::Output as Outputs>::KINDS.iter().copied())?;

    debug!(
        fixture = descriptor.name(),
        arity = N,
        sampling = ?descriptor.sampling(),
        enumerated = descriptor.enumerated(),
        expected = descriptor.expected_records(),
        "generating fixture"
    );

    Ok(Records {
        model,
        descriptor,
        samples: descriptor.sampling().apply(descriptor.grid().samples()),
        kept: 0,
        done: false,
    })
}

/// Runs a full generation pass and collects the records.
///
/// # Errors
///
/// Returns the first error encountered; no partial fixture is returned.
pub fn generate<M, const N: usize>(
    model: M,
    descriptor: &Descriptor<N>,
) -> Result<Fixture<N>, Error>
where
    M: Model<Input = [f64; N]>,
    M::Output: Outputs,
{
    let records = records(model, descriptor)?.collect::<Result<Vec<_>, _>>()?;

    Ok(Fixture {
        name: descriptor.name().to_owned(),
        records,
    })
}

/// Iterator over the records of one generation pass.
///
/// Created by [`records`]. The iterator stops after yielding its first error.
pub struct Records<'a, M, const N: usize> {
    model: M,
    descriptor: &'a Descriptor<N>,
    samples: Decimated<Samples<N>>,
    kept: usize,
    done: bool,
}

impl<M, const N: usize> Records<'_, M, N> {
    /// Returns the number of records yielded so far.
    #[must_use]
    pub fn kept(&self) -> usize {
        self.kept
    }

    /// Returns the descriptor this pass was started from.
    #[must_use]
    pub fn descriptor(&self) -> &Descriptor<N> {
        self.descriptor
    }
}

impl<M, const N: usize> Iterator for Records<'_, M, N>
where
    M: Model<Input = [f64; N]>,
    M::Output: Outputs,
{
    type Item = Result<ResultRecord<N>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let Some(inputs) = self.samples.next() else {
            info!(
                fixture = self.descriptor.name(),
                enumerated = self.descriptor.enumerated(),
                kept = self.kept,
                "fixture complete"
            );
            self.done = true;
            return None;
        };

        let result = self.invoke(inputs);
        match &result {
            Ok(_) => self.kept += 1,
            Err(_) => self.done = true,
        }
        Some(result)
    }
}

impl<M, const N: usize> FusedIterator for Records<'_, M, N>
where
    M: Model<Input = [f64; N]>,
    M::Output: Outputs,
{
}

impl<M, const N: usize> Records<'_, M, N>
where
    M: Model<Input = [f64; N]>,
    M::Output: Outputs,
{
    fn invoke(&self, inputs: [f64; N]) -> Result<ResultRecord<N>, Error> {
        let name = self.descriptor.name();

        let output = self
            .model
            .call(&inputs)
            .map_err(|source| Error::model(name, &inputs, source))?;

        let outputs = output.values();
        check_shape(self.descriptor, outputs.iter().map(|value| value.kind()))?;

        trace!(fixture = name, index = self.kept, ?inputs, "record");
        Ok(ResultRecord::new(inputs, outputs))
    }
}

pub(crate) fn check_shape<const N: usize>(
    descriptor: &Descriptor<N>,
    produced: impl Iterator<Item = OutputKind> + Clone,
) -> Result<(), Error> {
    if produced.clone().eq(descriptor.outputs().iter().copied()) {
        Ok(())
    } else {
        Err(Error::Shape {
            fixture: descriptor.name().to_owned(),
            declared: descriptor.outputs().to_vec(),
            produced: produced.collect(),
        })
    }
}
