use sextant_core::{Axis, Grid, OutputKind, Sampling};
use thiserror::Error;

/// The declarative schema of one function under test.
///
/// A descriptor fixes everything a fixture depends on: its name, the axes
/// swept for each input (and therefore the arity `N`), and the flattened
/// shape of the outputs. The sampling rule is not chosen per descriptor; it
/// follows from the arity via [`Sampling::for_arity`].
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor<const N: usize> {
    name: String,
    grid: Grid<N>,
    outputs: &'static [OutputKind],
}

/// Errors that can occur when constructing a [`Descriptor`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("fixture name `{name}` is not an identifier")]
    InvalidName { name: String },

    #[error("fixture `{name}` declares no outputs")]
    NoOutputs { name: String },
}

impl<const N: usize> Descriptor<N> {
    /// Creates a descriptor.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not an ASCII identifier (letters, digits,
    /// and underscores, not starting with a digit) or if `outputs` is empty.
    pub fn new(
        name: impl Into<String>,
        axes: [Axis; N],
        outputs: &'static [OutputKind],
    ) -> Result<Self, DescriptorError> {
        let name = name.into();

        if !is_identifier(&name) {
            return Err(DescriptorError::InvalidName { name });
        }
        if outputs.is_empty() {
            return Err(DescriptorError::NoOutputs { name });
        }

        Ok(Self {
            name,
            grid: Grid::new(axes),
            outputs,
        })
    }

    /// Returns the fixture name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of inputs.
    #[must_use]
    pub const fn arity(&self) -> usize {
        N
    }

    /// Returns the input grid.
    #[must_use]
    pub fn grid(&self) -> &Grid<N> {
        &self.grid
    }

    /// Returns the declared output shape.
    #[must_use]
    pub fn outputs(&self) -> &'static [OutputKind] {
        self.outputs
    }

    /// Returns the sampling rule for this arity.
    #[must_use]
    pub const fn sampling(&self) -> Sampling {
        Sampling::for_arity(N)
    }

    /// Returns the number of tuples the grid enumerates.
    #[must_use]
    pub fn enumerated(&self) -> usize {
        self.grid.len()
    }

    /// Returns the number of records a generated fixture will hold.
    #[must_use]
    pub fn expected_records(&self) -> usize {
        self.sampling().kept(self.enumerated())
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCALARS: &[OutputKind] = &[OutputKind::Scalar, OutputKind::Scalar];

    fn axis() -> Axis {
        Axis::new(-12.0, 12.0, 3.75).unwrap()
    }

    #[test]
    fn derives_counts_from_axes() {
        let descriptor = Descriptor::new("taiutc", [axis(), axis()], SCALARS).unwrap();

        assert_eq!(descriptor.name(), "taiutc");
        assert_eq!(descriptor.arity(), 2);
        assert_eq!(descriptor.sampling(), Sampling::Exhaustive);
        assert_eq!(descriptor.enumerated(), 49);
        assert_eq!(descriptor.expected_records(), 49);
    }

    #[test]
    fn wide_descriptors_are_decimated() {
        let descriptor =
            Descriptor::new("hfk5z", [axis(), axis(), axis(), axis()], SCALARS).unwrap();

        assert_eq!(descriptor.sampling(), Sampling::Decimated);
        assert_eq!(descriptor.enumerated(), 2401);
        assert_eq!(descriptor.expected_records(), 480);
    }

    #[test]
    fn rejects_bad_names() {
        for name in ["", "1abc", "has space", "dash-ed", "dot.ted"] {
            assert!(
                matches!(
                    Descriptor::new(name, [axis()], SCALARS),
                    Err(DescriptorError::InvalidName { .. })
                ),
                "{name:?} should be rejected"
            );
        }
        assert!(Descriptor::new("_private9", [axis()], SCALARS).is_ok());
    }

    #[test]
    fn rejects_missing_outputs() {
        assert_eq!(
            Descriptor::new("empty", [axis()], &[]),
            Err(DescriptorError::NoOutputs {
                name: "empty".to_owned()
            })
        );
    }
}
