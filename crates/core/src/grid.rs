use std::iter::FusedIterator;

use crate::Axis;

/// The Cartesian product of `N` axes.
///
/// Tuples are produced in row-major order: the last axis varies fastest and
/// the first axis slowest, exactly as a stack of nested loops would visit
/// them. Every axis contributes the bit-identical values its own
/// [`Axis::values`] produces, regardless of how often it restarts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid<const N: usize> {
    axes: [Axis; N],
}

impl<const N: usize> Grid<N> {
    /// Creates a grid over the given axes, in declaration order.
    #[must_use]
    pub fn new(axes: [Axis; N]) -> Self {
        Self { axes }
    }

    /// Returns the axes in declaration order.
    #[must_use]
    pub fn axes(&self) -> &[Axis; N] {
        &self.axes
    }

    /// Returns the number of tuples in the product.
    #[must_use]
    pub fn len(&self) -> usize {
        self.axes.iter().map(Axis::len).product()
    }

    /// Always `false`; every axis has at least one value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over all tuples in row-major order.
    #[must_use]
    pub fn samples(&self) -> Samples<N> {
        Samples {
            values: std::array::from_fn(|i| self.axes[i].values().collect()),
            cursor: [0; N],
            exhausted: false,
        }
    }
}

/// Row-major iterator over the tuples of a [`Grid`].
#[derive(Debug, Clone)]
pub struct Samples<const N: usize> {
    values: [Vec<f64>; N],
    cursor: [usize; N],
    exhausted: bool,
}

impl<const N: usize> Samples<N> {
    /// Moves the cursor to the next tuple, carrying from the last axis.
    fn advance(&mut self) {
        for axis in (0..N).rev() {
            self.cursor[axis] += 1;
            if self.cursor[axis] < self.values[axis].len() {
                return;
            }
            self.cursor[axis] = 0;
        }
        self.exhausted = true;
    }
}

impl<const N: usize> Iterator for Samples<N> {
    type Item = [f64; N];

    fn next(&mut self) -> Option<[f64; N]> {
        if self.exhausted {
            return None;
        }

        let tuple = std::array::from_fn(|i| self.values[i][self.cursor[i]]);
        self.advance();
        Some(tuple)
    }
}

impl<const N: usize> FusedIterator for Samples<N> {}
