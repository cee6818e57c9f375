//! Deterministic thinning of enumerated samples.
//!
//! Exhaustive grids grow geometrically with arity. Functions of one or two
//! inputs are sampled exhaustively; anything wider keeps one tuple in five,
//! chosen by a counter that runs over the whole enumeration without being
//! reset at axis boundaries. The rule is fixed so fixtures regenerate
//! byte-for-byte.

use std::iter::FusedIterator;

/// How the tuples of a grid are thinned before invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sampling {
    /// Every tuple is kept.
    Exhaustive,
    /// One tuple in `Decimator::CEILING + 1` is kept.
    Decimated,
}

impl Sampling {
    /// Highest arity that is still sampled exhaustively.
    pub const MAX_EXHAUSTIVE_ARITY: usize = 2;

    /// Returns the sampling rule for a function with `arity` inputs.
    #[must_use]
    pub const fn for_arity(arity: usize) -> Self {
        if arity <= Self::MAX_EXHAUSTIVE_ARITY {
            Self::Exhaustive
        } else {
            Self::Decimated
        }
    }

    /// Returns the number of tuples kept out of `len` enumerated ones.
    #[must_use]
    pub const fn kept(self, len: usize) -> usize {
        match self {
            Self::Exhaustive => len,
            Self::Decimated => {
                let period = Decimator::PERIOD as usize;
                let phase = Decimator::PHASE as usize;
                if len > phase {
                    (len - phase - 1) / period + 1
                } else {
                    0
                }
            }
        }
    }

    /// Wraps an iterator so that only the tuples this rule keeps come through.
    ///
    /// The returned adapter owns its own counter, so two fixtures never share
    /// decimation state.
    pub fn apply<I: Iterator>(self, iter: I) -> Decimated<I> {
        Decimated {
            iter,
            decimator: match self {
                Self::Exhaustive => None,
                Self::Decimated => Some(Decimator::new()),
            },
        }
    }
}

/// The decimation counter for one generation pass.
///
/// The counter cycles over `0..=CEILING`, advancing once per examined tuple
/// whether or not the tuple is kept. A tuple is kept when the counter reads
/// [`Decimator::PHASE`] as the tuple is examined, which keeps positions
/// `1, 6, 11, ...` of the enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decimator {
    counter: u64,
}

impl Decimator {
    /// Largest counter value before it wraps to zero.
    pub const CEILING: u64 = 4;

    /// Counter value at which a tuple is kept.
    pub const PHASE: u64 = 1;

    /// Number of tuples per kept tuple.
    pub const PERIOD: u64 = Self::CEILING + 1;

    /// Creates a counter at the start of an enumeration.
    #[must_use]
    pub const fn new() -> Self {
        Self { counter: 0 }
    }

    /// Examines the next tuple and reports whether it is kept.
    pub fn keep(&mut self) -> bool {
        let keep = self.counter == Self::PHASE;
        self.counter = if self.counter >= Self::CEILING {
            0
        } else {
            self.counter + 1
        };
        keep
    }
}

impl Default for Decimator {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator adapter returned by [`Sampling::apply`].
#[derive(Debug, Clone)]
pub struct Decimated<I> {
    iter: I,
    decimator: Option<Decimator>,
}

impl<I: Iterator> Iterator for Decimated<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        match self.decimator.as_mut() {
            None => self.iter.next(),
            Some(decimator) => self.iter.by_ref().find(|_| decimator.keep()),
        }
    }
}

impl<I: FusedIterator> FusedIterator for Decimated<I> {}
