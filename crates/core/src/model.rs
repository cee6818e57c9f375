use std::{convert::Infallible, marker::PhantomData};

/// A callable model that maps a typed input to a typed output.
///
/// Models must be deterministic, always producing the same result for a given
/// input, which is what makes a recorded fixture a stable reference. A
/// function under test is adapted into a model whose `Input` is the sampled
/// tuple `[f64; N]` and whose `Output` is one structured value holding every
/// output the function produces.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Each model defines its own `Error` type. Total functions use
    /// [`Infallible`].
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

impl<M: Model> Model for &M {
    type Input = M::Input;
    type Output = M::Output;
    type Error = M::Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        (**self).call(input)
    }
}

/// A model backed by a plain function or closure.
///
/// Created with [`from_fn`].
pub struct FnModel<F, I, O> {
    function: F,
    _marker: PhantomData<fn(&I) -> O>,
}

impl<F, I, O> Model for FnModel<F, I, O>
where
    F: Fn(&I) -> O,
{
    type Input = I;
    type Output = O;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok((self.function)(input))
    }
}

/// Wraps a total function as a [`Model`].
///
/// # Example
///
/// ```rust
/// use sextant_core::{Model, from_fn};
///
/// let sum = from_fn(|&[a, b]: &[f64; 2]| a + b);
/// assert_eq!(sum.call(&[1.5, 2.0]), Ok(3.5));
/// ```
pub const fn from_fn<F, I, O>(function: F) -> FnModel<F, I, O>
where
    F: Fn(&I) -> O,
{
    FnModel {
        function,
        _marker: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// Model that scales its single input.
    struct Scale(f64);

    impl Model for Scale {
        type Input = [f64; 1];
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
            Ok(self.0 * input[0])
        }
    }

    #[test]
    fn references_are_models() {
        let model = Scale(2.5);
        let by_ref = &model;

        let Ok(output) = by_ref.call(&[4.0]);
        assert_relative_eq!(output, 10.0);
    }

    #[test]
    fn closures_are_models() {
        let model = from_fn(|&[a, b, c]: &[f64; 3]| (a * b, c));
        let Ok((product, last)) = model.call(&[2.0, 3.0, -1.0]);

        assert_relative_eq!(product, 6.0);
        assert_relative_eq!(last, -1.0);
    }
}
