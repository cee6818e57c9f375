/// A 3×3 matrix of `f64`, row-major.
pub type Matrix3 = [[f64; 3]; 3];

/// A 3-vector of `f64`.
pub type Vector3 = [f64; 3];

/// The shape of one output field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputKind {
    Scalar,
    Vector,
    Matrix,
    Integer,
}

/// One captured output field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputValue {
    Scalar(f64),
    Vector(Vector3),
    Matrix(Matrix3),
    /// An integer output such as a status code, recorded verbatim.
    Integer(i32),
}

impl OutputValue {
    /// Returns the shape of this value.
    #[must_use]
    pub fn kind(&self) -> OutputKind {
        match self {
            Self::Scalar(_) => OutputKind::Scalar,
            Self::Vector(_) => OutputKind::Vector,
            Self::Matrix(_) => OutputKind::Matrix,
            Self::Integer(_) => OutputKind::Integer,
        }
    }
}

impl From<f64> for OutputValue {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vector3> for OutputValue {
    fn from(value: Vector3) -> Self {
        Self::Vector(value)
    }
}

impl From<Matrix3> for OutputValue {
    fn from(value: Matrix3) -> Self {
        Self::Matrix(value)
    }
}

impl From<i32> for OutputValue {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}

/// A structured model output that flattens into fixture fields.
///
/// Implementors are usually small structs with one named field per output of
/// the function under test. `KINDS` declares the flattened shape up front and
/// [`Outputs::push_values`] must push exactly one value of each declared kind,
/// in the same order.
///
/// # Example
///
/// ```rust
/// use sextant_core::{OutputKind, OutputValue, Outputs};
///
/// struct TwoPartDate {
///     status: i32,
///     jd1: f64,
///     jd2: f64,
/// }
///
/// impl Outputs for TwoPartDate {
///     const KINDS: &'static [OutputKind] =
///         &[OutputKind::Integer, OutputKind::Scalar, OutputKind::Scalar];
///
///     fn push_values(&self, out: &mut Vec<OutputValue>) {
///         out.push(self.status.into());
///         out.push(self.jd1.into());
///         out.push(self.jd2.into());
///     }
/// }
///
/// let date = TwoPartDate { status: 0, jd1: 2_451_545.0, jd2: 0.25 };
/// assert_eq!(date.values().len(), TwoPartDate::KINDS.len());
/// ```
pub trait Outputs {
    /// Flattened shape, in declared output order.
    const KINDS: &'static [OutputKind];

    /// Appends the output fields, in declared order.
    fn push_values(&self, out: &mut Vec<OutputValue>);

    /// Returns the output fields, in declared order.
    fn values(&self) -> Vec<OutputValue> {
        let mut out = Vec::with_capacity(Self::KINDS.len());
        self.push_values(&mut out);
        out
    }
}

impl Outputs for f64 {
    const KINDS: &'static [OutputKind] = &[OutputKind::Scalar];

    fn push_values(&self, out: &mut Vec<OutputValue>) {
        out.push(OutputValue::Scalar(*self));
    }
}

impl Outputs for Vector3 {
    const KINDS: &'static [OutputKind] = &[OutputKind::Vector];

    fn push_values(&self, out: &mut Vec<OutputValue>) {
        out.push(OutputValue::Vector(*self));
    }
}

impl Outputs for Matrix3 {
    const KINDS: &'static [OutputKind] = &[OutputKind::Matrix];

    fn push_values(&self, out: &mut Vec<OutputValue>) {
        out.push(OutputValue::Matrix(*self));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_values() {
        assert_eq!(OutputValue::from(1.5).kind(), OutputKind::Scalar);
        assert_eq!(OutputValue::from(-1).kind(), OutputKind::Integer);
        assert_eq!(OutputValue::from([1.0, 2.0, 3.0]).kind(), OutputKind::Vector);
        assert_eq!(OutputValue::from([[0.0; 3]; 3]).kind(), OutputKind::Matrix);
    }

    #[test]
    fn primitive_outputs_flatten_to_one_field() {
        assert_eq!(2.5_f64.values(), vec![OutputValue::Scalar(2.5)]);

        let identity: Matrix3 = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        assert_eq!(identity.values(), vec![OutputValue::Matrix(identity)]);
        assert_eq!(<Matrix3 as Outputs>::KINDS, &[OutputKind::Matrix]);
    }
}
