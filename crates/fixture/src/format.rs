//! Textual rendering of fixture fields.
//!
//! Floats are written the way C's `%.28e` writes them. Twenty-eight fraction
//! digits is more than the 17 significant digits needed to recover any `f64`,
//! so parsing a rendered value yields the same bits.

use std::fmt::{self, Display, Write};

use sextant_core::OutputValue;

/// Number of digits after the decimal point of every rendered float.
const PRECISION: usize = 28;

/// Renders an `f64` in `%.28e` notation.
///
/// ```rust
/// use sextant_fixture::Sci;
///
/// assert_eq!(
///     Sci(-12.0).to_string(),
///     "-1.2000000000000000000000000000e+01",
/// );
/// assert_eq!(Sci(f64::NAN).to_string(), "nan");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sci(pub f64);

impl Display for Sci {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;

        if value.is_nan() {
            return f.write_str(if value.is_sign_negative() { "-nan" } else { "nan" });
        }
        if value.is_infinite() {
            return f.write_str(if value < 0.0 { "-inf" } else { "inf" });
        }

        // Rust writes `1.5e-7` where C writes `1.5e-07`: only the exponent differs.
        let rendered = format!("{value:.prec$e}", prec = PRECISION);
        let (mantissa, exponent) = rendered.split_once('e').unwrap_or((&rendered, "0"));
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };

        write!(f, "{mantissa}e{sign}{digits:0>2}")
    }
}

/// Renders one output field.
///
/// Scalars use [`Sci`], vectors and matrices are nested brackets of [`Sci`]
/// values, and integers are plain decimals.
#[derive(Debug, Clone, Copy)]
pub struct Field<'a>(pub &'a OutputValue);

impl Display for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            OutputValue::Scalar(value) => Sci(*value).fmt(f),
            OutputValue::Vector(vector) => write_row(f, vector),
            OutputValue::Matrix(matrix) => {
                f.write_char('[')?;
                for (i, row) in matrix.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_row(f, row)?;
                }
                f.write_char(']')
            }
            OutputValue::Integer(value) => write!(f, "{value}"),
        }
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, row: &[f64; 3]) -> fmt::Result {
    write!(f, "[{}, {}, {}]", Sci(row[0]), Sci(row[1]), Sci(row[2]))
}
