//! Reading fixture text back into records.
//!
//! The accepted grammar is the one [`FixtureWriter`](crate::FixtureWriter)
//! produces, with free whitespace between tokens and an optional trailing
//! comma after the last record:
//!
//! ```text
//! fixture := [keyword] ident "=" "[" (row ",")* [row] "]" ";"
//! row     := "[" field ("," field)* "]"
//! field   := number | "[" field ("," field)* "]"
//! ```

use sextant_core::{OutputKind, OutputValue};
use thiserror::Error;

use crate::{Declaration, ResultRecord};

/// One literal field as it appears in fixture text.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A number written with a decimal point or exponent, or `nan`/`inf`.
    Float(f64),
    /// A number written as bare decimal digits.
    Int(i64),
    /// A bracketed list.
    List(Vec<Literal>),
}

impl Literal {
    /// Returns the value of a float literal. Bare integers are not floats.
    #[must_use]
    fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            Self::Int(_) | Self::List(_) => None,
        }
    }

    fn as_row(&self) -> Option<[f64; 3]> {
        match self {
            Self::List(items) if items.len() == 3 => Some([
                items[0].as_float()?,
                items[1].as_float()?,
                items[2].as_float()?,
            ]),
            _ => None,
        }
    }

    fn to_output(&self, kind: OutputKind) -> Option<OutputValue> {
        match (kind, self) {
            (OutputKind::Scalar, _) => self.as_float().map(OutputValue::Scalar),
            (OutputKind::Integer, Self::Int(value)) => {
                i32::try_from(*value).ok().map(OutputValue::Integer)
            }
            (OutputKind::Integer, _) => None,
            (OutputKind::Vector, _) => self.as_row().map(OutputValue::Vector),
            (OutputKind::Matrix, Self::List(rows)) if rows.len() == 3 => {
                let matrix = [rows[0].as_row()?, rows[1].as_row()?, rows[2].as_row()?];
                Some(OutputValue::Matrix(matrix))
            }
            (OutputKind::Matrix, _) => None,
        }
    }
}

/// A fixture read back from text, before its fields are typed.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFixture {
    pub declaration: Declaration,
    /// The full variable name, suffix included.
    pub name: String,
    pub rows: Vec<Vec<Literal>>,
}

impl ParsedFixture {
    /// Types every row as `N` inputs followed by outputs of the given kinds.
    ///
    /// # Errors
    ///
    /// Returns an error if any row has the wrong number of fields or a field
    /// that cannot be read as its expected kind.
    pub fn records<const N: usize>(
        &self,
        kinds: &[OutputKind],
    ) -> Result<Vec<ResultRecord<N>>, ParseError> {
        self.rows
            .iter()
            .enumerate()
            .map(|(row, fields)| {
                if fields.len() != N + kinds.len() {
                    return Err(ParseError::FieldCount {
                        row,
                        expected: N + kinds.len(),
                        found: fields.len(),
                    });
                }

                let mut inputs = [0.0; N];
                for (field, (input, literal)) in inputs.iter_mut().zip(fields).enumerate() {
                    *input = literal.as_float().ok_or(ParseError::FieldKind {
                        row,
                        field,
                        expected: "input",
                    })?;
                }

                let outputs = kinds
                    .iter()
                    .zip(&fields[N..])
                    .enumerate()
                    .map(|(i, (&kind, literal))| {
                        literal.to_output(kind).ok_or(ParseError::FieldKind {
                            row,
                            field: N + i,
                            expected: kind_name(kind),
                        })
                    })
                    .collect::<Result<_, _>>()?;

                Ok(ResultRecord::new(inputs, outputs))
            })
            .collect()
    }
}

/// Errors that can occur when reading fixture text.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("unexpected `{found}` at byte {offset}, expected {expected}")]
    Unexpected {
        offset: usize,
        found: char,
        expected: &'static str,
    },

    #[error("invalid number `{text}` at byte {offset}")]
    InvalidNumber { offset: usize, text: String },

    #[error("trailing input at byte {offset}")]
    TrailingInput { offset: usize },

    #[error("row {row} has {found} fields, expected {expected}")]
    FieldCount {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row} field {field} is not a valid {expected}")]
    FieldKind {
        row: usize,
        field: usize,
        expected: &'static str,
    },
}

/// Parses the text of one fixture.
///
/// # Errors
///
/// Returns an error if `text` is not a single well-formed fixture.
pub fn parse_fixture(text: &str) -> Result<ParsedFixture, ParseError> {
    let mut parser = Parser { text, pos: 0 };
    let fixture = parser.fixture()?;

    parser.skip_whitespace();
    if parser.pos < text.len() {
        return Err(ParseError::TrailingInput { offset: parser.pos });
    }
    Ok(fixture)
}

fn kind_name(kind: OutputKind) -> &'static str {
    match kind {
        OutputKind::Scalar => "scalar",
        OutputKind::Vector => "vector",
        OutputKind::Matrix => "matrix",
        OutputKind::Integer => "integer",
    }
}

struct Parser<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn fixture(&mut self) -> Result<ParsedFixture, ParseError> {
        self.skip_whitespace();
        let first = self.identifier()?;

        let (declaration, name) = match Declaration::from_keyword(first) {
            Some(declaration) => {
                self.skip_whitespace();
                (declaration, self.identifier()?)
            }
            None => (Declaration::None, first),
        };
        let name = name.to_owned();

        self.expect('=', "`=`")?;
        self.expect('[', "`[`")?;

        let mut rows = Vec::new();
        loop {
            match self.peek("a record or `]`")? {
                ']' => break,
                '[' => rows.push(self.list()?),
                found => {
                    return Err(ParseError::Unexpected {
                        offset: self.pos,
                        found,
                        expected: "a record or `]`",
                    });
                }
            }
            match self.peek("`,` or `]`")? {
                ',' => self.bump(),
                ']' => {}
                found => {
                    return Err(ParseError::Unexpected {
                        offset: self.pos,
                        found,
                        expected: "`,` or `]`",
                    });
                }
            }
        }
        self.bump();
        self.expect(';', "`;`")?;

        Ok(ParsedFixture {
            declaration,
            name,
            rows,
        })
    }

    /// Parses a bracketed, comma-separated list. The cursor is on `[`.
    fn list(&mut self) -> Result<Vec<Literal>, ParseError> {
        self.bump();
        let mut items = Vec::new();

        if self.peek("a field or `]`")? == ']' {
            self.bump();
            return Ok(items);
        }
        loop {
            items.push(self.field()?);
            match self.peek("`,` or `]`")? {
                ',' => self.bump(),
                ']' => {
                    self.bump();
                    return Ok(items);
                }
                found => {
                    return Err(ParseError::Unexpected {
                        offset: self.pos,
                        found,
                        expected: "`,` or `]`",
                    });
                }
            }
        }
    }

    fn field(&mut self) -> Result<Literal, ParseError> {
        if self.peek("a field")? == '[' {
            return self.list().map(Literal::List);
        }

        let start = self.pos;
        let text = self.take_while(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if text.is_empty() {
            return Err(ParseError::Unexpected {
                offset: start,
                found: self.text[start..].chars().next().unwrap_or(' '),
                expected: "a field",
            });
        }
        number(text).ok_or_else(|| ParseError::InvalidNumber {
            offset: start,
            text: text.to_owned(),
        })
    }

    fn identifier(&mut self) -> Result<&'a str, ParseError> {
        let start = self.pos;
        let Some(first) = self.text[start..].chars().next() else {
            return Err(ParseError::UnexpectedEnd {
                expected: "an identifier",
            });
        };
        if !(first.is_ascii_alphabetic() || first == '_') {
            return Err(ParseError::Unexpected {
                offset: start,
                found: first,
                expected: "an identifier",
            });
        }
        Ok(self.take_while(|c| c.is_ascii_alphanumeric() || c == '_'))
    }

    fn expect(&mut self, wanted: char, expected: &'static str) -> Result<(), ParseError> {
        match self.peek(expected)? {
            found if found == wanted => {
                self.bump();
                Ok(())
            }
            found => Err(ParseError::Unexpected {
                offset: self.pos,
                found,
                expected,
            }),
        }
    }

    /// Skips whitespace and returns the next character without consuming it.
    fn peek(&mut self, expected: &'static str) -> Result<char, ParseError> {
        self.skip_whitespace();
        self.text[self.pos..]
            .chars()
            .next()
            .ok_or(ParseError::UnexpectedEnd { expected })
    }

    /// Consumes one ASCII character.
    fn bump(&mut self) {
        self.pos += 1;
    }

    fn skip_whitespace(&mut self) {
        self.take_while(char::is_whitespace);
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let text = self.text;
        let start = self.pos;
        let len = text[start..]
            .find(|c: char| !pred(c))
            .unwrap_or(text.len() - start);
        self.pos += len;
        &text[start..self.pos]
    }
}

fn number(text: &str) -> Option<Literal> {
    let value = match text {
        "nan" => f64::NAN,
        "-nan" => -f64::NAN,
        "inf" => f64::INFINITY,
        "-inf" => f64::NEG_INFINITY,
        _ if text.contains(['.', 'e', 'E']) => text.parse().ok()?,
        _ => return text.parse().ok().map(Literal::Int),
    };
    Some(Literal::Float(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_written_layout() {
        let text = "\
var epj2jd_results = [
  [1.9555450000000000000000000000e+06, 0, -1.5000000000000000000000000000e+00  ],
  [nan, -3, [1.0e+00, 2.0e+00, 3.0e+00]  ],
];
";
        let fixture = parse_fixture(text).unwrap();

        assert_eq!(fixture.declaration, Declaration::Var);
        assert_eq!(fixture.name, "epj2jd_results");
        assert_eq!(fixture.rows.len(), 2);
        assert_eq!(
            fixture.rows[0],
            vec![
                Literal::Float(1_955_545.0),
                Literal::Int(0),
                Literal::Float(-1.5)
            ]
        );
        assert!(matches!(fixture.rows[1][0], Literal::Float(v) if v.is_nan()));
        assert_eq!(
            fixture.rows[1][2],
            Literal::List(vec![
                Literal::Float(1.0),
                Literal::Float(2.0),
                Literal::Float(3.0)
            ])
        );
    }

    #[test]
    fn bare_name_and_empty_body() {
        let fixture = parse_fixture("empty_results = [\n];\n").unwrap();

        assert_eq!(fixture.declaration, Declaration::None);
        assert_eq!(fixture.name, "empty_results");
        assert!(fixture.rows.is_empty());
    }

    #[test]
    fn types_rows_by_kind() {
        let text = "m = [ [1.5, 2.0, [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]] ];";
        let fixture = parse_fixture(text).unwrap();

        let records = fixture.records::<2>(&[OutputKind::Matrix]).unwrap();
        assert_eq!(records[0].inputs, [1.5, 2.0]);
        assert_eq!(
            records[0].outputs,
            vec![OutputValue::Matrix([
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 1.0]
            ])]
        );

        assert_eq!(
            fixture.records::<1>(&[OutputKind::Matrix]),
            Err(ParseError::FieldCount {
                row: 0,
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            fixture.records::<1>(&[OutputKind::Integer, OutputKind::Vector]),
            Err(ParseError::FieldKind {
                row: 0,
                field: 2,
                expected: "vector"
            })
        );
    }

    #[test]
    fn integers_must_be_bare() {
        let fixture = parse_fixture("s = [[1.0e+00, 0.0e+00]];").unwrap();
        assert_eq!(
            fixture.records::<1>(&[OutputKind::Integer]),
            Err(ParseError::FieldKind {
                row: 0,
                field: 1,
                expected: "integer"
            })
        );
    }

    #[test]
    fn floats_must_not_be_bare() {
        let input = parse_fixture("x = [[1, 2.0e+00]];").unwrap();
        assert_eq!(
            input.records::<1>(&[OutputKind::Scalar]),
            Err(ParseError::FieldKind {
                row: 0,
                field: 0,
                expected: "input"
            })
        );

        let scalar = parse_fixture("x = [[1.0e+00, 2]];").unwrap();
        assert_eq!(
            scalar.records::<1>(&[OutputKind::Scalar]),
            Err(ParseError::FieldKind {
                row: 0,
                field: 1,
                expected: "scalar"
            })
        );

        let vector = parse_fixture("v = [[1.0e+00, [1.0e+00, 0, 0.0e+00]]];").unwrap();
        assert_eq!(
            vector.records::<1>(&[OutputKind::Vector]),
            Err(ParseError::FieldKind {
                row: 0,
                field: 1,
                expected: "vector"
            })
        );
    }

    #[test]
    fn records_need_separators() {
        let text = "x_results = [\n  [1.0e+00, 2.0e+00]\n  [3.0e+00, 4.0e+00]\n];\n";
        assert_eq!(
            parse_fixture(text),
            Err(ParseError::Unexpected {
                offset: 37,
                found: '[',
                expected: "`,` or `]`"
            })
        );
    }

    #[test]
    fn reports_malformed_text() {
        assert_eq!(
            parse_fixture("x = [[1.0, 2.0]"),
            Err(ParseError::UnexpectedEnd {
                expected: "`,` or `]`"
            })
        );
        assert_eq!(
            parse_fixture("x = [[1.0; 2.0]];"),
            Err(ParseError::Unexpected {
                offset: 9,
                found: ';',
                expected: "`,` or `]`"
            })
        );
        assert_eq!(
            parse_fixture("x = [[1.0.0]];"),
            Err(ParseError::InvalidNumber {
                offset: 6,
                text: "1.0.0".to_owned()
            })
        );
        assert_eq!(
            parse_fixture("x = [];\ny = [];"),
            Err(ParseError::TrailingInput { offset: 8 })
        );
        assert!(matches!(
            parse_fixture("9x = [];"),
            Err(ParseError::Unexpected { offset: 0, .. })
        ));
    }
}
