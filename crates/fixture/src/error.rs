use std::{error::Error as StdError, io};

use sextant_core::OutputKind;
use thiserror::Error;

use crate::DescriptorError;

/// Errors that abort fixture generation.
///
/// None of these are recoverable mid-fixture: a fixture is written in full or
/// not at all.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid descriptor: {0}")]
    Descriptor(#[from] DescriptorError),

    #[error("`{fixture}` declares outputs {declared:?} but the model produced {produced:?}")]
    Shape {
        fixture: String,
        declared: Vec<OutputKind>,
        produced: Vec<OutputKind>,
    },

    #[error("model call failed for `{fixture}` at {input:?}")]
    Model {
        fixture: String,
        input: Vec<f64>,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("failed to write fixture")]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn model<E>(fixture: &str, input: &[f64], source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Model {
            fixture: fixture.to_owned(),
            input: input.to_vec(),
            source: Box::new(source),
        }
    }
}
