//! The reference fixture catalog and the routines behind `sextant-gen`.
//!
//! [`Catalog::reference`] declares one entry per reference routine: its
//! fixture name, the axes swept for each input, and an adapter that calls the
//! routine. [`write_selected`] renders entries one after another into a single
//! stream; [`verify_selected`] regenerates each entry, reads it back, and
//! checks the routine against the text.

mod catalog;
pub mod functions;

use std::io::Write;

use sextant_fixture::{Config, Error as FixtureError, Report, Summary, Tolerance, VerifyError};
use thiserror::Error;
use tracing::info;

pub use catalog::{Catalog, CatalogError, Entry, FixtureEntry};

/// Errors that abort a generator run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("failed to generate `{name}`")]
    Fixture {
        name: String,
        #[source]
        source: FixtureError,
    },

    #[error("failed to verify `{name}`")]
    Verify {
        name: String,
        #[source]
        source: VerifyError,
    },
}

/// Writes the named fixtures to `out`, in the order given.
///
/// An empty `names` writes the whole catalog.
///
/// # Errors
///
/// Returns an error for an unknown name or the first fixture that fails.
/// Fixtures written before the failure stay written.
pub fn write_selected<S: AsRef<str>>(
    catalog: &Catalog,
    names: &[S],
    config: &Config,
    out: &mut dyn Write,
) -> Result<Vec<Summary>, RunError> {
    let entries = catalog.select(names)?;

    entries
        .into_iter()
        .map(|entry| {
            entry
                .write(config, out)
                .map_err(|source| RunError::Fixture {
                    name: entry.name().to_owned(),
                    source,
                })
        })
        .collect()
}

/// Regenerates the named fixtures and checks each routine against its text.
///
/// # Errors
///
/// Returns an error for an unknown name, or if a fixture cannot be generated
/// or read back. Value disagreements are reported, not raised.
pub fn verify_selected<S: AsRef<str>>(
    catalog: &Catalog,
    names: &[S],
    config: &Config,
    tolerance: Tolerance,
) -> Result<Vec<(String, Report)>, RunError> {
    let entries = catalog.select(names)?;
    let mut reports = Vec::with_capacity(entries.len());

    for entry in entries {
        let name = entry.name().to_owned();

        let mut text = Vec::new();
        if let Err(source) = entry.write(config, &mut text) {
            return Err(RunError::Fixture { name, source });
        }

        let report = match entry.verify(config, &String::from_utf8_lossy(&text), tolerance) {
            Ok(report) => report,
            Err(source) => return Err(RunError::Verify { name, source }),
        };

        info!(
            fixture = %name,
            rows = report.rows,
            mismatches = report.mismatches.len(),
            "verified"
        );
        reports.push((name, report));
    }

    Ok(reports)
}
