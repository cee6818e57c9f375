//! Reference astronomy routines used as functions under test.
//!
//! These routines use computations derived from software provided by the IAU
//! SOFA Board (Standards of Fundamental Astronomy), release 2016-05-03. They do
//! not contain software provided by SOFA and are not endorsed by SOFA. Routine
//! names differ from the SOFA names, arguments are passed by value, and
//! multiple results are returned as named structs instead of through output
//! pointers. Status codes that SOFA always sets to zero are dropped; the one
//! routine that can fail returns a `Result`.
//!
//! Every routine is pure and deterministic.

pub mod calendar;
pub mod constants;
pub mod precession;
pub mod rotation;
pub mod time;

pub use calendar::{CalendarDate, CalendarError, jd_to_calendar};
pub use precession::{
    EulerAngles, PrecessionRate, precession_angles_iau1976, precession_rate_iau2000,
};
pub use rotation::{
    cartesian_to_spherical, rotation_matrix_to_vector, rotation_vector_to_matrix,
    spherical_to_cartesian,
};
pub use time::{JulianDate, julian_epoch_to_jd, tcb_to_tdb, ut1_to_tai};
