//! Adapters from sampled tuples to the reference routines.
//!
//! Each adapter takes the tuple as `&[f64; N]` and returns one struct with a
//! named field per output. Routines whose C counterparts return an
//! always-zero status report it here as a leading `status` field so the
//! fixture layout matches.

use sextant_core::{Matrix3, OutputKind, OutputValue, Outputs, Vector3};
use sextant_sofa as sofa;

const SCALAR: OutputKind = OutputKind::Scalar;
const INTEGER: OutputKind = OutputKind::Integer;

/// A two-part Julian Date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoPart {
    pub jd1: f64,
    pub jd2: f64,
}

impl Outputs for TwoPart {
    const KINDS: &'static [OutputKind] = &[SCALAR, SCALAR];

    fn push_values(&self, out: &mut Vec<OutputValue>) {
        out.push(self.jd1.into());
        out.push(self.jd2.into());
    }
}

/// A two-part Julian Date preceded by a status code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusTwoPart {
    pub status: i32,
    pub jd1: f64,
    pub jd2: f64,
}

impl Outputs for StatusTwoPart {
    const KINDS: &'static [OutputKind] = &[INTEGER, SCALAR, SCALAR];

    fn push_values(&self, out: &mut Vec<OutputValue>) {
        out.push(self.status.into());
        out.push(self.jd1.into());
        out.push(self.jd2.into());
    }
}

/// Nutation corrections for the precession rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rates {
    pub dpsipr: f64,
    pub depspr: f64,
}

impl Outputs for Rates {
    const KINDS: &'static [OutputKind] = &[SCALAR, SCALAR];

    fn push_values(&self, out: &mut Vec<OutputValue>) {
        out.push(self.dpsipr.into());
        out.push(self.depspr.into());
    }
}

/// Precession Euler angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angles {
    pub zeta: f64,
    pub z: f64,
    pub theta: f64,
}

impl Outputs for Angles {
    const KINDS: &'static [OutputKind] = &[SCALAR, SCALAR, SCALAR];

    fn push_values(&self, out: &mut Vec<OutputValue>) {
        out.push(self.zeta.into());
        out.push(self.z.into());
        out.push(self.theta.into());
    }
}

/// Spherical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    pub theta: f64,
    pub phi: f64,
}

impl Outputs for Spherical {
    const KINDS: &'static [OutputKind] = &[SCALAR, SCALAR];

    fn push_values(&self, out: &mut Vec<OutputValue>) {
        out.push(self.theta.into());
        out.push(self.phi.into());
    }
}

/// A calendar date preceded by a status code.
///
/// A status of `-1` marks an unconvertible date; the other fields are zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calendar {
    pub status: i32,
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub fraction: f64,
}

impl Outputs for Calendar {
    const KINDS: &'static [OutputKind] = &[INTEGER, INTEGER, INTEGER, INTEGER, SCALAR];

    fn push_values(&self, out: &mut Vec<OutputValue>) {
        out.push(self.status.into());
        out.push(self.year.into());
        out.push(self.month.into());
        out.push(self.day.into());
        out.push(self.fraction.into());
    }
}

pub fn epj2jd(&[epoch]: &[f64; 1]) -> TwoPart {
    let sofa::JulianDate { jd1, jd2 } = sofa::julian_epoch_to_jd(epoch);
    TwoPart { jd1, jd2 }
}

pub fn pr00(&[date1, date2]: &[f64; 2]) -> Rates {
    let sofa::PrecessionRate { dpsipr, depspr } = sofa::precession_rate_iau2000(date1, date2);
    Rates { dpsipr, depspr }
}

pub fn tcbtdb(&[tcb1, tcb2]: &[f64; 2]) -> StatusTwoPart {
    let sofa::JulianDate { jd1, jd2 } = sofa::tcb_to_tdb(tcb1, tcb2);
    StatusTwoPart {
        status: 0,
        jd1,
        jd2,
    }
}

pub fn ut1tai(&[ut11, ut12, dta]: &[f64; 3]) -> StatusTwoPart {
    let sofa::JulianDate { jd1, jd2 } = sofa::ut1_to_tai(ut11, ut12, dta);
    StatusTwoPart {
        status: 0,
        jd1,
        jd2,
    }
}

pub fn prec76(&[date01, date02, date11, date12]: &[f64; 4]) -> Angles {
    let sofa::EulerAngles { zeta, z, theta } =
        sofa::precession_angles_iau1976(date01, date02, date11, date12);
    Angles { zeta, z, theta }
}

pub fn rv2m(&[x, y, z]: &[f64; 3]) -> Matrix3 {
    sofa::rotation_vector_to_matrix([x, y, z])
}

/// Round-trips a rotation vector through its matrix.
pub fn rm2v(&[x, y, z]: &[f64; 3]) -> Vector3 {
    sofa::rotation_matrix_to_vector(&sofa::rotation_vector_to_matrix([x, y, z]))
}

pub fn s2c(&[theta, phi]: &[f64; 2]) -> Vector3 {
    sofa::spherical_to_cartesian(theta, phi)
}

pub fn c2s(&[x, y, z]: &[f64; 3]) -> Spherical {
    let (theta, phi) = sofa::cartesian_to_spherical([x, y, z]);
    Spherical { theta, phi }
}

pub fn jd2cal(&[dj1, dj2]: &[f64; 2]) -> Calendar {
    match sofa::jd_to_calendar(dj1, dj2) {
        Ok(date) => Calendar {
            status: 0,
            year: date.year,
            month: date.month,
            day: date.day,
            fraction: date.fraction,
        },
        Err(err) => Calendar {
            status: err.status(),
            year: 0,
            month: 0,
            day: 0,
            fraction: 0.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn shapes_follow_fields() {
        let date = jd2cal(&[2_451_545.0, 0.0]);
        let kinds: Vec<OutputKind> = date.values().iter().map(OutputValue::kind).collect();

        assert_eq!(kinds, Calendar::KINDS);
        assert_eq!(date.values()[1], OutputValue::Integer(2000));
    }

    #[test]
    fn unconvertible_dates_are_data() {
        let date = jd2cal(&[-100_000.0, 0.25]);

        assert_eq!(date.status, -1);
        assert_eq!((date.year, date.month, date.day), (0, 0, 0));
        assert_relative_eq!(date.fraction, 0.0);
    }

    #[test]
    fn always_zero_status_is_reported() {
        assert_eq!(tcbtdb(&[2_453_750.5, 0.892_855_137]).status, 0);
        assert_eq!(ut1tai(&[2_453_750.5, 0.892_104_561, -32.6659357]).status, 0);
    }

    #[test]
    fn short_rotations_survive_the_matrix() {
        let [x, y, z] = rm2v(&[1.5, -1.5, 0.0]);

        assert_relative_eq!(x, 1.5, epsilon = 1e-14);
        assert_relative_eq!(y, -1.5, epsilon = 1e-14);
        assert_relative_eq!(z, 0.0, epsilon = 1e-14);
        assert_eq!(rm2v(&[0.0; 3]), [0.0; 3]);
    }

    #[test]
    fn spherical_adapters_are_inverse() {
        let [x, y, z] = s2c(&[0.75, -0.375]);
        let Spherical { theta, phi } = c2s(&[x, y, z]);

        assert_relative_eq!(theta, 0.75, epsilon = 1e-15);
        assert_relative_eq!(phi, -0.375, epsilon = 1e-15);
    }
}
