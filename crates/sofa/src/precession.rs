//! Precession models.

use crate::constants::{DAS2R, DJ00, DJC};

/// Precession-rate part of the IAU 2000 precession-nutation model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecessionRate {
    /// Precession correction in longitude, radians.
    pub dpsipr: f64,
    /// Precession correction in obliquity, radians.
    pub depspr: f64,
}

/// Equatorial precession angles `zeta`, `z`, and `theta`, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerAngles {
    pub zeta: f64,
    pub z: f64,
    pub theta: f64,
}

/// Returns the IAU 2000 precession-rate adjustments for a TT date.
///
/// The adjustments are the corrections to the IAU 1976 precession and the
/// IAU 1980 obliquity rates that the IAU 2000 model adopted.
#[must_use]
pub fn precession_rate_iau2000(date1: f64, date2: f64) -> PrecessionRate {
    // Precession and obliquity corrections, radians per century.
    let precor = -0.299_65 * DAS2R;
    let oblcor = -0.025_24 * DAS2R;

    let t = ((date1 - DJ00) + date2) / DJC;

    PrecessionRate {
        dpsipr: precor * t,
        depspr: oblcor * t,
    }
}

/// Returns the IAU 1976 precession angles between two TDB dates.
///
/// `(date01, date02)` is the starting epoch and `(date11, date12)` the ending
/// epoch, each as a two-part Julian Date.
#[must_use]
pub fn precession_angles_iau1976(
    date01: f64,
    date02: f64,
    date11: f64,
    date12: f64,
) -> EulerAngles {
    // Interval between J2000.0 and the start date, Julian centuries.
    let t0 = ((date01 - DJ00) + date02) / DJC;

    // Interval over which precession is required, Julian centuries.
    let t = ((date11 - date01) + (date12 - date02)) / DJC;

    let tas2r = t * DAS2R;
    let w = 2306.2181 + (1.396_56 - 0.000_139 * t0) * t0;

    EulerAngles {
        zeta: (w + ((0.301_88 - 0.000_344 * t0) + 0.017_998 * t) * t) * tas2r,
        z: (w + ((1.094_68 + 0.000_066 * t0) + 0.018_203 * t) * t) * tas2r,
        theta: ((2004.3109 + (-0.853_30 - 0.000_217 * t0) * t0)
            + ((-0.426_65 - 0.000_217 * t0) - 0.041_833 * t) * t)
            * tas2r,
    }
}
