//! Time-scale transformations on two-part Julian Dates.
//!
//! A two-part date `(jd1, jd2)` stands for the Julian Date `jd1 + jd2`,
//! apportioned in any convenient way. Transformations add their offset to
//! whichever part is smaller so that precision is kept.

use crate::constants::{DAYSEC, DJM0, DJM00, DJM77, DJY, ELB, TDB0, TTMTAI};

/// A Julian Date split into two parts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JulianDate {
    pub jd1: f64,
    pub jd2: f64,
}

impl JulianDate {
    /// Returns the date as a single Julian Date.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.jd1 + self.jd2
    }
}

/// Converts a Julian Epoch to a two-part Julian Date.
///
/// The first part is the MJD zero-point and the second the Modified Julian
/// Date.
#[must_use]
pub fn julian_epoch_to_jd(epoch: f64) -> JulianDate {
    JulianDate {
        jd1: DJM0,
        jd2: DJM00 + (epoch - 2000.0) * DJY,
    }
}

/// Converts Barycentric Coordinate Time (TCB) to Barycentric Dynamical Time
/// (TDB), using the IAU 2006 conventional linear relation.
#[must_use]
pub fn tcb_to_tdb(tcb1: f64, tcb2: f64) -> JulianDate {
    // 1977 Jan 1 00:00:32.184 TT, as two-part JD.
    let t77td = DJM0 + DJM77;
    let t77tf = TTMTAI / DAYSEC;

    // TDB (days) at TAI 1977 Jan 1.0.
    let tdb0 = TDB0 / DAYSEC;

    if tcb1 > tcb2 {
        let d = tcb1 - t77td;
        JulianDate {
            jd1: tcb1,
            jd2: tcb2 + tdb0 - (d + (tcb2 - t77tf)) * ELB,
        }
    } else {
        let d = tcb2 - t77td;
        JulianDate {
            jd1: tcb1 + tdb0 - (d + (tcb1 - t77tf)) * ELB,
            jd2: tcb2,
        }
    }
}

/// Converts UT1 to International Atomic Time (TAI), given `dta = UT1 - TAI`
/// in seconds.
#[must_use]
pub fn ut1_to_tai(ut11: f64, ut12: f64, dta: f64) -> JulianDate {
    let dtad = dta / DAYSEC;

    if ut11 > ut12 {
        JulianDate {
            jd1: ut11,
            jd2: ut12 - dtad,
        }
    } else {
        JulianDate {
            jd1: ut11 - dtad,
            jd2: ut12,
        }
    }
}
