//! Julian Date to Gregorian calendar conversion.

use thiserror::Error;

/// Earliest Julian Date that can be converted.
pub const JD_MIN: f64 = -68_569.5;

/// Latest Julian Date that can be converted.
pub const JD_MAX: f64 = 1e9;

/// A Gregorian calendar date with the fraction of the day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    /// Fraction of the day, in `[0, 1)`.
    pub fraction: f64,
}

/// Errors that can occur when converting a Julian Date to a calendar date.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CalendarError {
    #[error("julian date {jd} is outside the convertible range")]
    OutOfRange { jd: f64 },
}

impl CalendarError {
    /// Returns the status code SOFA reports for this error.
    #[must_use]
    pub fn status(&self) -> i32 {
        match self {
            Self::OutOfRange { .. } => -1,
        }
    }
}

/// Converts a two-part Julian Date to a Gregorian calendar date.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if `dj1 + dj2` lies outside
/// [`JD_MIN`]..=[`JD_MAX`].
pub fn jd_to_calendar(dj1: f64, dj2: f64) -> Result<CalendarDate, CalendarError> {
    let dj = dj1 + dj2;
    if !(JD_MIN..=JD_MAX).contains(&dj) {
        return Err(CalendarError::OutOfRange { jd: dj });
    }

    // Copy the date, big then small, and re-align to midnight.
    let (d1, mut d2) = if dj1.abs() >= dj2.abs() {
        (dj1, dj2)
    } else {
        (dj2, dj1)
    };
    d2 -= 0.5;

    // Separate day and fraction.
    let f1 = d1 % 1.0;
    let f2 = d2 % 1.0;
    let mut fraction = (f1 + f2) % 1.0;
    if fraction < 0.0 {
        fraction += 1.0;
    }
    let d = round_half_away(d1 - f1)
        + round_half_away(d2 - f2)
        + round_half_away(f1 + f2 - fraction);

    // Range checked above, so the day number fits.
    #[allow(clippy::cast_possible_truncation)]
    let jd = round_half_away(d) as i64 + 1;

    // Express the day in the Gregorian calendar.
    let mut l = jd + 68_569;
    let n = (4 * l) / 146_097;
    l -= (146_097 * n + 3) / 4;
    let i = (4000 * (l + 1)) / 1_461_001;
    l -= (1461 * i) / 4 - 31;
    let k = (80 * l) / 2447;
    let day = l - (2447 * k) / 80;
    l = k / 11;
    let month = k + 2 - 12 * l;
    let year = 100 * (n - 49) + i + l;

    #[allow(clippy::cast_possible_truncation)]
    let date = CalendarDate {
        year: year as i32,
        month: month as i32,
        day: day as i32,
        fraction,
    };
    Ok(date)
}

/// Rounds to the nearest whole number, halves away from zero.
fn round_half_away(a: f64) -> f64 {
    if a.abs() < 0.5 {
        0.0
    } else if a < 0.0 {
        (a - 0.5).ceil()
    } else {
        (a + 0.5).floor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn j2000_is_noon_on_new_year() {
        let date = jd_to_calendar(2_451_545.0, 0.0).unwrap();

        assert_eq!((date.year, date.month, date.day), (2000, 1, 1));
        assert_relative_eq!(date.fraction, 0.5);
    }

    #[test]
    fn reference_value() {
        let date = jd_to_calendar(2_400_000.5, 50_123.9999).unwrap();

        assert_eq!((date.year, date.month, date.day), (1996, 2, 10));
        assert_relative_eq!(date.fraction, 0.9999, epsilon = 1e-7);
    }

    #[test]
    fn parts_may_be_swapped() {
        let a = jd_to_calendar(2_400_000.5, 50_123.9999).unwrap();
        let b = jd_to_calendar(50_123.9999, 2_400_000.5).unwrap();

        assert_eq!((a.year, a.month, a.day), (b.year, b.month, b.day));
        assert_relative_eq!(a.fraction, b.fraction, epsilon = 1e-9);
    }

    #[test]
    fn far_future_date() {
        let date = jd_to_calendar(2_500_000.0, 0.0).unwrap();
        assert_eq!((date.year, date.month, date.day), (2132, 8, 31));
        assert_relative_eq!(date.fraction, 0.5);
    }

    #[test]
    fn rejects_out_of_range_dates() {
        let err = jd_to_calendar(-100_000.0, 0.25).unwrap_err();
        assert_eq!(err, CalendarError::OutOfRange { jd: -99_999.75 });
        assert_eq!(err.status(), -1);

        assert!(jd_to_calendar(JD_MAX, 1.0).is_err());
    }
}
