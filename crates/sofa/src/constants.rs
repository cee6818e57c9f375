//! Astronomical constants shared by the reference routines.

/// Arcseconds to radians.
pub const DAS2R: f64 = 4.848_136_811_095_359_935_899_141e-6;

/// Seconds per day.
pub const DAYSEC: f64 = 86_400.0;

/// Days per Julian year.
pub const DJY: f64 = 365.25;

/// Days per Julian century.
pub const DJC: f64 = 36_525.0;

/// Reference epoch (J2000.0), Julian Date.
pub const DJ00: f64 = 2_451_545.0;

/// Julian Date of Modified Julian Date zero.
pub const DJM0: f64 = 2_400_000.5;

/// Reference epoch (J2000.0), Modified Julian Date.
pub const DJM00: f64 = 51_544.5;

/// 1977 Jan 1.0 as Modified Julian Date.
pub const DJM77: f64 = 43_144.0;

/// TT minus TAI, seconds.
pub const TTMTAI: f64 = 32.184;

/// `L_B` = 1 - d(TDB)/d(TCB).
pub const ELB: f64 = 1.550_519_768e-8;

/// TDB at TAI 1977 Jan 1.0, seconds.
pub const TDB0: f64 = -6.55e-5;
