//! Modified Julian Date conversion (§6.1, §8 scenario 4).
//!
//! NIDS stores time as a count of days since `1 Jan 1970 == 1` plus a count of seconds past
//! midnight GMT on that day. `epochSeconds = (julianDay - 1) * 86400 + secondsOfDay`.

use nexrad_model::datatype::Time;

const SECONDS_PER_DAY: i64 = 86_400;

/// Convert a NIDS (Modified Julian Date, seconds-of-day) pair into a [`Time`].
pub fn time_from_nids(julian_date: i16, seconds_of_day: u32) -> Time {
    let epoch_seconds = seconds_of_day as i64 + (julian_date as i64 - 1) * SECONDS_PER_DAY;
    Time::from_epoch(epoch_seconds, 0.0)
}

/// Convert a [`Time`] into its NIDS (Modified Julian Date, seconds-of-day) representation,
/// the inverse of [`time_from_nids`].
pub fn nids_from_time(time: Time) -> (i16, u32) {
    let total_seconds = time.epoch_seconds();
    let julian_date = (total_seconds.div_euclid(SECONDS_PER_DAY) + 1) as i16;
    let seconds_of_day = total_seconds.rem_euclid(SECONDS_PER_DAY) as u32;
    (julian_date, seconds_of_day)
}
