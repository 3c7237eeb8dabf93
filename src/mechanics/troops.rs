//! Troop mechanics: how many troops a speedup budget trains, and their points.

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Total speedup seconds from a days/hours/minutes breakdown.
#[inline]
pub fn speedup_seconds(days: u64, hours: u64, minutes: u64) -> u64 {
    days.saturating_mul(SECS_PER_DAY)
        .saturating_add(hours.saturating_mul(SECS_PER_HOUR))
        .saturating_add(minutes.saturating_mul(SECS_PER_MINUTE))
}

/// Troops trainable with `speedup_secs` at `train_secs` each (0 if untimed).
#[inline]
pub fn troops_trained(train_secs: u64, speedup_secs: u64) -> u64 {
    if train_secs == 0 { 0 } else { speedup_secs / train_secs }
}

/// Points for training with the whole speedup budget.
#[inline]
pub fn troop_points(points_per_troop: i64, train_secs: u64, speedup_secs: u64) -> i64 {
    super::points::tally(troops_trained(train_secs, speedup_secs), points_per_troop)
}
