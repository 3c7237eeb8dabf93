//! Point mechanics: saturating count × value sums.

/// `count * points`, saturating in both directions; negative values subtract.
#[inline]
pub fn tally(count: u64, points: i64) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX).saturating_mul(points)
}

/// Stamina spent on `count` actions costing `stamina` each.
#[inline]
pub fn stamina_cost(count: u64, stamina: u64) -> u64 {
    count.saturating_mul(stamina)
}
