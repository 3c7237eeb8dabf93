//! Unit mechanics: clamping and minimum-unit rounding of spend quantities.

/// Round down to a whole number of units (`unit == 0` reads as 1).
#[inline]
pub fn round_down_to_unit(qty: u64, unit: u64) -> u64 {
    let unit = unit.max(1);
    qty / unit * unit
}

/// Never spend more than is held.
#[inline]
pub fn clamp_quantity(qty: u64, available: u64) -> u64 {
    qty.min(available)
}

/// Largest whole-unit quantity worth at most `remaining` points.
#[inline]
pub fn fill_quantity(remaining: i64, point_value: i64, available: u64, unit: u64) -> u64 {
    if remaining <= 0 || point_value <= 0 {
        return 0;
    }
    let raw = (remaining / point_value) as u64;
    round_down_to_unit(clamp_quantity(raw, available), unit)
}
