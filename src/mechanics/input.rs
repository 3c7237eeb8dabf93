//! Input mechanics: turning raw user-entered counts into usable quantities.

/// Parse a typed count the lenient way: leading digits only, anything else is 0.
/// Negative input clamps to 0 rather than failing.
pub fn parse_count(raw: &str) -> u64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if negative || end == 0 {
        return 0;
    }
    // Overlong input saturates instead of wrapping.
    digits[..end].parse::<u64>().unwrap_or(u64::MAX)
}

/// A positive count below the item's minimum amount is raised to it.
#[inline]
pub fn normalize_count(count: u64, min_amount: u64) -> u64 {
    if min_amount > 1 && count > 0 && count < min_amount {
        min_amount
    } else {
        count
    }
}

/// `parse_count` then `normalize_count`.
#[inline]
pub fn read_count(raw: &str, min_amount: u64) -> u64 {
    normalize_count(parse_count(raw), min_amount)
}
