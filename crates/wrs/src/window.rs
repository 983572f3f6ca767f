//! Cyclic index windows.

/// Bring `value` into `[min, max]` by whole multiples of `period`.
///
/// Equivalent to subtracting `period` while `value > max`, then adding it
/// while `value < min`. The window is inclusive on both ends and need not
/// start at zero, e.g. rows `[125, 248]` with period 124.
///
/// When `period` equals the window size this is
/// `min + (value - min).rem_euclid(period)`.
pub fn wrap_into_window(value: i32, min: i32, max: i32, period: i32) -> i32 {
    debug_assert!(period > 0, "period must be positive");
    let (min, max, period) = (i64::from(min), i64::from(max), i64::from(period));
    let mut value = i64::from(value);
    if value > max {
        let steps = (value - max + period - 1) / period;
        value -= steps * period;
    }
    if value < min {
        let steps = (min - value + period - 1) / period;
        value += steps * period;
    }
    // Lands in [min, min + period) or (max - period, max], both within i32.
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
