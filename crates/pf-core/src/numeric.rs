/// Floating point type used throughout system
pub type Real = f64;

/// Round a value to the nearest multiple of `granularity`.
///
/// The value is truncated toward zero first, then the remainder (which takes
/// the sign of the value) decides the direction: a remainder strictly greater
/// than half the granularity (integer half) rounds up, anything else rounds
/// down. A granularity below 1 only truncates. Non-finite values pass
/// through unchanged.
pub fn round_to_granularity(value: Real, granularity: i64) -> Real {
    if !value.is_finite() {
        return value;
    }
    let whole = value as i64;
    if granularity < 1 {
        return whole as Real;
    }
    let rem = whole % granularity;
    if rem > granularity / 2 {
        whole.saturating_add(granularity - rem) as Real
    } else {
        (whole - rem) as Real
    }
}
