/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT` in absolute
/// value.
///
/// ## Example
/// ```
/// use subscripta::util::num::{MAX_SAFE_U64_INT, i64_to_f64_checked};
///
/// let result = i64_to_f64_checked(42, "too big!");
/// assert_eq!(result.unwrap(), 42.0);
///
/// let big = MAX_SAFE_U64_INT as i64 + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return Err(error);
    }
    Ok(value as f64)
}

/// Truncates an intermediate subscript result toward zero.
///
/// Non-finite values pass through unchanged; they are rejected later by
/// [`subscript_to_index`].
///
/// ## Example
/// ```
/// use subscripta::util::num::truncate_subscript;
///
/// assert_eq!(truncate_subscript(2.9), 2.0);
/// assert_eq!(truncate_subscript(-2.9), -2.0);
/// ```
#[must_use]
pub fn truncate_subscript(value: f64) -> f64 {
    value.trunc()
}

/// Converts a subscript value into an index of an array with `size` slots.
///
/// The value is truncated toward zero first. Returns `None` for non-finite
/// values and for anything outside `[0, size)`.
///
/// ## Example
/// ```
/// use subscripta::util::num::subscript_to_index;
///
/// assert_eq!(subscript_to_index(2.5, 3), Some(2));
/// assert_eq!(subscript_to_index(-0.5, 3), Some(0));
/// assert_eq!(subscript_to_index(3.0, 3), None);
/// assert_eq!(subscript_to_index(f64::NAN, 3), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub fn subscript_to_index(value: f64, size: usize) -> Option<usize> {
    if !value.is_finite() {
        return None;
    }
    let truncated = value.trunc();
    if truncated < 0.0 || truncated >= size as f64 {
        return None;
    }
    Some(truncated as usize)
}

/// Converts a loaded `i64` index into an index of an array with `size` slots.
///
/// ## Example
/// ```
/// use subscripta::util::num::i64_to_index_checked;
///
/// assert_eq!(i64_to_index_checked(1, 2), Some(1));
/// assert_eq!(i64_to_index_checked(-1, 2), None);
/// assert_eq!(i64_to_index_checked(2, 2), None);
/// ```
#[must_use]
pub fn i64_to_index_checked(value: i64, size: usize) -> Option<usize> {
    usize::try_from(value).ok().filter(|&index| index < size)
}
