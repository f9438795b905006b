/// Promotes an integer to a floating-point value.
///
/// Integers beyond `2^53` lose precision, exactly as a host `as` cast does.
/// Mixed integer/float arithmetic and the `min`, `max` and `sum` built-ins
/// all promote through this function.
///
/// ## Example
/// ```
/// use amython::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(-7), -7.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Promotes a boolean to an integer: `True` is `1`, `False` is `0`.
///
/// ## Example
/// ```
/// use amython::util::num::bool_to_i64;
///
/// assert_eq!(bool_to_i64(true), 1);
/// assert_eq!(bool_to_i64(false), 0);
/// ```
#[must_use]
pub fn bool_to_i64(value: bool) -> i64 {
    i64::from(value)
}
