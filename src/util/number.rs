//! Number formatting for text content and attribute values.

/// Formats a number the way it appears in markup.
///
/// Integral values print without a fractional part, negative zero prints as
/// `0`, and non-finite values print as `NaN`, `Infinity` or `-Infinity`.
/// Magnitudes of `1e21` and above, or below `1e-6`, switch to exponent
/// notation with an explicit sign (`1e+21`, `1.5e-7`).
///
/// # Examples
///
/// ```
/// use markup_tree::util::number::format_number;
///
/// assert_eq!(format_number(2.0), "2");
/// assert_eq!(format_number(0.25), "0.25");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
/// assert_eq!(format_number(1e21), "1e+21");
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let text = format!("{n:e}");
        match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => text,
        }
    } else {
        n.to_string()
    }
}

/// Widens an `f32` to the `f64` with the same shortest decimal text, so
/// `0.1_f32` stays `0.1` instead of `0.10000000149011612`.
#[must_use]
pub fn widen_f32(value: f32) -> f64 {
    value.to_string().parse().unwrap_or(f64::from(value))
}
