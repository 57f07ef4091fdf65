//! Canonical decimal text for evaluated numbers.
//!
//! Number tokens carry the text a JavaScript engine would print for the
//! same double, so the renderer can pass them through unchanged.

/// Formats `value` the way `Number.prototype.toString()` does.
///
/// - shortest digits that round-trip, no trailing `.0`
/// - fixed notation for magnitudes in `[1e-6, 1e21)`
/// - otherwise exponent notation with an explicit sign: `1e+21`, `1.5e-7`
/// - `-0` prints as `0`; overflow prints as `Infinity` / `-Infinity`
///
/// ```
/// use stc_lex::numeric::format_number;
///
/// assert_eq!(format_number(255.0), "255");
/// assert_eq!(format_number(-1.75), "-1.75");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(1e-7), "1e-7");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    if (1e-6..1e21).contains(&value.abs()) {
        return value.to_string();
    }

    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => scientific,
    }
}
