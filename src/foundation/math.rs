/// Fixed-point formatting with exactly two fractional digits.
///
/// Matches JavaScript `Number.prototype.toFixed(2)`: the exact binary value is
/// rounded to the nearest cent, exact half-cent ties go away from zero, negative
/// zero prints unsigned, and magnitudes from 1e21 up use exponent form.
pub(crate) fn fmt_fixed2(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let v = if v == 0.0 { 0.0 } else { v };
    if v.abs() >= 1e21 {
        return fmt_exponent(v);
    }
    if is_half_cent_tie(v) {
        let abs = v.abs();
        let whole = abs.trunc();
        // The fractional part of an odd multiple of 1/8 scales to cents exactly.
        let cents = whole as u128 * 100 + ((abs - whole) * 100.0).round() as u128;
        let sign = if v < 0.0 { "-" } else { "" };
        return format!("{sign}{}.{:02}", cents / 100, cents % 100);
    }
    format!("{v:.2}")
}

// A binary double sits exactly on a half cent only when it is an odd multiple of 1/8.
fn is_half_cent_tie(v: f64) -> bool {
    (v * 8.0).fract() == 0.0 && (v * 4.0).fract() != 0.0
}

// Shortest exponent form with an explicit exponent sign, e.g. `1.5e+300`.
fn fmt_exponent(v: f64) -> String {
    let s = format!("{v:e}");
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => s,
    }
}

/// Shortest round-trip decimal form, with negative zero printed as `0`.
pub(crate) fn fmt_number(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}

/// Round half toward positive infinity (JavaScript `Math.round`).
pub(crate) fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
