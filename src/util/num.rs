use std::fmt;

/// Writes `value` in its shortest round-trip form.
///
/// Integral values always keep a fractional part, so `3` is written as `3.0`
/// and an operand can never be mistaken for an integer literal. Very large or
/// very small magnitudes switch to exponent notation, and the IEEE-754
/// specials are written as `inf`, `-inf` and `NaN`.
///
/// ## Errors
/// Propagates any error from the underlying writer.
///
/// ## Example
/// ```
/// use prefix_calc::util::num::write_real;
///
/// let mut out = String::new();
/// write_real(&mut out, 3.0).unwrap();
/// out.push(' ');
/// write_real(&mut out, -0.25).unwrap();
/// out.push(' ');
/// write_real(&mut out, f64::INFINITY).unwrap();
///
/// assert_eq!(out, "3.0 -0.25 inf");
/// ```
pub fn write_real<W: fmt::Write + ?Sized>(out: &mut W, value: f64) -> fmt::Result {
    write!(out, "{value:?}")
}

/// Returns `value` as it appears in renderings.
///
/// ## Example
/// ```
/// use prefix_calc::util::num::format_real;
///
/// assert_eq!(format_real(7.0), "7.0");
/// assert_eq!(format_real(1e-7), "1e-7");
/// ```
#[must_use]
pub fn format_real(value: f64) -> String {
    format!("{value:?}")
}
