/// Renders a value the way stack traces display it.
///
/// Integral values print without a fractional part, negative zero prints as
/// `0`, and infinities print as `Infinity` and `-Infinity`. Magnitudes of at
/// least `1e21` or below `1e-6` switch to exponent form with an explicit
/// exponent sign, e.g. `1e+21` and `1.5e-7`.
///
/// ## Example
/// ```
/// use stackviz::util::num::format_number;
///
/// assert_eq!(format_number(5.0), "5");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(-2.5e-7), "-2.5e-7");
/// assert_eq!(format_number(0.000_001), "0.000001");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let text = format!("{value:e}");
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            },
            _ => text,
        };
    }
    value.to_string()
}

/// Renders a stack snapshot bottom to top, e.g. `[2, 3]`.
///
/// ## Example
/// ```
/// use stackviz::util::num::format_stack;
///
/// assert_eq!(format_stack(&[2.0, 0.5]), "[2, 0.5]");
/// assert_eq!(format_stack(&[]), "[]");
/// ```
#[must_use]
pub fn format_stack(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().copied().map(format_number).collect();
    format!("[{}]", items.join(", "))
}
