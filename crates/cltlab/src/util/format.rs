/// Format an axis or stat value compactly.
///
/// Integers print without a decimal point, large magnitudes drop to one
/// decimal, and small values keep three significant places so rates like
/// 0.15 stay readable.
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    let abs = value.abs();
    if abs >= 1000.0 {
        format!("{:.0}", value)
    } else if value.fract() == 0.0 && abs < 1e9 {
        format!("{}", value as i64)
    } else if abs >= 10.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.3}", value)
    }
}
