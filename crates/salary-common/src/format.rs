//! Number parsing and display formatting.

/// Formats a floating-point number as a string without trailing zeros.
///
/// # Examples
///
/// ```
/// use salary_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.5), "1.5");
/// assert_eq!(format_numeric(0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Rounds to the nearest integer and inserts thousands separators.
///
/// # Examples
///
/// ```
/// use salary_common::format_grouped;
///
/// assert_eq!(format_grouped(1234567.4), "1,234,567");
/// assert_eq!(format_grouped(-950.5), "-951");
/// ```
pub fn format_grouped(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    let rounded = v.round();
    let digits = format!("{}", rounded.abs() as u64);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        grouped.push('-');
    }
    let offset = digits.len() % 3;
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (idx + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats a US dollar amount for tables, e.g. `$120,000`.
pub fn format_usd(v: f64) -> String {
    format!("${}", format_grouped(v))
}

/// Parses a string as `f64`, returning `None` for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Like [`parse_f64`] but rejects `NaN` and infinities.
pub fn parse_finite_f64(value: &str) -> Option<f64> {
    parse_f64(value).filter(|parsed| parsed.is_finite())
}

/// Parses a string as `i64`, returning `None` for invalid or empty strings.
///
/// Integral floats such as `"2023.0"` are accepted because spreadsheet
/// exports often write whole numbers that way.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = trimmed.parse::<i64>() {
        return Some(parsed);
    }
    match trimmed.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() && parsed.fract() == 0.0 => Some(parsed as i64),
        _ => None,
    }
}
