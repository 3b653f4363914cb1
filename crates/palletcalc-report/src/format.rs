//! Number formatting for printed values.
//!
//! Whole numbers are always printed without decimals. Everything else is
//! rounded to a fixed number of places, which depends on where the value
//! is shown.

fn whole(value: f64) -> Option<String> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    // avoid printing "-0"
    if value == 0.0 {
        return Some("0".to_string());
    }
    Some(format!("{value}"))
}

/// Parameter sheet values: up to three decimals, trailing zeros dropped.
pub fn parameter(value: f64) -> String {
    if let Some(s) = whole(value) {
        return s;
    }
    let fixed = format!("{value:.3}");
    if !fixed.contains('.') {
        return fixed;
    }
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Headline metrics: two decimals.
pub fn metric(value: f64) -> String {
    whole(value).unwrap_or_else(|| format!("{value:.2}"))
}

/// Breakdown rows: three decimals.
pub fn detail(value: f64) -> String {
    whole(value).unwrap_or_else(|| format!("{value:.3}"))
}

/// Panel summaries: always two decimals.
pub fn summary(value: f64) -> String {
    format!("{value:.2}")
}
