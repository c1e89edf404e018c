//! Number formatting for prices, counts and percentages.
//!
//! Grouping follows the ru-RU convention: thousands separated by a space.

/// Currency sign appended to money values
pub const CURRENCY: &str = "₸";

/// Форматирует число с разделителем тысяч (пробел) и указанным количеством знаков после запятой
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        _ => format!("{:.2}", value),
    };

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    // Пробел каждые 3 цифры с конца целой части
    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}.{}", grouped, d),
        None => grouped,
    }
}

/// Rounds to an integer and groups thousands. Missing or NaN renders as "0".
pub fn fmt(value: impl Into<Option<f64>>) -> String {
    match value.into() {
        Some(v) if v.is_finite() => {
            let rounded = v.round();
            if rounded == 0.0 {
                "0".to_string()
            } else {
                format_number_with_decimals(rounded, 0)
            }
        }
        _ => "0".to_string(),
    }
}

/// Magnitude-abbreviated form: `2.5M`, `2K`, plain `fmt` below a thousand
pub fn fmt_short(value: impl Into<Option<f64>>) -> String {
    let v = match value.into() {
        Some(v) if v.is_finite() && v != 0.0 => v,
        _ => return "0".to_string(),
    };

    if v >= 1e6 {
        // one decimal, a trailing ".0" is dropped by f64's Display
        format!("{}M", (v / 1e5).round() / 10.0)
    } else if v >= 1e3 {
        format!("{}K", (v / 1e3).round())
    } else {
        fmt(v)
    }
}

pub fn fmt_money(value: impl Into<Option<f64>>) -> String {
    format!("{}{}", fmt(value), CURRENCY)
}

pub fn fmt_percent(value: impl Into<Option<f64>>) -> String {
    format!("{}%", fmt(value))
}

/// Profit-like values are shown with an explicit plus
pub fn fmt_signed_percent(value: impl Into<Option<f64>>) -> String {
    let v = value.into().filter(|v| v.is_finite()).unwrap_or(0.0);
    if v.round() > 0.0 {
        format!("+{}", fmt_percent(v))
    } else {
        fmt_percent(v)
    }
}

/// Money with an explicit plus when positive; losses keep their minus
pub fn fmt_signed_money(value: impl Into<Option<f64>>) -> String {
    let v = value.into().filter(|v| v.is_finite()).unwrap_or(0.0);
    if v.round() > 0.0 {
        format!("+{}", fmt_money(v))
    } else {
        fmt_money(v)
    }
}
