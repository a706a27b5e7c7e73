//! Number parsing and display formatting.

/// Parses a transport quantity ("10.5", "1,234", " 3 ") into a float.
/// Unparseable or non-finite input degrades to zero rather than dropping
/// the row or leaking "NaN" into the rendered label.
pub fn parse_decimal(raw: &str) -> f64 {
    raw.trim()
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Formats a number with comma thousands separators and at most three
/// fraction digits, trailing zeros trimmed (`toLocaleString` semantics).
pub fn format_number(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let fixed = fixed.trim_end_matches('0').trim_end_matches('.');
    let mut parts = fixed.splitn(2, '.');
    let int_part = parts.next().unwrap_or("0");
    let frac_part = parts.next();

    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let mut result: String = grouped.chars().rev().collect();

    if let Some(frac) = frac_part {
        result.push('.');
        result.push_str(frac);
    }
    if value.is_sign_negative() && result != "0" {
        result.insert(0, '-');
    }
    result
}

/// Quantity label for cards and table cells.
pub fn format_quantity(value: f64) -> String {
    format!("{} kg", format_number(value))
}

/// Unit-price label (Korean won).
pub fn format_price(value: f64) -> String {
    format!("{}원", format_number(value))
}
