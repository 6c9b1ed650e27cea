/// Display formatting for install counts, ratings and prices.
///
/// Values are stored as raw numbers; formatting only happens at the
/// display boundary (status line, pivot table, chart axes).

/// Shown in table cells whose source value was absent.
pub const MISSING: &str = "-";

/// Format an integer with thousand separators.
pub fn format_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let s = count.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Short axis label for a large count: `950`, `12.5K`, `3.0M`, `1.20B`.
pub fn format_compact(value: f64) -> String {
    const K: f64 = 1_000.0;
    const M: f64 = K * 1_000.0;
    const B: f64 = M * 1_000.0;

    let v = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    if v < K {
        format!("{sign}{v:.0}")
    } else if v < M {
        format!("{sign}{:.1}K", v / K)
    } else if v < B {
        format!("{sign}{:.1}M", v / M)
    } else {
        format!("{sign}{:.2}B", v / B)
    }
}

/// Two-decimal rating, or [`MISSING`].
pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) => format!("{r:.2}"),
        None => MISSING.to_string(),
    }
}

/// Install count with separators, or [`MISSING`].
pub fn format_installs(installs: Option<u64>) -> String {
    match installs {
        Some(n) => format_count(n),
        None => MISSING.to_string(),
    }
}

/// `Free` for zero, otherwise a dollar amount.
pub fn format_price(price: f64) -> String {
    if price == 0.0 {
        "Free".to_string()
    } else {
        format!("${price:.2}")
    }
}
