//! Price formatting with magnitude-based unit scaling.

use serde_json::Value;

/// Format one labeled per-token price, scaled to a readable unit
/// (`"input $0.8/M"`). Zero and unparseable prices yield `None` so callers
/// can omit them.
pub fn format_price(label: &str, price: &Value) -> Option<String> {
    let price = price_as_f64(price)?;
    if price == 0.0 {
        return None;
    }

    // The < 0.001 and < 1 bands deliberately share the same scaling.
    let (scale, suffix) = if price < 0.0001 {
        (1_000_000.0, "/M")
    } else if price < 0.001 {
        (1_000.0, "/K")
    } else if price < 1.0 {
        (1_000.0, "/K")
    } else {
        (1.0, "")
    };

    let scaled = price * scale;
    let mut text = format!("{:.10}", scaled);
    if text.contains('.') {
        text.truncate(text.trim_end_matches('0').trim_end_matches('.').len());
    }
    Some(format!("{} ${}{}", label, text, suffix))
}

/// Format a sequence of labeled prices, dropping empty entries and joining
/// with `", "`. Order is preserved.
pub fn format_pricing<'a, I>(prices: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a Value)>,
{
    prices
        .into_iter()
        .filter_map(|(label, price)| format_price(label, price))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Prices arrive as JSON numbers or decimal strings.
fn price_as_f64(price: &Value) -> Option<f64> {
    match price {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
