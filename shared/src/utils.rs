// Display-side formatting shared by the reshaper's logs and the dashboard's
// axis/legend labels. Parsing lives in the reshape crate; nothing here is
// ever parsed back.

/// Formats an amount with thousands grouping and two decimals, e.g.
/// `1234.5` -> `"1,234.50"`.
pub fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    let rounded = format!("{:.2}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}
