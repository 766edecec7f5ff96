//! Display helpers for currency symbols and locale-aware amount formatting.

/// Display symbol for the supported currency codes. Unknown codes render
/// with no symbol rather than failing.
pub fn currency_symbol(code: &str) -> &'static str {
    match code {
        "RWF" => "rwf ",
        "USD" => "$",
        "CAD" => "C$",
        "GBP" => "£",
        "CNY" => "¥",
        "EUR" => "€",
        "JPY" => "¥",
        _ => "",
    }
}

struct NumberLocale {
    decimal_separator: char,
    grouping_separator: char,
}

fn locale_for(format_tag: &str) -> NumberLocale {
    match format_tag {
        "eu" => NumberLocale {
            decimal_separator: ',',
            grouping_separator: '.',
        },
        // "uk" and "us" share the same punctuation; unknown tags fall back
        // to the us behavior.
        _ => NumberLocale {
            decimal_separator: '.',
            grouping_separator: ',',
        },
    }
}

/// Renders an amount with exactly two fraction digits and thousands
/// grouping per the format tag. Rounding is uniform across tags; only the
/// punctuation changes.
pub fn format_amount(amount: f64, format_tag: &str) -> String {
    let locale = locale_for(format_tag);
    let fixed = format!("{:.2}", amount);
    let (raw_int, frac) = match fixed.split_once('.') {
        Some(parts) => parts,
        None => (fixed.as_str(), "00"),
    };
    let (sign, digits) = match raw_int.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw_int),
    };
    let grouped = group_digits(digits, locale.grouping_separator);
    format!("{}{}{}{}", sign, grouped, locale.decimal_separator, frac)
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}
