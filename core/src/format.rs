use crate::model::currency::Currency;
use crate::schedule::SATS_PER_BTC;

/// `$1,234.57` / `CA$0.08`: always two fraction digits, grouped thousands.
pub fn format_currency(value: f64, currency: Currency) -> String {
    if !value.is_finite() {
        return format!("{}{}", currency.symbol(), value);
    }
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}{}.{}", sign, currency.symbol(), group_thousands(int_part), frac_part)
}

/// `1,234.5` / `84`: up to two fraction digits, trailing zeros dropped.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');
    let sign = if value < 0.0 && fixed.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    if frac_part.is_empty() {
        format!("{}{}", sign, group_thousands(int_part))
    } else {
        format!("{}{}.{}", sign, group_thousands(int_part), frac_part)
    }
}

/// Short axis label: `1.5M`, `88.1K`, `512`.
pub fn format_compact(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format!("{:.0}", value)
    }
}

/// Whole-coin rendering of a satoshi amount, e.g. `0.00088126 BTC`.
pub fn format_btc(sats: u64) -> String {
    format!("{}.{:08} BTC", sats / SATS_PER_BTC, sats % SATS_PER_BTC)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
