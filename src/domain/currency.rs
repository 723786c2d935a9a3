// src/domain/currency.rs

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
    /// Units of this currency per US dollar.
    pub rate: f64,
}

pub static CURRENCIES: [Currency; 4] = [
    Currency {
        code: "USD",
        symbol: "$",
        rate: 1.0,
    },
    Currency {
        code: "GBP",
        symbol: "£",
        rate: 0.79,
    },
    Currency {
        code: "AED",
        symbol: "د.إ",
        rate: 3.67,
    },
    Currency {
        code: "SAR",
        symbol: "﷼",
        rate: 3.75,
    },
];

/// Exact lookup by code (case-insensitive).
pub fn find(code: &str) -> Option<&'static Currency> {
    CURRENCIES
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code.trim()))
}

/// Lookup that never fails: unknown codes resolve to USD.
pub fn lookup(code: &str) -> &'static Currency {
    find(code).unwrap_or(&CURRENCIES[0])
}

/// Render a USD price in the given currency, e.g. `$12.5M` or `£948,000`.
pub fn format_price(price_usd: u64, code: &str) -> String {
    let currency = lookup(code);
    let converted = (price_usd as f64 * currency.rate).round() as u64;

    if converted >= 1_000_000 {
        // tenths of a million, rounded half up
        let tenths = (converted + 50_000) / 100_000;
        format!("{}{}.{}M", currency.symbol, tenths / 10, tenths % 10)
    } else {
        format!("{}{}", currency.symbol, group_thousands(converted))
    }
}

/// `1234567` -> `1,234,567`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
