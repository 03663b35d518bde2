use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

const BILLION: f64 = 1_000_000_000.0;
const MILLION: f64 = 1_000_000.0;
const THOUSAND: f64 = 1_000.0;
const MAX_FRACTION_DIGITS: u32 = 3;

/// Digit grouping and decimal mark used for uncompacted values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberLocale {
    #[default]
    En,
    Ru,
}

impl NumberLocale {
    #[must_use]
    pub fn group_separator(self) -> &'static str {
        match self {
            Self::En => ",",
            Self::Ru => "\u{a0}",
        }
    }

    #[must_use]
    pub fn decimal_mark(self) -> char {
        match self {
            Self::En => '.',
            Self::Ru => ',',
        }
    }
}

/// Axis/tooltip formatting: `B`/`M`/`K` suffixes with one decimal above a
/// thousand, locale-grouped digits below.
#[must_use]
pub fn format_value(value: f64, locale: NumberLocale) -> String {
    if value >= BILLION {
        format!("{:.1}B", value / BILLION)
    } else if value >= MILLION {
        format!("{:.1}M", value / MILLION)
    } else if value >= THOUSAND {
        format!("{:.1}K", value / THOUSAND)
    } else {
        format_grouped(value, locale)
    }
}

/// Groups integer digits in threes and keeps at most three fraction digits,
/// rounding half away from zero.
#[must_use]
pub fn format_grouped(value: f64, locale: NumberLocale) -> String {
    let Some(decimal) = Decimal::from_f64(value) else {
        return format!("{value:.0}");
    };
    let rounded = decimal
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = rounded.abs().to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + integer.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    out.push_str(&group_digits(integer, locale.group_separator()));
    if let Some(fraction) = fraction {
        out.push(locale.decimal_mark());
        out.push_str(fraction);
    }
    out
}

fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

/// Share of a whole as a one-decimal percentage (`0.4` -> `"40.0%"`).
#[must_use]
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Cuts `label` to `max_chars` characters and appends `...` when it was longer.
#[must_use]
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_owned();
    }
    let mut out: String = label.chars().take(max_chars).collect();
    out.push_str("...");
    out
}
