use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{CURRENCY_SYMBOL, MONEY_DECIMAL_PRECISION};

/// Rounds an amount to cents using half-up (away from zero) rounding.
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(
        MONEY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    );
    rounded.rescale(MONEY_DECIMAL_PRECISION);
    rounded
}

/// Formats an amount for display, e.g. `$1234.50`.
///
/// No grouping separators are inserted; the dashboard renders totals verbatim.
pub fn format_currency(value: Decimal) -> String {
    format!("{}{}", CURRENCY_SYMBOL, round_money(value))
}

/// Parses a display string produced by [`format_currency`]. A bare number
/// without the currency symbol is accepted too.
pub fn parse_currency(value: &str) -> Result<Decimal, rust_decimal::Error> {
    let trimmed = value.trim();
    let number = trimmed.strip_prefix(CURRENCY_SYMBOL).unwrap_or(trimmed);
    number.trim().parse::<Decimal>()
}

/// Serializes a Decimal as a formatted currency string (`$10.00`).
pub mod currency_display {
    use rust_decimal::Decimal;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_currency(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = String::deserialize(deserializer)?;
        super::parse_currency(&s).map_err(|_| D::Error::custom("Invalid currency amount"))
    }
}
