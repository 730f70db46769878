//! Round-up domain models.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Controls whether and how a gift is rounded up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundUpConfig {
    pub enabled: bool,
    /// Monetary increment to round to, e.g. 1.00, 5.00 or 10.00.
    #[serde(alias = "round_to")]
    pub round_to: Decimal,
    /// Scales the computed delta. Defaults to 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<Decimal>,
}

impl RoundUpConfig {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            round_to: Decimal::ONE,
            multiplier: None,
        }
    }

    pub fn to_nearest(round_to: Decimal) -> Self {
        Self {
            enabled: true,
            round_to,
            multiplier: None,
        }
    }

    pub fn with_multiplier(mut self, multiplier: Decimal) -> Self {
        self.multiplier = Some(multiplier);
        self
    }

    /// Effective multiplier applied to the round-up delta.
    pub fn effective_multiplier(&self) -> Decimal {
        self.multiplier.unwrap_or(Decimal::ONE)
    }
}

impl Default for RoundUpConfig {
    fn default() -> Self {
        Self::disabled()
    }
}

/// Outcome of a round-up calculation, all values rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundUpResult {
    /// Amount actually charged to the donor.
    pub final_amount: Decimal,
    /// Portion of `final_amount` contributed by rounding.
    pub round_up_amount: Decimal,
    pub original_amount: Decimal,
}

/// Round-up choices an organization can offer on its giving page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundUpOption {
    NearestDollar,
    #[serde(rename = "nearest-5")]
    Nearest5,
    #[serde(rename = "nearest-10")]
    Nearest10,
}

impl RoundUpOption {
    pub const ALL: [RoundUpOption; 3] = [
        RoundUpOption::NearestDollar,
        RoundUpOption::Nearest5,
        RoundUpOption::Nearest10,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoundUpOption::NearestDollar => "nearest-dollar",
            RoundUpOption::Nearest5 => "nearest-5",
            RoundUpOption::Nearest10 => "nearest-10",
        }
    }

    /// Rounding unit for this option.
    pub fn round_to(&self) -> Decimal {
        match self {
            RoundUpOption::NearestDollar => dec!(1.00),
            RoundUpOption::Nearest5 => dec!(5.00),
            RoundUpOption::Nearest10 => dec!(10.00),
        }
    }

    pub fn config(&self) -> RoundUpConfig {
        RoundUpConfig::to_nearest(self.round_to())
    }
}

impl fmt::Display for RoundUpOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoundUpOption {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        RoundUpOption::ALL
            .into_iter()
            .find(|option| option.as_str() == s.trim())
            .ok_or_else(|| {
                Error::Validation(ValidationError::InvalidInput(format!(
                    "Unknown round-up option '{}'",
                    s
                )))
            })
    }
}
