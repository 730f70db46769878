//! Donation domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_GIFT_AMOUNT, MONEY_DECIMAL_PRECISION};
use crate::donors::Donor;
use crate::errors::{Error, Result, ValidationError};
use crate::roundup::{RoundUpOption, RoundUpResult};

/// A recorded gift. `amount` is the final charged value, round-up included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: String,
    pub organization_id: String,
    pub donor_id: Option<String>,
    pub fund_id: Option<String>,
    pub amount: Decimal,
    pub fund_name: Option<String>,
    pub donor_name: Option<String>,
    pub is_anonymous: bool,
    pub created_at: DateTime<Utc>,
}

/// Input model for recording a donation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDonation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub organization_id: String,
    pub donor_id: Option<String>,
    pub fund_id: Option<String>,
    pub amount: Decimal,
    pub fund_name: Option<String>,
    pub donor_name: Option<String>,
    #[serde(default)]
    pub is_anonymous: bool,
    /// Defaults to the time of insertion. Set when importing historical gifts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl NewDonation {
    pub fn validate(&self) -> Result<()> {
        if self.organization_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "organizationId".to_string(),
            )));
        }
        validate_gift_amount(self.amount)
    }
}

/// A gift amount must be positive, at most [`MAX_GIFT_AMOUNT`], and
/// expressed in whole cents.
pub(crate) fn validate_gift_amount(amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(Error::InvalidAmount(format!(
            "Donation amount must be greater than zero, got {}",
            amount
        )));
    }
    if amount > MAX_GIFT_AMOUNT {
        return Err(Error::InvalidAmount(format!(
            "Donation amount {} exceeds the maximum of {}",
            amount, MAX_GIFT_AMOUNT
        )));
    }
    if amount.normalize().scale() > MONEY_DECIMAL_PRECISION {
        return Err(Error::InvalidAmount(format!(
            "Donation amount {} has more than {} fraction digits",
            amount, MONEY_DECIMAL_PRECISION
        )));
    }
    Ok(())
}

/// A gift submitted from an organization's public giving page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftRequest {
    pub amount: Decimal,
    pub fund_id: String,
    pub donor_name: Option<String>,
    pub donor_email: Option<String>,
    #[serde(default)]
    pub is_anonymous: bool,
    /// The round-up option the donor picked, if any.
    #[serde(default)]
    pub round_up: Option<RoundUpOption>,
}

/// Outcome of a submitted gift.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftReceipt {
    pub donation: Donation,
    pub round_up: RoundUpResult,
    pub donor: Option<Donor>,
    pub thank_you_message: String,
}
