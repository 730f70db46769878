use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LAPSED_DONOR_DAYS, DEFAULT_NEW_DONOR_DAYS};
use crate::donations::Donation;
use crate::donors::Donor;
use crate::errors::{Error, Result};
use crate::utils::money::currency_display;

/// Dashboard statistics for one organization.
///
/// Totals are exact decimals; they serialize as `$X.XX` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationStats {
    #[serde(with = "currency_display")]
    pub today_total: Decimal,
    #[serde(with = "currency_display")]
    pub month_total: Decimal,
    pub gift_count_today: u64,
    pub gift_count_month: u64,
    pub gift_count_year: u64,
    #[serde(with = "currency_display")]
    pub average_gift: Decimal,
    pub new_donors_this_month: u64,
}

impl Default for DonationStats {
    fn default() -> Self {
        Self {
            today_total: Decimal::new(0, 2),
            month_total: Decimal::new(0, 2),
            gift_count_today: 0,
            gift_count_month: 0,
            gift_count_year: 0,
            average_gift: Decimal::new(0, 2),
            new_donors_this_month: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonorStatus {
    New,
    Active,
    Lapsed,
}

impl DonorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DonorStatus::New => "new",
            DonorStatus::Active => "active",
            DonorStatus::Lapsed => "lapsed",
        }
    }
}

impl std::fmt::Display for DonorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-donor rollup. Anonymous donors are reported without name or email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorStat {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    #[serde(with = "currency_display")]
    pub total_gifts: Decimal,
    pub gift_count: u64,
    pub last_gift: Option<DateTime<Utc>>,
    pub status: DonorStatus,
}

/// Day boundaries used to classify donors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorStatusThresholds {
    /// A first-time donor stays `new` for this many days after the gift.
    pub new_donor_days: i64,
    /// Donors whose last gift is older than this are `lapsed`.
    pub lapsed_after_days: i64,
}

impl Default for DonorStatusThresholds {
    fn default() -> Self {
        Self {
            new_donor_days: DEFAULT_NEW_DONOR_DAYS,
            lapsed_after_days: DEFAULT_LAPSED_DONOR_DAYS,
        }
    }
}

impl DonorStatusThresholds {
    pub fn new(new_donor_days: i64, lapsed_after_days: i64) -> Result<Self> {
        if new_donor_days <= 0 || lapsed_after_days <= 0 {
            return Err(Error::InvalidConfiguration(
                "Donor status thresholds must be positive".to_string(),
            ));
        }
        if new_donor_days > lapsed_after_days {
            return Err(Error::InvalidConfiguration(format!(
                "New donor window ({} days) exceeds the lapsed threshold ({} days)",
                new_donor_days, lapsed_after_days
            )));
        }
        Ok(Self {
            new_donor_days,
            lapsed_after_days,
        })
    }
}

/// Donations and donors of one organization read from a single snapshot.
#[derive(Debug, Clone, Default)]
pub struct LedgerSnapshot {
    pub donations: Vec<Donation>,
    pub donors: Vec<Donor>,
}
