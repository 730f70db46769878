use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use log::debug;
use rust_decimal::Decimal;

use super::ledger_model::{DonationStats, DonorStat, DonorStatus, DonorStatusThresholds};
use crate::constants::ANONYMOUS_DONOR_NAME;
use crate::donations::Donation;
use crate::donors::Donor;
use crate::utils::money::round_money;
use crate::utils::time_utils::{start_of_day, start_of_month, start_of_year, DEFAULT_REPORTING_TZ};

/// Computes organization and donor statistics from in-memory records.
///
/// Pure: the reference time is always supplied by the caller, and calendar
/// windows ("today", "this month", "this year") are taken in the reporting
/// timezone. Totals saturate at `Decimal::MAX` instead of overflowing.
#[derive(Debug, Clone, Copy)]
pub struct LedgerCalculator {
    timezone: Tz,
    thresholds: DonorStatusThresholds,
}

impl Default for LedgerCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_REPORTING_TZ, DonorStatusThresholds::default())
    }
}

/// A closed window `[start, end]`.
#[derive(Debug, Clone, Copy)]
struct Window {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Window {
    fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

#[derive(Default)]
struct DonorTotals {
    total: Decimal,
    count: u64,
    last_gift: Option<DateTime<Utc>>,
}

impl LedgerCalculator {
    pub fn new(timezone: Tz, thresholds: DonorStatusThresholds) -> Self {
        Self {
            timezone,
            thresholds,
        }
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn thresholds(&self) -> DonorStatusThresholds {
        self.thresholds
    }

    /// Statistics for `organization_id`. Records belonging to other
    /// organizations are ignored.
    pub fn organization_stats(
        &self,
        organization_id: &str,
        donations: &[Donation],
        donors: &[Donor],
        now: DateTime<Utc>,
    ) -> DonationStats {
        let today = Window {
            start: start_of_day(now, self.timezone),
            end: now,
        };
        let month = Window {
            start: start_of_month(now, self.timezone),
            end: now,
        };
        let year = Window {
            start: start_of_year(now, self.timezone),
            end: now,
        };

        let mut stats = DonationStats::default();
        let mut today_total = Decimal::ZERO;
        let mut month_total = Decimal::ZERO;

        for donation in donations
            .iter()
            .filter(|d| d.organization_id == organization_id)
        {
            let at = donation.created_at;
            if today.contains(at) {
                today_total = today_total.saturating_add(donation.amount);
                stats.gift_count_today += 1;
            }
            if month.contains(at) {
                month_total = month_total.saturating_add(donation.amount);
                stats.gift_count_month += 1;
            }
            if year.contains(at) {
                stats.gift_count_year += 1;
            }
        }

        stats.today_total = round_money(today_total);
        stats.month_total = round_money(month_total);
        if stats.gift_count_month > 0 {
            stats.average_gift = round_money(month_total / Decimal::from(stats.gift_count_month));
        }
        stats.new_donors_this_month = donors
            .iter()
            .filter(|d| d.organization_id == organization_id && month.contains(d.created_at))
            .count() as u64;

        debug!(
            "Organization {} stats: {} gifts this year, {} this month",
            organization_id, stats.gift_count_year, stats.gift_count_month
        );
        stats
    }

    /// One rollup per donor, ordered by lifetime total, largest first.
    /// Donors with equal totals keep their input order.
    pub fn donor_stats(
        &self,
        donors: &[Donor],
        donations: &[Donation],
        now: DateTime<Utc>,
    ) -> Vec<DonorStat> {
        let mut totals: HashMap<&str, DonorTotals> = HashMap::new();
        for donation in donations {
            if let Some(donor_id) = donation.donor_id.as_deref() {
                let entry = totals.entry(donor_id).or_default();
                entry.total = entry.total.saturating_add(donation.amount);
                entry.count += 1;
                if entry.last_gift.map_or(true, |last| donation.created_at > last) {
                    entry.last_gift = Some(donation.created_at);
                }
            }
        }

        let mut stats: Vec<DonorStat> = donors
            .iter()
            .map(|donor| {
                let rollup = totals.remove(donor.id.as_str()).unwrap_or_default();
                let (name, email) = if donor.is_anonymous {
                    (ANONYMOUS_DONOR_NAME.to_string(), None)
                } else {
                    (donor.name.clone(), donor.email.clone())
                };
                DonorStat {
                    id: donor.id.clone(),
                    name,
                    email,
                    total_gifts: round_money(rollup.total),
                    gift_count: rollup.count,
                    last_gift: rollup.last_gift,
                    status: self.classify(rollup.count, rollup.last_gift, now),
                }
            })
            .collect();

        stats.sort_by(|a, b| b.total_gifts.cmp(&a.total_gifts));
        stats
    }

    /// Rules apply in order: no gift is `new`; a last gift past the lapsed
    /// threshold is `lapsed`; a single gift inside the new-donor window is
    /// `new`; anything else is `active`.
    pub fn classify(
        &self,
        gift_count: u64,
        last_gift: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> DonorStatus {
        let Some(last_gift) = last_gift else {
            return DonorStatus::New;
        };
        let age = now - last_gift;
        if age > Duration::days(self.thresholds.lapsed_after_days) {
            DonorStatus::Lapsed
        } else if age <= Duration::days(self.thresholds.new_donor_days) && gift_count == 1 {
            DonorStatus::New
        } else {
            DonorStatus::Active
        }
    }
}

/// Organization statistics with UTC windows and default thresholds.
pub fn compute_organization_stats(
    organization_id: &str,
    donations: &[Donation],
    donors: &[Donor],
    now: DateTime<Utc>,
) -> DonationStats {
    LedgerCalculator::default().organization_stats(organization_id, donations, donors, now)
}

/// Donor statistics with default thresholds.
pub fn compute_donor_stats(
    donors: &[Donor],
    donations: &[Donation],
    now: DateTime<Utc>,
) -> Vec<DonorStat> {
    LedgerCalculator::default().donor_stats(donors, donations, now)
}
