use chrono::{DateTime, Utc};

use super::ledger_model::{DonationStats, DonorStat, LedgerSnapshot};
use crate::errors::Result;

/// Read access to the records the ledger is computed from.
pub trait LedgerRepositoryTrait: Send + Sync {
    /// Reads the organization's donations and donors in one transaction.
    /// Returns `None` when the organization does not exist.
    fn load_snapshot(&self, organization_id: &str) -> Result<Option<LedgerSnapshot>>;
}

pub trait LedgerServiceTrait: Send + Sync {
    fn get_organization_stats(
        &self,
        organization_id: &str,
        now: DateTime<Utc>,
    ) -> Result<DonationStats>;

    fn get_donor_stats(&self, organization_id: &str, now: DateTime<Utc>)
        -> Result<Vec<DonorStat>>;
}
