use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::ledger_calculator::LedgerCalculator;
use super::ledger_model::{DonationStats, DonorStat, LedgerSnapshot};
use super::ledger_traits::{LedgerRepositoryTrait, LedgerServiceTrait};
use crate::errors::{Error, Result};

pub struct LedgerService {
    repository: Arc<dyn LedgerRepositoryTrait>,
    calculator: LedgerCalculator,
}

impl LedgerService {
    pub fn new(repository: Arc<dyn LedgerRepositoryTrait>, calculator: LedgerCalculator) -> Self {
        Self {
            repository,
            calculator,
        }
    }

    fn snapshot(&self, organization_id: &str) -> Result<LedgerSnapshot> {
        self.repository
            .load_snapshot(organization_id)?
            .ok_or_else(|| Error::UnknownOrganization(organization_id.to_string()))
    }
}

impl LedgerServiceTrait for LedgerService {
    fn get_organization_stats(
        &self,
        organization_id: &str,
        now: DateTime<Utc>,
    ) -> Result<DonationStats> {
        let snapshot = self.snapshot(organization_id)?;
        Ok(self.calculator.organization_stats(
            organization_id,
            &snapshot.donations,
            &snapshot.donors,
            now,
        ))
    }

    fn get_donor_stats(
        &self,
        organization_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<DonorStat>> {
        let snapshot = self.snapshot(organization_id)?;
        Ok(self
            .calculator
            .donor_stats(&snapshot.donors, &snapshot.donations, now))
    }
}
