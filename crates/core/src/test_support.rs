//! In-memory repositories shared by the service tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::donations::{Donation, DonationRepositoryTrait, NewDonation};
use crate::donors::{Donor, DonorRepositoryTrait, NewDonor};
use crate::errors::{DatabaseError, Error, Result};
use crate::funds::{Fund, FundRepositoryTrait, NewFund};
use crate::ledger::{LedgerRepositoryTrait, LedgerSnapshot};
use crate::organizations::{NewOrganization, Organization, OrganizationRepositoryTrait};

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

fn next_id(prefix: &str, len: usize) -> String {
    format!("{}-{}", prefix, len + 1)
}

#[derive(Clone, Default)]
pub struct InMemoryOrganizationRepository {
    pub organizations: Arc<Mutex<Vec<Organization>>>,
    /// Receives the funds seeded by `create_with_funds`.
    pub funds: InMemoryFundRepository,
}

impl InMemoryOrganizationRepository {
    pub fn with(organizations: Vec<Organization>) -> Self {
        Self {
            organizations: Arc::new(Mutex::new(organizations)),
            funds: InMemoryFundRepository::default(),
        }
    }
}

#[async_trait]
impl OrganizationRepositoryTrait for InMemoryOrganizationRepository {
    async fn create(&self, new_organization: NewOrganization) -> Result<Organization> {
        let mut organizations = self.organizations.lock().unwrap();
        if organizations.iter().any(|o| o.slug == new_organization.slug) {
            return Err(Error::Database(DatabaseError::UniqueViolation(
                "organizations.slug".to_string(),
            )));
        }
        let organization = Organization {
            id: new_organization
                .id
                .unwrap_or_else(|| next_id("org", organizations.len())),
            name: new_organization.name,
            org_type: new_organization.org_type,
            address: new_organization.address,
            ein: new_organization.ein,
            slug: new_organization.slug,
            about_text: new_organization.about_text,
            logo_url: new_organization.logo_url,
            primary_color: new_organization.primary_color,
            is_verified: new_organization.is_verified,
            bank_connected: new_organization.bank_connected,
            onboarding_complete: new_organization.onboarding_complete,
            giving_page: new_organization.giving_page,
            created_at: fixed_now(),
        };
        organizations.push(organization.clone());
        Ok(organization)
    }

    async fn create_with_funds(
        &self,
        new_organization: NewOrganization,
        new_funds: Vec<NewFund>,
    ) -> Result<(Organization, Vec<Fund>)> {
        let organization = self.create(new_organization).await?;
        let mut funds = self.funds.funds.lock().unwrap();
        let created = new_funds
            .into_iter()
            .map(|new_fund| {
                InMemoryFundRepository::insert(
                    &mut funds,
                    NewFund {
                        organization_id: organization.id.clone(),
                        ..new_fund
                    },
                )
            })
            .collect();
        Ok((organization, created))
    }

    async fn update(&self, organization: Organization) -> Result<Organization> {
        let mut organizations = self.organizations.lock().unwrap();
        let slot = organizations
            .iter_mut()
            .find(|o| o.id == organization.id)
            .ok_or_else(|| Error::NotFound(format!("Organization {}", organization.id)))?;
        *slot = organization.clone();
        Ok(organization)
    }

    fn find_by_id(&self, organization_id: &str) -> Result<Option<Organization>> {
        let organizations = self.organizations.lock().unwrap();
        Ok(organizations.iter().find(|o| o.id == organization_id).cloned())
    }

    fn find_by_slug(&self, slug: &str) -> Result<Option<Organization>> {
        let organizations = self.organizations.lock().unwrap();
        Ok(organizations.iter().find(|o| o.slug == slug).cloned())
    }

    fn find_first(&self) -> Result<Option<Organization>> {
        Ok(self.organizations.lock().unwrap().first().cloned())
    }

    fn list(&self, onboarding_complete: Option<bool>) -> Result<Vec<Organization>> {
        let organizations = self.organizations.lock().unwrap();
        Ok(organizations
            .iter()
            .filter(|o| onboarding_complete.map_or(true, |flag| o.onboarding_complete == flag))
            .cloned()
            .collect())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryFundRepository {
    pub funds: Arc<Mutex<Vec<Fund>>>,
}

impl InMemoryFundRepository {
    pub fn with(funds: Vec<Fund>) -> Self {
        Self {
            funds: Arc::new(Mutex::new(funds)),
        }
    }

    fn insert(funds: &mut Vec<Fund>, new_fund: NewFund) -> Fund {
        let fund = Fund {
            id: new_fund.id.unwrap_or_else(|| next_id("fund", funds.len())),
            organization_id: new_fund.organization_id,
            name: new_fund.name,
            enabled: new_fund.enabled,
            sort_order: new_fund.sort_order,
        };
        funds.push(fund.clone());
        fund
    }
}

#[async_trait]
impl FundRepositoryTrait for InMemoryFundRepository {
    async fn create(&self, new_fund: NewFund) -> Result<Fund> {
        let mut funds = self.funds.lock().unwrap();
        Ok(Self::insert(&mut funds, new_fund))
    }

    async fn update(&self, fund: Fund) -> Result<Fund> {
        let mut funds = self.funds.lock().unwrap();
        let slot = funds
            .iter_mut()
            .find(|f| f.id == fund.id)
            .ok_or_else(|| Error::NotFound(format!("Fund {}", fund.id)))?;
        *slot = fund.clone();
        Ok(fund)
    }

    async fn delete(&self, fund_id: &str) -> Result<usize> {
        let mut funds = self.funds.lock().unwrap();
        let before = funds.len();
        funds.retain(|f| f.id != fund_id);
        Ok(before - funds.len())
    }

    fn find_by_id(&self, fund_id: &str) -> Result<Option<Fund>> {
        Ok(self
            .funds
            .lock()
            .unwrap()
            .iter()
            .find(|f| f.id == fund_id)
            .cloned())
    }

    fn list_by_organization(&self, organization_id: &str) -> Result<Vec<Fund>> {
        let mut funds: Vec<Fund> = self
            .funds
            .lock()
            .unwrap()
            .iter()
            .filter(|f| f.organization_id == organization_id)
            .cloned()
            .collect();
        funds.sort_by_key(|f| f.sort_order);
        Ok(funds)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryDonorRepository {
    pub donors: Arc<Mutex<Vec<Donor>>>,
}

impl InMemoryDonorRepository {
    fn insert(donors: &mut Vec<Donor>, new_donor: NewDonor) -> Donor {
        let donor = Donor {
            id: new_donor
                .id
                .unwrap_or_else(|| next_id("donor", donors.len())),
            organization_id: new_donor.organization_id,
            name: new_donor.name,
            email: new_donor.email,
            is_anonymous: new_donor.is_anonymous,
            created_at: fixed_now(),
        };
        donors.push(donor.clone());
        donor
    }
}

#[async_trait]
impl DonorRepositoryTrait for InMemoryDonorRepository {
    async fn create(&self, new_donor: NewDonor) -> Result<Donor> {
        let mut donors = self.donors.lock().unwrap();
        Ok(Self::insert(&mut donors, new_donor))
    }

    async fn find_or_create(&self, new_donor: NewDonor) -> Result<Donor> {
        let mut donors = self.donors.lock().unwrap();
        let existing = donors
            .iter()
            .find(|d| {
                d.organization_id == new_donor.organization_id
                    && new_donor.email.is_some()
                    && d.email == new_donor.email
            })
            .cloned();
        Ok(existing.unwrap_or_else(|| Self::insert(&mut donors, new_donor)))
    }

    fn find_by_id(&self, donor_id: &str) -> Result<Option<Donor>> {
        Ok(self
            .donors
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.id == donor_id)
            .cloned())
    }

    fn list_by_organization(&self, organization_id: &str) -> Result<Vec<Donor>> {
        Ok(self
            .donors
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|d| d.organization_id == organization_id)
            .cloned()
            .collect())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryDonationRepository {
    pub donations: Arc<Mutex<Vec<Donation>>>,
    /// Donors resolved by `create_gift`.
    pub donors: InMemoryDonorRepository,
}

impl InMemoryDonationRepository {
    pub fn with_donors(donors: InMemoryDonorRepository) -> Self {
        Self {
            donations: Arc::default(),
            donors,
        }
    }
}

#[async_trait]
impl DonationRepositoryTrait for InMemoryDonationRepository {
    async fn create_gift(
        &self,
        donor: Option<NewDonor>,
        mut new_donation: NewDonation,
    ) -> Result<(Option<Donor>, Donation)> {
        let donor = match donor {
            Some(new_donor) => Some(self.donors.find_or_create(new_donor).await?),
            None => None,
        };
        if let Some(donor) = &donor {
            new_donation.donor_id = Some(donor.id.clone());
            new_donation.donor_name = Some(donor.name.clone());
        }
        let donation = self.create(new_donation).await?;
        Ok((donor, donation))
    }

    async fn create(&self, new_donation: NewDonation) -> Result<Donation> {
        let mut donations = self.donations.lock().unwrap();
        let donation = Donation {
            id: new_donation
                .id
                .unwrap_or_else(|| next_id("donation", donations.len())),
            organization_id: new_donation.organization_id,
            donor_id: new_donation.donor_id,
            fund_id: new_donation.fund_id,
            amount: new_donation.amount,
            fund_name: new_donation.fund_name,
            donor_name: new_donation.donor_name,
            is_anonymous: new_donation.is_anonymous,
            created_at: new_donation.created_at.unwrap_or_else(fixed_now),
        };
        donations.push(donation.clone());
        Ok(donation)
    }

    fn list_by_organization(
        &self,
        organization_id: &str,
        limit: Option<i64>,
    ) -> Result<Vec<Donation>> {
        let donations = self.donations.lock().unwrap();
        let mut matching: Vec<Donation> = donations
            .iter()
            .filter(|d| d.organization_id == organization_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        if let Some(limit) = limit {
            matching.truncate(limit.max(0) as usize);
        }
        Ok(matching)
    }
}

/// Ledger snapshot source backed by the in-memory repositories above.
pub struct InMemoryLedgerRepository {
    pub organizations: InMemoryOrganizationRepository,
    pub donors: InMemoryDonorRepository,
    pub donations: InMemoryDonationRepository,
}

impl LedgerRepositoryTrait for InMemoryLedgerRepository {
    fn load_snapshot(&self, organization_id: &str) -> Result<Option<LedgerSnapshot>> {
        if self.organizations.find_by_id(organization_id)?.is_none() {
            return Ok(None);
        }
        Ok(Some(LedgerSnapshot {
            donations: self
                .donations
                .list_by_organization(organization_id, None)?,
            donors: self.donors.list_by_organization(organization_id)?,
        }))
    }
}
