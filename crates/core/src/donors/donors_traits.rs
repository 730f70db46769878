use async_trait::async_trait;

use super::donors_model::{Donor, NewDonor};
use crate::errors::Result;

/// Trait for donor repository operations
#[async_trait]
pub trait DonorRepositoryTrait: Send + Sync {
    async fn create(&self, new_donor: NewDonor) -> Result<Donor>;
    /// Returns the organization's donor with the email of `new_donor`, or
    /// inserts `new_donor`. The lookup and the insert are one write, so
    /// concurrent callers with the same email get the same donor.
    async fn find_or_create(&self, new_donor: NewDonor) -> Result<Donor>;
    fn find_by_id(&self, donor_id: &str) -> Result<Option<Donor>>;
    /// Donors of one organization, newest first.
    fn list_by_organization(&self, organization_id: &str) -> Result<Vec<Donor>>;
}

/// Trait for donor service operations
#[async_trait]
pub trait DonorServiceTrait: Send + Sync {
    fn get_donors(&self, organization_id: &str) -> Result<Vec<Donor>>;
    fn get_donor(&self, donor_id: &str) -> Result<Donor>;
    async fn create_donor(&self, new_donor: NewDonor) -> Result<Donor>;
    /// Returns the organization's donor with the same email, creating one
    /// when none exists yet.
    async fn find_or_create_donor(&self, new_donor: NewDonor) -> Result<Donor>;
}
