use async_trait::async_trait;

use super::donations_model::{Donation, GiftReceipt, GiftRequest, NewDonation};
use crate::donors::{Donor, NewDonor};
use crate::errors::Result;

/// Trait for donation repository operations
#[async_trait]
pub trait DonationRepositoryTrait: Send + Sync {
    async fn create(&self, new_donation: NewDonation) -> Result<Donation>;
    /// Records a gift in a single write. When `donor` is given, the
    /// organization's donor with that email is reused or inserted first, and
    /// the donation is linked to it under the donor's stored name. Nothing is
    /// kept if any step fails.
    async fn create_gift(
        &self,
        donor: Option<NewDonor>,
        new_donation: NewDonation,
    ) -> Result<(Option<Donor>, Donation)>;
    /// Donations of one organization, newest first, at most `limit` rows.
    fn list_by_organization(
        &self,
        organization_id: &str,
        limit: Option<i64>,
    ) -> Result<Vec<Donation>>;
}

/// Trait for donation service operations
#[async_trait]
pub trait DonationServiceTrait: Send + Sync {
    async fn record_donation(&self, new_donation: NewDonation) -> Result<Donation>;
    fn get_donations(&self, organization_id: &str, limit: Option<i64>) -> Result<Vec<Donation>>;
    /// Applies the round-up, resolves the donor and records the gift.
    async fn submit_gift(&self, organization_id: &str, request: GiftRequest)
        -> Result<GiftReceipt>;
}
