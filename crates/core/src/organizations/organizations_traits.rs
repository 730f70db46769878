//! Organization repository and service traits.
//!
//! These traits define the contract for organization operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::organizations_model::{NewOrganization, OnboardingRequest, Organization, OrganizationUpdate};
use crate::errors::Result;
use crate::funds::{Fund, NewFund};

/// Trait defining the contract for Organization repository operations.
#[async_trait]
pub trait OrganizationRepositoryTrait: Send + Sync {
    /// Creates a new organization. Fails with a unique violation when the
    /// slug is already taken.
    async fn create(&self, new_organization: NewOrganization) -> Result<Organization>;

    /// Creates an organization together with its funds in one write. Each
    /// fund's `organization_id` is replaced with the new organization's id.
    async fn create_with_funds(
        &self,
        new_organization: NewOrganization,
        new_funds: Vec<NewFund>,
    ) -> Result<(Organization, Vec<Fund>)>;

    /// Persists every field of `organization`, keyed by its id.
    async fn update(&self, organization: Organization) -> Result<Organization>;

    fn find_by_id(&self, organization_id: &str) -> Result<Option<Organization>>;

    fn find_by_slug(&self, slug: &str) -> Result<Option<Organization>>;

    /// Returns the oldest organization, if any exists.
    fn find_first(&self) -> Result<Option<Organization>>;

    /// Lists organizations, optionally filtered by onboarding state.
    fn list(&self, onboarding_complete: Option<bool>) -> Result<Vec<Organization>>;
}

/// Trait defining the contract for Organization service operations.
#[async_trait]
pub trait OrganizationServiceTrait: Send + Sync {
    fn get_organization(&self, organization_id: &str) -> Result<Organization>;

    fn get_organization_by_slug(&self, slug: &str) -> Result<Organization>;

    /// The organization a single-tenant deployment operates on.
    fn get_current_organization(&self) -> Result<Organization>;

    /// Organizations that finished onboarding and are visible to donors.
    fn list_published_organizations(&self) -> Result<Vec<Organization>>;

    /// Creates an organization and seeds its default funds.
    async fn create_organization(&self, new_organization: NewOrganization) -> Result<Organization>;

    /// Creates a verified, onboarded organization from the onboarding wizard.
    async fn complete_onboarding(&self, request: OnboardingRequest) -> Result<Organization>;

    async fn update_organization(
        &self,
        organization_id: &str,
        update: OrganizationUpdate,
    ) -> Result<Organization>;
}
