use log::{debug, info};
use std::sync::Arc;

use super::organizations_model::{NewOrganization, OnboardingRequest, Organization, OrganizationUpdate};
use super::organizations_traits::{OrganizationRepositoryTrait, OrganizationServiceTrait};
use crate::errors::{Error, Result};
use crate::funds::default_funds;

/// Service for managing organizations
pub struct OrganizationService {
    repository: Arc<dyn OrganizationRepositoryTrait>,
}

impl OrganizationService {
    pub fn new(repository: Arc<dyn OrganizationRepositoryTrait>) -> Self {
        Self { repository }
    }

    async fn create_with_default_funds(
        &self,
        new_organization: NewOrganization,
    ) -> Result<Organization> {
        new_organization.validate()?;

        if self
            .repository
            .find_by_slug(&new_organization.slug)?
            .is_some()
        {
            return Err(Error::ConstraintViolation(format!(
                "Slug '{}' is already in use",
                new_organization.slug
            )));
        }

        let (organization, funds) = self
            .repository
            .create_with_funds(new_organization, default_funds(""))
            .await?;
        info!(
            "Created organization {} ({}) with {} default funds",
            organization.id,
            organization.slug,
            funds.len()
        );
        Ok(organization)
    }
}

#[async_trait::async_trait]
impl OrganizationServiceTrait for OrganizationService {
    fn get_organization(&self, organization_id: &str) -> Result<Organization> {
        self.repository
            .find_by_id(organization_id)?
            .ok_or_else(|| Error::NotFound(format!("Organization {}", organization_id)))
    }

    fn get_organization_by_slug(&self, slug: &str) -> Result<Organization> {
        self.repository
            .find_by_slug(slug)?
            .ok_or_else(|| Error::NotFound(format!("Organization with slug '{}'", slug)))
    }

    fn get_current_organization(&self) -> Result<Organization> {
        self.repository
            .find_first()?
            .ok_or_else(|| Error::NotFound("Organization".to_string()))
    }

    fn list_published_organizations(&self) -> Result<Vec<Organization>> {
        self.repository.list(Some(true))
    }

    async fn create_organization(&self, new_organization: NewOrganization) -> Result<Organization> {
        debug!("Creating organization '{}'", new_organization.name);
        self.create_with_default_funds(new_organization).await
    }

    async fn complete_onboarding(&self, request: OnboardingRequest) -> Result<Organization> {
        debug!("Completing onboarding for '{}'", request.name);
        self.create_with_default_funds(request.into()).await
    }

    async fn update_organization(
        &self,
        organization_id: &str,
        update: OrganizationUpdate,
    ) -> Result<Organization> {
        let mut organization = self.get_organization(organization_id)?;
        let current_slug = organization.slug.clone();
        update.apply_to(&mut organization)?;

        if organization.slug != current_slug {
            if let Some(existing) = self.repository.find_by_slug(&organization.slug)? {
                if existing.id != organization.id {
                    return Err(Error::ConstraintViolation(format!(
                        "Slug '{}' is already in use",
                        organization.slug
                    )));
                }
            }
        }

        self.repository.update(organization).await
    }
}
