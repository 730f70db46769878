//! Organizations module - tenants that own a giving page, funds, donors and donations.

mod organizations_model;
mod organizations_service;
mod organizations_traits;

pub use organizations_model::{
    is_valid_slug, GivingPageSettings, NewOrganization, OnboardingRequest, Organization,
    OrganizationUpdate,
};
pub use organizations_service::OrganizationService;
pub use organizations_traits::{OrganizationRepositoryTrait, OrganizationServiceTrait};
