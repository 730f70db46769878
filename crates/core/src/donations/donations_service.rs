use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use super::donations_model::{validate_gift_amount, Donation, GiftReceipt, GiftRequest, NewDonation};
use super::donations_traits::{DonationRepositoryTrait, DonationServiceTrait};
use crate::constants::ANONYMOUS_DONOR_NAME;
use crate::donors::NewDonor;
use crate::errors::{Error, Result, ValidationError};
use crate::funds::FundRepositoryTrait;
use crate::organizations::{Organization, OrganizationRepositoryTrait};
use crate::roundup::{calculate_round_up, RoundUpConfig};

pub struct DonationService {
    repository: Arc<dyn DonationRepositoryTrait>,
    organization_repository: Arc<dyn OrganizationRepositoryTrait>,
    fund_repository: Arc<dyn FundRepositoryTrait>,
}

impl DonationService {
    pub fn new(
        repository: Arc<dyn DonationRepositoryTrait>,
        organization_repository: Arc<dyn OrganizationRepositoryTrait>,
        fund_repository: Arc<dyn FundRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            organization_repository,
            fund_repository,
        }
    }

    fn resolve_organization(&self, organization_id: &str) -> Result<Organization> {
        self.organization_repository
            .find_by_id(organization_id)?
            .ok_or_else(|| Error::UnknownOrganization(organization_id.to_string()))
    }

    /// The round-up applied to a gift. A request on a page with round-up
    /// switched off is charged the raw amount.
    fn round_up_config(organization: &Organization, request: &GiftRequest) -> Result<RoundUpConfig> {
        let page = &organization.giving_page;
        match request.round_up {
            Some(option) if page.enable_round_up => {
                if !page.offers_round_up(option) {
                    return Err(Error::Validation(ValidationError::InvalidInput(format!(
                        "Round-up option '{}' is not offered by this organization",
                        option
                    ))));
                }
                Ok(option.config())
            }
            _ => Ok(RoundUpConfig::disabled()),
        }
    }

    /// The donor record a named gift is filed under. Anonymous gifts and
    /// gifts without both a name and an email have none.
    fn gift_donor(organization_id: &str, request: &GiftRequest) -> Result<Option<NewDonor>> {
        if request.is_anonymous {
            return Ok(None);
        }
        let name = request.donor_name.as_deref().map(str::trim).unwrap_or("");
        let email = request.donor_email.as_deref().map(str::trim).unwrap_or("");
        if name.is_empty() || email.is_empty() {
            return Ok(None);
        }

        let new_donor = NewDonor {
            id: None,
            organization_id: organization_id.to_string(),
            name: name.to_string(),
            email: Some(email.to_string()),
            is_anonymous: false,
        }
        .normalized();
        new_donor.validate()?;
        Ok(Some(new_donor))
    }
}

#[async_trait]
impl DonationServiceTrait for DonationService {
    async fn record_donation(&self, new_donation: NewDonation) -> Result<Donation> {
        new_donation.validate()?;
        self.resolve_organization(&new_donation.organization_id)?;
        self.repository.create(new_donation).await
    }

    fn get_donations(&self, organization_id: &str, limit: Option<i64>) -> Result<Vec<Donation>> {
        if matches!(limit, Some(l) if l < 0) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "limit must not be negative".to_string(),
            )));
        }
        self.repository.list_by_organization(organization_id, limit)
    }

    async fn submit_gift(
        &self,
        organization_id: &str,
        request: GiftRequest,
    ) -> Result<GiftReceipt> {
        validate_gift_amount(request.amount)?;
        let organization = self.resolve_organization(organization_id)?;

        let fund = self
            .fund_repository
            .find_by_id(&request.fund_id)?
            .filter(|fund| fund.organization_id == organization.id)
            .ok_or_else(|| Error::NotFound(format!("Fund {}", request.fund_id)))?;
        if !fund.enabled {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Fund '{}' is not accepting gifts",
                fund.name
            ))));
        }

        if request.is_anonymous && !organization.giving_page.enable_anonymous {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Anonymous giving is disabled for this organization".to_string(),
            )));
        }

        let config = Self::round_up_config(&organization, &request)?;
        let round_up = calculate_round_up(request.amount, &config)?;
        validate_gift_amount(round_up.final_amount)?;
        let new_donor = Self::gift_donor(&organization.id, &request)?;

        let donor_name = if request.is_anonymous {
            Some(ANONYMOUS_DONOR_NAME.to_string())
        } else {
            request.donor_name.clone()
        };

        let (donor, donation) = self
            .repository
            .create_gift(
                new_donor,
                NewDonation {
                    id: None,
                    organization_id: organization.id.clone(),
                    donor_id: None,
                    fund_id: Some(fund.id.clone()),
                    amount: round_up.final_amount,
                    fund_name: Some(fund.name.clone()),
                    donor_name,
                    is_anonymous: request.is_anonymous,
                    created_at: None,
                },
            )
            .await?;

        debug!(
            "Gift {} round-up {} on {}",
            donation.id, round_up.round_up_amount, round_up.original_amount
        );
        info!(
            "Recorded gift {} of {} to fund '{}' for organization {}",
            donation.id, donation.amount, fund.name, organization.id
        );

        Ok(GiftReceipt {
            donation,
            round_up,
            donor,
            thank_you_message: organization.giving_page.thank_you_message,
        })
    }
}
