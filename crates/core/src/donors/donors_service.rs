use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::donors_model::{Donor, NewDonor};
use super::donors_traits::{DonorRepositoryTrait, DonorServiceTrait};
use crate::errors::{Error, Result, ValidationError};

pub struct DonorService {
    repository: Arc<dyn DonorRepositoryTrait>,
}

impl DonorService {
    pub fn new(repository: Arc<dyn DonorRepositoryTrait>) -> Self {
        DonorService { repository }
    }
}

#[async_trait]
impl DonorServiceTrait for DonorService {
    fn get_donors(&self, organization_id: &str) -> Result<Vec<Donor>> {
        self.repository.list_by_organization(organization_id)
    }

    fn get_donor(&self, donor_id: &str) -> Result<Donor> {
        self.repository
            .find_by_id(donor_id)?
            .ok_or_else(|| Error::NotFound(format!("Donor {}", donor_id)))
    }

    async fn create_donor(&self, new_donor: NewDonor) -> Result<Donor> {
        let new_donor = new_donor.normalized();
        new_donor.validate()?;
        self.repository.create(new_donor).await
    }

    async fn find_or_create_donor(&self, new_donor: NewDonor) -> Result<Donor> {
        let new_donor = new_donor.normalized();
        new_donor.validate()?;

        if new_donor.email.is_none() {
            return Err(Error::Validation(ValidationError::MissingField(
                "email".to_string(),
            )));
        }

        let donor = self.repository.find_or_create(new_donor).await?;
        debug!("Resolved donor {} for {:?}", donor.id, donor.email);
        Ok(donor)
    }
}
