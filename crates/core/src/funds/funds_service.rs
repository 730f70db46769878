use std::sync::Arc;

use async_trait::async_trait;
use log::info;

use super::funds_model::{Fund, FundUpdate, NewFund};
use super::funds_traits::{FundRepositoryTrait, FundServiceTrait};
use crate::errors::{Error, Result};

pub struct FundService {
    repository: Arc<dyn FundRepositoryTrait>,
}

impl FundService {
    pub fn new(repository: Arc<dyn FundRepositoryTrait>) -> Self {
        FundService { repository }
    }
}

#[async_trait]
impl FundServiceTrait for FundService {
    fn get_funds(&self, organization_id: &str) -> Result<Vec<Fund>> {
        self.repository.list_by_organization(organization_id)
    }

    fn get_fund(&self, fund_id: &str) -> Result<Fund> {
        self.repository
            .find_by_id(fund_id)?
            .ok_or_else(|| Error::NotFound(format!("Fund {}", fund_id)))
    }

    async fn create_fund(&self, new_fund: NewFund) -> Result<Fund> {
        new_fund.validate()?;
        self.repository.create(new_fund).await
    }

    async fn update_fund(&self, fund_id: &str, update: FundUpdate) -> Result<Fund> {
        let mut fund = self.get_fund(fund_id)?;
        update.apply_to(&mut fund)?;
        self.repository.update(fund).await
    }

    async fn delete_fund(&self, fund_id: &str) -> Result<()> {
        let deleted = self.repository.delete(fund_id).await?;
        if deleted == 0 {
            return Err(Error::NotFound(format!("Fund {}", fund_id)));
        }
        info!("Deleted fund {}", fund_id);
        Ok(())
    }
}
