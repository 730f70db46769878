use async_trait::async_trait;

use super::funds_model::{Fund, FundUpdate, NewFund};
use crate::errors::Result;

/// Trait for fund repository operations
#[async_trait]
pub trait FundRepositoryTrait: Send + Sync {
    async fn create(&self, new_fund: NewFund) -> Result<Fund>;
    async fn update(&self, fund: Fund) -> Result<Fund>;
    async fn delete(&self, fund_id: &str) -> Result<usize>;
    fn find_by_id(&self, fund_id: &str) -> Result<Option<Fund>>;
    /// Funds of one organization ordered by ascending sort order.
    fn list_by_organization(&self, organization_id: &str) -> Result<Vec<Fund>>;
}

/// Trait for fund service operations
#[async_trait]
pub trait FundServiceTrait: Send + Sync {
    fn get_funds(&self, organization_id: &str) -> Result<Vec<Fund>>;
    fn get_fund(&self, fund_id: &str) -> Result<Fund>;
    async fn create_fund(&self, new_fund: NewFund) -> Result<Fund>;
    async fn update_fund(&self, fund_id: &str, update: FundUpdate) -> Result<Fund>;
    async fn delete_fund(&self, fund_id: &str) -> Result<()>;
}
