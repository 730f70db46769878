//! Funds module - named giving categories within an organization.

mod funds_model;
mod funds_service;
mod funds_traits;

pub use funds_model::{default_funds, Fund, FundUpdate, NewFund};
pub use funds_service::FundService;
pub use funds_traits::{FundRepositoryTrait, FundServiceTrait};
