//! Ledger module - organization and donor statistics derived from the
//! recorded donations and donors.

mod ledger_calculator;
mod ledger_model;
mod ledger_service;
mod ledger_traits;

pub use ledger_calculator::{compute_donor_stats, compute_organization_stats, LedgerCalculator};
pub use ledger_model::{DonationStats, DonorStat, DonorStatus, DonorStatusThresholds, LedgerSnapshot};
pub use ledger_service::LedgerService;
pub use ledger_traits::{LedgerRepositoryTrait, LedgerServiceTrait};
