//! Tither Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for the Tither giving platform:
//! the round-up calculator, the donation ledger aggregator and the services
//! that coordinate organizations, funds, donors and donations.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod constants;
pub mod donations;
pub mod donors;
pub mod errors;
pub mod funds;
pub mod ledger;
pub mod organizations;
pub mod roundup;
pub mod utils;

// Re-export the calculation entry points
pub use ledger::{compute_donor_stats, compute_organization_stats};
pub use roundup::calculate_round_up;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

#[cfg(test)]
mod test_support;
