//! Donors module - known supporters of one organization.

mod donors_model;
mod donors_service;
mod donors_traits;

pub use donors_model::{normalize_email, Donor, NewDonor};
pub use donors_service::DonorService;
pub use donors_traits::{DonorRepositoryTrait, DonorServiceTrait};
