//! Donations module - recorded gifts and the gift submission flow.

mod donations_model;
mod donations_service;
mod donations_traits;

pub use donations_model::{Donation, GiftReceipt, GiftRequest, NewDonation};
pub use donations_service::DonationService;
pub use donations_traits::{DonationRepositoryTrait, DonationServiceTrait};
