mod model;
mod repository;

pub use model::DonationDB;
pub use repository::DonationRepository;
pub(crate) use repository::load_donations;
