mod model;
mod repository;

pub use model::OrganizationDB;
pub use repository::OrganizationRepository;
