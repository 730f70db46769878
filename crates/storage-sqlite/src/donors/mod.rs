mod model;
mod repository;

pub use model::DonorDB;
pub use repository::DonorRepository;
pub(crate) use repository::{find_or_insert_donor, load_donors};
