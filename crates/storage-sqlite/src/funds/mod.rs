mod model;
mod repository;

pub use model::FundDB;
pub use repository::FundRepository;
pub(crate) use repository::insert_fund;
