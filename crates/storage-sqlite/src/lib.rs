//! SQLite storage implementation for Tither.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `tither-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for organizations, funds, donors and donations
//! - The ledger snapshot reader used for statistics
//!
//! # Architecture
//!
//! This crate is the only place in the workspace where Diesel dependencies exist.
//! Reads run on pooled connections; every write goes through the single
//! writer actor in [`db::write_actor`].
//!
//! ```text
//!   server ──► core (domain, traits)
//!     │            ▲
//!     ▼            │
//!   storage-sqlite (this crate)
//!          │
//!          ▼
//!      SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod donations;
pub mod donors;
pub mod funds;
pub mod ledger;
pub mod organizations;

pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

pub use donations::DonationRepository;
pub use donors::DonorRepository;
pub use funds::FundRepository;
pub use ledger::LedgerRepository;
pub use organizations::OrganizationRepository;

pub use errors::{IntoCore, StorageError};

// Re-export from tither-core for convenience
pub use tither_core::errors::{DatabaseError, Error, Result};
