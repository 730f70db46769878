use std::sync::Arc;

use diesel::prelude::*;
use diesel::SqliteConnection;

use tither_core::ledger::{LedgerRepositoryTrait, LedgerSnapshot};
use tither_core::Result;

use crate::db::{get_connection, DbPool};
use crate::donations::load_donations;
use crate::donors::load_donors;
use crate::errors::StorageError;
use crate::schema::organizations;

/// Reads ledger snapshots on pooled connections. Each snapshot is read in
/// one transaction so donations and donors never come from different
/// points in time.
pub struct LedgerRepository {
    pool: Arc<DbPool>,
}

impl LedgerRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl LedgerRepositoryTrait for LedgerRepository {
    fn load_snapshot(&self, organization_id: &str) -> Result<Option<LedgerSnapshot>> {
        let mut pooled = get_connection(&self.pool)?;
        let conn: &mut SqliteConnection = &mut pooled;
        let snapshot = conn.transaction::<_, StorageError, _>(
            |c: &mut SqliteConnection| {
                let exists: i64 = organizations::table
                    .filter(organizations::id.eq(organization_id))
                    .count()
                    .get_result(c)?;
                if exists == 0 {
                    return Ok(None);
                }
                Ok(Some(LedgerSnapshot {
                    donations: load_donations(c, organization_id, None)?,
                    donors: load_donors(c, organization_id)?,
                }))
            },
        )?;
        Ok(snapshot)
    }
}
