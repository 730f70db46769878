use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use tither_core::donors::{normalize_email, Donor, DonorRepositoryTrait, NewDonor};
use tither_core::Result;

use super::model::DonorDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::donors;

pub struct DonorRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl DonorRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

fn insert_donor(conn: &mut SqliteConnection, new_donor: NewDonor) -> Result<Donor> {
    let row = DonorDB {
        id: new_donor.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
        organization_id: new_donor.organization_id,
        name: new_donor.name,
        email: new_donor.email.as_deref().map(normalize_email),
        is_anonymous: new_donor.is_anonymous,
        created_at: Utc::now().naive_utc(),
    };
    let inserted = diesel::insert_into(donors::table)
        .values(&row)
        .returning(DonorDB::as_returning())
        .get_result::<DonorDB>(conn)
        .map_err(StorageError::from)?;
    Ok(inserted.into())
}

/// Reuses the organization's donor with the same email, or inserts one.
/// Must run on the writer connection so no other insert slips in between.
pub(crate) fn find_or_insert_donor(
    conn: &mut SqliteConnection,
    new_donor: NewDonor,
) -> Result<Donor> {
    if let Some(email) = new_donor.email.as_deref().map(normalize_email) {
        let existing = donors::table
            .filter(donors::organization_id.eq(&new_donor.organization_id))
            .filter(donors::email.eq(email))
            .select(DonorDB::as_select())
            .first::<DonorDB>(conn)
            .optional()
            .into_core()?;
        if let Some(row) = existing {
            return Ok(row.into());
        }
    }
    insert_donor(conn, new_donor)
}

#[async_trait]
impl DonorRepositoryTrait for DonorRepository {
    async fn create(&self, new_donor: NewDonor) -> Result<Donor> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| insert_donor(conn, new_donor))
            .await
    }

    async fn find_or_create(&self, new_donor: NewDonor) -> Result<Donor> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| find_or_insert_donor(conn, new_donor))
            .await
    }

    fn find_by_id(&self, donor_id: &str) -> Result<Option<Donor>> {
        let mut conn = get_connection(&self.pool)?;
        let row = donors::table
            .find(donor_id)
            .select(DonorDB::as_select())
            .first::<DonorDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(row.map(Donor::from))
    }

    fn list_by_organization(&self, organization_id: &str) -> Result<Vec<Donor>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(load_donors(&mut conn, organization_id)?)
    }
}

/// Donors of one organization, newest first.
pub(crate) fn load_donors(
    conn: &mut SqliteConnection,
    organization_id: &str,
) -> std::result::Result<Vec<Donor>, StorageError> {
    let rows = donors::table
        .filter(donors::organization_id.eq(organization_id))
        .order((donors::created_at.desc(), donors::id.asc()))
        .select(DonorDB::as_select())
        .load::<DonorDB>(conn)?;
    Ok(rows.into_iter().map(Donor::from).collect())
}
