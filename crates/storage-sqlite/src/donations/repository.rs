use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use tither_core::donations::{Donation, DonationRepositoryTrait, NewDonation};
use tither_core::donors::{Donor, NewDonor};
use tither_core::Result;

use super::model::DonationDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::donors::find_or_insert_donor;
use crate::errors::StorageError;
use crate::schema::donations;

pub struct DonationRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl DonationRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

fn insert_donation(conn: &mut SqliteConnection, new_donation: NewDonation) -> Result<Donation> {
    let created_at = new_donation.created_at.unwrap_or_else(Utc::now);
    let row = DonationDB {
        id: new_donation.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
        organization_id: new_donation.organization_id,
        donor_id: new_donation.donor_id,
        fund_id: new_donation.fund_id,
        amount: new_donation.amount.to_string(),
        fund_name: new_donation.fund_name,
        donor_name: new_donation.donor_name,
        is_anonymous: new_donation.is_anonymous,
        created_at: created_at.naive_utc(),
    };
    let inserted = diesel::insert_into(donations::table)
        .values(&row)
        .returning(DonationDB::as_returning())
        .get_result::<DonationDB>(conn)
        .map_err(StorageError::from)?;
    Ok(Donation::try_from(inserted)?)
}

#[async_trait]
impl DonationRepositoryTrait for DonationRepository {
    async fn create(&self, new_donation: NewDonation) -> Result<Donation> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| insert_donation(conn, new_donation))
            .await
    }

    async fn create_gift(
        &self,
        donor: Option<NewDonor>,
        mut new_donation: NewDonation,
    ) -> Result<(Option<Donor>, Donation)> {
        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> Result<(Option<Donor>, Donation)> {
                    let donor = donor
                        .map(|new_donor| find_or_insert_donor(conn, new_donor))
                        .transpose()?;
                    if let Some(donor) = &donor {
                        new_donation.donor_id = Some(donor.id.clone());
                        new_donation.donor_name = Some(donor.name.clone());
                    }
                    let donation = insert_donation(conn, new_donation)?;
                    Ok((donor, donation))
                },
            )
            .await
    }

    fn list_by_organization(
        &self,
        organization_id: &str,
        limit: Option<i64>,
    ) -> Result<Vec<Donation>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(load_donations(&mut conn, organization_id, limit)?)
    }
}

/// Donations of one organization, newest first.
pub(crate) fn load_donations(
    conn: &mut SqliteConnection,
    organization_id: &str,
    limit: Option<i64>,
) -> std::result::Result<Vec<Donation>, StorageError> {
    let mut query = donations::table
        .filter(donations::organization_id.eq(organization_id))
        .order((donations::created_at.desc(), donations::id.asc()))
        .select(DonationDB::as_select())
        .into_boxed();
    if let Some(limit) = limit {
        query = query.limit(limit);
    }
    query
        .load::<DonationDB>(conn)?
        .into_iter()
        .map(Donation::try_from)
        .collect()
}
