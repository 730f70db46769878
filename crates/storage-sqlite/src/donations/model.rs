//! Database model for donations.

use std::str::FromStr;

use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;

use crate::errors::StorageError;
use tither_core::donations::Donation;

/// Amounts are persisted as decimal text so no precision is lost.
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Eq, Debug, Clone)]
#[diesel(table_name = crate::schema::donations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DonationDB {
    pub id: String,
    pub organization_id: String,
    pub donor_id: Option<String>,
    pub fund_id: Option<String>,
    pub amount: String,
    pub fund_name: Option<String>,
    pub donor_name: Option<String>,
    pub is_anonymous: bool,
    pub created_at: NaiveDateTime,
}

impl TryFrom<DonationDB> for Donation {
    type Error = StorageError;

    fn try_from(db: DonationDB) -> Result<Self, Self::Error> {
        Ok(Self {
            amount: Decimal::from_str(&db.amount)?,
            id: db.id,
            organization_id: db.organization_id,
            donor_id: db.donor_id,
            fund_id: db.fund_id,
            fund_name: db.fund_name,
            donor_name: db.donor_name,
            is_anonymous: db.is_anonymous,
            created_at: db.created_at.and_utc(),
        })
    }
}
