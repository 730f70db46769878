//! Database model for donors.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use tither_core::donors::Donor;

#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Eq, Debug, Clone)]
#[diesel(table_name = crate::schema::donors)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DonorDB {
    pub id: String,
    pub organization_id: String,
    pub name: String,
    pub email: Option<String>,
    pub is_anonymous: bool,
    pub created_at: NaiveDateTime,
}

impl From<DonorDB> for Donor {
    fn from(db: DonorDB) -> Self {
        Self {
            id: db.id,
            organization_id: db.organization_id,
            name: db.name,
            email: db.email,
            is_anonymous: db.is_anonymous,
            created_at: db.created_at.and_utc(),
        }
    }
}
