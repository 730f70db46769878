//! Database model for funds.

use diesel::prelude::*;

use tither_core::funds::{Fund, NewFund};

#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Eq, Debug, Clone,
)]
#[diesel(table_name = crate::schema::funds)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct FundDB {
    pub id: String,
    pub organization_id: String,
    pub name: String,
    pub enabled: bool,
    pub sort_order: i32,
}

impl From<FundDB> for Fund {
    fn from(db: FundDB) -> Self {
        Self {
            id: db.id,
            organization_id: db.organization_id,
            name: db.name,
            enabled: db.enabled,
            sort_order: db.sort_order,
        }
    }
}

impl From<Fund> for FundDB {
    fn from(domain: Fund) -> Self {
        Self {
            id: domain.id,
            organization_id: domain.organization_id,
            name: domain.name,
            enabled: domain.enabled,
            sort_order: domain.sort_order,
        }
    }
}

impl From<NewFund> for FundDB {
    fn from(domain: NewFund) -> Self {
        Self {
            id: domain.id.unwrap_or_default(),
            organization_id: domain.organization_id,
            name: domain.name.trim().to_string(),
            enabled: domain.enabled,
            sort_order: domain.sort_order,
        }
    }
}
