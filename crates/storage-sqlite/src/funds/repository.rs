use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use tither_core::funds::{Fund, FundRepositoryTrait, NewFund};
use tither_core::Result;

use super::model::FundDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::funds;

pub struct FundRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl FundRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

pub(crate) fn insert_fund(conn: &mut SqliteConnection, new_fund: NewFund) -> Result<Fund> {
    let mut row: FundDB = new_fund.into();
    if row.id.is_empty() {
        row.id = Uuid::new_v4().to_string();
    }
    let inserted = diesel::insert_into(funds::table)
        .values(&row)
        .returning(FundDB::as_returning())
        .get_result::<FundDB>(conn)
        .map_err(StorageError::from)?;
    Ok(inserted.into())
}

#[async_trait]
impl FundRepositoryTrait for FundRepository {
    async fn create(&self, new_fund: NewFund) -> Result<Fund> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| insert_fund(conn, new_fund))
            .await
    }

    async fn update(&self, fund: Fund) -> Result<Fund> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Fund> {
                let row: FundDB = fund.into();
                let updated = diesel::update(funds::table.find(row.id.clone()))
                    .set(&row)
                    .returning(FundDB::as_returning())
                    .get_result::<FundDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(updated.into())
            })
            .await
    }

    async fn delete(&self, fund_id: &str) -> Result<usize> {
        let fund_id = fund_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(funds::table.find(fund_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }

    fn find_by_id(&self, fund_id: &str) -> Result<Option<Fund>> {
        let mut conn = get_connection(&self.pool)?;
        let row = funds::table
            .find(fund_id)
            .select(FundDB::as_select())
            .first::<FundDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(row.map(Fund::from))
    }

    fn list_by_organization(&self, organization_id: &str) -> Result<Vec<Fund>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = funds::table
            .filter(funds::organization_id.eq(organization_id))
            .order((funds::sort_order.asc(), funds::name.asc()))
            .select(FundDB::as_select())
            .load::<FundDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Fund::from).collect())
    }
}
