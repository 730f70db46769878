use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use tither_core::funds::{Fund, NewFund};
use tither_core::organizations::{NewOrganization, Organization, OrganizationRepositoryTrait};
use tither_core::Result;

use super::model::OrganizationDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::funds::insert_fund;
use crate::schema::organizations;

pub struct OrganizationRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl OrganizationRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }

    fn insert(conn: &mut SqliteConnection, new_organization: NewOrganization) -> Result<Organization> {
        let id = new_organization
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let row = OrganizationDB::from_new(id, new_organization)?;

        let inserted = diesel::insert_into(organizations::table)
            .values(&row)
            .returning(OrganizationDB::as_returning())
            .get_result::<OrganizationDB>(conn)
            .map_err(StorageError::from)?;
        Ok(Organization::try_from(inserted)?)
    }

    fn to_domain(rows: Vec<OrganizationDB>) -> Result<Vec<Organization>> {
        rows.into_iter()
            .map(|row| Organization::try_from(row).map_err(Into::into))
            .collect()
    }
}

#[async_trait]
impl OrganizationRepositoryTrait for OrganizationRepository {
    async fn create(&self, new_organization: NewOrganization) -> Result<Organization> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| Self::insert(conn, new_organization))
            .await
    }

    async fn create_with_funds(
        &self,
        new_organization: NewOrganization,
        new_funds: Vec<NewFund>,
    ) -> Result<(Organization, Vec<Fund>)> {
        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> Result<(Organization, Vec<Fund>)> {
                    let organization = Self::insert(conn, new_organization)?;
                    let funds = new_funds
                        .into_iter()
                        .map(|new_fund| {
                            insert_fund(
                                conn,
                                NewFund {
                                    organization_id: organization.id.clone(),
                                    ..new_fund
                                },
                            )
                        })
                        .collect::<Result<Vec<Fund>>>()?;
                    Ok((organization, funds))
                },
            )
            .await
    }

    async fn update(&self, organization: Organization) -> Result<Organization> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Organization> {
                let row = OrganizationDB::try_from(organization)?;
                let updated = diesel::update(organizations::table.find(row.id.clone()))
                    .set(&row)
                    .returning(OrganizationDB::as_returning())
                    .get_result::<OrganizationDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Organization::try_from(updated)?)
            })
            .await
    }

    fn find_by_id(&self, organization_id: &str) -> Result<Option<Organization>> {
        let mut conn = get_connection(&self.pool)?;
        let row = organizations::table
            .find(organization_id)
            .select(OrganizationDB::as_select())
            .first::<OrganizationDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Organization::try_from).transpose()?)
    }

    fn find_by_slug(&self, slug: &str) -> Result<Option<Organization>> {
        let mut conn = get_connection(&self.pool)?;
        let row = organizations::table
            .filter(organizations::slug.eq(slug))
            .select(OrganizationDB::as_select())
            .first::<OrganizationDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Organization::try_from).transpose()?)
    }

    fn find_first(&self) -> Result<Option<Organization>> {
        let mut conn = get_connection(&self.pool)?;
        let row = organizations::table
            .order((organizations::created_at.asc(), organizations::id.asc()))
            .select(OrganizationDB::as_select())
            .first::<OrganizationDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Organization::try_from).transpose()?)
    }

    fn list(&self, onboarding_complete: Option<bool>) -> Result<Vec<Organization>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = organizations::table
            .select(OrganizationDB::as_select())
            .order(organizations::name.asc())
            .into_boxed();
        if let Some(flag) = onboarding_complete {
            query = query.filter(organizations::onboarding_complete.eq(flag));
        }
        let rows = query.load::<OrganizationDB>(&mut conn).map_err(StorageError::from)?;
        Self::to_domain(rows)
    }
}
