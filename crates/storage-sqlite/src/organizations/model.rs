//! Database model for organizations.

use std::str::FromStr;

use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;

use crate::errors::StorageError;
use tither_core::organizations::{GivingPageSettings, NewOrganization, Organization};
use tither_core::roundup::RoundUpOption;

/// Database model for organizations. Giving page settings are flattened
/// into columns; list-valued settings are stored as JSON text.
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone,
)]
#[diesel(table_name = crate::schema::organizations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct OrganizationDB {
    pub id: String,
    pub name: String,
    pub org_type: Option<String>,
    pub address: Option<String>,
    pub ein: Option<String>,
    pub slug: String,
    pub about_text: Option<String>,
    pub logo_url: Option<String>,
    pub primary_color: String,
    pub is_verified: bool,
    pub bank_connected: bool,
    pub onboarding_complete: bool,
    pub cover_image_url: Option<String>,
    pub suggested_amounts: String,
    pub button_text: String,
    pub thank_you_message: String,
    pub enable_recurring: bool,
    pub enable_anonymous: bool,
    pub button_style: String,
    pub background_pattern: String,
    pub show_goal_meter: bool,
    pub goal_amount: Option<String>,
    pub accent_color: String,
    pub enable_round_up: bool,
    pub round_up_options: String,
    pub created_at: NaiveDateTime,
}

impl OrganizationDB {
    /// Builds the row for a new organization with the given id.
    pub fn from_new(id: String, domain: NewOrganization) -> Result<Self, StorageError> {
        let organization = Organization {
            id,
            name: domain.name,
            org_type: domain.org_type,
            address: domain.address,
            ein: domain.ein,
            slug: domain.slug,
            about_text: domain.about_text,
            logo_url: domain.logo_url,
            primary_color: domain.primary_color,
            is_verified: domain.is_verified,
            bank_connected: domain.bank_connected,
            onboarding_complete: domain.onboarding_complete,
            giving_page: domain.giving_page,
            created_at: Utc::now(),
        };
        Self::try_from(organization)
    }
}

impl TryFrom<Organization> for OrganizationDB {
    type Error = StorageError;

    fn try_from(domain: Organization) -> Result<Self, Self::Error> {
        let page = domain.giving_page;
        Ok(Self {
            id: domain.id,
            name: domain.name,
            org_type: domain.org_type,
            address: domain.address,
            ein: domain.ein,
            slug: domain.slug,
            about_text: domain.about_text,
            logo_url: domain.logo_url,
            primary_color: domain.primary_color,
            is_verified: domain.is_verified,
            bank_connected: domain.bank_connected,
            onboarding_complete: domain.onboarding_complete,
            cover_image_url: page.cover_image_url,
            suggested_amounts: serde_json::to_string(&page.suggested_amounts)?,
            button_text: page.button_text,
            thank_you_message: page.thank_you_message,
            enable_recurring: page.enable_recurring,
            enable_anonymous: page.enable_anonymous,
            button_style: page.button_style,
            background_pattern: page.background_pattern,
            show_goal_meter: page.show_goal_meter,
            goal_amount: page.goal_amount.map(|g| g.to_string()),
            accent_color: page.accent_color,
            enable_round_up: page.enable_round_up,
            round_up_options: serde_json::to_string(&page.round_up_options)?,
            created_at: domain.created_at.naive_utc(),
        })
    }
}

impl TryFrom<OrganizationDB> for Organization {
    type Error = StorageError;

    fn try_from(db: OrganizationDB) -> Result<Self, Self::Error> {
        let suggested_amounts: Vec<Decimal> = serde_json::from_str(&db.suggested_amounts)?;
        let round_up_options: Vec<RoundUpOption> = serde_json::from_str(&db.round_up_options)?;
        let goal_amount = db
            .goal_amount
            .as_deref()
            .map(Decimal::from_str)
            .transpose()?;

        Ok(Self {
            id: db.id,
            name: db.name,
            org_type: db.org_type,
            address: db.address,
            ein: db.ein,
            slug: db.slug,
            about_text: db.about_text,
            logo_url: db.logo_url,
            primary_color: db.primary_color,
            is_verified: db.is_verified,
            bank_connected: db.bank_connected,
            onboarding_complete: db.onboarding_complete,
            giving_page: GivingPageSettings {
                cover_image_url: db.cover_image_url,
                suggested_amounts,
                button_text: db.button_text,
                thank_you_message: db.thank_you_message,
                enable_recurring: db.enable_recurring,
                enable_anonymous: db.enable_anonymous,
                button_style: db.button_style,
                background_pattern: db.background_pattern,
                show_goal_meter: db.show_goal_meter,
                goal_amount,
                accent_color: db.accent_color,
                enable_round_up: db.enable_round_up,
                round_up_options,
            },
            created_at: db.created_at.and_utc(),
        })
    }
}
