//! Organization domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::roundup::RoundUpOption;

/// Customization of an organization's public giving page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GivingPageSettings {
    pub cover_image_url: Option<String>,
    pub suggested_amounts: Vec<Decimal>,
    pub button_text: String,
    pub thank_you_message: String,
    pub enable_recurring: bool,
    pub enable_anonymous: bool,
    pub button_style: String,
    pub background_pattern: String,
    pub show_goal_meter: bool,
    pub goal_amount: Option<Decimal>,
    pub accent_color: String,
    pub enable_round_up: bool,
    pub round_up_options: Vec<RoundUpOption>,
}

impl Default for GivingPageSettings {
    fn default() -> Self {
        Self {
            cover_image_url: None,
            suggested_amounts: vec![dec!(25), dec!(50), dec!(100), dec!(250)],
            button_text: "Give Now".to_string(),
            thank_you_message:
                "Thank you for your generous gift! Your support makes a difference.".to_string(),
            enable_recurring: true,
            enable_anonymous: true,
            button_style: "rounded".to_string(),
            background_pattern: "none".to_string(),
            show_goal_meter: false,
            goal_amount: None,
            accent_color: "#f59e0b".to_string(),
            enable_round_up: true,
            round_up_options: RoundUpOption::ALL.to_vec(),
        }
    }
}

impl GivingPageSettings {
    pub fn validate(&self) -> Result<()> {
        if self.suggested_amounts.iter().any(|a| *a <= Decimal::ZERO) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Suggested amounts must be greater than zero".to_string(),
            )));
        }
        if matches!(self.goal_amount, Some(goal) if goal <= Decimal::ZERO) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Goal amount must be greater than zero".to_string(),
            )));
        }
        Ok(())
    }

    /// True when `option` may be applied to gifts on this page.
    pub fn offers_round_up(&self, option: RoundUpOption) -> bool {
        self.enable_round_up && self.round_up_options.contains(&option)
    }
}

/// Domain model representing an organization (tenant).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
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
    #[serde(flatten)]
    pub giving_page: GivingPageSettings,
    pub created_at: DateTime<Utc>,
}

pub const DEFAULT_PRIMARY_COLOR: &str = "#7c3aed";

fn default_primary_color() -> String {
    DEFAULT_PRIMARY_COLOR.to_string()
}

/// Input model for creating a new organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrganization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub org_type: Option<String>,
    pub address: Option<String>,
    pub ein: Option<String>,
    pub slug: String,
    pub about_text: Option<String>,
    pub logo_url: Option<String>,
    #[serde(default = "default_primary_color")]
    pub primary_color: String,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub bank_connected: bool,
    #[serde(default)]
    pub onboarding_complete: bool,
    #[serde(flatten)]
    pub giving_page: GivingPageSettings,
}

impl NewOrganization {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            org_type: None,
            address: None,
            ein: None,
            slug: slug.into(),
            about_text: None,
            logo_url: None,
            primary_color: default_primary_color(),
            is_verified: false,
            bank_connected: false,
            onboarding_complete: false,
            giving_page: GivingPageSettings::default(),
        }
    }

    /// Validates the new organization data.
    pub fn validate(&self) -> Result<()> {
        validate_name_and_slug(&self.name, &self.slug)?;
        self.giving_page.validate()
    }
}

fn validate_name_and_slug(name: &str, slug: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Organization name cannot be empty".to_string(),
        )));
    }
    if !is_valid_slug(slug) {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Slug '{}' must be lowercase letters, digits and hyphens",
            slug
        ))));
    }
    Ok(())
}

/// A slug is non-empty, lowercase ASCII letters, digits and inner hyphens.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Payload of the onboarding wizard's final step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub org_type: Option<String>,
    pub address: Option<String>,
    pub ein: Option<String>,
    pub slug: String,
}

impl From<OnboardingRequest> for NewOrganization {
    fn from(request: OnboardingRequest) -> Self {
        let about_text = format!(
            "Welcome to {}. Your generous gifts support our programs, outreach, and facilities.",
            request.name
        );
        let mut organization = NewOrganization::new(request.name, request.slug);
        organization.org_type = request.org_type;
        organization.address = request.address;
        organization.ein = request.ein;
        organization.about_text = Some(about_text);
        organization.is_verified = true;
        organization.bank_connected = true;
        organization.onboarding_complete = true;
        organization
    }
}

/// Partial update of an organization. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganizationUpdate {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub org_type: Option<String>,
    pub address: Option<String>,
    pub ein: Option<String>,
    pub slug: Option<String>,
    pub about_text: Option<String>,
    pub logo_url: Option<String>,
    pub primary_color: Option<String>,
    pub is_verified: Option<bool>,
    pub bank_connected: Option<bool>,
    pub onboarding_complete: Option<bool>,
    pub cover_image_url: Option<String>,
    pub suggested_amounts: Option<Vec<Decimal>>,
    pub button_text: Option<String>,
    pub thank_you_message: Option<String>,
    pub enable_recurring: Option<bool>,
    pub enable_anonymous: Option<bool>,
    pub button_style: Option<String>,
    pub background_pattern: Option<String>,
    pub show_goal_meter: Option<bool>,
    pub goal_amount: Option<Decimal>,
    pub accent_color: Option<String>,
    pub enable_round_up: Option<bool>,
    pub round_up_options: Option<Vec<RoundUpOption>>,
}

impl OrganizationUpdate {
    /// Applies the present fields onto `organization` and validates the result.
    pub fn apply_to(self, organization: &mut Organization) -> Result<()> {
        macro_rules! set {
            ($target:expr, $value:expr) => {
                if let Some(value) = $value {
                    $target = value;
                }
            };
        }
        macro_rules! set_some {
            ($target:expr, $value:expr) => {
                if let Some(value) = $value {
                    $target = Some(value);
                }
            };
        }

        set!(organization.name, self.name);
        set_some!(organization.org_type, self.org_type);
        set_some!(organization.address, self.address);
        set_some!(organization.ein, self.ein);
        set!(organization.slug, self.slug);
        set_some!(organization.about_text, self.about_text);
        set_some!(organization.logo_url, self.logo_url);
        set!(organization.primary_color, self.primary_color);
        set!(organization.is_verified, self.is_verified);
        set!(organization.bank_connected, self.bank_connected);
        set!(organization.onboarding_complete, self.onboarding_complete);

        let page = &mut organization.giving_page;
        set_some!(page.cover_image_url, self.cover_image_url);
        set!(page.suggested_amounts, self.suggested_amounts);
        set!(page.button_text, self.button_text);
        set!(page.thank_you_message, self.thank_you_message);
        set!(page.enable_recurring, self.enable_recurring);
        set!(page.enable_anonymous, self.enable_anonymous);
        set!(page.button_style, self.button_style);
        set!(page.background_pattern, self.background_pattern);
        set!(page.show_goal_meter, self.show_goal_meter);
        set_some!(page.goal_amount, self.goal_amount);
        set!(page.accent_color, self.accent_color);
        set!(page.enable_round_up, self.enable_round_up);
        set!(page.round_up_options, self.round_up_options);

        validate_name_and_slug(&organization.name, &organization.slug)?;
        organization.giving_page.validate()
    }
}
