//! Fund domain models.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ENABLED_FUND_COUNT, DEFAULT_FUND_NAMES};
use crate::errors::{Error, Result, ValidationError};

/// A named donation category within an organization, e.g. "Building Fund".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fund {
    pub id: String,
    pub organization_id: String,
    pub name: String,
    pub enabled: bool,
    pub sort_order: i32,
}

fn default_enabled() -> bool {
    true
}

/// Input model for creating a new fund
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFund {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub organization_id: String,
    pub name: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub sort_order: i32,
}

impl NewFund {
    pub fn validate(&self) -> Result<()> {
        if self.organization_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "organizationId".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Fund name cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Partial update of a fund
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FundUpdate {
    pub name: Option<String>,
    pub enabled: Option<bool>,
    pub sort_order: Option<i32>,
}

impl FundUpdate {
    pub fn apply_to(self, fund: &mut Fund) -> Result<()> {
        if let Some(name) = self.name {
            if name.trim().is_empty() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Fund name cannot be empty".to_string(),
                )));
            }
            fund.name = name;
        }
        if let Some(enabled) = self.enabled {
            fund.enabled = enabled;
        }
        if let Some(sort_order) = self.sort_order {
            fund.sort_order = sort_order;
        }
        Ok(())
    }
}

/// The funds every organization starts with.
pub fn default_funds(organization_id: &str) -> Vec<NewFund> {
    DEFAULT_FUND_NAMES
        .iter()
        .enumerate()
        .map(|(position, name)| NewFund {
            id: None,
            organization_id: organization_id.to_string(),
            name: name.to_string(),
            enabled: position < DEFAULT_ENABLED_FUND_COUNT,
            sort_order: position as i32,
        })
        .collect()
}
