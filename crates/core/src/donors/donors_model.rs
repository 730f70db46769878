//! Donor domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// A known supporter of one organization.
///
/// `is_anonymous` asks that the donor not be named. The stored name and
/// email are kept; masking happens when statistics are read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donor {
    pub id: String,
    pub organization_id: String,
    pub name: String,
    pub email: Option<String>,
    pub is_anonymous: bool,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a new donor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDonor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub organization_id: String,
    pub name: String,
    pub email: Option<String>,
    #[serde(default)]
    pub is_anonymous: bool,
}

impl NewDonor {
    pub fn validate(&self) -> Result<()> {
        if self.organization_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "organizationId".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Donor name cannot be empty".to_string(),
            )));
        }
        if let Some(email) = &self.email {
            if !email.contains('@') {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "'{}' is not a valid email address",
                    email
                ))));
            }
        }
        Ok(())
    }

    /// Trims the name and normalizes the email so lookups by email match.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.email = self
            .email
            .as_deref()
            .map(normalize_email)
            .filter(|e| !e.is_empty());
        self
    }
}

/// Emails are compared case-insensitively and without surrounding whitespace.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
