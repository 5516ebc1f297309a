// 📇 Lead Record - The contact entry being deduplicated
// Two identity keys: "_id" and "email" (email compared case-insensitively)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// FIELD NAMES
// ============================================================================

// Wire-level field names, in the fixed order used by validation and diffing.
pub const FIELD_ID: &str = "_id";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_FIRST_NAME: &str = "firstName";
pub const FIELD_LAST_NAME: &str = "lastName";
pub const FIELD_ADDRESS: &str = "address";
pub const FIELD_ENTRY_DATE: &str = "entryDate";

// ============================================================================
// LEAD
// ============================================================================

/// One lead record. Every field is optional at the wire so that `null` or
/// missing values survive deserialization and reach the validator instead of
/// failing the whole batch. A malformed `entryDate` string is still a
/// deserialization error: the engine only ever sees parsed timestamps or an
/// explicit absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    /// Unique identifier key
    #[serde(rename = "_id", default)]
    pub id: Option<String>,

    /// Unique email key (matched case-insensitively)
    #[serde(default)]
    pub email: Option<String>,

    #[serde(rename = "firstName", default)]
    pub first_name: Option<String>,

    #[serde(rename = "lastName", default)]
    pub last_name: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    /// Timestamp used for recency comparison between duplicates
    #[serde(rename = "entryDate", default)]
    pub entry_date: Option<DateTime<Utc>>,
}

impl Lead {
    /// Trim leading/trailing whitespace on the two identity fields, in place.
    /// Applied once per record before validation.
    pub fn normalize(&mut self) {
        if let Some(id) = &self.id {
            self.id = Some(id.trim().to_string());
        }
        if let Some(email) = &self.email {
            self.email = Some(email.trim().to_string());
        }
    }

    /// The email identity key: trimmed and lower-cased.
    pub fn normalized_email(&self) -> Option<String> {
        self.email.as_ref().map(|e| e.trim().to_lowercase())
    }
}

/// Renders `null` for absent values; timestamps in RFC 3339.
pub(crate) fn render_text(value: Option<&str>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "null".to_string(),
    }
}

pub(crate) fn render_timestamp(value: Option<&DateTime<Utc>>) -> String {
    match value {
        Some(ts) => ts.to_rfc3339(),
        None => "null".to_string(),
    }
}

impl fmt::Display for Lead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lead{{id='{}', email='{}', firstName='{}', lastName='{}', address='{}', entryDate={}}}",
            render_text(self.id.as_deref()),
            render_text(self.email.as_deref()),
            render_text(self.first_name.as_deref()),
            render_text(self.last_name.as_deref()),
            render_text(self.address.as_deref()),
            render_timestamp(self.entry_date.as_ref()),
        )
    }
}

// ============================================================================
// LEAD BATCH
// ============================================================================

/// The `{ "leads": [...] }` envelope used for both input and pretty output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeadBatch {
    #[serde(default)]
    pub leads: Vec<Lead>,
}

// ============================================================================
// TESTS
// ============================================================================
