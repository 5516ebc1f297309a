// ✅ Lead Validation - Reject records with null or blank required fields
// All six fields are required; identity fields are trimmed before checking

use crate::lead::{
    Lead, FIELD_ADDRESS, FIELD_EMAIL, FIELD_ENTRY_DATE, FIELD_FIRST_NAME, FIELD_ID,
    FIELD_LAST_NAME,
};
use serde::Serialize;
use std::fmt;

/// Fixed prefix for every invalid-record message.
pub const INVALID_PREFIX: &str = "Removed record due to null or blank field/fields";

/// Returns the names of all null-or-blank required fields, in the fixed
/// field order. An empty result means the lead is valid. Assumes the lead
/// has already been normalized (identity fields trimmed).
pub fn blank_fields(lead: &Lead) -> Vec<&'static str> {
    let mut blank = Vec::new();
    if is_blank(&lead.id) {
        blank.push(FIELD_ID);
    }
    if is_blank(&lead.email) {
        blank.push(FIELD_EMAIL);
    }
    if is_blank(&lead.first_name) {
        blank.push(FIELD_FIRST_NAME);
    }
    if is_blank(&lead.last_name) {
        blank.push(FIELD_LAST_NAME);
    }
    if is_blank(&lead.address) {
        blank.push(FIELD_ADDRESS);
    }
    if lead.entry_date.is_none() {
        blank.push(FIELD_ENTRY_DATE);
    }
    blank
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |s| s.trim().is_empty())
}

// ============================================================================
// INVALID LEAD REPORT
// ============================================================================

/// A rejected record paired with the fields that failed validation.
/// Invalid leads take no further part in matching.
#[derive(Debug, Clone, Serialize)]
pub struct InvalidLeadReport {
    pub lead: Lead,
    pub blank_fields: Vec<&'static str>,
}

impl InvalidLeadReport {
    pub fn new(lead: Lead, blank_fields: Vec<&'static str>) -> Self {
        InvalidLeadReport { lead, blank_fields }
    }
}

impl fmt::Display for InvalidLeadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            INVALID_PREFIX,
            self.blank_fields.join(", "),
            self.lead
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
