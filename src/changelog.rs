// 📝 Change Log - Field-level audit trail of every merge decision
// Diffs compare raw values; normalization never applies at diff time

use crate::lead::{
    render_text, render_timestamp, Lead, FIELD_ADDRESS, FIELD_EMAIL, FIELD_ENTRY_DATE,
    FIELD_FIRST_NAME, FIELD_ID, FIELD_LAST_NAME,
};
use serde::Serialize;
use std::fmt;

// ============================================================================
// FIELD CHANGE
// ============================================================================

/// One differing field between the discarded and the kept lead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldChange {
    pub field: &'static str,
    pub discarded_value: String,
    pub kept_value: String,
}

/// Field-by-field comparison in the fixed field order. Only differing
/// fields appear; equality is exact on the raw values, so two emails that
/// differ only by case still show up as a change.
pub fn diff(discarded: &Lead, kept: &Lead) -> Vec<FieldChange> {
    let mut changes = Vec::new();

    let mut text_field = |field, d: &Option<String>, k: &Option<String>| {
        if d != k {
            changes.push(FieldChange {
                field,
                discarded_value: render_text(d.as_deref()),
                kept_value: render_text(k.as_deref()),
            });
        }
    };

    text_field(FIELD_ID, &discarded.id, &kept.id);
    text_field(FIELD_EMAIL, &discarded.email, &kept.email);
    text_field(FIELD_FIRST_NAME, &discarded.first_name, &kept.first_name);
    text_field(FIELD_LAST_NAME, &discarded.last_name, &kept.last_name);
    text_field(FIELD_ADDRESS, &discarded.address, &kept.address);

    if discarded.entry_date != kept.entry_date {
        changes.push(FieldChange {
            field: FIELD_ENTRY_DATE,
            discarded_value: render_timestamp(discarded.entry_date.as_ref()),
            kept_value: render_timestamp(kept.entry_date.as_ref()),
        });
    }

    changes
}

// ============================================================================
// CHANGE LOG ENTRY
// ============================================================================

/// Audit record of one merge decision: the lead removed from the survivor
/// set, the lead retained, and the fields that differ between them.
/// Created exactly once per resolved duplicate and never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct ChangeLogEntry {
    pub discarded: Lead,
    pub kept: Lead,
    pub field_changes: Vec<FieldChange>,
}

impl ChangeLogEntry {
    pub fn new(discarded: Lead, kept: Lead) -> Self {
        let field_changes = diff(&discarded, &kept);
        ChangeLogEntry {
            discarded,
            kept,
            field_changes,
        }
    }
}

impl fmt::Display for ChangeLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nDiscarded record:\n{}", self.discarded)?;
        writeln!(f, "\nKept record:\n{}", self.kept)?;
        writeln!(f, "\nChanged fields:")?;
        for change in &self.field_changes {
            writeln!(
                f,
                "  {} : {}  ➜  {}",
                change.field, change.discarded_value, change.kept_value
            )?;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(id: &str, email: &str, first: &str, last: &str, address: &str, ts: &str) -> Lead {
        Lead {
            id: Some(id.to_string()),
            email: Some(email.to_string()),
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
            address: Some(address.to_string()),
            entry_date: ts.parse().ok(),
        }
    }

    #[test]
    fn diff_lists_only_differing_fields_in_order() {
        let a = lead("abc", "a@x.com", "A", "X", "address1", "2024-05-07T17:30:20Z");
        let b = lead("abc", "b@x.com", "B", "X", "address2", "2024-05-07T17:32:20Z");

        let changes = diff(&a, &b);
        let fields: Vec<&str> = changes.iter().map(|c| c.field).collect();
        assert_eq!(fields, vec!["email", "firstName", "address", "entryDate"]);
    }

    #[test]
    fn diff_of_identical_leads_is_empty() {
        let a = lead("abc", "a@x.com", "A", "X", "address1", "2024-05-07T17:30:20Z");
        assert!(diff(&a, &a.clone()).is_empty());
    }

    #[test]
    fn diff_compares_raw_email_without_normalization() {
        let a = lead("abc", "ABC@x.com", "A", "X", "address1", "2024-05-07T17:30:20Z");
        let b = lead("abc", "abc@x.com", "A", "X", "address1", "2024-05-07T17:30:20Z");

        let changes = diff(&a, &b);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].field, "email");
        assert_eq!(changes[0].discarded_value, "ABC@x.com");
        assert_eq!(changes[0].kept_value, "abc@x.com");
    }

    #[test]
    fn diff_renders_null_for_absent_values() {
        let mut a = lead("abc", "a@x.com", "A", "X", "address1", "2024-05-07T17:30:20Z");
        a.address = None;
        let b = lead("abc", "a@x.com", "A", "X", "address2", "2024-05-07T17:30:20Z");

        let changes = diff(&a, &b);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].discarded_value, "null");
        assert_eq!(changes[0].kept_value, "address2");
    }

    #[test]
    fn entry_display_shows_all_sections() {
        let a = lead("abc", "a@x.com", "A", "X", "address1", "2024-05-07T17:30:20Z");
        let b = lead("abc", "b@x.com", "B", "Y", "address2", "2024-05-07T17:32:20Z");

        let entry = ChangeLogEntry::new(a, b);
        let text = entry.to_string();
        assert!(text.contains("Discarded record:"));
        assert!(text.contains("Kept record:"));
        assert!(text.contains("Changed fields:"));
        assert!(text.contains("email : a@x.com  ➜  b@x.com"));
    }
}
