// 🗂️ Identity Index - Maps both identity keys to the current survivor
// Single map keyed by {Identifier, Email}; values are input positions

use crate::lead::Lead;
use std::collections::HashMap;

// ============================================================================
// IDENTITY KEY
// ============================================================================

/// One of the two identity keys a lead is matched on. The email variant
/// always holds the normalized (trimmed, lower-cased) form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IdentityKey {
    Identifier(String),
    Email(String),
}

fn identifier_key(lead: &Lead) -> Option<IdentityKey> {
    lead.id.clone().map(IdentityKey::Identifier)
}

fn email_key(lead: &Lead) -> Option<IdentityKey> {
    lead.normalized_email().map(IdentityKey::Email)
}

// ============================================================================
// IDENTITY INDEX
// ============================================================================

/// Incrementally built mapping from identity key to the original input
/// position of the lead currently surviving under that key. Owned by a
/// single engine invocation; never shared.
///
/// Invariant: every entry points at a surviving lead. On a merge the loser
/// is removed before the winner is inserted, so a loser's distinct
/// identifier or email key never lingers.
#[derive(Debug, Default)]
pub struct IdentityIndex {
    entries: HashMap<IdentityKey, usize>,
}

impl IdentityIndex {
    pub fn new() -> Self {
        IdentityIndex {
            entries: HashMap::new(),
        }
    }

    /// Look up the surviving position this lead collides with, if any.
    /// The identifier key takes precedence over the email key.
    pub fn probe(&self, lead: &Lead) -> Option<usize> {
        if let Some(key) = identifier_key(lead) {
            if let Some(&position) = self.entries.get(&key) {
                return Some(position);
            }
        }
        if let Some(key) = email_key(lead) {
            if let Some(&position) = self.entries.get(&key) {
                return Some(position);
            }
        }
        None
    }

    /// Point both of the lead's identity keys at its position.
    pub fn insert(&mut self, lead: &Lead, position: usize) {
        if let Some(key) = identifier_key(lead) {
            self.entries.insert(key, position);
        }
        if let Some(key) = email_key(lead) {
            self.entries.insert(key, position);
        }
    }

    /// Drop both of the lead's identity keys. Called on the merge loser
    /// before the winner is inserted; keys the winner shares with the loser
    /// are re-added immediately by the following insert.
    pub fn remove(&mut self, lead: &Lead) {
        if let Some(key) = identifier_key(lead) {
            self.entries.remove(&key);
        }
        if let Some(key) = email_key(lead) {
            self.entries.remove(&key);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Invariant check: every entry must point at a surviving position.
    pub fn verify_entries<F>(&self, is_surviving: F) -> bool
    where
        F: Fn(usize) -> bool,
    {
        self.entries.values().all(|&position| is_surviving(position))
    }
}

// ============================================================================
// TESTS
// ============================================================================
