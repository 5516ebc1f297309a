// 🔍 Deduplication Engine - One forward pass over the input batch
// Identity matching on id/email, recency tie-break, field-level audit log

use crate::changelog::ChangeLogEntry;
use crate::index::IdentityIndex;
use crate::lead::Lead;
use crate::validation::{blank_fields, InvalidLeadReport};

// ============================================================================
// DEDUP RESULT
// ============================================================================

/// Everything one engine invocation produces. Survivors, log entries and
/// invalid reports partition the input: no record vanishes silently.
#[derive(Debug, Clone, Default)]
pub struct DedupResult {
    /// Surviving leads; a merge winner replaces the loser at the end of
    /// the list, so order reflects last acceptance
    pub survivors: Vec<Lead>,

    /// One entry per resolved duplicate, in processing order
    pub log: Vec<ChangeLogEntry>,

    /// Records rejected by validation
    pub invalid: Vec<InvalidLeadReport>,
}

// ============================================================================
// MERGE POLICY
// ============================================================================

/// Tie-break between the later-arriving `current` and the incumbent
/// `existing`: a strictly later timestamp wins; equal timestamps fall back
/// to the larger original input position, so the later-arriving record
/// wins. Field values never participate.
fn prefers_current(
    current: &Lead,
    existing: &Lead,
    current_position: usize,
    existing_position: usize,
) -> bool {
    match (current.entry_date, existing.entry_date) {
        (Some(c), Some(e)) => {
            if c > e {
                true
            } else if c == e {
                current_position > existing_position
            } else {
                false
            }
        }
        // validation guarantees both timestamps are present
        _ => false,
    }
}

// ============================================================================
// DEDUPLICATION ENGINE
// ============================================================================

/// Accepted lead plus the input position it arrived at. Positions are
/// ordinals assigned at ingestion and never reused.
#[derive(Debug, Clone)]
struct Survivor {
    position: usize,
    lead: Lead,
}

/// Deduplicates a batch of leads. All matching state (survivor list and
/// identity index) lives inside a single `deduplicate` call; concurrent
/// batches never share an index.
pub struct DeduplicationEngine;

impl DeduplicationEngine {
    pub fn new() -> Self {
        DeduplicationEngine
    }

    /// Process the input once, in order. Each record is normalized,
    /// validated, then either accepted as a new survivor or resolved
    /// against the survivors it collides with. A newcomer can collide on
    /// both keys at once (identifier matching one survivor, email another);
    /// each win re-probes until no collision remains, so no two survivors
    /// ever share an identifier or a normalized email.
    pub fn deduplicate(&self, leads: Vec<Lead>) -> DedupResult {
        let mut survivors: Vec<Survivor> = Vec::new();
        let mut log: Vec<ChangeLogEntry> = Vec::new();
        let mut invalid: Vec<InvalidLeadReport> = Vec::new();
        let mut index = IdentityIndex::new();

        for (position, mut lead) in leads.into_iter().enumerate() {
            lead.normalize();

            let blank = blank_fields(&lead);
            if !blank.is_empty() {
                invalid.push(InvalidLeadReport::new(lead, blank));
                continue;
            }

            // Each iteration removes a survivor or terminates, and a lead
            // carries two identity keys, so this runs at most three times.
            loop {
                let existing_position = match index.probe(&lead) {
                    Some(p) => p,
                    None => {
                        index.insert(&lead, position);
                        survivors.push(Survivor { position, lead });
                        break;
                    }
                };

                // index invariant: every entry points at a surviving lead
                let Some(slot) = survivors
                    .iter()
                    .position(|s| s.position == existing_position)
                else {
                    debug_assert!(
                        false,
                        "identity index entry points at a non-surviving lead"
                    );
                    index.insert(&lead, position);
                    survivors.push(Survivor { position, lead });
                    break;
                };

                if prefers_current(&lead, &survivors[slot].lead, position, existing_position) {
                    let loser = survivors.remove(slot);
                    index.remove(&loser.lead);
                    log.push(ChangeLogEntry::new(loser.lead, lead.clone()));
                    // re-probe: the other identity key may collide with a
                    // different survivor
                } else {
                    // losing newcomer never entered the index
                    log.push(ChangeLogEntry::new(lead, survivors[slot].lead.clone()));
                    break;
                }
            }

            debug_assert!(
                index.verify_entries(|p| survivors.iter().any(|s| s.position == p)),
                "identity index references a non-surviving lead"
            );
        }

        DedupResult {
            survivors: survivors.into_iter().map(|s| s.lead).collect(),
            log,
            invalid,
        }
    }
}

impl Default for DeduplicationEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
